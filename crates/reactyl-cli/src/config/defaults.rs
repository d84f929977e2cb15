use reactyl::core::models::reaction::ReactionType;

pub struct DefaultsConfig {
    pub reaction_type: ReactionType,
    pub activation_energy: f64,
    pub mass_substrate: f64,
    pub mass_nucleophile: f64,
    pub angle_start: f64,
    pub angle_end: f64,
    pub angle_step: f64,
    pub velocity_start: f64,
    pub velocity_end: f64,
    pub velocity_step: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            reaction_type: ReactionType::Sn2,
            activation_energy: 20.0,
            mass_substrate: 10.0,
            mass_nucleophile: 10.0,
            angle_start: 0.0,
            angle_end: 180.0,
            angle_step: 15.0,
            velocity_start: 0.0,
            velocity_end: 500.0,
            velocity_step: 50.0,
        }
    }
}
