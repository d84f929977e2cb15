use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ideal Nu-C-LG angle for a collinear backside approach.
pub const BACKSIDE_ATTACK_DEGREES: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionType {
    /// Bimolecular nucleophilic substitution.
    Sn2,
    /// Unimolecular nucleophilic substitution.
    Sn1,
    /// Bimolecular elimination.
    E2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionProfile {
    pub reaction_type: ReactionType,
    pub ideal_approach_angle_degrees: f64,
    pub display_name: &'static str,
}

// SN1 and E2 share the backside angle in this model.
static REACTION_PROFILES: Map<&'static str, ReactionProfile> = phf_map! {
    "SN2" => ReactionProfile {
        reaction_type: ReactionType::Sn2,
        ideal_approach_angle_degrees: BACKSIDE_ATTACK_DEGREES,
        display_name: "Bimolecular nucleophilic substitution",
    },
    "SN1" => ReactionProfile {
        reaction_type: ReactionType::Sn1,
        ideal_approach_angle_degrees: BACKSIDE_ATTACK_DEGREES,
        display_name: "Unimolecular nucleophilic substitution",
    },
    "E2" => ReactionProfile {
        reaction_type: ReactionType::E2,
        ideal_approach_angle_degrees: BACKSIDE_ATTACK_DEGREES,
        display_name: "Bimolecular elimination",
    },
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown reaction type '{0}'. Expected one of 'SN2', 'SN1' or 'E2'.")]
pub struct UnknownReactionType(pub String);

impl ReactionType {
    pub const ALL: [ReactionType; 3] = [ReactionType::Sn2, ReactionType::Sn1, ReactionType::E2];

    pub fn tag(&self) -> &'static str {
        match self {
            ReactionType::Sn2 => "SN2",
            ReactionType::Sn1 => "SN1",
            ReactionType::E2 => "E2",
        }
    }

    pub fn profile(&self) -> ReactionProfile {
        REACTION_PROFILES
            .get(self.tag())
            .copied()
            .unwrap_or(ReactionProfile {
                reaction_type: *self,
                ideal_approach_angle_degrees: BACKSIDE_ATTACK_DEGREES,
                display_name: self.tag(),
            })
    }

    #[inline]
    pub fn ideal_approach_angle_degrees(&self) -> f64 {
        self.profile().ideal_approach_angle_degrees
    }
}

impl FromStr for ReactionType {
    type Err = UnknownReactionType;

    /// Parses an exact reaction tag, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REACTION_PROFILES
            .get(s.trim().to_ascii_uppercase().as_str())
            .map(|profile| profile.reaction_type)
            .ok_or_else(|| UnknownReactionType(s.to_string()))
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
