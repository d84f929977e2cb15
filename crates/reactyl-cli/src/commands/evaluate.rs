use crate::cli::EvaluateArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use reactyl::core::models::attempt::ReactionAttempt;
use reactyl::engine::detector::{Outcome, ReactionDetector};
use tracing::info;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let config = PartialConfig::load(args.kinetics.config.as_deref())?
        .merge_with_cli(&args.kinetics)?;

    let attempt = ReactionAttempt::for_reaction(
        config.reaction_type,
        args.angle,
        args.velocity,
        (config.mass_a, config.mass_b),
        config.activation_energy,
    );
    info!(
        "Evaluating {} attempt at {:.1} deg, velocity {}",
        config.reaction_type, args.angle, args.velocity
    );
    let outcome = ReactionDetector::new().evaluate(&attempt)?;

    println!("{}", render(&attempt, &outcome));
    Ok(())
}

fn render(attempt: &ReactionAttempt, outcome: &Outcome) -> String {
    let verdict = if outcome.reacted {
        "✓ Reaction occurs"
    } else {
        "✗ No reaction"
    };
    format!(
        "{verdict}\n  \
         angular deviation : {:+.2} deg\n  \
         orientation factor: {:.4}\n  \
         collision energy  : {:.4}\n  \
         effective energy  : {:.4}\n  \
         activation energy : {:.4} (margin {:+.4})",
        attempt.angular_deviation_degrees(),
        outcome.orientation_factor,
        outcome.collision_energy,
        outcome.effective_energy,
        attempt.activation_energy,
        outcome.energy_margin(attempt.activation_energy),
    )
}
