use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use reactyl::engine::progress::{Progress, ProgressCallback};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

struct SweepBar {
    bar: ProgressBar,
    reacted: AtomicUsize,
}

/// Terminal view of a feasibility sweep: one bar over the whole grid with a
/// live count of reacting points.
#[derive(Clone)]
pub struct CliProgressHandler {
    inner: Arc<SweepBar>,
}

impl CliProgressHandler {
    /// Draws to stderr unless `quiet`, in which case nothing is drawn but the
    /// counters still advance.
    pub fn new(quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        Self {
            inner: Arc::new(SweepBar {
                bar: ProgressBar::with_draw_target(None, target),
                reacted: AtomicUsize::new(0),
            }),
        }
    }

    /// Reacting points seen since the last `GridStart`.
    pub fn reacted(&self) -> usize {
        self.inner.reacted.load(Ordering::Relaxed)
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let inner = self.inner.clone();
        Box::new(move |progress: Progress| inner.handle(progress))
    }
}

impl SweepBar {
    fn handle(&self, progress: Progress) {
        let bar = &self.bar;
        match progress {
            Progress::PhaseStart { name } => {
                bar.set_style(spinner_style());
                bar.set_message(name);
                bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::GridStart { angles, velocities } => {
                self.reacted.store(0, Ordering::Relaxed);
                bar.disable_steady_tick();
                bar.reset();
                bar.set_length((angles * velocities) as u64);
                bar.set_prefix(format!("{}×{}", angles, velocities));
                bar.set_message("0 reacting");
                bar.set_style(grid_style());
            }
            Progress::PointEvaluated {
                angle_degrees,
                reacted,
            } => {
                let count = if reacted {
                    self.reacted.fetch_add(1, Ordering::Relaxed) + 1
                } else {
                    self.reacted.load(Ordering::Relaxed)
                };
                bar.set_message(format!("θ {:>5.1}°  {} reacting", angle_degrees, count));
                bar.inc(1);
            }
            Progress::GridFinish { evaluated, reacted } => {
                bar.set_position(evaluated as u64);
                bar.finish_with_message(format!("{} of {} points react", reacted, evaluated));
            }
            Progress::Message(msg) => bar.println(format!("  {}", msg)),
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                if !bar.is_finished() {
                    bar.finish_and_clear();
                }
            }
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn grid_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:>9} [{bar:40.cyan/blue}] {pos}/{len} {msg} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}
