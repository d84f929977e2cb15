/// Events emitted while a sweep walks its angle × velocity grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// The grid is about to be evaluated; `angles * velocities` points follow.
    GridStart { angles: usize, velocities: usize },
    /// One grid point was evaluated. Arrives from worker threads in no
    /// particular order.
    PointEvaluated { angle_degrees: f64, reacted: bool },
    GridFinish { evaluated: usize, reacted: usize },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Skips formatting work when nobody is listening.
    pub fn message(&self, build: impl FnOnce() -> String) {
        if self.callback.is_some() {
            self.report(Progress::Message(build()));
        }
    }
}
