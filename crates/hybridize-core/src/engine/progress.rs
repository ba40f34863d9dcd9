use std::fmt;

/// A pipeline stage that runs once per atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classification,
    Emission,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Classification => "Classifying atoms",
            Stage::Emission => "Emitting structure",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    StageStart { stage: Stage, atoms: u64 },
    AtomDone,
    StageFinish { stage: Stage },

    /// A non-fatal observation worth surfacing to the user (e.g. a dropped bond).
    Notice(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; a reporter without a callback
/// discards them.
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reporter_without_callback_discards_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::AtomDone);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        reporter.report(Progress::StageStart {
            stage: Stage::Classification,
            atoms: 2,
        });
        reporter.report(Progress::AtomDone);
        reporter.report(Progress::StageFinish {
            stage: Stage::Classification,
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0],
            Progress::StageStart {
                stage: Stage::Classification,
                atoms: 2
            }
        );
        assert_eq!(seen[1], Progress::AtomDone);
    }

    #[test]
    fn stage_display_is_human_readable() {
        assert_eq!(Stage::Classification.to_string(), "Classifying atoms");
        assert_eq!(Stage::Emission.to_string(), "Emitting structure");
    }
}
