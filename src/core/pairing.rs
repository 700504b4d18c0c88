use crate::models::InterviewEvent;
use std::collections::HashMap;

/// Aggregated state of every log entry sharing one (interviewer, interviewee) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairStatus {
    pub any_done: bool,
    pub any_scheduled: bool,
}

/// Lookup from ordered identity pairs to their [`PairStatus`], built in one
/// pass so the matrix fill does not rescan the log per cell.
#[derive(Debug, Default)]
pub struct PairingIndex {
    pairs: HashMap<(String, String), PairStatus>,
}

impl PairingIndex {
    pub fn build(events: &[InterviewEvent]) -> Self {
        let mut pairs: HashMap<(String, String), PairStatus> = HashMap::new();

        for ev in events {
            // entries missing either side can never match a roster member
            let (Some(interviewer), Some(interviewee)) = (&ev.interviewer, &ev.interviewee) else {
                continue;
            };

            let status = pairs
                .entry((interviewer.clone(), interviewee.clone()))
                .or_default();
            if ev.done {
                status.any_done = true;
            } else {
                status.any_scheduled = true;
            }
        }

        Self { pairs }
    }

    pub fn lookup(&self, interviewer: Option<&str>, interviewee: Option<&str>) -> PairStatus {
        match (interviewer, interviewee) {
            (Some(a), Some(b)) => self
                .pairs
                .get(&(a.to_string(), b.to_string()))
                .copied()
                .unwrap_or_default(),
            _ => PairStatus::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
