use log::{debug, info};

/// Observer for search progress
///
/// The driver reports one event per fully scanned round and one event when
/// a match is found; implementations decide where the information goes, so
/// the search itself has no output-channel dependency.
pub trait SearchReporter {
    /// A full round was scanned without finding a match
    fn on_round(&self, length: usize, candidates: usize, examined: u64);

    /// A combination summing to the target was found
    fn on_match(&self, target: i64, answer: &[i64], candidates: usize, examined: u64);
}

/// Default reporter forwarding progress to the `log` crate
#[derive(Debug, Default)]
pub struct LogReporter;

impl SearchReporter for LogReporter {
    fn on_round(&self, length: usize, candidates: usize, examined: u64) {
        debug!(
            "No match among {} combinations of length {} ({} candidates examined so far)",
            candidates, length, examined
        );
    }

    fn on_match(&self, target: i64, answer: &[i64], candidates: usize, examined: u64) {
        let check: i64 = answer.iter().sum();
        info!("Candidates examined before the match: {}", examined);
        info!("Answer check: {}", check == target);
        info!(
            "Calculated {} combinations this round; the answer {:?} has {} modifiers",
            candidates,
            answer,
            answer.len()
        );
    }
}
