use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

const MEMORY_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Time and memory limits of a search, checked by the engines once per
/// expansion. The resident memory is sampled at most once per second.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_memory_sample: Option<Instant>,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
            "search limits"
        );
        Self {
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_memory_sample: None,
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    fn sample_memory(&mut self) {
        if self
            .last_memory_sample
            .is_some_and(|last| last.elapsed() < MEMORY_SAMPLE_INTERVAL)
        {
            return;
        }
        self.last_memory_sample = Some(Instant::now());
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
    }

    pub fn should_terminate(&mut self) -> Option<SearchResult> {
        if self.time_limit.is_some_and(|limit| self.elapsed() > limit) {
            return Some(SearchResult::TimeLimitExceeded);
        }
        let memory_limit_mb = self.memory_limit_mb?;
        self.sample_memory();
        match self.peak_memory_usage_mb {
            Some(peak_usage) if peak_usage > memory_limit_mb => {
                Some(SearchResult::MemoryLimitExceeded)
            }
            _ => None,
        }
    }

    pub fn finalise(&mut self) {
        self.last_memory_sample = None;
        self.sample_memory();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.elapsed().as_secs_f64(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceeded_time_limit_terminates() {
        let mut condition = TerminationCondition::new(Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(
            condition.should_terminate(),
            Some(SearchResult::TimeLimitExceeded)
        );
        assert_eq!(TerminationCondition::unlimited().should_terminate(), None);
    }

    #[test]
    fn generous_memory_limit_does_not_terminate() {
        let mut condition = TerminationCondition::new(None, Some(usize::MAX));
        assert_eq!(condition.should_terminate(), None);
    }
}
