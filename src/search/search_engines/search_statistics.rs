use crate::search::{OperatorRef, Successor};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of unique nodes generated
    generated_nodes: usize,
    /// Number of generated nodes equal to a node seen before
    duplicate_nodes: usize,
    /// Number of action applications
    generated_actions: usize,
    /// Number of method applications
    generated_decompositions: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            duplicate_nodes: 0,
            generated_actions: 0,
            generated_decompositions: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_duplicate_nodes(&mut self) {
        self.duplicate_nodes += 1;
    }

    /// Counts the action applications and decompositions of an expansion.
    pub fn record_successors(&mut self, successors: &[Successor]) {
        for successor in successors {
            match successor.operator {
                OperatorRef::Action(_) => self.generated_actions += 1,
                OperatorRef::Method(_) => self.generated_decompositions += 1,
            }
        }
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn duplicate_nodes(&self) -> usize {
        self.duplicate_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            duplicate_nodes = self.duplicate_nodes,
            generated_actions = self.generated_actions,
            generated_decompositions = self.generated_decompositions,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
