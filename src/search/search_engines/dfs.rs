//! Depth first search

use crate::problem::EncodedProblem;
use crate::search::{
    expand,
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    SearchSpace, TfdNode,
};
use tracing::info;

/// Depth first search with duplicate detection. Children are explored in
/// the order [`expand`] generates them.
#[derive(Debug, Default)]
pub struct Dfs {}

impl Dfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Dfs {
    fn search(
        &mut self,
        problem: &EncodedProblem,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        if let Err(reason) = problem.check_solvable() {
            info!(%reason, "nothing to search");
            return (SearchResult::ProvablyUnsolvable, statistics);
        }

        let mut search_space = SearchSpace::new(TfdNode::initial(problem));
        let mut stack = vec![search_space.root_id()];
        while let Some(id) = stack.pop() {
            if search_space.node(id).is_goal(problem) {
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_plan(id)),
                    statistics,
                );
            }
            if let Some(result) = termination_condition.should_terminate() {
                statistics.finalise_search();
                return (result, statistics);
            }
            statistics.increment_expanded_nodes();

            let successors = expand(problem, search_space.node(id));
            statistics.record_successors(&successors);
            let mut children = Vec::with_capacity(successors.len());
            for successor in successors {
                let (child, new) = search_space.insert_or_get(TfdNode::new(
                    successor.state,
                    successor.task_network,
                    id,
                    successor.operator,
                ));
                if new {
                    children.push(child);
                } else {
                    statistics.increment_duplicate_nodes();
                }
            }
            statistics.increment_generated_nodes(children.len());
            stack.extend(children.into_iter().rev());
        }

        statistics.finalise_search();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
