//! Breadth first search

use crate::problem::EncodedProblem;
use crate::search::{
    expand,
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Plan, SearchSpace, TfdNode,
};
use std::collections::VecDeque;
use tracing::info;

#[derive(Debug, Default)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Bfs {
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
        let root = search_space.root_id();
        if search_space.node(root).is_goal(problem) {
            return (SearchResult::Success(Plan::empty()), statistics);
        }

        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            if let Some(result) = termination_condition.should_terminate() {
                statistics.finalise_search();
                return (result, statistics);
            }
            statistics.increment_expanded_nodes();

            let successors = expand(problem, search_space.node(id));
            statistics.record_successors(&successors);
            for successor in successors {
                let (child, new) = search_space.insert_or_get(TfdNode::new(
                    successor.state,
                    successor.task_network,
                    id,
                    successor.operator,
                ));
                if !new {
                    statistics.increment_duplicate_nodes();
                    continue;
                }
                statistics.increment_generated_nodes(1);
                if search_space.node(child).is_goal(problem) {
                    statistics.finalise_search();
                    return (
                        SearchResult::Success(search_space.extract_plan(child)),
                        statistics,
                    );
                }
                queue.push_back(child);
            }
        }

        statistics.finalise_search();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::ground;
    use crate::parsed_types::PropCondition;
    use crate::search::validate;
    use crate::test_utils::*;

    fn search(problem: &EncodedProblem) -> SearchResult {
        Bfs::new().search(problem, &mut TerminationCondition::unlimited()).0
    }

    #[test]
    fn finds_shortest_transport_plan() {
        let (domain, problem) = transport();
        let problem = ground(Some(&domain), Some(&problem)).unwrap();
        let SearchResult::Success(plan) = search(&problem) else {
            panic!("transport should be solved");
        };
        assert_eq!(
            plan.to_string(&problem),
            "(drive t1 l1 l2)\n(pick-up t1 p1 l2)\n(drive t1 l2 l3)\n(drop t1 p1 l3)"
        );
        assert_eq!(validate(&plan, &problem), Ok(()));
    }

    #[test]
    fn exhausted_search_space_is_unsolvable() {
        let goal = PropCondition::new_atom(atom("on", vec![]));
        let problem = ground(
            Some(&toggle_domain()),
            Some(&toggle_problem().with_goal(vec![goal])),
        )
        .unwrap();
        assert_eq!(search(&problem), SearchResult::ProvablyUnsolvable);
    }

    #[test]
    fn ungroundable_problem_is_not_searched() {
        let problem = ground(Some(&pickup_domain()), Some(&pickup_problem("b"))).unwrap();
        let (result, statistics) =
            Bfs::new().search(&problem, &mut TerminationCondition::unlimited());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 0);
    }
}
