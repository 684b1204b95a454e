use crate::problem::{EncodedProblem, State, TaskNetwork};
use crate::search::{OperatorRef, TfdNode};

/// A child of a node that is not in a search space yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub operator: OperatorRef,
    pub state: State,
    pub task_network: TaskNetwork,
}

/// Generates the children of a node. Every task without a predecessor in the
/// task network is considered. A primitive task is executed by each of its
/// applicable actions, a compound task is replaced by the subtasks of each of
/// its applicable methods.
pub fn expand(problem: &EncodedProblem, node: &TfdNode) -> Vec<Successor> {
    let state = node.state();
    let network = node.task_network();
    let mut successors = vec![];
    for position in network.first_positions() {
        let task = network.tasks()[position];
        if problem.task(task).is_primitive() {
            for &index in problem.resolvers(task) {
                let action = problem.action(index);
                if action.is_applicable(state) {
                    successors.push(Successor {
                        operator: OperatorRef::Action(index),
                        state: action.apply(state),
                        task_network: network.remove(position),
                    });
                }
            }
        } else {
            for &index in problem.resolvers(task) {
                let method = problem.method(index);
                if method.is_applicable(state) {
                    successors.push(Successor {
                        operator: OperatorRef::Method(index),
                        state: state.clone(),
                        task_network: network.decompose(
                            position,
                            method.subtasks(),
                            method.ordering(),
                        ),
                    });
                }
            }
        }
    }
    successors
}
