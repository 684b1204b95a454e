use crate::problem::{EncodedProblem, State, TaskNetwork};
use std::hash::{Hash, Hasher};

/// Index of a node in its [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The operator that produced a node from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorRef {
    /// Index of an action of the encoded problem.
    Action(usize),
    /// Index of a method of the encoded problem.
    Method(usize),
}

impl OperatorRef {
    pub fn to_string(&self, problem: &EncodedProblem) -> String {
        match *self {
            OperatorRef::Action(action) => problem.action_name(action),
            OperatorRef::Method(method) => problem.method_name(method),
        }
    }
}

/// A search node. Cloning copies the state and the task network, the clone
/// shares nothing with the original.
///
/// Two nodes are equal if their states and task networks are, regardless of
/// how they were reached.
#[derive(Debug, Clone)]
pub struct TfdNode {
    state: State,
    task_network: TaskNetwork,
    /// `None` for the root.
    parent: Option<NodeId>,
    /// `None` for the root.
    operator: Option<OperatorRef>,
}

impl TfdNode {
    pub fn root(state: State, task_network: TaskNetwork) -> Self {
        Self {
            state,
            task_network,
            parent: None,
            operator: None,
        }
    }

    pub fn new(
        state: State,
        task_network: TaskNetwork,
        parent: NodeId,
        operator: OperatorRef,
    ) -> Self {
        Self {
            state,
            task_network,
            parent: Some(parent),
            operator: Some(operator),
        }
    }

    /// The root node of a problem: its initial state and initial task
    /// network.
    pub fn initial(problem: &EncodedProblem) -> Self {
        Self::root(
            problem.initial_state().clone(),
            problem.initial_task_network().clone(),
        )
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn task_network(&self) -> &TaskNetwork {
        &self.task_network
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn operator(&self) -> Option<OperatorRef> {
        self.operator
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Every task is accomplished and the state satisfies the goal.
    pub fn is_goal(&self, problem: &EncodedProblem) -> bool {
        self.task_network.is_empty() && problem.goal().is_satisfied(&self.state)
    }
}

impl PartialEq for TfdNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.task_network == other.task_network
    }
}

impl Eq for TfdNode {}

impl Hash for TfdNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
        self.task_network.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasher, RandomState};

    fn node() -> TfdNode {
        TfdNode::root(
            State::from_fluents(3, [0, 2]),
            TaskNetwork::totally_ordered(vec![1, 0]),
        )
    }

    #[test]
    fn equality_ignores_parent_and_operator() {
        let root = node();
        let child = TfdNode::new(
            root.state().clone(),
            root.task_network().clone(),
            NodeId(7),
            OperatorRef::Method(3),
        );
        assert_eq!(root, child);
        let hasher = RandomState::new();
        assert_eq!(hasher.hash_one(&root), hasher.hash_one(&child));

        let other = TfdNode::new(
            State::from_fluents(3, [0]),
            root.task_network().clone(),
            NodeId(7),
            OperatorRef::Method(3),
        );
        assert_ne!(root, other);
    }

    #[test]
    fn clones_do_not_alias() {
        let original = node();
        let mut copy = original.clone();
        copy.state.set_to(1, true);
        copy.task_network = copy.task_network.remove(0);
        assert!(!original.state().holds(1));
        assert_eq!(original.task_network().tasks(), &[1, 0]);
        assert_ne!(original, copy);
        assert!(copy.is_root());
        assert_eq!(copy.operator(), None);
    }
}
