use crate::search::{NodeId, Plan, TfdNode};
use segvec::{Linear, SegVec};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
    hash::{BuildHasher, RandomState},
};

/// Arena of search nodes. Nodes refer to their parents by [`NodeId`], a node
/// equal to one already stored is not stored again.
pub struct SearchSpace {
    nodes: SegVec<TfdNode, Linear>,
    registered_nodes: HashMap<u64, Vec<NodeId>>,
    node_build_hasher: RandomState,
}

impl SearchSpace {
    pub fn new(root: TfdNode) -> Self {
        let mut search_space = Self {
            nodes: SegVec::new(),
            registered_nodes: HashMap::new(),
            node_build_hasher: RandomState::new(),
        };
        search_space.insert_or_get(root);
        search_space
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Stores the node unless an equal node is already stored. Returns the id
    /// of the stored node and whether it is new.
    pub fn insert_or_get(&mut self, node: TfdNode) -> (NodeId, bool) {
        let hash = self.node_build_hasher.hash_one(&node);
        let bucket = self.registered_nodes.entry(hash).or_default();
        if let Some(&id) = bucket.iter().find(|&&id| self.nodes[id.0] == node) {
            return (id, false);
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        bucket.push(id);
        (id, true)
    }

    pub fn node(&self, id: NodeId) -> &TfdNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Operators on the path from the root to the node.
    pub fn extract_plan(&self, id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current = self.node(id);
        while let (Some(parent), Some(operator)) = (current.parent(), current.operator()) {
            steps.push(operator);
            current = self.node(parent);
        }
        steps.reverse();
        Plan::new(steps)
    }
}

impl Debug for SearchSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("nodes", &self.nodes.len())
            .field("buckets", &self.registered_nodes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{State, TaskNetwork};
    use crate::search::OperatorRef;

    fn state(fluents: &[usize]) -> State {
        State::from_fluents(2, fluents.iter().copied())
    }

    #[test]
    fn duplicates_are_detected() {
        let mut search_space = SearchSpace::new(TfdNode::root(state(&[]), TaskNetwork::default()));
        let root = search_space.root_id();
        let (child, new) = search_space.insert_or_get(TfdNode::new(
            state(&[0]),
            TaskNetwork::default(),
            root,
            OperatorRef::Action(0),
        ));
        assert!(new);
        let (again, new) = search_space.insert_or_get(TfdNode::new(
            state(&[0]),
            TaskNetwork::default(),
            root,
            OperatorRef::Action(1),
        ));
        assert!(!new);
        assert_eq!(again, child);
        assert_eq!(search_space.node(again).operator(), Some(OperatorRef::Action(0)));
        assert_eq!(search_space.len(), 2);
    }

    #[test]
    fn plan_follows_parents() {
        let mut search_space = SearchSpace::new(TfdNode::root(
            state(&[]),
            TaskNetwork::totally_ordered(vec![0]),
        ));
        let root = search_space.root_id();
        let (decomposed, _) = search_space.insert_or_get(TfdNode::new(
            state(&[]),
            TaskNetwork::totally_ordered(vec![1]),
            root,
            OperatorRef::Method(0),
        ));
        let (executed, _) = search_space.insert_or_get(TfdNode::new(
            state(&[1]),
            TaskNetwork::default(),
            decomposed,
            OperatorRef::Action(2),
        ));
        let plan = search_space.extract_plan(executed);
        assert_eq!(
            plan.steps(),
            &[OperatorRef::Method(0), OperatorRef::Action(2)]
        );
        assert!(search_space.extract_plan(root).is_empty());
    }
}
