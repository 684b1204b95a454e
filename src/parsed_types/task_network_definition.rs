//! Contains task networks via the [`TaskNetworkDefinition`] type.

use crate::parsed_types::{Atom, Name, Term};
use serde::{Deserialize, Serialize};

/// A subtask of a task network, optionally labelled so that ordering
/// constraints can refer to it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    #[serde(default)]
    id: Option<Name>,
    task: Atom<Term>,
}

impl Subtask {
    pub const fn new(id: Option<Name>, task: Atom<Term>) -> Self {
        Self { id, task }
    }

    pub fn labelled(id: &str, task: Atom<Term>) -> Self {
        Self::new(Some(Name::new(id)), task)
    }

    pub const fn id(&self) -> Option<&Name> {
        self.id.as_ref()
    }

    pub const fn task(&self) -> &Atom<Term> {
        &self.task
    }
}

impl From<Atom<Term>> for Subtask {
    fn from(value: Atom<Term>) -> Self {
        Self::new(None, value)
    }
}

/// A task network: subtasks and `(< a b)` ordering constraints between subtask
/// labels.
///
/// ## Example
/// ```
/// # use htn_grounder::parsed_types::{Atom, Name, Subtask, TaskNetworkDefinition};
/// let tn = TaskNetworkDefinition::ordered(vec![
///     Subtask::labelled("t1", Atom::new(Name::new("a"), vec![])),
///     Subtask::labelled("t2", Atom::new(Name::new("b"), vec![])),
///     Subtask::labelled("t3", Atom::new(Name::new("c"), vec![])),
/// ]);
///
/// assert_eq!(tn.subtasks().len(), 3);
/// assert_eq!(tn.ordering().len(), 2);
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskNetworkDefinition {
    #[serde(default)]
    subtasks: Vec<Subtask>,
    #[serde(default)]
    ordering: Vec<(Name, Name)>,
}

impl TaskNetworkDefinition {
    pub const fn new(subtasks: Vec<Subtask>, ordering: Vec<(Name, Name)>) -> Self {
        Self { subtasks, ordering }
    }

    /// Creates a totally ordered network in which every subtask precedes the
    /// next one. Unlabelled subtasks are labelled by their position.
    pub fn ordered(subtasks: Vec<Subtask>) -> Self {
        let subtasks: Vec<Subtask> = subtasks
            .into_iter()
            .enumerate()
            .map(|(position, subtask)| match subtask.id {
                Some(_) => subtask,
                None => Subtask::new(Some(Name::from(format!("#{}", position))), subtask.task),
            })
            .collect();
        let ordering = subtasks
            .windows(2)
            .filter_map(|pair| Some((*pair[0].id()?, *pair[1].id()?)))
            .collect();
        Self { subtasks, ordering }
    }

    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    pub fn ordering(&self) -> &[(Name, Name)] {
        &self.ordering
    }

    pub fn is_empty(&self) -> bool {
        self.subtasks.is_empty()
    }
}
