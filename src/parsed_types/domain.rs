//! Contains the [`Domain`] type.

use crate::parsed_types::{
    ActionDefinition, MethodDefinition, Name, Objects, PredicateDefinition, TaskDefinition, Types,
};
use serde::{Deserialize, Serialize};

/// The `Domain` type specifies a hierarchical problem domain in which to plan.
///
/// ## Usage
/// This is the top-level type of a domain description. See also
/// [`Problem`](crate::parsed_types::Problem).
///
/// ## Example
/// ```
/// # use htn_grounder::parsed_types::*;
/// let pickup = ActionDefinition::new(
///     Name::new("pickup"),
///     TypedVariables::from_iter([Typed::new_object(Variable::from_str("x"))]),
///     vec![PropCondition::new_atom(Atom::new(Name::new("clear"), vec![Term::variable("x")]))],
///     vec![
///         PropEffect::new_add(Atom::new(Name::new("holding"), vec![Term::variable("x")])),
///         PropEffect::new_delete(Atom::new(Name::new("clear"), vec![Term::variable("x")])),
///     ],
/// );
/// let domain = Domain::builder(Name::new("blocks"), vec![pickup]).with_predicates(vec![
///     PredicateDefinition::new(
///         Name::new("clear"),
///         TypedVariables::from_iter([Typed::new_object(Variable::from_str("x"))]),
///     ),
///     PredicateDefinition::new(
///         Name::new("holding"),
///         TypedVariables::from_iter([Typed::new_object(Variable::from_str("x"))]),
///     ),
/// ]);
///
/// assert_eq!(domain.name(), &Name::new("blocks"));
/// assert_eq!(domain.types().len(), 1);
/// assert_eq!(domain.predicates().len(), 2);
/// assert_eq!(domain.actions().len(), 1);
/// assert!(domain.methods().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// The domain name.
    name: Name,
    /// The optional type declarations.
    #[serde(default)]
    types: Types,
    /// The optional constant declarations.
    #[serde(default)]
    constants: Objects,
    /// The predicate definitions.
    #[serde(default)]
    predicates: Vec<PredicateDefinition>,
    /// The compound task declarations.
    #[serde(default)]
    tasks: Vec<TaskDefinition>,
    /// The action definitions.
    #[serde(default)]
    actions: Vec<ActionDefinition>,
    /// The method definitions.
    #[serde(default)]
    methods: Vec<MethodDefinition>,
}

impl Domain {
    /// Creates a builder to easily construct [`Domain`] instances.
    pub fn builder<T: Into<Vec<ActionDefinition>>>(name: Name, actions: T) -> Self {
        Self {
            name,
            types: Types::default(),
            constants: Objects::default(),
            predicates: Vec::default(),
            tasks: Vec::default(),
            actions: actions.into(),
            methods: Vec::default(),
        }
    }

    /// Adds a list of optional type declarations.
    pub fn with_types<T: Into<Types>>(mut self, types: T) -> Self {
        self.types = types.into();
        self
    }

    /// Adds a list of optional constant declarations.
    pub fn with_constants<C: Into<Objects>>(mut self, constants: C) -> Self {
        self.constants = constants.into();
        self
    }

    /// Adds a list of optional predicate definitions.
    pub fn with_predicates<P: Into<Vec<PredicateDefinition>>>(mut self, predicates: P) -> Self {
        self.predicates = predicates.into();
        self
    }

    /// Adds a list of compound task declarations.
    pub fn with_tasks<T: Into<Vec<TaskDefinition>>>(mut self, tasks: T) -> Self {
        self.tasks = tasks.into();
        self
    }

    /// Adds a list of method definitions.
    pub fn with_methods<M: Into<Vec<MethodDefinition>>>(mut self, methods: M) -> Self {
        self.methods = methods.into();
        self
    }

    /// Gets the domain name.
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the optional type declarations.
    pub const fn types(&self) -> &Types {
        &self.types
    }

    /// Returns the optional constant definitions.
    pub const fn constants(&self) -> &Objects {
        &self.constants
    }

    /// Returns the optional predicate definitions.
    pub const fn predicates(&self) -> &Vec<PredicateDefinition> {
        &self.predicates
    }

    /// Returns the compound task declarations.
    pub const fn tasks(&self) -> &Vec<TaskDefinition> {
        &self.tasks
    }

    /// Returns the action definitions.
    pub const fn actions(&self) -> &Vec<ActionDefinition> {
        &self.actions
    }

    /// Returns the method definitions.
    pub const fn methods(&self) -> &Vec<MethodDefinition> {
        &self.methods
    }
}

impl AsRef<Types> for Domain {
    fn as_ref(&self) -> &Types {
        &self.types
    }
}
