use crate::encoding::{Expression, GroundLiteral, GroundTask, SmallTuple};
use crate::parsed_types::Name;

/// An action while grounding. Before instantiation the precondition and the
/// effect refer to parameters, afterwards they are ground and
/// [`IntAction::instantiation`] holds the constants bound to the parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntAction {
    name: Name,
    /// The primitive task symbol implemented by this action.
    task: usize,
    /// Type of each parameter.
    parameters: Vec<usize>,
    instantiation: Vec<usize>,
    precondition: Expression,
    effect: Expression,
}

impl IntAction {
    pub fn new(
        name: Name,
        task: usize,
        parameters: Vec<usize>,
        precondition: Expression,
        effect: Expression,
    ) -> Self {
        Self {
            name,
            task,
            parameters,
            instantiation: vec![],
            precondition,
            effect,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn task(&self) -> usize {
        self.task
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameters(&self) -> &[usize] {
        &self.parameters
    }

    pub fn instantiation(&self) -> &[usize] {
        &self.instantiation
    }

    pub fn precondition(&self) -> &Expression {
        &self.precondition
    }

    pub fn set_precondition(&mut self, precondition: Expression) {
        self.precondition = precondition;
    }

    pub fn effect(&self) -> &Expression {
        &self.effect
    }

    pub fn set_effect(&mut self, effect: Expression) {
        self.effect = effect;
    }

    pub fn is_ground(&self) -> bool {
        self.instantiation.len() == self.parameters.len()
    }

    /// Creates the ground instance for the given parameter binding.
    pub fn instantiate(&self, instantiation: Vec<usize>) -> IntAction {
        debug_assert_eq!(instantiation.len(), self.parameters.len());
        Self {
            name: self.name,
            task: self.task,
            parameters: self.parameters.clone(),
            precondition: self.precondition.substitute(&instantiation),
            effect: self.effect.substitute(&instantiation),
            instantiation,
        }
    }

    /// The ground primitive task this action accomplishes.
    pub fn ground_task(&self) -> GroundTask {
        debug_assert!(self.is_ground());
        GroundTask::new(self.task, SmallTuple::from(self.instantiation.as_slice()))
    }

    /// The literals of a ground effect.
    pub fn effect_literals(&self) -> Vec<GroundLiteral> {
        self.effect.ground_literals().unwrap_or_default()
    }
}
