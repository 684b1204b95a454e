//! First phase: populates the symbol tables and converts the domain and the
//! problem into the intermediate representation.

use crate::encoding::{
    Argument, Expression, Fluent, IntAction, IntMethod, IntTaskNetwork, SmallTuple, SymbolTables,
};
use crate::error::GroundingError;
use crate::parsed_types::{
    ActionDefinition, Atom, Domain, MethodDefinition, Name, Objects, Problem, PropCondition,
    PropEffect, TaskNetworkDefinition, Term, TypedVariables,
};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Data shared by every phase after initialization.
#[derive(Debug, Clone)]
pub struct GroundingContext {
    pub domain_name: String,
    pub problem_name: String,
    pub symbols: SymbolTables,
    /// The initial state, without duplicates, in problem order.
    pub init: Vec<Fluent>,
    pub init_set: HashSet<Fluent>,
}

/// Output of [`initialize`]: lifted actions and methods, the goal and the
/// initial task network over the symbol tables.
#[derive(Debug, Clone)]
pub struct Initialized {
    pub context: GroundingContext,
    pub actions: Vec<IntAction>,
    pub methods: Vec<IntMethod>,
    pub goal: Expression,
    pub initial_task_network: IntTaskNetwork,
}

/// Variables of an operator, mapped to parameter slots. Resolving variables
/// per operator keeps the variables of different operators apart.
struct Scope {
    name: Name,
    slots: HashMap<Name, usize>,
    types: Vec<usize>,
}

impl Scope {
    fn new(
        name: Name,
        parameters: &TypedVariables,
        symbols: &mut SymbolTables,
    ) -> Result<Self, GroundingError> {
        let mut slots = HashMap::new();
        let mut types = Vec::with_capacity(parameters.len());
        for parameter in parameters.iter() {
            if slots.insert(*parameter.value().name(), types.len()).is_some() {
                return Err(GroundingError::DefinitionConflict {
                    kind: "parameter",
                    name: *parameter.value().name(),
                });
            }
            types.push(symbols.resolve_type(parameter.type_())?);
        }
        Ok(Self { name, slots, types })
    }

    /// A scope without parameters, used for the problem.
    fn ground(name: Name) -> Self {
        Self {
            name,
            slots: HashMap::new(),
            types: vec![],
        }
    }
}

pub fn initialize(
    domain: Option<&Domain>,
    problem: Option<&Problem>,
) -> Result<Initialized, GroundingError> {
    let domain = domain.ok_or(GroundingError::MissingInput("domain"))?;
    let problem = problem.ok_or(GroundingError::MissingInput("problem"))?;

    let mut symbols = SymbolTables::new();
    init_types(&mut symbols, domain);
    init_constants(&mut symbols, domain.constants())?;
    init_constants(&mut symbols, problem.objects())?;
    symbols.close_type_domains();
    init_predicates(&mut symbols, domain)?;
    init_tasks(&mut symbols, domain)?;

    let actions = domain
        .actions()
        .iter()
        .map(|action| init_action(&mut symbols, action))
        .collect::<Result<Vec<_>, _>>()?;
    let methods = domain
        .methods()
        .iter()
        .map(|method| init_method(&mut symbols, method))
        .collect::<Result<Vec<_>, _>>()?;

    let (init, init_set) = init_initial_state(&symbols, problem)?;
    let problem_scope = Scope::ground(*problem.name());
    let goal = Expression::And(conditions(problem.goals(), &problem_scope, &symbols)?).simplify();
    let initial_task_network = task_network(problem.htn(), &problem_scope, &symbols)?;

    info!(
        types = symbols.num_types(),
        constants = symbols.num_constants(),
        predicates = symbols.num_predicates(),
        tasks = symbols.num_tasks(),
        actions = actions.len(),
        methods = methods.len(),
        initial_facts = init.len(),
        initial_tasks = initial_task_network.len(),
        "initialization done"
    );

    Ok(Initialized {
        context: GroundingContext {
            domain_name: domain.name().to_string(),
            problem_name: problem.name().to_string(),
            symbols,
            init,
            init_set,
        },
        actions,
        methods,
        goal,
        initial_task_network,
    })
}

fn init_types(symbols: &mut SymbolTables, domain: &Domain) {
    // Declare every type before linking them, declarations may come in any
    // order.
    for declaration in domain.types().iter() {
        symbols.intern_type(*declaration.value());
    }
    for declaration in domain.types().iter() {
        let subtype = symbols.intern_type(*declaration.value());
        for supertype in declaration.type_().primitives() {
            let supertype = symbols.intern_type(*supertype.name());
            symbols.add_supertype(subtype, supertype);
        }
    }
}

fn init_constants(symbols: &mut SymbolTables, objects: &Objects) -> Result<(), GroundingError> {
    for object in objects.iter() {
        let type_ = symbols.resolve_type(object.type_())?;
        symbols.intern_constant(*object.value(), type_)?;
    }
    Ok(())
}

fn init_predicates(symbols: &mut SymbolTables, domain: &Domain) -> Result<(), GroundingError> {
    for predicate in domain.predicates() {
        let signature = predicate
            .variables()
            .iter()
            .map(|variable| symbols.resolve_type(variable.type_()))
            .collect::<Result<Vec<_>, _>>()?;
        symbols.intern_predicate(*predicate.name(), signature)?;
    }
    Ok(())
}

/// Compound tasks come from the task declarations, every action defines the
/// primitive task of the same name.
fn init_tasks(symbols: &mut SymbolTables, domain: &Domain) -> Result<(), GroundingError> {
    for task in domain.tasks() {
        let signature = task
            .parameters()
            .iter()
            .map(|parameter| symbols.resolve_type(parameter.type_()))
            .collect::<Result<Vec<_>, _>>()?;
        symbols.intern_task(*task.name(), signature, false)?;
    }
    for action in domain.actions() {
        let signature = action
            .parameters()
            .iter()
            .map(|parameter| symbols.resolve_type(parameter.type_()))
            .collect::<Result<Vec<_>, _>>()?;
        symbols.intern_task(*action.name(), signature, true)?;
    }
    Ok(())
}

fn init_action(
    symbols: &mut SymbolTables,
    action: &ActionDefinition,
) -> Result<IntAction, GroundingError> {
    let scope = Scope::new(*action.name(), action.parameters(), symbols)?;
    let precondition =
        Expression::And(conditions(action.preconditions(), &scope, symbols)?).simplify();
    let effect = Expression::And(
        action
            .effects()
            .iter()
            .map(|effect| match effect {
                PropEffect::Add(atom) => predicate_atom(atom, &scope, symbols),
                PropEffect::Delete(atom) => {
                    predicate_atom(atom, &scope, symbols).map(Expression::new_not)
                }
            })
            .collect::<Result<_, _>>()?,
    );
    let task = symbols
        .task_id(action.name())
        .ok_or(GroundingError::UnknownTask(*action.name()))?;
    Ok(IntAction::new(
        *action.name(),
        task,
        scope.types,
        precondition,
        effect,
    ))
}

fn init_method(
    symbols: &mut SymbolTables,
    method: &MethodDefinition,
) -> Result<IntMethod, GroundingError> {
    let scope = Scope::new(*method.name(), method.parameters(), symbols)?;
    let task = task_atom(method.task(), &scope, symbols)?;
    let precondition =
        Expression::And(conditions(method.preconditions(), &scope, symbols)?).simplify();
    let task_network = task_network(method.task_network(), &scope, symbols)?;
    Ok(IntMethod::new(
        *method.name(),
        scope.types,
        task,
        precondition,
        task_network,
    ))
}

fn init_initial_state(
    symbols: &SymbolTables,
    problem: &Problem,
) -> Result<(Vec<Fluent>, HashSet<Fluent>), GroundingError> {
    let mut init = vec![];
    let mut init_set = HashSet::new();
    for atom in problem.init() {
        let predicate = symbols
            .predicate_id(atom.predicate_name())
            .ok_or(GroundingError::UnknownPredicate(*atom.predicate_name()))?;
        check_arity(
            atom.predicate_name(),
            symbols.predicate_signature(predicate).len(),
            atom.values().len(),
        )?;
        let arguments = atom
            .values()
            .iter()
            .map(|name| {
                symbols
                    .constant_id(name)
                    .ok_or(GroundingError::UnknownConstant(*name))
            })
            .collect::<Result<SmallTuple, _>>()?;
        let fluent = Fluent::new(predicate, arguments);
        if init_set.insert(fluent) {
            init.push(fluent);
        }
    }
    Ok((init, init_set))
}

fn check_arity(name: &Name, expected: usize, found: usize) -> Result<(), GroundingError> {
    if expected != found {
        return Err(GroundingError::ArityMismatch {
            name: *name,
            expected,
            found,
        });
    }
    Ok(())
}

fn argument(
    term: &Term,
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<Argument, GroundingError> {
    match term {
        Term::Name(name) => symbols
            .constant_id(name)
            .map(Argument::Constant)
            .ok_or(GroundingError::UnknownConstant(*name)),
        Term::Variable(variable) => scope
            .slots
            .get(variable.name())
            .map(|&slot| Argument::Variable(slot))
            .ok_or(GroundingError::UnknownVariable {
                variable: *variable.name(),
                scope: scope.name,
            }),
    }
}

fn arguments(
    terms: &[Term],
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<Vec<Argument>, GroundingError> {
    terms
        .iter()
        .map(|term| argument(term, scope, symbols))
        .collect()
}

fn predicate_atom(
    atom: &Atom<Term>,
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<Expression, GroundingError> {
    let predicate = symbols
        .predicate_id(atom.predicate_name())
        .ok_or(GroundingError::UnknownPredicate(*atom.predicate_name()))?;
    check_arity(
        atom.predicate_name(),
        symbols.predicate_signature(predicate).len(),
        atom.values().len(),
    )?;
    Ok(Expression::Atom {
        predicate,
        arguments: arguments(atom.values(), scope, symbols)?,
    })
}

fn task_atom(
    atom: &Atom<Term>,
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<Expression, GroundingError> {
    let symbol = symbols
        .task_id(atom.predicate_name())
        .ok_or(GroundingError::UnknownTask(*atom.predicate_name()))?;
    check_arity(
        atom.predicate_name(),
        symbols.task_signature(symbol).len(),
        atom.values().len(),
    )?;
    Ok(Expression::Task {
        symbol,
        arguments: arguments(atom.values(), scope, symbols)?,
    })
}

fn condition(
    prop: &PropCondition,
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<Expression, GroundingError> {
    Ok(match prop {
        PropCondition::Atom(atom) => predicate_atom(atom, scope, symbols)?,
        PropCondition::And(children) => Expression::And(conditions(children, scope, symbols)?),
        PropCondition::Or(children) => Expression::Or(conditions(children, scope, symbols)?),
        PropCondition::Not(inner) => Expression::new_not(condition(inner, scope, symbols)?),
        PropCondition::Imply(premise, conclusion) => Expression::Or(vec![
            Expression::new_not(condition(premise, scope, symbols)?),
            condition(conclusion, scope, symbols)?,
        ]),
        PropCondition::Equality(a, b) => {
            Expression::Equal(argument(a, scope, symbols)?, argument(b, scope, symbols)?)
        }
    })
}

fn conditions(
    props: &[PropCondition],
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<Vec<Expression>, GroundingError> {
    props
        .iter()
        .map(|prop| condition(prop, scope, symbols))
        .collect()
}

/// Subtasks keep their order of declaration, labels used by the ordering
/// constraints are resolved to positions.
fn task_network(
    network: &TaskNetworkDefinition,
    scope: &Scope,
    symbols: &SymbolTables,
) -> Result<IntTaskNetwork, GroundingError> {
    let mut labels = HashMap::new();
    let mut tasks = Vec::with_capacity(network.subtasks().len());
    for (position, subtask) in network.subtasks().iter().enumerate() {
        if let Some(label) = subtask.id() {
            labels.insert(*label, position);
        }
        tasks.push(task_atom(subtask.task(), scope, symbols)?);
    }
    let position = |label: &Name| {
        labels
            .get(label)
            .copied()
            .ok_or(GroundingError::InvalidOrdering {
                scope: scope.name,
                label: *label,
            })
    };
    let ordering = network
        .ordering()
        .iter()
        .map(|(before, after)| {
            if before == after {
                return Err(GroundingError::InvalidOrdering {
                    scope: scope.name,
                    label: *before,
                });
            }
            Ok((position(before)?, position(after)?))
        })
        .collect::<Result<Vec<_>, GroundingError>>()?;
    Ok(IntTaskNetwork::new(tasks, ordering))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Subtask, TaskDefinition};
    use crate::test_utils::*;

    fn pickup_with_init(init: Vec<Atom<Name>>) -> Problem {
        Problem::builder(
            "pickup-2",
            "pickup",
            init,
            TaskNetworkDefinition::ordered(vec![atom("get", vec![constant("a")]).into()]),
        )
        .with_objects(objects(&["a", "b"]))
    }

    #[test]
    fn actions_declare_primitive_tasks() {
        let initialized = initialize(Some(&pickup_domain()), Some(&pickup_problem("a"))).unwrap();
        let symbols = &initialized.context.symbols;
        let pickup = symbols.task_id(&Name::new("pickup")).unwrap();
        let get = symbols.task_id(&Name::new("get")).unwrap();
        assert!(symbols.is_primitive(pickup));
        assert!(!symbols.is_primitive(get));
        assert_eq!(initialized.actions.len(), 1);
        assert_eq!(initialized.methods.len(), 1);
        assert_eq!(initialized.initial_task_network.len(), 1);
        assert_eq!(initialized.context.init.len(), 1);
    }

    #[test]
    fn duplicate_initial_facts_are_merged() {
        let problem = pickup_with_init(vec![fact("clear", &["a"]), fact("clear", &["a"])]);
        let initialized = initialize(Some(&pickup_domain()), Some(&problem)).unwrap();
        assert_eq!(initialized.context.init.len(), 1);
        assert_eq!(initialized.context.init_set.len(), 1);
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let problem = pickup_with_init(vec![fact("missing", &["a"])]);
        assert_eq!(
            initialize(Some(&pickup_domain()), Some(&problem)).unwrap_err(),
            GroundingError::UnknownPredicate(Name::new("missing"))
        );

        let problem = pickup_with_init(vec![fact("clear", &["c"])]);
        assert_eq!(
            initialize(Some(&pickup_domain()), Some(&problem)).unwrap_err(),
            GroundingError::UnknownConstant(Name::new("c"))
        );
    }

    #[test]
    fn arity_is_checked() {
        let problem = pickup_with_init(vec![fact("clear", &["a", "b"])]);
        assert_eq!(
            initialize(Some(&pickup_domain()), Some(&problem)).unwrap_err(),
            GroundingError::ArityMismatch {
                name: Name::new("clear"),
                expected: 1,
                found: 2,
            }
        );
    }

    #[test]
    fn variables_must_be_parameters() {
        let method = MethodDefinition::new(
            Name::new("m-get-other"),
            parameters(&["x"]),
            atom("get", vec![var("y")]),
            vec![],
            TaskNetworkDefinition::ordered(vec![atom("pickup", vec![var("x")]).into()]),
        );
        let domain = pickup_domain().with_methods(vec![method]);
        assert_eq!(
            initialize(Some(&domain), Some(&pickup_problem("a"))).unwrap_err(),
            GroundingError::UnknownVariable {
                variable: Name::new("y"),
                scope: Name::new("m-get-other"),
            }
        );
    }

    #[test]
    fn task_declared_as_action_conflicts() {
        let domain = pickup_domain().with_tasks(vec![
            TaskDefinition::new(Name::new("get"), parameters(&["x"])),
            TaskDefinition::new(Name::new("pickup"), parameters(&["x"])),
        ]);
        assert!(matches!(
            initialize(Some(&domain), Some(&pickup_problem("a"))),
            Err(GroundingError::DefinitionConflict { .. })
        ));
    }

    #[test]
    fn ordering_labels_must_exist() {
        let network = TaskNetworkDefinition::new(
            vec![Subtask::labelled("s1", atom("pickup", vec![var("x")]))],
            vec![(Name::new("s1"), Name::new("s9"))],
        );
        let method = MethodDefinition::new(
            Name::new("m-get"),
            parameters(&["x"]),
            atom("get", vec![var("x")]),
            vec![],
            network,
        );
        let domain = pickup_domain().with_methods(vec![method]);
        assert_eq!(
            initialize(Some(&domain), Some(&pickup_problem("a"))).unwrap_err(),
            GroundingError::InvalidOrdering {
                scope: Name::new("m-get"),
                label: Name::new("s9"),
            }
        );
    }

    #[test]
    fn subtask_cannot_precede_itself() {
        let network = TaskNetworkDefinition::new(
            vec![Subtask::labelled("s1", atom("pickup", vec![var("x")]))],
            vec![(Name::new("s1"), Name::new("s1"))],
        );
        let method = MethodDefinition::new(
            Name::new("m-get"),
            parameters(&["x"]),
            atom("get", vec![var("x")]),
            vec![],
            network,
        );
        let domain = pickup_domain().with_methods(vec![method]);
        assert_eq!(
            initialize(Some(&domain), Some(&pickup_problem("a"))).unwrap_err(),
            GroundingError::InvalidOrdering {
                scope: Name::new("m-get"),
                label: Name::new("s1"),
            }
        );
    }

    #[test]
    fn implications_become_disjunctions() {
        let goal = PropCondition::Imply(
            Box::new(PropCondition::new_atom(atom("clear", vec![constant("a")]))),
            Box::new(PropCondition::new_atom(atom("holding", vec![constant("a")]))),
        );
        let problem = pickup_problem("a").with_goal(vec![goal]);
        let initialized = initialize(Some(&pickup_domain()), Some(&problem)).unwrap();
        let Expression::Or(disjuncts) = &initialized.goal else {
            panic!("expected a disjunction, got {:?}", initialized.goal);
        };
        assert_eq!(disjuncts.len(), 2);
        assert!(matches!(disjuncts[0], Expression::Not(_)));
        assert!(matches!(disjuncts[1], Expression::Atom { .. }));
    }
}
