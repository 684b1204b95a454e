//! Domains and problems shared by the tests.

use crate::parsed_types::{
    ActionDefinition, Atom, Domain, MethodDefinition, Name, Objects, PredicateDefinition, Problem,
    PropCondition, PropEffect, Subtask, TaskDefinition, TaskNetworkDefinition, Term, Typed,
    TypedVariables, Variable,
};

pub const TRANSPORT_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/transport/domain.json"
));

pub const TRANSPORT_PROBLEM01_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/transport/p01.json"
));

/// One truck on the road `l1 - l2 - l3` has to bring the package from `l2`
/// to `l3`.
pub fn transport() -> (Domain, Problem) {
    (
        serde_json::from_str(TRANSPORT_DOMAIN_TEXT).expect("benchmark domain should parse"),
        serde_json::from_str(TRANSPORT_PROBLEM01_TEXT).expect("benchmark problem should parse"),
    )
}

pub fn var(name: &str) -> Term {
    Term::variable(name)
}

pub fn constant(name: &str) -> Term {
    Term::constant(name)
}

pub fn atom(name: &str, values: Vec<Term>) -> Atom<Term> {
    Atom::new(Name::new(name), values)
}

pub fn fact(name: &str, values: &[&str]) -> Atom<Name> {
    Atom::new(Name::new(name), values.iter().map(|&v| Name::new(v)).collect())
}

/// Parameters of type `object`.
pub fn parameters(names: &[&str]) -> TypedVariables {
    names
        .iter()
        .map(|&name| Typed::new_object(Variable::from_str(name)))
        .collect()
}

pub fn objects(names: &[&str]) -> Objects {
    names
        .iter()
        .map(|&name| Typed::new_object(Name::new(name)))
        .collect()
}

fn predicate(name: &str, variables: &[&str]) -> PredicateDefinition {
    PredicateDefinition::new(Name::new(name), parameters(variables))
}

fn task(name: &str, variables: &[&str]) -> TaskDefinition {
    TaskDefinition::new(Name::new(name), parameters(variables))
}

/// `pickup(?x)` needs `clear(?x)`, adds `holding(?x)` and deletes
/// `clear(?x)`. The compound task `get(?x)` has the single method
/// `m-get(?x) -> [pickup(?x)]`.
pub fn pickup_domain() -> Domain {
    let pickup = ActionDefinition::new(
        Name::new("pickup"),
        parameters(&["x"]),
        vec![PropCondition::new_atom(atom("clear", vec![var("x")]))],
        vec![
            PropEffect::new_add(atom("holding", vec![var("x")])),
            PropEffect::new_delete(atom("clear", vec![var("x")])),
        ],
    );
    let get = MethodDefinition::new(
        Name::new("m-get"),
        parameters(&["x"]),
        atom("get", vec![var("x")]),
        vec![],
        TaskNetworkDefinition::ordered(vec![atom("pickup", vec![var("x")]).into()]),
    );
    Domain::builder(Name::new("pickup"), vec![pickup])
        .with_predicates(vec![predicate("clear", &["x"]), predicate("holding", &["x"])])
        .with_tasks(vec![task("get", &["x"])])
        .with_methods(vec![get])
}

/// Objects `a` and `b`, only `a` is clear. The initial task network is
/// `[get(target)]`.
pub fn pickup_problem(target: &str) -> Problem {
    Problem::builder(
        "pickup-1",
        "pickup",
        vec![fact("clear", &["a"])],
        TaskNetworkDefinition::ordered(vec![atom("get", vec![constant(target)]).into()]),
    )
    .with_objects(objects(&["a", "b"]))
}

/// A light with `turn-on` and `turn-off`, the compound task `flip` picks the
/// action that applies. No fact is inertial.
pub fn toggle_domain() -> Domain {
    let on = || PropCondition::new_atom(atom("on", vec![]));
    let turn_on = ActionDefinition::new(
        Name::new("turn-on"),
        parameters(&[]),
        vec![PropCondition::new_not(on())],
        vec![PropEffect::new_add(atom("on", vec![]))],
    );
    let turn_off = ActionDefinition::new(
        Name::new("turn-off"),
        parameters(&[]),
        vec![on()],
        vec![PropEffect::new_delete(atom("on", vec![]))],
    );
    let flip = |name: &str, precondition: PropCondition, action: &str| {
        MethodDefinition::new(
            Name::new(name),
            parameters(&[]),
            atom("flip", vec![]),
            vec![precondition],
            TaskNetworkDefinition::ordered(vec![atom(action, vec![]).into()]),
        )
    };
    Domain::builder(Name::new("toggle"), vec![turn_on, turn_off])
        .with_predicates(vec![predicate("on", &[])])
        .with_tasks(vec![task("flip", &[])])
        .with_methods(vec![
            flip("m-flip-on", PropCondition::new_not(on()), "turn-on"),
            flip("m-flip-off", on(), "turn-off"),
        ])
}

/// Flips the light twice, starting with the light off.
pub fn toggle_problem() -> Problem {
    Problem::builder(
        "toggle-1",
        "toggle",
        vec![],
        TaskNetworkDefinition::ordered(vec![
            atom("flip", vec![]).into(),
            atom("flip", vec![]).into(),
        ]),
    )
}

/// `root` decomposes into `[s1: a1, s2: a2, s3: a3]` ordered `s1 < s2 < s3`
/// when `total`, otherwise only `s1 < s2`.
pub fn chain_domain(total: bool) -> Domain {
    let action =
        |name: &str| ActionDefinition::new(Name::new(name), parameters(&[]), vec![], vec![]);
    let mut ordering = vec![(Name::new("s1"), Name::new("s2"))];
    if total {
        ordering.push((Name::new("s2"), Name::new("s3")));
    }
    let network = TaskNetworkDefinition::new(
        vec![
            Subtask::labelled("s1", atom("a1", vec![])),
            Subtask::labelled("s2", atom("a2", vec![])),
            Subtask::labelled("s3", atom("a3", vec![])),
        ],
        ordering,
    );
    let root = MethodDefinition::new(
        Name::new("m-root"),
        parameters(&[]),
        atom("root", vec![]),
        vec![],
        network,
    );
    Domain::builder(Name::new("chain"), vec![action("a1"), action("a2"), action("a3")])
        .with_tasks(vec![task("root", &[])])
        .with_methods(vec![root])
}

pub fn chain_problem() -> Problem {
    Problem::builder(
        "chain-1",
        "chain",
        vec![],
        TaskNetworkDefinition::ordered(vec![atom("root", vec![]).into()]),
    )
}
