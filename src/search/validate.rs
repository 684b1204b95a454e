use crate::problem::EncodedProblem;
use crate::search::{OperatorRef, Plan};

/// Replays the plan from the initial node. Each step must accomplish a task
/// without predecessor whose symbol and arguments it matches, and at the end
/// no task may be left and the goal must hold.
pub fn validate(plan: &Plan, problem: &EncodedProblem) -> Result<(), String> {
    if !problem.is_solvable() {
        return Err("The initial task network could not be grounded".to_string());
    }
    let mut state = problem.initial_state().clone();
    let mut network = problem.initial_task_network().clone();

    for (step, operator) in plan.steps().iter().enumerate() {
        let (task, applicable) = match *operator {
            OperatorRef::Action(index) => {
                let action = problem.action(index);
                (action.task(), action.is_applicable(&state))
            }
            OperatorRef::Method(index) => {
                let method = problem.method(index);
                (method.task(), method.is_applicable(&state))
            }
        };
        if !applicable {
            return Err(format!(
                "Step {} {} is not applicable in state {:?}",
                step,
                operator.to_string(problem),
                state
            ));
        }
        let Some(position) = network
            .first_positions()
            .find(|&position| network.tasks()[position] == task)
        else {
            return Err(format!(
                "Step {} {} does not accomplish a task that can be processed next",
                step,
                operator.to_string(problem)
            ));
        };
        match *operator {
            OperatorRef::Action(index) => {
                state = problem.action(index).apply(&state);
                network = network.remove(position);
            }
            OperatorRef::Method(index) => {
                let method = problem.method(index);
                network = network.decompose(position, method.subtasks(), method.ordering());
            }
        }
    }

    if !network.is_empty() {
        return Err(format!("Plan leaves {} tasks unaccomplished", network.len()));
    }
    if !problem.goal().is_satisfied(&state) {
        return Err(format!(
            "Plan does not reach goal state, final state is: {:?}",
            state
        ));
    }
    Ok(())
}
