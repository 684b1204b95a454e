//! The grounding pipeline. Each phase consumes the output of the previous
//! one:
//!
//! 1. [`initialize`] builds the symbol tables and the lifted intermediate
//!    representation,
//! 2. [`preinstantiate`] computes the structural inertia of the predicates,
//! 3. [`instantiate`] grounds the actions,
//! 4. [`postinstantiate`] computes the inertia of ground facts, simplifies
//!    the actions and grounds the methods top down,
//! 5. [`finalize`] drops what the initial task network cannot reach and
//!    encodes the rest as bit sets.

mod binding;
mod finalization;
mod initialization;
mod instantiation;
mod postinstantiation;
mod preinstantiation;

pub use finalization::finalize;
pub use initialization::{initialize, GroundingContext, Initialized};
pub use instantiation::{instantiate, Instantiated};
pub use postinstantiation::{postinstantiate, Postinstantiated};
pub use preinstantiation::{preinstantiate, Preinstantiated};

use crate::error::GroundingError;
use crate::parsed_types::{Domain, Problem};
use crate::problem::EncodedProblem;
use std::time::Instant;
use tracing::info;

/// Runs every phase. Fails only if the input is missing or malformed. A
/// problem that cannot be solved still grounds, see
/// [`EncodedProblem::check_solvable`].
pub fn ground(
    domain: Option<&Domain>,
    problem: Option<&Problem>,
) -> Result<EncodedProblem, GroundingError> {
    let start = Instant::now();
    let initialized = initialize(domain, problem)?;
    let encoded = finalize(postinstantiate(instantiate(preinstantiate(initialized))));
    info!(
        grounding_time = start.elapsed().as_secs_f64(),
        solvable = encoded.is_solvable(),
        totally_ordered = encoded.is_totally_ordered(),
        "grounding done"
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn missing_input_is_rejected() {
        assert_eq!(
            ground(None, Some(&pickup_problem("a"))).unwrap_err(),
            GroundingError::MissingInput("domain")
        );
        assert_eq!(
            ground(Some(&pickup_domain()), None).unwrap_err(),
            GroundingError::MissingInput("problem")
        );
    }

    #[test]
    fn grounding_is_deterministic() {
        let (domain, problem) = transport();
        let first = ground(Some(&domain), Some(&problem)).unwrap();
        let second = ground(Some(&domain), Some(&problem)).unwrap();
        let names = |p: &EncodedProblem| {
            (0..p.actions().len())
                .map(|a| p.action_name(a))
                .chain((0..p.num_fluents()).map(|f| p.fluent_name(f)))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }
}
