//! Grounding of lifted HTN planning problems.
//!
//! A [`parsed_types::Domain`] and [`parsed_types::Problem`] are compiled into
//! an [`problem::EncodedProblem`] by [`grounding::ground`]: symbol tables, an
//! integer intermediate representation, inertia analysis and reachability
//! pruning. The [`search`] module runs a blind total-order forward
//! decomposition search over the result.
#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use humantime as _;
use ron as _;
use tracing_subscriber as _;
#[cfg(not(test))]
use serde_json as _;

pub mod encoding;
pub mod error;
pub mod grounding;
pub mod parsed_types;
pub mod problem;
pub mod search;

#[cfg(test)]
mod test_utils;
