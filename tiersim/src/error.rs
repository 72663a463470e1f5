//! Error types for the two-tier engine
//!
//! - [`ConfigError`] – rejected construction parameters; raised before any
//!   group is built, so an invalid group never exists
//! - [`SimError`]    – numeric failures found while stepping; once raised the
//!   simulation refuses to advance further

use thiserror::Error;

use crate::simulation::states::GroupKind;

/// Invalid group or engine parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{group} group: body count must be positive")]
    InvalidCount { group: GroupKind },

    #[error("{group} group: mass must be positive and finite, got {mass}")]
    InvalidMass { group: GroupKind, mass: f64 },

    #[error("{group} group: radius must be positive and finite, got {radius}")]
    InvalidRadius { group: GroupKind, radius: f64 },

    #[error("{group} group: inverse time step must be positive and finite, got {step}")]
    InvalidStep { group: GroupKind, step: f64 },

    #[error("{group} group: {given} positions given for {count} bodies")]
    PositionCount { group: GroupKind, given: usize, count: usize },

    #[error("{group} group: position {index} is not finite")]
    NonFinitePosition { group: GroupKind, index: usize },

    #[error("expected a {expected} group, got a {got} group")]
    WrongGroup { expected: GroupKind, got: GroupKind },

    #[error("gravitational constant must be finite, got {0}")]
    InvalidGravity(f64),

    #[error("clamp distance must be positive and finite, got {0}")]
    InvalidClampDistance(f64),
}

/// Failures detected while advancing the simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("bodies {i} and {j} of the {group} group share a position")]
    CoincidentBodies { group: GroupKind, i: usize, j: usize },

    #[error("{target} body {i} shares a position with source body {j}")]
    CoincidentCross { target: GroupKind, i: usize, j: usize },

    #[error("{group} body {index} has a non-finite position or velocity")]
    NonFinite { group: GroupKind, index: usize },

    #[error("simulation halted after an earlier failure: {cause}")]
    Halted { cause: String },
}
