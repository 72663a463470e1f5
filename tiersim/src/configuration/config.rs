//! Configuration types for loading two-tier scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – parallel backend, force laws, coincident-body policy
//! - [`ParametersConfig`] – gravitational constant, RNG seed, headless run length
//! - [`GroupConfig`]      – count, mass, radius and inverse step of one group
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The three-sun scenario shipped in `scenarios/three_body.yaml`:
//!
//! ```yaml
//! engine:
//!   parallelism: "rayon"      # or "serial"
//!   distance:
//!     policy: "error"         # or "clamp" with `min_distance: 1.0e-6`
//!
//! parameters:
//!   G: 1.0                    # gravitational constant
//!   seed: 42                  # seed for initial positions
//!   steps: 10000              # steps for a headless run
//!
//! primary:
//!   count: 3
//!   mass: 100.0
//!   radius: 10.0              # pixels, render only
//!   step: 1000000.0           # dt = 1 / step
//!
//! secondary:
//!   count: 100
//!   mass: 1.0
//!   radius: 3.0
//!   step: 1000000.0
//! ```
//!
//! A group may also list explicit `positions: [[x, y], ...]`, one per body,
//! instead of being scattered over the unit square.

use serde::Deserialize;

use crate::simulation::forces::{DistancePolicy, ForceLaw};
use crate::simulation::parallel::Parallelism;

/// Engine-level options, all optional
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallelism: Parallelism, // backend for per-body loops
    #[serde(default)]
    pub distance: DistancePolicy, // zero-distance handling
    pub internal_law: Option<ForceLaw>, // defaults to inverse distance
    pub cross_law: Option<ForceLaw>, // defaults to unit direction
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,    // gravitational constant
    #[serde(default)]
    pub seed: u64, // deterministic seed to make runs reproducible
    #[serde(default = "default_steps")]
    pub steps: u64, // steps to run without a window
}

fn default_steps() -> u64 {
    1000
}

/// One group's construction parameters
#[derive(Deserialize, Debug, Clone)]
pub struct GroupConfig {
    pub count: usize, // number of bodies
    pub mass: f64,    // mass shared by every body
    pub radius: f64,  // drawing radius
    pub step: f64,    // inverse time step
    pub positions: Option<Vec<[f64; 2]>>, // explicit start positions, else random
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub primary: GroupConfig,
    pub secondary: GroupConfig,
}
