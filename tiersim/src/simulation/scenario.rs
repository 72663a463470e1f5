//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - the immutable engine `Parameters`
//! - a ready `Simulation` with both groups placed at t = 0
//! - the run length used by headless mode
//!
//! The scenario is inserted into Bevy as a `Resource` and stepped by the
//! viewer, or stepped directly in headless and benchmark runs

use bevy::prelude::Resource;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{GroupConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::forces::ForceLaw;
use crate::simulation::params::{GroupParams, Parameters};
use crate::simulation::states::{BodyGroup, GroupKind, NVec2};

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Resource)]
pub struct Scenario {
    pub simulation: Simulation,
    pub steps: u64, // headless run length
    pub seed: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from EngineConfig + ParametersConfig
        let e_cfg = cfg.engine;
        let parameters = Parameters {
            G: cfg.parameters.G,
            internal_law: e_cfg.internal_law.unwrap_or(ForceLaw::InverseDistance),
            cross_law: e_cfg.cross_law.unwrap_or(ForceLaw::UnitDirection),
            distance: e_cfg.distance,
            parallelism: e_cfg.parallelism,
        };
        parameters.validate()?;

        // One RNG for both groups, primary drawn first
        let seed = cfg.parameters.seed;
        let mut rng = StdRng::seed_from_u64(seed);
        let primary = build_group(GroupKind::Primary, &cfg.primary, &mut rng)?;
        let secondary = build_group(GroupKind::Secondary, &cfg.secondary, &mut rng)?;

        info!(
            "scenario built: {} primary (m = {}), {} secondary (m = {}), G = {}, seed = {}",
            primary.len(),
            primary.mass(),
            secondary.len(),
            secondary.mass(),
            parameters.G,
            seed
        );

        Ok(Self {
            simulation: Simulation::new(primary, secondary, parameters)?,
            steps: cfg.parameters.steps,
            seed,
        })
    }
}

/// Map a `GroupConfig` to a runtime `BodyGroup`
fn build_group(kind: GroupKind, g_cfg: &GroupConfig, rng: &mut StdRng) -> Result<BodyGroup, ConfigError> {
    let params = GroupParams::new(g_cfg.count, g_cfg.mass, g_cfg.radius, g_cfg.step);
    match &g_cfg.positions {
        Some(xs) => {
            let positions = xs.iter().map(|x| NVec2::new(x[0], x[1])).collect();
            BodyGroup::new(kind, params, positions)
        }
        None => BodyGroup::random(kind, params, rng),
    }
}
