pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{BodyGroup, Snapshot, GroupKind, NVec2};
pub use simulation::params::{GroupParams, Parameters};
pub use simulation::parallel::Parallelism;
pub use simulation::forces::{CrossInfluence, DistancePolicy, ForceLaw};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::{Simulation, Stage};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, GroupConfig, ScenarioConfig};

pub use error::{ConfigError, SimError};

pub use visualization::tiersim_vis2d::run_2d;

pub use benchmark::benchmark::bench_advance;
