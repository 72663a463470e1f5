//! Per-frame orchestration of the two groups
//!
//! `Simulation::advance` runs one fixed, linear pipeline:
//! primary forces -> primary integration -> primary snapshot ->
//! secondary forces -> cross influence -> secondary integration.
//! Every stage completes before the next one starts. The driver owns the loop
//! and only reads positions back between calls.

use log::{debug, trace};

use crate::error::{ConfigError, SimError};
use crate::simulation::forces::CrossInfluence;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyGroup, GroupKind, NVec2};

/// Where the pipeline currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ComputingPrimary,
    SnapshottingPrimary,
    ComputingSecondary,
    ApplyingCrossInfluence,
    IntegratingSecondary,
    /// Terminal: an earlier step failed, the message is kept for `Halted`
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Simulation {
    primary: BodyGroup,
    secondary: BodyGroup,
    parameters: Parameters,
    stage: Stage,
    steps: u64, // completed steps
}

impl Simulation {
    /// Groups are passed in already built and must carry matching kinds
    pub fn new(primary: BodyGroup, secondary: BodyGroup, parameters: Parameters) -> Result<Self, ConfigError> {
        parameters.validate()?;
        for (expected, group) in [(GroupKind::Primary, &primary), (GroupKind::Secondary, &secondary)] {
            if group.kind() != expected {
                return Err(ConfigError::WrongGroup { expected, got: group.kind() });
            }
        }
        debug!(
            "simulation ready: {} primary bodies, {} secondary bodies, backend {:?}",
            primary.len(),
            secondary.len(),
            parameters.parallelism
        );
        Ok(Self {
            primary,
            secondary,
            parameters,
            stage: Stage::Idle,
            steps: 0,
        })
    }

    /// Run one full step
    ///
    /// On failure the simulation is left in [`Stage::Failed`] and every later
    /// call returns [`SimError::Halted`]. Reporting the error is up to the driver.
    pub fn advance(&mut self) -> Result<(), SimError> {
        if let Stage::Failed(cause) = &self.stage {
            return Err(SimError::Halted { cause: cause.clone() });
        }

        match self.run_pipeline() {
            Ok(()) => {
                self.stage = Stage::Idle;
                self.steps += 1;
                trace!("step {} complete", self.steps);
                Ok(())
            }
            Err(e) => {
                debug!("step {} stopped during {:?}", self.steps + 1, self.stage);
                self.stage = Stage::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn run_pipeline(&mut self) -> Result<(), SimError> {
        let params = self.parameters;
        let par = params.parallelism;

        // 1-2: primary group steps on its own
        self.enter(Stage::ComputingPrimary);
        self.primary.reset_forces();
        self.primary.accumulate_internal_gravity(&params)?;
        semi_implicit_euler(&mut self.primary, par);
        self.primary.check_finite()?;

        // 3: freeze the finished primary state
        self.enter(Stage::SnapshottingPrimary);
        let snap = self.primary.snapshot();

        // 4: secondary self-interaction
        self.enter(Stage::ComputingSecondary);
        self.secondary.reset_forces();
        self.secondary.accumulate_internal_gravity(&params)?;

        // 5: one-way pull from the primary snapshot
        self.enter(Stage::ApplyingCrossInfluence);
        CrossInfluence::apply(&mut self.secondary, &snap, &params)?;

        // 6
        self.enter(Stage::IntegratingSecondary);
        semi_implicit_euler(&mut self.secondary, par);
        self.secondary.check_finite()?;

        Ok(())
    }

    fn enter(&mut self, stage: Stage) {
        trace!("{:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    /// Current positions of one group, for rendering
    pub fn positions(&self, group: GroupKind) -> &[NVec2] {
        self.group(group).positions()
    }

    pub fn group(&self, group: GroupKind) -> &BodyGroup {
        match group {
            GroupKind::Primary => &self.primary,
            GroupKind::Secondary => &self.secondary,
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.stage, Stage::Failed(_))
    }
}
