//! Numerical and physical parameters for the simulation
//!
//! `GroupParams` holds the per-group quadruple (count, mass, radius, step)
//! `Parameters` holds the engine-wide settings:
//! - gravitational constant `G`,
//! - force laws for internal and cross-group terms,
//! - the policy for coincident bodies,
//! - the parallel backend used for per-body loops
//!
//! Both are plain immutable values handed to constructors

use crate::error::ConfigError;
use crate::simulation::forces::{DistancePolicy, ForceLaw};
use crate::simulation::parallel::Parallelism;
use crate::simulation::states::GroupKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupParams {
    pub count: usize, // number of bodies
    pub mass: f64, // shared mass
    pub radius: f64, // render radius in pixels
    pub step: f64, // inverse time step, dt = 1 / step
}

impl GroupParams {
    pub fn new(count: usize, mass: f64, radius: f64, step: f64) -> Self {
        Self { count, mass, radius, step }
    }

    /// Integration interval folded into the force constant
    pub fn dt(&self) -> f64 {
        self.step.recip()
    }

    /// Reject anything that would make the group unusable
    pub fn validate(&self, group: GroupKind) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount { group });
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass { group, mass: self.mass });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius { group, radius: self.radius });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::InvalidStep { group, step: self.step });
        }
        Ok(())
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub internal_law: ForceLaw, // law for pairs inside one group
    pub cross_law: ForceLaw, // law for source -> target pulls
    pub distance: DistancePolicy, // what to do with coincident bodies
    pub parallelism: Parallelism, // backend for per-body loops
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 1.0,
            internal_law: ForceLaw::InverseDistance,
            cross_law: ForceLaw::UnitDirection,
            distance: DistancePolicy::Error,
            parallelism: Parallelism::Rayon,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.G.is_finite() {
            return Err(ConfigError::InvalidGravity(self.G));
        }
        if let DistancePolicy::Clamp { min_distance } = self.distance {
            if !(min_distance.is_finite() && min_distance > 0.0) {
                return Err(ConfigError::InvalidClampDistance(min_distance));
            }
        }
        Ok(())
    }
}
