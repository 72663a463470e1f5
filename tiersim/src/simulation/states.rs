//! Core state types for the two-tier simulation.
//!
//! - `BodyGroup` – structure-of-arrays buffers for N bodies sharing one mass,
//!   one radius and one time step
//! - `Snapshot`  – owned copy of a group's positions and mass, handed from the
//!   primary group to the secondary group once per step
//! - `GroupKind` – names the two tiers in queries, logs and errors
//!
//! Force accumulation lives in `forces`, the velocity/position updates in
//! `integrator`; this module owns the buffers and the read-only queries.

use std::fmt;

use nalgebra::Vector2;
use rand::Rng;

use crate::error::{ConfigError, SimError};
use crate::simulation::params::GroupParams;

pub type NVec2 = Vector2<f64>;

/// Which tier a group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Primary,
    Secondary,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Primary => write!(f, "primary"),
            GroupKind::Secondary => write!(f, "secondary"),
        }
    }
}

/// A homogeneous set of bodies
///
/// The three buffers always have the same length, fixed at construction.
/// Body `i` is the `i`-th entry of each buffer for the group's whole lifetime.
#[derive(Debug, Clone)]
pub struct BodyGroup {
    pub(crate) kind: GroupKind,
    pub(crate) pos: Vec<NVec2>, // positions
    pub(crate) vel: Vec<NVec2>, // velocities
    pub(crate) force: Vec<NVec2>, // per-step impulse, dt already folded in
    pub(crate) mass: f64, // shared mass
    pub(crate) radius: f64, // render radius
    pub(crate) dt: f64, // 1 / step
}

impl BodyGroup {
    /// Build a group at explicit positions, at rest
    pub fn new(kind: GroupKind, params: GroupParams, positions: Vec<NVec2>) -> Result<Self, ConfigError> {
        params.validate(kind)?;
        if positions.len() != params.count {
            return Err(ConfigError::PositionCount {
                group: kind,
                given: positions.len(),
                count: params.count,
            });
        }
        if let Some(index) = positions.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ConfigError::NonFinitePosition { group: kind, index });
        }

        let n = params.count;
        Ok(Self {
            kind,
            pos: positions,
            vel: vec![NVec2::zeros(); n],
            force: vec![NVec2::zeros(); n],
            mass: params.mass,
            radius: params.radius,
            dt: params.dt(),
        })
    }

    /// Build a group with positions drawn uniformly from the unit square
    pub fn random<R: Rng + ?Sized>(kind: GroupKind, params: GroupParams, rng: &mut R) -> Result<Self, ConfigError> {
        params.validate(kind)?;
        let positions = (0..params.count)
            .map(|_| NVec2::new(rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();
        Self::new(kind, params, positions)
    }

    /// Zero every force, leaving positions and velocities alone
    pub fn reset_forces(&mut self) {
        for f in self.force.iter_mut() {
            *f = NVec2::zeros();
        }
    }

    /// Copy positions and mass out for another group to read
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            positions: self.pos.clone(),
            mass: self.mass,
        }
    }

    /// First body with a non-finite position or velocity, as an error
    pub fn check_finite(&self) -> Result<(), SimError> {
        let bad = self
            .pos
            .iter()
            .zip(self.vel.iter())
            .position(|(x, v)| !(x.x.is_finite() && x.y.is_finite() && v.x.is_finite() && v.y.is_finite()));
        match bad {
            Some(index) => Err(SimError::NonFinite { group: self.kind, index }),
            None => Ok(()),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn positions(&self) -> &[NVec2] {
        &self.pos
    }

    pub fn velocities(&self) -> &[NVec2] {
        &self.vel
    }

    pub fn forces(&self) -> &[NVec2] {
        &self.force
    }

    /// Total linear momentum, `m * sum(v)`
    pub fn momentum(&self) -> NVec2 {
        self.vel.iter().fold(NVec2::zeros(), |acc, v| acc + v) * self.mass
    }

    /// Mean position (all bodies weigh the same)
    pub fn center_of_mass(&self) -> NVec2 {
        let sum = self.pos.iter().fold(NVec2::zeros(), |acc, x| acc + x);
        sum / self.pos.len() as f64
    }

    /// `0.5 * m * sum(|v|^2)`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.iter().map(|v| v.norm_squared()).sum::<f64>()
    }
}

/// Point-in-time copy of a group, read by cross-group influence
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    positions: Vec<NVec2>,
    mass: f64,
}

impl Snapshot {
    pub fn positions(&self) -> &[NVec2] {
        &self.positions
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
