//! Force contributors for the two-tier engine
//!
//! - internal gravity: every body of a group pulled by every other body of the
//!   same group
//! - [`CrossInfluence`]: every body of a target group pulled by every body of a
//!   source [`Snapshot`], one way only
//!
//! Both accumulate a per-step impulse: the constant `G * dt * m_i * m_j` is
//! multiplied in here, so the integrator adds `force / mass` straight onto the
//! velocity.

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyGroup, NVec2, Snapshot};

/// How the pull between two bodies scales with their separation `r`
///
/// Every law multiplies the raw displacement `diff`; [`ForceLaw::factor`] is
/// the scalar in front of it.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceLaw {
    #[serde(rename = "inverse_distance")] // |F| = k / r
    InverseDistance,

    #[serde(rename = "unit_direction")] // |F| = k, i.e. k / |diff| * diff
    UnitDirection,

    #[serde(rename = "inverse_square")] // |F| = k / r^2
    InverseSquare,
}

impl ForceLaw {
    pub fn factor(self, r: f64) -> f64 {
        match self {
            ForceLaw::InverseDistance => (r * r).recip(),
            ForceLaw::UnitDirection => r.recip(),
            ForceLaw::InverseSquare => (r * r * r).recip(),
        }
    }
}

/// What happens when two interacting bodies sit on the same point
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(tag = "policy")]
pub enum DistancePolicy {
    /// Zero separation is an error; non-finite results are caught after the step
    #[default]
    #[serde(rename = "error")]
    Error,

    /// Nonzero separations are floored at `min_distance`; zero is still an error
    #[serde(rename = "clamp")]
    Clamp { min_distance: f64 },
}

impl DistancePolicy {
    /// Separation to feed the force law, `None` if the pair is degenerate
    fn separation(self, diff: &NVec2) -> Option<f64> {
        let r = diff.norm();
        match self {
            DistancePolicy::Error => (r > 0.0).then_some(r),
            // a zero diff has no direction to clamp along
            DistancePolicy::Clamp { min_distance } => (r > 0.0).then(|| r.max(min_distance)),
        }
    }
}

/// Pull along `diff` with strength constant `k`, `None` when degenerate
fn pull(diff: NVec2, k: f64, law: ForceLaw, policy: DistancePolicy) -> Option<NVec2> {
    let r = policy.separation(&diff)?;
    Some(k * law.factor(r) * diff)
}

impl BodyGroup {
    /// Add the attraction of every other body of this group onto each body
    ///
    /// Ordered pairs, self term skipped, so a one-body group gets nothing.
    /// Each body's sum runs over `j` in index order regardless of backend.
    pub fn accumulate_internal_gravity(&mut self, params: &Parameters) -> Result<(), SimError> {
        let k = params.G * self.dt * self.mass * self.mass;
        let law = params.internal_law;
        let policy = params.distance;
        let group = self.kind;
        let pos = &self.pos;

        params.parallelism.try_for_each_body(&mut self.force, |i, f| {
            let xi = pos[i];
            for (j, xj) in pos.iter().enumerate() {
                if i == j {
                    continue;
                }
                // diff points from i towards j: i is pulled along +diff
                let diff = *xj - xi;
                match pull(diff, k, law, policy) {
                    Some(p) => *f += p,
                    None => return Err(SimError::CoincidentBodies { group, i, j }),
                }
            }
            Ok(())
        })
    }
}

/// One-way pull of a source snapshot onto a target group
///
/// The source is only ever seen through a shared [`Snapshot`], so nothing here
/// can write back into the group that produced it.
pub struct CrossInfluence;

impl CrossInfluence {
    /// `target.force[i] += G * dt_target * m_target * m_source * law(diff) * diff`
    ///
    /// Call after the target's own `reset_forces` and internal gravity for the
    /// same step, and after the source finished its full step.
    pub fn apply(target: &mut BodyGroup, source: &Snapshot, params: &Parameters) -> Result<(), SimError> {
        let k = params.G * target.dt * target.mass * source.mass();
        let law = params.cross_law;
        let policy = params.distance;
        let kind = target.kind;
        let pos = &target.pos;
        let src = source.positions();

        params.parallelism.try_for_each_body(&mut target.force, |i, f| {
            let xi = pos[i];
            for (j, xj) in src.iter().enumerate() {
                let diff = *xj - xi;
                match pull(diff, k, law, policy) {
                    Some(p) => *f += p,
                    None => return Err(SimError::CoincidentCross { target: kind, i, j }),
                }
            }
            Ok(())
        })
    }
}
