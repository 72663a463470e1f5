//! Fixed-step integrator for a body group
//!
//! Semi-implicit (symplectic) Euler: velocities are kicked by the accumulated
//! impulse first, then positions drift by the new velocities. The step size is
//! already inside the impulse, so the drift is a plain add.

use super::parallel::Parallelism;
use super::states::BodyGroup;

impl BodyGroup {
    /// v_i += f_i / m
    pub fn integrate_velocity(&mut self, par: Parallelism) {
        let m = self.mass;
        let force = &self.force;
        par.for_each_body(&mut self.vel, |i, v| *v += force[i] / m);
    }

    /// x_i += v_i
    pub fn integrate_position(&mut self, par: Parallelism) {
        let vel = &self.vel;
        par.for_each_body(&mut self.pos, |i, x| *x += vel[i]);
    }
}

/// Advance `group` by one step from its accumulated forces
/// Run exactly once per step, after every force contribution for the step.
pub fn semi_implicit_euler(group: &mut BodyGroup, par: Parallelism) {
    // Kick: v_n+1 = v_n + f_n / m
    group.integrate_velocity(par);

    // Drift: x_n+1 = x_n + v_n+1
    group.integrate_position(par);
}
