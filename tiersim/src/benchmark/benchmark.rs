use std::time::Instant;

use anyhow::Result;

use crate::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::{GroupParams, Parameters};
use crate::simulation::parallel::Parallelism;
use crate::simulation::states::{BodyGroup, GroupKind, NVec2};

/// Time `advance()` for growing secondary groups, serial vs rayon
/// Output is CSV so it can be pasted straight into a spreadsheet
pub fn bench_advance() -> Result<()> {
    // Different secondary sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];

    println!("N,serial_ms,rayon_ms");

    for n in ns {
        // Small n: average over a few steps to smooth noise
        // Large n: fewer steps to keep the run short
        let steps = if n <= 800 { 20 } else { 3 };

        let ms_serial = time_steps(n, steps, Parallelism::Serial)?;
        let ms_rayon = time_steps(n, steps, Parallelism::Rayon)?;

        println!("{},{:.6},{:.6}", n, ms_serial, ms_rayon);
    }
    Ok(())
}

/// Mean wall-clock milliseconds per step
fn time_steps(n: usize, steps: u32, parallelism: Parallelism) -> Result<f64> {
    let mut sim = make_simulation(n, parallelism)?;

    // Warm up
    sim.advance()?;

    let t0 = Instant::now();
    for _ in 0..steps {
        sim.advance()?;
    }
    Ok(t0.elapsed().as_secs_f64() * 1000.0 / steps as f64)
}

/// Three suns plus `n` light bodies on deterministic positions, no rand needed
fn make_simulation(n: usize, parallelism: Parallelism) -> Result<Simulation, ConfigError> {
    let spread = |count: usize, phase: f64| -> Vec<NVec2> {
        (0..count)
            .map(|i| {
                let i_f = i as f64 + phase;
                NVec2::new(0.5 + 0.5 * (i_f * 0.37).sin(), 0.5 + 0.5 * (i_f * 0.13).cos())
            })
            .collect()
    };

    let primary = BodyGroup::new(GroupKind::Primary, GroupParams::new(3, 100.0, 10.0, 1.0e6), spread(3, 0.5))?;
    let secondary = BodyGroup::new(GroupKind::Secondary, GroupParams::new(n, 1.0, 3.0, 1.0e6), spread(n, 0.25))?;

    let parameters = Parameters {
        parallelism,
        ..Parameters::default()
    };
    Simulation::new(primary, secondary, parameters)
}
