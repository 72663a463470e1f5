use tiersim::{ScenarioConfig, Scenario, GroupKind};
use tiersim::run_2d;
use tiersim::bench_advance;

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Step the scenario without opening a window
    #[arg(long)]
    headless: bool,

    /// Time `advance()` for a range of group sizes instead
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario) -> Result<()> {
    let steps = scenario.steps;
    let report_every = (steps / 10).max(1);

    for _ in 0..steps {
        scenario.simulation.advance()?;

        let sim = &scenario.simulation;
        if sim.steps() % report_every == 0 {
            let primary = sim.group(GroupKind::Primary);
            let secondary = sim.group(GroupKind::Secondary);
            info!(
                "step {:6}: primary com = ({:.6}, {:.6}) p = ({:.3e}, {:.3e}), secondary com = ({:.6}, {:.6}) ke = {:.3e}",
                sim.steps(),
                primary.center_of_mass().x,
                primary.center_of_mass().y,
                primary.momentum().x,
                primary.momentum().y,
                secondary.center_of_mass().x,
                secondary.center_of_mass().y,
                secondary.kinetic_energy(),
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        return bench_advance();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.headless {
        run_headless(scenario)
    } else {
        run_2d(scenario);
        Ok(())
    }
}
