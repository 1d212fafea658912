use gravwell::{NVec2, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "two_moons.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    ticks: Option<usize>,

    /// Sample the potential well on a grid with this many lines per side
    #[arg(long)]
    well: Option<usize>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let ticks = args.ticks.unwrap_or(scenario.parameters.ticks);
    let frame_dt = scenario.parameters.h0;
    if frame_dt > scenario.parameters.max_frame_dt {
        warn!(
            "frame time {frame_dt} s exceeds max_frame_dt {} s, clamping",
            scenario.parameters.max_frame_dt
        );
    }

    let report_every = (ticks / 10).max(1);
    let mut contacts = 0;
    let mut wall_hits = 0;

    for tick in 0..ticks {
        let report = scenario.frame(frame_dt);
        contacts += report.contacts;
        wall_hits += report.wall_hits;

        if (tick + 1) % report_every == 0 {
            let sys = &scenario.system;
            info!(
                "tick {:>6}: t = {:.4e} s, KE = {:.4e}, |p| = {:.4e}, min sep = {:?}",
                tick + 1,
                sys.t,
                sys.kinetic_energy(),
                sys.total_momentum().norm(),
                sys.min_separation()
            );
        }
    }

    if !scenario.system.is_finite() {
        warn!("system state went non-finite, lower the time scale or frame clamp");
    }
    info!("ran {ticks} ticks: {contacts} contacts, {wall_hits} wall hits");

    for (i, b) in scenario.bodies().iter().enumerate() {
        println!(
            "body {i}: x = ({:.3}, {:.3}), v = ({:.4e}, {:.4e})",
            b.x.x, b.x.y, b.v.x, b.v.y
        );
    }

    if let Some(lines) = args.well {
        // centre the grid on the scene, or on the centre of mass when unbounded
        let center = match scenario.engine.bounds {
            Some(b) => NVec2::new(0.5 * b.width, 0.5 * b.height),
            None => scenario.system.center_of_mass().unwrap_or_else(NVec2::zeros),
        };
        let field = scenario.sample_well(center, 400.0, lines);
        for row in (0..field.side()).rev() {
            let line: Vec<String> = (0..field.side())
                .filter_map(|col| field.get(row, col))
                .map(|d| format!("{d:8.2}"))
                .collect();
            println!("{}", line.join(" "));
        }
        info!("deepest well sample: {:?}", field.deepest());
    }

    Ok(())
}
