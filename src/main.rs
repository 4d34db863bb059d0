//! Space simulation headless frontend.
//!
//! A real-time simulation core written in Rust using:
//! - **bevy_ecs** for the world and systems
//! - **crossbeam-channel** for the command/event bridge to the scheduler thread
//!
//! This executable is a thin stand-in for a presentation layer: it drives the
//! simulation through the command surface and renders emitted events as log
//! lines. The core itself lives in the library modules:
//!
//! - `components` – asteroid data, position, velocity
//! - `events` – commands accepted and events emitted by the scheduler
//! - `resources` – world time, lifecycle, fuel, id registry, configuration
//! - `sim` – the fixed-timestep scheduler thread and its handle
//! - `systems` – movement integration, spawning, snapshots
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seconds 3 --launches 2 --dump-json
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info};

use spacesim::events::sim::SimEvent;
use spacesim::resources::simconfig::SimConfig;
use spacesim::sim::handle::SimHandle;

/// Space simulation prototype
#[derive(Parser)]
#[command(version, about = "Headless frontend for the space simulation core")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// How long to run the simulation, in wall-clock seconds.
    #[arg(long, default_value_t = 3.0)]
    seconds: f64,

    /// Time scale multiplier applied once at startup.
    #[arg(long)]
    time_scale: Option<f64>,

    /// Number of launch attempts, spread over the run.
    #[arg(long, default_value_t = 0)]
    launches: u32,

    /// Print the final asteroid snapshot as JSON on exit.
    #[arg(long, default_value_t = false)]
    dump_json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::with_path(path),
        None => SimConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let mut sim = SimHandle::spawn(config);
    sim.acknowledge_start();

    if let Some(scale) = cli.time_scale {
        if let Err(e) = sim.set_time_scale(scale) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let deadline = Instant::now() + Duration::from_secs_f64(cli.seconds.max(0.0));
    let launch_every = Duration::from_millis(500);
    let mut next_launch = Instant::now();
    let mut launches_left = cli.launches;
    let mut last_snapshot = Vec::new();

    while Instant::now() < deadline {
        if launches_left > 0 && Instant::now() >= next_launch {
            sim.request_launch();
            launches_left -= 1;
            next_launch += launch_every;
        }

        match sim.events().recv_timeout(Duration::from_millis(50)) {
            Ok(SimEvent::LogMessage(text)) => println!("{text}"),
            Ok(SimEvent::LifecycleChanged(state)) => info!("Lifecycle: {state:?}"),
            Ok(SimEvent::FuelChanged(percent)) => info!("Fuel: {percent}%"),
            Ok(SimEvent::TimeChanged(elapsed)) => debug!("Time: {elapsed:.2}s"),
            Ok(SimEvent::EntitiesChanged(snapshot)) => last_snapshot = snapshot,
            Err(_) => {} // no event within the poll window
        }
    }

    sim.stop();

    if cli.dump_json {
        match serde_json::to_string_pretty(&last_snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing snapshot: {e}"),
        }
    }
}
