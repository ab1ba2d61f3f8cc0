//! # Dash Sim
//!
//! Command-line front end for the drive simulation.
//!
//! ```bash
//! # Play a scenario script and print the final state as JSON
//! dash_sim run demos/drive.toml --snapshot
//!
//! # Same, paced in real time with debug logs
//! dash_sim -v run demos/drive.toml --realtime
//!
//! # Audio settings
//! dash_sim settings show
//! dash_sim settings set --volume 40 --audio false
//!
//! # Print the active gear table
//! dash_sim profiles
//! ```

use clap::{Parser, Subcommand};
use dash_common::config::{ConfigError, ConfigLoader, LogLevel};
use dash_common::consts::DEFAULT_CONFIG_PATH;
use dash_common::settings::SettingsStore;
use dash_common::state::Gear;
use dash_sim::config::SimConfig;
use dash_sim::script::{self, Pacing, Script};
use dash_sim::sim::Simulation;
use dash_sim::sink::{TracingRenderSink, TracingSoundSink, TrackingLever};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Dashboard drive simulation
#[derive(Parser, Debug)]
#[command(name = "dash_sim")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Acceleration and gear state machine for a dashboard simulation")]
struct Args {
    /// Simulation configuration TOML. Missing file means built-in defaults.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a scenario script.
    Run {
        /// Script TOML.
        script: PathBuf,

        /// Pace the virtual clock in real time.
        #[arg(long)]
        realtime: bool,

        /// Print the final state as JSON.
        #[arg(long)]
        snapshot: bool,
    },

    /// Show or change audio settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Print the gear profile table.
    Profiles,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        audio: Option<bool>,

        #[arg(long)]
        volume: Option<u8>,
    },
}

fn main() {
    let args = Args::parse();
    let config = match read_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {e}");
            process::exit(1);
        }
    };
    setup_tracing(&args, config.shared.log_level);

    info!(
        "{} v{} starting...",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run(&args, &config) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

/// Load the config, falling back to defaults when the file does not exist.
fn read_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let config = SimConfig::load_or_default(path)?;
    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: &SimConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::new(&config.settings.path);

    match &args.command {
        Command::Run {
            script: script_path,
            realtime,
            snapshot,
        } => {
            let script = Script::load(script_path)?;
            let settings = store.load()?;
            let mut sim = Simulation::from_config(
                config,
                TracingRenderSink::default(),
                TracingSoundSink::new(settings),
                TrackingLever::default(),
            )?;

            let pacing = if *realtime {
                Pacing::RealTime
            } else {
                Pacing::Unpaced
            };
            let report = script::run(&script, &mut sim, pacing);
            info!(
                accepted = report.accepted,
                rejected = report.rejected,
                "Script finished at {} ms",
                sim.now_ms()
            );
            if report.rejected > 0 {
                warn!("{} script inputs were rejected", report.rejected);
            }

            if *snapshot {
                println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
            }
        }

        Command::Settings { action } => {
            let mut settings = store.load()?;
            if let SettingsAction::Set { audio, volume } = action {
                if let Some(audio) = audio {
                    settings.audio_enabled = *audio;
                }
                if let Some(volume) = volume {
                    settings.volume = *volume;
                }
                store.save(&settings)?;
                info!("Settings saved to {}", store.path().display());
            }
            println!("{}", toml::to_string(&settings.clamped())?);
        }

        Command::Profiles => {
            let table = config.profile_table()?;
            let reverse = table.profile(Gear::Reverse).copied();
            println!("gear  band     interval_ms  step  shift_delay_ms");
            for profile in table.forward().iter().copied().chain(reverse) {
                // Reverse has no automatic band; it only shows its ceiling.
                let band = match table.band_floor(profile.gear) {
                    Some(floor) => format!("{floor}-{}", profile.speed_ceiling),
                    None => format!("0-{}", profile.speed_ceiling),
                };
                println!(
                    "{:<4}  {:<7}  {:>11}  {:>4}  {:>14}",
                    profile.gear.token(),
                    band,
                    profile.tick_interval_ms,
                    profile.tick_step,
                    profile.post_shift_delay_ms
                );
            }
        }
    }

    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and config.
fn setup_tracing(args: &Args, level: LogLevel) {
    let directive = if args.verbose {
        level.at_least(LogLevel::Debug).as_directive()
    } else {
        level.as_directive()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
