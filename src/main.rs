//! Trolley Fork main entry point.
//!
//! A small 2D game written in Rust using:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** for the simulation state and per-frame systems
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing) and open the raylib window
//! 2. Build the ECS world: resources, the trolley entity, observers
//! 3. Each frame, run one schedule: input, decision, motion, scheduler, render
//! 4. Leave on Escape or when the window is closed
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use trolleyfork::game::{self, FrameSet};
use trolleyfork::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use trolleyfork::resources::input::InputState;
use trolleyfork::resources::screensize::ScreenSize;
use trolleyfork::systems::input::update_input_state;
use trolleyfork::systems::render::render_system;

/// Steer a runaway trolley through an endless series of forks.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for the people counts, for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // Early-exit: write the configuration and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window ---------------
    let screen = ScreenSize::from_config(&config);
    let mut builder = raylib::init();
    builder
        .size(screen.w, screen.h)
        .title("Trolley Problem");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is read through InputState instead
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::setup(&mut world, config, cli.seed);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    game::add_simulation_systems(&mut update);
    update.add_systems(update_input_state.in_set(FrameSet::Input));
    update.add_systems(render_system.in_set(FrameSet::Render));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().quit_requested()
    {
        update.run(&mut world);
    }

    info!("Bye!");
}
