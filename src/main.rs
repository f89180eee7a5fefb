use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use game_of_life::{
    GameState, LifeConfig, Renderer, presets, run_headless,
    input,
    rendering::{LogRenderer, MacroquadRenderer, window_conf},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Conway's Game of Life", long_about = None)]
struct Args {
    /// TOML configuration file; missing file means defaults
    #[arg(short, long, default_value = "life.toml")]
    config: PathBuf,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Chance in percent that a cell starts alive
    #[arg(short, long)]
    probability: Option<u8>,

    /// Fixed RNG seed for a reproducible start
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Start from a named pattern instead of random seeding
    #[arg(long)]
    pattern: Option<String>,

    /// Run without a window, logging each generation
    #[arg(long)]
    headless: bool,

    /// Number of generations to compute in headless mode
    #[arg(long, default_value_t = 100)]
    generations: u64,
}

impl Args {
    fn apply_overrides(&self, mut config: LifeConfig) -> LifeConfig {
        config.grid_width = self.width.unwrap_or(config.grid_width);
        config.grid_height = self.height.unwrap_or(config.grid_height);
        config.live_probability_percent = self.probability.unwrap_or(config.live_probability_percent);
        config.tick_interval_ms = self.interval_ms.unwrap_or(config.tick_interval_ms);
        config.rng_seed = self.seed.or(config.rng_seed);
        config
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn build_state(args: &Args, config: &LifeConfig) -> Result<GameState> {
    let state = match &args.pattern {
        Some(name) => {
            let pattern = presets::by_name(name).ok_or_else(|| {
                let known: Vec<_> = presets::all_patterns()
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.description))
                    .collect();
                anyhow!("unknown pattern '{name}', expected one of: {}", known.join(", "))
            })?;
            GameState::with_pattern(config, &pattern)?
        }
        None => GameState::new(config)?,
    };
    Ok(state)
}

async fn run_window(mut state: GameState, mut renderer: MacroquadRenderer) {
    loop {
        let commands = input::pressed_commands();
        if commands.contains(&input::Command::Quit) {
            tracing::info!(generation = state.generation, "Window closed by user");
            break;
        }
        state = input::apply_commands(state, &commands);

        let delta = Duration::from_secs_f32(get_frame_time().max(0.0));
        (state, _) = state.tick(delta);

        renderer.render(&state.frame());
        next_frame().await;
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = LifeConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let config = args.apply_overrides(config);
    config.validate().context("invalid configuration")?;
    tracing::info!(?config, "Starting simulation");

    let state = build_state(&args, &config)?;

    if args.headless {
        let mut renderer = LogRenderer::default();
        run_headless(state, args.generations, &mut renderer);
        return Ok(());
    }

    let renderer = MacroquadRenderer::new(&config);
    macroquad::Window::from_config(window_conf(&config), run_window(state, renderer));
    Ok(())
}
