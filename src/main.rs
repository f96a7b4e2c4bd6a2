use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, WriteLogger};

use animal_shogi::ai::Difficulty;
use animal_shogi::config::{AppConfig, LoggingConfig};
use animal_shogi::ui::App;

/// Play Animal Shogi against the CPU in the terminal.
#[derive(Parser)]
#[command(name = "animal-shogi", version, about = "Play Animal Shogi against the CPU")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "animal-shogi.toml")]
    config: PathBuf,

    /// CPU difficulty: easy or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the easy CPU's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before the CPU replies, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        app_config.game.difficulty = difficulty;
    }
    if let Some(seed) = cli.seed {
        app_config.game.seed = Some(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        app_config.game.cpu_delay_ms = delay_ms;
    }
    if let Some(log_file) = cli.log_file {
        app_config.logging.file = Some(log_file);
    }
    app_config.validate().context("invalid configuration")?;

    init_logging(&app_config.logging)?;
    info!(
        "starting, difficulty {}, cpu delay {}ms",
        app_config.game.difficulty, app_config.game.cpu_delay_ms
    );

    run(&app_config).context("running terminal UI")
}

/// Logs go to a file only; the terminal belongs to the UI.
fn init_logging(config: &LoggingConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    let level = config.level_filter()?;
    if level == LevelFilter::Off {
        return Ok(());
    }
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let log_config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, log_config, file).context("installing logger")?;
    Ok(())
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config.game);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
