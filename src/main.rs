//! fretboard — render guitar scale diagrams from the command line.
//!
//! # Commands
//!
//! - `fretboard render <ROOT> <MODE>` - Draw the fretboard as text, SVG or JSON
//! - `fretboard scale <ROOT> <MODE>` - Print the notes of a scale
//! - `fretboard modes` - List the mode catalog
//!
//! # Usage
//!
//! ```bash
//! # Terminal diagram of A minor pentatonic
//! fretboard render A "Pentatonic Minor"
//!
//! # SVG for a web page, 1200 units wide
//! fretboard render Db dorian --format svg --page-width 1200 --output db-dorian.svg
//! ```
//!
//! Set `RUST_LOG=debug` to see what the library is doing.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fretlib::{
    fretboard_to_json, render_fretboard_to_svg, render_fretboard_to_text, Fretboard, Mode, Scale,
};
use tracing::info;

/// Guitar scale visualizer
#[derive(Parser)]
#[command(name = "fretboard")]
#[command(about = "Highlight the notes of a scale on a guitar fretboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the fretboard for a root note and mode
    Render(RenderArgs),

    /// Print the notes of a scale in order
    Scale(ScaleArgs),

    /// List every available mode with its intervals
    Modes,
}

#[derive(Args)]
struct ScaleArgs {
    /// Root note, e.g. C, F#, Bb or "C#/Db"
    root: String,

    /// Mode name, e.g. "Major (Ionian)", dorian, minor-pentatonic
    mode: String,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    scale: ScaleArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// SVG width in user units (SVG only)
    #[arg(long)]
    page_width: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Svg,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render(args),
        Commands::Scale(args) => print_scale(args),
        Commands::Modes => print_modes(),
    }
}

fn resolve(args: &ScaleArgs) -> Result<Scale> {
    Scale::from_names(&args.root, &args.mode)
        .with_context(|| format!("cannot build scale '{} {}'", args.root, args.mode))
}

fn render(args: RenderArgs) -> Result<()> {
    let scale = resolve(&args.scale)?;
    let board = Fretboard::new(scale.root, scale.mode);

    let out = match args.format {
        Format::Text => render_fretboard_to_text(&board),
        Format::Svg => render_fretboard_to_svg(&board, args.page_width),
        Format::Json => fretboard_to_json(&board)?,
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &out)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} ({} bytes)", path.display(), out.len());
        }
        None => std::io::stdout()
            .write_all(out.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn print_scale(args: ScaleArgs) -> Result<()> {
    let scale = resolve(&args)?;
    let notes: Vec<String> = scale.notes().iter().map(|n| n.to_string()).collect();
    println!("{scale}: {}", notes.join(", "));
    println!("{}", scale.mode.description());
    Ok(())
}

fn print_modes() -> Result<()> {
    for mode in Mode::ALL {
        let intervals: Vec<String> = mode.intervals().iter().map(|i| i.to_string()).collect();
        println!("{:<18} {:<22} {}", mode.name(), intervals.join(" "), mode.description());
    }
    Ok(())
}
