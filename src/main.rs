//! euclidgen — render Euclidean rhythms to WAV, list famous patterns, or
//! render a whole collection.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use euclidgen::batch::{self, BatchConfig};
use euclidgen::export;
use euclidgen::rhythm::{self, CATALOG};
use euclidgen::synth::{self, AudioParams};

const DEFAULT_STEPS: u32 = 16;
const DEFAULT_PULSES: u32 = 6;
const DEFAULT_OUTPUT: &str = "euclid.wav";

#[derive(Parser, Debug)]
#[command(name = "euclidgen")]
#[command(about = "Generate Euclidean rhythms and render them as percussive WAV audio")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one rhythm to a WAV file (the default)
    Render(RenderArgs),

    /// Print a catalog of famous rhythms and their patterns
    Demo,

    /// Render every rhythm of a batch config into its own WAV file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Number of time steps in the pattern
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: u32,

    /// Number of drum hits to distribute
    #[arg(long, default_value_t = DEFAULT_PULSES)]
    pulses: u32,

    /// Tempo; each step lasts one beat
    #[arg(long, default_value_t = AudioParams::default().bpm)]
    bpm: u32,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = AudioParams::default().sample_rate)]
    sample_rate: u32,

    /// Length of each drum hit in milliseconds
    #[arg(long, default_value_t = AudioParams::default().drum_length_ms)]
    drum_length_ms: u32,

    /// Drum pitch in Hz
    #[arg(long, default_value_t = AudioParams::default().drum_freq_hz)]
    drum_freq: f64,

    /// WAV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Default for RenderArgs {
    fn default() -> Self {
        let params = AudioParams::default();
        Self {
            steps: DEFAULT_STEPS,
            pulses: DEFAULT_PULSES,
            bpm: params.bpm,
            sample_rate: params.sample_rate,
            drum_length_ms: params.drum_length_ms,
            drum_freq: params.drum_freq_hz,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// YAML config (defaults to ~/.euclidgen/batch.yaml, or the built-in collection)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the rendered files, overriding the config
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => run_render(&RenderArgs::default()),
        Some(Command::Render(args)) => run_render(&args),
        Some(Command::Demo) => {
            run_demo();
            Ok(())
        }
        Some(Command::Batch(args)) => run_batch(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_render(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = AudioParams {
        sample_rate: args.sample_rate,
        bpm: args.bpm,
        drum_length_ms: args.drum_length_ms,
        drum_freq_hz: args.drum_freq,
    };

    println!("=== Euclidean Rhythm Generator ===");
    println!("Generating pattern: {} steps, {} pulses", args.steps, args.pulses);
    println!("Tempo: {} BPM", params.bpm);
    println!("Audio: {} Hz, {}-bit", params.sample_rate, synth::mixer::BITS_PER_SAMPLE);

    let pattern = rhythm::generate(args.steps, args.pulses)?;
    println!("Pattern: {pattern} (X=hit, .=rest)");

    let buffer = synth::render(&pattern, &params)?;
    export::write_wav(&args.output, &buffer)?;

    println!("Generated '{}' with Euclidean rhythm!", args.output.display());
    println!("Duration: {:.1} seconds", buffer.duration_secs());
    println!("File size: {:.1} KB", buffer.data_size_bytes() as f64 / 1024.0);
    Ok(())
}

fn run_demo() {
    println!("EUCLIDEAN RHYTHMS DEMONSTRATION");
    println!("===============================");
    println!();

    for (i, rhythm) in CATALOG.iter().enumerate() {
        let pattern = match rhythm.pattern() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}: {e}", rhythm.name);
                continue;
            }
        };
        println!("{}. {} ({}/{})", i + 1, rhythm.name, rhythm.pulses, rhythm.steps);
        println!("   Pattern: {pattern}");
        println!("   Origin:  {}", rhythm.origin);
        println!("   Notes:   {}", rhythm.description);
        println!(
            "   Density: {:.1}% ({:.1} pulses per beat)",
            rhythm.density_percent(),
            rhythm.pulses_per_beat()
        );
        println!();
    }

    println!("Render any of these with:");
    println!("  euclidgen render --steps <n> --pulses <k> [--bpm <bpm>] [--drum-freq <hz>]");
}

fn run_batch(args: &BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => BatchConfig::load(path)?,
        None => BatchConfig::load_or_default(&batch::default_config_path())?,
    };
    let output_dir = args.output_dir.as_ref().unwrap_or(&config.output_dir);

    println!("EUCLIDEAN RHYTHM COLLECTION GENERATOR");
    println!("=====================================");

    let report = batch::run_into(&config, output_dir);
    for rendered in &report.rendered {
        println!(
            "Generated {}: {} -> {}",
            rendered.name,
            rendered.pattern,
            rendered.path.display()
        );
    }
    for (name, e) in &report.failed {
        eprintln!("Error generating {name}: {e}");
    }

    println!();
    println!(
        "Generated {} of {} rhythms in '{}'",
        report.rendered.len(),
        config.rhythms.len(),
        output_dir.display()
    );
    Ok(())
}
