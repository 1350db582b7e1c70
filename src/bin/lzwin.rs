use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use lzwin::{CompressionProfile, Decoder, Encoder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lzwin")]
#[command(about = "Compress or decompress a file with sliding-window LZ77")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: PathBuf,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Window and match-length preset
    #[arg(short, long, value_enum, default_value_t = CompressionProfile::Fast)]
    profile: CompressionProfile,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_OK: u8 = 0;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr; RUST_LOG overrides, otherwise warn (debug with --verbose)
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (e.g. from a test harness) is harmless
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(&args.input)?;
    let profile = args.profile;

    let start = std::time::Instant::now();
    let output = if args.decompress {
        Decoder::from_profile(profile).decompress(&input)?
    } else {
        let (output, stats) = Encoder::from_profile(profile).compress_with_stats(&input);
        if args.verbose {
            eprintln!("Compression complete ({}):", profile.name());
            eprintln!("  Literals:         {}", stats.literals);
            eprintln!("  Matches:          {}", stats.matches);
            eprintln!("  Ratio:            {:.3}", stats.ratio());
        }
        output
    };
    let elapsed = start.elapsed();

    write_output(&args.output, &output)?;

    if args.verbose {
        eprintln!("  Input bytes:      {}", input.len());
        eprintln!("  Output bytes:     {}", output.len());
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            input.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
        );
    }

    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if is_stdio(path) {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        BufReader::new(File::open(path)?).read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(data)?;
        writer.flush()
    }
}
