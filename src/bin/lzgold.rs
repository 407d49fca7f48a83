use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use lzgold::vectors::{EXPECTED_FILE, META_FILE, TOKENS_FILE};
use lzgold::{LzConfig, TestVectors};

/// Input used when neither --input nor --text is given
const DEFAULT_TEXT: &str = "1010ABABX";

#[derive(Parser, Debug)]
#[command(name = "lzgold")]
#[command(about = "Generate LZ77 golden-model test vectors for a hardware decoder")]
#[command(version)]
struct Args {
    /// Input file to compress (use - for stdin)
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Literal input text to compress
    #[arg(short, long)]
    text: Option<String>,

    /// Directory for tokens.mem, expected.mem and meta.mem
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Back-reference window in bytes
    #[arg(long, default_value_t = lzgold::DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Maximum match length
    #[arg(long, default_value_t = lzgold::DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Distance field width in bits
    #[arg(long, default_value_t = lzgold::DEFAULT_DIST_WIDTH)]
    dist_width: u8,

    /// Length field width in bits
    #[arg(long, default_value_t = lzgold::DEFAULT_LEN_WIDTH)]
    len_width: u8,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = LzConfig {
        window_size: args.window,
        max_length: args.max_length,
        dist_width: args.dist_width,
        len_width: args.len_width,
    };

    let data = read_input(&args)?;

    let start = std::time::Instant::now();
    let vectors = TestVectors::generate(&data, &config)?;
    vectors.write_to_dir(&args.out_dir)?;
    let elapsed = start.elapsed();

    let stats = vectors.stats();
    eprintln!("Generated: {}, {}, {}", TOKENS_FILE, EXPECTED_FILE, META_FILE);
    eprintln!("NUM_TOKENS = {}", stats.tokens);
    eprintln!("EXP_LEN    = {}", vectors.expected().len());

    if args.verbose {
        eprintln!("Statistics:");
        eprintln!("  Input bytes:      {}", stats.input_bytes);
        eprintln!("  Match tokens:     {}", stats.match_tokens);
        eprintln!("  Literal tokens:   {}", stats.literal_tokens);
        eprintln!("  Longest match:    {}", stats.longest_match);
        eprintln!("  Token width:      {} bits", config.token_width());
        if stats.input_bytes > 0 {
            eprintln!(
                "  Ratio:            {:.3}",
                stats.packed_bits as f64 / (stats.input_bytes as f64 * 8.0)
            );
        }
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    Ok(())
}

fn read_input(args: &Args) -> io::Result<Vec<u8>> {
    match (&args.input, &args.text) {
        (Some(path), _) if path.to_str() == Some("-") => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
        (Some(path), _) => fs::read(path),
        (None, Some(text)) => Ok(text.as_bytes().to_vec()),
        (None, None) => Ok(DEFAULT_TEXT.as_bytes().to_vec()),
    }
}
