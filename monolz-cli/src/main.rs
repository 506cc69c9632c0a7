//! MonoLZ CLI - whole-file compression with the LZ77 + monotone-code codec.
//!
//! The codec itself never touches the file system; this binary owns the
//! file handles, feeds whole files through the library, and reports sizes
//! and token counts, either human-readable or as JSON.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use monolz_lz77::{
    CountingSink, Lz77Encoder, Lz77Params, Token, TokenSink, decode, params,
};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension for compressed files.
const COMPRESSED_EXT: &str = "lza";

#[derive(Parser)]
#[command(name = "monolz")]
#[command(author, version, about = "LZ77 file compressor with monotone-coded lengths")]
#[command(long_about = "
MonoLZ compresses a file by replacing repeated byte runs with window
back-references and writing match lengths in a self-delimiting monotone
code.

Examples:
  monolz compress notes.txt
  monolz compress notes.txt -o packed.lza --window 65535
  monolz decompress notes.txt.lza
  monolz decompress packed.lza -o notes.txt --trace
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to `<input>.lza`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Search window size in bytes (1-65535)
        #[arg(long, default_value_t = params::DEFAULT_WINDOW_SIZE)]
        window: usize,

        /// Minimum match length worth a back-reference
        #[arg(long, default_value_t = params::DEFAULT_MIN_MATCH)]
        min_match: usize,

        /// Maximum length of a single match
        #[arg(long, default_value_t = params::DEFAULT_MAX_MATCH)]
        max_match: usize,

        /// Print one line per emitted token to stderr
        #[arg(short, long)]
        trace: bool,

        /// Print stats as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a .lza file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to the input without its .lza extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print one line per consumed token to stderr
        #[arg(short, long)]
        trace: bool,

        /// Print stats as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            window,
            min_match,
            max_match,
            trace,
            json,
        } => cmd_compress(&input, output, window, min_match, max_match, trace, json),
        Commands::Decompress {
            input,
            output,
            trace,
            json,
        } => cmd_decompress(&input, output, trace, json),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "monolz", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Stats reported after either operation.
#[derive(Debug, Serialize)]
struct CodecStats {
    operation: &'static str,
    input: String,
    output: String,
    input_bytes: u64,
    output_bytes: u64,
    ratio: f64,
    literals: u64,
    references: u64,
}

impl CodecStats {
    fn print(&self, json: bool) -> CliResult {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            println!("{}: {} -> {}", self.operation, self.input, self.output);
            println!("  input:      {} bytes", self.input_bytes);
            println!("  output:     {} bytes", self.output_bytes);
            println!("  ratio:      {:.3}", self.ratio);
            println!("  literals:   {}", self.literals);
            println!("  references: {}", self.references);
        }
        Ok(())
    }
}

/// Forwards every token to a [`CountingSink`] and, optionally, a stderr
/// trace line - the caller-supplied logging channel the codec expects.
#[derive(Debug, Default)]
struct CliSink {
    counts: CountingSink,
    trace: bool,
    index: u64,
}

impl CliSink {
    fn new(trace: bool) -> Self {
        Self {
            trace,
            ..Self::default()
        }
    }
}

impl TokenSink for CliSink {
    fn record(&mut self, token: &Token) {
        if self.trace {
            match token {
                Token::Literal(byte) => {
                    eprintln!("{:>8}  lit  {:#04x}", self.index, byte);
                }
                Token::Reference { offset, length } => {
                    eprintln!("{:>8}  ref  offset={} length={}", self.index, offset, length);
                }
            }
        }
        self.index += 1;
        self.counts.record(token);
    }
}

fn build_params(window: usize, min_match: usize, max_match: usize) -> Result<Lz77Params, String> {
    if window == 0 || window > params::MAX_WINDOW_SIZE {
        return Err(format!(
            "window size must be between 1 and {}, got {}",
            params::MAX_WINDOW_SIZE,
            window
        ));
    }
    if min_match == 0 {
        return Err("minimum match length must be at least 1".into());
    }
    if max_match < min_match {
        return Err(format!(
            "maximum match length {} is below the minimum {}",
            max_match, min_match
        ));
    }
    Ok(Lz77Params::new(window, min_match, max_match))
}

fn default_compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(COMPRESSED_EXT);
    PathBuf::from(name)
}

fn default_decompressed_path(input: &Path) -> Result<PathBuf, String> {
    if input.extension().and_then(|e| e.to_str()) == Some(COMPRESSED_EXT) {
        Ok(input.with_extension(""))
    } else {
        Err(format!(
            "{} has no .{} extension; specify an output with -o",
            input.display(),
            COMPRESSED_EXT
        ))
    }
}

fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    window: usize,
    min_match: usize,
    max_match: usize,
    trace: bool,
    json: bool,
) -> CliResult {
    let params = build_params(window, min_match, max_match)?;
    let out_path = output.unwrap_or_else(|| default_compressed_path(input));

    let source = std::fs::read(input)?;

    let encoder = Lz77Encoder::new(params);
    let mut sink = CliSink::new(trace);
    let mut writer = BufWriter::new(File::create(&out_path)?);
    encoder.compress_to_writer_with_sink(&source, &mut writer, &mut sink)?;
    writer.flush()?;

    let output_bytes = std::fs::metadata(&out_path)?.len();
    CodecStats {
        operation: "compress",
        input: input.display().to_string(),
        output: out_path.display().to_string(),
        input_bytes: source.len() as u64,
        output_bytes,
        ratio: if source.is_empty() {
            1.0
        } else {
            output_bytes as f64 / source.len() as f64
        },
        literals: sink.counts.literals,
        references: sink.counts.references,
    }
    .print(json)
}

fn cmd_decompress(input: &Path, output: Option<PathBuf>, trace: bool, json: bool) -> CliResult {
    let out_path = match output {
        Some(path) => path,
        None => default_decompressed_path(input)?,
    };

    let input_bytes = std::fs::metadata(input)?.len();
    let reader = BufReader::new(File::open(input)?);

    let mut sink = CliSink::new(trace);
    let restored = decode::decompress_from_reader_with_sink(reader, &mut sink)?;
    std::fs::write(&out_path, &restored)?;

    CodecStats {
        operation: "decompress",
        input: input.display().to_string(),
        output: out_path.display().to_string(),
        input_bytes,
        output_bytes: restored.len() as u64,
        ratio: if restored.is_empty() {
            1.0
        } else {
            input_bytes as f64 / restored.len() as f64
        },
        literals: sink.counts.literals,
        references: sink.counts.references,
    }
    .print(json)
}
