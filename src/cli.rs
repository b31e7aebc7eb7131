use crate::config::{CodecConfig, Method};
use crate::error::RleError;
use crate::pipeline;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Run-length encoder and decoder (methods A and B)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes a file
    Encode {
        /// Input file to encode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Encoding method [a, b]
        #[arg(short, long, default_value = "a")]
        method: Method,

        /// Overwrite the output file without asking
        #[arg(short, long)]
        force: bool,

        /// Show a progress bar
        #[arg(short, long)]
        progress: bool,
    },
    /// Decodes a file
    Decode {
        /// Input file to decode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Overwrite the output file without asking
        #[arg(short, long)]
        force: bool,

        /// Show a progress bar
        #[arg(short, long)]
        progress: bool,
    },
    /// Shows the method and sizes of an encoded file
    Info {
        /// Encoded file to inspect
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { input, output, method, force, progress } => {
            ensure_exists(input)?;
            let Some(overwrite) = resolve_overwrite(output, *force)? else {
                return Ok(());
            };
            let config = CodecConfig::default()
                .with_method(*method)
                .with_overwrite(overwrite)
                .with_progress(*progress);

            println!("Encoding {} to {} ({})...", input.display(), output.display(), method);
            let start = Instant::now();
            let stats = pipeline::encode_file(input, output, &config)?;
            let duration = start.elapsed();

            println!("Encoding successful!");
            println!("  Original Size:  {} bytes", stats.original_size);
            println!("  Encoded Size:   {} bytes", stats.encoded_size);
            println!("  Ratio:          {:.2}x", stats.ratio);
            println!("  Elapsed Time:   {:.2?}", duration);
        }
        Commands::Decode { input, output, force, progress } => {
            ensure_exists(input)?;
            let Some(overwrite) = resolve_overwrite(output, *force)? else {
                return Ok(());
            };
            let config = CodecConfig::default()
                .with_overwrite(overwrite)
                .with_progress(*progress);

            println!("Decoding {} to {}...", input.display(), output.display());
            let start = Instant::now();
            let stats = pipeline::decode_file(input, output, &config)?;
            let duration = start.elapsed();

            println!("Decoding successful! ({})", stats.method);
            println!("  Decoded Size: {} bytes", stats.original_size);
            println!("  Elapsed Time: {:.2?}", duration);
        }
        Commands::Info { input } => {
            ensure_exists(input)?;
            let mut reader = BufReader::new(File::open(input)?);
            let stats = pipeline::info(&mut reader)?;

            println!("{}", input.display());
            println!("  Method:         {} (tag {:#04x})", stats.method, stats.method.tag());
            println!("  Encoded Size:   {} bytes", stats.encoded_size);
            println!("  Decoded Size:   {} bytes", stats.original_size);
            println!("  Ratio:          {:.2}x", stats.ratio);
        }
    }

    Ok(())
}

fn ensure_exists(path: &Path) -> Result<(), RleError> {
    if path.exists() {
        Ok(())
    } else {
        Err(RleError::InputNotFound(path.to_path_buf()))
    }
}

/// Decide whether `output` may be written, asking on the terminal if it exists.
///
/// `None` means the user declined and nothing should be written.
fn resolve_overwrite(output: &Path, force: bool) -> Result<Option<bool>, RleError> {
    if force || !output.exists() {
        return Ok(Some(force));
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if confirm_overwrite(output, &mut stdin.lock(), &mut stdout)? {
        Ok(Some(true))
    } else {
        println!("File will not be overwritten");
        Ok(None)
    }
}

/// Prompt for overwriting `path`; only an answer of `y` confirms.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    prompt: &mut W,
) -> io::Result<bool> {
    write!(prompt, "File {} exists. Overwrite (y or n)? ", path.display())?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
