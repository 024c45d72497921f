//! OxiCrc CLI - parameterized CRC checksums
//!
//! Checksums files with any CRC up to 64 bits, combines CRCs of adjacent
//! blocks, and benchmarks the carry-less multiplication engine.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{
    BenchOptions, ModelArgs, SumMode, SumOptions, cmd_bench, cmd_combine, cmd_info, cmd_list,
    cmd_sum, cmd_test,
};
use std::path::PathBuf;
use utils::{init_logging, parse_crc, parse_u64};

#[derive(Parser)]
#[command(name = "oxicrc")]
#[command(author, version, about = "Parameterized CRC checksums with CLMUL acceleration")]
#[command(long_about = "
OxiCrc computes CRCs of any width from 1 to 64 bits, accelerated with
PCLMULQDQ (x86_64) or PMULL (aarch64) when the CPU supports it.

Set OXICRC_NO_SIMD=1 to force the table engine.

Examples:
  oxicrc sum file.bin
  oxicrc sum --model CRC-64/XZ a.bin b.bin
  oxicrc sum --width 16 --poly 0x1021 --init 0xffff file.bin
  oxicrc sum --model-file model.json --json file.bin
  oxicrc combine cbf43926 e3069283 --len 1024
  oxicrc test
  oxicrc bench --max-size 10000000
  oxicrc list
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checksum files (stdin when none are given)
    #[command(alias = "s")]
    Sum {
        /// Files to checksum
        files: Vec<PathBuf>,

        #[command(flatten)]
        model: ModelArgs,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Split each file across threads
        #[arg(short, long, conflicts_with = "table")]
        parallel: bool,

        /// Chunk size in bytes for --parallel
        #[arg(long, value_parser = parse_u64, default_value = "1048576")]
        chunk_size: u64,

        /// Use the table engine only
        #[arg(short, long)]
        table: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// CRC of two adjacent blocks from their CRCs
    Combine {
        /// CRC of the first block (hex)
        #[arg(value_parser = parse_crc)]
        crc1: u64,

        /// CRC of the second block (hex)
        #[arg(value_parser = parse_crc)]
        crc2: u64,

        /// Length of the second block in bytes
        #[arg(short, long, value_parser = parse_u64)]
        len: u64,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Self-test every catalog model
    #[command(alias = "t")]
    Test,

    /// Throughput table for CRC-64
    Bench {
        /// Largest buffer size in bytes
        #[arg(long, value_parser = parse_u64, default_value = "100000000")]
        max_size: u64,

        /// Bytes processed per table row
        #[arg(long, value_parser = parse_u64, default_value = "1000000000")]
        budget: u64,

        /// Use the table engine only
        #[arg(short, long)]
        table: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// List catalog models
    #[command(alias = "l")]
    List {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show derived parameters and CPU support
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sum {
            files,
            model,
            json,
            parallel,
            chunk_size,
            table,
            no_progress,
        } => {
            let mode = if table {
                SumMode::Table
            } else if parallel {
                SumMode::Parallel
            } else {
                SumMode::Mapped
            };
            cmd_sum(&SumOptions {
                files: &files,
                model: &model,
                json,
                mode,
                chunk_size: usize::try_from(chunk_size).unwrap_or(usize::MAX),
                progress: !no_progress,
            })
        }
        Commands::Combine {
            crc1,
            crc2,
            len,
            model,
        } => cmd_combine(crc1, crc2, len, &model),
        Commands::Test => cmd_test(cli.verbose > 0),
        Commands::Bench {
            max_size,
            budget,
            table,
            no_progress,
        } => cmd_bench(&BenchOptions {
            max_size,
            budget,
            table,
            progress: !no_progress,
        }),
        Commands::List { json } => cmd_list(json),
        Commands::Info { model } => cmd_info(&model),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxicrc", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
