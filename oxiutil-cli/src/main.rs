//! OxiUtil CLI - Ascii85 encoding and lazy sorting from the command line.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{
    CodecOptions, KeySpec, SortOptions, cmd_decode, cmd_encode, cmd_escape, cmd_sort,
    cmd_unescape,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxiutil")]
#[command(author, version, about = "OxiUtil - Ascii85 encoding and lazy stable sorting")]
#[command(long_about = "
OxiUtil converts binary data to and from Ascii85 (optionally escaped for use
in HTTP headers) and sorts text lines with a lazy, stable, multi-key sort.
Input is read from FILE, or from stdin when FILE is omitted or '-'.

Examples:
  oxiutil encode image.png
  oxiutil encode --alphabet http-header token.bin
  oxiutil decode -o token.bin token.a85
  oxiutil escape encoded.a85
  oxiutil sort -k 2n -k 1r data.txt
  oxiutil sort -t , -k 3 --head 10 people.csv
  oxiutil completions bash
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data as Ascii85
    #[command(alias = "e")]
    Encode {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,

        /// Output alphabet
        #[arg(short, long, value_enum, default_value = "ascii85")]
        alphabet: Alphabet,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output a JSON summary (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Print sizes to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode Ascii85 text back to binary data
    #[command(alias = "d")]
    Decode {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,

        /// Input alphabet
        #[arg(short, long, value_enum, default_value = "ascii85")]
        alphabet: Alphabet,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print sizes to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Escape Ascii85 text for use in an HTTP header
    Escape {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Turn HTTP-header-escaped text back into Ascii85
    Unescape {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Sort lines of text (stable, lazy)
    #[command(alias = "s")]
    Sort {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,

        /// Sort key: FIELD[n][r] (1-based field, n = numeric, r = descending); repeatable
        #[arg(short, long = "key")]
        keys: Vec<KeySpec>,

        /// Field delimiter (whitespace if omitted)
        #[arg(short = 't', long)]
        delimiter: Option<char>,

        /// Stop after this many lines
        #[arg(long)]
        head: Option<usize>,

        /// Seed for pivot selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print line counts to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Text alphabet for encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Alphabet {
    /// Plain Ascii85 ('!' through 'u', plus 'z')
    #[default]
    Ascii85,
    /// Ascii85 with HTTP header separators escaped
    HttpHeader,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            file,
            alphabet,
            output,
            json,
            verbose,
        } => cmd_encode(&CodecOptions {
            input: file.as_deref(),
            output: output.as_deref(),
            alphabet,
            json,
            verbose,
        }),
        Commands::Decode {
            file,
            alphabet,
            output,
            verbose,
        } => cmd_decode(&CodecOptions {
            input: file.as_deref(),
            output: output.as_deref(),
            alphabet,
            json: false,
            verbose,
        }),
        Commands::Escape { file } => cmd_escape(file.as_deref()),
        Commands::Unescape { file } => cmd_unescape(file.as_deref()),
        Commands::Sort {
            file,
            keys,
            delimiter,
            head,
            seed,
            verbose,
        } => cmd_sort(&SortOptions {
            input: file.as_deref(),
            keys: &keys,
            delimiter,
            head,
            seed,
            verbose,
        }),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxiutil", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
