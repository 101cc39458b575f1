//! polya CLI - count matrices up to row and column permutation and typeset
//! the cycle-index polynomials behind the count.

mod document;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polya_cycle::{count_matrices, CycleIndexCache};
use polya_integers::Rational;
use polya_poly::LatexStyle;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use document::{Document, PdfLatex};

/// Pólya counting with exact cycle-index polynomials.
#[derive(Parser, Debug)]
#[command(name = "polya", version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count width × height matrices over `symbols` letters up to row and
    /// column permutation.
    Count {
        /// Number of columns.
        #[arg(short = 'w', long)]
        width: usize,
        /// Number of rows.
        #[arg(short = 'H', long)]
        height: usize,
        /// Alphabet size; `n` or `n/d`.
        #[arg(short, long)]
        symbols: Rational,
    },

    /// Print the cycle index of the symmetric group on `n` letters.
    CycleIndex {
        /// Number of letters.
        n: usize,
        /// Print as LaTeX `matrix*` rows instead of plain text.
        #[arg(long)]
        latex: bool,
    },

    /// Write a LaTeX document with Z(S_width) ⊗ Z(S_height) and compile it.
    Document {
        /// Size of the first symmetric group.
        #[arg(short = 'w', long, default_value_t = 5)]
        width: usize,
        /// Size of the second symmetric group.
        #[arg(short = 'H', long, default_value_t = 6)]
        height: usize,
        /// Path of the generated `.tex` file.
        #[arg(short, long, default_value = "funcs.tex")]
        output: PathBuf,
        /// Monomials per row.
        #[arg(long, default_value_t = 3)]
        terms_per_row: usize,
        /// Only write the `.tex` file.
        #[arg(long)]
        no_compile: bool,
        /// Keep the `.aux` and `.log` files pdflatex leaves behind.
        #[arg(long)]
        keep_aux: bool,
        /// LaTeX compiler executable.
        #[arg(long, env = "POLYA_PDFLATEX", default_value = "pdflatex")]
        pdflatex: String,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    let mut cache = CycleIndexCache::new();

    match command {
        Command::Count {
            width,
            height,
            symbols,
        } => {
            let count = count_matrices(&mut cache, width, height, symbols);
            println!("{count}");
        }

        Command::CycleIndex { n, latex } => {
            let z = cache.symmetric(n);
            if latex {
                println!("{}", LatexStyle::default().render(z));
            } else {
                println!("{z}");
            }
        }

        Command::Document {
            width,
            height,
            output,
            terms_per_row,
            no_compile,
            keep_aux,
            pdflatex,
        } => {
            let columns = cache.symmetric(width).clone();
            let product = columns.direct_product(cache.symmetric(height));
            debug!(terms = product.len(), "rendering direct product");

            let style = LatexStyle {
                terms_per_row,
                ..LatexStyle::default()
            };
            let document = Document::new(style.render(&product));
            document
                .write(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!(".tex saved as \"{}\"", output.display());

            if !no_compile {
                info!("compiling .pdf");
                let compiler = PdfLatex::new(pdflatex);
                compiler
                    .compile(&output)
                    .with_context(|| format!("failed to compile {}", output.display()))?;
                println!(".pdf successfully generated");

                if !keep_aux {
                    compiler
                        .clean(&output)
                        .context("failed to remove auxiliary files")?;
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
