//! CLI tool for sheetlink - CSV files and share tokens from the terminal
//!
//! Usage:
//!   sheetlink_cli export data.csv --hide 1 --sort 0   # Re-export a view as CSV
//!   sheetlink_cli share data.csv                      # Print a share token
//!   sheetlink_cli open <token> -o data.csv            # Share token back to CSV
//!   sheetlink_cli cell data.csv B3                    # Print one cell
//!
//! Build with `--features cli`. Set `RUST_LOG=debug` for diagnostics on stderr.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sheetlink::cell_ref::parse_cell_ref;
use sheetlink::csv::{self, Delimiter};
use sheetlink::export::export_view;
use sheetlink::{share, Table, ViewState};

#[derive(Parser, Debug)]
#[command(name = "sheetlink_cli", version, about = "Work with grid CSV files and share tokens")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply hide/sort/filter to a CSV file and export the result
    Export {
        input: PathBuf,
        /// Column index to hide (repeatable)
        #[arg(long = "hide", value_name = "COL")]
        hide: Vec<usize>,
        /// Column index to sort by, ascending
        #[arg(long, value_name = "COL")]
        sort: Option<usize>,
        /// Keep rows whose first column contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the share token for a CSV file
    Share { input: PathBuf },
    /// Decode a share token (or `#token` fragment) into CSV
    Open {
        token: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the value of one cell, addressed like `B3` (row 1 is the first data row)
    Cell { input: PathBuf, cell: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn read_table(path: &Path) -> Result<Table> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    Ok(csv::decode_with(&text, Delimiter::from_file_name(name)))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Written: {}", path.display());
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .context("writing to stdout")?,
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    match args.command {
        Command::Export {
            input,
            hide,
            sort,
            filter,
            output,
        } => {
            let table = read_table(&input)?;
            let mut view = ViewState::default();
            for col in hide {
                view.hide_column(col);
            }
            view.set_sort(sort);
            view.set_filter(filter.as_deref().unwrap_or(""));
            let export = export_view(&table, &view);
            write_output(output.as_deref(), &export.content)?;
        }
        Command::Share { input } => {
            let table = read_table(&input)?;
            println!("{}", share::encode(&table));
        }
        Command::Open { token, output } => {
            let table = share::decode(&token).context("decoding share token")?;
            let all: Vec<usize> = (0..table.col_count()).collect();
            write_output(output.as_deref(), &csv::encode(&table, &all))?;
        }
        Command::Cell { input, cell } => {
            let table = read_table(&input)?;
            let Some(addr) = parse_cell_ref(&cell) else {
                bail!("invalid cell reference: {cell}");
            };
            match table.cell(addr) {
                Some(value) => println!("{value}"),
                None => bail!("{addr} is outside the table"),
            }
        }
    }
    Ok(())
}
