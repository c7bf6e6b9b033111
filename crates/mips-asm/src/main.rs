use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use mips_rs::pass1::collect_labels;
use mips_rs::pass2::pass2;

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS32 assembler CLI", long_about = None)]
struct Cli {
    /// Input assembly source
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble and emit one 32-digit binary line per instruction
    Assemble {
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Export the pass-one label table to JSON (Vec<{ label, address }>)
        #[arg(long, value_name = "FILE")]
        labels_out: Option<PathBuf>,
    },
    /// Run pass one only and print the label table
    Labels {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LabelKV {
    label: String,
    address: u32,
}

fn label_records(table: &mips_rs::LabelTable) -> Vec<LabelKV> {
    table
        .iter()
        .map(|entry| LabelKV {
            label: entry.label.clone(),
            address: entry.address,
        })
        .collect()
}

fn emit(text: &str, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = fs::read_to_string(&cli.input)?;

    match cli.cmd {
        Command::Assemble { out, labels_out } => {
            let table = collect_labels(&source);
            if let Some(path) = labels_out {
                fs::write(path, serde_json::to_string_pretty(&label_records(&table))?)?;
            }
            let assembly = pass2(&source, &table);
            for diagnostic in &assembly.diagnostics {
                eprintln!("{diagnostic}");
            }
            emit(&assembly.render(), out)?;
        }
        Command::Labels { format, out } => {
            let table = collect_labels(&source);
            let text = match format {
                OutputFormat::Text => table.to_string(),
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&label_records(&table))?;
                    json.push('\n');
                    json
                }
            };
            emit(&text, out)?;
        }
    }

    Ok(())
}
