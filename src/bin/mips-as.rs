use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mips_rs::assemble;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble MIPS32 source into 32-bit binary instruction text"
)]
struct Opts {
    /// Input assembly file; reads stdin when omitted
    #[arg(value_name = "ASMFILE")]
    input: Option<PathBuf>,
    /// Turn on debug tracing (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let filter = if opts.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = match &opts.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let assembly = assemble(&source);
    for diagnostic in &assembly.diagnostics {
        eprintln!("{diagnostic}");
    }
    print!("{}", assembly.render());

    Ok(())
}
