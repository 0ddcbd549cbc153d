mod cli;
mod pipeline;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { file } => pipeline::dump_tokens(file.as_deref()),
        Commands::Dump { file } => pipeline::dump_bytecode(file.as_deref()),
    };

    if let Err(error) = result {
        eprintln!("I/O error: {error}");
        process::exit(1);
    }
}
