//! Command-line interface for the Brio harness.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Brio - token dump and bytecode disassembly for the Brio language
#[derive(Parser)]
#[command(name = "brio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tokenize a source file and print one line per token
    Tokens {
        /// Path to the source file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Compile a source file and print the disassembled module
    Dump {
        /// Path to the source file; stdin when omitted
        file: Option<PathBuf>,
    },
}
