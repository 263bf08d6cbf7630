use clap::{Parser, Subcommand};

use crate::in_silico_digest::DigestArgs;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// In silico digest an assembly and report size-selected fragment statistics per enzyme.
    Digest(DigestArgs),

    /// List the supported restriction enzymes.
    Enzymes,
}
