use clap::Parser;
use restriction::DEFAULT_ENZYMES;

use crate::{
    error::RadError,
    statistics::{SequencingConfig, SizeWindow},
};

#[derive(Parser, Debug)]
pub struct DigestArgs {
    #[arg(short, long, required = true, help = "Fasta file to be digested.")]
    pub fasta: String,

    #[arg(
        short,
        long,
        default_value_t = 300,
        help = "Lower bound (inclusive) for in silico size selection."
    )]
    pub lower_bound: usize,

    #[arg(
        short,
        long,
        default_value_t = 600,
        help = "Upper bound (inclusive) for in silico size selection."
    )]
    pub upper_bound: usize,

    #[arg(
        short,
        long,
        default_value_t = 2,
        help = "Number of reads per fragment, ie. 1 for single-end and 2 for paired-end sequencing."
    )]
    pub reads: usize,

    #[arg(short = 'n', long, default_value_t = 126, help = "Read length.")]
    pub readlen: usize,

    #[arg(
        short,
        long,
        num_args(1..),
        help = "Enzymes to try. Example: '-e EcoRI MseI'. Defaults to the enzymes supported by Stacks."
    )]
    pub enzymes: Option<Vec<String>>,

    #[arg(
        short,
        long,
        help = "Write the report to this .tsv file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,
}

impl DigestArgs {
    pub fn size_window(&self) -> Result<SizeWindow, RadError> {
        SizeWindow::new(self.lower_bound, self.upper_bound)
    }

    pub fn sequencing_config(&self) -> Result<SequencingConfig, RadError> {
        SequencingConfig::new(self.reads, self.readlen)
    }

    pub fn requested_enzymes(&self) -> Vec<String> {
        match &self.enzymes {
            Some(enzymes) => enzymes.clone(),
            None => DEFAULT_ENZYMES.iter().map(|e| e.to_string()).collect(),
        }
    }
}
