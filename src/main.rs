use clap::Parser;
use env_logger::Env;

mod argparser;
mod data;
mod data_load;
mod digestion;
mod error;
mod in_silico_digest;
mod list_enzymes;
mod report;
mod scanner;
mod statistics;

use argparser::{Args, Commands};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Digest(digest_args) => in_silico_digest::in_silico_digest(digest_args),
        Commands::Enzymes => list_enzymes::list_enzymes(),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
