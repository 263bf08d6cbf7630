use anyhow::{Context, Result};
use humantime::format_duration;
use log::{debug, info};
use restriction::EnzymeDatabase;
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
    time::Instant,
};

use crate::{
    data_load::load_sequences, digestion::DigestionEngine, report::write_report,
    statistics::summarize_all,
};

pub mod args;

pub use args::DigestArgs;

pub fn in_silico_digest(args: DigestArgs) -> Result<()> {
    info!(
        "Running radcutter 'digest' with {} threads",
        &args.threads
    );

    if args.threads == 0 {
        anyhow::bail!("Number of threads must be at least 1");
    }

    if let Some(output) = &args.output {
        prepare_output(Path::new(output))?;
    }

    let window = args.size_window()?;
    let config = args.sequencing_config()?;

    let database = EnzymeDatabase::builtin().context("Failed to build enzyme database")?;
    let requested = args.requested_enzymes();
    let engine = DigestionEngine::new(&database, &requested)?;
    info!("Trying the following enzymes: {}", engine.enzymes().join(","));

    info!("Reading input from fasta file '{}'", args.fasta);
    let assembly = load_sequences(&args.fasta)
        .with_context(|| format!("Error loading assembly from path: '{}'", args.fasta))?;

    if assembly.is_empty() {
        anyhow::bail!("No sequences are loaded!");
    }
    info!("Total sequences in assembly: {}", assembly.len());

    let total_length = assembly.total_length();
    info!("Total length fasta sequences: {} bp", total_length);
    info!(
        "Sequencing set-up is {}x{} bp",
        config.reads(),
        config.readlen()
    );
    info!(
        "Selecting restriction fragments between {} and {} bp",
        window.lower_bound(),
        window.upper_bound()
    );

    let digestion_duration = Instant::now();
    let pools = engine.digest_assembly(&assembly, args.threads)?;
    info!(
        "Digestion took: {}",
        format_duration(digestion_duration.elapsed())
    );

    for pool in &pools {
        debug!(
            "{}: {} fragments covering {} bp",
            pool.enzyme,
            pool.len(),
            pool.total_bp()
        );
    }

    let reports = summarize_all(&pools, &window, &config, total_length)?;
    for report in &reports {
        debug!(
            "{}: {} of {} fragments size selected",
            report.enzyme, report.selected_count, report.total_fragments
        );
    }

    match &args.output {
        Some(output) => {
            let outfile = File::create(output)
                .with_context(|| format!("Failed to create file at: {:?}", output))?;
            write_report(BufWriter::new(outfile), &reports)?;
            info!("Report written to {}", output);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&mut handle, &reports)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn prepare_output(outpath: &Path) -> Result<()> {
    match outpath.extension() {
        Some(ext) if ext == "tsv" => {}
        Some(ext) => anyhow::bail!("Incorrect file extension {:?}. Should be tsv", ext),
        None => anyhow::bail!("No filename provided for output. Should be a .tsv file."),
    }

    if let Some(parent) = outpath.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create parent directory: {:?}", parent))?;
        }
    }

    Ok(())
}
