use anyhow::{Context, Result};
use log::debug;
use seq_io::fasta::{Reader, Record};
use std::path::Path;

use crate::data::{sequence::Sequence, Assembly};

pub fn load_sequences<P: AsRef<Path>>(path: P) -> Result<Assembly> {
    let mut fasta_reader = Reader::from_path(&path)
        .with_context(|| format!("Failed to open FASTA at: {:?}", path.as_ref()))?;

    let mut assembly = Assembly::new();

    while let Some(record_result) = fasta_reader.next() {
        let record = record_result.with_context(|| "Error reading record from FASTA file.")?;

        let id = record
            .id()
            .map(String::from)
            .with_context(|| "Error extracting record ID")?;

        let sequence = record.owned_seq();
        debug!("Loaded '{}' ({} bp)", id, sequence.len());

        assembly.add_sequence(Sequence::new(id, sequence))?;
    }
    Ok(assembly)
}
