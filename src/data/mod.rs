pub mod sequence;

use ahash::AHashSet;
use anyhow::{bail, Result};

use crate::data::sequence::Sequence;

/// All sequences of an assembly, kept in file order.
pub struct Assembly {
    sequences: Vec<Sequence>,
    ids: AHashSet<String>,
}

impl Assembly {
    pub fn new() -> Self {
        Self {
            sequences: Vec::new(),
            ids: AHashSet::new(),
        }
    }

    pub fn add_sequence(&mut self, sequence: Sequence) -> Result<()> {
        if self.ids.contains(&sequence.id) {
            bail!("Key error: '{}' already inserted", &sequence.id)
        }

        self.ids.insert(sequence.id.clone());
        self.sequences.push(sequence);
        Ok(())
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Sum of all sequence lengths. This is the genome size used as denominator
    /// for the genome fraction, independent of any enzyme.
    pub fn total_length(&self) -> usize {
        self.sequences.iter().map(Sequence::len).sum()
    }
}
