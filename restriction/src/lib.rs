use regex::bytes::Regex;

mod database;
pub mod enzyme;
mod iupac;

pub use database::EnzymeDatabase;
pub use enzyme::{RestrictionEnzyme, DEFAULT_ENZYMES};
pub use iupac::IupacBase;

/// Start positions of every match of `re` in `sequence`, overlapping matches included.
pub fn find_site_starts(sequence: &[u8], re: &Regex) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut from = 0;

    while let Some(m) = re.find_at(sequence, from) {
        starts.push(m.start());
        from = m.start() + 1;
    }

    starts
}
