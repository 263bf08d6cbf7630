use serde::{Serialize, Serializer};

use crate::{digestion::FragmentPool, error::RadError};

/// Closed interval of fragment lengths retained by size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeWindow {
    lower_bound: usize,
    upper_bound: usize,
}

impl SizeWindow {
    pub fn new(lower_bound: usize, upper_bound: usize) -> Result<Self, RadError> {
        if lower_bound > upper_bound {
            return Err(RadError::InvalidConfiguration(format!(
                "lower bound ({}) is greater than upper bound ({})",
                lower_bound, upper_bound
            )));
        }
        Ok(Self {
            lower_bound,
            upper_bound,
        })
    }

    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, fragment_length: usize) -> bool {
        self.lower_bound <= fragment_length && fragment_length <= self.upper_bound
    }
}

/// Reads sequenced per fragment (1 = single-end, 2 = paired-end) and read length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencingConfig {
    reads: usize,
    readlen: usize,
}

impl SequencingConfig {
    pub fn new(reads: usize, readlen: usize) -> Result<Self, RadError> {
        if reads == 0 {
            return Err(RadError::InvalidConfiguration(
                "number of reads per fragment must be positive".to_string(),
            ));
        }
        if readlen == 0 {
            return Err(RadError::InvalidConfiguration(
                "read length must be positive".to_string(),
            ));
        }
        Ok(Self { reads, readlen })
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn readlen(&self) -> usize {
        self.readlen
    }
}

/// Summary of a size-selected digest for one enzyme. Serialized fields follow the
/// column order of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnzymeReport {
    pub enzyme: String,
    pub selected_count: u64,
    /// Sequenced bases, i.e. reads x read length for every selected fragment.
    pub captured_bp: u64,
    pub total_reads: u64,
    #[serde(serialize_with = "two_decimals")]
    pub capture_percentage: f64,
    #[serde(skip)]
    pub total_fragments: u64,
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

/// Applies the size window to `pool` and estimates how much of the genome the
/// selected fragments would cover when sequenced with `config`.
///
/// The estimate counts sequenced bases (`reads * readlen` per selected fragment),
/// not the lengths of the selected fragments themselves.
pub fn summarize(
    pool: &FragmentPool,
    window: &SizeWindow,
    config: &SequencingConfig,
    total_genome_length: usize,
) -> Result<EnzymeReport, RadError> {
    if total_genome_length == 0 {
        return Err(RadError::DivisionByZero);
    }

    let selected_count = pool
        .lengths
        .iter()
        .filter(|&&length| window.contains(length))
        .count() as u64;

    let reads = config.reads as u64;
    let readlen = config.readlen as u64;

    let capture_percentage = (selected_count as f64 * reads as f64 * readlen as f64
        / total_genome_length as f64)
        * 100.0;

    let overflow = || {
        RadError::InvalidConfiguration(format!(
            "{} selected fragments x {} reads x {} bp overflows the sequenced base count",
            selected_count, reads, readlen
        ))
    };
    let total_reads = selected_count.checked_mul(reads).ok_or_else(overflow)?;
    let captured_bp = total_reads.checked_mul(readlen).ok_or_else(overflow)?;

    Ok(EnzymeReport {
        enzyme: pool.enzyme.clone(),
        selected_count,
        captured_bp,
        total_reads,
        capture_percentage,
        total_fragments: pool.len() as u64,
    })
}

/// One report per pool, in pool order.
pub fn summarize_all(
    pools: &[FragmentPool],
    window: &SizeWindow,
    config: &SequencingConfig,
    total_genome_length: usize,
) -> Result<Vec<EnzymeReport>, RadError> {
    pools
        .iter()
        .map(|pool| summarize(pool, window, config, total_genome_length))
        .collect()
}
