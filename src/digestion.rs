use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::fmt::Write;

use crate::{
    data::{sequence::Sequence, Assembly},
    error::RadError,
    scanner::{resolve_enzymes, MotifScanner},
};

/// Every fragment length produced by one enzyme across the whole assembly.
/// Order carries no meaning, multiplicity does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentPool {
    pub enzyme: String,
    pub lengths: Vec<usize>,
}

impl FragmentPool {
    pub fn new(enzyme: String) -> Self {
        Self {
            enzyme,
            lengths: Vec::new(),
        }
    }

    pub fn extend(&mut self, fragments: Vec<usize>) {
        self.lengths.extend(fragments);
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn total_bp(&self) -> u64 {
        self.lengths.iter().map(|&l| l as u64).sum()
    }
}

/// Splits a linear sequence of `length` bases at `cut_sites`.
///
/// Fragment boundaries are `0`, every cut site and `length`; each fragment is the
/// distance between consecutive boundaries, so the lengths always sum to `length`.
/// A cut at either end of the sequence yields a zero-length fragment, which is kept.
///
/// On failure the offending cut position is returned.
pub fn fragment_lengths(cut_sites: &[usize], length: usize) -> Result<Vec<usize>, usize> {
    let mut fragments = Vec::with_capacity(cut_sites.len() + 1);
    let mut previous = 0;

    for &position in cut_sites {
        if position < previous || position > length {
            return Err(position);
        }
        fragments.push(position - previous);
        previous = position;
    }
    fragments.push(length - previous);

    Ok(fragments)
}

pub struct DigestionEngine<'a, S: MotifScanner + ?Sized> {
    scanner: &'a S,
    enzymes: Vec<String>,
}

impl<'a, S: MotifScanner + ?Sized> DigestionEngine<'a, S> {
    /// Resolves `enzymes` against the scanner up front, so unknown names fail
    /// before any sequence is digested.
    pub fn new<T: AsRef<str>>(scanner: &'a S, enzymes: &[T]) -> Result<Self, RadError> {
        let enzymes = resolve_enzymes(scanner, enzymes)?;
        Ok(Self { scanner, enzymes })
    }

    /// Canonical enzyme names in the order they were requested.
    pub fn enzymes(&self) -> &[String] {
        &self.enzymes
    }

    pub fn digest(&self, sequence: &Sequence, enzyme: &str) -> Result<Vec<usize>, RadError> {
        let cut_sites = self
            .scanner
            .cut_sites(&sequence.sequence, enzyme)
            .ok_or_else(|| RadError::UnknownEnzyme(vec![enzyme.to_string()]))?;

        let length = sequence.len();
        fragment_lengths(&cut_sites, length).map_err(|position| RadError::InvalidCutSite {
            enzyme: enzyme.to_string(),
            sequence: sequence.id.clone(),
            position,
            length,
            reason: if position > length {
                "position exceeds sequence length"
            } else {
                "positions are not in increasing order"
            },
        })
    }

    /// Digests every sequence with every enzyme and pools the fragment lengths per
    /// enzyme. Sequences are digested in parallel on `num_threads` threads; the
    /// per-sequence results are concatenated in assembly order and the pools are
    /// returned in enzyme order.
    pub fn digest_assembly(
        &self,
        assembly: &Assembly,
        num_threads: usize,
    ) -> Result<Vec<FragmentPool>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .context("Could not initialize threadpool")?;

        let pb = ProgressBar::new(assembly.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            })
            .progress_chars("#>-"),
        );

        let per_sequence: Vec<Vec<Vec<usize>>> = pool.install(|| {
            assembly
                .sequences()
                .par_iter()
                .map(|sequence| {
                    let fragments = self
                        .enzymes
                        .iter()
                        .map(|enzyme| self.digest(sequence, enzyme))
                        .collect::<Result<Vec<_>, RadError>>();
                    debug!("Digested '{}'", sequence.id);
                    pb.inc(1);
                    fragments
                })
                .collect::<Result<Vec<_>, RadError>>()
        })?;

        pb.finish_with_message("Finished digesting all sequences.");

        let mut pools: Vec<FragmentPool> = self
            .enzymes
            .iter()
            .map(|enzyme| FragmentPool::new(enzyme.clone()))
            .collect();

        for fragments_by_enzyme in per_sequence {
            for (pool, fragments) in pools.iter_mut().zip(fragments_by_enzyme) {
                pool.extend(fragments);
            }
        }

        Ok(pools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use restriction::EnzymeDatabase;

    /// Scanner that hands out fixed cut sites per (sequence, enzyme).
    struct FixedScanner {
        sites: AHashMap<(Vec<u8>, String), Vec<usize>>,
        enzymes: Vec<String>,
    }

    impl FixedScanner {
        fn new(enzymes: &[&str]) -> Self {
            Self {
                sites: AHashMap::new(),
                enzymes: enzymes.iter().map(|e| e.to_string()).collect(),
            }
        }

        fn with_sites(mut self, sequence: &[u8], enzyme: &str, sites: Vec<usize>) -> Self {
            self.sites
                .insert((sequence.to_vec(), enzyme.to_string()), sites);
            self
        }
    }

    impl MotifScanner for FixedScanner {
        fn canonical_name(&self, enzyme: &str) -> Option<String> {
            self.enzymes
                .iter()
                .find(|e| e.eq_ignore_ascii_case(enzyme))
                .cloned()
        }

        fn cut_sites(&self, sequence: &[u8], enzyme: &str) -> Option<Vec<usize>> {
            self.canonical_name(enzyme)?;
            Some(
                self.sites
                    .get(&(sequence.to_vec(), enzyme.to_string()))
                    .cloned()
                    .unwrap_or_default(),
            )
        }
    }

    fn sequence_of(id: &str, length: usize) -> Sequence {
        Sequence::new(id.to_string(), vec![b'A'; length])
    }

    #[test]
    fn test_fragment_lengths() {
        assert_eq!(fragment_lengths(&[300, 700], 1000), Ok(vec![300, 400, 300]));
    }

    #[test]
    fn test_no_cut_sites_single_fragment() {
        assert_eq!(fragment_lengths(&[], 1000), Ok(vec![1000]));
        assert_eq!(fragment_lengths(&[], 0), Ok(vec![0]));
    }

    #[test]
    fn test_cuts_at_ends_keep_zero_length_fragments() {
        assert_eq!(fragment_lengths(&[0, 10], 10), Ok(vec![0, 10, 0]));
    }

    #[test]
    fn test_length_is_conserved() {
        let cases: Vec<(Vec<usize>, usize)> = vec![
            (vec![], 17),
            (vec![1], 2),
            (vec![0, 5, 9, 13], 13),
            (vec![3, 3, 8], 20),
            (vec![250, 251, 999], 1000),
        ];
        for (cuts, length) in cases {
            let fragments = fragment_lengths(&cuts, length).unwrap();
            assert_eq!(fragments.iter().sum::<usize>(), length);
            assert_eq!(fragments.len(), cuts.len() + 1);
        }
    }

    #[test]
    fn test_invalid_cut_sites() {
        assert_eq!(fragment_lengths(&[700, 300], 1000), Err(300));
        assert_eq!(fragment_lengths(&[300, 1001], 1000), Err(1001));
    }

    #[test]
    fn test_digest_scenario() {
        let sequence = sequence_of("chr1", 1000);
        let scanner = FixedScanner::new(&["EcoRI"]).with_sites(
            &sequence.sequence,
            "EcoRI",
            vec![300, 700],
        );
        let engine = DigestionEngine::new(&scanner, &["EcoRI"]).unwrap();

        assert_eq!(engine.digest(&sequence, "EcoRI"), Ok(vec![300, 400, 300]));
    }

    #[test]
    fn test_digest_rejects_scanner_contract_violation() {
        let sequence = sequence_of("chr1", 100);
        let scanner =
            FixedScanner::new(&["EcoRI"]).with_sites(&sequence.sequence, "EcoRI", vec![50, 20]);
        let engine = DigestionEngine::new(&scanner, &["EcoRI"]).unwrap();

        let result = engine.digest(&sequence, "EcoRI");
        assert_eq!(
            result,
            Err(RadError::InvalidCutSite {
                enzyme: "EcoRI".to_string(),
                sequence: "chr1".to_string(),
                position: 20,
                length: 100,
                reason: "positions are not in increasing order",
            })
        );
    }

    #[test]
    fn test_digest_rejects_out_of_range_cut() {
        let sequence = sequence_of("chr1", 100);
        let scanner =
            FixedScanner::new(&["EcoRI"]).with_sites(&sequence.sequence, "EcoRI", vec![101]);
        let engine = DigestionEngine::new(&scanner, &["EcoRI"]).unwrap();

        let err = engine.digest(&sequence, "EcoRI").unwrap_err();
        assert!(matches!(err, RadError::InvalidCutSite { position: 101, .. }));
    }

    #[test]
    fn test_unknown_enzyme_fails_before_digestion() {
        let db = EnzymeDatabase::builtin().unwrap();
        let result = DigestionEngine::new(&db, &["EcoRI", "NotAnEnzyme"]);
        assert!(matches!(
            result,
            Err(RadError::UnknownEnzyme(names)) if names == vec!["NotAnEnzyme".to_string()]
        ));
    }

    #[test]
    fn test_digest_unresolved_enzyme() {
        let db = EnzymeDatabase::builtin().unwrap();
        let engine = DigestionEngine::new(&db, &["EcoRI"]).unwrap();
        let sequence = sequence_of("chr1", 10);
        assert!(matches!(
            engine.digest(&sequence, "NotAnEnzyme"),
            Err(RadError::UnknownEnzyme(_))
        ));
    }

    #[test]
    fn test_digest_assembly_pools_in_order() -> Result<()> {
        let mut assembly = Assembly::new();
        // EcoRI cuts after the first G of each GAATTC, MseI after the first T of TTAA.
        assembly.add_sequence(Sequence::new(
            "chr1".to_string(),
            b"AAGAATTCAAAAGAATTCAA".to_vec(),
        ))?;
        assembly.add_sequence(Sequence::new("chr2".to_string(), b"CCTTAACC".to_vec()))?;
        assembly.add_sequence(Sequence::new("chr3".to_string(), b"CCCC".to_vec()))?;

        let db = EnzymeDatabase::builtin()?;
        let engine = DigestionEngine::new(&db, &["msei", "EcoRI"])?;
        let pools = engine.digest_assembly(&assembly, 2)?;

        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0].enzyme, "MseI");
        assert_eq!(pools[0].lengths, vec![20, 3, 5, 4]);
        assert_eq!(pools[1].enzyme, "EcoRI");
        assert_eq!(pools[1].lengths, vec![3, 10, 7, 8, 4]);

        for pool in &pools {
            assert_eq!(pool.total_bp(), assembly.total_length() as u64);
        }

        Ok(())
    }

    #[test]
    fn test_digest_assembly_is_thread_count_independent() -> Result<()> {
        let mut assembly = Assembly::new();
        for i in 0..20 {
            let seq = format!("{}GATC{}CATG", "A".repeat(i), "T".repeat(2 * i));
            assembly.add_sequence(Sequence::new(format!("seq_{i}"), seq.into_bytes()))?;
        }

        let db = EnzymeDatabase::builtin()?;
        let engine = DigestionEngine::new(&db, &["DpnII", "NlaIII"])?;

        let single = engine.digest_assembly(&assembly, 1)?;
        let multi = engine.digest_assembly(&assembly, 4)?;
        assert_eq!(single, multi);

        Ok(())
    }
}
