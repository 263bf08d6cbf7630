use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use regex::bytes::{Regex, RegexBuilder};

use crate::{
    enzyme::{site_to_regex, RestrictionEnzyme},
    find_site_starts,
};

/// Name, recognition site and top-strand cut offset of every enzyme shipped with
/// the tool. The first block mirrors the Stacks enzyme list.
const BUILTIN_ENZYMES: &[(&str, &str, usize)] = &[
    ("ApeKI", "GCWGC", 1),
    ("ApoI", "RAATTY", 1),
    ("BamHI", "GGATCC", 1),
    ("BglII", "AGATCT", 1),
    ("BstYI", "RGATCY", 1),
    ("ClaI", "ATCGAT", 2),
    ("DpnII", "GATC", 0),
    ("EaeI", "YGGCCR", 1),
    ("EcoRI", "GAATTC", 1),
    ("EcoRV", "GATATC", 3),
    ("EcoT22I", "ATGCAT", 5),
    ("HindIII", "AAGCTT", 1),
    ("KpnI", "GGTACC", 5),
    ("MluCI", "AATT", 0),
    ("MseI", "TTAA", 1),
    ("MspI", "CCGG", 1),
    ("NdeI", "CATATG", 2),
    ("NheI", "GCTAGC", 1),
    ("NlaIII", "CATG", 4),
    ("NotI", "GCGGCCGC", 2),
    ("NsiI", "ATGCAT", 5),
    ("PstI", "CTGCAG", 5),
    ("SacI", "GAGCTC", 5),
    ("Sau3AI", "GATC", 0),
    ("SbfI", "CCTGCAGG", 6),
    ("SexAI", "ACCWGGT", 1),
    ("SgrAI", "CRCCGGYG", 2),
    ("SpeI", "ACTAGT", 1),
    ("SphI", "GCATGC", 5),
    ("TaqI", "TCGA", 1),
    ("XbaI", "TCTAGA", 1),
    ("XhoI", "CTCGAG", 1),
    // Other common cutters
    ("AluI", "AGCT", 2),
    ("ApaI", "GGGCCC", 5),
    ("AseI", "ATTAAT", 2),
    ("BfaI", "CTAG", 1),
    ("CviAII", "CATG", 1),
    ("HaeIII", "GGCC", 2),
    ("HhaI", "GCGC", 3),
    ("HpaI", "GTTAAC", 3),
    ("NcoI", "CCATGG", 1),
    ("SalI", "GTCGAC", 1),
    ("SmaI", "CCCGGG", 3),
];

struct ScanPattern {
    forward: Regex,
    // Only set for non-palindromic sites.
    reverse: Option<Regex>,
}

impl ScanPattern {
    fn new(enzyme: &RestrictionEnzyme) -> Result<Self> {
        let forward = compile(&site_to_regex(&enzyme.site))
            .with_context(|| format!("Failed to compile recognition site of {}", enzyme.name))?;

        let reverse = if enzyme.is_palindromic() {
            None
        } else {
            Some(
                compile(&site_to_regex(&enzyme.reverse_complement_site())).with_context(|| {
                    format!(
                        "Failed to compile reverse recognition site of {}",
                        enzyme.name
                    )
                })?,
            )
        };

        Ok(Self { forward, reverse })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// Recognition data for a set of restriction enzymes together with the compiled
/// scan patterns used to locate their cut sites.
pub struct EnzymeDatabase {
    enzymes: Vec<RestrictionEnzyme>,
    patterns: Vec<ScanPattern>,
    index: AHashMap<String, usize>,
}

impl EnzymeDatabase {
    pub fn new(enzymes: Vec<RestrictionEnzyme>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(enzymes.len());
        let mut patterns = Vec::with_capacity(enzymes.len());

        for (i, enzyme) in enzymes.iter().enumerate() {
            if index.insert(enzyme.name.to_lowercase(), i).is_some() {
                bail!("Enzyme '{}' defined more than once", enzyme.name);
            }
            patterns.push(ScanPattern::new(enzyme)?);
        }

        Ok(Self {
            enzymes,
            patterns,
            index,
        })
    }

    /// Database with every enzyme shipped with the tool.
    pub fn builtin() -> Result<Self> {
        let enzymes = BUILTIN_ENZYMES
            .iter()
            .map(|&(name, site, cut)| RestrictionEnzyme::new(name, site, cut))
            .collect::<Result<Vec<_>>>()?;
        Self::new(enzymes)
    }

    pub fn enzymes(&self) -> &[RestrictionEnzyme] {
        &self.enzymes
    }

    /// Case-insensitive lookup. The returned enzyme carries the canonical name.
    pub fn resolve(&self, name: &str) -> Option<&RestrictionEnzyme> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.enzymes[i])
    }

    /// Positions at which `name` cuts the linear `sequence`, returned strictly
    /// increasing. A position is the number of bases 5' of the top-strand cut, so
    /// every value lies in `0..=sequence.len()`. Biopython's `search` reports the
    /// 1-based base after the cut instead, i.e. one more than the values here.
    ///
    /// Matching ignores case and allows overlapping recognition sites. Returns
    /// `None` if the enzyme is not in the database.
    pub fn cut_sites(&self, sequence: &[u8], name: &str) -> Option<Vec<usize>> {
        let i = *self.index.get(&name.trim().to_lowercase())?;
        let enzyme = &self.enzymes[i];
        let pattern = &self.patterns[i];
        let site_len = enzyme.site.len();

        let mut positions: Vec<usize> = find_site_starts(sequence, &pattern.forward)
            .into_iter()
            .map(|start| start + enzyme.cut)
            .collect();

        if let Some(reverse) = &pattern.reverse {
            positions.extend(
                find_site_starts(sequence, reverse)
                    .into_iter()
                    .map(|start| start + site_len - enzyme.cut),
            );
            positions.sort_unstable();
        }
        positions.dedup();

        Some(positions)
    }
}
