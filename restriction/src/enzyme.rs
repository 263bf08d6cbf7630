use crate::IupacBase;
use anyhow::{bail, Result};

/// Enzymes tried when the user does not name any. These are the enzymes
/// supported by Stacks for RAD-seq / GBS library design.
pub const DEFAULT_ENZYMES: [&str; 32] = [
    "ApeKI", "ApoI", "BamHI", "BglII", "BstYI", "ClaI", "DpnII", "EaeI", "EcoRI", "EcoRV",
    "EcoT22I", "HindIII", "KpnI", "MluCI", "MseI", "MspI", "NdeI", "NheI", "NlaIII", "NotI",
    "NsiI", "PstI", "SacI", "Sau3AI", "SbfI", "SexAI", "SgrAI", "SpeI", "SphI", "TaqI", "XbaI",
    "XhoI",
];

/// Represents a restriction enzyme: its canonical name, its recognition site and
/// where it cuts the top strand.
///
/// # Fields
/// - `name`: Canonical enzyme name (e.g. `EcoRI`).
/// - `site`: Recognition site as IUPAC bases, written 5' to 3' on the top strand.
/// - `cut`: Number of site bases 5' of the top-strand cut (0-indexed offset into the
///   site, `0..=site.len()`). EcoRI (`G^AATTC`) cuts at offset 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionEnzyme {
    pub name: String,
    pub site: Vec<IupacBase>,
    pub cut: usize,
}

impl RestrictionEnzyme {
    /// Constructs a new `RestrictionEnzyme`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The `name` is empty.
    /// - The `site` is empty or contains invalid IUPAC codes.
    /// - The `cut` offset lies outside the recognition site.
    ///
    /// # Examples
    /// ```
    /// use restriction::RestrictionEnzyme;
    ///
    /// let ecori = RestrictionEnzyme::new("EcoRI", "GAATTC", 1).unwrap();
    /// assert_eq!(ecori.site_to_string(), "GAATTC");
    /// assert!(ecori.is_palindromic());
    /// ```
    pub fn new(name: &str, site: &str, cut: usize) -> Result<Self> {
        if name.trim().is_empty() {
            bail!("Enzyme name cannot be empty");
        }

        let parsed_site = site
            .chars()
            .map(|b| {
                IupacBase::parse_char(b).map_err(|_| {
                    anyhow::anyhow!(
                        "Base '{}' in recognition site '{}' of {} is not a valid IUPAC code",
                        b,
                        site,
                        name
                    )
                })
            })
            .collect::<Result<Vec<IupacBase>>>()?;

        if parsed_site.is_empty() {
            bail!("Recognition site of {} cannot be empty", name);
        }

        if cut > parsed_site.len() {
            bail!(
                "Cut offset {} is out of bounds for {} with recognition site of length {}.",
                cut,
                name,
                parsed_site.len()
            );
        }

        Ok(Self {
            name: name.to_string(),
            site: parsed_site,
            cut,
        })
    }

    /// Returns the recognition site read 5' to 3' on the bottom strand.
    pub fn reverse_complement_site(&self) -> Vec<IupacBase> {
        self.site
            .iter()
            .rev()
            .map(IupacBase::complement)
            .collect()
    }

    /// A site is palindromic when it reads the same on both strands, in which case
    /// a top-strand scan already finds every occurrence.
    pub fn is_palindromic(&self) -> bool {
        self.site == self.reverse_complement_site()
    }

    pub fn site_to_string(&self) -> String {
        self.site.iter().map(IupacBase::as_char).collect()
    }

    /// Recognition site written with a caret at the cut, e.g. `G^AATTC`.
    pub fn cut_pattern(&self) -> String {
        let site = self.site_to_string();
        format!("{}^{}", &site[..self.cut], &site[self.cut..])
    }
}

/// Converts a recognition site into a regular expression string.
pub fn site_to_regex(site: &[IupacBase]) -> String {
    site.iter().map(IupacBase::to_regex).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enzyme_creation() {
        let enzyme = RestrictionEnzyme::new("BstYI", "RGATCY", 1).unwrap();
        assert_eq!(enzyme.name, "BstYI");
        assert_eq!(enzyme.site_to_string(), "RGATCY");
        assert_eq!(enzyme.cut, 1);
        assert_eq!(enzyme.cut_pattern(), "R^GATCY");
    }

    #[test]
    fn test_cut_out_of_bounds() {
        let result = RestrictionEnzyme::new("EcoRI", "GAATTC", 7);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Cut offset 7 is out of bounds for EcoRI with recognition site of length 6."
        );
    }

    #[test]
    fn test_cut_at_site_end_is_allowed() {
        let nlaiii = RestrictionEnzyme::new("NlaIII", "CATG", 4).unwrap();
        assert_eq!(nlaiii.cut_pattern(), "CATG^");
    }

    #[test]
    fn test_invalid_site_base() {
        let result = RestrictionEnzyme::new("Bogus", "GAZTTC", 1);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Base 'Z' in recognition site 'GAZTTC' of Bogus is not a valid IUPAC code"
        );
    }

    #[test]
    fn test_empty_site() {
        assert!(RestrictionEnzyme::new("Empty", "", 0).is_err());
        assert!(RestrictionEnzyme::new("", "GATC", 0).is_err());
    }

    #[test]
    fn test_palindromes() {
        assert!(RestrictionEnzyme::new("ApoI", "RAATTY", 1).unwrap().is_palindromic());
        assert!(RestrictionEnzyme::new("SexAI", "ACCWGGT", 1).unwrap().is_palindromic());
        assert!(!RestrictionEnzyme::new("Nonpal", "GACGC", 5).unwrap().is_palindromic());
    }

    #[test]
    fn test_site_to_regex() {
        let apeki = RestrictionEnzyme::new("ApeKI", "GCWGC", 1).unwrap();
        assert_eq!(site_to_regex(&apeki.site), "GC[AT]GC");
        assert_eq!(site_to_regex(&apeki.reverse_complement_site()), "GC[AT]GC");
    }
}
