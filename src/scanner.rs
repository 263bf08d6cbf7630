use ahash::AHashSet;
use restriction::EnzymeDatabase;

use crate::error::RadError;

/// Source of enzyme cut sites for a linear sequence.
///
/// Implementations own enzyme naming: `canonical_name` maps whatever the user typed
/// to the name used for lookups and reporting, and `cut_sites` must return strictly
/// increasing positions within `0..=sequence.len()`.
pub trait MotifScanner: Sync {
    fn canonical_name(&self, enzyme: &str) -> Option<String>;

    /// `None` if the scanner does not know `enzyme`.
    fn cut_sites(&self, sequence: &[u8], enzyme: &str) -> Option<Vec<usize>>;
}

impl MotifScanner for EnzymeDatabase {
    fn canonical_name(&self, enzyme: &str) -> Option<String> {
        self.resolve(enzyme).map(|e| e.name.clone())
    }

    fn cut_sites(&self, sequence: &[u8], enzyme: &str) -> Option<Vec<usize>> {
        EnzymeDatabase::cut_sites(self, sequence, enzyme)
    }
}

/// Maps the requested names onto canonical enzyme names, keeping the order in which
/// they were given and dropping repeats. Every unknown name is collected so the user
/// sees the complete list at once.
pub fn resolve_enzymes<S, T>(scanner: &S, requested: &[T]) -> Result<Vec<String>, RadError>
where
    S: MotifScanner + ?Sized,
    T: AsRef<str>,
{
    let mut seen = AHashSet::new();
    let mut resolved = Vec::with_capacity(requested.len());
    let mut unknown = Vec::new();

    for name in requested {
        match scanner.canonical_name(name.as_ref()) {
            Some(canonical) => {
                if seen.insert(canonical.clone()) {
                    resolved.push(canonical);
                }
            }
            None => unknown.push(name.as_ref().to_string()),
        }
    }

    if !unknown.is_empty() {
        return Err(RadError::UnknownEnzyme(unknown));
    }

    Ok(resolved)
}
