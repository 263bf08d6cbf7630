use std::fmt::Display;

use anyhow::bail;

/// One position of a recognition site: a concrete base (A, C, G, T) or one of the
/// eleven ambiguity codes, e.g. `W` in ApeKI's `GCWGC` or `R`/`Y` in ApoI's `RAATTY`.
///
/// See https://en.wikipedia.org/wiki/Nucleic_acid_notation for the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IupacBase {
    A,
    T,
    G,
    C,
    R,
    Y,
    S,
    W,
    K,
    M,
    B,
    D,
    H,
    V,
    N,
}

impl Display for IupacBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl IupacBase {
    /// Parses a single character into an `IupacBase`. Lowercase codes are accepted.
    ///
    /// # Examples
    /// ```
    /// use restriction::IupacBase;
    ///
    /// assert_eq!(IupacBase::parse_char('w').unwrap(), IupacBase::W);
    /// assert!(IupacBase::parse_char('Z').is_err());
    /// ```
    pub fn parse_char(base: char) -> anyhow::Result<Self> {
        let iupac_base = match base.to_ascii_uppercase() {
            'A' => Self::A,
            'T' => Self::T,
            'G' => Self::G,
            'C' => Self::C,
            'R' => Self::R,
            'Y' => Self::Y,
            'S' => Self::S,
            'W' => Self::W,
            'K' => Self::K,
            'M' => Self::M,
            'B' => Self::B,
            'D' => Self::D,
            'H' => Self::H,
            'V' => Self::V,
            'N' => Self::N,
            _ => bail!("Not a defined Iupac base: {base}"),
        };
        Ok(iupac_base)
    }

    pub fn as_char(&self) -> char {
        match self {
            IupacBase::A => 'A',
            IupacBase::T => 'T',
            IupacBase::G => 'G',
            IupacBase::C => 'C',
            IupacBase::R => 'R',
            IupacBase::Y => 'Y',
            IupacBase::S => 'S',
            IupacBase::W => 'W',
            IupacBase::K => 'K',
            IupacBase::M => 'M',
            IupacBase::B => 'B',
            IupacBase::D => 'D',
            IupacBase::H => 'H',
            IupacBase::V => 'V',
            IupacBase::N => 'N',
        }
    }

    /// Base on the opposite strand. Ambiguity codes map onto the code covering the
    /// complemented set, so `R` (A/G) pairs with `Y` (C/T) while `S`, `W` and `N`
    /// are their own complements.
    pub fn complement(&self) -> Self {
        use IupacBase::*;
        match self {
            A => T,
            C => G,
            G => C,
            T => A,
            R => Y,
            Y => R,
            K => M,
            M => K,
            B => V,
            V => B,
            D => H,
            H => D,
            S => S,
            W => W,
            N => N,
        }
    }

    /// Converts the base into a regular expression fragment.
    ///
    /// Ambiguity codes expand to character classes over concrete bases only, so an
    /// `N` in the recognition site never matches an `N` (gap) in an assembly.
    ///
    /// # Examples
    /// ```
    /// use restriction::IupacBase;
    ///
    /// assert_eq!(IupacBase::R.to_regex(), "[AG]");
    /// assert_eq!(IupacBase::N.to_regex(), "[ACGT]");
    /// ```
    pub fn to_regex(&self) -> &'static str {
        match self {
            IupacBase::A => "A",
            IupacBase::T => "T",
            IupacBase::G => "G",
            IupacBase::C => "C",
            IupacBase::R => "[AG]",
            IupacBase::Y => "[CT]",
            IupacBase::S => "[CG]",
            IupacBase::W => "[AT]",
            IupacBase::K => "[GT]",
            IupacBase::M => "[AC]",
            IupacBase::B => "[CGT]",
            IupacBase::D => "[AGT]",
            IupacBase::H => "[ACT]",
            IupacBase::V => "[ACG]",
            IupacBase::N => "[ACGT]",
        }
    }
}
