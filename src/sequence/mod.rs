//! DNA strands over the {A, T, G, C} alphabet.
//!
//! A [`Duplex`] pairs a randomly generated [`Strand`] with its base-wise
//! complement. Both strands are immutable once built; everything downstream
//! (statistics, the text helix, the 3-D geometry) only reads them.

/// Base counts, GC content and the statistics report.
pub mod stats;
/// Text-mode double helix.
pub mod text;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::error::DuplexError;

/// Lengths the controlling application offers for generation.
pub const LENGTH_RANGE: RangeInclusive<usize> = 10..=500;

/// Length used when the caller does not pick one.
pub const DEFAULT_LENGTH: usize = 100;

/// One nucleotide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Adenine.
    A,
    /// Thymine.
    T,
    /// Guanine.
    G,
    /// Cytosine.
    C,
}

impl Base {
    /// Every base, in report/legend order.
    pub const ALL: [Self; 4] = [Self::A, Self::T, Self::G, Self::C];

    /// Watson-Crick partner (A↔T, G↔C). Applying it twice is the identity.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::G => Self::C,
            Self::C => Self::G,
        }
    }

    /// Upper-case letter for this base.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::G => 'G',
            Self::C => 'C',
        }
    }

    /// Position of this base in [`Base::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::T => 1,
            Self::G => 2,
            Self::C => 3,
        }
    }
}

impl TryFrom<char> for Base {
    type Error = DuplexError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'T' => Ok(Self::T),
            'G' => Ok(Self::G),
            'C' => Ok(Self::C),
            _ => Err(DuplexError::InvalidBase(c)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered, immutable run of bases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Strand {
    bases: Vec<Base>,
}

impl Strand {
    /// Sample `length` bases uniformly at random.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let bases = (0..length)
            .map(|_| Base::ALL[rng.random_range(0..Base::ALL.len())])
            .collect();
        Self { bases }
    }

    /// Position-wise complement (not reversed).
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            bases: self.bases.iter().map(|b| b.complement()).collect(),
        }
    }

    /// Number of bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Whether the strand has no bases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The bases in order.
    #[must_use]
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }
}

impl From<Vec<Base>> for Strand {
    fn from(bases: Vec<Base>) -> Self {
        Self { bases }
    }
}

impl FromStr for Strand {
    type Err = DuplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bases = s
            .trim()
            .chars()
            .map(Base::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bases })
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base.as_char())?;
        }
        Ok(())
    }
}

/// A strand together with its complement.
///
/// Invariant: both strands have the same length and
/// `primary[i].complement() == complement[i]` for every `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Duplex {
    primary: Strand,
    complement: Strand,
}

impl Duplex {
    /// Generate a random strand of `length` bases and pair it.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self::from_primary(Strand::random(length, rng))
    }

    /// Pair an existing strand with its complement.
    #[must_use]
    pub fn from_primary(primary: Strand) -> Self {
        let complement = primary.complement();
        Self {
            primary,
            complement,
        }
    }

    /// Pair two strands received from elsewhere, checking the invariant.
    ///
    /// # Errors
    ///
    /// [`DuplexError::StrandLengthMismatch`] if the strands differ in
    /// length, [`DuplexError::NotComplementary`] at the first position
    /// whose bases do not pair.
    pub fn new(primary: Strand, complement: Strand) -> Result<Self, DuplexError> {
        if primary.len() != complement.len() {
            return Err(DuplexError::StrandLengthMismatch {
                primary: primary.len(),
                complement: complement.len(),
            });
        }
        if let Some(index) = primary
            .bases()
            .iter()
            .zip(complement.bases())
            .position(|(p, c)| p.complement() != *c)
        {
            return Err(DuplexError::NotComplementary { index });
        }
        Ok(Self {
            primary,
            complement,
        })
    }

    /// The generated strand (read 5' → 3').
    #[must_use]
    pub fn primary(&self) -> &Strand {
        &self.primary
    }

    /// The complementary strand (read 3' → 5' against the primary).
    #[must_use]
    pub fn complement(&self) -> &Strand {
        &self.complement
    }

    /// Number of base pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Whether the duplex has no base pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Iterate `(primary, complement)` base pairs in order.
    #[must_use]
    pub fn pairs(&self) -> impl Iterator<Item = (Base, Base)> + '_ {
        self.primary
            .bases()
            .iter()
            .copied()
            .zip(self.complement.bases().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn complement_pairs_watson_crick() {
        assert_eq!(Base::A.complement(), Base::T);
        assert_eq!(Base::T.complement(), Base::A);
        assert_eq!(Base::G.complement(), Base::C);
        assert_eq!(Base::C.complement(), Base::G);
    }

    #[test]
    fn complement_is_an_involution() {
        for base in Base::ALL {
            assert_eq!(base.complement().complement(), base);
        }
    }

    #[test]
    fn parse_accepts_lower_case_and_rejects_other_symbols() {
        let strand: Strand = "atGc".parse().unwrap();
        assert_eq!(strand.to_string(), "ATGC");
        assert!(matches!(
            "ATXG".parse::<Strand>(),
            Err(DuplexError::InvalidBase('X'))
        ));
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = Duplex::generate(64, &mut StdRng::seed_from_u64(7));
        let b = Duplex::generate(64, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn zero_length_duplex_is_empty() {
        let duplex = Duplex::generate(0, &mut StdRng::seed_from_u64(1));
        assert!(duplex.is_empty());
        assert_eq!(duplex.pairs().count(), 0);
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = Duplex::new("ATG".parse().unwrap(), "TA".parse().unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            DuplexError::StrandLengthMismatch {
                primary: 3,
                complement: 2
            }
        ));
    }

    #[test]
    fn new_rejects_mismatched_pair() {
        let err = Duplex::new("ATGC".parse().unwrap(), "TACC".parse().unwrap())
            .unwrap_err();
        assert!(matches!(err, DuplexError::NotComplementary { index: 3 }));
    }

    #[test]
    fn new_accepts_a_true_complement() {
        let duplex =
            Duplex::new("ATGC".parse().unwrap(), "TACG".parse().unwrap())
                .unwrap();
        assert_eq!(duplex.complement().to_string(), "TACG");
    }

    proptest! {
        #[test]
        fn generated_pairs_are_complementary(seed in any::<u64>(), len in 0usize..500) {
            let duplex = Duplex::generate(len, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(duplex.primary().len(), duplex.complement().len());
            for (p, c) in duplex.pairs() {
                prop_assert_eq!(p.complement(), c);
                prop_assert_eq!(c.complement(), p);
            }
        }

        #[test]
        fn display_then_parse_preserves_strand(seed in any::<u64>(), len in 0usize..200) {
            let strand = Strand::random(len, &mut StdRng::seed_from_u64(seed));
            let parsed: Strand = strand.to_string().parse().unwrap();
            prop_assert_eq!(parsed, strand);
        }
    }
}
