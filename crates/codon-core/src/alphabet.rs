//! Alphabets nucléotidiques et validation des bases et codons

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nucléotide canonique (ADN ou ARN)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    A, // Adénine
    C, // Cytosine
    G, // Guanine
    T, // Thymine
    U, // Uracile
}

impl Base {
    /// Convertit un octet en base, sans tenir compte de l'alphabet
    ///
    /// Seules les majuscules sont reconnues.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            b'U' => Some(Base::U),
            _ => None,
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
            Base::U => 'U',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Alphabet actif : {A, T, G, C} ou {A, U, G, C}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    #[default]
    Dna,
    Rna,
}

impl Alphabet {
    /// Vérifie qu'une base appartient à l'alphabet
    pub fn contains(self, base: Base) -> bool {
        match self {
            Alphabet::Dna => base != Base::U,
            Alphabet::Rna => base != Base::T,
        }
    }

    /// Retourne la base si le symbole appartient à l'alphabet
    pub fn base(self, symbol: u8) -> Option<Base> {
        Base::from_byte(symbol).filter(|b| self.contains(*b))
    }

    /// Vérifie si le symbole est une base de l'alphabet
    pub fn is_base(self, symbol: u8) -> bool {
        self.base(symbol).is_some()
    }

    /// Vérifie si le groupe forme un codon (exactement trois bases valides)
    pub fn is_codon(self, group: &[u8]) -> bool {
        group.len() == 3 && group.iter().all(|&b| self.is_base(b))
    }

    /// Les quatre bases de l'alphabet
    pub fn bases(self) -> [Base; 4] {
        match self {
            Alphabet::Dna => [Base::A, Base::C, Base::G, Base::T],
            Alphabet::Rna => [Base::A, Base::C, Base::G, Base::U],
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "ADN"),
            Alphabet::Rna => write!(f, "ARN"),
        }
    }
}

/// Vrai si le symbole est l'une des quatre bases ADN
pub fn is_base(symbol: u8) -> bool {
    Alphabet::Dna.is_base(symbol)
}

/// Vrai si le groupe contient exactement trois bases ADN
pub fn is_codon(group: &str) -> bool {
    Alphabet::Dna.is_codon(group.as_bytes())
}
