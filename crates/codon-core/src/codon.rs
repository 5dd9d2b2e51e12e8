//! Codons, découpage d'une séquence en codons et réassemblage

use crate::alphabet::{Alphabet, Base};
use crate::error::{Result, TranspileError};
use std::fmt;

/// Triplet ordonné de bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Base; 3]);

impl Codon {
    /// Crée un codon à partir de trois bases
    pub fn new(bases: [Base; 3]) -> Self {
        Self(bases)
    }

    /// Parse un codon textuel dans l'alphabet donné
    ///
    /// Retourne `None` si le texte ne contient pas exactement trois bases
    /// de l'alphabet.
    pub fn parse(group: &str, alphabet: Alphabet) -> Option<Self> {
        Self::from_bytes(group.as_bytes(), alphabet)
    }

    /// Variante de [`Codon::parse`] sur des octets bruts
    pub fn from_bytes(symbols: &[u8], alphabet: Alphabet) -> Option<Self> {
        if !alphabet.is_codon(symbols) {
            return None;
        }
        Some(Self([
            alphabet.base(symbols[0])?,
            alphabet.base(symbols[1])?,
            alphabet.base(symbols[2])?,
        ]))
    }

    /// Retourne les bases du codon
    pub fn bases(&self) -> [Base; 3] {
        self.0
    }
}

impl IntoIterator for Codon {
    type Item = Base;
    type IntoIter = std::array::IntoIter<Base, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base.as_char())?;
        }
        Ok(())
    }
}

/// Itérateur paresseux de codons sur une séquence de bases
///
/// Produit `Err(UnalignedSequence)` une seule fois si la séquence se
/// termine sur un groupe incomplet, puis s'arrête.
#[derive(Debug)]
pub struct Codons<I> {
    bases: I,
    done: bool,
}

impl<I> Iterator for Codons<I>
where
    I: Iterator<Item = Base>,
{
    type Item = Result<Codon>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(first) = self.bases.next() else {
            self.done = true;
            return None;
        };

        let mut buffer = [first; 3];
        for (filled, slot) in buffer.iter_mut().enumerate().skip(1) {
            match self.bases.next() {
                Some(base) => *slot = base,
                None => {
                    self.done = true;
                    return Some(Err(TranspileError::UnalignedSequence { remainder: filled }));
                }
            }
        }

        Some(Ok(Codon(buffer)))
    }
}

impl<I> std::iter::FusedIterator for Codons<I> where I: Iterator<Item = Base> {}

/// Découpe une séquence en codons consécutifs sans chevauchement
pub fn partition<I>(bases: I) -> Codons<I::IntoIter>
where
    I: IntoIterator<Item = Base>,
{
    Codons {
        bases: bases.into_iter(),
        done: false,
    }
}

/// Aplatit une suite de codons en une séquence linéaire de bases
pub fn reassemble<I>(codons: I) -> impl Iterator<Item = Base>
where
    I: IntoIterator<Item = Codon>,
{
    codons.into_iter().flatten()
}
