//! Lecture de séquences nucléotidiques depuis un texte libre
//!
//! Tout symbole qui n'est pas une base de l'alphabet actif (retours à la
//! ligne, espaces, lignes d'en-tête, minuscules, bases ambiguës) est
//! ignoré silencieusement.

use crate::alphabet::{Alphabet, Base};
use crate::error::{Result, TranspileError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Séquence de bases filtrée, consommable une seule fois
#[derive(Debug)]
pub struct Bases {
    symbols: std::vec::IntoIter<u8>,
    alphabet: Alphabet,
}

impl Bases {
    /// Construit la séquence à partir du contenu brut
    pub fn new(content: Vec<u8>, alphabet: Alphabet) -> Self {
        Self {
            symbols: content.into_iter(),
            alphabet,
        }
    }

    /// Alphabet utilisé pour le filtrage
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }
}

impl Iterator for Bases {
    type Item = Base;

    fn next(&mut self) -> Option<Base> {
        let alphabet = self.alphabet;
        self.symbols.find_map(|symbol| alphabet.base(symbol))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.symbols.size_hint().1)
    }
}

/// Lecteur de séquences
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceReader {
    alphabet: Alphabet,
}

impl SequenceReader {
    /// Crée un lecteur pour l'alphabet donné
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Lit tout le fichier puis retourne la séquence filtrée
    ///
    /// Le contenu est traité comme des octets : un fichier qui n'est pas
    /// de l'UTF-8 valide ne provoque pas d'erreur.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Bases> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| TranspileError::resource(path, e))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| TranspileError::resource(path, e))?;

        tracing::debug!("Séquence lue: {} ({} octets)", path.display(), content.len());
        Ok(Bases::new(content, self.alphabet))
    }
}

/// Filtre un texte en mémoire et retourne ses bases
pub fn filter_bases(text: &str, alphabet: Alphabet) -> impl Iterator<Item = Base> + '_ {
    text.bytes().filter_map(move |symbol| alphabet.base(symbol))
}
