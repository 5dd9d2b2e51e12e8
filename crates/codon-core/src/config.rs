//! Configuration de la transpilation

use crate::alphabet::Alphabet;
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuration d'une exécution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranspileConfig {
    /// Alphabet de la séquence et de la table
    pub alphabet: Alphabet,
    /// Délimiteur de champs de la table
    pub delimiter: char,
    /// Alphabet de sortie ; par défaut celui d'entrée
    pub output: Option<Alphabet>,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Dna,
            delimiter: ',',
            output: None,
        }
    }
}

impl TranspileConfig {
    /// Charge la configuration depuis un fichier (format déduit de l'extension)
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        Ok(settings.try_deserialize::<TranspileConfig>()?)
    }

    /// Alphabet effectivement émis
    pub fn output_alphabet(&self) -> Alphabet {
        self.output.unwrap_or(self.alphabet)
    }
}
