//! Chaîne complète : table + séquence -> codons -> transpilation -> séquence

use crate::alphabet::{Alphabet, Base};
use crate::codon::{partition, reassemble, Codon};
use crate::config::TranspileConfig;
use crate::convert::{dna_to_rna, rna_to_dna};
use crate::error::Result;
use crate::sequence::{Bases, SequenceReader};
use crate::table::{SubstitutionTable, TableLoader, TableStats};
use crate::transpile::transpile;
use crate::{log_error, log_operation};
use serde::Serialize;
use std::path::Path;

/// Compteurs de transpilation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranspileStats {
    /// Codons traités
    pub codons: usize,
    /// Codons remplacés par la table
    pub substituted: usize,
    /// Codons conservés faute d'entrée
    pub passed_through: usize,
}

/// Résultat d'une exécution complète
#[derive(Debug, Clone, Serialize)]
pub struct TranspileReport {
    /// Séquence produite
    #[serde(skip)]
    pub output: String,
    /// Nombre d'entrées de la table
    pub table_entries: usize,
    pub table: TableStats,
    pub transpile: TranspileStats,
    pub output_alphabet: Alphabet,
}

/// Chaîne de transpilation configurée
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: TranspileConfig,
}

impl Pipeline {
    pub fn new(config: TranspileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranspileConfig {
        &self.config
    }

    /// Charge la table de substitution selon la configuration
    pub fn load_table(&self, path: impl AsRef<Path>) -> Result<(SubstitutionTable, TableStats)> {
        TableLoader::new(self.config.alphabet)
            .with_delimiter(self.config.delimiter)?
            .load(path)
    }

    /// Lit la séquence selon la configuration
    pub fn read_sequence(&self, path: impl AsRef<Path>) -> Result<Bases> {
        SequenceReader::new(self.config.alphabet).read(path)
    }

    /// Transpile une séquence de bases déjà filtrée
    ///
    /// La sortie est entièrement matérialisée : une séquence non alignée
    /// ne produit aucun résultat partiel.
    pub fn transpile_bases<I>(&self, table: &SubstitutionTable, bases: I) -> Result<(String, TranspileStats)>
    where
        I: IntoIterator<Item = Base>,
    {
        let mut transpiled = transpile(table, partition(bases));
        let codons = transpiled.by_ref().collect::<Result<Vec<Codon>>>()?;

        let stats = TranspileStats {
            codons: codons.len(),
            substituted: transpiled.substituted(),
            passed_through: transpiled.passed_through(),
        };

        let sequence = reassemble(codons);
        let output: String = match (self.config.alphabet, self.config.output_alphabet()) {
            (Alphabet::Dna, Alphabet::Rna) => dna_to_rna(sequence).map(Base::as_char).collect(),
            (Alphabet::Rna, Alphabet::Dna) => rna_to_dna(sequence).map(Base::as_char).collect(),
            _ => sequence.map(Base::as_char).collect(),
        };

        Ok((output, stats))
    }

    /// Exécute la chaîne complète sur deux fichiers
    pub fn run(&self, table_path: impl AsRef<Path>, sequence_path: impl AsRef<Path>) -> Result<TranspileReport> {
        self.run_inner(table_path.as_ref(), sequence_path.as_ref())
            .map_err(|e| log_error!(e))
    }

    fn run_inner(&self, table_path: &Path, sequence_path: &Path) -> Result<TranspileReport> {
        let (table, table_stats) = log_operation!("chargement de la table", {
            self.load_table(table_path)?
        });

        let bases = log_operation!("lecture de la séquence", {
            self.read_sequence(sequence_path)?
        });

        let (output, stats) = log_operation!("transpilation", {
            self.transpile_bases(&table, bases)?
        });

        tracing::info!(
            "{} codons, {} remplacés, {} conservés",
            stats.codons,
            stats.substituted,
            stats.passed_through
        );

        Ok(TranspileReport {
            output,
            table_entries: table.len(),
            table: table_stats,
            transpile: stats,
            output_alphabet: self.config.output_alphabet(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranspileError;
    use crate::sequence::filter_bases;

    fn table(pairs: &[(&str, &str)], alphabet: Alphabet) -> SubstitutionTable {
        pairs
            .iter()
            .map(|(s, t)| {
                (
                    Codon::parse(s, alphabet).unwrap(),
                    Codon::parse(t, alphabet).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_transpile_bases() {
        let pipeline = Pipeline::default();
        let table = table(&[("ATG", "AAA")], Alphabet::Dna);
        let (output, stats) = pipeline
            .transpile_bases(&table, filter_bases("ATGTCA", Alphabet::Dna))
            .unwrap();

        assert_eq!(output, "AAATCA");
        assert_eq!(stats.codons, 2);
        assert_eq!(stats.substituted, 1);
        assert_eq!(stats.passed_through, 1);
    }

    #[test]
    fn test_rna_output() {
        let pipeline = Pipeline::new(TranspileConfig {
            output: Some(Alphabet::Rna),
            ..Default::default()
        });
        let table = table(&[("AAA", "TTT")], Alphabet::Dna);
        let (output, _) = pipeline
            .transpile_bases(&table, filter_bases("AAAGGG", Alphabet::Dna))
            .unwrap();
        assert_eq!(output, "UUUGGG");
    }

    #[test]
    fn test_rna_input_dna_output() {
        let pipeline = Pipeline::new(TranspileConfig {
            alphabet: Alphabet::Rna,
            output: Some(Alphabet::Dna),
            ..Default::default()
        });
        let table = table(&[("AUG", "UUU")], Alphabet::Rna);
        let (output, _) = pipeline
            .transpile_bases(&table, filter_bases("AUGCCC", Alphabet::Rna))
            .unwrap();
        assert_eq!(output, "TTTCCC");
    }

    #[test]
    fn test_unaligned_produces_no_output() {
        let pipeline = Pipeline::default();
        let result = pipeline.transpile_bases(&SubstitutionTable::new(), filter_bases("ATGTC", Alphabet::Dna));
        assert!(matches!(
            result,
            Err(TranspileError::UnalignedSequence { remainder: 2 })
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let pipeline = Pipeline::default();
        let (output, stats) = pipeline
            .transpile_bases(&SubstitutionTable::new(), Vec::new())
            .unwrap();
        assert!(output.is_empty());
        assert_eq!(stats, TranspileStats::default());
    }
}
