//! Table de substitution de codons et son chargement depuis un fichier délimité
//!
//! Le chargement est volontairement permissif : la première ligne est un
//! en-tête toujours ignoré, et toute ligne dont le premier ou le dernier
//! champ n'est pas un codon valide est écartée sans erreur.

use crate::alphabet::Alphabet;
use crate::codon::Codon;
use crate::error::{Result, TranspileError};
use csv::{ByteRecord, ReaderBuilder};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Correspondance codon source -> codon cible, en lecture seule après chargement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: HashMap<Codon, Codon>,
}

impl SubstitutionTable {
    /// Crée une table vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une entrée ; une source déjà présente est écrasée
    pub fn insert(&mut self, source: Codon, target: Codon) -> Option<Codon> {
        self.entries.insert(source, target)
    }

    /// Codon de remplacement pour `source`, s'il existe
    pub fn get(&self, source: &Codon) -> Option<Codon> {
        self.entries.get(source).copied()
    }

    /// Applique la substitution à un codon ; un codon absent est conservé
    pub fn substitute(&self, codon: Codon) -> Codon {
        self.get(&codon).unwrap_or(codon)
    }

    pub fn contains(&self, source: &Codon) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parcourt les entrées (ordre non spécifié)
    pub fn iter(&self) -> impl Iterator<Item = (&Codon, &Codon)> {
        self.entries.iter()
    }
}

impl FromIterator<(Codon, Codon)> for SubstitutionTable {
    fn from_iter<T: IntoIterator<Item = (Codon, Codon)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Statistiques de chargement d'une table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Lignes de données lues (hors en-tête)
    pub rows_read: usize,
    /// Lignes retenues dans la table
    pub rows_admitted: usize,
    /// Lignes écartées
    pub rows_skipped: usize,
}

/// Chargeur de tables de substitution
#[derive(Debug, Clone, Copy)]
pub struct TableLoader {
    delimiter: u8,
    alphabet: Alphabet,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            alphabet: Alphabet::Dna,
        }
    }
}

impl TableLoader {
    /// Crée un chargeur pour l'alphabet donné, délimiteur `,`
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Default::default()
        }
    }

    /// Définit le délimiteur de champs (un caractère ASCII)
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(TranspileError::InvalidDelimiter(delimiter));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Charge la table depuis un fichier
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(SubstitutionTable, TableStats)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TranspileError::resource(path, e))?;

        let (table, stats) = self.load_from_reader(file).map_err(|e| match e {
            TranspileError::Io(source) => TranspileError::resource(path, source),
            other => other,
        })?;

        tracing::debug!(
            "Table chargée: {} ({} entrées, {} lignes lues, {} écartées)",
            path.display(),
            table.len(),
            stats.rows_read,
            stats.rows_skipped
        );
        Ok((table, stats))
    }

    /// Charge la table depuis n'importe quel flux
    ///
    /// La première ligne physique est l'en-tête, même vide : elle est
    /// consommée avant l'analyse CSV, qui ignore les lignes vides.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<(SubstitutionTable, TableStats)> {
        let mut reader = BufReader::new(reader);
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = SubstitutionTable::new();
        let mut stats = TableStats::default();
        let mut record = ByteRecord::new();

        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => match e.into_kind() {
                    csv::ErrorKind::Io(source) => return Err(TranspileError::Io(source)),
                    // Ligne illisible : traitée comme une ligne mal formée
                    _ => {
                        stats.rows_read += 1;
                        stats.rows_skipped += 1;
                        continue;
                    }
                },
            }

            stats.rows_read += 1;
            match self.parse_row(&record) {
                Some((source, target)) => {
                    table.insert(source, target);
                    stats.rows_admitted += 1;
                }
                None => stats.rows_skipped += 1,
            }
        }

        Ok((table, stats))
    }

    /// Extrait la paire (premier champ, dernier champ) si les deux sont des codons
    fn parse_row(&self, record: &ByteRecord) -> Option<(Codon, Codon)> {
        if record.len() < 2 {
            return None;
        }
        let source = Codon::from_bytes(record.get(0)?, self.alphabet)?;
        let target = Codon::from_bytes(record.get(record.len() - 1)?, self.alphabet)?;
        Some((source, target))
    }
}
