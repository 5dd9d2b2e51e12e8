//! Codon Core Library
//!
//! Bibliothèque de transpilation de séquences nucléotidiques : découpage en
//! codons, substitution via une table de correspondance et réassemblage.

pub mod alphabet;
pub mod codon;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod sequence;
pub mod table;
pub mod transpile;

// Réexportations principales
pub use alphabet::{is_base, is_codon, Alphabet, Base};
pub use codon::{partition, reassemble, Codon, Codons};
pub use self::config::TranspileConfig;
pub use convert::{dna_to_rna, rna_to_dna};
pub use error::{Result, TranspileError};
pub use logging::init_logging;
// Les macros log_operation et log_error sont automatiquement exportées à la racine du crate
pub use pipeline::{Pipeline, TranspileReport, TranspileStats};
pub use sequence::{filter_bases, Bases, SequenceReader};
pub use table::{SubstitutionTable, TableLoader, TableStats};
pub use transpile::{transpile, Transpiled};
