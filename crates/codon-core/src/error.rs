//! Types d'erreurs pour la bibliothèque de transpilation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranspileError {
    #[error("Ressource introuvable: {path}: {source}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("La séquence doit se découper en codons de trois bases: {remainder} base(s) restante(s)")]
    UnalignedSequence { remainder: usize },

    #[error("Délimiteur invalide: {0:?} (un caractère ASCII est requis)")]
    InvalidDelimiter(char),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl TranspileError {
    /// Construit une erreur de ressource à partir d'une erreur IO
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranspileError::ResourceNotFound {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranspileError>;
