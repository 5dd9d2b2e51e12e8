//! Initialisation du logging

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// Les traces sont écrites sur la sortie d'erreur : la sortie standard est
/// réservée à la séquence produite. `RUST_LOG` a priorité sur la verbosité.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Un second appel (tests) ne doit pas paniquer
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Exécute un bloc dans un span `etape` et trace sa durée
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::info_span!("etape", nom = $name);
        let _enter = span.enter();
        let debut = std::time::Instant::now();
        let result = $block;
        tracing::info!(
            duree_us = debut.elapsed().as_micros() as u64,
            "Étape terminée: {}",
            $name
        );
        result
    }};
}

/// Macro pour le logging des erreurs
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {{
        let error = $error;
        tracing::error!("Erreur: {}", error);
        error
    }};
}

#[cfg(test)]
mod tests {
    use crate::error::{Result, TranspileError};

    fn etape(valeur: Option<usize>) -> Result<usize> {
        let n = crate::log_operation!("test", {
            valeur.ok_or(TranspileError::UnalignedSequence { remainder: 1 })?
        });
        Ok(n * 2)
    }

    #[test]
    fn test_log_operation_returns_block_value() {
        super::init_logging(0);
        assert_eq!(etape(Some(21)).unwrap(), 42);
    }

    #[test]
    fn test_log_operation_propagates_errors() {
        assert!(matches!(
            etape(None),
            Err(TranspileError::UnalignedSequence { remainder: 1 })
        ));
    }

    #[test]
    fn test_log_error_returns_error() {
        let error = crate::log_error!(TranspileError::InvalidDelimiter('é'));
        assert!(matches!(error, TranspileError::InvalidDelimiter('é')));
    }
}
