//! CLI pour la transpilation de codons

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use codon_core::{init_logging, Alphabet, Pipeline, TranspileConfig};
use std::io::Write;
use std::path::{Path, PathBuf};

mod display;

use display::stats;

#[derive(Parser, Debug)]
#[command(name = "transpile")]
#[command(about = "Transpile une séquence ADN codon par codon à l'aide d'une table", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Table de substitution (fichier délimité, première ligne ignorée)
    table: PathBuf,

    /// Fichier de séquence
    sequence: PathBuf,

    /// Fichier de configuration (TOML, JSON, YAML...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Alphabet de la séquence et de la table
    #[arg(short, long, value_enum)]
    alphabet: Option<AlphabetArg>,

    /// Émettre la séquence en ARN
    #[arg(long)]
    rna: bool,

    /// Délimiteur de champs de la table
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Affiche les statistiques sur la sortie d'erreur
    #[arg(short, long, value_enum)]
    stats: Option<StatsFormat>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetArg {
    Dna,
    Rna,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Dna => Alphabet::Dna,
            AlphabetArg::Rna => Alphabet::Rna,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_argument_count_error(&e) => {
            println!("{}", usage_message(&program_name()));
            std::process::exit(2);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    tracing::debug!("Configuration: {:?}", config);

    let report = Pipeline::new(config).run(&cli.table, &cli.sequence)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.output.as_bytes())?;
    stdout.flush()?;

    match cli.stats {
        Some(StatsFormat::Table) => eprintln!("{}", stats::render_table(&report)),
        Some(StatsFormat::Json) => eprintln!("{}", stats::render_json(&report)?),
        None => {}
    }

    Ok(())
}

/// Erreurs de clap dues à un nombre d'arguments incorrect
///
/// Une option inconnue (`--xyz`) garde le message précis de clap ; seul un
/// positionnel en trop compte comme une erreur de nombre d'arguments.
fn is_argument_count_error(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::MissingRequiredArgument | ErrorKind::TooManyValues => true,
        ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => !arg.starts_with('-'),
            _ => false,
        },
        _ => false,
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("transpile")
        .to_string()
}

/// Message d'usage affiché sur la sortie standard
fn usage_message(program: &str) -> String {
    format!("Usage is: {} <table filename> <sequence filename>", program)
}

/// Fusionne le fichier de configuration et les options de la ligne de commande
fn build_config(cli: &Cli) -> codon_core::Result<TranspileConfig> {
    let mut config = match &cli.config {
        Some(path) => TranspileConfig::load_from_file(path)?,
        None => TranspileConfig::default(),
    };

    if let Some(alphabet) = cli.alphabet {
        config.alphabet = alphabet.into();
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }
    if cli.rna {
        config.output = Some(Alphabet::Rna);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_two_positional_arguments() {
        let cli = Cli::try_parse_from(["transpile", "table.csv", "seq.txt"]).unwrap();
        assert_eq!(cli.table, PathBuf::from("table.csv"));
        assert_eq!(cli.sequence, PathBuf::from("seq.txt"));
        assert!(!cli.rna);
        assert!(cli.stats.is_none());
    }

    #[test]
    fn test_too_few_arguments() {
        let err = Cli::try_parse_from(["transpile", "table.csv"]).unwrap_err();
        assert!(is_argument_count_error(&err));

        let err = Cli::try_parse_from(["transpile"]).unwrap_err();
        assert!(is_argument_count_error(&err));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Cli::try_parse_from(["transpile", "a", "b", "c"]).unwrap_err();
        assert!(is_argument_count_error(&err));
    }

    #[test]
    fn test_help_is_not_a_count_error() {
        let err = Cli::try_parse_from(["transpile", "--help"]).unwrap_err();
        assert!(!is_argument_count_error(&err));
    }

    #[test]
    fn test_unknown_flag_is_not_a_count_error() {
        let err = Cli::try_parse_from(["transpile", "--bogus", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(!is_argument_count_error(&err));
    }

    #[test]
    fn test_usage_message() {
        assert_eq!(
            usage_message("transpile"),
            "Usage is: transpile <table filename> <sequence filename>"
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "alphabet = \"rna\"").unwrap();
        writeln!(file, "delimiter = \";\"").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "transpile", "t.csv", "s.txt", "--config", path, "--delimiter", "\t", "--alphabet", "dna", "--rna",
        ])
        .unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.alphabet, Alphabet::Dna);
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.output_alphabet(), Alphabet::Rna);
    }

    #[test]
    fn test_default_config_without_flags() {
        let cli = Cli::try_parse_from(["transpile", "t.csv", "s.txt"]).unwrap();
        assert_eq!(build_config(&cli).unwrap(), TranspileConfig::default());
    }
}
