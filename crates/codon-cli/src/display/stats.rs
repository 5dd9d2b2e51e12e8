//! Affichage des statistiques de transpilation

use codon_core::TranspileReport;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Statistique")]
    name: &'static str,
    #[tabled(rename = "Valeur")]
    value: String,
}

impl StatRow {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Tableau des statistiques d'une exécution
pub fn render_table(report: &TranspileReport) -> String {
    let rows = vec![
        StatRow::new("Entrées de la table", report.table_entries),
        StatRow::new("Lignes lues", report.table.rows_read),
        StatRow::new("Lignes écartées", report.table.rows_skipped),
        StatRow::new("Codons", report.transpile.codons),
        StatRow::new("Codons remplacés", report.transpile.substituted),
        StatRow::new("Codons conservés", report.transpile.passed_through),
        StatRow::new("Alphabet de sortie", report.output_alphabet),
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Statistiques au format JSON
pub fn render_json(report: &TranspileReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
