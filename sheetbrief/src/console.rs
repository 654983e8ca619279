//! Console messages for a finished run

use colored::*;
use sheetbrief_core::Outcome;

/// Reminder printed after a report is written
pub const REDACTION_REMINDER: &str =
    "Abre ese archivo, borra lo que sea privado, y pégame el resto aquí.";

/// Print the user-facing result of a run to stdout
pub fn print_outcome(outcome: &Outcome) {
    for line in outcome_lines(outcome) {
        println!("{}", line);
    }
}

fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Success { output, .. } => vec![
            format!(
                "{} Se ha generado el archivo: {}",
                "Hecho.".green().bold(),
                output.display()
            ),
            REDACTION_REMINDER.to_string(),
        ],
        Outcome::MissingInput { path } => vec![format!(
            "{} No se encuentra el archivo {}",
            "Error:".red().bold(),
            path.display()
        )],
        Outcome::ProcessingFailure { error } => vec![format!(
            "{} {}",
            "Error al procesar:".red().bold(),
            error
        )],
    }
}
