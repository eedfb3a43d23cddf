//! Rendering of the service log for external export.
//!
//! The core renders the delimited table; persisting it (file, clipboard,
//! wherever) is the caller's business. The column layout and header are a
//! compatibility contract with existing consumers and must not change.

use crate::domain::State;

/// Header row of the exported service-log table.
pub const SERVICE_LOG_HEADER: &str =
    "turno,nombre,llegada,atendido,espera_segundos,espera_hhmmss";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the completed services as a delimited text table.
///
/// One row per service in service order, after the fixed header. Each row
/// carries the ticket, the name, arrival and service timestamps
/// (`yyyy-MM-dd HH:mm:ss`), and the wait both as whole seconds and as
/// `HH:MM:SS` (hours are not wrapped at 24). Commas embedded in the
/// ticket or name are replaced with spaces so the column count stays
/// stable.
///
/// # Example
///
/// ```rust
/// use ventanilla::{export, State};
///
/// let table = export::service_log_table(&State::initial());
/// assert_eq!(
///     table,
///     "turno,nombre,llegada,atendido,espera_segundos,espera_hhmmss\n"
/// );
/// ```
pub fn service_log_table(state: &State) -> String {
    let mut table = String::from(SERVICE_LOG_HEADER);
    table.push('\n');
    for record in state.history().iter() {
        let seconds = record.wait().as_secs();
        let row = format!(
            "{},{},{},{},{},{}",
            sanitize(record.customer().ticket()),
            sanitize(record.customer().name()),
            record.customer().arrived_at().format(TIMESTAMP_FORMAT),
            record.served_at().format(TIMESTAMP_FORMAT),
            seconds,
            format_hhmmss(seconds),
        );
        table.push_str(&row);
        table.push('\n');
    }
    table
}

/// Format whole seconds as `HH:MM:SS`, letting hours run past 24.
pub fn format_hhmmss(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn sanitize(field: &str) -> String {
    field.replace(',', " ")
}
