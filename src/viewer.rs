//! Credential viewer: gate check, flattening and table rendering.

use crate::credentials::Row;
use crate::error::GateError;
use crate::gate::MasterGate;
use crate::storage::CredentialStore;

/// Verifies `passphrase` and returns every stored credential as a row.
///
/// The gate is locked again before returning, so each call verifies anew.
pub fn open_viewer(
    gate: &mut MasterGate,
    store: &CredentialStore,
    passphrase: &str,
) -> Result<Vec<Row>, GateError> {
    gate.authorize(passphrase)?;
    let rows = store.load().rows();
    gate.lock();
    log::info!("Viewer opened with {} rows", rows.len());
    Ok(rows)
}

const HEADERS: [&str; 4] = ["#", "Website", "Username", "Password"];

/// Renders rows as an aligned table with 1-based row numbers.
pub fn render_table(rows: &[Row]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            [
                (i + 1).to_string(),
                row.website.clone(),
                row.username.clone(),
                row.password.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |line: [&str; 4]| -> String {
        line.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![format_line(HEADERS)];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for line in &cells {
        out.push(format_line([
            line[0].as_str(),
            line[1].as_str(),
            line[2].as_str(),
            line[3].as_str(),
        ]));
    }
    out.join("\n")
}
