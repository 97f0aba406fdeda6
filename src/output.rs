//! Rendering of API records for the terminal.

use clap::ValueEnum;
use serde::Serialize;
use wartezeiten_client::{OpeningTimes, Park, WaitingTimes};

/// Output format of command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array, as returned by the API.
    #[default]
    Json,
    /// Aligned plain-text table.
    Table,
}

/// A record that can be shown as one table row.
pub trait TableRow {
    /// Column titles.
    fn columns() -> &'static [&'static str];
    /// Cell values, one per column.
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Park {
    fn columns() -> &'static [&'static str] {
        &["ID", "NAME", "LAND"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_else(|| "-".to_string()),
            self.name.clone(),
            self.land.clone(),
        ]
    }
}

impl TableRow for OpeningTimes {
    fn columns() -> &'static [&'static str] {
        &["OPEN TODAY", "OPEN FROM", "CLOSED FROM"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            if self.opened_today { "yes" } else { "no" }.to_string(),
            self.open_from.clone(),
            self.closed_from.clone(),
        ]
    }
}

impl TableRow for WaitingTimes {
    fn columns() -> &'static [&'static str] {
        &["CODE", "NAME", "STATUS", "WAIT (MIN)", "UPDATED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.status.to_string(),
            self.waitingtime.to_string(),
            self.datetime.clone(),
        ]
    }
}

/// Renders `rows` in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render<T: Serialize + TableRow>(
    rows: &[T],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows),
        OutputFormat::Table => Ok(render_table(rows)),
    }
}

fn render_table<T: TableRow>(rows: &[T]) -> String {
    let columns = T::columns();
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    std::iter::once(&header)
        .chain(cells.iter())
        .map(|row| format_row(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wartezeiten_client::WaitingStatus;

    fn parks() -> Vec<Park> {
        vec![
            Park {
                id: Some("efteling".to_string()),
                name: "Efteling".to_string(),
                land: "Niederlande".to_string(),
            },
            Park {
                id: None,
                name: "Phantasialand".to_string(),
                land: "Deutschland".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_json_round_trips() {
        let rendered = render(&parks(), OutputFormat::Json).unwrap();
        let parsed: Vec<Park> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, parks());
    }

    #[test]
    fn test_render_json_empty() {
        let rendered = render::<Park>(&[], OutputFormat::Json).unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rendered = render(&parks(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID        NAME           LAND");
        assert_eq!(lines[1], "efteling  Efteling       Niederlande");
        assert_eq!(lines[2], "-         Phantasialand  Deutschland");
    }

    #[test]
    fn test_render_table_empty_has_header() {
        let rendered = render::<WaitingTimes>(&[], OutputFormat::Table).unwrap();
        assert_eq!(rendered, "CODE  NAME  STATUS  WAIT (MIN)  UPDATED");
    }

    #[test]
    fn test_waiting_times_cells() {
        let ride = WaitingTimes {
            datetime: "2024-08-12T11:05:00+02:00".to_string(),
            date: "2024-08-12".to_string(),
            time: "11:05:00".to_string(),
            code: "python".to_string(),
            waitingtime: 0,
            status: WaitingStatus::ClosedWeather,
            name: "Python".to_string(),
        };

        assert_eq!(
            ride.cells(),
            vec![
                "python",
                "Python",
                "closedweather",
                "0",
                "2024-08-12T11:05:00+02:00"
            ]
        );
    }

    #[test]
    fn test_opening_times_cells() {
        let times = OpeningTimes {
            opened_today: false,
            open_from: "2024-12-24T10:00:00+01:00".to_string(),
            closed_from: "2024-12-24T17:00:00+01:00".to_string(),
        };

        assert_eq!(times.cells()[0], "no");
    }
}
