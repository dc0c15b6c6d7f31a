use std::path::{Path, PathBuf};

use log::debug;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::{FormError, Result};
use crate::model::PlayerForm;

pub const DEFAULT_REPORT_PATH: &str = "eplPlayerFantasyForm.xlsx";

const SHEET_NAME: &str = "Form";
const IDENTITY_HEADINGS: [&str; 3] = ["Player", "Team", "Next Fixture"];
const IDENTITY_WIDTH: f64 = 22.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// `GW<k-window+1>` .. `GW<k>`, starting no earlier than `GW1`.
pub fn gameweek_headings(current_gameweek: u32, window: usize) -> Vec<String> {
    let window = u32::try_from(window).unwrap_or(u32::MAX);
    let first = current_gameweek.saturating_sub(window).saturating_add(1);
    (first..=current_gameweek).map(|gw| format!("GW{gw}")).collect()
}

/// Full header row: identity columns followed by the trailing gameweek columns.
pub fn report_headings(current_gameweek: u32, window: usize) -> Vec<String> {
    let mut headings: Vec<String> = IDENTITY_HEADINGS.iter().map(|h| h.to_string()).collect();
    headings.extend(gameweek_headings(current_gameweek, window));
    headings
}

pub fn report_rows(ranked: &[PlayerForm], window: usize) -> Vec<Vec<String>> {
    ranked.iter().map(|form| form_row(form, window)).collect()
}

fn form_row(form: &PlayerForm, window: usize) -> Vec<String> {
    let start = form.points.len().saturating_sub(window);
    let mut row = vec![
        form.name.clone(),
        form.team.clone(),
        form.next_opponent.clone(),
    ];
    row.extend(form.points[start..].iter().map(|p| p.to_string()));
    row
}

/// Writes the ranking as a single-sheet workbook, replacing `path` if it exists.
pub fn write_report(
    ranked: &[PlayerForm],
    window: usize,
    current_gameweek: u32,
    path: &Path,
) -> Result<ExportReport> {
    let headings = report_headings(current_gameweek, window);
    let rows = report_rows(ranked, window);

    save_workbook(&headings, &rows, path).map_err(|source| FormError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} rows to {}", rows.len(), path.display());

    Ok(ExportReport {
        path: path.to_path_buf(),
        rows: rows.len(),
        columns: headings.len(),
    })
}

fn save_workbook(
    headings: &[String],
    rows: &[Vec<String>],
    path: &Path,
) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        for col in 0..IDENTITY_HEADINGS.len() {
            sheet.set_column_width(col as u16, IDENTITY_WIDTH)?;
        }
        let bold = Format::new().set_bold();
        for (col_idx, heading) in headings.iter().enumerate() {
            sheet.write_string_with_format(0, col_idx as u16, heading, &bold)?;
        }
        write_rows(sheet, 1, rows)?;
    }
    workbook.save(path)
}

fn write_rows(
    worksheet: &mut Worksheet,
    first_row: u32,
    rows: &[Vec<String>],
) -> std::result::Result<(), XlsxError> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet.write_string(first_row + row_idx as u32, col_idx as u16, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_cover_trailing_window() {
        assert_eq!(gameweek_headings(10, 3), vec!["GW8", "GW9", "GW10"]);
        assert_eq!(gameweek_headings(2, 5), vec!["GW1", "GW2"]);
        assert_eq!(gameweek_headings(4, 4), vec!["GW1", "GW2", "GW3", "GW4"]);
    }

    #[test]
    fn header_is_identity_then_gameweeks() {
        assert_eq!(
            report_headings(10, 3),
            vec!["Player", "Team", "Next Fixture", "GW8", "GW9", "GW10"]
        );
        assert_eq!(
            report_headings(2, 5),
            vec!["Player", "Team", "Next Fixture", "GW1", "GW2"]
        );
    }

    #[test]
    fn rows_hold_identity_then_recent_points() {
        let form = PlayerForm {
            player_id: 1,
            name: "Harry Kane".to_string(),
            team: "Spurs".to_string(),
            next_opponent: "Arsenal".to_string(),
            points: vec![12, 30, -2, 17],
        };
        let rows = report_rows(&[form], 2);
        assert_eq!(rows, vec![vec!["Harry Kane", "Spurs", "Arsenal", "-2", "17"]]);
    }
}
