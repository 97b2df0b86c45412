//! Spreadsheet export of a ranked [`ResultSet`].

pub mod layout;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};
use taste_core::{FieldValue, ResultSet, COLUMN_LABELS, SHEET_NAME};
use thiserror::Error;

pub use layout::{is_centered, COLUMN_WIDTHS, CENTERED_COLUMNS};

/// MIME type of the exported workbook.
pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// An in-memory `.xlsx` workbook ready to be written or streamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    bytes: Vec<u8>,
}

impl ExportBlob {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}

/// Download name for a workbook of `region`'s results.
#[must_use]
pub fn file_name(region: &str) -> String {
    format!("diningcode_{region}_data.xlsx")
}

/// Writes `result_set` as a single-sheet workbook.
///
/// The header row holds [`COLUMN_LABELS`]; records follow in result-set
/// order. Columns get [`COLUMN_WIDTHS`], and every cell in
/// [`CENTERED_COLUMNS`] (header included) is horizontally centered.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if the workbook library fails to lay out or
/// serialize the sheet.
pub fn export_workbook(result_set: &ResultSet) -> Result<ExportBlob, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, width) in (0u16..).zip(COLUMN_WIDTHS) {
        sheet.set_column_width(col, width)?;
    }

    let header = Format::new().set_bold();
    let header_centered = Format::new().set_bold().set_align(FormatAlign::Center);
    let body = Format::new();
    let body_centered = Format::new().set_align(FormatAlign::Center);

    for (col, label) in (0u16..).zip(COLUMN_LABELS) {
        let format = if is_centered(col) {
            &header_centered
        } else {
            &header
        };
        sheet.write_string_with_format(0, col, label, format)?;
    }

    for (row, record) in (1u32..).zip(result_set.records()) {
        for (col, cell) in (0u16..).zip(record.cells()) {
            let format = if is_centered(col) { &body_centered } else { &body };
            write_cell(sheet, row, col, &cell, format)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(
        region = result_set.region(),
        rows = result_set.len(),
        bytes = bytes.len(),
        "exported workbook"
    );

    Ok(ExportBlob { bytes })
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &FieldValue,
    format: &Format,
) -> Result<(), XlsxError> {
    match cell {
        FieldValue::Number(n) => sheet.write_number_with_format(row, col, *n, format)?,
        FieldValue::Text(s) => sheet.write_string_with_format(row, col, s, format)?,
        FieldValue::Empty => sheet.write_blank(row, col, format)?,
    };
    Ok(())
}
