//! Single-sheet XLSX writer kernel.

use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, Worksheet};
use tempfile::NamedTempFile;

use crate::spec::{EnumCellValue, SpecCellFormat, SpecMergeRange, XlsxIoError};
use crate::util::{cast_col_num, cast_row_num, derive_rust_xlsx_format, sanitize_sheet_name};

/// Stateful single-sheet workbook writer.
///
/// The sheet is buffered in memory until [`Self::close`] is called. Nothing is
/// written to `path_file_out` before that, and a failed close leaves any
/// existing file at that path untouched.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    sheet_name: String,
    worksheet: Option<Worksheet>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path with one sheet named `sheet_name`.
    pub fn new(path_file_out: PathBuf, sheet_name: &str) -> Result<Self, XlsxIoError> {
        let sheet_name = sanitize_sheet_name(sheet_name, "_");
        let mut worksheet = Worksheet::new();
        worksheet.set_name(&sheet_name)?;

        Ok(Self {
            path_file_out,
            sheet_name,
            worksheet: Some(worksheet),
            if_closed: false,
        })
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Sheet name actually used in the workbook.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Whether [`Self::close`] already succeeded.
    pub fn is_closed(&self) -> bool {
        self.if_closed
    }

    /// Write one typed value with format.
    ///
    /// Empty strings are written as formatted blanks.
    pub fn write_cell(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: &EnumCellValue,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError> {
        let n_row = cast_row_num(row_idx)?;
        let n_col = cast_col_num(col_idx)?;
        let format = derive_rust_xlsx_format(fmt);
        let worksheet = self.worksheet_mut()?;

        match value {
            EnumCellValue::None => {
                worksheet.write_blank(n_row, n_col, &format)?;
            }
            EnumCellValue::String(val) if val.is_empty() => {
                worksheet.write_blank(n_row, n_col, &format)?;
            }
            EnumCellValue::String(val) => {
                worksheet.write_string_with_format(n_row, n_col, val, &format)?;
            }
            EnumCellValue::Number(val) | EnumCellValue::DateTime(val) => {
                worksheet.write_number_with_format(n_row, n_col, *val, &format)?;
            }
            EnumCellValue::Bool(val) => {
                worksheet.write_boolean_with_format(n_row, n_col, *val, &format)?;
            }
        }
        Ok(())
    }

    /// Apply format to a run of empty cells in one row.
    pub fn write_blanks(
        &mut self,
        row_idx: usize,
        col_start: usize,
        col_end: usize,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError> {
        for col_idx in col_start..=col_end {
            self.write_cell(row_idx, col_idx, &EnumCellValue::None, fmt)?;
        }
        Ok(())
    }

    /// Merge a range, put `text` in its anchor and format every covered cell.
    ///
    /// Single-cell ranges are written as plain cells.
    pub fn merge_range(
        &mut self,
        merge: &SpecMergeRange,
        text: &str,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError> {
        if !merge.is_multi_cell() {
            return self.write_cell(
                merge.row_start,
                merge.col_start,
                &EnumCellValue::String(text.to_string()),
                fmt,
            );
        }

        let n_row_start = cast_row_num(merge.row_start)?;
        let n_col_start = cast_col_num(merge.col_start)?;
        let n_row_end = cast_row_num(merge.row_end)?;
        let n_col_end = cast_col_num(merge.col_end)?;
        let format = derive_rust_xlsx_format(fmt);

        self.worksheet_mut()?.merge_range(
            n_row_start,
            n_col_start,
            n_row_end,
            n_col_end,
            text,
            &format,
        )?;
        Ok(())
    }

    /// Set widths for consecutive columns starting at `A`.
    pub fn set_column_widths(&mut self, widths: &[f64]) -> Result<(), XlsxIoError> {
        for (col_idx, width) in widths.iter().enumerate() {
            let n_col = cast_col_num(col_idx)?;
            self.worksheet_mut()?.set_column_width(n_col, *width)?;
        }
        Ok(())
    }

    /// Set explicit height (points) for one row.
    pub fn set_row_height(&mut self, row_idx: usize, height: f64) -> Result<(), XlsxIoError> {
        let n_row = cast_row_num(row_idx)?;
        self.worksheet_mut()?.set_row_height(n_row, height)?;
        Ok(())
    }

    /// Serialize workbook and atomically replace `path_file_out`. Idempotent.
    ///
    /// The sheet is consumed by the first attempt; after a failed close the
    /// writer only reports [`XlsxIoError::Closed`].
    pub fn close(&mut self) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Ok(());
        }
        let worksheet = self.worksheet.take().ok_or(XlsxIoError::Closed)?;

        let mut workbook = Workbook::new();
        workbook.push_worksheet(worksheet);
        let v_buffer = workbook.save_to_buffer()?;

        persist_bytes_atomically(&self.path_file_out, &v_buffer)?;
        self.if_closed = true;
        log::debug!("saved {} bytes to {}", v_buffer.len(), self.file_out());
        Ok(())
    }

    fn worksheet_mut(&mut self) -> Result<&mut Worksheet, XlsxIoError> {
        self.worksheet.as_mut().ok_or(XlsxIoError::Closed)
    }
}

/// Write bytes to a temporary sibling of `path` and rename it into place.
///
/// The temporary file is removed on every failure path.
fn persist_bytes_atomically(path: &Path, v_bytes: &[u8]) -> Result<(), XlsxIoError> {
    let to_persist_error = |source: std::io::Error| XlsxIoError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let path_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file_tmp = NamedTempFile::new_in(path_dir).map_err(to_persist_error)?;
    file_tmp.write_all(v_bytes).map_err(to_persist_error)?;
    file_tmp.as_file().sync_all().map_err(to_persist_error)?;
    file_tmp
        .persist(path)
        .map_err(|err| to_persist_error(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use calamine::{Data, Reader, Xlsx, open_workbook};

    #[test]
    fn test_close_writes_workbook_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path_out = dir.path().join("out.xlsx");

        let mut writer = XlsxWriter::new(path_out.clone(), "Март 2025").unwrap();
        let fmt = SpecCellFormat::default();
        writer
            .merge_range(&SpecMergeRange::row_span(0, 0, 1), "label", &fmt)
            .unwrap();
        writer
            .write_cell(1, 2, &EnumCellValue::Number(5.0), &fmt)
            .unwrap();
        writer.set_column_widths(&[25.0, 20.0]).unwrap();
        writer.set_row_height(1, 12.0).unwrap();
        writer.close().unwrap();
        writer.close().unwrap();
        assert!(writer.is_closed());

        let mut workbook: Xlsx<_> = open_workbook(&path_out).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Март 2025".to_string()]);
        let range = workbook.worksheet_range("Март 2025").unwrap();
        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("label".to_string()))
        );
        assert_eq!(range.get_value((1, 2)), Some(&Data::Float(5.0)));
    }

    #[test]
    fn test_write_after_close_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = XlsxWriter::new(dir.path().join("out.xlsx"), "S").unwrap();
        writer.close().unwrap();

        let err = writer
            .write_cell(0, 0, &EnumCellValue::None, &SpecCellFormat::default())
            .unwrap_err();
        assert!(matches!(err, XlsxIoError::Closed));
    }

    #[test]
    fn test_failed_close_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path_out = dir.path().join("missing_dir").join("out.xlsx");

        let mut writer = XlsxWriter::new(path_out.clone(), "S").unwrap();
        let err = writer.close().unwrap_err();

        assert!(matches!(err, XlsxIoError::Persist { .. }));
        assert!(matches!(writer.close().unwrap_err(), XlsxIoError::Closed));
        assert!(!path_out.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
