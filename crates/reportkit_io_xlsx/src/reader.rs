//! Workbook reader built on `calamine`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, XlsxError, open_workbook};

use crate::spec::{EnumCellValue, SpecSourceGrid, XlsxIoError};

/// Read-only view over one source workbook.
pub struct XlsxReader {
    path_file_in: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl XlsxReader {
    /// Open workbook at `path_file_in`.
    pub fn open(path_file_in: impl AsRef<Path>) -> Result<Self, XlsxIoError> {
        let path_file_in = path_file_in.as_ref().to_path_buf();
        let workbook: Xlsx<_> =
            open_workbook(&path_file_in).map_err(|err: XlsxError| XlsxIoError::WorkbookOpen {
                path: path_file_in.clone(),
                message: err.to_string(),
            })?;

        Ok(Self {
            path_file_in,
            workbook,
        })
    }

    /// Return input file path as string.
    pub fn file_in(&self) -> String {
        self.path_file_in.to_string_lossy().to_string()
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Read one sheet into an `A1`-anchored grid.
    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<SpecSourceGrid, XlsxIoError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|err| XlsxIoError::SheetRead {
                sheet: sheet_name.to_string(),
                message: err.to_string(),
            })?;

        let grid = derive_grid_from_range(&range);
        log::debug!(
            "read sheet {sheet_name:?} from {}: {} rows x {} cols",
            self.file_in(),
            grid.height(),
            grid.width()
        );
        Ok(grid)
    }
}

/// Re-anchor a `calamine` range at `A1`.
///
/// `calamine` trims leading empty rows/columns; the report layout addresses
/// cells by absolute position, so the trimmed area is padded back in.
pub fn derive_grid_from_range(range: &Range<Data>) -> SpecSourceGrid {
    let Some((n_row_start, n_col_start)) = range.start() else {
        return SpecSourceGrid::default();
    };

    let mut l_rows: Vec<Vec<EnumCellValue>> = vec![Vec::new(); n_row_start as usize];
    for row in range.rows() {
        let mut l_cells = vec![EnumCellValue::None; n_col_start as usize];
        l_cells.extend(row.iter().map(derive_cell_value_from_data));
        l_rows.push(l_cells);
    }

    SpecSourceGrid::new(l_rows)
}

fn derive_cell_value_from_data(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty => EnumCellValue::None,
        Data::String(val) => EnumCellValue::String(val.clone()),
        Data::Int(val) => EnumCellValue::Number(*val as f64),
        Data::Float(val) => EnumCellValue::Number(*val),
        Data::Bool(val) => EnumCellValue::Bool(*val),
        Data::DateTime(val) => EnumCellValue::DateTime(val.as_f64()),
        Data::DateTimeIso(val) => EnumCellValue::String(val.clone()),
        Data::DurationIso(val) => EnumCellValue::String(val.clone()),
        Data::Error(err) => EnumCellValue::String(err.to_string()),
    }
}
