//! Shared XLSX specification models.

use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellValue

/// Untyped cell value as read from, or written to, a worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnumCellValue {
    /// Missing/blank value.
    #[default]
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Excel serial date/time (days since 1899-12-30).
    DateTime(f64),
    /// Boolean value.
    Bool(bool),
}

impl EnumCellValue {
    /// Whether the value is missing.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Text form of the value; `None` for missing cells.
    ///
    /// Integral numbers render without a fractional part (`12.0` -> `"12"`).
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::String(val) => Some(val.clone()),
            Self::Number(val) | Self::DateTime(val) => Some(format_number_text(*val)),
            Self::Bool(val) => Some(if *val { "True" } else { "False" }.to_string()),
        }
    }
}

fn format_number_text(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SourceGrid

/// Full worksheet content indexed from `A1` as `(row, col)`, 0-based.
///
/// Rows may be ragged; anything outside the stored area reads as missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSourceGrid {
    /// Row-major cell values.
    pub rows: Vec<Vec<EnumCellValue>>,
}

impl SpecSourceGrid {
    /// Build grid from row-major values.
    pub fn new(rows: Vec<Vec<EnumCellValue>>) -> Self {
        Self { rows }
    }

    /// Number of stored rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest stored row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at absolute position, `None` outside the stored area.
    pub fn get(&self, row_idx: usize, col_idx: usize) -> Option<&EnumCellValue> {
        self.rows.get(row_idx).and_then(|row| row.get(col_idx))
    }

    /// Cell at absolute position, missing cells as [`EnumCellValue::None`].
    pub fn value(&self, row_idx: usize, col_idx: usize) -> EnumCellValue {
        self.get(row_idx, col_idx).cloned().unwrap_or_default()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumAlignHorizontal {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Vertical cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumAlignVertical {
    /// Top aligned.
    Top,
    /// Vertically centered.
    Center,
    /// Bottom aligned.
    Bottom,
}

/// Cell format specification with optional attributes.
///
/// Unset attributes fall back to the Excel defaults, so presets can be layered
/// with [`SpecCellFormat::with_`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,
    /// Font color as `0xRRGGBB`.
    pub font_color: Option<u32>,

    /// Horizontal alignment.
    pub align: Option<EnumAlignHorizontal>,
    /// Vertical alignment.
    pub valign: Option<EnumAlignVertical>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Number format code.
    pub num_format: Option<String>,
    /// Solid background fill as `0xRRGGBB`.
    pub bg_color: Option<u32>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            font_color: other.font_color.or(self.font_color),
            align: other.align.or(self.align),
            valign: other.valign.or(self.valign),
            text_wrap: other.text_wrap.or(self.text_wrap),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.or(self.bg_color),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region MergeSpecification

/// Rectangular merged range, inclusive on both ends, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecMergeRange {
    /// First row index.
    pub row_start: usize,
    /// First column index.
    pub col_start: usize,
    /// Last row index.
    pub row_end: usize,
    /// Last column index.
    pub col_end: usize,
}

impl SpecMergeRange {
    /// Single-row merge over columns `col_start..=col_end`.
    pub fn row_span(row_idx: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start: row_idx,
            col_start,
            row_end: row_idx,
            col_end,
        }
    }

    /// Whether the range covers more than one cell.
    pub fn is_multi_cell(&self) -> bool {
        self.row_end > self.row_start || self.col_end > self.col_start
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// XLSX read/write failures.
#[derive(Debug, Error)]
pub enum XlsxIoError {
    /// Source workbook could not be opened.
    #[error("Failed to open workbook {}: {message}", .path.display())]
    WorkbookOpen {
        /// Workbook path.
        path: PathBuf,
        /// Underlying reader error text.
        message: String,
    },
    /// Sheet could not be read from an open workbook.
    #[error("Failed to read sheet {sheet:?}: {message}")]
    SheetRead {
        /// Requested sheet name.
        sheet: String,
        /// Underlying reader error text.
        message: String,
    },
    /// Worksheet construction failed.
    #[error("xlsx write error: {0}")]
    Write(String),
    /// Writer used after `close()`.
    #[error("Cannot write after close().")]
    Closed,
    /// Row/column index exceeds Excel limits.
    #[error("{axis} index overflow: {value}")]
    IndexOverflow {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// Offending 0-based index.
        value: usize,
    },
    /// Finished workbook could not be persisted.
    #[error("Failed to save workbook {}: {source}", .path.display())]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<rust_xlsxwriter::XlsxError> for XlsxIoError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        XlsxIoError::Write(err.to_string())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
