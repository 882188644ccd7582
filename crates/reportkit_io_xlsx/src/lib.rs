//! `reportkit_io_xlsx` v1:
//! XLSX read/write kernel for report builders.
//!
//! Module layout:
//! - `conf`   : Excel limits and constants
//! - `spec`   : cell values, formats, grids and errors
//! - `util`   : pure helper functions
//! - `reader` : `calamine`-backed sheet reader
//! - `writer` : `rust_xlsxwriter`-backed single-sheet writer
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
pub use reader::XlsxReader;
pub use spec::{
    EnumAlignHorizontal, EnumAlignVertical, EnumCellValue, SpecCellFormat, SpecMergeRange,
    SpecSourceGrid, XlsxIoError,
};
pub use util::{derive_column_letters, sanitize_sheet_name};
pub use writer::XlsxWriter;
