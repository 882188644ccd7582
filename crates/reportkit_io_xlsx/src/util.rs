//! Stateless helper utilities used by the XLSX reader/writer kernel.

use rust_xlsxwriter::{Color, Format, FormatAlign};

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumAlignHorizontal, EnumAlignVertical, SpecCellFormat, XlsxIoError};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().trim_matches('\'').to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Column letters for a 0-based index (`0 -> "A"`, `26 -> "AA"`).
pub fn derive_column_letters(col_idx: usize) -> String {
    let mut l_chars = Vec::new();
    let mut n_rest = col_idx + 1;
    while n_rest > 0 {
        let n_rem = (n_rest - 1) % 26;
        l_chars.push(char::from(b'A' + n_rem as u8));
        n_rest = (n_rest - 1) / 26;
    }
    l_chars.iter().rev().collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexCasting

pub(crate) fn cast_row_num(value: usize) -> Result<u32, XlsxIoError> {
    if value >= N_NROWS_EXCEL_MAX {
        return Err(XlsxIoError::IndexOverflow { axis: "row", value });
    }
    u32::try_from(value).map_err(|_| XlsxIoError::IndexOverflow { axis: "row", value })
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, XlsxIoError> {
    if value >= N_NCOLS_EXCEL_MAX {
        return Err(XlsxIoError::IndexOverflow {
            axis: "column",
            value,
        });
    }
    u16::try_from(value).map_err(|_| XlsxIoError::IndexOverflow {
        axis: "column",
        value,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FormatConversion

/// Convert a [`SpecCellFormat`] into a `rust_xlsxwriter` format.
pub fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }
    if let Some(val) = spec.font_color {
        format = format.set_font_color(Color::RGB(val));
    }

    if let Some(val) = spec.align {
        format = format.set_align(derive_format_align_horizontal(val));
    }
    if let Some(val) = spec.valign {
        format = format.set_align(derive_format_align_vertical(val));
    }
    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = spec.bg_color {
        format = format.set_background_color(Color::RGB(val));
    }

    format
}

fn derive_format_align_horizontal(align: EnumAlignHorizontal) -> FormatAlign {
    match align {
        EnumAlignHorizontal::Left => FormatAlign::Left,
        EnumAlignHorizontal::Center => FormatAlign::Center,
        EnumAlignHorizontal::Right => FormatAlign::Right,
    }
}

fn derive_format_align_vertical(align: EnumAlignVertical) -> FormatAlign {
    match align {
        EnumAlignVertical::Top => FormatAlign::Top,
        EnumAlignVertical::Center => FormatAlign::VerticalCenter,
        EnumAlignVertical::Bottom => FormatAlign::Bottom,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
