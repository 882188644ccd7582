//! Report sheet rendering.

use reportkit_io_xlsx::{EnumCellValue, SpecCellFormat, SpecMergeRange, XlsxIoError, XlsxWriter};

use crate::clean::clean_views;
use crate::conf::{
    C_DIVIDER_ACTIVE, C_DIVIDER_REVIEWS, C_DIVIDER_TOP20, C_FOOTNOTE, C_LABEL_PERIOD,
    C_LABEL_PLAN, C_LABEL_PRODUCT, C_VALUE_PLAN, C_VALUE_PRODUCT, C_VIEWS_PLACEHOLDER,
    N_COL_DATE, N_COL_FOOTNOTE_END, N_COL_HEADER_LABEL_END, N_COL_HEADER_VALUE_END,
    N_COL_SUMMARY_LABEL_END, N_COL_SUMMARY_VALUE, N_COL_VIEWS, N_NCOLS_REPORT,
    N_ROW_FIRST_SECTION, N_ROWS_GAP_FOOTNOTE, N_ROWS_GAP_SUMMARY, TUP_SUMMARY_LABELS,
    TUP_TABLE_HEADERS,
};
use crate::spec::{
    EnumRecordField, Record, SpecMonth, SpecReportFormats, SpecReportLayout, SpecReportRowPlan,
    SpecReportSections, SpecSummary,
};

////////////////////////////////////////////////////////////////////////////////
// #region ReportSheet

/// Sheet operations the renderer issues.
pub trait ReportSheet {
    /// Write one typed value with format.
    fn write_cell(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: &EnumCellValue,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError>;

    /// Format `col_start..=col_end` of one row as empty cells.
    fn write_blanks(
        &mut self,
        row_idx: usize,
        col_start: usize,
        col_end: usize,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError>;

    /// Merge a range with `text` in its anchor.
    fn merge_range(
        &mut self,
        merge: &SpecMergeRange,
        text: &str,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError>;

    /// Widths for consecutive columns from `A`.
    fn set_column_widths(&mut self, widths: &[f64]) -> Result<(), XlsxIoError>;

    /// Height in points for one row.
    fn set_row_height(&mut self, row_idx: usize, height: f64) -> Result<(), XlsxIoError>;
}

impl ReportSheet for XlsxWriter {
    fn write_cell(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: &EnumCellValue,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError> {
        XlsxWriter::write_cell(self, row_idx, col_idx, value, fmt)
    }

    fn write_blanks(
        &mut self,
        row_idx: usize,
        col_start: usize,
        col_end: usize,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError> {
        XlsxWriter::write_blanks(self, row_idx, col_start, col_end, fmt)
    }

    fn merge_range(
        &mut self,
        merge: &SpecMergeRange,
        text: &str,
        fmt: &SpecCellFormat,
    ) -> Result<(), XlsxIoError> {
        XlsxWriter::merge_range(self, merge, text, fmt)
    }

    fn set_column_widths(&mut self, widths: &[f64]) -> Result<(), XlsxIoError> {
        XlsxWriter::set_column_widths(self, widths)
    }

    fn set_row_height(&mut self, row_idx: usize, height: f64) -> Result<(), XlsxIoError> {
        XlsxWriter::set_row_height(self, row_idx, height)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RowPlanning

/// Place dividers, summary block and footnote for the given section sizes.
///
/// Sections follow each other with one blank row in between; the active
/// divider is placed even when the section is empty.
pub fn plan_report_rows(
    cnt_rows_reviews: usize,
    cnt_rows_top20: usize,
    cnt_rows_active: usize,
) -> SpecReportRowPlan {
    let row_divider_reviews = N_ROW_FIRST_SECTION;
    let row_divider_top20 = row_divider_reviews + 1 + cnt_rows_reviews + 1;
    let row_divider_active = row_divider_top20 + 1 + cnt_rows_top20 + 1;
    let row_last_data = row_divider_active + cnt_rows_active;
    let row_summary_start = row_last_data + N_ROWS_GAP_SUMMARY + 1;
    let row_footnote = row_summary_start + TUP_SUMMARY_LABELS.len() + N_ROWS_GAP_FOOTNOTE;

    SpecReportRowPlan {
        row_divider_reviews,
        row_divider_top20,
        row_divider_active,
        row_last_data,
        row_summary_start,
        row_footnote,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Rendering

/// Views cell as shown in the report: the count, or the placeholder when
/// absent or zero.
pub fn render_views_value(record: &Record) -> EnumCellValue {
    match clean_views(&record.views) {
        Some(n) if n != 0.0 => EnumCellValue::Number(n),
        _ => EnumCellValue::String(C_VIEWS_PLACEHOLDER.to_string()),
    }
}

/// Render the full report sheet onto `writer`.
pub fn render_report<W: ReportSheet>(
    writer: &mut W,
    month: &SpecMonth,
    sections: &SpecReportSections,
    summary: &SpecSummary,
    layout: &SpecReportLayout,
    formats: &SpecReportFormats,
) -> Result<SpecReportRowPlan, XlsxIoError> {
    let l_reviews: Vec<&Record> = sections.reviews().collect();
    let plan = plan_report_rows(l_reviews.len(), sections.top20.len(), sections.active.len());

    writer.set_column_widths(&layout.widths_col)?;
    write_header_block(writer, month, formats)?;
    write_table_header(writer, formats)?;

    let l_sections: [(usize, &str, Vec<&Record>); 3] = [
        (plan.row_divider_reviews, C_DIVIDER_REVIEWS, l_reviews),
        (
            plan.row_divider_top20,
            C_DIVIDER_TOP20,
            sections.top20.iter().collect(),
        ),
        (
            plan.row_divider_active,
            C_DIVIDER_ACTIVE,
            sections.active.iter().collect(),
        ),
    ];
    for (row_divider, c_label, l_records) in &l_sections {
        write_divider(writer, *row_divider, c_label, layout, formats)?;
        for (n_offset, record) in l_records.iter().enumerate() {
            write_record(writer, row_divider + 1 + n_offset, record, layout, formats)?;
        }
    }

    write_summary(writer, plan.row_summary_start, summary, layout, formats)?;

    writer.merge_range(
        &SpecMergeRange::row_span(plan.row_footnote, 0, N_COL_FOOTNOTE_END),
        C_FOOTNOTE,
        &formats.footnote,
    )?;
    writer.set_row_height(plan.row_footnote, layout.height_row_compact)?;

    Ok(plan)
}

fn write_header_block<W: ReportSheet>(
    writer: &mut W,
    month: &SpecMonth,
    formats: &SpecReportFormats,
) -> Result<(), XlsxIoError> {
    let c_period = month.period();
    let l_rows = [
        (C_LABEL_PRODUCT, C_VALUE_PRODUCT),
        (C_LABEL_PERIOD, c_period.as_str()),
        (C_LABEL_PLAN, C_VALUE_PLAN),
    ];

    for (row_idx, (c_label, c_value)) in l_rows.iter().enumerate() {
        writer.merge_range(
            &SpecMergeRange::row_span(row_idx, 0, N_COL_HEADER_LABEL_END),
            c_label,
            &formats.header_block,
        )?;
        writer.merge_range(
            &SpecMergeRange::row_span(
                row_idx,
                N_COL_HEADER_LABEL_END + 1,
                N_COL_HEADER_VALUE_END,
            ),
            c_value,
            &formats.header_block,
        )?;
        writer.write_blanks(
            row_idx,
            N_COL_HEADER_VALUE_END + 1,
            N_NCOLS_REPORT - 1,
            &formats.header_block,
        )?;
    }
    Ok(())
}

fn write_table_header<W: ReportSheet>(
    writer: &mut W,
    formats: &SpecReportFormats,
) -> Result<(), XlsxIoError> {
    let row_idx = N_ROW_FIRST_SECTION - 1;
    for (col_idx, c_title) in TUP_TABLE_HEADERS.iter().enumerate() {
        writer.write_cell(
            row_idx,
            col_idx,
            &EnumCellValue::String(c_title.to_string()),
            &formats.header_table,
        )?;
    }
    Ok(())
}

fn write_divider<W: ReportSheet>(
    writer: &mut W,
    row_idx: usize,
    label: &str,
    layout: &SpecReportLayout,
    formats: &SpecReportFormats,
) -> Result<(), XlsxIoError> {
    writer.merge_range(
        &SpecMergeRange::row_span(row_idx, 0, N_NCOLS_REPORT - 1),
        label,
        &formats.divider,
    )?;
    writer.set_row_height(row_idx, layout.height_row_compact)
}

fn write_record<W: ReportSheet>(
    writer: &mut W,
    row_idx: usize,
    record: &Record,
    layout: &SpecReportLayout,
    formats: &SpecReportFormats,
) -> Result<(), XlsxIoError> {
    for (col_idx, field) in EnumRecordField::ALL.iter().enumerate() {
        let (value, fmt): (EnumCellValue, &SpecCellFormat) = match col_idx {
            N_COL_VIEWS => (render_views_value(record), &formats.data_views),
            N_COL_DATE => (record.field(*field).clone(), &formats.data_date),
            _ => (record.field(*field).clone(), &formats.data_text),
        };
        writer.write_cell(row_idx, col_idx, &value, fmt)?;
    }
    writer.set_row_height(row_idx, layout.height_row_compact)
}

fn write_summary<W: ReportSheet>(
    writer: &mut W,
    row_start: usize,
    summary: &SpecSummary,
    layout: &SpecReportLayout,
    formats: &SpecReportFormats,
) -> Result<(), XlsxIoError> {
    let l_values = [
        (summary.total_views as f64, &formats.summary_value),
        (summary.cnt_review_cards as f64, &formats.summary_value),
        (summary.cnt_discussions as f64, &formats.summary_value),
        (summary.share_engagement, &formats.summary_percent),
    ];

    for (n_offset, (c_label, (n_value, fmt_value))) in
        TUP_SUMMARY_LABELS.iter().zip(l_values).enumerate()
    {
        let row_idx = row_start + n_offset;
        writer.merge_range(
            &SpecMergeRange::row_span(row_idx, 0, N_COL_SUMMARY_LABEL_END),
            c_label,
            &formats.summary_label,
        )?;
        writer.write_cell(
            row_idx,
            N_COL_SUMMARY_VALUE,
            &EnumCellValue::Number(n_value),
            fmt_value,
        )?;
        writer.set_row_height(row_idx, layout.height_row_compact)?;
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
