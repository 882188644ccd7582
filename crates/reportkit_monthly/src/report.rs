//! End-to-end conversion: month sheet in, styled report out.

use std::path::Path;

use reportkit_io_xlsx::{XlsxReader, XlsxWriter, derive_column_letters};

use crate::clean::normalize_sections;
use crate::conf::{N_COL_SUMMARY_VALUE, derive_report_formats};
use crate::extract::{extract_sections, select_month_sheet};
use crate::render::render_report;
use crate::spec::{ReportError, SpecReportLayout, SpecReportOutcome};
use crate::summary::calculate_summary;

/// Convert `path_src` into a report at `path_dst` with the default layout.
pub fn convert_to_report(
    path_src: impl AsRef<Path>,
    path_dst: impl AsRef<Path>,
) -> Result<SpecReportOutcome, ReportError> {
    convert_to_report_with_layout(path_src, path_dst, &SpecReportLayout::default())
}

/// Convert `path_src` into a report at `path_dst` using `layout`.
///
/// The destination is only replaced once the whole report has been rendered;
/// on any error an existing file there is left as it was.
pub fn convert_to_report_with_layout(
    path_src: impl AsRef<Path>,
    path_dst: impl AsRef<Path>,
    layout: &SpecReportLayout,
) -> Result<SpecReportOutcome, ReportError> {
    let path_src = path_src.as_ref();
    let path_dst = path_dst.as_ref();

    let (month, grid) = {
        let mut reader = XlsxReader::open(path_src)?;
        let l_sheet_names = reader.sheet_names();
        let month = select_month_sheet(&l_sheet_names)?;
        log::info!("using sheet {:?} of {}", month.token, reader.file_in());
        (month, reader.read_sheet(month.token)?)
    };

    let mut sections = extract_sections(&grid, layout);
    if layout.region_active.is_none() {
        log::info!("active discussions excluded from the report");
    }
    normalize_sections(&mut sections);

    let summary = calculate_summary(&sections);
    log::info!(
        "summary: views={} review_cards={} discussions={} engaged={}",
        summary.total_views,
        summary.cnt_review_cards,
        summary.cnt_discussions,
        summary.cnt_engaged
    );

    let formats = derive_report_formats();
    let mut writer = XlsxWriter::new(path_dst.to_path_buf(), &month.title())?;
    let plan = render_report(&mut writer, &month, &sections, &summary, layout, &formats)?;
    writer.close()?;
    log::info!(
        "report written to {} (summary at {}{})",
        writer.file_out(),
        derive_column_letters(N_COL_SUMMARY_VALUE),
        plan.row_summary_start + 1
    );

    Ok(SpecReportOutcome {
        sheet_source: month.token.to_string(),
        sheet_title: writer.sheet_name().to_string(),
        path_out: path_dst.to_path_buf(),
        cnt_rows: [
            sections.reviews_1.len(),
            sections.reviews_2.len(),
            sections.top20.len(),
            sections.active.len(),
        ],
        summary,
    })
}
