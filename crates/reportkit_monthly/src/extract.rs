//! Month-sheet selection and fixed-region extraction.

use reportkit_io_xlsx::SpecSourceGrid;

use crate::conf::TUP_MONTHS;
use crate::spec::{
    EnumRecordField, Record, ReportError, SpecMonth, SpecRegion, SpecReportLayout,
    SpecReportSections,
};

/// Pick the month sheet, honoring [`TUP_MONTHS`] priority over workbook order.
pub fn select_month_sheet(sheet_names: &[String]) -> Result<SpecMonth, ReportError> {
    TUP_MONTHS
        .iter()
        .find(|month| sheet_names.iter().any(|name| name == month.token))
        .copied()
        .ok_or_else(|| ReportError::SheetNotFound {
            available: sheet_names.to_vec(),
        })
}

/// Slice one region into records.
///
/// Always yields `region.height()` records; cells outside the grid are missing.
pub fn extract_region(
    grid: &SpecSourceGrid,
    region: &SpecRegion,
    cols_record: &[usize; 8],
) -> Vec<Record> {
    (region.row_start..region.row_end_exclusive)
        .map(|row_idx| {
            let mut record = Record::default();
            for (field, col_idx) in EnumRecordField::ALL.iter().zip(cols_record) {
                *record.field_mut(*field) = grid.value(row_idx, *col_idx);
            }
            record
        })
        .collect()
}

/// Extract all report sections according to `layout`.
pub fn extract_sections(grid: &SpecSourceGrid, layout: &SpecReportLayout) -> SpecReportSections {
    let sections = SpecReportSections {
        reviews_1: extract_region(grid, &layout.region_reviews_1, &layout.cols_record),
        reviews_2: extract_region(grid, &layout.region_reviews_2, &layout.cols_record),
        top20: extract_region(grid, &layout.region_top20, &layout.cols_record),
        active: layout
            .region_active
            .as_ref()
            .map(|region| extract_region(grid, region, &layout.cols_record))
            .unwrap_or_default(),
    };

    log::debug!(
        "extracted rows: {}={} {}={} {}={} active={}",
        layout.region_reviews_1.name,
        sections.reviews_1.len(),
        layout.region_reviews_2.name,
        sections.reviews_2.len(),
        layout.region_top20.name,
        sections.top20.len(),
        sections.active.len()
    );
    sections
}
