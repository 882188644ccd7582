//! `reportkit_monthly` v1:
//! Monthly activity report builder.
//!
//! Reads the month sheet of an activity export, slices its fixed regions and
//! writes the styled report workbook.
//!
//! Module layout:
//! - `conf`    : month tables, layout defaults, labels and style presets
//! - `spec`    : records, sections, layout, summary, outcome and errors
//! - `clean`   : views cleaner and field normalizer
//! - `extract` : month-sheet selector and region extractor
//! - `summary` : summary statistics
//! - `render`  : report row planning and rendering
//! - `report`  : end-to-end conversion
pub mod clean;
pub mod conf;
pub mod extract;
pub mod render;
pub mod report;
pub mod spec;
pub mod summary;

pub use clean::{clean_views, normalize_record, normalize_sections};
pub use conf::{TUP_MONTHS, derive_default_report_layout, derive_report_formats};
pub use extract::{extract_region, extract_sections, select_month_sheet};
pub use render::{ReportSheet, plan_report_rows, render_report, render_views_value};
pub use report::{convert_to_report, convert_to_report_with_layout};
pub use spec::{
    EnumRecordField, Record, ReportError, SpecMonth, SpecRegion, SpecReportFormats,
    SpecReportLayout, SpecReportOutcome, SpecReportRowPlan, SpecReportSections, SpecSummary,
};
pub use summary::calculate_summary;
