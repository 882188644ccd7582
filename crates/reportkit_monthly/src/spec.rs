//! Report specification models and top-level error types.

use std::fmt;
use std::path::PathBuf;

use reportkit_io_xlsx::{EnumCellValue, SpecCellFormat, XlsxIoError};
use thiserror::Error;

use crate::conf::derive_default_report_layout;

////////////////////////////////////////////////////////////////////////////////
// #region RecordModel

/// Named fields of one extracted row, in source read order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRecordField {
    /// Platform/site the message was posted on.
    Platform,
    /// Discussion topic.
    Topic,
    /// Message body.
    MessageText,
    /// Publication date.
    Date,
    /// Author nickname.
    Nickname,
    /// View count (noisy, see [`crate::clean::clean_views`]).
    Views,
    /// Engagement marker.
    Engagement,
    /// Post type.
    PostType,
}

impl EnumRecordField {
    /// Fields in source read order; index `i` pairs with layout column `i`.
    pub const ALL: [EnumRecordField; 8] = [
        Self::Platform,
        Self::Topic,
        Self::MessageText,
        Self::Date,
        Self::Nickname,
        Self::Views,
        Self::Engagement,
        Self::PostType,
    ];

    /// Whether the field carries free text (normalized to `""` when missing).
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Date | Self::Views)
    }
}

/// One extracted source row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// See [`EnumRecordField::Platform`].
    pub platform: EnumCellValue,
    /// See [`EnumRecordField::Topic`].
    pub topic: EnumCellValue,
    /// See [`EnumRecordField::MessageText`].
    pub message_text: EnumCellValue,
    /// See [`EnumRecordField::Date`].
    pub date: EnumCellValue,
    /// See [`EnumRecordField::Nickname`].
    pub nickname: EnumCellValue,
    /// See [`EnumRecordField::Views`].
    pub views: EnumCellValue,
    /// See [`EnumRecordField::Engagement`].
    pub engagement: EnumCellValue,
    /// See [`EnumRecordField::PostType`].
    pub post_type: EnumCellValue,
}

impl Record {
    /// Shared access to one field.
    pub fn field(&self, field: EnumRecordField) -> &EnumCellValue {
        match field {
            EnumRecordField::Platform => &self.platform,
            EnumRecordField::Topic => &self.topic,
            EnumRecordField::MessageText => &self.message_text,
            EnumRecordField::Date => &self.date,
            EnumRecordField::Nickname => &self.nickname,
            EnumRecordField::Views => &self.views,
            EnumRecordField::Engagement => &self.engagement,
            EnumRecordField::PostType => &self.post_type,
        }
    }

    /// Mutable access to one field.
    pub fn field_mut(&mut self, field: EnumRecordField) -> &mut EnumCellValue {
        match field {
            EnumRecordField::Platform => &mut self.platform,
            EnumRecordField::Topic => &mut self.topic,
            EnumRecordField::MessageText => &mut self.message_text,
            EnumRecordField::Date => &mut self.date,
            EnumRecordField::Nickname => &mut self.nickname,
            EnumRecordField::Views => &mut self.views,
            EnumRecordField::Engagement => &mut self.engagement,
            EnumRecordField::PostType => &mut self.post_type,
        }
    }
}

/// Extracted report sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecReportSections {
    /// First review block.
    pub reviews_1: Vec<Record>,
    /// Second review block.
    pub reviews_2: Vec<Record>,
    /// Top-20 search comments.
    pub top20: Vec<Record>,
    /// Active discussions; empty unless the layout enables the region.
    pub active: Vec<Record>,
}

impl SpecReportSections {
    /// Review rows (`reviews_1` then `reviews_2`).
    pub fn reviews(&self) -> impl Iterator<Item = &Record> {
        self.reviews_1.iter().chain(&self.reviews_2)
    }

    /// Discussion rows (`top20` then `active`).
    pub fn discussions(&self) -> impl Iterator<Item = &Record> {
        self.top20.iter().chain(&self.active)
    }

    /// Every row in report order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.reviews().chain(self.discussions())
    }

    /// Mutable access to every section.
    pub fn sections_mut(&mut self) -> [&mut Vec<Record>; 4] {
        [
            &mut self.reviews_1,
            &mut self.reviews_2,
            &mut self.top20,
            &mut self.active,
        ]
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutSpecification

/// Row slice `[row_start, row_end_exclusive)` of the source sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRegion {
    /// Region name used in logs.
    pub name: String,
    /// Inclusive 0-based start row.
    pub row_start: usize,
    /// Exclusive end row.
    pub row_end_exclusive: usize,
}

impl SpecRegion {
    /// Build region from name and bounds.
    pub fn new(name: &str, row_start: usize, row_end_exclusive: usize) -> Self {
        Self {
            name: name.to_string(),
            row_start,
            row_end_exclusive,
        }
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.row_end_exclusive.saturating_sub(self.row_start)
    }
}

/// Positional layout of the source sheet and geometry of the report sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecReportLayout {
    /// First review block.
    pub region_reviews_1: SpecRegion,
    /// Second review block.
    pub region_reviews_2: SpecRegion,
    /// Top-20 comments.
    pub region_top20: SpecRegion,
    /// Active discussions; `None` excludes the section from the report.
    pub region_active: Option<SpecRegion>,
    /// Source column per [`EnumRecordField::ALL`] entry.
    pub cols_record: [usize; 8],
    /// Output column widths `A..H`.
    pub widths_col: [f64; 8],
    /// Height of data, divider, summary and footnote rows.
    pub height_row_compact: f64,
}

impl Default for SpecReportLayout {
    fn default() -> Self {
        derive_default_report_layout()
    }
}

/// Recognized month sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecMonth {
    /// Sheet-name token, e.g. `Мар25`.
    pub token: &'static str,
    /// Calendar month number `1..=12`.
    pub number: u32,
    /// Localized month name.
    pub name: &'static str,
}

impl SpecMonth {
    /// Two-digit year suffix of the token.
    pub fn year_suffix(&self) -> String {
        let l_chars: Vec<char> = self.token.chars().collect();
        l_chars[l_chars.len().saturating_sub(2)..].iter().collect()
    }

    /// Output sheet title, e.g. `Март 2025`.
    pub fn title(&self) -> String {
        format!("{} 20{}", self.name, self.year_suffix())
    }

    /// Period header value, e.g. `01.03.2025`.
    pub fn period(&self) -> String {
        format!("01.{:02}.20{}", self.number, self.year_suffix())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RenderSpecification

/// Named cell formats of the report sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReportFormats {
    /// Product/Period/Plan block.
    pub header_block: SpecCellFormat,
    /// Column title row.
    pub header_table: SpecCellFormat,
    /// Section divider rows.
    pub divider: SpecCellFormat,
    /// Text data cells.
    pub data_text: SpecCellFormat,
    /// Date data cells.
    pub data_date: SpecCellFormat,
    /// Views data cells.
    pub data_views: SpecCellFormat,
    /// Summary labels.
    pub summary_label: SpecCellFormat,
    /// Summary counts.
    pub summary_value: SpecCellFormat,
    /// Summary share.
    pub summary_percent: SpecCellFormat,
    /// Footnote row.
    pub footnote: SpecCellFormat,
}

/// Output row positions, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReportRowPlan {
    /// Reviews divider row.
    pub row_divider_reviews: usize,
    /// Top-20 divider row.
    pub row_divider_top20: usize,
    /// Active discussions divider row.
    pub row_divider_active: usize,
    /// Last rendered divider/data row.
    pub row_last_data: usize,
    /// First of the four summary rows.
    pub row_summary_start: usize,
    /// Footnote row.
    pub row_footnote: usize,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SummaryAndOutcome

/// Summary statistics over all sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSummary {
    /// Sum of positive cleaned view counts, each truncated to an integer.
    pub total_views: u64,
    /// Rows in both review blocks.
    pub cnt_review_cards: usize,
    /// Rows in top-20 and active sections.
    pub cnt_discussions: usize,
    /// Discussion rows carrying the engagement marker.
    pub cnt_engaged: usize,
    /// `cnt_engaged / cnt_discussions`, `0.0` without discussions.
    pub share_engagement: f64,
}

/// Result of one successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecReportOutcome {
    /// Selected source sheet.
    pub sheet_source: String,
    /// Output sheet title.
    pub sheet_title: String,
    /// Written report path.
    pub path_out: PathBuf,
    /// Rows per section: reviews-1, reviews-2, top20, active.
    pub cnt_rows: [usize; 4],
    /// Summary statistics.
    pub summary: SpecSummary,
}

impl SpecReportOutcome {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheet={} title={:?} reviews={}+{} top20={} active={} views={} \
             engagement={:.0}% out={}",
            self.sheet_source,
            self.sheet_title,
            self.cnt_rows[0],
            self.cnt_rows[1],
            self.cnt_rows[2],
            self.cnt_rows[3],
            self.summary.total_views,
            self.summary.share_engagement * 100.0,
            self.path_out.display()
        )
    }
}

impl fmt::Display for SpecReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[REPORT]"))
    }
}

/// Conversion failures.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No sheet named after a recognized month token.
    #[error("Month data sheet not found. Available sheets: {}", .available.join(", "))]
    SheetNotFound {
        /// Sheet names present in the source workbook.
        available: Vec<String>,
    },
    /// Reading the source or writing the report failed.
    #[error(transparent)]
    Xlsx(#[from] XlsxIoError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::TUP_MONTHS;

    #[test]
    fn test_month_title_and_period() {
        let month = TUP_MONTHS
            .iter()
            .find(|m| m.token == "Март25")
            .copied()
            .unwrap();

        assert_eq!(month.year_suffix(), "25");
        assert_eq!(month.title(), "Март 2025");
        assert_eq!(month.period(), "01.03.2025");
    }

    #[test]
    fn test_record_field_access_follows_read_order() {
        let mut record = Record::default();
        for (n_idx, field) in EnumRecordField::ALL.iter().enumerate() {
            *record.field_mut(*field) = EnumCellValue::Number(n_idx as f64);
        }

        assert_eq!(record.platform, EnumCellValue::Number(0.0));
        assert_eq!(record.views, EnumCellValue::Number(5.0));
        assert_eq!(record.engagement, EnumCellValue::Number(6.0));
        assert_eq!(record.post_type, EnumCellValue::Number(7.0));
        assert_eq!(
            record.field(EnumRecordField::Date),
            &EnumCellValue::Number(3.0)
        );
    }

    #[test]
    fn test_outcome_format() {
        let outcome = SpecReportOutcome {
            sheet_source: "Мар25".to_string(),
            sheet_title: "Март 2025".to_string(),
            path_out: PathBuf::from("out.xlsx"),
            cnt_rows: [9, 13, 20, 0],
            summary: SpecSummary {
                total_views: 1500,
                cnt_review_cards: 22,
                cnt_discussions: 20,
                cnt_engaged: 5,
                share_engagement: 0.25,
            },
        };

        assert_eq!(
            outcome.to_string(),
            "[REPORT] sheet=Мар25 title=\"Март 2025\" reviews=9+13 top20=20 active=0 \
             views=1500 engagement=25% out=out.xlsx"
        );
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = ReportError::SheetNotFound {
            available: vec!["Лист1".to_string(), "Итоги".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Month data sheet not found. Available sheets: Лист1, Итоги"
        );
    }
}
