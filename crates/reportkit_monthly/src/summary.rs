//! Summary statistics over extracted sections.

use crate::clean::clean_views;
use crate::conf::C_ENGAGEMENT_MARKER;
use crate::spec::{Record, SpecReportSections, SpecSummary};

/// Compute the four report statistics.
///
/// Views are re-cleaned here, so raw and normalized sections give the same
/// totals.
pub fn calculate_summary(sections: &SpecReportSections) -> SpecSummary {
    let total_views = sections
        .all()
        .filter_map(|record| clean_views(&record.views))
        .filter(|n| *n > 0.0)
        .map(|n| n.trunc() as u64)
        .sum();

    let cnt_review_cards = sections.reviews_1.len() + sections.reviews_2.len();
    let cnt_discussions = sections.top20.len() + sections.active.len();
    let cnt_engaged = sections.discussions().filter(|r| is_engaged(r)).count();
    let share_engagement = if cnt_discussions > 0 {
        cnt_engaged as f64 / cnt_discussions as f64
    } else {
        0.0
    };

    SpecSummary {
        total_views,
        cnt_review_cards,
        cnt_discussions,
        cnt_engaged,
        share_engagement,
    }
}

fn is_engaged(record: &Record) -> bool {
    record.engagement.to_text().as_deref() == Some(C_ENGAGEMENT_MARKER)
}
