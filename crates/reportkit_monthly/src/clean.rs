//! Value cleaning for extracted records.

use reportkit_io_xlsx::EnumCellValue;

use crate::conf::C_VIEWS_PLACEHOLDER;
use crate::spec::{EnumRecordField, Record, SpecReportSections};

////////////////////////////////////////////////////////////////////////////////
// #region ViewsCleaner

/// Clean a raw views cell into a non-negative count.
///
/// Returns `None` (absent) for missing cells, the "no data" marker, and any
/// text that does not read as a plain decimal after removing spaces,
/// thousands separators and apostrophes. Other whitespace (tabs, newlines)
/// is not stripped, so such text is absent. Never fails.
pub fn clean_views(value: &EnumCellValue) -> Option<f64> {
    match value {
        EnumCellValue::None => None,
        EnumCellValue::Number(n) => (n.is_finite() && *n >= 0.0).then_some(*n),
        EnumCellValue::String(s) => clean_views_text(s),
        EnumCellValue::DateTime(_) | EnumCellValue::Bool(_) => None,
    }
}

fn clean_views_text(value: &str) -> Option<f64> {
    let c_trimmed = value.trim();
    if c_trimmed.is_empty() || is_no_data_marker(c_trimmed) {
        return None;
    }

    let c_cleaned: String = value
        .chars()
        .filter(|chr| !is_views_noise(*chr))
        .collect();
    let c_digits = c_cleaned.replacen('.', "", 1);
    if c_digits.is_empty() || !c_digits.chars().all(|chr| chr.is_ascii_digit()) {
        return None;
    }

    c_cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

fn is_no_data_marker(value: &str) -> bool {
    let c_collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    c_collapsed.to_lowercase() == C_VIEWS_PLACEHOLDER.to_lowercase()
}

fn is_views_noise(chr: char) -> bool {
    matches!(chr, ' ' | '\u{00A0}' | '\u{202F}' | ',' | '\'' | '\u{2019}')
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FieldNormalizer

/// Replace missing text fields with `""`.
///
/// Views keeps its raw value and is cleaned where it is consumed; dates stay
/// missing so they render as empty cells.
pub fn normalize_record(record: &mut Record) {
    for field in EnumRecordField::ALL.into_iter().filter(|f| f.is_text()) {
        let value = record.field_mut(field);
        if value.is_none() {
            *value = EnumCellValue::String(String::new());
        }
    }
}

/// Normalize every record of every section in place.
pub fn normalize_sections(sections: &mut SpecReportSections) {
    for l_records in sections.sections_mut() {
        l_records.iter_mut().for_each(normalize_record);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> EnumCellValue {
        EnumCellValue::String(value.to_string())
    }

    #[test]
    fn test_clean_views_separator_variants() {
        assert_eq!(clean_views(&text("1,234")), Some(1234.0));
        assert_eq!(clean_views(&text("1 234")), Some(1234.0));
        assert_eq!(clean_views(&text("1'234")), Some(1234.0));
        assert_eq!(clean_views(&text(" 12 345 ")), Some(12345.0));
        assert_eq!(clean_views(&text("12\u{00A0}345")), Some(12345.0));
    }

    #[test]
    fn test_clean_views_only_strips_spaces() {
        assert_eq!(clean_views(&text("12\t")), None);
        assert_eq!(clean_views(&text("\n12")), None);
        assert_eq!(clean_views(&text("1\r\n234")), None);
        assert_eq!(clean_views(&text("  12  ")), Some(12.0));
        assert_eq!(clean_views(&text("\u{00A0}12\u{202F}000")), Some(12000.0));
    }

    #[test]
    fn test_clean_views_decimal_point() {
        assert_eq!(clean_views(&text("1.5")), Some(1.5));
        assert_eq!(clean_views(&text("10.")), Some(10.0));
        assert_eq!(clean_views(&text(".5")), Some(0.5));
        assert_eq!(clean_views(&text("1.2.3")), None);
        assert_eq!(clean_views(&text(".")), None);
    }

    #[test]
    fn test_clean_views_absent_markers() {
        assert_eq!(clean_views(&EnumCellValue::None), None);
        assert_eq!(clean_views(&text("")), None);
        assert_eq!(clean_views(&text("   ")), None);
        assert_eq!(clean_views(&text("Нет данных")), None);
        assert_eq!(clean_views(&text("  нет   ДАННЫХ ")), None);
    }

    #[test]
    fn test_clean_views_malformed_degrades_to_absent() {
        for c_raw in ["abc", "-5", "1e5", "12k", "nan", "None", "+3", "1-2"] {
            assert_eq!(clean_views(&text(c_raw)), None, "input {c_raw:?}");
        }
        assert_eq!(clean_views(&EnumCellValue::Number(-1.0)), None);
        assert_eq!(clean_views(&EnumCellValue::Number(f64::NAN)), None);
        assert_eq!(clean_views(&EnumCellValue::Number(f64::INFINITY)), None);
        assert_eq!(clean_views(&EnumCellValue::Bool(true)), None);
        assert_eq!(clean_views(&EnumCellValue::DateTime(45717.0)), None);
    }

    #[test]
    fn test_clean_views_is_idempotent_on_numbers() {
        for n in [0.0, 1.0, 12345.0, 7.25] {
            let n_once = clean_views(&EnumCellValue::Number(n));
            assert_eq!(n_once, Some(n));
            let n_twice = n_once.and_then(|v| clean_views(&EnumCellValue::Number(v)));
            assert_eq!(n_twice, Some(n));
        }
    }

    #[test]
    fn test_normalize_record() {
        let mut record = Record {
            platform: text("forum"),
            views: text(" 12 345 "),
            engagement: text("есть"),
            ..Default::default()
        };
        normalize_record(&mut record);

        assert_eq!(record.platform, text("forum"));
        assert_eq!(record.topic, text(""));
        assert_eq!(record.message_text, text(""));
        assert_eq!(record.nickname, text(""));
        assert_eq!(record.post_type, text(""));
        assert_eq!(record.date, EnumCellValue::None);
        assert_eq!(record.views, text(" 12 345 "));
        assert_eq!(record.engagement, text("есть"));

        let mut record_blank = Record::default();
        normalize_record(&mut record_blank);
        assert_eq!(record_blank.views, EnumCellValue::None);
        assert_eq!(record_blank.engagement, text(""));
    }
}
