//! Report constants and default preset factories.

use reportkit_io_xlsx::{EnumAlignHorizontal, EnumAlignVertical, SpecCellFormat};

use crate::spec::{SpecMonth, SpecRegion, SpecReportFormats, SpecReportLayout};

////////////////////////////////////////////////////////////////////////////////
// #region MonthTables

/// Recognized month sheets in selection priority order.
///
/// March is accepted under two spellings.
pub const TUP_MONTHS: [SpecMonth; 13] = [
    SpecMonth {
        token: "Янв25",
        number: 1,
        name: "Январь",
    },
    SpecMonth {
        token: "Фев25",
        number: 2,
        name: "Февраль",
    },
    SpecMonth {
        token: "Мар25",
        number: 3,
        name: "Март",
    },
    SpecMonth {
        token: "Март25",
        number: 3,
        name: "Март",
    },
    SpecMonth {
        token: "Апр25",
        number: 4,
        name: "Апрель",
    },
    SpecMonth {
        token: "Май25",
        number: 5,
        name: "Май",
    },
    SpecMonth {
        token: "Июн25",
        number: 6,
        name: "Июнь",
    },
    SpecMonth {
        token: "Июл25",
        number: 7,
        name: "Июль",
    },
    SpecMonth {
        token: "Авг25",
        number: 8,
        name: "Август",
    },
    SpecMonth {
        token: "Сен25",
        number: 9,
        name: "Сентябрь",
    },
    SpecMonth {
        token: "Окт25",
        number: 10,
        name: "Октябрь",
    },
    SpecMonth {
        token: "Ноя25",
        number: 11,
        name: "Ноябрь",
    },
    SpecMonth {
        token: "Дек25",
        number: 12,
        name: "Декабрь",
    },
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Literals

/// Views placeholder for absent/zero counts; also the "no data" source marker.
pub const C_VIEWS_PLACEHOLDER: &str = "Нет данных";
/// Engagement marker counted by the engagement share.
pub const C_ENGAGEMENT_MARKER: &str = "есть";

/// Header block labels and fixed values.
pub const C_LABEL_PRODUCT: &str = "Продукт";
pub const C_LABEL_PERIOD: &str = "Период";
pub const C_LABEL_PLAN: &str = "План";
pub const C_VALUE_PRODUCT: &str = "Акрихин - Фортедетрим";
pub const C_VALUE_PLAN: &str = "Отзывы - 22, Комментарии - 650";

/// Table column titles, `A..H`.
pub const TUP_TABLE_HEADERS: [&str; 8] = [
    "Площадка",
    "Тема",
    "Текст сообщения",
    "Дата",
    "Ник",
    "Просмотры",
    "Вовлечение",
    "Тип поста",
];

/// Section divider labels.
pub const C_DIVIDER_REVIEWS: &str = "Отзывы";
pub const C_DIVIDER_TOP20: &str = "Комментарии Топ-20 выдачи";
pub const C_DIVIDER_ACTIVE: &str = "Активные обсуждения (мониторинг)";

/// Summary labels, in row order.
pub const TUP_SUMMARY_LABELS: [&str; 4] = [
    "Суммарное количество просмотров",
    "Количество карточек товара (отзывы)",
    "Количество обсуждений (форумы, сообщества, комментарии к статьям)",
    "Доля обсуждений с вовлечением в диалог",
];

// TODO: confirm the "3 months" wording with the report owner; runs cover a single month.
pub const C_FOOTNOTE: &str = "*Фин учета количества просмотров за прошедший период - суммирование 3х месяцев, спонтанных за публикацией";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Geometry

/// Output columns `A..H`.
pub const N_NCOLS_REPORT: usize = 8;
/// Last column of a header-block label (`B`).
pub const N_COL_HEADER_LABEL_END: usize = 1;
/// Last column of a header-block value (`G`).
pub const N_COL_HEADER_VALUE_END: usize = 6;
/// Last column of a summary label (`E`).
pub const N_COL_SUMMARY_LABEL_END: usize = 4;
/// Summary value column (`F`).
pub const N_COL_SUMMARY_VALUE: usize = 5;
/// Last column of the footnote (`F`).
pub const N_COL_FOOTNOTE_END: usize = 5;
/// Output column holding the date (`D`).
pub const N_COL_DATE: usize = 3;
/// Output column holding the views (`F`).
pub const N_COL_VIEWS: usize = 5;
/// First data-section row (after header block and table header).
pub const N_ROW_FIRST_SECTION: usize = 4;
/// Blank rows between the last data row and the summary block.
pub const N_ROWS_GAP_SUMMARY: usize = 2;
/// Blank rows between the summary block and the footnote.
pub const N_ROWS_GAP_FOOTNOTE: usize = 2;

/// Build the source layout of the monthly activity export.
pub fn derive_default_report_layout() -> SpecReportLayout {
    SpecReportLayout {
        region_reviews_1: SpecRegion::new("reviews-1", 6, 15),
        region_reviews_2: SpecRegion::new("reviews-2", 15, 28),
        region_top20: SpecRegion::new("top20", 31, 51),
        // Rows from 52 hold discussion comments that are kept out of the report.
        region_active: None,
        cols_record: [1, 3, 4, 6, 7, 10, 16, 13],
        widths_col: [25.0, 20.0, 50.0, 12.0, 15.0, 12.0, 12.0, 12.0],
        height_row_compact: 12.0,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StylePresets

const N_COLOR_HEADER_FILL: u32 = 0x2D1341;
const N_COLOR_HEADER_FONT: u32 = 0xFFFFFF;
const N_COLOR_DIVIDER_FILL: u32 = 0xC5D9F1;
const N_COLOR_SUMMARY_FILL: u32 = 0xFCE4D6;

/// Build named report formats.
pub fn derive_report_formats() -> SpecReportFormats {
    let fmt_center = SpecCellFormat {
        align: Some(EnumAlignHorizontal::Center),
        valign: Some(EnumAlignVertical::Center),
        text_wrap: Some(true),
        ..Default::default()
    };
    let fmt_left_top = SpecCellFormat {
        align: Some(EnumAlignHorizontal::Left),
        valign: Some(EnumAlignVertical::Top),
        text_wrap: Some(true),
        ..Default::default()
    };
    let fmt_arial_9 = SpecCellFormat {
        font_name: Some("Arial".to_string()),
        font_size: Some(9),
        ..Default::default()
    };

    let header_block = fmt_center.with_(SpecCellFormat {
        bold: Some(true),
        font_color: Some(N_COLOR_HEADER_FONT),
        bg_color: Some(N_COLOR_HEADER_FILL),
        ..Default::default()
    });
    let header_table = header_block.merge(&fmt_arial_9);
    let divider = fmt_center.merge(&fmt_arial_9).with_(SpecCellFormat {
        bold: Some(true),
        bg_color: Some(N_COLOR_DIVIDER_FILL),
        ..Default::default()
    });

    let data_text = fmt_left_top.merge(&fmt_arial_9);
    let data_date = data_text.with_(SpecCellFormat {
        num_format: Some("DD.MM.YYYY".to_string()),
        ..Default::default()
    });
    let data_views = fmt_center.merge(&fmt_arial_9);

    let fmt_summary = SpecCellFormat {
        bold: Some(true),
        bg_color: Some(N_COLOR_SUMMARY_FILL),
        ..Default::default()
    };
    let summary_label = fmt_left_top.merge(&fmt_summary);
    let summary_value = fmt_center.merge(&fmt_summary);
    let summary_percent = summary_value.with_(SpecCellFormat {
        num_format: Some("0%".to_string()),
        ..Default::default()
    });

    let footnote = fmt_left_top.with_(SpecCellFormat {
        font_name: Some("Arial".to_string()),
        font_size: Some(8),
        italic: Some(true),
        ..Default::default()
    });

    SpecReportFormats {
        header_block,
        header_table,
        divider,
        data_text,
        data_date,
        data_views,
        summary_label,
        summary_value,
        summary_percent,
        footnote,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
