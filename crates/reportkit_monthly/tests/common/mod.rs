//! Shared fixture builders for the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Format, Workbook};

/// Serial of 2025-03-01.
pub const N_SERIAL_DATE: f64 = 45717.0;
/// Views written into the rows outside the default regions.
pub const N_VIEWS_JUNK: f64 = 999_999.0;

const N_COL_PLATFORM: u16 = 1;
const N_COL_TOPIC: u16 = 3;
const N_COL_TEXT: u16 = 4;
const N_COL_DATE: u16 = 6;
const N_COL_NICK: u16 = 7;
const N_COL_VIEWS: u16 = 10;
const N_COL_POST_TYPE: u16 = 13;
const N_COL_ENGAGEMENT: u16 = 16;

pub enum Views {
    Number(f64),
    Text(&'static str),
}

/// Write a month export workbook at `path`.
///
/// - rows 6..15: views 100
/// - row 15: `" 12 345 "`, row 16: `"Нет данных"`, row 17: 0, rows 18..28: 10.5
/// - rows 31..51: views `"1,234"`, engagement `"есть"` on the first five rows
/// - rows 28..31 and 51..61: junk rows with large views and `"есть"`
pub fn write_month_export(path: &Path, sheet_month: &str) {
    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .set_name("Итоги")
        .unwrap()
        .write_string(0, 0, "сводка")
        .unwrap();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_month).unwrap();
    let fmt_date = Format::new().set_num_format("dd.mm.yyyy");

    worksheet.write_string(0, 0, "Мониторинг").unwrap();
    for row in 6..15 {
        write_source_row(worksheet, &fmt_date, row, Views::Number(100.0), "нет");
    }
    write_source_row(worksheet, &fmt_date, 15, Views::Text(" 12 345 "), "нет");
    write_source_row(worksheet, &fmt_date, 16, Views::Text("Нет данных"), "нет");
    write_source_row(worksheet, &fmt_date, 17, Views::Number(0.0), "нет");
    for row in 18..28 {
        write_source_row(worksheet, &fmt_date, row, Views::Number(10.5), "нет");
    }
    for row in 31..51 {
        let c_engagement = if row < 36 { "есть" } else { "нет" };
        write_source_row(worksheet, &fmt_date, row, Views::Text("1,234"), c_engagement);
    }
    for row in (28..31).chain(51..61) {
        write_source_row(
            worksheet,
            &fmt_date,
            row,
            Views::Number(N_VIEWS_JUNK),
            "есть",
        );
    }

    workbook.save(path).unwrap();
}

fn write_source_row(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    fmt_date: &Format,
    row: u32,
    views: Views,
    engagement: &str,
) {
    worksheet
        .write_string(row, N_COL_PLATFORM, format!("forum-{row}"))
        .unwrap();
    worksheet
        .write_string(row, N_COL_TOPIC, format!("topic-{row}"))
        .unwrap();
    worksheet
        .write_string(row, N_COL_TEXT, format!("text-{row}"))
        .unwrap();
    worksheet
        .write_number_with_format(row, N_COL_DATE, N_SERIAL_DATE, fmt_date)
        .unwrap();
    worksheet
        .write_string(row, N_COL_NICK, format!("nick-{row}"))
        .unwrap();
    match views {
        Views::Number(n) => worksheet.write_number(row, N_COL_VIEWS, n).unwrap(),
        Views::Text(c) => worksheet.write_string(row, N_COL_VIEWS, c).unwrap(),
    };
    worksheet
        .write_string(row, N_COL_POST_TYPE, "comment")
        .unwrap();
    worksheet
        .write_string(row, N_COL_ENGAGEMENT, engagement)
        .unwrap();
}

/// Write a workbook with the given (empty-ish) sheets.
pub fn write_workbook_with_sheets(path: &Path, sheet_names: &[&str]) {
    let mut workbook = Workbook::new();
    for name in sheet_names {
        workbook
            .add_worksheet()
            .set_name(*name)
            .unwrap()
            .write_string(0, 0, "x")
            .unwrap();
    }
    workbook.save(path).unwrap();
}

/// Open a written report and return its sheet names and first sheet.
pub fn read_report(path: &Path) -> (Vec<String>, Range<Data>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let l_names = workbook.sheet_names();
    let range = workbook.worksheet_range(&l_names[0]).unwrap();
    (l_names, range)
}

/// Merged regions of the first report sheet as `((row, col), (row, col))`, sorted.
pub fn read_report_merges(path: &Path) -> Vec<((u32, u32), (u32, u32))> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let c_sheet = workbook.sheet_names()[0].clone();
    let mut l_merges: Vec<_> = workbook
        .worksheet_merge_cells(&c_sheet)
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|dims| (dims.start, dims.end))
        .collect();
    l_merges.sort_unstable();
    l_merges
}

pub fn text_at(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => panic!("expected text at ({row}, {col}), got {other:?}"),
    }
}

pub fn number_at(range: &Range<Data>, row: u32, col: u32) -> f64 {
    match range.get_value((row, col)) {
        Some(Data::Float(n)) => *n,
        Some(Data::Int(n)) => *n as f64,
        Some(Data::DateTime(dt)) => dt.as_f64(),
        other => panic!("expected number at ({row}, {col}), got {other:?}"),
    }
}

pub fn path_in(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
