// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{
    DATE_FORMAT, ELAPSED_FORMAT, TIME_OF_DAY_FORMAT, date_to_excel_serial,
    duration_to_excel_days, time_to_excel_fraction,
};
use crate::export::model::{get_headers, summary_to_row};
use crate::export::{SummarySink, notify_export_success};
use crate::models::day_summary::DailySummary;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// Workbook with a single styled summary sheet.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>, sheet_name: &str) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.to_string(),
        }
    }
}

impl SummarySink for XlsxSink {
    fn write_summaries(&mut self, summaries: &[DailySummary]) -> AppResult<()> {
        export_xlsx(summaries, &self.path, &self.sheet_name)
    }
}

/// One cell value, already converted for Excel.
enum Cell<'a> {
    Text(&'a str),
    Serial(f64, &'static str),
}

fn export_xlsx(summaries: &[DailySummary], path: &Path, sheet_name: &str) -> AppResult<()> {
    info(format!("Writing XLSX report: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, s) in summaries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let cells = [
            Cell::Text(&s.user),
            Cell::Serial(date_to_excel_serial(s.day), DATE_FORMAT),
            Cell::Serial(time_to_excel_fraction(s.login_time), TIME_OF_DAY_FORMAT),
            Cell::Serial(time_to_excel_fraction(s.logout_time), TIME_OF_DAY_FORMAT),
            Cell::Serial(duration_to_excel_days(s.total_duration), ELAPSED_FORMAT),
            Cell::Serial(duration_to_excel_days(s.in_floor_duration), ELAPSED_FORMAT),
            Cell::Serial(duration_to_excel_days(s.break_duration), ELAPSED_FORMAT),
        ];

        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell, band)?;
        }

        // widths follow the rendered text of each cell
        for (col, text) in summary_to_row(s).iter().enumerate() {
            col_widths[col] = col_widths[col].max(text.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell<'_>,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, *s, &base)
                .map_err(to_export_error)?;
        }
        Cell::Serial(value, num_format) => {
            let fmt = base.set_num_format(*num_format).set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *value, &fmt)
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
