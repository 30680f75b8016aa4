/// Spreadsheet persistence boundary.
///
/// Writes each pipeline's table to its named workbook, one row per
/// observation, with the canonical Indonesian column names the dashboard
/// layer loads by. The hourly workbook additionally gets the cosmetic
/// header treatment (bold on a light blue fill, columns sized to their
/// longest value) — styling is not required for correctness, but the
/// column names and row content are.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};

use crate::table::{HourlyTable, RainfallTable};

/// Column order of `Data_Cuaca.xlsx`.
pub const HOURLY_COLUMNS: [&str; 8] = [
    "Kota",
    "Latitude",
    "Longitude",
    "Tipe_Data",
    "Tanggal",
    "Jam",
    "Deskripsi",
    "Peluang_Hujan",
];

/// Column order of `data_hujan_faktual_jabar.xlsx`.
pub const RAINFALL_COLUMNS: [&str; 6] = [
    "Tanggal",
    "Lokasi_KabKota",
    "Latitude",
    "Longitude",
    "Curah_Hujan_mm",
    "Status_Awal",
];

/// Header fill used by the hourly workbook.
const HEADER_FILL: Color = Color::RGB(0x8DB4E2);

/// Writes the hourly observation table with header styling.
///
/// `Peluang_Hujan` is written as the display string ("24%"); the bare
/// integer lives only in the in-memory row.
pub fn write_hourly_workbook(table: &HourlyTable, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold().set_background_color(HEADER_FILL);
    for (col, name) in HOURLY_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    let mut widths: Vec<usize> = HOURLY_COLUMNS.iter().map(|h| h.chars().count()).collect();
    for (i, row) in table.rows().iter().enumerate() {
        let r = i as u32 + 1;
        let chance = format!("{}%", row.rain_chance_percent);
        sheet.write_string(r, 0, &row.city)?;
        sheet.write_number(r, 1, row.latitude)?;
        sheet.write_number(r, 2, row.longitude)?;
        sheet.write_string(r, 3, row.data_type)?;
        sheet.write_string(r, 4, &row.date)?;
        sheet.write_string(r, 5, &row.time)?;
        sheet.write_string(r, 6, &row.description)?;
        sheet.write_string(r, 7, &chance)?;

        let latitude = row.latitude.to_string();
        let longitude = row.longitude.to_string();
        let displayed = [
            row.city.as_str(),
            latitude.as_str(),
            longitude.as_str(),
            row.data_type,
            row.date.as_str(),
            row.time.as_str(),
            row.description.as_str(),
            chance.as_str(),
        ];
        for (col, value) in displayed.iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
        }
    }

    size_columns(sheet, &widths)?;
    workbook.save(path)
}

/// Writes the daily rainfall table. No styling — this artifact is
/// machine-consumed only.
pub fn write_rainfall_workbook(table: &RainfallTable, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in RAINFALL_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.date)?;
        sheet.write_string(r, 1, &row.location)?;
        sheet.write_number(r, 2, row.latitude)?;
        sheet.write_number(r, 3, row.longitude)?;
        sheet.write_number(r, 4, row.rainfall_mm)?;
        sheet.write_string(r, 5, row.severity.to_string())?;
    }

    workbook.save(path)
}

/// Sizes each column to its longest displayed value plus padding.
fn size_columns(sheet: &mut Worksheet, widths: &[usize]) -> Result<(), XlsxError> {
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, (width + 2) as f64)?;
    }
    Ok(())
}
