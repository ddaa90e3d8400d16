//! Spreadsheet and CSV loading.

use crate::Dataset;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDateTime, Timelike};
use salesdesk_core::{AppError, AppResult};
use std::path::Path;

const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Load the first sheet of a spreadsheet, or a CSV file, into a [`Dataset`].
///
/// The first row supplies the column names.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    tracing::debug!("Loading dataset from {:?}", path);

    let dataset = if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        load_spreadsheet(path)?
    } else if extension == "csv" {
        load_csv(path)?
    } else {
        return Err(AppError::Dataset(format!(
            "Unsupported dataset format {:?}; expected one of xlsx, xlsm, xls, ods, csv",
            path
        )));
    };

    tracing::info!(
        rows = dataset.len(),
        columns = dataset.columns.len(),
        "Loaded dataset"
    );

    Ok(dataset)
}

impl Dataset {
    /// See [`load_dataset`].
    pub fn load(path: &Path) -> AppResult<Self> {
        load_dataset(path)
    }
}

fn load_spreadsheet(path: &Path) -> AppResult<Dataset> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::Dataset(format!("Failed to open {:?}: {}", path, e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Dataset(format!("Workbook {:?} has no sheets", path)))?
        .map_err(|e| AppError::Dataset(format!("Failed to read first sheet of {:?}: {}", path, e)))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());

    let columns = rows.next().unwrap_or_default();
    Ok(Dataset::new(columns, rows.collect()))
}

/// Cell text as pandas would print it: `True`/`False` booleans and dates
/// rather than Excel serial numbers.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => format_datetime(&datetime),
            None => dt.to_string(),
        },
        other => other.to_string(),
    }
}

fn format_datetime(datetime: &NaiveDateTime) -> String {
    let time = datetime.time();
    if time.num_seconds_from_midnight() == 0 && time.nanosecond() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn load_csv(path: &Path) -> AppResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Dataset(format!("Failed to open {:?}: {}", path, e)))?;

    let columns = reader
        .headers()
        .map_err(|e| AppError::Dataset(format!("Failed to read CSV header: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                .map_err(|e| AppError::Dataset(format!("Failed to read CSV row: {}", e)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Dataset::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    /// Minimal xlsx: inline strings, one date-formatted style (numFmtId 14).
    fn write_xlsx(path: &Path, sheet_rows: &str) {
        let parts = [
            (
                "[Content_Types].xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#
                    .to_string(),
            ),
            (
                "_rels/.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
                    .to_string(),
            ),
            (
                "xl/workbook.xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Leads" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#
                    .to_string(),
            ),
            (
                "xl/_rels/workbook.xml.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
                    .to_string(),
            ),
            (
                "xl/styles.xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14" applyNumberFormat="1"/></cellXfs>
</styleSheet>"#
                    .to_string(),
            ),
            (
                "xl/worksheets/sheet1.xml",
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>{}</sheetData>
</worksheet>"#,
                    sheet_rows
                ),
            ),
        ];

        let mut writer = zip::ZipWriter::new(fs::File::create(path).unwrap());
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, body) in parts {
            writer.start_file(name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_load_xlsx_dates_and_booleans() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leads.xlsx");
        write_xlsx(
            &path,
            r#"<row r="1">
<c r="A1" t="inlineStr"><is><t>Company</t></is></c>
<c r="B1" t="inlineStr"><is><t>Founded</t></is></c>
<c r="C1" t="inlineStr"><is><t>Active</t></is></c>
</row>
<row r="2">
<c r="A2" t="inlineStr"><is><t>Acme</t></is></c>
<c r="B2" s="1"><v>45366</v></c>
<c r="C2" t="b"><v>1</v></c>
</row>
<row r="3">
<c r="A3" t="inlineStr"><is><t>Globex</t></is></c>
<c r="B3" s="1"><v>45366.5</v></c>
<c r="C3" t="b"><v>0</v></c>
</row>"#,
        );

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.columns, vec!["Company", "Founded", "Active"]);
        assert_eq!(ds.rows[0], vec!["Acme", "2024-03-15", "True"]);
        assert_eq!(ds.rows[1], vec!["Globex", "2024-03-15 12:00:00", "False"]);

        let preview = ds.preview(5);
        assert!(preview.contains("2024-03-15"));
        assert!(!preview.contains("45366"));
    }

    #[test]
    fn test_cell_text_booleans() {
        assert_eq!(cell_text(&Data::Bool(true)), "True");
        assert_eq!(cell_text(&Data::Bool(false)), "False");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("Acme".to_string())), "Acme");
    }

    #[test]
    fn test_load_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leads.csv");
        fs::write(&path, "Company,Industry,State\nAcme,SaaS,CA\nGlobex,Retail\n").unwrap();

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.columns, vec!["Company", "Industry", "State"]);
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[1], vec!["Globex", "Retail", ""]);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("LEADS.CSV");
        fs::write(&path, "a\n1\n").unwrap();

        assert_eq!(Dataset::load(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        assert!(matches!(load_dataset(&path), Err(AppError::Dataset(_))));
    }

    #[test]
    fn test_missing_spreadsheet() {
        let temp = TempDir::new().unwrap();
        let result = load_dataset(&temp.path().join("absent.xlsx"));
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }
}
