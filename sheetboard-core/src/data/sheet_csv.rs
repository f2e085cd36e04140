//! Google Sheets CSV export source.
//!
//! Fetches a published, world-readable sheet through the gviz CSV export
//! endpoint. No auth, no retries, no backoff — one blocking GET per call.

use std::time::Duration;

use super::provider::{DataSourceError, RawTable, SheetSource};

/// Sheet id of the field-submission workbook this dashboard was built for.
pub const DEFAULT_SHEET_ID: &str = "1Zt-TlSOyr-M_uISbp1Y9aomR_pTbHmdUwMwGo7FBUpM";

/// CSV export endpoint for a published sheet.
pub fn export_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv")
}

/// The production `SheetSource`: blocking HTTP GET + CSV parse.
pub struct CsvExportSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl CsvExportSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn for_sheet(sheet_id: &str) -> Self {
        Self::new(export_url(sheet_id))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for CsvExportSource {
    fn default() -> Self {
        Self::for_sheet(DEFAULT_SHEET_ID)
    }
}

impl SheetSource for CsvExportSource {
    fn name(&self) -> &str {
        "google-sheets-csv"
    }

    fn fetch(&self) -> Result<RawTable, DataSourceError> {
        let resp = self.client.get(&self.url).send()?;
        if !resp.status().is_success() {
            return Err(DataSourceError::Status {
                status: resp.status().as_u16(),
                url: self.url.clone(),
            });
        }
        let body = resp.text()?;
        parse_csv(&body)
    }
}

/// Parse CSV text into a `RawTable`.
///
/// Rows shorter than the header are padded with empty cells; longer rows
/// keep their surplus cells (ignored downstream). Row order is file order.
pub fn parse_csv(text: &str) -> Result<RawTable, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(str::to_owned).collect();
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_embeds_sheet_id() {
        let url = export_url("abc123");
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?tqx=out:csv"
        );
    }

    #[test]
    fn parse_preserves_headers_and_row_order() {
        let table = parse_csv("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn parse_pads_short_rows() {
        let table = parse_csv("a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn parse_keeps_quoted_commas() {
        let table = parse_csv("Name,County\n\"Otieno, John\",Kisumu\n").unwrap();
        assert_eq!(table.rows[0][0], "Otieno, John");
    }

    #[test]
    fn empty_body_yields_empty_table() {
        let table = parse_csv("").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }
}
