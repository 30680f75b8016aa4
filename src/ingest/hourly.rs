/// Hourly forecast page client and table extractor.
///
/// Fetches the rendered hourly forecast page for one city and walks the
/// forecast table: date-header rows (a `th[colspan]` cell carrying a
/// comma-separated date string) set the date context for the data rows
/// (an hour label plus one cell per forecast column) that follow them.
///
/// The parsing functions are pure and take the page source as a string,
/// so they are testable without a live page. Fallback behavior is
/// intentional, not exceptional: an unparseable header retains the
/// previous date context, and a row with no percentage yields 0.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};

use crate::locations::Location;
use crate::model::{HourlyObservation, IngestError, HOURLY_DATA_TYPE};

/// DOM id of the hour-by-hour forecast table.
pub const TABLE_ID: &str = "wt-hbh";

/// Data rows must have more than this many value cells. Guards against
/// summary and spacer rows that share the same markup.
const MIN_DATA_CELLS: usize = 8;

static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)%").unwrap());

// ---------------------------------------------------------------------------
// Page source boundary
// ---------------------------------------------------------------------------

/// Source of rendered hourly forecast pages.
///
/// This is the driver boundary: one session is acquired per run, reused
/// sequentially across all cities, and released when the value is dropped.
/// Implementations must bound each fetch (the production source uses the
/// client timeout) and report failure per city rather than panicking.
pub trait HourlyPageSource {
    /// Fetches the rendered page for one city slug, or signals failure.
    fn fetch_page(&mut self, slug: &str) -> Result<String, IngestError>;
}

/// Production page source: plain bounded GET over one blocking client.
///
/// The forecast table is server-rendered, so a driver-rendered page and
/// the raw response body contain the same rows. The element-presence wait
/// of the reference design collapses into the request timeout plus a
/// table-marker check on the body.
pub struct HttpPageSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpPageSource {
    /// Acquires the session. `timeout` bounds every page fetch; the
    /// default configuration uses 10 seconds.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IngestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
            )
            .build()
            .map_err(|e| IngestError::Request(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }
}

impl HourlyPageSource for HttpPageSource {
    fn fetch_page(&mut self, slug: &str) -> Result<String, IngestError> {
        let url = build_hourly_url(&self.base_url, slug);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| IngestError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(IngestError::HttpStatus(response.status().as_u16()));
        }
        let body = response.text().map_err(|e| IngestError::Request(e.to_string()))?;
        if !body.contains(TABLE_ID) {
            return Err(IngestError::TableNotFound);
        }
        Ok(body)
    }
}

/// Builds the hourly forecast page URL for a city slug.
pub fn build_hourly_url(base_url: &str, slug: &str) -> String {
    format!("{}/weather/{}/hourly", base_url, slug)
}

// ---------------------------------------------------------------------------
// Pure extraction functions
// ---------------------------------------------------------------------------

/// Parses a date-header cell like "Tue, 5 May" into a calendar date.
///
/// The page omits the year, so the caller supplies the run's year
/// context. Only the substring after the first comma is used; headers
/// without a comma or with an unparseable date yield `None`, and the
/// caller retains the previous date context.
pub fn parse_date_header(text: &str, year: i32) -> Option<NaiveDate> {
    let (_, date_part) = text.split_once(',')?;
    NaiveDate::parse_from_str(&format!("{} {}", date_part.trim(), year), "%d %B %Y").ok()
}

/// Scans value cells for the first integer immediately followed by '%'.
///
/// Cells carry mixed text ("24%" but also "24% 0.5 mm"); the first match
/// across all cells wins. Returns `None` when no cell carries a
/// percentage — callers map that to 0, which is indistinguishable in the
/// output from a genuinely reported 0%. Values above 100 in the markup
/// are clamped so the result is always a valid percentage.
pub fn extract_percentage<'a, I>(cells: I) -> Option<u8>
where
    I: IntoIterator<Item = &'a str>,
{
    for cell in cells {
        if let Some(caps) = PERCENT_RE.captures(cell) {
            let value: u32 = caps[1].parse().unwrap_or(100);
            return Some(value.min(100) as u8);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Table walk
// ---------------------------------------------------------------------------

/// Extracts all qualifying data rows from an hourly forecast page.
///
/// `fallback_date` is the date context in force before the first header
/// row (normally the run date); `year` completes the year-less header
/// dates. Returns `TableNotFound` when the page has no forecast table.
pub fn parse_hourly_table(
    html: &str,
    location: &Location,
    year: i32,
    fallback_date: NaiveDate,
) -> Result<Vec<HourlyObservation>, IngestError> {
    let table_sel = Selector::parse(&format!("table#{}", TABLE_ID)).unwrap();
    let row_sel = Selector::parse("tbody tr").unwrap();
    let header_cell_sel = Selector::parse("th[colspan]").unwrap();
    let hour_cell_sel = Selector::parse("th").unwrap();
    let value_cell_sel = Selector::parse("td").unwrap();
    let icon_sel = Selector::parse("img").unwrap();

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or(IngestError::TableNotFound)?;

    let mut rows = Vec::new();
    let mut current_date = fallback_date;

    for row in table.select(&row_sel) {
        // Date-header row: update the context and move on.
        if let Some(header) = row.select(&header_cell_sel).next() {
            let text = cell_text(&header);
            if let Some(date) = parse_date_header(&text, year) {
                current_date = date;
            }
            continue;
        }

        let cells: Vec<_> = row.select(&value_cell_sel).collect();
        if cells.len() <= MIN_DATA_CELLS {
            continue;
        }
        let Some(hour_cell) = row.select(&hour_cell_sel).next() else {
            continue;
        };

        let time: String = cell_text(&hour_cell).chars().take(5).collect();

        let mut description = cell_text(&cells[0]);
        if description.is_empty() {
            description = cells[0]
                .select(&icon_sel)
                .next()
                .and_then(|img| img.value().attr("title"))
                .unwrap_or("N/A")
                .to_string();
        }

        let cell_texts: Vec<String> = cells.iter().map(cell_text).collect();
        let rain_chance_percent =
            extract_percentage(cell_texts.iter().map(String::as_str)).unwrap_or(0);

        rows.push(HourlyObservation {
            city: location.name.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            data_type: HOURLY_DATA_TYPE,
            date: current_date.format("%Y-%m-%d").to_string(),
            time,
            description,
            rain_chance_percent,
        });
    }

    Ok(rows)
}

fn cell_text(element: &scraper::ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
