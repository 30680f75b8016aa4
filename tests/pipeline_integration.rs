/// Integration tests for the full ingest pipelines.
///
/// These tests verify, without touching the live sources:
/// 1. Synthetic hourly pages flow through fetch → parse → accumulate
/// 2. The archive loop survives per-location HTTP failures
/// 3. Written workbooks reload with identical schema and row content
///
/// The archive tests serve canned responses from a loopback listener so
/// the real blocking client and URL construction are exercised.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;

use chrono::NaiveDate;

use hujanmon_service::config::ArchiveConfig;
use hujanmon_service::export;
use hujanmon_service::ingest::hourly::HourlyPageSource;
use hujanmon_service::locations::Location;
use hujanmon_service::model::{IngestError, Severity, HOURLY_DATA_TYPE};
use hujanmon_service::pipeline;
use hujanmon_service::table::{HourlyTable, RainfallTable};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

struct CannedPages {
    pages: HashMap<&'static str, String>,
}

impl HourlyPageSource for CannedPages {
    fn fetch_page(&mut self, slug: &str) -> Result<String, IngestError> {
        self.pages
            .get(slug)
            .cloned()
            .ok_or_else(|| IngestError::Request("timed out".to_string()))
    }
}

fn city(name: &'static str, slug: &'static str, lat: f64, lon: f64) -> Location {
    Location { name, slug: Some(slug), latitude: lat, longitude: lon }
}

fn jabar(name: &'static str, lat: f64, lon: f64) -> Location {
    Location { name, slug: None, latitude: lat, longitude: lon }
}

fn fallback() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()
}

/// A synthetic forecast page: one date header "Mon, 5 May", a 24% row,
/// and a row whose percentage sits in the last of its 10 value cells
/// while its description comes from an icon title.
fn sample_forecast_page() -> String {
    let filler = "<td></td>".repeat(8);
    format!(
        concat!(
            "<html><body><table id=\"wt-hbh\"><tbody>",
            "<tr><th colspan=\"4\">Mon, 5 May</th></tr>",
            "<tr><th>14:00</th><td>Cloudy</td><td>24%</td>{filler}</tr>",
            "<tr><th>15:00</th><td><img src=\"rain.png\" title=\"Rain\"/></td>{filler}<td>60%</td></tr>",
            "</tbody></table></body></html>",
        ),
        filler = filler
    )
}

/// Serves one canned (status, body) reply per expected request, in
/// order, then exits. `Connection: close` keeps the blocking client
/// from reusing a socket the stub no longer reads.
fn spawn_archive_stub(replies: Vec<(u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");

    std::thread::spawn(move || {
        for (status, body) in replies {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut line = String::new();
            let _ = reader.read_line(&mut line);
            loop {
                let mut header = String::new();
                match reader.read_line(&mut header) {
                    Ok(0) => break,
                    Ok(_) if header == "\r\n" => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
            let reason = if status == 200 { "OK" } else { "Internal Server Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn stub_archive_config(base_url: String) -> ArchiveConfig {
    ArchiveConfig {
        base_url,
        timeout_secs: 5,
        window_days: 30,
        request_delay_ms: 0,
        timezone: "Asia/Jakarta".to_string(),
        output_path: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Pipeline A: synthetic page end to end
// ---------------------------------------------------------------------------

#[test]
fn test_hourly_pipeline_extracts_sample_page() {
    let cities = [city("Jakarta", "indonesia/jakarta", -6.2088, 106.8456)];
    let mut source = CannedPages {
        pages: HashMap::from([("indonesia/jakarta", sample_forecast_page())]),
    };

    let table = pipeline::run_hourly(&mut source, &cities, 2025, fallback());

    assert_eq!(table.len(), 2);
    let rows = table.rows();
    assert_eq!(rows[0].date, "2025-05-05");
    assert_eq!(rows[0].time, "14:00");
    assert_eq!(rows[0].description, "Cloudy");
    assert_eq!(rows[0].rain_chance_percent, 24);
    assert_eq!(rows[1].date, "2025-05-05");
    assert_eq!(rows[1].description, "Rain");
    assert_eq!(rows[1].rain_chance_percent, 60);
    for row in rows {
        assert_eq!(row.city, "Jakarta");
        assert_eq!(row.data_type, HOURLY_DATA_TYPE);
        assert_eq!(row.time.len(), 5);
        assert!(row.rain_chance_percent <= 100);
    }
}

#[test]
fn test_hourly_pipeline_failure_isolation_preserves_order() {
    let cities = [
        city("Medan", "indonesia/medan", 3.5952, 98.6722),
        city("Ghost Town", "indonesia/ghost-town", 0.0, 100.0),
        city("Jakarta", "indonesia/jakarta", -6.2088, 106.8456),
    ];
    let mut source = CannedPages {
        pages: HashMap::from([
            ("indonesia/medan", sample_forecast_page()),
            ("indonesia/jakarta", sample_forecast_page()),
        ]),
    };

    let table = pipeline::run_hourly(&mut source, &cities, 2025, fallback());

    let cities_seen: Vec<_> = table.rows().iter().map(|r| r.city.as_str()).collect();
    assert_eq!(cities_seen, ["Medan", "Medan", "Jakarta", "Jakarta"]);
}

// ---------------------------------------------------------------------------
// Pipeline B: archive loop against the loopback stub
// ---------------------------------------------------------------------------

#[test]
fn test_archive_pipeline_classifies_fetched_series() {
    let body = r#"{"daily": {"time": ["2025-05-01", "2025-05-02"], "rain_sum": [null, 75.0]}}"#;
    let base_url = spawn_archive_stub(vec![(200, body.to_string())]);
    let config = stub_archive_config(base_url);

    let client = reqwest::blocking::Client::new();
    let locations = [jabar("Bandung (Kota)", -6.9175, 107.6191)];
    let table = pipeline::run_archive(
        &client,
        &config,
        &locations,
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
    );

    assert_eq!(table.len(), 2);
    let rows = table.rows();
    assert_eq!(rows[0].date, "2025-05-01");
    assert_eq!(rows[0].rainfall_mm, 0.0);
    assert_eq!(rows[0].severity, Severity::Aman);
    assert_eq!(rows[1].date, "2025-05-02");
    assert_eq!(rows[1].rainfall_mm, 75.0);
    assert_eq!(rows[1].severity, Severity::Bahaya);
}

#[test]
fn test_archive_pipeline_isolates_http_failures() {
    let good = r#"{"daily": {"time": ["2025-05-01"], "rain_sum": [120.5]}}"#;
    let base_url = spawn_archive_stub(vec![
        (200, good.to_string()),
        (500, "{}".to_string()),
        (200, good.to_string()),
    ]);
    let config = stub_archive_config(base_url);

    let client = reqwest::blocking::Client::new();
    let locations = [
        jabar("Bogor (Kota)", -6.5971, 106.8060),
        jabar("Depok", -6.4025, 106.7942),
        jabar("Cimahi", -6.8715, 107.5744),
    ];
    let table = pipeline::run_archive(
        &client,
        &config,
        &locations,
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
    );

    let locations_seen: Vec<_> = table.rows().iter().map(|r| r.location.as_str()).collect();
    assert_eq!(locations_seen, ["Bogor (Kota)", "Cimahi"]);
    assert!(table.rows().iter().all(|r| r.severity == Severity::BahayaEkstrem));
}

// ---------------------------------------------------------------------------
// Workbook round-trips
// ---------------------------------------------------------------------------

#[test]
fn test_hourly_workbook_round_trip() {
    use calamine::{open_workbook, Data, Reader, Xlsx};

    let cities = [city("Jakarta", "indonesia/jakarta", -6.2088, 106.8456)];
    let mut source = CannedPages {
        pages: HashMap::from([("indonesia/jakarta", sample_forecast_page())]),
    };
    let table = pipeline::run_hourly(&mut source, &cities, 2025, fallback());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Data_Cuaca.xlsx");
    export::write_hourly_workbook(&table, &path).expect("write workbook");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("reopen workbook");
    let range = workbook.worksheet_range("Sheet1").expect("sheet present");

    // Header row carries the canonical column names in order.
    let header: Vec<String> = range
        .rows()
        .next()
        .expect("header row")
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(header, export::HOURLY_COLUMNS);

    // One spreadsheet row per observation, same values.
    assert_eq!(range.height(), table.len() + 1);
    let first = &range.rows().nth(1).expect("first data row");
    assert_eq!(first[0], Data::String("Jakarta".to_string()));
    assert_eq!(first[1], Data::Float(-6.2088));
    assert_eq!(first[3], Data::String(HOURLY_DATA_TYPE.to_string()));
    assert_eq!(first[4], Data::String("2025-05-05".to_string()));
    assert_eq!(first[5], Data::String("14:00".to_string()));
    assert_eq!(first[7], Data::String("24%".to_string()));

    let second = &range.rows().nth(2).expect("second data row");
    assert_eq!(second[6], Data::String("Rain".to_string()));
    assert_eq!(second[7], Data::String("60%".to_string()));
}

#[test]
fn test_rainfall_workbook_round_trip() {
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use hujanmon_service::model::DailyRainfall;

    let mut table = RainfallTable::new();
    table.append(vec![
        DailyRainfall {
            date: "2025-05-01".to_string(),
            location: "Bandung (Kota)".to_string(),
            latitude: -6.9175,
            longitude: 107.6191,
            rainfall_mm: 0.0,
            severity: Severity::Aman,
        },
        DailyRainfall {
            date: "2025-05-02".to_string(),
            location: "Bandung (Kota)".to_string(),
            latitude: -6.9175,
            longitude: 107.6191,
            rainfall_mm: 102.3,
            severity: Severity::BahayaEkstrem,
        },
    ]);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data_hujan_faktual_jabar.xlsx");
    export::write_rainfall_workbook(&table, &path).expect("write workbook");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("reopen workbook");
    let range = workbook.worksheet_range("Sheet1").expect("sheet present");

    let header: Vec<String> = range
        .rows()
        .next()
        .expect("header row")
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(header, export::RAINFALL_COLUMNS);

    assert_eq!(range.height(), 3);
    let first = &range.rows().nth(1).expect("first data row");
    assert_eq!(first[0], Data::String("2025-05-01".to_string()));
    assert_eq!(first[1], Data::String("Bandung (Kota)".to_string()));
    assert_eq!(first[4], Data::Float(0.0));
    assert_eq!(first[5], Data::String("Aman".to_string()));

    let second = &range.rows().nth(2).expect("second data row");
    assert_eq!(second[4], Data::Float(102.3));
    assert_eq!(second[5], Data::String("Bahaya Ekstrem".to_string()));
}

#[test]
fn test_empty_hourly_table_still_produces_header_only_workbook() {
    // The binaries refuse to persist an empty table; this guards the
    // writer itself against panicking if that policy ever changes.
    use calamine::{open_workbook, Reader, Xlsx};

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.xlsx");
    export::write_hourly_workbook(&HourlyTable::new(), &path).expect("write workbook");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("reopen workbook");
    let range = workbook.worksheet_range("Sheet1").expect("sheet present");
    assert_eq!(range.height(), 1);
}
