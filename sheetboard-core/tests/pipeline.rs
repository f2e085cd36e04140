//! End-to-end pipeline tests: CSV text → normalize → filter → metrics,
//! plus cache behavior against a stub source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use sheetboard_core::data::{
    load_sheet, normalize, parse_csv, DataError, DataSourceError, RawTable, SchemaError,
    SheetCache, SheetSource,
};
use sheetboard_core::filter::{self, FilterState};

const SHEET_CSV: &str = "\
Timestamp ,County,Name of the Participant,Verified Phone Number,Verified ID Number,Geo-Coordinates
1/1/2024 09:15:00,Nairobi,Jane Wanjiku,+254700000001,11111111,\"-1.2921, 36.8219\"
1/5/2024 14:30:00,Kisumu,John Otieno,+254700000002,22222222,\"-0.0917, 34.7680\"
not-a-date,Nairobi,Mary Akinyi,+254700000003,33333333,\"-1.3032, 36.7073\"
1/3/2024 08:00:00,,Peter Mwangi,+254700000004,44444444,\"-0.4167, 36.9500\"
";

/// In-memory source that counts how many times it is fetched.
struct StubSource {
    csv: &'static str,
    fetches: AtomicUsize,
}

impl StubSource {
    fn new(csv: &'static str) -> Self {
        Self {
            csv,
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SheetSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    fn fetch(&self) -> Result<RawTable, DataSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        parse_csv(self.csv)
    }
}

/// Source that always fails, for error-propagation tests.
struct FailingSource;

impl SheetSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn fetch(&self) -> Result<RawTable, DataSourceError> {
        Err(DataSourceError::Status {
            status: 503,
            url: "https://example.invalid/sheet".into(),
        })
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn csv_to_metrics_with_default_filter() {
    let source = StubSource::new(SHEET_CSV);
    let table = load_sheet(&source).unwrap();
    assert_eq!(table.count(), 4);

    let state = FilterState::from_table(&table).unwrap();
    assert_eq!(state.start_date, date("2024-01-01"));
    assert_eq!(state.end_date, date("2024-01-05"));

    let filtered = filter::apply(&table, &state);
    // The unparseable-timestamp row and the empty-county row drop out.
    assert_eq!(filtered.count(), 2);
    assert_eq!(filtered.distinct_county_count(), 2);
}

#[test]
fn narrowed_filter_keeps_single_row() {
    let source = StubSource::new(SHEET_CSV);
    let table = load_sheet(&source).unwrap();

    let state = FilterState {
        start_date: date("2024-01-01"),
        end_date: date("2024-01-03"),
        counties: ["Nairobi".to_string()].into_iter().collect(),
    };
    let filtered = filter::apply(&table, &state);
    assert_eq!(filtered.count(), 1);
    assert_eq!(filtered.distinct_county_count(), 1);
    assert_eq!(filtered.rows()[0].participant_name, "Jane Wanjiku");
}

#[test]
fn filter_apply_is_idempotent() {
    let source = StubSource::new(SHEET_CSV);
    let table = load_sheet(&source).unwrap();
    let state = FilterState::from_table(&table).unwrap();

    let once = filter::apply(&table, &state);
    let twice = filter::apply(&once, &state);
    assert_eq!(once, twice);
}

#[test]
fn cache_serves_within_ttl_without_refetch() {
    let source = StubSource::new(SHEET_CSV);
    let mut cache = SheetCache::new(Duration::from_secs(3600));

    let first = cache.get_or_load(|| load_sheet(&source)).unwrap().clone();
    let second = cache.get_or_load(|| load_sheet(&source)).unwrap().clone();

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(first, second);
}

#[test]
fn cache_refetches_after_expiry() {
    let source = StubSource::new(SHEET_CSV);
    let mut cache = SheetCache::new(Duration::ZERO);

    cache.get_or_load(|| load_sheet(&source)).unwrap();
    cache.get_or_load(|| load_sheet(&source)).unwrap();

    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn invalidate_always_refetches() {
    let source = StubSource::new(SHEET_CSV);
    let mut cache = SheetCache::new(Duration::from_secs(3600));

    cache.get_or_load(|| load_sheet(&source)).unwrap();
    cache.invalidate();
    cache.get_or_load(|| load_sheet(&source)).unwrap();

    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn source_error_surfaces_unretried() {
    let mut cache = SheetCache::new(Duration::from_secs(3600));
    let err = cache
        .get_or_load(|| load_sheet(&FailingSource))
        .unwrap_err();
    assert!(matches!(
        err,
        DataError::Source(DataSourceError::Status { status: 503, .. })
    ));
}

#[test]
fn missing_timestamp_column_fails_normalization() {
    let raw = parse_csv("County,Name of the Participant\nNairobi,Jane Wanjiku\n").unwrap();
    let err = normalize(raw).unwrap_err();
    assert!(matches!(err, SchemaError::MissingColumn("timestamp")));
}

#[test]
fn surplus_columns_survive_header_normalization() {
    let raw = parse_csv("Timestamp, Enumerator Notes \n1/1/2024 09:00:00,ok\n").unwrap();
    let renamed = sheetboard_core::data::canonical_headers(raw);
    assert_eq!(renamed.headers, vec!["timestamp", "Enumerator Notes"]);
}
