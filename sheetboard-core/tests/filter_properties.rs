//! Property tests for the filter engine.
//!
//! Uses proptest to verify:
//! 1. Idempotence — applying the same filter twice equals applying it once
//! 2. Output ⊆ input — filtering never invents or reorders rows
//! 3. Predicate soundness — every kept row is inside the range and selection
//! 4. Null rows never survive — no kept row has a null timestamp or county

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use sheetboard_core::domain::{Submission, Table};
use sheetboard_core::filter::{self, FilterState};

const COUNTIES: &[&str] = &["Nairobi", "Kisumu", "Nakuru", "Mombasa", "Garissa"];

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_submission() -> impl Strategy<Value = Submission> {
    (
        proptest::option::weighted(0.85, arb_date()),
        proptest::option::weighted(0.85, proptest::sample::select(COUNTIES)),
        0u32..86_400,
    )
        .prop_map(|(date, county, second)| Submission {
            timestamp: date.and_then(|d| {
                d.and_hms_opt(second / 3600, (second / 60) % 60, second % 60)
            }),
            county: county.map(str::to_owned),
            participant_name: "participant".into(),
            phone_number: String::new(),
            id_number: String::new(),
            geo_coordinates: String::new(),
        })
}

fn arb_table() -> impl Strategy<Value = Table> {
    proptest::collection::vec(arb_submission(), 0..40).prop_map(Table::new)
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        arb_date(),
        arb_date(),
        proptest::collection::btree_set(proptest::sample::select(COUNTIES), 0..=COUNTIES.len()),
    )
        .prop_map(|(a, b, counties)| FilterState {
            start_date: a.min(b),
            end_date: a.max(b),
            counties: counties.into_iter().map(str::to_owned).collect(),
        })
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn apply_is_idempotent(table in arb_table(), state in arb_state()) {
        let once = filter::apply(&table, &state);
        let twice = filter::apply(&once, &state);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_ordered_subsequence_of_input(table in arb_table(), state in arb_state()) {
        let filtered = filter::apply(&table, &state);
        prop_assert!(filtered.count() <= table.count());

        // Every output row appears in the input, in the same relative order.
        let mut cursor = 0;
        for row in filtered.rows() {
            let found = table.rows()[cursor..].iter().position(|r| r == row);
            prop_assert!(found.is_some());
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn kept_rows_satisfy_the_predicate(table in arb_table(), state in arb_state()) {
        for row in filter::apply(&table, &state).rows() {
            let ts = row.timestamp.expect("kept row must have a timestamp");
            prop_assert!(ts.date() >= state.start_date);
            prop_assert!(ts.date() <= state.end_date);
            let county = row.county.as_deref().expect("kept row must have a county");
            prop_assert!(state.counties.contains(county));
        }
    }

    #[test]
    fn default_selection_round_trips_county_count(table in arb_table()) {
        prop_assume!(table.timestamp_bounds().is_some());
        let state = FilterState::from_table(&table).expect("bounds exist");
        // Defaulted to "all observed counties": the selection size equals
        // the unfiltered distinct county count.
        prop_assert_eq!(state.counties.len(), table.distinct_county_count());

        let selected: BTreeSet<&str> = state.counties.iter().map(String::as_str).collect();
        prop_assert_eq!(selected, table.distinct_counties());
    }
}
