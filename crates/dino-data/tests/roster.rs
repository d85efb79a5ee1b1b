//! Integration tests for loading rosters from disk.
//!
//! These tests exercise the capability-based file loader against real files
//! written under the target directory.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8Path;
use dino_data::{Roster, RosterError, generate_grid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;
use test_support::{ROSTER_FILE, roster_dir, roster_fixture};

const SMALL_ROSTER_JSON: &str = r#"{
    "version": 1,
    "restaurants": [
        {
            "id": "ptero-pub",
            "name": "Ptero Pub",
            "dinoType": "Pteranodon",
            "emoji": "🦅",
            "description": "Rooftop dining with a view.",
            "totalTables": 25,
            "availableTables": 22
        }
    ],
    "customerNames": ["Owen Grady", "Claire Dearing"]
}"#;

#[test]
fn loads_roster_from_file() {
    let dir = roster_fixture("load", SMALL_ROSTER_JSON).expect("roster fixture");

    let roster = Roster::from_file(&dir, Utf8Path::new(ROSTER_FILE)).expect("load roster");

    assert_eq!(roster.restaurants().len(), 1);
    let pub_restaurant = roster.find_restaurant("ptero-pub").expect("restaurant exists");
    assert_eq!(pub_restaurant.reserved_tables(), 3);
    assert_eq!(roster.customer_names(), ["Owen Grady", "Claire Dearing"]);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = roster_dir("missing").expect("fixture dir");

    let result = Roster::from_file(&dir, Utf8Path::new("absent.json"));

    match result {
        Err(RosterError::IoError { path, .. }) => assert_eq!(path, "absent.json"),
        other => panic!("expected IoError, got {other:?}"),
    }
}

#[test]
fn invalid_file_contents_report_parse_error() {
    let dir = roster_fixture("invalid", "{ nope").expect("roster fixture");

    let result = Roster::from_file(&dir, Utf8Path::new(ROSTER_FILE));

    assert!(matches!(result, Err(RosterError::ParseError { .. })));
}

#[rstest]
#[case("trex-bistro", 7)]
#[case("herbivore-haven", 13)]
#[case("stego-steakhouse", 17)]
#[case("raptor-cafe", 5)]
#[case("tricera-tavern", 10)]
fn builtin_restaurants_generate_their_occupancy(#[case] id: &str, #[case] reserved: usize) {
    let roster = Roster::builtin().expect("embedded roster");
    let restaurant = roster.find_restaurant(id).expect("restaurant exists");
    let mut rng = ChaCha8Rng::seed_from_u64(2026);

    let grid = generate_grid(&mut rng, roster.customer_names(), restaurant.available_tables())
        .expect("generation succeeds");

    assert_eq!(grid.reserved_count(), reserved);
    assert_eq!(grid.available_count(), restaurant.available_tables());
}
