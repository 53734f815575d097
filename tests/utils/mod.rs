use std::path::PathBuf;

use camelcards::{parse_bids, Standings};

// ============================================================================
// Fixture Utilities
// ============================================================================

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} should be readable: {}", path.display(), e))
}

pub fn standings_for(name: &str) -> Standings {
    let bids = parse_bids(&load_fixture(name)).expect("fixture should parse");
    Standings::from_bids(bids).expect("fixture should rank")
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert the hands in `standings` appear in exactly this order, weakest first
pub fn assert_hand_order(standings: &Standings, expected: &[&str]) {
    let actual: Vec<&str> = standings
        .entries()
        .iter()
        .map(|entry| entry.hand.as_str())
        .collect();
    assert_eq!(actual, expected, "hands should be ranked weakest first");

    for (index, entry) in standings.entries().iter().enumerate() {
        assert_eq!(entry.rank, index + 1, "ranks should be 1-based positions");
        assert_eq!(entry.winnings, entry.rank as u64 * entry.bid);
    }
}
