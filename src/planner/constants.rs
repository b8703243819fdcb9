use std::collections::HashSet;
use std::sync::LazyLock;

/// Days in a generated plan.
pub const DAYS_PER_WEEK: u8 = 7;

/// Display names for day indexes 1..=7.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Number of replacement recipes offered when swapping a meal.
pub const DEFAULT_SWAP_SUGGESTIONS: usize = 5;

/// Minimum Jaro-Winkler similarity for a typed title to count as a match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// Shopping-list rounding
// ─────────────────────────────────────────────────────────────────────────────

/// Below this quantity, round up to the next whole unit.
pub const SMALL_QUANTITY_LIMIT: f64 = 10.0;

/// Up to (and including) this quantity, round up to the next multiple of 5.
pub const MEDIUM_QUANTITY_LIMIT: f64 = 100.0;

pub const MEDIUM_QUANTITY_STEP: f64 = 5.0;

/// Above the medium limit, round up to the next multiple of 10.
pub const LARGE_QUANTITY_STEP: f64 = 10.0;

/// Unit prefixes meaning "to taste" (quanto basta).
pub const TO_TASTE_PREFIXES: [&str; 2] = ["qb", "q.b"];

/// Units counted in whole pieces. Matched after trimming and lowercasing.
pub static DISCRETE_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "uovo", "uova", "spicchio", "spicchi", "fetta", "fette", "pezzo", "pezzi", "egg", "eggs",
        "clove", "cloves", "slice", "slices", "piece", "pieces",
    ]
    .into_iter()
    .collect()
});

/// Display name for a day index, falling back to "Day N".
pub fn day_name(day_of_week: u8) -> String {
    match day_of_week {
        1..=7 => DAY_NAMES[usize::from(day_of_week - 1)].to_string(),
        other => format!("Day {}", other),
    }
}
