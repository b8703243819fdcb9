use crate::planner::constants::{
    DISCRETE_UNITS, LARGE_QUANTITY_STEP, MEDIUM_QUANTITY_LIMIT, MEDIUM_QUANTITY_STEP,
    SMALL_QUANTITY_LIMIT, TO_TASTE_PREFIXES,
};

/// Whether a unit is counted in whole pieces or means "to taste".
pub fn is_whole_unit(unit: &str) -> bool {
    let unit = unit.trim().to_lowercase();
    DISCRETE_UNITS.contains(unit.as_str())
        || TO_TASTE_PREFIXES
            .iter()
            .any(|prefix| unit.starts_with(prefix))
}

/// Round a shopping quantity up to something practical to buy.
///
/// Never rounds down:
/// - piece and to-taste units: next whole unit
/// - below 10: next whole unit
/// - up to 100: next multiple of 5
/// - above 100: next multiple of 10
pub fn smart_round(quantity: f64, unit: &str) -> f64 {
    if is_whole_unit(unit) || quantity < SMALL_QUANTITY_LIMIT {
        return quantity.ceil();
    }

    if quantity <= MEDIUM_QUANTITY_LIMIT {
        return (quantity / MEDIUM_QUANTITY_STEP).ceil() * MEDIUM_QUANTITY_STEP;
    }

    (quantity / LARGE_QUANTITY_STEP).ceil() * LARGE_QUANTITY_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_units_round_to_whole() {
        assert_eq!(smart_round(3.4, "uova"), 4.0);
        assert_eq!(smart_round(12.2, "pezzi"), 13.0);
        assert_eq!(smart_round(1.5, " Cloves "), 2.0);
    }

    #[test]
    fn test_to_taste_units() {
        assert_eq!(smart_round(0.3, "qb"), 1.0);
        assert_eq!(smart_round(23.5, "q.b."), 24.0);
        assert_eq!(smart_round(2.0, "QB"), 2.0);
    }

    #[test]
    fn test_small_quantities() {
        assert_eq!(smart_round(0.2, "g"), 1.0);
        assert_eq!(smart_round(9.01, "ml"), 10.0);
        assert_eq!(smart_round(3.0, "g"), 3.0);
    }

    #[test]
    fn test_medium_boundary() {
        assert_eq!(smart_round(10.0, "g"), 10.0);
        assert_eq!(smart_round(10.1, "g"), 15.0);
        assert_eq!(smart_round(97.0, "g"), 100.0);
        assert_eq!(smart_round(100.0, "g"), 100.0);
    }

    #[test]
    fn test_large_quantities() {
        assert_eq!(smart_round(100.5, "g"), 110.0);
        assert_eq!(smart_round(200.0, "g"), 200.0);
        assert_eq!(smart_round(333.0, "ml"), 340.0);
    }

    #[test]
    fn test_is_whole_unit() {
        assert!(is_whole_unit("Fetta"));
        assert!(is_whole_unit("q.b"));
        assert!(!is_whole_unit("g"));
        assert!(!is_whole_unit("eggplant"));
    }
}
