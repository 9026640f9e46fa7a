use chrono::{DateTime, Utc};

use crate::models::Donor;

/// A donor must wait strictly more than this many whole days between donations.
pub const MIN_DAYS_SINCE_DONATION: i64 = 90;

/// Health-condition tag that defers a donor regardless of dates.
pub const DEFER_TAG: &str = "defer";

/// Decide whether a donor may be matched at the given reference time
///
/// Eligible iff more than 90 whole days have elapsed since the last donation
/// and the donor carries no "defer" tag. A donation date in the future yields
/// negative elapsed days and is therefore not eligible.
#[inline]
pub fn is_eligible(donor: &Donor, as_of: DateTime<Utc>) -> bool {
    let elapsed_days = as_of
        .date_naive()
        .signed_duration_since(donor.last_donation)
        .num_days();

    if elapsed_days <= MIN_DAYS_SINCE_DONATION {
        return false;
    }

    if donor.health_conditions.iter().any(|tag| tag == DEFER_TAG) {
        return false;
    }

    true
}

/// Keep only eligible donors, preserving input order
pub fn filter_eligible(donors: Vec<Donor>, as_of: DateTime<Utc>) -> Vec<Donor> {
    donors
        .into_iter()
        .filter(|donor| is_eligible(donor, as_of))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn donor_last_donated(days_ago: i64, conditions: &[&str]) -> Donor {
        Donor {
            id: Uuid::new_v4(),
            name: "Test Donor".to_string(),
            blood_group: "O+".to_string(),
            last_donation: (Utc::now() - Duration::days(days_ago)).date_naive(),
            health_conditions: conditions.iter().map(|s| s.to_string()).collect(),
            email: None,
            phone: None,
        }
    }

    #[test]
    fn test_eligible_after_waiting_period() {
        let donor = donor_last_donated(100, &[]);
        assert!(is_eligible(&donor, Utc::now()));
    }

    #[test]
    fn test_not_eligible_within_waiting_period() {
        let donor = donor_last_donated(10, &[]);
        assert!(!is_eligible(&donor, Utc::now()));
    }

    #[test]
    fn test_exactly_90_days_not_eligible() {
        // Strict greater-than: day 90 is still too soon, day 91 is fine
        let donor = donor_last_donated(90, &[]);
        assert!(!is_eligible(&donor, Utc::now()));

        let donor = donor_last_donated(91, &[]);
        assert!(is_eligible(&donor, Utc::now()));
    }

    #[test]
    fn test_defer_tag_blocks_eligibility() {
        let donor = donor_last_donated(200, &["defer"]);
        assert!(!is_eligible(&donor, Utc::now()));
    }

    #[test]
    fn test_other_conditions_do_not_block() {
        let donor = donor_last_donated(200, &["anemia-history"]);
        assert!(is_eligible(&donor, Utc::now()));
    }

    #[test]
    fn test_future_donation_date_not_eligible() {
        let donor = donor_last_donated(-5, &[]);
        assert!(!is_eligible(&donor, Utc::now()));
    }

    #[test]
    fn test_filter_preserves_order() {
        let a = donor_last_donated(100, &[]);
        let b = donor_last_donated(10, &[]);
        let c = donor_last_donated(200, &[]);
        let ids = (a.id, c.id);

        let eligible = filter_eligible(vec![a, b, c], Utc::now());

        assert_eq!(eligible.len(), 2);
        assert_eq!(eligible[0].id, ids.0);
        assert_eq!(eligible[1].id, ids.1);
    }
}
