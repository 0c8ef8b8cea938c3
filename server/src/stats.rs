//! Designation breakdown aggregation.
//!
//! The admin dashboard shows how many attendees registered under each
//! designation. The grouping is an exact string match: case-sensitive, no
//! trimming or other normalization. Output order is unspecified; callers
//! that need a stable order must sort at the presentation layer.

use crate::models::{Attendee, DesignationCount};
use std::collections::HashMap;

/// Count attendees by exact designation string.
///
/// Single linear scan with a map accumulator. An empty attendee set yields
/// an empty result.
#[must_use]
pub fn count_by_designation(attendees: &[Attendee]) -> Vec<DesignationCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for attendee in attendees {
        *counts.entry(attendee.designation.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(designation, count)| DesignationCount {
            designation: designation.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn attendee(designation: &str) -> Attendee {
        Attendee {
            id: String::new(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            designation: designation.to_string(),
            created_at: Utc::now(),
        }
    }

    fn count_of(breakdown: &[DesignationCount], designation: &str) -> Option<usize> {
        breakdown
            .iter()
            .find(|entry| entry.designation == designation)
            .map(|entry| entry.count)
    }

    #[test]
    fn test_empty_input_yields_empty_breakdown() {
        assert!(count_by_designation(&[]).is_empty());
    }

    #[test]
    fn test_counts_grouped_by_designation() {
        let attendees = [
            attendee("Engineer"),
            attendee("Engineer"),
            attendee("Manager"),
        ];
        let breakdown = count_by_designation(&attendees);

        // Order across designations is unspecified
        assert_eq!(breakdown.len(), 2);
        assert_eq!(count_of(&breakdown, "Engineer"), Some(2));
        assert_eq!(count_of(&breakdown, "Manager"), Some(1));
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let attendees = [attendee("Engineer"), attendee("engineer")];
        let breakdown = count_by_designation(&attendees);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(count_of(&breakdown, "Engineer"), Some(1));
        assert_eq!(count_of(&breakdown, "engineer"), Some(1));
    }

    #[test]
    fn test_no_trimming_is_applied() {
        let attendees = [attendee("Engineer"), attendee(" Engineer")];
        let breakdown = count_by_designation(&attendees);

        assert_eq!(breakdown.len(), 2);
    }

    #[test]
    fn test_empty_designation_is_its_own_group() {
        let attendees = [attendee(""), attendee("")];
        let breakdown = count_by_designation(&attendees);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(count_of(&breakdown, ""), Some(2));
    }
}
