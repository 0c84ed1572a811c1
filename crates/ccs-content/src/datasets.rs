//! Datasets compiled into the client.

use crate::ContentError;
use ccs_types::{Announcement, FacultyMember};
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use tracing::error;

const FACULTY_JSON: &str = include_str!("../data/faculty.json");
const ANNOUNCEMENTS_JSON: &str = include_str!("../data/announcements.json");

static FACULTY: LazyLock<Vec<FacultyMember>> =
    LazyLock::new(|| parse_or_empty("faculty", FACULTY_JSON));

static ANNOUNCEMENTS: LazyLock<Vec<Announcement>> =
    LazyLock::new(|| parse_or_empty("announcements", ANNOUNCEMENTS_JSON));

pub fn parse_dataset<T: DeserializeOwned>(
    dataset: &'static str,
    raw: &str,
) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Dataset { dataset, source })
}

fn parse_or_empty<T: DeserializeOwned>(dataset: &'static str, raw: &str) -> Vec<T> {
    parse_dataset(dataset, raw).unwrap_or_else(|err| {
        error!(error = %err, "embedded dataset unusable, rendering nothing");
        Vec::new()
    })
}

/// The faculty roster in publication order.
pub fn faculty_roster() -> &'static [FacultyMember] {
    &FACULTY
}

/// The announcement feed in publication order (not date order).
pub fn announcements() -> &'static [Announcement] {
    &ANNOUNCEMENTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccs_types::Category;

    #[test]
    fn embedded_roster_parses() {
        let roster: Vec<FacultyMember> = parse_dataset("faculty", FACULTY_JSON).unwrap();
        assert_eq!(roster.len(), 12);
        assert_eq!(faculty_roster().len(), 12);
        assert!(roster.iter().all(|m| m.expertise.len() == 3));
    }

    #[test]
    fn embedded_feed_parses() {
        let feed: Vec<Announcement> = parse_dataset("announcements", ANNOUNCEMENTS_JSON).unwrap();
        assert_eq!(feed.len(), 8);
        assert_eq!(announcements().len(), 8);
        assert_eq!(
            feed.iter().filter(|a| a.category == Category::Event).count(),
            3
        );
    }

    #[test]
    fn malformed_dataset_names_itself() {
        let err = parse_dataset::<FacultyMember>("faculty", "[{").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse faculty dataset"));
    }
}
