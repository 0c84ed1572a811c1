use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SELECTED_TAB_KEY: &str = "selectedProgramTab";
pub const ANNOUNCEMENT_FILTER_KEY: &str = "announcementFilter";
pub const INQUIRIES_KEY: &str = "contactInquiries";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacultyMember {
    pub name: String,
    pub rank: String,
    pub department: String,
    pub expertise: Vec<String>,
    pub email: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Academic,
    Event,
    Seminar,
    Deadline,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Academic,
        Category::Event,
        Category::Seminar,
        Category::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Event => "event",
            Category::Seminar => "seminar",
            Category::Deadline => "deadline",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown announcement category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Announcement feed filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => *expected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub category: Category,
    pub location: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A contact-form submission as persisted in the inquiry log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub inquiry_type: String,
    pub message: String,
    pub timestamp: String,
}
