//! Type-safe enumerations for the categorical record fields.
//!
//! Both enumerations serialize as their display label so persisted snapshots
//! and exported CSV files read the same way a user sees them in the grid.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Field of study a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Mathematics,
    Physics,
    Biology,
    Chemistry,
    Engineering,
    Economics,
    Psychology,
}

impl Major {
    pub const ALL: [Major; 8] = [
        Major::ComputerScience,
        Major::Mathematics,
        Major::Physics,
        Major::Biology,
        Major::Chemistry,
        Major::Engineering,
        Major::Economics,
        Major::Psychology,
    ];

    /// Labels in declaration order, used by the column descriptor table.
    pub const LABELS: [&'static str; 8] = [
        "Computer Science",
        "Mathematics",
        "Physics",
        "Biology",
        "Chemistry",
        "Engineering",
        "Economics",
        "Psychology",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer Science",
            Major::Mathematics => "Mathematics",
            Major::Physics => "Physics",
            Major::Biology => "Biology",
            Major::Chemistry => "Chemistry",
            Major::Engineering => "Engineering",
            Major::Economics => "Economics",
            Major::Psychology => "Psychology",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Major {
    type Err = ModelError;

    /// Parse a major from its label (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Major::ALL
            .into_iter()
            .find(|major| major.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownMajor(s.to_string()))
    }
}

/// Enrollment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Graduated,
    Suspended,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::Graduated,
        Status::Suspended,
    ];

    pub const LABELS: [&'static str; 4] = ["Active", "Inactive", "Graduated", "Suspended"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Graduated => "Graduated",
            Status::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

/// Direction of a single sort rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_from_str() {
        assert_eq!(
            "computer science".parse::<Major>().unwrap(),
            Major::ComputerScience
        );
        assert_eq!(" PHYSICS ".parse::<Major>().unwrap(), Major::Physics);
        assert!("Astrology".parse::<Major>().is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("graduated".parse::<Status>().unwrap(), Status::Graduated);
        assert_eq!(
            "Dropped".parse::<Status>(),
            Err(ModelError::UnknownStatus("Dropped".to_string()))
        );
    }

    #[test]
    fn test_labels_match_as_str() {
        for (major, label) in Major::ALL.iter().zip(Major::LABELS) {
            assert_eq!(major.as_str(), label);
        }
        for (status, label) in Status::ALL.iter().zip(Status::LABELS) {
            assert_eq!(status.as_str(), label);
        }
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }
}
