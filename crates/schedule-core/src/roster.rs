//! Crew Roster
//!
//! The fixed lists of people who can lead a job (foremen) and who can be
//! booked on one (employees). Foremen are also employees.

use serde::{Deserialize, Serialize};
use crate::error::RosterError;

/// People who may lead a job
pub const FOREMEN: &[&str] = &[
    "Adrian McHardy", "Allan Crowfoot", "Brandon Wilson", "Brent Heyd", "Edward Walt",
    "Erik Turnbull", "Glenn Bissett", "Jeff Ball", "Jeff Thul", "Ken Kory",
    "Konnor Chelkowski", "Tom Inman", "Tyler Swanson", "Jordan Kaiser",
];

/// Everyone who can be booked, alphabetical
pub const EMPLOYEES: &[&str] = &[
    "Adrian McHardy", "Allan Crowfoot", "Andrew Smith", "Ben Swan", "Brandon Wilson",
    "Brent Heyd", "Charlie Williams", "Cole Sather", "Draven Cowan", "Edward Walt",
    "Erik Turnbull", "Ezra Oucharek", "Glenn Bissett", "Jeff Ball", "Jeff Thul",
    "John Kaiser", "John Yildiz (Muhammet)", "Jordan Kaiser", "Ken Kory",
    "Konnor Chelkowski", "Matreno Bajao", "Serdal Muslu", "Tom Inman", "Tyler Swanson",
];

/// Names offered by the foreman and helper selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub foremen: Vec<String>,
    pub employees: Vec<String>,
}

impl Roster {
    /// The Flynn crew list
    pub fn flynn() -> Self {
        Self {
            foremen: FOREMEN.iter().map(|s| s.to_string()).collect(),
            employees: EMPLOYEES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a roster from `{"foremen": [...], "employees": [...]}`
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::flynn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flynn_roster_sizes() {
        let roster = Roster::flynn();
        assert_eq!(roster.foremen.len(), 14);
        assert_eq!(roster.employees.len(), 24);
    }

    #[test]
    fn test_every_foreman_is_employee() {
        let roster = Roster::flynn();
        for foreman in &roster.foremen {
            assert!(roster.employees.contains(foreman), "{} missing from employees", foreman);
        }
    }

    #[test]
    fn test_helpers_are_not_foremen() {
        let roster = Roster::flynn();
        let ben = "Ben Swan".to_string();
        assert!(roster.employees.contains(&ben));
        assert!(!roster.foremen.contains(&ben));
    }

    #[test]
    fn test_from_json() {
        let roster = Roster::from_json(r#"{"foremen":["A"],"employees":["A","B"]}"#).unwrap();
        assert_eq!(roster.foremen, vec!["A"]);
        assert_eq!(roster.employees, vec!["A", "B"]);
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        assert!(Roster::from_json(r#"{"foremen":["A"]}"#).is_err());
    }
}
