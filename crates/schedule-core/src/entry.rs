//! Schedule Entry
//!
//! One person booked on one job. A group is a Foreman entry followed by its
//! Helper entries, all carrying the same group id.

use serde::{Deserialize, Serialize};

/// Position of a person within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Foreman,
    Helper,
}

/// Identifier shared by a foreman and their helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// A single booking in the flat schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub group: GroupId,
    pub name: String,
    pub role: Role,
    pub location: String,
    pub details: String,
}

impl Entry {
    pub fn foreman(group: GroupId, name: &str, location: &str, details: &str) -> Self {
        Self {
            group,
            name: name.to_string(),
            role: Role::Foreman,
            location: location.to_string(),
            details: details.to_string(),
        }
    }

    pub fn helper(group: GroupId, name: &str, location: &str, details: &str) -> Self {
        Self {
            group,
            name: name.to_string(),
            role: Role::Helper,
            location: location.to_string(),
            details: details.to_string(),
        }
    }

    pub fn is_foreman(&self) -> bool {
        self.role == Role::Foreman
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Foreman).unwrap(), "\"Foreman\"");
        assert_eq!(serde_json::from_str::<Role>("\"Helper\"").unwrap(), Role::Helper);
    }

    #[test]
    fn test_entry_constructors() {
        let f = Entry::foreman(GroupId(1), "Tom Inman", "Site A", "");
        let h = Entry::helper(GroupId(1), "Ben Swan", "Site A", "");
        assert!(f.is_foreman());
        assert!(!h.is_foreman());
        assert_eq!(f.group, h.group);
    }
}
