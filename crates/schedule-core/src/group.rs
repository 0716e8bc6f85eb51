//! Group Derivation
//!
//! Folds the flat entry sequence into foreman-led groups for display.

use serde::{Deserialize, Serialize};
use crate::entry::{Entry, GroupId, Role};

/// One foreman plus helpers at a location. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub foreman: String,
    pub helpers: Vec<String>,
    pub location: String,
    pub details: String,
}

/// Build groups in schedule order.
/// A helper with no foreman before it is dropped.
pub fn derive_groups(entries: &[Entry]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for entry in entries {
        match entry.role {
            Role::Foreman => groups.push(Group {
                id: entry.group,
                foreman: entry.name.clone(),
                helpers: Vec::new(),
                location: entry.location.clone(),
                details: entry.details.clone(),
            }),
            Role::Helper => {
                if let Some(last) = groups.last_mut() {
                    last.helpers.push(entry.name.clone());
                }
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_groups_in_order() {
        let entries = vec![
            Entry::foreman(GroupId(1), "Tom Inman", "Site A", ""),
            Entry::helper(GroupId(1), "Ben Swan", "Site A", ""),
            Entry::foreman(GroupId(2), "Jeff Ball", "Site B", "Roofing"),
            Entry::helper(GroupId(2), "Cole Sather", "Site B", "Roofing"),
            Entry::helper(GroupId(2), "Ezra Oucharek", "Site B", "Roofing"),
        ];

        let groups = derive_groups(&entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].foreman, "Tom Inman");
        assert_eq!(groups[0].helpers, vec!["Ben Swan"]);
        assert_eq!(groups[1].id, GroupId(2));
        assert_eq!(groups[1].helpers, vec!["Cole Sather", "Ezra Oucharek"]);
        assert_eq!(groups[1].details, "Roofing");
    }

    #[test]
    fn test_leading_helper_dropped() {
        let entries = vec![
            Entry::helper(GroupId(9), "Ben Swan", "Nowhere", ""),
            Entry::foreman(GroupId(1), "Tom Inman", "Site A", ""),
        ];

        let groups = derive_groups(&entries);

        assert_eq!(groups.len(), 1);
        assert!(groups[0].helpers.is_empty());
    }

    #[test]
    fn test_empty_schedule() {
        assert!(derive_groups(&[]).is_empty());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let entries = vec![
            Entry::foreman(GroupId(1), "Tom Inman", "Site A", ""),
            Entry::helper(GroupId(1), "Ben Swan", "Site A", ""),
        ];
        assert_eq!(derive_groups(&entries), derive_groups(&entries));
    }
}
