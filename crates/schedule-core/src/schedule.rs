//! Schedule Store
//!
//! Flat, ordered list of bookings. Entries are appended as a group or a whole
//! group is replaced in place; nothing is ever deleted on its own.

use serde::{Deserialize, Serialize};
use crate::entry::{Entry, GroupId};
use crate::group::{derive_groups, Group};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    entries: Vec<Entry>,
    next_group: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_group: 1,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn groups(&self) -> Vec<Group> {
        derive_groups(&self.entries)
    }

    /// Reserve an id for a new group
    pub fn allocate_group(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        id
    }

    /// Append a group's entries at the end
    pub fn append(&mut self, entries: Vec<Entry>) {
        self.entries.extend(entries);
    }

    /// Replace every entry of `group` with `entries`, at the position of the
    /// group's first entry. Appends if the group has no entries.
    pub fn replace_group(&mut self, group: GroupId, entries: Vec<Entry>) {
        match self.entries.iter().position(|e| e.group == group) {
            Some(start) => {
                self.entries.retain(|e| e.group != group);
                let at = start.min(self.entries.len());
                self.entries.splice(at..at, entries);
            }
            None => self.append(entries),
        }
    }

    /// Index of the group's Foreman entry in the flat sequence
    pub fn foreman_index(&self, group: GroupId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.group == group && e.is_foreman())
    }

    /// Group that already books `name`, ignoring `except`
    pub fn booking_group(&self, name: &str, except: Option<GroupId>) -> Option<GroupId> {
        self.entries
            .iter()
            .find(|e| e.name == name && Some(e.group) != except)
            .map(|e| e.group)
    }

    pub fn is_assigned(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Every booked name, in schedule order (may repeat)
    pub fn assigned_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_entries(id: GroupId, foreman: &str, helpers: &[&str], location: &str) -> Vec<Entry> {
        std::iter::once(Entry::foreman(id, foreman, location, ""))
            .chain(helpers.iter().map(|h| Entry::helper(id, h, location, "")))
            .collect()
    }

    #[test]
    fn test_allocate_group_increments() {
        let mut s = Schedule::new();
        assert_eq!(s.allocate_group(), GroupId(1));
        assert_eq!(s.allocate_group(), GroupId(2));
    }

    #[test]
    fn test_replace_group_in_middle_keeps_order() {
        let mut s = Schedule::new();
        let a = s.allocate_group();
        let b = s.allocate_group();
        let c = s.allocate_group();
        s.append(group_entries(a, "Tom Inman", &["Ben Swan"], "A"));
        s.append(group_entries(b, "Jeff Ball", &["Cole Sather", "Andrew Smith"], "B"));
        s.append(group_entries(c, "Ken Kory", &[], "C"));

        s.replace_group(b, group_entries(b, "Jeff Ball", &["Matreno Bajao"], "B2"));

        let names: Vec<&str> = s.assigned_names().collect();
        assert_eq!(names, vec!["Tom Inman", "Ben Swan", "Jeff Ball", "Matreno Bajao", "Ken Kory"]);
        assert_eq!(s.foreman_index(b), Some(2));
        assert_eq!(s.foreman_index(c), Some(4));
        assert_eq!(s.groups()[1].location, "B2");
    }

    #[test]
    fn test_replace_unknown_group_appends() {
        let mut s = Schedule::new();
        let a = s.allocate_group();
        s.replace_group(a, group_entries(a, "Tom Inman", &[], "A"));
        assert_eq!(s.entries().len(), 1);
    }

    #[test]
    fn test_booking_group_ignores_excepted_group() {
        let mut s = Schedule::new();
        let a = s.allocate_group();
        s.append(group_entries(a, "Tom Inman", &["Ben Swan"], "A"));

        assert_eq!(s.booking_group("Ben Swan", None), Some(a));
        assert_eq!(s.booking_group("Ben Swan", Some(a)), None);
        assert_eq!(s.booking_group("Cole Sather", None), None);
        assert!(s.is_assigned("Tom Inman"));
        assert!(!s.is_assigned("Cole Sather"));
    }
}
