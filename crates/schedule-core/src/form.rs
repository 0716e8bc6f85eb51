//! Assignment Form
//!
//! The assignment currently being composed or edited.

use serde::{Deserialize, Serialize};

/// Number of helper selects on the form
pub const HELPER_SLOTS: usize = 3;

/// Field values of the assignment form. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub foreman: String,
    pub helpers: [String; HELPER_SLOTS],
    pub location: String,
    pub details: String,
    pub date: String,
}

impl FormData {
    /// Non-empty helper slots, in slot order
    pub fn filled_helpers(&self) -> impl Iterator<Item = &str> {
        self.helpers.iter().map(String::as_str).filter(|h| !h.is_empty())
    }

    /// Foreman followed by the filled helpers
    pub fn selected_names(&self) -> Vec<&str> {
        std::iter::once(self.foreman.as_str())
            .chain(self.filled_helpers())
            .collect()
    }

    /// Blank form that keeps the date, used after a successful submit
    pub fn cleared(&self) -> Self {
        Self {
            date: self.date.clone(),
            ..Default::default()
        }
    }

    /// Set one helper slot; out-of-range slots are ignored
    pub fn set_helper(&mut self, slot: usize, name: &str) {
        match self.helpers.get_mut(slot) {
            Some(h) => *h = name.to_string(),
            None => log::warn!("[FORM] Ignoring helper slot {}", slot),
        }
    }
}

/// Copy up to three helper names into fixed slots, padding with empty strings
pub fn pad_helpers(helpers: &[String]) -> [String; HELPER_SLOTS] {
    std::array::from_fn(|i| helpers.get(i).cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormData {
        FormData {
            foreman: "Tom Inman".to_string(),
            helpers: ["Ben Swan".to_string(), String::new(), "Cole Sather".to_string()],
            location: "Site A".to_string(),
            details: "Bring ladder".to_string(),
            date: "May 9".to_string(),
        }
    }

    #[test]
    fn test_selected_names_skip_empty_slots() {
        assert_eq!(form().selected_names(), vec!["Tom Inman", "Ben Swan", "Cole Sather"]);
    }

    #[test]
    fn test_cleared_keeps_date() {
        let cleared = form().cleared();
        assert_eq!(cleared.date, "May 9");
        assert!(cleared.foreman.is_empty());
        assert!(cleared.helpers.iter().all(String::is_empty));
        assert!(cleared.location.is_empty());
    }

    #[test]
    fn test_pad_helpers() {
        let padded = pad_helpers(&["Ben Swan".to_string()]);
        assert_eq!(padded, ["Ben Swan".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn test_set_helper_ignores_bad_slot() {
        let mut f = FormData::default();
        f.set_helper(1, "Ben Swan");
        f.set_helper(7, "Nobody");
        assert_eq!(f.helpers[1], "Ben Swan");
        assert_eq!(f.filled_helpers().count(), 1);
    }
}
