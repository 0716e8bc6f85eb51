//! Roster Select Component
//!
//! Reusable select over a list of names, with an empty placeholder option.

use leptos::prelude::*;

/// (value, label) pairs: the placeholder with an empty value, then one per name
pub fn option_entries(placeholder: String, names: Vec<String>) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder))
        .chain(names.into_iter().map(|name| (name.clone(), name)))
        .collect()
}

/// Select bound to a name; the empty string means nothing selected
#[component]
pub fn RosterSelect(
    #[prop(into)] placeholder: String,
    options: Vec<String>,
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="roster-select"
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {option_entries(placeholder, options).into_iter().map(|(option_value, label)| {
                let current = option_value.clone();
                view! {
                    <option
                        value=option_value
                        prop:selected=move || value.get() == current
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_entries_placeholder_first() {
        let entries = option_entries(
            "Select Foreman".to_string(),
            vec!["Tom Inman".to_string(), "Jeff Ball".to_string()],
        );

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], (String::new(), "Select Foreman".to_string()));
        assert_eq!(entries[1], ("Tom Inman".to_string(), "Tom Inman".to_string()));
        assert_eq!(entries[2].0, "Jeff Ball");
    }

    #[test]
    fn test_option_entries_empty_roster() {
        let entries = option_entries("Select Helper 1".to_string(), Vec::new());
        assert_eq!(entries, vec![(String::new(), "Select Helper 1".to_string())]);
    }
}
