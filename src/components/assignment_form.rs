//! Assignment Form Component
//!
//! Date, foreman, three helpers, location and details. Submits a new group or
//! updates the group being edited.

use leptos::prelude::*;
use schedule_core::HELPER_SLOTS;

use crate::commands;
use crate::store::{store_submit, store_update_form, use_app_store, AppStateStoreFields};
use crate::components::RosterSelect;

#[component]
pub fn AssignmentForm() -> impl IntoView {
    let store = use_app_store();
    let roster = store.roster().get_untracked();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = store_submit(&store) {
            log::warn!("[FORM] Submission refused: {}", err);
            commands::alert(&err.to_string());
        }
    };

    let is_editing = move || store.scheduler().read().is_editing();

    view! {
        <form class="assignment-form" on:submit=submit>
            <input
                type="text"
                placeholder="Date (e.g., May 9 Schedule)"
                prop:value=move || store.scheduler().read().form.date.clone()
                on:input=move |ev| store_update_form(&store, |f| f.date = event_target_value(&ev))
            />

            <RosterSelect
                placeholder="Select Foreman"
                options=roster.foremen.clone()
                value=Signal::derive(move || store.scheduler().read().form.foreman.clone())
                on_change=move |name: String| store_update_form(&store, |f| f.foreman = name)
            />

            {(0..HELPER_SLOTS).map(|slot| view! {
                <RosterSelect
                    placeholder=format!("Select Helper {}", slot + 1)
                    options=roster.employees.clone()
                    value=Signal::derive(move || store.scheduler().read().form.helpers[slot].clone())
                    on_change=move |name: String| store_update_form(&store, |f| f.set_helper(slot, &name))
                />
            }).collect_view()}

            <input
                type="text"
                placeholder="Location"
                prop:value=move || store.scheduler().read().form.location.clone()
                on:input=move |ev| store_update_form(&store, |f| f.location = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Details / Notes"
                prop:value=move || store.scheduler().read().form.details.clone()
                on:input=move |ev| store_update_form(&store, |f| f.details = event_target_value(&ev))
            />

            <button type="submit" class=move || if is_editing() { "submit-btn editing" } else { "submit-btn" }>
                {move || if is_editing() { "Update" } else { "Add" }}
            </button>
        </form>
    }
}
