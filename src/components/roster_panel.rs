//! Roster Panel Component
//!
//! "All Employees" list; people already on the schedule are marked.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RosterPanel() -> impl IntoView {
    let store = use_app_store();
    let employees = store.roster().get_untracked().employees;

    view! {
        <div class="roster-panel no-print">
            <h4>"All Employees"</h4>
            <ul class="roster-list">
                {employees.into_iter().map(|name| {
                    let lookup = name.clone();
                    let assigned = Memo::new(move |_| store.scheduler().read().schedule.is_assigned(&lookup));
                    view! {
                        <li class=move || if assigned.get() { "roster-chip assigned" } else { "roster-chip" }>
                            {name}
                            {move || if assigned.get() { " ✓" } else { "" }}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
