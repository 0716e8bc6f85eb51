//! Group Card Component
//!
//! One foreman-led group in the schedule view.

use leptos::prelude::*;
use schedule_core::Group;

use crate::commands;
use crate::store::{store_begin_edit, use_app_store};

/// Card for the group at `index` in display order
#[component]
pub fn GroupCard(
    index: usize,
    group: Group,
) -> impl IntoView {
    let store = use_app_store();

    let details = (!group.details.is_empty()).then(|| view! {
        <p class="group-details">"📝 " {group.details.clone()}</p>
    });

    let edit = move |_| {
        if let Err(err) = store_begin_edit(&store, index) {
            log::warn!("[FORM] Cannot edit group {}: {}", index, err);
            commands::alert(&err.to_string());
        }
    };

    view! {
        <div class="group-card">
            <h4 class="group-location">{group.location.clone()}</h4>
            <p class="group-foreman">"👷 " {group.foreman.clone()}</p>
            {group.helpers.iter().map(|helper| view! {
                <p class="group-helper">"🔧 " {helper.clone()}</p>
            }).collect_view()}
            {details}
            <button class="edit-btn no-print" on:click=edit>"✏️ Edit"</button>
        </div>
    }
}
