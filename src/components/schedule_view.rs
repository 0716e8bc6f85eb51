//! Schedule View Component
//!
//! Date heading, logo and the group cards derived from the schedule.

use leptos::prelude::*;
use schedule_core::sheet_heading;

use crate::components::GroupCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ScheduleView() -> impl IntoView {
    let store = use_app_store();
    let logo_url = store.export_config().get_untracked().logo_url;

    let date = move || store.scheduler().read().form.date.clone();
    let groups = move || store.scheduler().read().groups().into_iter().enumerate();

    view! {
        <div class="schedule-view">
            {move || {
                let date = date();
                sheet_heading(&date)
                    .map(|heading| view! { <h3 class="schedule-date">{heading.to_string()}</h3> })
            }}
            <img src=logo_url class="schedule-logo" alt="Flynn Logo" />

            <div class="group-grid">
                <For
                    each=groups
                    key=|(index, group)| (*index, group.clone())
                    children=move |(index, group)| view! { <GroupCard index=index group=group /> }
                />
            </div>
        </div>
    }
}
