//! Flynn Scheduler App
//!
//! Main application component: assignment form, export bar, schedule view and
//! roster panel stacked in one column.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AssignmentForm, ExportButton, RosterPanel, ScheduleView};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_context(Store::new(AppState::new()));

    view! {
        <main class="app-layout">
            <h2>"Flynn Scheduler"</h2>

            <AssignmentForm />

            <ExportButton />

            <ScheduleView />

            <RosterPanel />
        </main>
    }
}
