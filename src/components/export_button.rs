//! Export Button Component
//!
//! Starts the PDF export of the current schedule. Disabled while running.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ExportButton() -> impl IntoView {
    let store = use_app_store();

    let export = move |_| {
        if store.exporting().get_untracked() {
            return;
        }
        store.exporting().set(true);
        let snapshot = store.scheduler().get_untracked();
        let config = store.export_config().get_untracked();

        spawn_local(async move {
            match commands::export_schedule_pdf(&snapshot, &config).await {
                Ok(name) => log::info!("[EXPORT] Downloaded {}", name),
                Err(err) => {
                    log::error!("[EXPORT] Failed: {}", err);
                    commands::alert(&err.to_string());
                }
            }
            store.exporting().set(false);
        });
    };

    view! {
        <div class="export-bar">
            <button
                class="export-btn"
                disabled=move || store.exporting().get()
                on:click=export
            >
                "📄 Download PDF"
            </button>
        </div>
    }
}
