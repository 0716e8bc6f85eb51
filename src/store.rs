//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The scheduler
//! snapshot is replaced as a whole on every change; components subscribe to
//! the fields they render.

use leptos::prelude::*;
use reactive_stores::Store;
use schedule_core::{ExportConfig, FormData, Roster, ScheduleError, SchedulerState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Schedule, form and edit target
    pub scheduler: SchedulerState,
    /// Names offered by the selects
    pub roster: Roster,
    pub export_config: ExportConfig,
    /// True while a PDF export is running
    pub exporting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an edit to the form fields
pub fn store_update_form(store: &AppStore, edit: impl FnOnce(&mut FormData)) {
    let current = store.scheduler().get_untracked();
    let mut form = current.form.clone();
    edit(&mut form);
    store.scheduler().set(current.with_form(form));
}

/// Submit the form; on refusal the state is left as it was
pub fn store_submit(store: &AppStore) -> Result<(), ScheduleError> {
    let next = store.scheduler().get_untracked().submit()?;
    store.scheduler().set(next);
    Ok(())
}

/// Load a group into the form for editing
pub fn store_begin_edit(store: &AppStore, group_index: usize) -> Result<(), ScheduleError> {
    let next = store.scheduler().get_untracked().begin_edit(group_index)?;
    store.scheduler().set(next);
    Ok(())
}
