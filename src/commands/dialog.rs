//! Dialog Commands
//!
//! Blocking browser dialogs.

/// Show a blocking alert. Does nothing outside a browser window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("[DIALOG] alert failed: {:?}", e);
        }
    }
}
