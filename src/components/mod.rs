//! UI Components
//!
//! Reusable Leptos components.

mod roster_select;
mod assignment_form;
mod group_card;
mod schedule_view;
mod roster_panel;
mod export_button;

pub use roster_select::RosterSelect;
pub use assignment_form::AssignmentForm;
pub use group_card::GroupCard;
pub use schedule_view::ScheduleView;
pub use roster_panel::RosterPanel;
pub use export_button::ExportButton;
