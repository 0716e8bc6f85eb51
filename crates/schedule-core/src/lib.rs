//! Schedule Core
//!
//! Domain logic behind the crew scheduling sheet:
//! - roster: who can be booked
//! - entry / schedule: the flat booking list, grouped by explicit group ids
//! - group: foreman-led groups derived for display
//! - state: form + schedule snapshot with submit and edit operations
//! - export: raster placement and PDF assembly

mod config;
mod entry;
mod error;
mod export;
mod form;
mod group;
mod roster;
mod schedule;
mod state;


pub use config::{ExportConfig, A4_HEIGHT_MM, A4_WIDTH_MM};
pub use entry::{Entry, GroupId, Role};
pub use error::{ExportError, ExportResult, RosterError, ScheduleError, ScheduleResult};
pub use export::{build_pdf, file_name, fit_full_width, sheet_heading, Placement, RasterImage};
pub use form::{pad_helpers, FormData, HELPER_SLOTS};
pub use group::{derive_groups, Group};
pub use roster::{Roster, EMPLOYEES, FOREMEN};
pub use schedule::Schedule;
pub use state::SchedulerState;
