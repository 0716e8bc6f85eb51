//! Scheduler State
//!
//! Application-state snapshot: the schedule, the form, and which group (if
//! any) the form is editing. Every operation takes `&self` and returns a new
//! snapshot; a refused operation returns an error and the caller keeps the
//! old snapshot.

use serde::{Deserialize, Serialize};
use crate::entry::{Entry, GroupId};
use crate::error::{ScheduleError, ScheduleResult};
use crate::form::{pad_helpers, FormData};
use crate::group::Group;
use crate::schedule::Schedule;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerState {
    pub schedule: Schedule,
    pub form: FormData,
    /// Group the form is editing; `None` when composing a new group
    pub editing: Option<GroupId>,
}

impl SchedulerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn groups(&self) -> Vec<Group> {
        self.schedule.groups()
    }

    /// Same state with the form replaced
    pub fn with_form(&self, form: FormData) -> Self {
        Self {
            form,
            ..self.clone()
        }
    }

    /// Find the first selected name that would be double-booked
    fn check_conflicts(&self) -> ScheduleResult<()> {
        let selected = self.form.selected_names();
        for (i, name) in selected.iter().enumerate() {
            if selected[..i].contains(name)
                || self.schedule.booking_group(name, self.editing).is_some()
            {
                return Err(ScheduleError::AlreadyAssigned { name: name.to_string() });
            }
        }
        Ok(())
    }

    /// Commit the form as a new group, or over the group being edited.
    ///
    /// On success the form is cleared (the date is kept) and edit mode ends.
    pub fn submit(&self) -> ScheduleResult<Self> {
        if self.form.foreman.is_empty() {
            return Err(ScheduleError::MissingForeman);
        }
        self.check_conflicts()?;

        let mut schedule = self.schedule.clone();
        let group = match self.editing {
            Some(id) => id,
            None => schedule.allocate_group(),
        };

        let form = &self.form;
        let entries: Vec<Entry> = std::iter::once(Entry::foreman(group, &form.foreman, &form.location, &form.details))
            .chain(form.filled_helpers().map(|h| Entry::helper(group, h, &form.location, &form.details)))
            .collect();

        match self.editing {
            Some(id) => {
                log::info!("[SCHEDULE] Updated group {} ({} entries)", id.0, entries.len());
                schedule.replace_group(id, entries);
            }
            None => {
                log::info!("[SCHEDULE] Added group {} ({} entries)", group.0, entries.len());
                schedule.append(entries);
            }
        }

        Ok(Self {
            schedule,
            form: form.cleared(),
            editing: None,
        })
    }

    /// Load the group at `group_index` (display order) into the form for editing
    pub fn begin_edit(&self, group_index: usize) -> ScheduleResult<Self> {
        let group = self
            .groups()
            .into_iter()
            .nth(group_index)
            .ok_or(ScheduleError::GroupNotFound(group_index))?;

        log::debug!("[SCHEDULE] Editing group {} at position {}", group.id.0, group_index);

        Ok(Self {
            schedule: self.schedule.clone(),
            form: FormData {
                foreman: group.foreman,
                helpers: pad_helpers(&group.helpers),
                location: group.location,
                details: group.details,
                date: self.form.date.clone(),
            },
            editing: Some(group.id),
        })
    }

    /// Flat index of the edited group's Foreman entry
    pub fn edit_index(&self) -> Option<usize> {
        self.editing.and_then(|id| self.schedule.foreman_index(id))
    }
}
