//! Description expand/collapse.

use taskboard_events::{RowEvent, RowEventBus};
use taskboard_models::TaskId;
use taskboard_sync::RowRepository;
use tracing::trace;

/// What inside a description was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The description text itself.
    Row,
    /// A button inside the description.
    Button,
    /// A link inside the description.
    Link,
}

/// Toggles a row's description between collapsed and expanded.
///
/// Clicks on buttons or links inside the description keep their own
/// behavior and do not toggle. Returns the new expanded state, or `None`
/// if nothing was toggled.
pub fn toggle_description<R: RowRepository + ?Sized>(
    repo: &mut R,
    bus: &RowEventBus,
    task_id: &TaskId,
    target: ClickTarget,
) -> Option<bool> {
    if target != ClickTarget::Row {
        return None;
    }

    let description = repo.find_row_mut(task_id)?.description.as_mut()?;
    description.expanded = !description.expanded;
    let expanded = description.expanded;

    trace!(task_id = %task_id, expanded, "Toggled description");
    bus.emit(RowEvent::DescriptionToggled {
        task_id: task_id.clone(),
        expanded,
    });
    Some(expanded)
}
