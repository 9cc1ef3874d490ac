mod lesson;
mod sidebar;
mod state;
mod toc;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use lesson::LessonScreen;
pub use sidebar::SidebarTree;
pub use state::{Notice, ViewError, ViewState, view_state_from_resource};
pub use toc::TocScreen;

use dioxus::prelude::*;

use course_core::model::{Course, TocEntry};
use course_core::navigation::NavigationState;

use crate::vm::{SectionOpen, open_section_state};

/// Shared entry point for section clicks from the tree and TOC views.
///
/// Sections without authored content never navigate; they only raise a
/// notice. Returns whether the current section moved, so callers can route
/// to the lesson screen.
pub(crate) fn open_section(
    course: &Course,
    nav: &mut Signal<NavigationState>,
    notice: &mut Signal<Notice>,
    entry: &TocEntry,
) -> bool {
    let outcome = {
        let mut state = nav.write();
        open_section_state(course, &mut state, entry)
    };
    match outcome {
        SectionOpen::Opened => true,
        SectionOpen::Unavailable(message) | SectionOpen::Failed(message) => {
            notice.set(Notice(Some(message)));
            false
        }
    }
}
