use course_core::model::{ChapterEntry, ChapterKind, Course, SectionId, TocEntry};
use course_core::navigation::{ChapterStatus, NavigationState, SectionStatus};

/// Short label for a chapter pill: `P` for prefaces, 1-based numbers for
/// regular chapters.
#[must_use]
pub fn chapter_pill_label(course: &Course, chapter: &ChapterEntry) -> String {
    match chapter.kind {
        ChapterKind::Preface => "P".to_string(),
        ChapterKind::Chapter => course
            .chapters()
            .iter()
            .filter(|c| c.kind == ChapterKind::Chapter)
            .position(|c| c.id == chapter.id)
            .map_or_else(|| "?".to_string(), |index| (index + 1).to_string()),
    }
}

#[must_use]
pub fn section_status_class(status: SectionStatus) -> &'static str {
    match status {
        SectionStatus::Completed => "completed",
        SectionStatus::Current => "current",
        SectionStatus::Pending => "pending",
    }
}

#[must_use]
pub fn chapter_status_class(status: ChapterStatus) -> &'static str {
    match status {
        ChapterStatus::Active => "active",
        ChapterStatus::Completed => "completed",
        ChapterStatus::InProgress => "in-progress",
        ChapterStatus::Pending => "pending",
    }
}

#[must_use]
pub fn section_status_icon(status: SectionStatus, has_content: bool) -> &'static str {
    match status {
        SectionStatus::Completed => "✔",
        SectionStatus::Current => "▶",
        SectionStatus::Pending => {
            if has_content {
                "○"
            } else {
                "🔒"
            }
        }
    }
}

#[must_use]
pub fn chapter_status_icon(status: ChapterStatus) -> &'static str {
    match status {
        ChapterStatus::Active => "▶",
        ChapterStatus::Completed => "✔",
        ChapterStatus::InProgress => "◐",
        ChapterStatus::Pending => "○",
    }
}

#[must_use]
pub fn expand_arrow(expanded: bool) -> &'static str {
    if expanded { "▾" } else { "▸" }
}

#[must_use]
pub fn progress_text(percent: u8) -> String {
    format!("{percent}% Complete")
}

/// What a section click should do, decided before any rendering happens.
///
/// Only `Opened` moves the current section; the other outcomes carry the
/// notice text to surface and leave the state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionOpen {
    Opened,
    Unavailable(String),
    Failed(String),
}

pub fn open_section_state(
    course: &Course,
    state: &mut NavigationState,
    entry: &TocEntry,
) -> SectionOpen {
    if !entry.has_content {
        return SectionOpen::Unavailable(format!("{} is not yet available.", entry.title));
    }
    match state.set_current(course, entry.id.clone()) {
        Ok(()) => SectionOpen::Opened,
        Err(_) => SectionOpen::Failed(format!("{} could not be opened.", entry.title)),
    }
}

/// Previous/next targets for the lesson navigation buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonNav {
    pub prev: Option<TocEntry>,
    pub next: Option<TocEntry>,
}

#[must_use]
pub fn lesson_nav(course: &Course, current: &SectionId) -> LessonNav {
    LessonNav {
        prev: course.prev_section(current).cloned(),
        next: course.next_section(current).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{ChapterId, CourseInfo};

    fn course() -> Course {
        let section = |id: &str| TocEntry {
            id: SectionId::new(id),
            title: id.to_string(),
            has_content: true,
            has_video: false,
            duration_label: "5 minutes".to_string(),
        };
        Course::new(
            CourseInfo {
                title: "T".to_string(),
                code: "C".to_string(),
                version: "1".to_string(),
            },
            vec![
                ChapterEntry {
                    id: ChapterId::new("preface-a"),
                    title: "Preface".to_string(),
                    kind: ChapterKind::Preface,
                    sections: vec![section("section-a-1")],
                },
                ChapterEntry {
                    id: ChapterId::new("chapter-1"),
                    title: "One".to_string(),
                    kind: ChapterKind::Chapter,
                    sections: vec![section("section-1-1")],
                },
                ChapterEntry {
                    id: ChapterId::new("chapter-2"),
                    title: "Two".to_string(),
                    kind: ChapterKind::Chapter,
                    sections: vec![section("section-2-1")],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn pill_labels_skip_prefaces_when_numbering() {
        let course = course();
        assert_eq!(chapter_pill_label(&course, &course.chapters()[0]), "P");
        assert_eq!(chapter_pill_label(&course, &course.chapters()[1]), "1");
        assert_eq!(chapter_pill_label(&course, &course.chapters()[2]), "2");
    }

    #[test]
    fn pending_icon_depends_on_content() {
        assert_eq!(section_status_icon(SectionStatus::Pending, true), "○");
        assert_eq!(section_status_icon(SectionStatus::Pending, false), "🔒");
        assert_eq!(section_status_icon(SectionStatus::Completed, false), "✔");
    }

    #[test]
    fn opening_a_content_section_moves_current_and_expands() {
        let course = course();
        let mut state = NavigationState::at_start(&course);
        let target = course
            .find_section(&SectionId::new("section-2-1"))
            .unwrap()
            .clone();

        let outcome = open_section_state(&course, &mut state, &target);
        assert_eq!(outcome, SectionOpen::Opened);
        assert_eq!(state.current(), &SectionId::new("section-2-1"));
        assert!(state.is_expanded(&ChapterId::new("chapter-2")));
    }

    #[test]
    fn opening_a_placeholder_section_only_raises_a_notice() {
        let course = course();
        let mut state = NavigationState::at_start(&course);
        let placeholder = TocEntry {
            id: SectionId::new("section-2-1"),
            title: "Section 2.1".to_string(),
            has_content: false,
            has_video: false,
            duration_label: "5 minutes".to_string(),
        };

        let before = state.clone();
        let outcome = open_section_state(&course, &mut state, &placeholder);
        assert_eq!(
            outcome,
            SectionOpen::Unavailable("Section 2.1 is not yet available.".to_string())
        );
        assert_eq!(state, before);
    }

    #[test]
    fn opening_an_unknown_section_fails_without_moving() {
        let course = course();
        let mut state = NavigationState::at_start(&course);
        let stray = TocEntry {
            id: SectionId::new("section-9-9"),
            title: "Section 9.9".to_string(),
            has_content: true,
            has_video: false,
            duration_label: "5 minutes".to_string(),
        };

        let before = state.clone();
        let outcome = open_section_state(&course, &mut state, &stray);
        assert_eq!(
            outcome,
            SectionOpen::Failed("Section 9.9 could not be opened.".to_string())
        );
        assert_eq!(state, before);
    }

    #[test]
    fn lesson_nav_at_course_edges() {
        let course = course();
        let first = lesson_nav(&course, &SectionId::new("section-a-1"));
        assert!(first.prev.is_none());
        assert_eq!(
            first.next.map(|s| s.id),
            Some(SectionId::new("section-1-1"))
        );

        let last = lesson_nav(&course, &SectionId::new("section-2-1"));
        assert!(last.next.is_none());
    }
}
