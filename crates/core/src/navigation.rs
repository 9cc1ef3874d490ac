//! Current-section tracking and derived progress status.
//!
//! Nothing here is persisted: completion is derived purely from a section's
//! position relative to the current one, so the state resets to the start
//! section on every launch.

use std::collections::BTreeSet;

use crate::model::{CatalogError, ChapterEntry, ChapterId, Course, SectionId, TocEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChapterStatus {
    Active,
    Completed,
    InProgress,
    Pending,
}

/// Completed/total section counts for one chapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChapterProgress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current: SectionId,
    expanded: BTreeSet<ChapterId>,
}

impl NavigationState {
    /// Start at the given section, with its chapter expanded.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSection` if the id is not in the course.
    pub fn new(course: &Course, initial: SectionId) -> Result<Self, CatalogError> {
        let mut state = Self {
            current: initial,
            expanded: BTreeSet::new(),
        };
        let chapter = course
            .chapter_of(&state.current)
            .ok_or_else(|| CatalogError::UnknownSection(state.current.clone()))?;
        state.expanded.insert(chapter.id.clone());
        Ok(state)
    }

    /// Start at the first section of the course.
    #[must_use]
    pub fn at_start(course: &Course) -> Self {
        let first = course.first_section().id.clone();
        Self::new(course, first).expect("first section is always in the course")
    }

    #[must_use]
    pub fn current(&self) -> &SectionId {
        &self.current
    }

    #[must_use]
    pub fn expanded(&self) -> &BTreeSet<ChapterId> {
        &self.expanded
    }

    #[must_use]
    pub fn is_expanded(&self, chapter_id: &ChapterId) -> bool {
        self.expanded.contains(chapter_id)
    }

    /// Move to a section and expand the chapter that contains it.
    ///
    /// Expansion is monotonic: chapters are never auto-collapsed here, only
    /// explicitly via [`NavigationState::toggle_chapter`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSection` if the id is not in the course;
    /// the state is left unchanged in that case.
    pub fn set_current(&mut self, course: &Course, id: SectionId) -> Result<(), CatalogError> {
        let chapter = course
            .chapter_of(&id)
            .ok_or_else(|| CatalogError::UnknownSection(id.clone()))?;
        self.current = id;
        self.expanded.insert(chapter.id.clone());
        Ok(())
    }

    /// Toggle a chapter's membership in the expanded set, independent of
    /// navigation.
    pub fn toggle_chapter(&mut self, chapter_id: &ChapterId) {
        if !self.expanded.remove(chapter_id) {
            self.expanded.insert(chapter_id.clone());
        }
    }

    /// Status of a single section relative to the current position.
    ///
    /// Sections before the current one count as completed only when they have
    /// authored content; placeholders stay pending.
    #[must_use]
    pub fn section_status(&self, course: &Course, entry: &TocEntry) -> SectionStatus {
        if entry.id == self.current {
            return SectionStatus::Current;
        }
        match (course.flat_index(&entry.id), course.flat_index(&self.current)) {
            (Some(index), Some(current_index)) if index < current_index && entry.has_content => {
                SectionStatus::Completed
            }
            _ => SectionStatus::Pending,
        }
    }

    /// Chapter status aggregated from its sections.
    #[must_use]
    pub fn chapter_status(&self, course: &Course, chapter: &ChapterEntry) -> ChapterStatus {
        if chapter.sections.iter().any(|s| s.id == self.current) {
            return ChapterStatus::Active;
        }
        let progress = self.chapter_progress(course, chapter);
        if progress.total > 0 && progress.completed == progress.total {
            ChapterStatus::Completed
        } else if progress.completed > 0 {
            ChapterStatus::InProgress
        } else {
            ChapterStatus::Pending
        }
    }

    #[must_use]
    pub fn chapter_progress(&self, course: &Course, chapter: &ChapterEntry) -> ChapterProgress {
        let completed = chapter
            .sections
            .iter()
            .filter(|s| self.section_status(course, s) == SectionStatus::Completed)
            .count();
        ChapterProgress {
            completed,
            total: chapter.sections.len(),
        }
    }

    /// Number of completed sections across the whole course.
    #[must_use]
    pub fn completed_count(&self, course: &Course) -> usize {
        course
            .sections()
            .filter(|(_, s)| self.section_status(course, s) == SectionStatus::Completed)
            .count()
    }

    /// Overall progress, rounded to the nearest percent.
    #[must_use]
    pub fn progress_percent(&self, course: &Course) -> u8 {
        let total = course.section_count();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count(course);
        ((completed * 100 + total / 2) / total) as u8
    }
}
