use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ChapterId, SectionId};

/// Course header data shown above the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub title: String,
    pub code: String,
    pub version: String,
}

/// One entry in the table of contents: the smallest navigable unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub id: SectionId,
    pub title: String,
    pub has_content: bool,
    pub has_video: bool,
    pub duration_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterKind {
    Preface,
    Chapter,
}

/// An ordered group of sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub id: ChapterId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChapterKind,
    pub sections: Vec<TocEntry>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course has no sections")]
    Empty,
    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),
    #[error("unknown section id: {0}")]
    UnknownSection(SectionId),
}

/// The full course catalog.
///
/// The ordered chapter sequence is the sole source of truth for position:
/// section order is insertion order and defines both display order and the
/// completed/pending cutoff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    info: CourseInfo,
    chapters: Vec<ChapterEntry>,
}

#[derive(Deserialize)]
struct RawCourse {
    info: CourseInfo,
    chapters: Vec<ChapterEntry>,
}

impl TryFrom<RawCourse> for Course {
    type Error = CatalogError;

    fn try_from(raw: RawCourse) -> Result<Self, Self::Error> {
        Self::new(raw.info, raw.chapters)
    }
}

impl Course {
    /// Build a course catalog, validating that it has at least one section
    /// and that every section id is unique across all chapters.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` or `CatalogError::DuplicateSection`.
    pub fn new(info: CourseInfo, chapters: Vec<ChapterEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut any = false;
        for chapter in &chapters {
            for section in &chapter.sections {
                any = true;
                if !seen.insert(section.id.clone()) {
                    return Err(CatalogError::DuplicateSection(section.id.clone()));
                }
            }
        }
        if !any {
            return Err(CatalogError::Empty);
        }
        Ok(Self { info, chapters })
    }

    #[must_use]
    pub fn info(&self) -> &CourseInfo {
        &self.info
    }

    #[must_use]
    pub fn chapters(&self) -> &[ChapterEntry] {
        &self.chapters
    }

    /// Iterate over all sections in course order, paired with their chapter.
    pub fn sections(&self) -> impl Iterator<Item = (&ChapterEntry, &TocEntry)> {
        self.chapters
            .iter()
            .flat_map(|chapter| chapter.sections.iter().map(move |section| (chapter, section)))
    }

    #[must_use]
    pub fn find_section(&self, id: &SectionId) -> Option<&TocEntry> {
        self.sections()
            .find(|(_, section)| section.id == *id)
            .map(|(_, section)| section)
    }

    /// The chapter that owns the given section.
    #[must_use]
    pub fn chapter_of(&self, id: &SectionId) -> Option<&ChapterEntry> {
        self.sections()
            .find(|(_, section)| section.id == *id)
            .map(|(chapter, _)| chapter)
    }

    /// Flattened index of a section across all chapters, in course order.
    #[must_use]
    pub fn flat_index(&self, id: &SectionId) -> Option<usize> {
        self.sections()
            .position(|(_, section)| section.id == *id)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.chapters
            .iter()
            .map(|chapter| chapter.sections.len())
            .sum()
    }

    /// The first section of the course. The constructor guarantees one exists.
    #[must_use]
    pub fn first_section(&self) -> &TocEntry {
        self.sections()
            .next()
            .map(|(_, section)| section)
            .expect("validated non-empty")
    }

    #[must_use]
    pub fn prev_section(&self, id: &SectionId) -> Option<&TocEntry> {
        let index = self.flat_index(id)?;
        let before = index.checked_sub(1)?;
        self.sections().nth(before).map(|(_, section)| section)
    }

    #[must_use]
    pub fn next_section(&self, id: &SectionId) -> Option<&TocEntry> {
        let index = self.flat_index(id)?;
        self.sections().nth(index + 1).map(|(_, section)| section)
    }
}
