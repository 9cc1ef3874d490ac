use std::collections::HashMap;

use async_trait::async_trait;

use course_core::model::{LessonContent, SectionId};

use crate::error::ProviderError;

/// Capability for retrieving a section's authored payload.
///
/// The retrieval mechanism (files, network, preloaded data) is a collaborator
/// injected into the registry, not something the registry hard-wires.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch the content for one section.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotFound` when the provider has no source for
    /// the id, and other variants for transport or decoding failures.
    async fn fetch(&self, id: &SectionId) -> Result<LessonContent, ProviderError>;
}

/// In-memory provider for content that ships with the application.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    lessons: HashMap<SectionId, LessonContent>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lessons(lessons: impl IntoIterator<Item = LessonContent>) -> Self {
        let mut provider = Self::new();
        for lesson in lessons {
            provider.insert(lesson);
        }
        provider
    }

    pub fn insert(&mut self, lesson: LessonContent) {
        self.lessons.insert(lesson.id.clone(), lesson);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

#[async_trait]
impl ContentProvider for StaticProvider {
    async fn fetch(&self, id: &SectionId) -> Result<LessonContent, ProviderError> {
        self.lessons
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(id.clone()))
    }
}
