use std::path::PathBuf;

use async_trait::async_trait;

use course_core::model::{LessonContent, SectionId};

use crate::error::ProviderError;
use crate::provider::ContentProvider;

/// Reads per-section content from `{root}/{section-id}.json`.
#[derive(Clone, Debug)]
pub struct DirProvider {
    root: PathBuf,
}

impl DirProvider {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentProvider for DirProvider {
    async fn fetch(&self, id: &SectionId) -> Result<LessonContent, ProviderError> {
        // Ids come from catalog data; still, never let one escape the root.
        if id.as_str().contains(['/', '\\']) {
            return Err(ProviderError::NotFound(id.clone()));
        }

        let path = self.root.join(format!("{id}.json"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProviderError::NotFound(id.clone()));
            }
            Err(err) => return Err(ProviderError::Io(err)),
        };

        let lesson: LessonContent = serde_json::from_slice(&bytes)?;
        if lesson.id != *id {
            return Err(ProviderError::IdMismatch {
                requested: id.clone(),
                found: lesson.id,
            });
        }
        Ok(lesson)
    }
}
