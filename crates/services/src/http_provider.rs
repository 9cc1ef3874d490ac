use async_trait::async_trait;
use reqwest::Client;

use course_core::model::{LessonContent, SectionId};

use crate::error::ProviderError;
use crate::provider::ContentProvider;

/// Fetches per-section content from `{base_url}/{section-id}.json`.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    base_url: String,
    client: Client,
}

impl HttpProvider {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContentProvider for HttpProvider {
    async fn fetch(&self, id: &SectionId) -> Result<LessonContent, ProviderError> {
        let url = format!("{}/{id}.json", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(id.clone()));
        }
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let lesson: LessonContent = response.json().await?;
        if lesson.id != *id {
            return Err(ProviderError::IdMismatch {
                requested: id.clone(),
                found: lesson.id,
            });
        }
        Ok(lesson)
    }
}
