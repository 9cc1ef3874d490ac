use serde::{Deserialize, Serialize};

use crate::model::ids::{ChapterId, SectionId};

/// Metadata for the optional video block at the top of a lesson.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    pub media_type: String,
}

/// The kind-specific payload of a body section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum BodyPayload {
    RichText(String),
    List(Vec<String>),
}

impl BodyPayload {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            BodyPayload::RichText(html) => html.trim().is_empty(),
            BodyPayload::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

/// One titled block inside a lesson body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySection {
    pub title: String,
    #[serde(flatten)]
    pub payload: BodyPayload,
}

impl BodySection {
    /// A section without a title or without any payload is skipped at render time.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.title.trim().is_empty() && !self.payload.is_empty()
    }
}

/// The authored payload of one section. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub id: SectionId,
    pub chapter_id: ChapterId,
    pub title: String,
    pub section_label: String,
    pub duration_label: String,
    #[serde(default)]
    pub video: Option<VideoRef>,
    #[serde(default)]
    pub body: Vec<BodySection>,
}

impl LessonContent {
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}
