#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigation;

pub use error::Error;
pub use model::{
    BodyPayload, BodySection, CatalogError, ChapterEntry, ChapterId, ChapterKind, Course,
    CourseInfo, LessonContent, SectionId, TocEntry, VideoRef,
};
pub use navigation::{ChapterProgress, ChapterStatus, NavigationState, SectionStatus};
