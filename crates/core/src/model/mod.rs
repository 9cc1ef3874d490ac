mod catalog;
mod ids;
mod lesson;

pub use catalog::{CatalogError, ChapterEntry, ChapterKind, Course, CourseInfo, TocEntry};
pub use ids::{ChapterId, SectionId};
pub use lesson::{BodyPayload, BodySection, LessonContent, VideoRef};
