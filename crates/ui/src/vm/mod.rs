mod lesson_vm;
mod nav_vm;

pub use lesson_vm::sanitize_rich_text;
pub use nav_vm::{
    LessonNav, SectionOpen, chapter_pill_label, chapter_status_class, chapter_status_icon,
    expand_arrow, lesson_nav, open_section_state, progress_text, section_status_class,
    section_status_icon,
};
