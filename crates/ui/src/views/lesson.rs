use std::sync::Arc;

use dioxus::prelude::*;

use course_core::model::{BodyPayload, BodySection, LessonContent, VideoRef};
use course_core::navigation::NavigationState;

use crate::context::AppContext;
use crate::views::{Notice, ViewError, ViewState, open_section, view_state_from_resource};
use crate::vm::{chapter_pill_label, lesson_nav, sanitize_rich_text};

/// The lesson viewer: chapter navigation bar, optional video block, and the
/// rendered body of the current section.
#[component]
pub fn LessonScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_context::<Signal<NavigationState>>();
    let registry = ctx.registry();

    // Reading the navigation signal inside the closure makes the resource
    // rerun whenever the current section changes.
    let mut resource = use_resource(move || {
        let registry = registry.clone();
        let id = nav.read().current().clone();
        async move {
            registry
                .resolve(&id)
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "content-area",
            ChapterNavBar {}
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading section..." }
                },
                ViewState::Ready(lesson) => rsx! {
                    LessonBody { lesson }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "load-error",
                        p { "{err.message()}" }
                        button { class: "retry", onclick: move |_| resource.restart(), "Try again" }
                    }
                },
            }
        }
    }
}

#[component]
fn ChapterNavBar() -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<NavigationState>>();
    let mut notice = use_context::<Signal<Notice>>();
    let course = ctx.course();

    let current = nav.read().current().clone();
    let current_chapter = course.chapter_of(&current).map(|c| c.id.clone());
    let targets = lesson_nav(&course, &current);
    let prev_disabled = targets.prev.is_none();
    let next_disabled = targets.next.is_none();

    let course_prev = course.clone();
    let course_next = course.clone();
    let prev = targets.prev;
    let next = targets.next;

    rsx! {
        div { class: "chapter-navigation",
            div { class: "progress-chapters",
                for chapter in course.chapters().iter().cloned() {
                    span {
                        key: "{chapter.id}",
                        class: if Some(&chapter.id) == current_chapter.as_ref() {
                            "chapter-item active"
                        } else {
                            "chapter-item"
                        },
                        "{chapter_pill_label(&course, &chapter)}"
                    }
                }
            }
            div { class: "chapter-nav-buttons",
                button {
                    class: "nav-btn prev",
                    disabled: prev_disabled,
                    onclick: move |_| {
                        if let Some(entry) = &prev {
                            open_section(&course_prev, &mut nav, &mut notice, entry);
                        }
                    },
                    "Previous"
                }
                button {
                    class: "nav-btn next",
                    disabled: next_disabled,
                    onclick: move |_| {
                        if let Some(entry) = &next {
                            open_section(&course_next, &mut nav, &mut notice, entry);
                        }
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
fn LessonBody(lesson: Arc<LessonContent>) -> Element {
    rsx! {
        if let Some(video) = lesson.video.clone() {
            VideoBlock { video }
        }
        div { class: "section-content",
            header { class: "content-header",
                h1 { "{lesson.title}" }
                div { class: "chapter-info",
                    span { class: "chapter-number", "{lesson.section_label}" }
                    span { class: "estimated-time", "{lesson.duration_label}" }
                }
            }
            div { class: "content-body",
                for section in lesson.body.iter().filter(|s| s.is_renderable()).cloned() {
                    BodySectionView { key: "{section.title}", section }
                }
            }
        }
    }
}

#[component]
fn VideoBlock(video: VideoRef) -> Element {
    rsx! {
        div { class: "video-classroom-section",
            div { class: "video-header",
                h2 { "Video Classroom" }
            }
            div { class: "video-container",
                video {
                    class: "course-video",
                    controls: true,
                    poster: video.poster.clone().unwrap_or_default(),
                    source { src: "{video.path}", r#type: "{video.media_type}" }
                }
                h4 { class: "video-title", "{video.title}" }
            }
        }
    }
}

#[component]
fn BodySectionView(section: BodySection) -> Element {
    let body = match &section.payload {
        BodyPayload::RichText(html) => {
            let clean = sanitize_rich_text(html);
            rsx! {
                div { class: "rich-text", dangerous_inner_html: "{clean}" }
            }
        }
        BodyPayload::List(items) => rsx! {
            ul {
                for (index, item) in items.iter().filter(|i| !i.trim().is_empty()).enumerate() {
                    li { key: "{index}", "{item}" }
                }
            }
        },
    };

    rsx! {
        div { class: "content-section",
            h2 { "{section.title}" }
            {body}
        }
    }
}
