use dioxus::prelude::*;
use dioxus_router::Link;

use course_core::model::TocEntry;
use course_core::navigation::NavigationState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Notice, open_section};

/// Flat table of contents: every chapter with its sections listed in order.
///
/// One parameterized item component covers both available and coming-soon
/// sections.
#[component]
pub fn TocScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();

    rsx! {
        div { class: "toc-container",
            h2 { "{course.info().title}" }
            for chapter in course.chapters().iter().cloned() {
                div { key: "{chapter.id}", class: "toc-chapter",
                    h3 { class: "toc-chapter-title", "{chapter.title}" }
                    ul { class: "toc-list",
                        for section in chapter.sections.iter().cloned() {
                            TocItem { key: "{section.id}", section }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TocItem(section: TocEntry) -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<NavigationState>>();
    let mut notice = use_context::<Signal<Notice>>();
    let course = ctx.course();

    let entry = section.clone();
    let course_click = course.clone();

    if section.has_content {
        rsx! {
            li { class: "toc-item",
                Link {
                    class: "toc-link",
                    to: Route::Lesson {},
                    onclick: move |_| {
                        open_section(&course_click, &mut nav, &mut notice, &entry);
                    },
                    "{section.title}"
                }
                span { class: "toc-duration", "{section.duration_label}" }
                if section.has_video {
                    span { class: "toc-video", "video" }
                }
            }
        }
    } else {
        rsx! {
            li { class: "toc-item unavailable",
                span {
                    class: "toc-link",
                    onclick: move |_| {
                        open_section(&course_click, &mut nav, &mut notice, &entry);
                    },
                    "{section.title}"
                }
                span { class: "toc-duration", "{section.duration_label}" }
                span { class: "coming-soon", "Coming Soon" }
            }
        }
    }
}
