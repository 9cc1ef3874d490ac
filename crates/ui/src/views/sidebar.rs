use dioxus::prelude::*;
use dioxus_router::use_navigator;

use course_core::model::{ChapterEntry, TocEntry};
use course_core::navigation::NavigationState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Notice, open_section};
use crate::vm::{
    chapter_pill_label, chapter_status_class, chapter_status_icon, expand_arrow, progress_text,
    section_status_class, section_status_icon,
};

/// Collapsible course navigation tree with the course-info header.
#[component]
pub fn SidebarTree() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();

    rsx! {
        aside { class: "sidebar",
            CourseInfoHeader {}
            nav { class: "nav-tree",
                h3 { "Course Navigation" }
                for chapter in course.chapters().iter().cloned() {
                    ChapterNode { key: "{chapter.id}", chapter }
                }
            }
        }
    }
}

#[component]
fn CourseInfoHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_context::<Signal<NavigationState>>();
    let course = ctx.course();

    let state = nav.read();
    let current = state.current().clone();
    let chapter_title = course
        .chapter_of(&current)
        .map_or_else(|| course.info().title.clone(), |c| c.title.clone());
    let section_title = course
        .find_section(&current)
        .map_or_else(|| "Select a section".to_string(), |s| s.title.clone());
    let percent = state.progress_percent(&course);

    rsx! {
        div { class: "course-info",
            h2 { "{course.info().code} - {chapter_title}" }
            div { class: "current-location",
                span { class: "current-chapter", "{chapter_title}" }
                span { class: "current-section", "{section_title}" }
            }
            div { class: "progress-overview",
                ul { class: "progress-map",
                    for chapter in course.chapters().iter().cloned() {
                        li {
                            key: "{chapter.id}",
                            class: "progress-map-bar {chapter_status_class(state.chapter_status(&course, &chapter))}",
                            title: "{chapter.title}",
                            "{chapter_pill_label(&course, &chapter)}"
                        }
                    }
                }
                span { class: "progress-text", "{progress_text(percent)}" }
            }
        }
    }
}

#[component]
fn ChapterNode(chapter: ChapterEntry) -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<NavigationState>>();
    let course = ctx.course();

    let (expanded, status, progress) = {
        let state = nav.read();
        (
            state.is_expanded(&chapter.id),
            state.chapter_status(&course, &chapter),
            state.chapter_progress(&course, &chapter),
        )
    };
    let chapter_id = chapter.id.clone();

    rsx! {
        div { class: "nav-chapter {chapter_status_class(status)}",
            div {
                class: "chapter-header",
                onclick: move |_| nav.write().toggle_chapter(&chapter_id),
                span { class: "chapter-arrow", "{expand_arrow(expanded)}" }
                div { class: "chapter-content",
                    span { class: "chapter-title", "{chapter.title}" }
                    span { class: "chapter-meta",
                        "{chapter.sections.len()} sections, {progress.completed}/{progress.total} done"
                    }
                }
                span { class: "chapter-status", "{chapter_status_icon(status)}" }
            }
            if expanded {
                div { class: "chapter-sections expanded",
                    for section in chapter.sections.iter().cloned() {
                        SectionNode { key: "{section.id}", section }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionNode(section: TocEntry) -> Element {
    let ctx = use_context::<AppContext>();
    let mut nav = use_context::<Signal<NavigationState>>();
    let mut notice = use_context::<Signal<Notice>>();
    let navigator = use_navigator();
    let course = ctx.course();

    let status = nav.read().section_status(&course, &section);
    let icon = section_status_icon(status, section.has_content);

    let entry = section.clone();
    let course_click = course.clone();

    rsx! {
        div {
            class: "nav-section-item {section_status_class(status)}",
            // The lesson screen may be unmounted (TOC route), so a successful
            // open must also route back to it.
            onclick: move |_| {
                if open_section(&course_click, &mut nav, &mut notice, &entry) {
                    navigator.push(Route::Lesson {});
                }
            },
            span { class: "section-icon", "{icon}" }
            div { class: "section-info",
                span { class: "section-title", "{section.title}" }
                div { class: "section-meta",
                    span { class: "section-duration", "{section.duration_label}" }
                    if section.has_video {
                        span { class: "section-video", "video" }
                    }
                    if !section.has_content {
                        span { class: "coming-soon", "Coming Soon" }
                    }
                }
            }
        }
    }
}
