use crate::views::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn sidebar_shows_course_header_and_tree() {
    let mut harness = setup_view_harness(ViewKind::Sidebar, "section-a-1");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("ADM101"), "course code missing: {html}");
    assert!(html.contains("Course Navigation"));
    assert!(html.contains("% Complete"));
    // Start chapter is expanded, so its sections are visible.
    assert!(html.contains("Section A.1: Course Introduction"));
    assert!(html.contains("Coming Soon"));
    assert!(html.contains("current"));
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_marks_earlier_content_sections_completed() {
    let mut harness = setup_view_harness(ViewKind::Sidebar, "section-2-1");
    harness.rebuild();
    let html = harness.render();

    // section-a-1 precedes the current section and has content, so its
    // chapter header reports one completed section.
    assert!(html.contains("completed"), "no completed marker: {html}");
    assert!(html.contains("active"), "current chapter not active: {html}");
    assert!(html.contains("1/3 done"));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_renders_resolved_content() {
    let mut harness = setup_view_harness(ViewKind::Lesson, "section-a-1");
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Course Introduction"), "title missing: {html}");
    assert!(html.contains("Video Classroom"));
    assert!(html.contains("Perform core administration tasks"));
    // The untitled trailing body section is dropped.
    assert!(!html.contains("never rendered"));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_offers_retry_when_content_is_missing() {
    // section-2-1 is flagged as having content but the provider has nothing
    // for it, so the screen falls back to the error state.
    let mut harness = setup_view_harness(ViewKind::Lesson, "section-2-1");
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Try again"), "retry button missing: {html}");
    assert!(html.contains("could not be found"));
}

#[tokio::test(flavor = "current_thread")]
async fn toc_lists_every_chapter_and_section() {
    let mut harness = setup_view_harness(ViewKind::Toc, "section-a-1");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("System Administration Essentials"));
    assert!(html.contains("Chapter 2: The Command Line"));
    assert!(html.contains("Section 1.1: What Is a Shell?"));
    assert!(html.contains("Coming Soon"));
    // Sections with content are links, the rest are plain items.
    assert!(html.contains("toc-link"));
    assert!(html.contains("unavailable"));
}
