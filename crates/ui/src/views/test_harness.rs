use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use course_core::model::{
    BodyPayload, BodySection, ChapterEntry, ChapterId, ChapterKind, Course, CourseInfo,
    LessonContent, SectionId, TocEntry, VideoRef,
};
use services::{ContentRegistry, StaticProvider};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::routes::provide_shell_state;
use crate::views::{LessonScreen, SidebarTree, TocScreen};

struct TestApp {
    course: Arc<Course>,
    registry: Arc<ContentRegistry>,
    start: SectionId,
}

impl UiApp for TestApp {
    fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    fn registry(&self) -> Arc<ContentRegistry> {
        Arc::clone(&self.registry)
    }

    fn start_section(&self) -> SectionId {
        self.start.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Lesson,
    Sidebar,
    Toc,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let ctx = use_context::<AppContext>();
    provide_shell_state(&ctx);
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Lesson => rsx! { LessonScreen {} },
        ViewKind::Sidebar => rsx! { SidebarTree {} },
        ViewKind::Toc => rsx! { TocScreen {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub registry: Arc<ContentRegistry>,
    pub course: Arc<Course>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let pending resource futures (content resolution) run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn section(id: &str, title: &str, has_content: bool, has_video: bool) -> TocEntry {
    TocEntry {
        id: SectionId::new(id),
        title: title.to_string(),
        has_content,
        has_video,
        duration_label: "15 minutes".to_string(),
    }
}

pub fn sample_course() -> Course {
    Course::new(
        CourseInfo {
            title: "System Administration Essentials".to_string(),
            code: "ADM101".to_string(),
            version: "1.0".to_string(),
        },
        vec![
            ChapterEntry {
                id: ChapterId::new("preface-a"),
                title: "Preface A: Introduction".to_string(),
                kind: ChapterKind::Preface,
                sections: vec![
                    section("section-a-1", "Section A.1: Course Introduction", true, true),
                    section("section-a-2", "Section A.2: Classroom Orientation", false, false),
                    section("section-a-3", "Section A.3: Lab Exercises", false, false),
                ],
            },
            ChapterEntry {
                id: ChapterId::new("chapter-1"),
                title: "Chapter 1: Get Started".to_string(),
                kind: ChapterKind::Chapter,
                sections: vec![
                    section("section-1-1", "Section 1.1: What Is a Shell?", false, false),
                    section("section-1-2", "Section 1.2: Summary", false, false),
                ],
            },
            ChapterEntry {
                id: ChapterId::new("chapter-2"),
                title: "Chapter 2: The Command Line".to_string(),
                kind: ChapterKind::Chapter,
                sections: vec![
                    section("section-2-1", "Section 2.1: Access the Command Line", true, false),
                    section("section-2-2", "Section 2.2: Quiz", false, false),
                ],
            },
        ],
    )
    .expect("sample course is valid")
}

pub fn lesson_a1() -> LessonContent {
    LessonContent {
        id: SectionId::new("section-a-1"),
        chapter_id: ChapterId::new("preface-a"),
        title: "Course Introduction".to_string(),
        section_label: "Section A.1".to_string(),
        duration_label: "15 minutes".to_string(),
        video: Some(VideoRef {
            path: "media/intro.mp4".to_string(),
            title: "Course Introduction".to_string(),
            poster: None,
            media_type: "video/mp4".to_string(),
        }),
        body: vec![
            BodySection {
                title: "Introduction".to_string(),
                payload: BodyPayload::RichText(
                    "<p>This course covers core administration tasks.</p>".to_string(),
                ),
            },
            BodySection {
                title: "Course Objectives".to_string(),
                payload: BodyPayload::List(vec![
                    "Perform core administration tasks".to_string(),
                    "Build foundational command-line skills".to_string(),
                ]),
            },
            BodySection {
                title: String::new(),
                payload: BodyPayload::RichText("<p>never rendered</p>".to_string()),
            },
        ],
    }
}

pub fn setup_view_harness(view: ViewKind, start: &str) -> ViewHarness {
    let course = Arc::new(sample_course());
    let provider = StaticProvider::with_lessons([lesson_a1()]);
    let registry = Arc::new(ContentRegistry::new(Arc::new(provider)));

    let app = Arc::new(TestApp {
        course: Arc::clone(&course),
        registry: Arc::clone(&registry),
        start: SectionId::new(start),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        registry,
        course,
    }
}
