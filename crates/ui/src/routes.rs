use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use course_core::navigation::NavigationState;

use crate::context::AppContext;
use crate::views::{LessonScreen, Notice, SidebarTree, TocScreen};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LessonScreen)] Lesson {},
        #[route("/toc", TocScreen)] Toc {},
}

/// Provide the shared navigation signal and notice slot for the page shell.
///
/// Both screens and the sidebar read the same `Signal<NavigationState>`; an
/// invalid start section falls back to the first section of the course.
pub(crate) fn provide_shell_state(ctx: &AppContext) {
    let course = ctx.course();
    let start = ctx.start_section();
    use_context_provider(move || {
        let state = NavigationState::new(&course, start.clone())
            .unwrap_or_else(|_| NavigationState::at_start(&course));
        Signal::new(state)
    });
    use_context_provider(|| Signal::new(Notice::default()));
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    provide_shell_state(&ctx);
    let mut notice = use_context::<Signal<Notice>>();
    let toast = notice.read().0.clone();

    rsx! {
        div { class: "app",
            SidebarTree {}
            main { class: "content",
                nav { class: "view-switch",
                    Link { to: Route::Lesson {}, "Course" }
                    Link { to: Route::Toc {}, "Table of Contents" }
                }
                Outlet::<Route> {}
            }
            if let Some(message) = toast {
                div {
                    class: "toast",
                    onclick: move |_| notice.set(Notice::default()),
                    "{message}"
                }
            }
        }
    }
}
