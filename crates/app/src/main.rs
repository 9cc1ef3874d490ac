use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use course_core::model::{Course, LessonContent, SectionId};
use services::{ContentProvider, ContentRegistry, DirProvider, HttpProvider, StaticProvider};
use ui::{App, UiApp, build_app_context};

/// Course catalog and the lessons shipped inside the binary.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const BUNDLED_LESSONS: &[&str] = &[
    include_str!("../data/content/section-a-1.json"),
    include_str!("../data/content/section-2-1.json"),
];

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    ConflictingSource,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::ConflictingSource => {
                write!(f, "--content-dir and --content-url are mutually exclusive")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content-dir <path> | --content-url <base>] [--start <id>]");
    eprintln!();
    eprintln!("Without a content source, only the lessons bundled into the binary");
    eprintln!("are available.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_CONTENT_DIR, COURSE_CONTENT_URL, COURSE_START_SECTION");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ContentSource {
    Bundled,
    Dir(String),
    Url(String),
}

struct Args {
    source: ContentSource,
    start: Option<SectionId>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut dir = std::env::var("COURSE_CONTENT_DIR").ok();
        let mut url = std::env::var("COURSE_CONTENT_URL").ok();
        let mut start = std::env::var("COURSE_START_SECTION")
            .ok()
            .map(SectionId::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content-dir" => {
                    dir = Some(require_value(args, "--content-dir")?);
                    url = None;
                }
                "--content-url" => {
                    url = Some(require_value(args, "--content-url")?);
                    dir = None;
                }
                "--start" => {
                    start = Some(SectionId::new(require_value(args, "--start")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let source = match (dir, url) {
            (Some(_), Some(_)) => return Err(ArgsError::ConflictingSource),
            (Some(dir), None) => ContentSource::Dir(dir),
            (None, Some(url)) => ContentSource::Url(url),
            (None, None) => ContentSource::Bundled,
        };

        Ok(Self { source, start })
    }
}

struct DesktopApp {
    course: Arc<Course>,
    registry: Arc<ContentRegistry>,
    start: SectionId,
}

impl UiApp for DesktopApp {
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

fn bundled_lessons() -> Result<Vec<LessonContent>, serde_json::Error> {
    BUNDLED_LESSONS
        .iter()
        .map(|raw| serde_json::from_str(raw))
        .collect()
}

fn build_registry(
    source: &ContentSource,
    course: &Course,
    lessons: Vec<LessonContent>,
) -> Arc<ContentRegistry> {
    let provider: Arc<dyn ContentProvider> = match source {
        ContentSource::Dir(path) => Arc::new(DirProvider::new(path.clone())),
        ContentSource::Url(base) => Arc::new(HttpProvider::new(base.clone())),
        ContentSource::Bundled => Arc::new(StaticProvider::with_lessons(lessons.clone())),
    };
    let registry = ContentRegistry::new(provider);

    // Seed the cache with what shipped in the binary; everything else stays
    // on the provider. register() logs sections that claim content but have
    // no payload anywhere.
    let mut bundled = lessons;
    for (_, section) in course.sections().filter(|(_, s)| s.has_content) {
        let found = bundled.iter().position(|lesson| lesson.id == section.id);
        let content = found.map(|index| bundled.swap_remove(index));
        if matches!(source, ContentSource::Bundled) || content.is_some() {
            registry.register(&section.id, content);
        }
    }

    Arc::new(registry)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let course: Arc<Course> = Arc::new(serde_json::from_str(CATALOG_JSON)?);
    let lessons = bundled_lessons()?;
    let registry = build_registry(&args.source, &course, lessons);

    let start = match args.start {
        Some(id) if course.find_section(&id).is_some() => id,
        Some(id) => {
            log::warn!("start section {id} is not in the catalog; starting at the beginning");
            course.first_section().id.clone()
        }
        None => course.first_section().id.clone(),
    };

    let title = format!("{} - {}", course.info().code, course.info().title);
    let app = DesktopApp {
        course,
        registry,
        start,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses_and_validates() {
        let course: Course = serde_json::from_str(CATALOG_JSON).unwrap();
        assert!(course.section_count() > 0);
    }

    #[test]
    fn bundled_lessons_parse_and_match_the_catalog() {
        let course: Course = serde_json::from_str(CATALOG_JSON).unwrap();
        for lesson in bundled_lessons().unwrap() {
            let entry = course.find_section(&lesson.id).unwrap();
            assert!(entry.has_content, "bundled lesson {} not in catalog", lesson.id);
        }
    }

    #[test]
    fn registry_seeded_from_bundled_content() {
        let course: Course = serde_json::from_str(CATALOG_JSON).unwrap();
        let lessons = bundled_lessons().unwrap();
        let expected = lessons.len();
        let registry = build_registry(&ContentSource::Bundled, &course, lessons);
        assert_eq!(registry.stats().loaded, expected);
    }

    #[test]
    fn later_source_flag_wins() {
        let mut args = [
            "--content-dir".to_string(),
            "content".to_string(),
            "--content-url".to_string(),
            "http://localhost:8000".to_string(),
        ]
        .into_iter();
        // Repeated source flags override each other; ConflictingSource only
        // fires when both env vars supply a source and no flag settles it.
        let parsed = Args::parse(&mut args).unwrap();
        assert_eq!(
            parsed.source,
            ContentSource::Url("http://localhost:8000".to_string())
        );
    }
}
