use std::collections::{HashMap, HashSet};

/// Clean authored rich text before it is injected as inner HTML.
///
/// Lesson payloads are data, not code: only the tags a lesson body legitimately
/// uses survive.
#[must_use]
pub fn sanitize_rich_text(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_but_keeps_structure() {
        let dirty = r#"<p>Hello</p><script>alert("x")</script><ul><li>One</li></ul>"#;
        let clean = sanitize_rich_text(dirty);
        assert!(clean.contains("<p>Hello</p>"));
        assert!(clean.contains("<li>One</li>"));
        assert!(!clean.contains("script"));
    }

    #[test]
    fn drops_event_handler_attributes() {
        let dirty = r#"<a href="intro.html" onclick="steal()">link</a>"#;
        let clean = sanitize_rich_text(dirty);
        assert!(clean.contains(r#"href="intro.html""#));
        assert!(!clean.contains("onclick"));
    }
}
