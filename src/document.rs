use scraper::{ElementRef, Html};

/// Elements whose text is never rendered
const HIDDEN_TEXT_TAGS: [&str; 3] = ["script", "style", "template"];

/// Parsed, read-only HTML document
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        ::log::trace!("Parsed HTML document ({} nodes)", html.tree.nodes().count());
        Self { html }
    }

    /// All elements with the given tag name, in document order
    pub fn elements<'a, 't>(
        &'a self,
        tag: &'t str,
    ) -> impl Iterator<Item = ElementRef<'a>> + use<'a, 't> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name() == tag)
    }

    /// `content` attribute of `<meta name="...">`
    ///
    /// A meta tag without a `content` attribute is treated as absent.
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.elements("meta")
            .filter(|element| element.value().attr("name") == Some(name))
            .find_map(|element| element.value().attr("content"))
    }

    /// Text of the first `<title>` element, if the document has one
    pub fn title(&self) -> Option<String> {
        self.elements("title")
            .next()
            .map(|title| element_text(&title).trim().to_string())
    }

    /// All text a browser would render, joined with single spaces
    pub fn visible_text(&self) -> String {
        let mut parts = Vec::new();
        for node in self.html.tree.root().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_TEXT_TAGS.contains(&element.name()))
            });

            if !hidden && !text.trim().is_empty() {
                parts.push(text.trim());
            }
        }

        parts.join(" ")
    }
}

/// Concatenated text content of an element and its descendants
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
