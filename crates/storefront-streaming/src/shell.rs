//! Shell template abstraction.

use crate::escape::{escape_html, escape_script_json};

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// `<meta name=...>` tags.
    pub meta: Vec<(String, String)>,
    /// `<meta property=...>` tags (Open Graph).
    pub properties: Vec<(String, String)>,
    /// Canonical URL.
    pub canonical: Option<String>,
    /// Raw link/style tags.
    pub links: Vec<String>,
    /// Inline scripts in head.
    pub scripts: Vec<String>,
    /// JSON-LD documents.
    pub json_ld: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an Open Graph property tag.
    pub fn with_property(mut self, property: &str, content: &str) -> Self {
        self.properties
            .push((property.to_string(), content.to_string()));
        self
    }

    /// Set the canonical URL.
    pub fn with_canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_html(href)
        ));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Add an inline script.
    pub fn with_script(mut self, js: &str) -> Self {
        self.scripts.push(js.to_string());
        self
    }

    /// Add a JSON-LD document.
    pub fn with_json_ld(mut self, json: impl Into<String>) -> Self {
        self.json_ld.push(json.into());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                escape_html(name),
                escape_html(content)
            ));
        }

        for (property, content) in &self.properties {
            html.push_str(&format!(
                "<meta property=\"{}\" content=\"{}\">\n",
                escape_html(property),
                escape_html(content)
            ));
        }

        if let Some(url) = &self.canonical {
            html.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                escape_html(url)
            ));
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        for script in &self.scripts {
            html.push_str(&format!("<script>{}</script>\n", script));
        }

        for doc in &self.json_ld {
            html.push_str(&format!(
                "<script type=\"application/ld+json\">{}</script>\n",
                escape_script_json(doc)
            ));
        }

        html
    }
}

/// Page shell wrapped around the streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// `lang` attribute on `<html>`.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML after `<body>` and before the sections.
    pub body_start: String,
    /// HTML after the sections, up to and including `</html>`.
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render_escapes() {
        let head = HeadContent::new("Snow & Ski")
            .with_meta("description", "Boards \"for\" everyone")
            .with_property("og:type", "website");
        let html = head.render();
        assert!(html.contains("<title>Snow &amp; Ski</title>"));
        assert!(html.contains(r#"content="Boards &quot;for&quot; everyone""#));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
    }

    #[test]
    fn test_head_json_ld() {
        let html = HeadContent::default()
            .with_json_ld(r#"{"name":"</script>"}"#)
            .render();
        assert!(html.contains(r#"<script type="application/ld+json">{"name":"<\/script>"}</script>"#));
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("Home"))
            .with_lang("fr")
            .with_body_start("<header></header><main>");
        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
        assert!(opening.ends_with("<body>\n<header></header><main>"));
        assert!(shell.render_closing().ends_with("</html>"));
    }
}
