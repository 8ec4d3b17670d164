//! Section abstraction for independently streamable page parts.

/// A named, independently streamable part of the page.
///
/// While its data is pending, a section shows its placeholder (or nothing
/// when it has none) inside a slot written with the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name, also the DOM slot id.
    pub name: String,
    /// HTML shown while the section's data is pending.
    pub placeholder: Option<String>,
}

impl Section {
    /// Create a section that shows nothing while pending.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: None,
        }
    }

    /// Create a section using the builder.
    pub fn builder(name: impl Into<String>) -> SectionBuilder {
        SectionBuilder::new(name)
    }

    /// The slot markup written with the shell.
    pub fn render_slot(&self) -> String {
        crate::slots::render_slot(&self.name, self.placeholder.as_deref())
    }
}

/// Builder for section definitions.
pub struct SectionBuilder {
    name: String,
    placeholder: Option<String>,
}

impl SectionBuilder {
    /// Create a new section builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: None,
        }
    }

    /// Set placeholder HTML shown while pending.
    pub fn with_placeholder(mut self, html: impl Into<String>) -> Self {
        self.placeholder = Some(html.into());
        self
    }

    /// Build the section.
    pub fn build(self) -> Section {
        Section {
            name: self.name,
            placeholder: self.placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_without_placeholder() {
        let section = Section::new("featured-products");
        assert_eq!(section.placeholder, None);
        assert_eq!(
            section.render_slot(),
            r#"<div id="slot-featured-products" data-slot="featured-products"></div>"#
        );
    }

    #[test]
    fn test_section_with_placeholder() {
        let section = Section::builder("tertiary-hero")
            .with_placeholder("<div class=\"skeleton\"></div>")
            .build();
        assert!(section.render_slot().contains("skeleton"));
    }
}
