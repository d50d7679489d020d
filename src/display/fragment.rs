/// Image markup fragment
///
/// The page shows the photo through a single image element. This module
/// builds that element as a value first, so rendering stays a pure
/// string transformation and the actual insertion lives elsewhere.

/// Accessible label attached to every rendered image
pub const ALT_TEXT: &str = "Random Dog";

/// Sizing rule: cap width at the container, keep the aspect ratio
pub const SIZING_RULE: &str = "max-width: 100%; height: auto;";

/// A single image element, prior to insertion into the page.
///
/// The source is taken as given and not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFragment {
    source: String,
}

impl ImageFragment {
    /// Create a fragment referencing `source`
    pub fn new(source: impl Into<String>) -> Self {
        ImageFragment {
            source: source.into(),
        }
    }

    /// The fragment's image source path
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the fragment as markup.
    ///
    /// Pure: equal fragments always render to byte-identical strings.
    pub fn to_html(&self) -> String {
        format!(
            r#"<img src="{}" alt="{}" style="{}" />"#,
            self.source, ALT_TEXT, SIZING_RULE
        )
    }
}
