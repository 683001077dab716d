use scraper::{Html, Selector};

/// Page-head metadata, read from the raw document independently of
/// whatever survives extraction and sanitization in the body.
#[derive(Debug, Default)]
pub struct PageMetadata {
    pub lead_image: Option<String>,
    pub byline: Option<String>,
    pub excerpt: Option<String>,
    pub site_name: Option<String>,
}

impl PageMetadata {
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            lead_image: meta_content(&document, r#"meta[property="og:image"]"#)
                .or_else(|| meta_content(&document, r#"meta[name="twitter:image"]"#)),
            byline: meta_content(&document, r#"meta[name="author"]"#),
            excerpt: meta_content(&document, r#"meta[property="og:description"]"#)
                .or_else(|| meta_content(&document, r#"meta[name="description"]"#)),
            site_name: meta_content(&document, r#"meta[property="og:site_name"]"#),
        }
    }
}

/// First non-empty `content` attribute matching the selector. Empty
/// values collapse to `None` so callers never see empty strings.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|c| !c.is_empty())
        .map(str::to_string)
}
