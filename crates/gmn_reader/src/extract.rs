use std::io::Cursor;

use gmn_core::{Error, Result};
use url::Url;

/// The readable core of a page: title plus main-body HTML, with
/// navigation, ads, and boilerplate discarded.
#[derive(Debug)]
pub struct Extracted {
    pub title: String,
    pub content: String,
}

/// Readability pass over a fetched page. `url` is the page's own URL,
/// used as the base for resolving relative links in the body.
pub fn extract_article(html: &str, url: &Url) -> Result<Extracted> {
    let mut cursor = Cursor::new(html.as_bytes());
    let product = readability::extractor::extract(&mut cursor, url).map_err(|e| {
        tracing::debug!(%url, error = ?e, "readability extraction failed");
        Error::Extraction
    })?;

    // An empty body means the page had nothing extractable. Fail the
    // request instead of returning a shell; there is no raw-page
    // fallback.
    if product.text.trim().is_empty() {
        return Err(Error::Extraction);
    }

    Ok(Extracted {
        title: product.title,
        content: product.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://www.gamespot.com/articles/test/").unwrap()
    }

    #[test]
    fn extracts_title_and_body() {
        let html = r#"
            <!DOCTYPE html>
            <html>
            <head><title>Big Game Review</title></head>
            <body>
                <nav><a href="/">home</a> <a href="/news">news</a></nav>
                <article>
                    <h1>Big Game Review</h1>
                    <p>The opening hours set a deliberate pace, introducing systems
                    one at a time and trusting the player to connect them.</p>
                    <p>By the midpoint the combat loop has fully opened up, and the
                    encounter design starts rewarding experimentation over routine.</p>
                    <p>It closes on a confident note, with a final act that pays off
                    nearly every thread the story had been pulling on.</p>
                </article>
                <footer>About us</footer>
            </body>
            </html>
        "#;

        let extracted = extract_article(html, &page_url()).unwrap();
        assert_eq!(extracted.title, "Big Game Review");
        assert!(extracted.content.contains("deliberate pace"));
        assert!(extracted.content.contains("confident note"));
    }

    #[test]
    fn empty_page_fails_extraction() {
        let html = "<!DOCTYPE html><html><head></head><body></body></html>";
        let err = extract_article(html, &page_url()).unwrap_err();
        assert!(matches!(err, Error::Extraction));
        assert_eq!(err.to_string(), "Unable to parse article");
    }
}
