use serde::{Deserialize, Serialize};

/// One entry in the article listing. Re-derived from the upstream feed
/// on every request; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub link: String,
    /// Calendar day only (YYYY-MM-DD), truncated from the upstream
    /// publish timestamp.
    pub date: Option<String>,
    pub deck: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingInfo {
    pub limit: u32,
    pub offset: u32,
    pub count: usize,
    pub has_more: bool,
}

impl PagingInfo {
    /// `has_more` is a heuristic: the page was full, so there is
    /// probably another one. The upstream total is not consulted, so
    /// an exactly-full final page reports `true`. Documented behavior,
    /// kept as-is.
    pub fn for_page(limit: u32, offset: u32, count: usize) -> Self {
        Self {
            limit,
            offset,
            count,
            has_more: count == limit as usize,
        }
    }
}

/// A fully processed article in reading mode: extracted, sanitized,
/// ready to render. Built once per request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderDocument {
    pub title: String,
    pub byline: Option<String>,
    pub excerpt: Option<String>,
    pub site_name: String,
    pub lead_image: Option<String>,
    /// Sanitized markup. The only path that produces this field runs
    /// through the allow-list sanitizer; there is no raw-HTML escape.
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_set_when_page_is_full() {
        let paging = PagingInfo::for_page(20, 0, 20);
        assert!(paging.has_more);
    }

    #[test]
    fn has_more_clear_on_short_page() {
        let paging = PagingInfo::for_page(20, 40, 7);
        assert!(!paging.has_more);
        assert_eq!(paging.count, 7);
    }

    #[test]
    fn paging_serializes_camel_case() {
        let paging = PagingInfo::for_page(10, 0, 10);
        let json = serde_json::to_value(&paging).unwrap();
        assert_eq!(json["hasMore"], true);
        assert!(json.get("has_more").is_none());
    }

    #[test]
    fn reader_document_serializes_camel_case() {
        let doc = ReaderDocument {
            title: "t".into(),
            byline: None,
            excerpt: None,
            site_name: "GameSpot".into(),
            lead_image: None,
            html: "<p>x</p>".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["siteName"], "GameSpot");
        assert_eq!(json["leadImage"], serde_json::Value::Null);
    }
}
