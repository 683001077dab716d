use gmn_core::{ArticleSummary, Error, PagingInfo, Result};
use serde::Deserialize;

pub mod image;

pub use image::{pick_image, ImageVariants};

pub const DEFAULT_BASE_URL: &str = "https://www.gamespot.com/api/articles/";
pub const DEFAULT_LIMIT: u32 = 20;

const USER_AGENT: &str = "GMN-News/1.0 (+local-dev)";

/// Client for the upstream article listing API. Stateless apart from
/// the pooled HTTP connection; every call is a single, non-retried
/// upstream request.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<ListingItem>,
}

#[derive(Debug, Deserialize)]
struct ListingItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    site_detail_url: String,
    publish_date: Option<String>,
    deck: Option<String>,
    image: Option<ImageVariants>,
}

impl FeedClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches one page of the listing, newest first, and maps it into
    /// summary records plus paging metadata.
    pub async fn list_articles(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<ArticleSummary>, PagingInfo)> {
        let limit_param = limit.to_string();
        let offset_param = offset.to_string();

        let response = self
            .http
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
                ("sort", "publish_date:desc"),
                ("limit", limit_param.as_str()),
                ("offset", offset_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "listing upstream returned non-success");
            return Err(Error::Upstream(status.as_u16()));
        }

        let listing: ListingResponse = response.json().await?;
        let mut articles: Vec<ArticleSummary> =
            listing.results.into_iter().map(map_item).collect();
        // Cap at the requested page size even if upstream overflows.
        articles.truncate(limit as usize);
        let paging = PagingInfo::for_page(limit, offset, articles.len());
        Ok((articles, paging))
    }
}

fn map_item(item: ListingItem) -> ArticleSummary {
    ArticleSummary {
        title: item.title,
        link: item.site_detail_url,
        date: item.publish_date.as_deref().map(truncate_day),
        deck: item.deck.filter(|d| !d.is_empty()),
        image: pick_image(item.image.as_ref()),
    }
}

/// Upstream publish timestamps look like `2024-05-01 09:30:00`; only
/// the calendar-day prefix is kept.
fn truncate_day(timestamp: &str) -> String {
    timestamp.chars().take(10).collect()
}
