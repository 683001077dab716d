use gmn_core::{Error, ReaderDocument, Result};
use url::Url;

pub mod extract;
pub mod metadata;
pub mod sanitize;

pub const TRUSTED_HOST_SUFFIX: &str = "gamespot.com";
pub const TRUSTED_SITE_NAME: &str = "GameSpot";

const USER_AGENT: &str = "GMN-Reader/1.0 (+local-dev)";

/// Turns an article URL into a sanitized reading-mode document.
///
/// The pipeline is strictly linear: validate, fetch, extract,
/// sanitize, read metadata. Each stage's failure is terminal for the
/// request; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct ReaderClient {
    http: reqwest::Client,
    host_suffix: String,
    site_name: String,
}

impl ReaderClient {
    pub fn new() -> Self {
        Self::for_host(TRUSTED_HOST_SUFFIX, TRUSTED_SITE_NAME)
    }

    /// Restricts the reader to hosts ending in `host_suffix`. Split out
    /// so tests can point the pipeline at a local server.
    pub fn for_host(host_suffix: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            host_suffix: host_suffix.into(),
            site_name: site_name.into(),
        }
    }

    /// Rejects anything that is not an absolute URL on the trusted
    /// domain. Runs before any network traffic; this is what keeps the
    /// endpoint from being an open URL fetcher.
    pub fn validate_url(&self, raw: &str) -> Result<Url> {
        let url = Url::parse(raw).map_err(|_| Error::validation("Invalid url"))?;
        let allowed = url
            .host_str()
            .map(|host| host.ends_with(&self.host_suffix))
            .unwrap_or(false);
        if !allowed {
            return Err(Error::validation(format!(
                "Only {} URLs are allowed",
                self.site_name
            )));
        }
        Ok(url)
    }

    pub async fn read_article(&self, raw_url: &str) -> Result<ReaderDocument> {
        let url = self.validate_url(raw_url)?;

        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "reader upstream returned non-success");
            return Err(Error::Upstream(status.as_u16()));
        }
        let html = response.text().await?;

        let extracted = extract::extract_article(&html, &url)?;
        let clean = sanitize::clean(&extracted.content);
        let meta = metadata::PageMetadata::from_html(&html);

        Ok(ReaderDocument {
            title: extracted.title,
            byline: meta.byline,
            excerpt: meta.excerpt,
            site_name: meta.site_name.unwrap_or_else(|| self.site_name.clone()),
            lead_image: meta.lead_image,
            html: clean,
        })
    }
}

impl Default for ReaderClient {
    fn default() -> Self {
        Self::new()
    }
}
