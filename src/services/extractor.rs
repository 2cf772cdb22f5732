use std::time::Duration;

use ego_tree::NodeRef;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use scraper::{node::Node, Html};

use crate::errors::{AppError, AppResult};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Minimum number of characters of cleaned prose a page must yield.
const MIN_TEXT_CHARS: usize = 100;

/// Markup that never contributes prose.
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "footer", "head", "iframe", "img"];

/// Fetches web pages and reduces them to clean prose for prompting.
pub struct PageExtractor {
    client: reqwest::Client,
}

impl PageExtractor {
    pub fn new(fetch_timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns its cleaned text content. Scheme and
    /// content-type problems are the caller's fault (`InvalidInput`);
    /// a non-200 page is `Upstream`; network failures are `Transport`.
    pub async fn extract_from_url(&self, url: &str) -> AppResult<String> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::InvalidInput(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("failed to fetch page: {}", e)))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::Upstream(format!(
                "page returned status {}",
                response.status().as_u16()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("text/html") {
            return Err(AppError::InvalidInput(
                "page does not contain HTML content".to_string(),
            ));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("failed to read page body: {}", e)))?;

        let text = clean_html(&html);
        if text.chars().count() < MIN_TEXT_CHARS {
            return Err(AppError::InvalidInput(
                "could not extract enough text from the page".to_string(),
            ));
        }

        Ok(text)
    }
}

/// Strips non-content markup and collapses the remaining text into
/// trimmed, non-empty lines.
pub fn clean_html(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            if STRIPPED_TAGS.contains(&element.name()) {
                return;
            }
        }
        Node::Text(text) => {
            out.push_str(&text.text);
            out.push('\n');
        }
        _ => {}
    }

    for child in node.children() {
        collect_text(child, out);
    }
}
