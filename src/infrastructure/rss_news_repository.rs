// RSS news repository implementation
use crate::application::news_repository::NewsRepository;
use crate::domain::news::News;
use crate::infrastructure::config::FeedConfig;
use crate::infrastructure::rfc822;
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RssNewsRepository {
    client: reqwest::Client,
    feeds: Vec<FeedConfig>,
}

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    guid: Option<RssGuid>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RssGuid {
    #[serde(rename = "$text", default)]
    value: String,
}

impl RssNewsRepository {
    pub fn new(feeds: Vec<FeedConfig>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client for news feeds")?;

        Ok(Self { client, feeds })
    }

    async fn fetch_feed(&self, feed: &FeedConfig) -> Result<Vec<News>> {
        tracing::debug!("Fetching feed {} from {}", feed.name, feed.url);

        let response = self
            .client
            .get(&feed.url)
            .header("Accept", "application/rss+xml, application/xml, text/xml")
            .send()
            .await
            .with_context(|| format!("Failed to fetch feed '{}'", feed.name))?;

        if !response.status().is_success() {
            anyhow::bail!("Feed '{}' responded with status {}", feed.name, response.status());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read feed '{}'", feed.name))?;

        parse_feed(&feed.name, &body)
    }
}

#[async_trait]
impl NewsRepository for RssNewsRepository {
    async fn get_news(&self) -> Result<Vec<News>> {
        let feeds = try_join_all(self.feeds.iter().map(|feed| self.fetch_feed(feed))).await?;

        let mut news: Vec<News> = feeds.into_iter().flatten().collect();
        news.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        tracing::debug!("Fetched {} news items from {} feeds", news.len(), self.feeds.len());
        Ok(news)
    }
}

/// Turn an RSS 2.0 document into news items, skipping items without a usable date
pub fn parse_feed(provider: &str, xml: &str) -> Result<Vec<News>> {
    let document: RssDocument = quick_xml::de::from_str(xml)
        .with_context(|| format!("Feed '{}' is not valid RSS", provider))?;

    let mut news = Vec::with_capacity(document.channel.items.len());
    for item in document.channel.items {
        let Some(pub_date) = item.pub_date.as_deref() else {
            tracing::debug!("Skipping item without pubDate in feed {}", provider);
            continue;
        };

        let timestamp = match rfc822::parse(pub_date) {
            Ok(parsed) => parsed.assume_utc(),
            Err(e) => {
                tracing::warn!("Skipping item with bad date in feed {}: {}", provider, e);
                continue;
            }
        };

        let title = item.title.unwrap_or_default().trim().to_string();
        let link = item
            .link
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        let id = item
            .guid
            .map(|g| g.value.trim().to_string())
            .filter(|g| !g.is_empty())
            .or_else(|| link.clone())
            .unwrap_or_else(|| title.clone());

        news.push(News::new(
            id,
            timestamp,
            title,
            item.description.unwrap_or_default().trim().to_string(),
            provider.to_string(),
            link,
        ));
    }

    Ok(news)
}
