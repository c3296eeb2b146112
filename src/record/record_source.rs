use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use spdlog::debug;

use crate::record::{Article, BookReview};

/// Where the published records come from.
///
/// Implementations only return records with a slug and a publish date, newest first.
pub trait RecordSource {
    fn articles(&self) -> Result<Vec<Article>>;
    fn reviews(&self) -> Result<Vec<BookReview>>;
}

/// Reads records from JSON exports of the CMS datasets
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub posts_file: PathBuf,
    pub reviews_file: PathBuf,
}

impl JsonFileSource {
    pub fn new(posts_file: PathBuf, reviews_file: PathBuf) -> Self {
        JsonFileSource {
            posts_file,
            reviews_file,
        }
    }
}

impl RecordSource for JsonFileSource {
    fn articles(&self) -> Result<Vec<Article>> {
        let mut articles: Vec<Article> = read_records(&self.posts_file)?;
        articles.retain(|a| !a.slug.is_empty());
        sort_newest_first(&mut articles, |a| a.published_at);
        Ok(articles)
    }

    fn reviews(&self) -> Result<Vec<BookReview>> {
        let mut reviews: Vec<BookReview> = read_records(&self.reviews_file)?;
        reviews.retain(|r| !r.slug.is_empty());
        sort_newest_first(&mut reviews, |r| r.published_at);
        Ok(reviews)
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Error reading records from {}", path.display()))?;
    let values: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Error parsing records from {}", path.display()))?;

    let total = values.len();
    let records = values.into_iter()
        .filter(has_publish_date)
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("Error parsing records from {}", path.display()))?;

    if records.len() < total {
        debug!("Skipped {} undated records from {}", total - records.len(), path.display());
    }
    Ok(records)
}

/// Drafts may be exported before a date is set
fn has_publish_date(value: &Value) -> bool {
    value.get("publishedAt")
        .and_then(Value::as_str)
        .is_some_and(|date| date.parse::<DateTime<Utc>>().is_ok())
}

fn sort_newest_first<T>(records: &mut [T], date: impl Fn(&T) -> DateTime<Utc>) {
    records.sort_by(|a, b| date(b).cmp(&date(a)));
}

/// Fetches both collections on the blocking pool and waits for both of them.
pub async fn fetch_records<S>(source: &S) -> Result<(Vec<Article>, Vec<BookReview>)>
    where
        S: RecordSource + Clone + Send + 'static,
{
    let article_source = source.clone();
    let review_source = source.clone();
    let (articles, reviews) = tokio::try_join!(
        tokio::task::spawn_blocking(move || article_source.articles()),
        tokio::task::spawn_blocking(move || review_source.reviews()),
    )?;

    Ok((articles?, reviews?))
}
