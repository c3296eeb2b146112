use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::content::reading_time::reading_time;
use crate::content::{deserialize_body, ContentBody};

pub mod record_source;

/// Blog post as exported by the CMS
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_slug")]
    pub slug: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_body")]
    pub body: Option<ContentBody>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub estimated_reading_time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookReview {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_slug")]
    pub slug: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_body")]
    pub body: Option<ContentBody>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub rating: Rating,
    pub book_author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Rating {
    Obsessed,
    #[serde(rename = "Really liked it")]
    ReallyLikedIt,
    #[serde(rename = "It was fine")]
    ItWasFine,
    #[serde(rename = "DNF")]
    DidNotFinish,
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Obsessed => "Obsessed",
            Rating::ReallyLikedIt => "Really liked it",
            Rating::ItWasFine => "It was fine",
            Rating::DidNotFinish => "DNF",
        };
        write!(f, "{}", label)
    }
}

impl Article {
    /// Minutes to read, preferring the value entered by the author
    pub fn reading_time(&self) -> u32 {
        match self.estimated_reading_time {
            Some(minutes) if minutes >= 1 => minutes,
            _ => reading_time(self.body.as_ref()),
        }
    }
}

impl BookReview {
    pub fn reading_time(&self) -> u32 {
        reading_time(self.body.as_ref())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlugValue {
    Plain(String),
    Cms { current: Option<String> },
}

/// Accepts `"my-post"` and `{"current": "my-post"}`. Missing slugs become empty.
fn deserialize_slug<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
{
    let slug = match Option::<SlugValue>::deserialize(deserializer)? {
        Some(SlugValue::Plain(slug)) => slug,
        Some(SlugValue::Cms { current }) => current.unwrap_or_default(),
        None => String::new(),
    };
    Ok(slug.trim().to_string())
}
