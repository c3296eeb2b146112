use chrono::{DateTime, Utc};

use crate::content::excerpt::{excerpt, DEFAULT_EXCERPT_LENGTH};
use crate::content::markdown_renderer::render_body;
use crate::content::ContentBody;
use crate::record::{Article, BookReview};

pub const BOOK_REVIEW_CATEGORY: &str = "book-review";

/// One entry of the syndication feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub publication_date: DateTime<Utc>,
    pub link: String,
    pub description: String,
    pub rendered_content: Option<String>,
    pub author: String,
    pub categories: Vec<String>,
}

pub struct FeedBuilder {
    /// Used for reviews and for articles without an author
    pub default_author: String,
    pub excerpt_length: usize,
}

impl FeedBuilder {
    pub fn new(default_author: &str) -> Self {
        FeedBuilder {
            default_author: default_author.to_string(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }

    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }

    /// Merges articles and reviews, most recent first.
    /// Items published at the same time keep the articles-then-reviews order.
    pub fn build(&self, articles: &[Article], reviews: &[BookReview]) -> Vec<FeedItem> {
        let mut items: Vec<FeedItem> = articles.iter()
            .map(|a| self.article_item(a))
            .chain(reviews.iter().map(|r| self.review_item(r)))
            .collect();

        // sort_by is stable
        items.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));
        items
    }

    fn article_item(&self, article: &Article) -> FeedItem {
        let author = article.author.as_ref()
            .and_then(|a| a.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.default_author.clone());

        FeedItem {
            title: article.title.clone(),
            publication_date: article.published_at,
            link: article_link(&article.slug),
            description: excerpt(article.body.as_ref(), self.excerpt_length),
            rendered_content: render_body(article.body.as_ref()),
            author,
            categories: article.tags.clone().unwrap_or_default(),
        }
    }

    fn review_item(&self, review: &BookReview) -> FeedItem {
        let description = match review.body {
            Some(ContentBody::PlainText(ref text)) if text.is_empty() => review_summary(review),
            Some(ref body) => excerpt(Some(body), self.excerpt_length),
            None => review_summary(review),
        };

        let mut categories = vec![BOOK_REVIEW_CATEGORY.to_string()];
        categories.extend(review.tags.iter().flatten().cloned());

        FeedItem {
            title: format!("Book Review: {}", review.title),
            publication_date: review.published_at,
            link: review_link(&review.slug),
            description,
            rendered_content: render_body(review.body.as_ref()),
            author: self.default_author.clone(),
            categories,
        }
    }
}

fn review_summary(review: &BookReview) -> String {
    format!("{} — {} by {}", review.rating, review.title, review.book_author)
}

pub fn article_link(slug: &str) -> String {
    format!("/blog/{}/", slug)
}

pub fn review_link(slug: &str) -> String {
    format!("/books/{}/", slug)
}
