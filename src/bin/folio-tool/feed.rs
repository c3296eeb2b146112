use anyhow::Result;
use chrono::Utc;

use folio::config::read_config;
use folio::feed::{article_link, review_link, FeedBuilder};
use folio::record::record_source::RecordSource;
use folio::view::listing_renderer::ListingPage;
use folio::view::rss_renderer::RssChannel;

use crate::ConfigArgs;

pub fn feed_cmd(args: ConfigArgs) -> Result<String> {
    let config = read_config(&args.config_path)?;
    let source = config.record_source();
    let articles = source.articles()?;
    let reviews = source.reviews()?;

    let items = FeedBuilder::new(&config.site.author)
        .with_excerpt_length(config.excerpt_length())
        .build(&articles, &reviews);

    let channel = RssChannel {
        ch_title: &config.site.title,
        ch_link: &config.site.url,
        ch_desc: &config.site.description,
        last_build_date: Utc::now(),
    };
    let xml = channel.render(&items)?;
    Ok(String::from_utf8(xml)?)
}

pub fn listing_cmd(args: ConfigArgs) -> Result<String> {
    let config = read_config(&args.config_path)?;
    let articles = config.record_source().articles()?;

    let page = ListingPage {
        site: &config.site,
        listing: &config.listing,
    };
    Ok(page.render(&articles))
}

/// One line per published record: minutes to read, link and title, newest first
pub fn posts_cmd(args: ConfigArgs) -> Result<String> {
    let config = read_config(&args.config_path)?;
    let source = config.record_source();

    let mut lines = vec![];
    for article in source.articles()? {
        lines.push(post_line(article.reading_time(), &article_link(&article.slug), &article.title));
    }
    for review in source.reviews()? {
        lines.push(post_line(review.reading_time(), &review_link(&review.slug), &review.title));
    }
    Ok(lines.join("\n"))
}

fn post_line(minutes: u32, link: &str, title: &str) -> String {
    format!("{:>3} min  {}  {}", minutes, link, title)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_tmp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_posts_cmd() {
        let posts = write_tmp(r#"[
          {"title": "Estimated", "slug": "estimated", "publishedAt": "2024-02-01T00:00:00Z",
           "estimatedReadingTime": 12, "body": "just a few words"},
          {"title": "Counted", "slug": "counted", "publishedAt": "2024-01-01T00:00:00Z",
           "estimatedReadingTime": 0, "body": "few words"}
        ]"#);
        let reviews = write_tmp(r#"[
          {"title": "Dune", "slug": "dune", "rating": "Obsessed", "bookAuthor": "Frank Herbert",
           "publishedAt": "2024-03-01T00:00:00Z"}
        ]"#);
        let config = write_tmp(&format!(r#"
[site]
title = "t"
description = "d"
url = "https://example.com"
author = "a"

[records]
posts_file = "{}"
reviews_file = "{}"

[server]
address = "127.0.0.1"
port = 8001
"#, posts.path().display(), reviews.path().display()));

        let res = posts_cmd(ConfigArgs { config_path: config.path().to_path_buf() }).unwrap();
        assert_eq!(res, " 12 min  /blog/estimated/  Estimated\n  1 min  /blog/counted/  Counted\n  1 min  /books/dune/  Dune");
    }
}
