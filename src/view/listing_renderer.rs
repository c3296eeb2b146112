use crate::config::{Listing, Site};
use crate::feed::article_link;
use crate::record::Article;
use crate::view::rss_renderer::full_link;

pub const LISTING_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Plain text index of the site for language model crawlers (`llms.txt`)
pub struct ListingPage<'a> {
    pub site: &'a Site,
    pub listing: &'a Listing,
}

impl ListingPage<'_> {
    pub fn render(&self, articles: &[Article]) -> String {
        let mut lines: Vec<String> = vec![format!("# {}", self.site.title), String::new()];
        lines.extend(self.listing.summary.iter().cloned());
        lines.push(String::new());

        for section in self.listing.sections.iter() {
            lines.push(format!("## {}", section.heading));
            lines.push(String::new());
            lines.extend(section.lines.iter().cloned());
            lines.push(String::new());
        }

        lines.push("## Posts".to_string());
        lines.push(String::new());
        lines.extend(articles.iter().map(|a| self.article_line(a)));
        lines.push(String::new());

        lines.push("## Feeds".to_string());
        lines.push(String::new());
        lines.push(format!("- RSS: {}", full_link(&self.site.url, "rss.xml")));
        if let Some(ref sitemap) = self.listing.sitemap {
            lines.push(format!("- Sitemap: {}", full_link(&self.site.url, sitemap)));
        }
        lines.push(String::new());

        lines.join("\n")
    }

    fn article_line(&self, article: &Article) -> String {
        let url = full_link(&self.site.url, &article_link(&article.slug));
        list_line(&article.title, &url, article.tags.as_deref().unwrap_or_default())
    }
}

/// `- [title](url) [tag1, tag2]`, without the tag suffix when there are no tags
pub fn list_line(title: &str, url: &str, tags: &[String]) -> String {
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    format!("- [{}]({}){}", title, url, tags)
}
