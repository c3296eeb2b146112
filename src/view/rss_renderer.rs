use std::io::Cursor;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::feed::FeedItem;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel>
  <title>waglesworld</title>
  <link>https://waglesworld.com</link>
  <description>A personal blog</description>
  <lastBuildDate>Mon, 3 Jun 2024 10:00:00 +0000</lastBuildDate>
  <item>
    <title>Book Review: Dune</title>
    <link>https://waglesworld.com/books/dune/</link>
    <guid isPermaLink="true">https://waglesworld.com/books/dune/</guid>
    <description>Obsessed — Dune by Frank Herbert</description>
    <pubDate>Sat, 1 Jun 2024 12:00:00 +0000</pubDate>
    <author>Site Owner</author>
    <category>book-review</category>
  </item>
</channel>
</rss>
*/

const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

pub const RSS_CONTENT_TYPE: &str = "application/xml";

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub last_build_date: DateTime<Utc>,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, items: &[FeedItem]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:content", CONTENT_NS));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;
        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;
        push_text(&mut writer, "lastBuildDate", &self.last_build_date.to_rfc2822())?;

        for item in items {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", &item.title)?;

            let link = full_link(self.ch_link, &item.link);
            push_text(&mut writer, "link", &link)?;

            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(&link)))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_text(&mut writer, "description", &item.description)?;
            push_text(&mut writer, "pubDate", &item.publication_date.to_rfc2822())?;

            if let Some(ref content) = item.rendered_content {
                push_cdata(&mut writer, "content:encoded", content)?;
            }

            push_text(&mut writer, "author", &item.author)?;

            for category in item.categories.iter() {
                push_text(&mut writer, "category", category)?;
            }

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

/// Joins the site url and an item path with a single slash
pub fn full_link(base_url: &str, link: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), link.trim_start_matches('/'))
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn push_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    if text.contains("]]>") {
        let new_text = text.replace("]]>", "]] >");
        writer.write_event(Event::CData(BytesCData::new(&new_text)))?;
    } else {
        writer.write_event(Event::CData(BytesCData::new(text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str;

    use chrono::TimeZone;

    use super::*;

    fn create_item(id: &str, rendered: Option<&str>, categories: &[&str]) -> FeedItem {
        FeedItem {
            title: format!("title-of-post-{}", id),
            publication_date: Utc.with_ymd_and_hms(2024, 1, 2, 5, 6, 7).unwrap(),
            link: format!("/blog/post-{}/", id),
            description: format!("summary & more of post-{}", id),
            rendered_content: rendered.map(|s| s.to_string()),
            author: "Site Owner".to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn channel() -> RssChannel<'static> {
        RssChannel {
            ch_title: "my feed",
            ch_link: "https://example.com/",
            ch_desc: "My blog feed",
            last_build_date: Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn render_xml() {
        let items = vec![
            create_item("1", Some("<p>Hello</p>"), &["rust"]),
            create_item("2", None, &[]),
        ];
        let xml = channel().render(&items).unwrap();
        assert_eq!(str::from_utf8(&xml).unwrap(), EXPECTED);
    }

    #[test]
    fn render_empty_channel() {
        let xml = channel().render(&[]).unwrap();
        let xml = str::from_utf8(&xml).unwrap();
        assert!(xml.ends_with("<lastBuildDate>Mon, 3 Jun 2024 10:00:00 +0000</lastBuildDate></channel></rss>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn render_cdata_terminator() {
        let items = vec![create_item("1", Some("a ]]> b"), &[])];
        let xml = channel().render(&items).unwrap();
        assert!(str::from_utf8(&xml).unwrap().contains("<content:encoded><![CDATA[a ]] > b]]></content:encoded>"));
    }

    #[test]
    fn test_full_link() {
        assert_eq!(full_link("https://example.com", "/blog/a/"), "https://example.com/blog/a/");
        assert_eq!(full_link("https://example.com/", "/blog/a/"), "https://example.com/blog/a/");
        assert_eq!(full_link("https://example.com/", "rss.xml"), "https://example.com/rss.xml");
    }

    const EXPECTED: &str = r##"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/"><channel><title>my feed</title><link>https://example.com/</link><description>My blog feed</description><lastBuildDate>Mon, 3 Jun 2024 10:00:00 +0000</lastBuildDate><item><title>title-of-post-1</title><link>https://example.com/blog/post-1/</link><guid isPermaLink="true">https://example.com/blog/post-1/</guid><description>summary &amp; more of post-1</description><pubDate>Tue, 2 Jan 2024 05:06:07 +0000</pubDate><content:encoded><![CDATA[<p>Hello</p>]]></content:encoded><author>Site Owner</author><category>rust</category></item><item><title>title-of-post-2</title><link>https://example.com/blog/post-2/</link><guid isPermaLink="true">https://example.com/blog/post-2/</guid><description>summary &amp; more of post-2</description><pubDate>Tue, 2 Jan 2024 05:06:07 +0000</pubDate><author>Site Owner</author></item></channel></rss>"##;
}
