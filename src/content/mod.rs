use serde::{Deserialize, Deserializer};

pub mod excerpt;
pub mod markdown_renderer;
pub mod reading_time;

/// Body of an article or a review, as stored in the CMS.
///
/// It is either a markdown string or a list of rich text blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentBody {
    PlainText(String),
    RichBlocks(Vec<Block>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "block", alias = "text-block")]
    Text {
        #[serde(default, rename = "children")]
        spans: Vec<Span>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
}

/// Flattens a body into text. Plain text is returned untouched, text blocks
/// are joined with a single space and everything else is skipped.
pub fn extract_text(body: Option<&ContentBody>) -> String {
    match body {
        None => String::new(),
        Some(ContentBody::PlainText(text)) => text.clone(),
        Some(ContentBody::RichBlocks(blocks)) => {
            let texts: Vec<String> = blocks.iter()
                .filter_map(|block| match block {
                    Block::Text { spans } => Some(spans.iter().map(|s| s.text.as_str()).collect()),
                    Block::Other => None,
                })
                .collect();
            texts.join(" ")
        }
    }
}

/// Used as `deserialize_with` for optional bodies: a value that is neither a
/// string nor a block list becomes `None` instead of failing the record.
pub fn deserialize_body<'de, D>(deserializer: D) -> Result<Option<ContentBody>, D::Error>
    where
        D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| ContentBody::deserialize(v).ok()))
}
