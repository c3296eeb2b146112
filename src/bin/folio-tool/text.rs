use std::fs;

use anyhow::{Context, Result};

use folio::content::excerpt::{excerpt, DEFAULT_EXCERPT_LENGTH};
use folio::content::reading_time::reading_time;
use folio::content::ContentBody;

use crate::{ExcerptArgs, FileArgs};

fn read_body(file: &std::path::Path) -> Result<ContentBody> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Error reading {}", file.display()))?;
    Ok(ContentBody::PlainText(text))
}

pub fn excerpt_cmd(args: ExcerptArgs) -> Result<String> {
    let body = read_body(&args.file)?;
    let max_length = args.max_length.unwrap_or(DEFAULT_EXCERPT_LENGTH);
    Ok(excerpt(Some(&body), max_length))
}

pub fn reading_time_cmd(args: FileArgs) -> Result<String> {
    let body = read_body(&args.file)?;
    Ok(reading_time(Some(&body)).to_string())
}
