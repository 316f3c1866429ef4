//! Turns one Obsidian note into an Astro content entry.
//!
//! The conversion is a pure function of the file name, the note text and the
//! category: no I/O, no state between calls. Notes that do not open with a
//! `---` fenced front matter block produce no output at all.

pub mod dates;
pub mod frontmatter;
pub mod links;
pub mod tags;

use crate::config::SyncConfig;
use crate::model::{FrontMatter, NormalizedFrontMatter, TagSet};

/// Tag added to every note that carries a video `id`.
pub const VIDEO_TAG: &str = "videos";

#[derive(Debug, Clone, Default)]
pub struct Transformer {
    tag_category: bool,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            tag_category: config.tag_category,
        }
    }

    pub fn with_category_tag(mut self, enabled: bool) -> Self {
        self.tag_category = enabled;
        self
    }

    /// Converts note text, or returns `None` if it lacks a front matter block.
    pub fn transform(&self, file_name: &str, text: &str, category: &str) -> Option<String> {
        let (block, body) = frontmatter::split(text)?;
        let fields = frontmatter::parse_fields(block);
        let normalized = self.normalize(file_name, &fields, body, category);
        Some(render(&normalized, &convert_body(body)))
    }

    pub fn normalize(
        &self,
        file_name: &str,
        fields: &FrontMatter,
        body: &str,
        category: &str,
    ) -> NormalizedFrontMatter {
        let video_id = fields.get("id").map(str::to_string);

        let mut collected = TagSet::new();
        collected.extend(tags::extract_hashtags(body));
        if let Some(value) = fields.get("tags") {
            collected.extend(tags::parse_tags_field(value));
        }
        if video_id.is_some() {
            collected.insert(VIDEO_TAG);
        }
        if self.tag_category && !category.is_empty() {
            collected.insert(category);
        }

        NormalizedFrontMatter {
            title: title_from_file_name(file_name),
            description: fields
                .get("description")
                .map(unquote)
                .unwrap_or_default()
                .to_string(),
            date: fields.get("date created").and_then(dates::normalize),
            updated: fields.get("date modified").and_then(dates::normalize),
            video_id,
            tags: collected,
        }
    }
}

/// Converts with default options.
pub fn transform(file_name: &str, text: &str, category: &str) -> Option<String> {
    Transformer::new().transform(file_name, text, category)
}

/// File name with its extension removed. Only the last extension goes, and a
/// leading dot counts as an extension separator (`.md` has an empty title).
pub fn title_from_file_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name.to_string(),
    }
}

/// Strips one pair of surrounding double quotes, if both are present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Drops hashtags, trims, then rewrites wiki-links. Tags are stripped first,
/// so a `#heading` inside a wiki-link is removed along with the rest of its token.
pub fn convert_body(body: &str) -> String {
    let cleaned = tags::strip_hashtags(body);
    links::rewrite_wikilinks(cleaned.trim())
}

/// Serializes front matter and body in the fixed field order.
pub fn render(fm: &NormalizedFrontMatter, body: &str) -> String {
    let mut out = String::from("---\n");
    out.push_str(&format!("title: {}\n", fm.title));
    out.push_str(&format!("description: {}\n", fm.description));
    if let Some(date) = &fm.date {
        out.push_str(&format!("date: {}\n", date));
    }
    if let Some(updated) = &fm.updated {
        out.push_str(&format!("updated: {}\n", updated));
    }
    if let Some(video_id) = &fm.video_id {
        out.push_str(&format!("videoId: {}\n", video_id));
    }
    let tags = serde_json::Value::from(fm.tags.as_slice().to_vec());
    out.push_str(&format!("tags: {}\n", tags));
    out.push_str("---\n\n");
    out.push_str(body);
    out
}
