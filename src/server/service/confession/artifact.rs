//! Display artifacts posted for confessions, replies and log mirrors.
//!
//! Rendered titles carry the index as a `(#N)` suffix and descriptions quote the content
//! verbatim. Messages posted before the confession map stored content are read back by
//! parsing those two patterns.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::server::model::{
    platform::{ArtifactEmbed, FetchedMessage},
    submission::Submitter,
};

/// Palette a confession's accent color is drawn from.
pub const CONFESSION_COLORS: [u32; 8] = [
    0x5865F2, // blurple
    0x57F287, // green
    0xF1C40F, // gold
    0xE91E63, // magenta
    0xED4245, // red
    0xE67E22, // orange
    0x1ABC9C, // teal
    0x9B59B6, // purple
];

const CONFESSION_LOG_COLOR: u32 = 0x99AAB5;
const REPLY_LOG_COLOR: u32 = 0x3498DB;

/// Embed field values are capped at 1024 characters by Discord.
const FIELD_VALUE_LIMIT: usize = 1024;

static TITLE_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)\)").expect("title index pattern is valid"));

static REPLYING_TO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Replying to #\d+\n\n").expect("reply prefix pattern is valid"));

fn random_color() -> u32 {
    CONFESSION_COLORS[rand::rng().random_range(0..CONFESSION_COLORS.len())]
}

fn numbered(title: &str, index: i64, content: &str, attachment_url: Option<String>) -> ArtifactEmbed {
    ArtifactEmbed::new(format!("{} (#{})", title, index), random_color())
        .description(format!("\"{}\"", content))
        .image(attachment_url)
}

pub fn confession_embed(index: i64, content: &str, attachment_url: Option<String>) -> ArtifactEmbed {
    numbered("Anonymous Confession", index, content, attachment_url)
}

pub fn reply_embed(index: i64, content: &str, attachment_url: Option<String>) -> ArtifactEmbed {
    numbered("Anonymous Reply", index, content, attachment_url)
}

pub fn thread_name(index: i64) -> String {
    format!("Replies for #{}", index)
}

/// Reads the index out of a rendered title such as `Anonymous Reply (#12)`.
pub fn parse_index(title: &str) -> Option<i64> {
    TITLE_INDEX
        .captures(title)
        .and_then(|captures| captures[1].parse().ok())
}

/// Reads the quoted content back out of a rendered description.
pub fn parse_content(description: &str) -> String {
    REPLYING_TO_PREFIX
        .replace_all(description, "")
        .trim_matches('"')
        .to_string()
}

/// Index parsed from a fetched message's first embed.
pub fn legacy_index(message: &FetchedMessage) -> Option<i64> {
    message.title.as_deref().and_then(parse_index)
}

/// Content parsed from a fetched message's first embed.
pub fn legacy_content(message: &FetchedMessage) -> Option<String> {
    message.description.as_deref().map(parse_content)
}

fn code_block(text: &str) -> String {
    let budget = FIELD_VALUE_LIMIT - 7;
    if text.chars().count() <= budget {
        return format!("```{}```", text);
    }

    let truncated: String = text.chars().take(budget - 1).collect();
    format!("```{}…```", truncated)
}

fn submitter_line(submitter: &Submitter) -> String {
    format!("{} (`{}`)", submitter.name, submitter.user_id)
}

/// What a log mirror entry describes.
#[derive(Debug, Clone)]
pub enum LogEntry<'a> {
    Confession {
        submitter: &'a Submitter,
        index: i64,
        content: &'a str,
        attachment_url: Option<&'a str>,
    },
    Reply {
        submitter: &'a Submitter,
        index: i64,
        content: &'a str,
        attachment_url: Option<&'a str>,
        target_index: i64,
        target_content: Option<&'a str>,
    },
}

pub fn log_embed(entry: &LogEntry<'_>) -> ArtifactEmbed {
    let (embed, attachment_url) = match entry {
        LogEntry::Confession {
            submitter,
            index,
            content,
            attachment_url,
        } => (
            ArtifactEmbed::new("New Confession Log", CONFESSION_LOG_COLOR)
                .field("User", submitter_line(submitter))
                .field(format!("New Confession (#{})", index), code_block(content)),
            attachment_url,
        ),
        LogEntry::Reply {
            submitter,
            index,
            content,
            attachment_url,
            target_index,
            target_content,
        } => {
            let embed = ArtifactEmbed::new("New Reply Log", REPLY_LOG_COLOR)
                .field("Replier", submitter_line(submitter))
                .field(format!("New Reply (#{})", index), code_block(content));

            let embed = match target_content {
                Some(original) => embed.field(
                    format!("Original Confession (#{})", target_index),
                    code_block(original),
                ),
                None => embed.field(
                    "Original Confession",
                    format!("Replying to #{}", target_index),
                ),
            };

            (embed, attachment_url)
        }
    };

    match attachment_url {
        Some(url) => embed.field("Attachment", *url),
        None => embed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitter() -> Submitter {
        Submitter {
            user_id: 42,
            name: "someone".to_string(),
        }
    }

    #[test]
    fn confession_embed_numbers_and_quotes() {
        let embed = confession_embed(7, "I like pineapple on pizza", None);

        assert_eq!(embed.title, "Anonymous Confession (#7)");
        assert_eq!(
            embed.description.as_deref(),
            Some("\"I like pineapple on pizza\"")
        );
        assert!(CONFESSION_COLORS.contains(&embed.color));
        assert!(embed.image_url.is_none());
    }

    #[test]
    fn reply_embed_shows_attachment() {
        let embed = reply_embed(8, "same", Some("https://cdn.example/a.png".to_string()));

        assert_eq!(embed.title, "Anonymous Reply (#8)");
        assert_eq!(embed.image_url.as_deref(), Some("https://cdn.example/a.png"));
    }

    #[test]
    fn parses_rendered_title_and_description() {
        assert_eq!(parse_index("Anonymous Confession (#123)"), Some(123));
        assert_eq!(parse_index("Anonymous Reply (#4)"), Some(4));
        assert_eq!(parse_index("Welcome!"), None);

        assert_eq!(parse_content("\"hello there\""), "hello there");
        assert_eq!(parse_content("Replying to #3\n\n\"quoted\""), "quoted");
    }

    #[test]
    fn confession_log_names_submitter() {
        let submitter = submitter();
        let embed = log_embed(&LogEntry::Confession {
            submitter: &submitter,
            index: 5,
            content: "secret",
            attachment_url: Some("https://cdn.example/b.png"),
        });

        assert_eq!(embed.title, "New Confession Log");
        assert_eq!(embed.color, CONFESSION_LOG_COLOR);
        assert_eq!(embed.fields[0].value, "someone (`42`)");
        assert_eq!(embed.fields[1].name, "New Confession (#5)");
        assert_eq!(embed.fields[1].value, "```secret```");
        assert_eq!(embed.fields[2].name, "Attachment");
    }

    #[test]
    fn reply_log_without_original_content_names_target() {
        let submitter = submitter();
        let embed = log_embed(&LogEntry::Reply {
            submitter: &submitter,
            index: 9,
            content: "agreed",
            attachment_url: None,
            target_index: 2,
            target_content: None,
        });

        assert_eq!(embed.title, "New Reply Log");
        assert_eq!(embed.fields[0].name, "Replier");
        assert_eq!(embed.fields[2].name, "Original Confession");
        assert_eq!(embed.fields[2].value, "Replying to #2");
        assert_eq!(embed.fields.len(), 3);
    }

    #[test]
    fn long_log_content_fits_field_limit() {
        let submitter = submitter();
        let content = "a".repeat(2000);
        let embed = log_embed(&LogEntry::Confession {
            submitter: &submitter,
            index: 1,
            content: &content,
            attachment_url: None,
        });

        assert!(embed.fields[1].value.chars().count() <= FIELD_VALUE_LIMIT);
    }
}
