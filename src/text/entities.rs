//! Message entity resolution and text splicing.
//!
//! Telegram delivers formatting as a list of entities next to the plain
//! message text. For relaying we only care about links: a `TextLink` entity
//! ("click [here]") is replaced by its target URL, every other entity is
//! flattened to the text it covers.

use super::offsets::utf16_offset_to_index;
use teloxide::types::{MessageEntity, MessageEntityKind};

/// What an annotated span means for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationKind {
    /// A bare URL written in the text itself.
    PlainUrl,
    /// Display text pointing at a hidden URL.
    TextLink {
        /// Link target.
        url: String,
    },
    /// Styling, mentions, hashtags and anything else without a URL.
    Other,
}

/// A span of message text as reported by Telegram, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Start of the span in UTF-16 code units.
    pub offset: usize,
    /// Length of the span in UTF-16 code units.
    pub length: usize,
    /// Meaning of the span.
    pub kind: AnnotationKind,
}

impl Annotation {
    /// Creates an annotation over `length` units starting at `offset`.
    #[must_use]
    pub const fn new(offset: usize, length: usize, kind: AnnotationKind) -> Self {
        Self {
            offset,
            length,
            kind,
        }
    }

    /// Translates the span into byte indices of `text`.
    #[must_use]
    pub fn resolve(&self, text: &str) -> ResolvedSpan {
        let start = utf16_offset_to_index(text, self.offset);
        let end = utf16_offset_to_index(text, self.offset.saturating_add(self.length));
        ResolvedSpan {
            start,
            end,
            kind: self.kind.clone(),
        }
    }
}

impl From<&MessageEntity> for Annotation {
    fn from(entity: &MessageEntity) -> Self {
        let kind = match &entity.kind {
            MessageEntityKind::Url => AnnotationKind::PlainUrl,
            MessageEntityKind::TextLink { url } => AnnotationKind::TextLink {
                url: url.to_string(),
            },
            _ => AnnotationKind::Other,
        };
        Self::new(entity.offset, entity.length, kind)
    }
}

/// An annotation translated into byte indices of its message text.
///
/// `start <= end <= text.len()` and both lie on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Byte index where the span starts.
    pub start: usize,
    /// Byte index one past the end of the span.
    pub end: usize,
    /// Meaning of the span.
    pub kind: AnnotationKind,
}

/// Converts a list of Telegram entities into annotations.
#[must_use]
pub fn annotations_from_entities(entities: &[MessageEntity]) -> Vec<Annotation> {
    entities.iter().map(Annotation::from).collect()
}

/// Rebuilds `text` with every text link replaced by its URL.
///
/// Spans are visited in order of their start index (ties keep their original
/// order). Text between spans is copied verbatim. Overlapping spans are not
/// merged: the cursor simply moves to the end of each span in turn, so
/// overlapping entities may repeat or drop source text.
///
/// # Examples
///
/// ```
/// use deal_relay::text::{splice_annotations, Annotation, AnnotationKind};
///
/// let link = Annotation::new(6, 4, AnnotationKind::TextLink { url: "http://x".into() });
/// assert_eq!(splice_annotations("Check this", &[link]), "Check http://x");
/// ```
#[must_use]
pub fn splice_annotations(text: &str, annotations: &[Annotation]) -> String {
    if annotations.is_empty() {
        return text.to_string();
    }

    let mut spans: Vec<ResolvedSpan> = annotations.iter().map(|a| a.resolve(text)).collect();
    spans.sort_by_key(|span| span.start);

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in &spans {
        if cursor < span.start {
            result.push_str(&text[cursor..span.start]);
        }
        match &span.kind {
            AnnotationKind::TextLink { url } if !url.is_empty() => result.push_str(url),
            _ => result.push_str(&text[span.start..span.end]),
        }
        cursor = span.end;
    }

    if cursor < text.len() {
        result.push_str(&text[cursor..]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(offset: usize, length: usize, url: &str) -> Annotation {
        Annotation::new(
            offset,
            length,
            AnnotationKind::TextLink {
                url: url.to_string(),
            },
        )
    }

    #[test]
    fn test_no_annotations_returns_input() {
        assert_eq!(splice_annotations("Hello 🔥 world", &[]), "Hello 🔥 world");
    }

    #[test]
    fn test_text_link_replaced() {
        let result = splice_annotations("Check this", &[link(6, 4, "http://x")]);
        assert_eq!(result, "Check http://x");
    }

    #[test]
    fn test_plain_url_and_styles_kept() {
        let text = "Go to https://a.b now";
        let annotations = [
            Annotation::new(6, 9, AnnotationKind::PlainUrl),
            Annotation::new(0, 2, AnnotationKind::Other),
        ];
        assert_eq!(splice_annotations(text, &annotations), text);
    }

    #[test]
    fn test_empty_url_keeps_display_text() {
        assert_eq!(
            splice_annotations("Check this", &[link(6, 4, "")]),
            "Check this"
        );
    }

    #[test]
    fn test_link_after_emoji() {
        // "😱 " occupies 3 UTF-16 units; "here" starts at unit 3
        let text = "😱 here and more";
        let result = splice_annotations(text, &[link(3, 4, "https://deal.example")]);
        assert_eq!(result, "😱 https://deal.example and more");
    }

    #[test]
    fn test_unsorted_annotations() {
        let text = "one two three";
        let annotations = [link(8, 5, "C"), link(0, 3, "A")];
        assert_eq!(splice_annotations(text, &annotations), "A two C");
    }

    #[test]
    fn test_overlapping_spans_repeat_text() {
        let text = "abcdef";
        let annotations = [
            Annotation::new(0, 4, AnnotationKind::Other),
            Annotation::new(2, 2, AnnotationKind::Other),
        ];
        // Second span starts before the cursor and is emitted again
        assert_eq!(splice_annotations(text, &annotations), "abcdcdef");
    }

    #[test]
    fn test_span_past_end_is_clamped() {
        let result = splice_annotations("abc", &[link(1, 50, "X")]);
        assert_eq!(result, "aX");
    }

    #[test]
    fn test_resolve_span_indices() {
        let span = link(3, 4, "u").resolve("🔥 Big");
        assert_eq!(span.start, 5);
        assert_eq!(span.end, "🔥 Big".len());
    }

    #[test]
    fn test_from_message_entity() -> Result<(), Box<dyn std::error::Error>> {
        let url = reqwest::Url::parse("https://example.com/deal")?;
        let entities = [
            MessageEntity::new(MessageEntityKind::Url, 0, 5),
            MessageEntity::new(MessageEntityKind::TextLink { url }, 6, 4),
            MessageEntity::new(MessageEntityKind::Bold, 11, 2),
        ];
        let annotations = annotations_from_entities(&entities);
        assert_eq!(annotations[0].kind, AnnotationKind::PlainUrl);
        assert_eq!(
            annotations[1].kind,
            AnnotationKind::TextLink {
                url: "https://example.com/deal".to_string()
            }
        );
        assert_eq!(annotations[1].offset, 6);
        assert_eq!(annotations[1].length, 4);
        assert_eq!(annotations[2].kind, AnnotationKind::Other);
        Ok(())
    }
}
