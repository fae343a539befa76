//! Text normalization for relayed messages.
//!
//! Telegram entities are resolved from UTF-16 offsets, text links are spliced
//! into plain URLs and promotional boilerplate is stripped.

/// Deal-post cleanup filters and the full normalization pipeline
pub mod cleanup;
/// Entity types and link splicing
pub mod entities;
/// UTF-16 offset conversion
pub mod offsets;

pub use cleanup::{cleanup_buy_now, normalize, remove_deal_time};
pub use entities::{
    annotations_from_entities, splice_annotations, Annotation, AnnotationKind, ResolvedSpan,
};
pub use offsets::utf16_offset_to_index;
