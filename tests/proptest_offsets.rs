use deal_relay::text::{
    normalize, splice_annotations, utf16_offset_to_index, Annotation, AnnotationKind,
};
use proptest::prelude::*;

proptest! {
    /// Offset zero always maps to the start of the text.
    #[test]
    fn zero_offset_is_start(s in "\\PC*") {
        prop_assert_eq!(utf16_offset_to_index(&s, 0), 0);
    }

    /// Offsets at or past the UTF-16 length clamp to the text length.
    #[test]
    fn past_end_clamps(s in "\\PC*", extra in 0usize..64) {
        let units = s.encode_utf16().count();
        prop_assert_eq!(utf16_offset_to_index(&s, units + extra), s.len());
    }

    /// The UTF-16 length of any prefix maps back to that prefix's byte length.
    #[test]
    fn prefix_round_trip(s in "\\PC*", cut in any::<prop::sample::Index>()) {
        let boundaries: Vec<usize> = s
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(s.len()))
            .collect();
        let split = boundaries[cut.index(boundaries.len())];
        let prefix = &s[..split];
        prop_assert_eq!(utf16_offset_to_index(&s, prefix.encode_utf16().count()), split);
    }

    /// Any offset resolves to a char boundary, so slicing never panics.
    #[test]
    fn result_is_char_boundary(s in "\\PC*", offset in 0usize..256) {
        let index = utf16_offset_to_index(&s, offset);
        prop_assert!(s.is_char_boundary(index));
    }

    /// Splicing with no annotations is the identity.
    #[test]
    fn splice_without_annotations_is_identity(s in "\\PC*") {
        prop_assert_eq!(splice_annotations(&s, &[]), s);
    }

    /// Arbitrary, possibly overlapping or out-of-range spans never panic.
    #[test]
    fn splice_does_not_crash(
        s in "\\PC*",
        spans in prop::collection::vec((0usize..128, 0usize..128, any::<bool>()), 0..8)
    ) {
        let annotations: Vec<Annotation> = spans
            .into_iter()
            .map(|(offset, length, is_link)| {
                let kind = if is_link {
                    AnnotationKind::TextLink { url: "https://x.example".to_string() }
                } else {
                    AnnotationKind::Other
                };
                Annotation::new(offset, length, kind)
            })
            .collect();
        let _ = normalize(&s, &annotations);
    }

    /// Non-link spans after an emoji reproduce the original text.
    #[test]
    fn plain_spans_after_emoji_keep_text(word in "[a-z]{1,12}", tail in "[a-z ]{0,12}") {
        let text = format!("🔥{word}{tail}");
        let length = word.encode_utf16().count();
        let annotations = [Annotation::new(2, length, AnnotationKind::PlainUrl)];
        prop_assert_eq!(splice_annotations(&text, &annotations), text);
    }
}
