//! Cosmetic cleanup of relayed deal posts.
//!
//! Source posts carry a countdown line ("😱 Deal Time: ...") and a trailing
//! "Buy Now" call to action. Neither makes sense once the post is mirrored
//! into the destination channel, so both are stripped after link splicing.
//!
//! Patterns are compiled lazily through `lazy_regex!`, which also validates
//! them at compile time.

// lazy_regex! statics are built on once_cell
#![allow(clippy::non_std_lazy_statics)]

use super::entities::{splice_annotations, Annotation};
use lazy_regex::lazy_regex;

/// Match a whole "😱 Deal Time:" line together with its line break
static RE_DEAL_TIME_LINE: lazy_regex::Lazy<regex::Regex> =
    lazy_regex!(r"(?mi)^😱 Deal Time:.*(?:\n|$)");

/// Match a "Buy Now" call to action at the very end of the text
static RE_TRAILING_BUY_NOW: lazy_regex::Lazy<regex::Regex> = lazy_regex!(r"(?i)\s*Buy Now\s*$");

/// Removes every "😱 Deal Time:" line and trims the result.
///
/// # Examples
///
/// ```
/// use deal_relay::text::remove_deal_time;
///
/// let text = "Hello\n😱 Deal Time: 50% off\nBye";
/// assert_eq!(remove_deal_time(text), "Hello\nBye");
/// ```
#[must_use]
pub fn remove_deal_time(text: &str) -> String {
    RE_DEAL_TIME_LINE.replace_all(text, "").trim().to_string()
}

/// Removes a trailing "Buy Now" (any case, any surrounding whitespace) and trims.
///
/// "Buy Now" anywhere other than the end of the text is left alone.
#[must_use]
pub fn cleanup_buy_now(text: &str) -> String {
    RE_TRAILING_BUY_NOW.replace(text, "").trim().to_string()
}

/// Produces the text forwarded to the channel.
///
/// Splices text links into plain URLs, then strips the deal countdown line
/// and the trailing call to action, in that order.
#[must_use]
pub fn normalize(text: &str, annotations: &[Annotation]) -> String {
    let spliced = splice_annotations(text, annotations);
    let without_deal_time = remove_deal_time(&spliced);
    cleanup_buy_now(&without_deal_time)
}
