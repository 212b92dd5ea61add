//! Character-level emoji detection.
//!
//! A character counts as an emoji if it is `Extended_Pictographic` or a skin
//! tone modifier. Digits, `#` and `*` are not emoji on their own, and
//! multi-codepoint sequences are counted one codepoint at a time.

use std::sync::LazyLock;

use regex::Regex;

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Extended_Pictographic}\p{Emoji_Modifier}]$").expect("emoji pattern is valid")
});

/// Returns `true` if `c` is an emoji character.
///
/// ```rust
/// use chatstat::emoji::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('7'));
/// ```
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_RE.is_match(c.encode_utf8(&mut buf))
}

/// Emoji characters of `text`, in order.
pub fn emojis_in(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|&c| is_emoji(c))
}
