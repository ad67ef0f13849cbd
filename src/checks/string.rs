//! Checks for character sequences.
//!
//! Lengths come in three units:
//!
//! - bytes of the UTF-8 encoding: [`len`], [`min_len`], [`max_len`], ...
//! - characters (Unicode scalar values): [`char_count`], [`min_char_count`], ...
//! - distinct characters: [`unique_char_count`], [`min_unique_char_count`], ...
//!
//! Character class checks ([`numeric`], [`alpha`], [`alphanumeric`],
//! [`ascii`]) look at ASCII only, with every bound inclusive;
//! [`unicode_letters`] and [`unicode_digits`] classify by Unicode general
//! category. All of them accept the empty string.
//!
//! A `&str` is always well-formed UTF-8, so [`utf8`] checks raw bytes.

use std::collections::HashSet;

use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::check::Check;
use crate::checks::{counted, Count};
use crate::error::{BuildError, Violation};

const BYTES: &str = "bytes";
const CHARS: &str = "characters";
const UNIQUE_CHARS: &str = "distinct characters";

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn unique_chars(s: &str) -> usize {
    s.chars().collect::<HashSet<char>>().len()
}

/// Passes strings of exactly `n` bytes.
pub fn len(n: usize) -> Check<str> {
    counted(Count::Exactly(n), str::len, "len", BYTES)
}

/// Passes strings of at least `n` bytes.
///
/// ```rust
/// use verdict::checks::string::min_len;
///
/// let check = min_len(3);
/// assert!(check.is_valid("abc"));
/// assert_eq!(check.validate("ab").unwrap_err().message, "must contain at least 3 bytes");
/// ```
pub fn min_len(n: usize) -> Check<str> {
    counted(Count::AtLeast(n), str::len, "len", BYTES)
}

/// Passes strings of at most `n` bytes.
pub fn max_len(n: usize) -> Check<str> {
    counted(Count::AtMost(n), str::len, "len", BYTES)
}

/// Passes strings whose byte length lies in the closed range spanned by
/// `x` and `y`.
pub fn len_between(x: usize, y: usize) -> Check<str> {
    counted(Count::within(x, y), str::len, "len", BYTES)
}

/// Passes strings whose byte length lies outside the closed range spanned by
/// `x` and `y`.
pub fn len_not_between(x: usize, y: usize) -> Check<str> {
    counted(Count::outside(x, y), str::len, "len", BYTES)
}

/// Passes strings of exactly `n` characters.
pub fn char_count(n: usize) -> Check<str> {
    counted(Count::Exactly(n), char_len, "char_count", CHARS)
}

/// Passes strings of at least `n` characters.
pub fn min_char_count(n: usize) -> Check<str> {
    counted(Count::AtLeast(n), char_len, "char_count", CHARS)
}

/// Passes strings of at most `n` characters.
pub fn max_char_count(n: usize) -> Check<str> {
    counted(Count::AtMost(n), char_len, "char_count", CHARS)
}

/// Passes strings whose character count lies in the closed range spanned by
/// `x` and `y`.
pub fn char_count_between(x: usize, y: usize) -> Check<str> {
    counted(Count::within(x, y), char_len, "char_count", CHARS)
}

/// Passes strings whose character count lies outside the closed range
/// spanned by `x` and `y`.
pub fn char_count_not_between(x: usize, y: usize) -> Check<str> {
    counted(Count::outside(x, y), char_len, "char_count", CHARS)
}

/// Passes strings with exactly `n` distinct characters.
pub fn unique_char_count(n: usize) -> Check<str> {
    counted(Count::Exactly(n), unique_chars, "unique_char_count", UNIQUE_CHARS)
}

/// Passes strings with at least `n` distinct characters.
pub fn min_unique_char_count(n: usize) -> Check<str> {
    counted(Count::AtLeast(n), unique_chars, "unique_char_count", UNIQUE_CHARS)
}

/// Passes strings with at most `n` distinct characters.
pub fn max_unique_char_count(n: usize) -> Check<str> {
    counted(Count::AtMost(n), unique_chars, "unique_char_count", UNIQUE_CHARS)
}

/// Passes strings whose distinct character count lies in the closed range
/// spanned by `x` and `y`.
pub fn unique_char_count_between(x: usize, y: usize) -> Check<str> {
    counted(Count::within(x, y), unique_chars, "unique_char_count", UNIQUE_CHARS)
}

/// Passes strings whose distinct character count lies outside the closed
/// range spanned by `x` and `y`.
pub fn unique_char_count_not_between(x: usize, y: usize) -> Check<str> {
    counted(Count::outside(x, y), unique_chars, "unique_char_count", UNIQUE_CHARS)
}

/// Passes byte strings that are well-formed UTF-8.
///
/// The decoder's diagnostic is kept in the message.
pub fn utf8() -> Check<[u8]> {
    Check::new(|bytes: &[u8]| {
        std::str::from_utf8(bytes).map(|_| ()).map_err(|err| {
            Violation::new(format!("must be valid UTF-8: {}", err))
                .with_code("utf8")
                .with_expected("valid UTF-8")
                .with_got(format!("{:?}", bytes))
        })
    })
}

/// Passes strings containing `needle`.
pub fn contains(needle: impl Into<String>) -> Check<str> {
    let needle = needle.into();
    let message = format!("must contain {:?}", needle);
    Check::ensure(
        move |s: &str| s.contains(needle.as_str()),
        move |s: &str| violation(&message, "contains", s),
    )
}

/// Passes strings not containing `needle`.
pub fn not_contains(needle: impl Into<String>) -> Check<str> {
    let needle = needle.into();
    let message = format!("must not contain {:?}", needle);
    Check::ensure(
        move |s: &str| !s.contains(needle.as_str()),
        move |s: &str| violation(&message, "not_contains", s),
    )
}

/// Passes strings starting with `prefix`.
pub fn has_prefix(prefix: impl Into<String>) -> Check<str> {
    let prefix = prefix.into();
    let message = format!("must start with {:?}", prefix);
    Check::ensure(
        move |s: &str| s.starts_with(prefix.as_str()),
        move |s: &str| violation(&message, "has_prefix", s),
    )
}

/// Passes strings not starting with `prefix`.
pub fn not_has_prefix(prefix: impl Into<String>) -> Check<str> {
    let prefix = prefix.into();
    let message = format!("must not start with {:?}", prefix);
    Check::ensure(
        move |s: &str| !s.starts_with(prefix.as_str()),
        move |s: &str| violation(&message, "not_has_prefix", s),
    )
}

/// Passes strings ending with `suffix`.
pub fn has_suffix(suffix: impl Into<String>) -> Check<str> {
    let suffix = suffix.into();
    let message = format!("must end with {:?}", suffix);
    Check::ensure(
        move |s: &str| s.ends_with(suffix.as_str()),
        move |s: &str| violation(&message, "has_suffix", s),
    )
}

/// Passes strings not ending with `suffix`.
pub fn not_has_suffix(suffix: impl Into<String>) -> Check<str> {
    let suffix = suffix.into();
    let message = format!("must not end with {:?}", suffix);
    Check::ensure(
        move |s: &str| !s.ends_with(suffix.as_str()),
        move |s: &str| violation(&message, "not_has_suffix", s),
    )
}

/// Passes strings made only of the ASCII digits `0` to `9`.
pub fn numeric() -> Check<str> {
    only(char::is_ascii_digit, "numeric", "must contain only numeric characters")
}

/// Passes strings made only of the ASCII letters `a` to `z` and `A` to `Z`.
pub fn alpha() -> Check<str> {
    only(
        char::is_ascii_alphabetic,
        "alpha",
        "must contain only alphabet characters",
    )
}

/// Passes strings made only of ASCII letters and digits.
pub fn alphanumeric() -> Check<str> {
    only(
        char::is_ascii_alphanumeric,
        "alphanumeric",
        "must contain only alphanumeric characters",
    )
}

/// Passes strings made only of printable, non-space ASCII (`!` to `~`).
pub fn ascii() -> Check<str> {
    only(
        char::is_ascii_graphic,
        "ascii",
        "must contain only printable ascii characters",
    )
}

/// Passes strings made only of Unicode letters (general category `L`).
///
/// Letter numbers such as `'Ⅷ'` and combining marks are not letters.
pub fn unicode_letters() -> Check<str> {
    only(
        |c: &char| {
            matches!(
                get_general_category(*c),
                GeneralCategory::UppercaseLetter
                    | GeneralCategory::LowercaseLetter
                    | GeneralCategory::TitlecaseLetter
                    | GeneralCategory::ModifierLetter
                    | GeneralCategory::OtherLetter
            )
        },
        "unicode_letters",
        "must contain only unicode letters",
    )
}

/// Passes strings made only of Unicode decimal digits (general category
/// `Nd`), in any script.
///
/// ```rust
/// use verdict::checks::string::unicode_digits;
///
/// assert!(unicode_digits().is_valid("42٣"));
/// assert!(!unicode_digits().is_valid("½"));
/// ```
pub fn unicode_digits() -> Check<str> {
    only(
        |c: &char| get_general_category(*c) == GeneralCategory::DecimalNumber,
        "unicode_digits",
        "must contain only unicode digits",
    )
}

/// Passes strings whose every character appears in `charset`.
///
/// ```rust
/// use verdict::checks::string::allow;
///
/// let hex = allow("0123456789abcdef");
/// assert!(hex.is_valid("c0ffee"));
///
/// let violation = hex.validate("coffee").unwrap_err();
/// assert_eq!(violation.got.as_deref(), Some("'o'"));
/// ```
pub fn allow(charset: impl Into<String>) -> Check<str> {
    let allowed: HashSet<char> = charset.into().chars().collect();
    let mut listed: Vec<char> = allowed.iter().copied().collect();
    listed.sort_unstable();
    let message = format!(
        "must contain only allowed characters: {:?}",
        listed.iter().collect::<String>()
    );
    Check::new(move |s: &str| match s.chars().find(|c| !allowed.contains(c)) {
        None => Ok(()),
        Some(c) => Err(Violation::new(message.clone())
            .with_code("allow")
            .with_got(format!("{:?}", c))),
    })
}

/// Passes strings containing none of the characters in `charset`.
pub fn not_allow(charset: impl Into<String>) -> Check<str> {
    let charset = charset.into();
    let denied: HashSet<char> = charset.chars().collect();
    let message = format!("must not contain disallowed characters: {:?}", charset);
    Check::new(move |s: &str| match s.chars().find(|c| denied.contains(c)) {
        None => Ok(()),
        Some(c) => Err(Violation::new(message.clone())
            .with_code("not_allow")
            .with_got(format!("{:?}", c))),
    })
}

/// Passes strings matching the regular expression `pattern`.
///
/// # Errors
///
/// Returns [`BuildError::InvalidPattern`] if `pattern` does not compile.
///
/// ```rust
/// use verdict::checks::string::pattern;
///
/// let slug = pattern(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
/// assert!(slug.is_valid("hello-world"));
/// assert!(!slug.is_valid("Hello World"));
///
/// assert!(pattern("[unclosed").is_err());
/// ```
pub fn pattern(pattern: &str) -> Result<Check<str>, BuildError> {
    let regex = Regex::new(pattern).map_err(|source| BuildError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let message = format!("must match pattern '{}'", pattern);
    Ok(Check::ensure(
        move |s: &str| regex.is_match(s),
        move |s: &str| violation(&message, "pattern", s),
    ))
}

fn violation(message: &str, code: &str, got: &str) -> Violation {
    Violation::new(message).with_code(code).with_got(got)
}

/// Builds a check that passes when every character satisfies `class`,
/// reporting the first character that does not.
fn only(class: fn(&char) -> bool, code: &'static str, message: &'static str) -> Check<str> {
    Check::new(move |s: &str| match s.chars().find(|c| !class(c)) {
        None => Ok(()),
        Some(c) => Err(Violation::new(message)
            .with_code(code)
            .with_got(format!("{:?}", c))),
    })
}
