//! Identifier case conversions.
//!
//! Each transform is backed by its own process-lifetime [`CachedStringFn`], created on first
//! use. "Word character" here always means ASCII `[A-Za-z0-9_]`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::cache::CachedStringFn;

type StringFn = fn(&str) -> String;

lazy_static! {
    // A hyphen followed by a word char, or a hyphen at the very end.
    static ref CAMELIZE_RE: Regex =
        Regex::new(r"-([0-9A-Za-z_]|$)").expect("Invalid camelize pattern");
    // An uppercase letter, with the non-word char before it (if any) captured so it can be
    // put back untouched.
    static ref HYPHENATE_RE: Regex =
        Regex::new(r"([^0-9A-Za-z_]?)([A-Z])").expect("Invalid hyphenate pattern");

    static ref CAMELIZE: CachedStringFn<StringFn> =
        CachedStringFn::named("camelize", camelize_uncached as StringFn);
    static ref HYPHENATE: CachedStringFn<StringFn> =
        CachedStringFn::named("hyphenate", hyphenate_uncached as StringFn);
    static ref CAPITALIZE: CachedStringFn<StringFn> =
        CachedStringFn::named("capitalize", capitalize_uncached as StringFn);
    static ref PASCAL_CASE: CachedStringFn<StringFn> =
        CachedStringFn::named("pascal_case", pascal_case_uncached as StringFn);
}

fn camelize_uncached(s: &str) -> String {
    CAMELIZE_RE
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

fn hyphenate_uncached(s: &str) -> String {
    HYPHENATE_RE
        .replace_all(s, |caps: &Captures| {
            if caps[1].is_empty() {
                format!("-{}", &caps[2])
            } else {
                caps[0].to_owned()
            }
        })
        .to_lowercase()
}

fn capitalize_uncached(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pascal_case_uncached(s: &str) -> String {
    capitalize(&camelize(s))
}

/// Converts kebab-case to camelCase.
///
/// Every `-` followed by a word character is dropped and the character uppercased. A `-` at
/// the end of the string is dropped; any other `-` is left alone.
///
/// ```
/// use analyze_utils::camelize;
///
/// assert_eq!(camelize("foo-bar"), "fooBar");
/// assert_eq!(camelize("-bar"), "Bar");
/// assert_eq!(camelize("foo-"), "foo");
/// ```
pub fn camelize(s: &str) -> String {
    CAMELIZE.call(s)
}

/// Inserts `-` before uppercase letters, then lowercases everything.
///
/// An uppercase letter gets a hyphen unless it directly follows a non-word character. The
/// start of the string does not count as one, so a leading capital is hyphenated too.
///
/// ```
/// use analyze_utils::hyphenate;
///
/// assert_eq!(hyphenate("fooBar"), "foo-bar");
/// assert_eq!(hyphenate("FooBar"), "-foo-bar");
/// assert_eq!(hyphenate("foo Bar"), "foo bar");
/// ```
pub fn hyphenate(s: &str) -> String {
    HYPHENATE.call(s)
}

/// Uppercases the first character and leaves the rest unchanged.
pub fn capitalize(s: &str) -> String {
    CAPITALIZE.call(s)
}

/// `capitalize(camelize(s))`.
pub fn pascal_case(s: &str) -> String {
    PASCAL_CASE.call(s)
}

/// Alias of [`hyphenate`].
pub fn kebab_case(s: &str) -> String {
    hyphenate(s)
}

/// Whether `s` contains a hyphen. Does not check that the segments are well formed.
pub fn is_kebab_case(s: &str) -> bool {
    s.contains('-')
}
