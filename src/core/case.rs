//! Case and word-boundary conversions.
//!
//! All conversions are single-pass regex rewrites. Compiled patterns are
//! cached in `OnceLock` statics.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Uppercase a single character, which may expand to several (e.g. 'ß' -> "SS").
fn upper(c: &str) -> String {
    c.to_uppercase()
}

/// Convert separated words to camelCase (e.g., "background-color" -> "backgroundColor").
///
/// Surrounding whitespace is trimmed. Each run of `-`, `_` or whitespace is
/// removed and the character after it uppercased; a trailing run is dropped.
/// The first character keeps its case, so a leading separator produces
/// PascalCase: `"_hello_world"` -> `"HelloWorld"`.
pub fn to_camel_case(s: &str) -> String {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATOR.get_or_init(|| Regex::new(r"[-_\s]+(.)?").unwrap());

    re.replace_all(s.trim(), |caps: &Captures| {
        caps.get(1).map(|c| upper(c.as_str())).unwrap_or_default()
    })
    .into_owned()
}

/// Convert to PascalCase (e.g., "foo_bar-baz" -> "FooBarBaz").
///
/// Every maximal ASCII alphanumeric run becomes one word; everything else is
/// dropped.
pub fn to_pascal_case(s: &str) -> String {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let re = WORD.get_or_init(|| Regex::new(r"[a-zA-Z0-9]+").unwrap());

    re.find_iter(s).map(|word| first_uppercase(word.as_str())).collect()
}

/// Uppercase the first character only.
///
/// An empty string is returned unchanged.
pub fn first_uppercase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Uppercase the first character of every whitespace-separated word.
pub fn uppercase_words(s: &str) -> String {
    static WORD_START: OnceLock<Regex> = OnceLock::new();
    let re = WORD_START.get_or_init(|| Regex::new(r"(^|\s+)(\S)").unwrap());

    re.replace_all(s, |caps: &Captures| format!("{}{}", &caps[1], upper(&caps[2])))
        .into_owned()
}

/// Convert kebab-case to camelCase (e.g., "background-color" -> "backgroundColor").
pub fn kebab_to_camel(s: &str) -> String {
    static HYPHEN: OnceLock<Regex> = OnceLock::new();
    let re = HYPHEN.get_or_init(|| Regex::new(r"-(.)").unwrap());

    re.replace_all(s, |caps: &Captures| upper(&caps[1])).into_owned()
}

/// Convert camelCase to kebab-case (e.g., "backgroundColor" -> "background-color").
pub fn camel_to_kebab(s: &str) -> String {
    join_humps(s, "-")
}

/// Convert camelCase or kebab-case to snake_case (e.g., "backgroundColor" -> "background_color").
pub fn to_snake_case(s: &str) -> String {
    join_humps(s, "_").replace('-', "_")
}

fn join_humps(s: &str, separator: &str) -> String {
    static HUMP: OnceLock<Regex> = OnceLock::new();
    let re = HUMP.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

    re.replace_all(s, |caps: &Captures| format!("{}{}{}", &caps[1], separator, &caps[2]))
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("background-color"), "backgroundColor");
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("_hello_world"), "HelloWorld");
        assert_eq!(to_camel_case("-webkit-x"), "WebkitX");
        assert_eq!(to_camel_case("  foo bar  "), "fooBar");
        assert_eq!(to_camel_case("foo -_ bar"), "fooBar");
    }

    #[test]
    fn test_to_camel_case_trailing_separator() {
        assert_eq!(to_camel_case("x-"), "x");
        assert_eq!(to_camel_case("x__"), "x");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("foo_bar-baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("v2 api"), "V2Api");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("--__"), "");
    }

    #[test]
    fn test_first_uppercase() {
        assert_eq!(first_uppercase("hello"), "Hello");
        assert_eq!(first_uppercase("Hello"), "Hello");
        assert_eq!(first_uppercase("élan"), "Élan");
        assert_eq!(first_uppercase(""), "");
    }

    #[test]
    fn test_uppercase_words() {
        assert_eq!(uppercase_words("hello world"), "Hello World");
        assert_eq!(uppercase_words("hello   big\tworld"), "Hello   Big\tWorld");
        assert_eq!(uppercase_words(" leading space"), " Leading Space");
        assert_eq!(uppercase_words("mIxEd case"), "MIxEd Case");
        assert_eq!(uppercase_words(""), "");
    }

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("background-color"), "backgroundColor");
        assert_eq!(kebab_to_camel("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(kebab_to_camel("plain"), "plain");
        assert_eq!(kebab_to_camel("trailing-"), "trailing-");
    }

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("backgroundColor"), "background-color");
        assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(camel_to_kebab("h1Title"), "h1-title");
        assert_eq!(camel_to_kebab("HTML"), "html");
    }

    #[test]
    fn test_kebab_camel_round_trip() {
        for word in ["backgroundColor", "borderTopLeftRadius", "zIndex", "color"] {
            assert_eq!(kebab_to_camel(&camel_to_kebab(word)), word);
        }
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("backgroundColor"), "background_color");
        assert_eq!(to_snake_case("background-color"), "background_color");
        assert_eq!(to_snake_case("plain"), "plain");
    }
}
