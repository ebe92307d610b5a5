//! Whitespace, template and i18n text helpers.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::config::{I18N_CALL_PREFIXES, I18N_QUOTES, UNDEFINED_PLACEHOLDER};
use crate::core::error::TemplateError;
use crate::core::template::TemplateValues;

/// Remove every whitespace or line terminator character, not just ASCII spaces.
///
/// Matches the ECMAScript `\s` class: the byte order mark U+FEFF counts as
/// whitespace, the next-line control U+0085 does not.
pub fn remove_spaces(s: &str) -> String {
    s.chars().filter(|&c| !is_script_whitespace(c)).collect()
}

fn is_script_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Placeholder pattern. Greedy: `${a} and ${b}` on one line is one match
/// whose key is `a} and ${b`. A match never crosses a line terminator
/// (`\n`, `\r`, U+2028, U+2029).
fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{[^\n\r\x{2028}\x{2029}]+\}").unwrap())
}

fn placeholder_key<'h>(caps: &Captures<'h>) -> &'h str {
    let matched = caps.get(0).map_or("", |m| m.as_str());
    &matched[2..matched.len() - 1]
}

/// Substitute `${key}` placeholders with values.
///
/// Keys without a value are written as `undefined`.
pub fn replace_keys<V: TemplateValues + ?Sized>(s: &str, values: &V) -> String {
    placeholder()
        .replace_all(s, |caps: &Captures| {
            values
                .lookup(placeholder_key(caps))
                .unwrap_or_else(|| UNDEFINED_PLACEHOLDER.to_string())
        })
        .into_owned()
}

/// Substitute `${key}` placeholders, failing on the first key without a value.
pub fn replace_keys_strict<V: TemplateValues + ?Sized>(
    s: &str,
    values: &V,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for caps in placeholder().captures_iter(s) {
        let Some(whole) = caps.get(0) else { continue };
        let key = placeholder_key(&caps);
        let value = values
            .lookup(key)
            .ok_or_else(|| TemplateError::MissingKey(key.to_string()))?;

        result.push_str(&s[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }

    result.push_str(&s[last..]);
    Ok(result)
}

/// Extract the key from a translation call such as `t('key')` or `$t("key")`.
///
/// Returns `None` unless the text starts with `t(` or `$t(` and ends with `)`.
/// One surrounding quote on each side is stripped if present.
pub fn get_i18n_key(s: &str) -> Option<&str> {
    let args = I18N_CALL_PREFIXES
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix))?
        .strip_suffix(')')?;

    let args = args.strip_prefix(I18N_QUOTES).unwrap_or(args);
    Some(args.strip_suffix(I18N_QUOTES).unwrap_or(args))
}
