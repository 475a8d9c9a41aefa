//! Splits body lines into tag fragments and classifies their shape.

use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\s*([^</>\s]+)\s*>\s*$").expect("BUG: invalid OPEN_TAG_RE regex literal")
});

static CLOSE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^</\s*([^</>\s]+)\s*>\s*$").expect("BUG: invalid CLOSE_TAG_RE regex literal")
});

static FULL_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\s*([^</>\s]+)\s*>(.*?)</\s*([^</>\s]+)\s*>\s*$")
        .expect("BUG: invalid FULL_VALUE_RE regex literal")
});

static PARTIAL_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\s*([^</>\s]+)\s*>(.+)$").expect("BUG: invalid PARTIAL_VALUE_RE regex literal")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]*);")
        .expect("BUG: invalid ENTITY_RE regex literal")
});

/// The shape of a single tag fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'t> {
    /// `<NAME>` with nothing after it.
    Open(&'t str),
    /// `</NAME>`.
    Close(&'t str),
    /// `<NAME>VALUE</NAME>`; the closing name is known to match.
    FullValue { name: &'t str, value: &'t str },
    /// `<NAME>VALUE`; a closing tag may still follow as its own fragment.
    PartialValue { name: &'t str, value: &'t str },
}

impl<'t> Fragment<'t> {
    pub fn name(&self) -> &'t str {
        match self {
            Fragment::Open(name) | Fragment::Close(name) => name,
            Fragment::FullValue { name, .. } | Fragment::PartialValue { name, .. } => name,
        }
    }
}

/// Splits a physical line on `<` and restores the delimiter on every piece
/// that carries a `>`. Blank pieces are dropped.
pub fn fragments(line: &str) -> impl Iterator<Item = Cow<'_, str>> {
    line.split('<')
        .filter(|piece| !piece.trim().is_empty())
        .map(|piece| {
            if piece.contains('>') {
                Cow::Owned(format!("<{}", piece))
            } else {
                Cow::Borrowed(piece)
            }
        })
}

/// Matches a fragment against the four tag shapes, in precedence order.
///
/// `names_match` decides whether the two names of a full value tag agree.
pub fn classify<'t>(
    fragment: &'t str,
    names_match: impl Fn(&str, &str) -> bool,
) -> Option<Fragment<'t>> {
    if let Some(caps) = OPEN_TAG_RE.captures(fragment) {
        return caps.get(1).map(|m| Fragment::Open(m.as_str()));
    }
    if let Some(caps) = CLOSE_TAG_RE.captures(fragment) {
        return caps.get(1).map(|m| Fragment::Close(m.as_str()));
    }
    if let Some(caps) = FULL_VALUE_RE.captures(fragment) {
        let (name, value, closing) = (caps.get(1)?, caps.get(2)?, caps.get(3)?);
        if names_match(closing.as_str(), name.as_str()) {
            return Some(Fragment::FullValue {
                name: name.as_str(),
                value: value.as_str(),
            });
        }
        return None;
    }
    let caps = PARTIAL_VALUE_RE.captures(fragment)?;
    Some(Fragment::PartialValue {
        name: caps.get(1)?.as_str(),
        value: caps.get(2)?.as_str(),
    })
}

/// Replaces HTML character and entity references in a value.
///
/// References are resolved one at a time. A bare `&` or an unknown name is
/// copied through unchanged.
pub fn decode_entities(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    ENTITY_RE.replace_all(value, |caps: &Captures<'_>| match resolve_reference(&caps[1]) {
        Some(text) => text,
        None => {
            log::debug!("Keeping unknown reference '{}'", &caps[0]);
            caps[0].to_string()
        }
    })
}

/// Resolves `name`, `#233` or `#xE9` (the text between `&` and `;`).
fn resolve_reference(reference: &str) -> Option<String> {
    let code = match reference.strip_prefix('#') {
        Some(number) => match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        },
        None => return resolve_html5_entity(reference).map(str::to_string),
    };
    char::from_u32(code).map(String::from)
}
