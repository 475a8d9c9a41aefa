//! Resolution of the `ENCODING`/`CHARSET` header pair to a byte-to-text decoder.
//!
//! Resolution never fails: an unknown encoding or charset falls back to
//! [`TextDecoder::platform_default`], which decodes as UTF-8.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::fmt;

/// A concrete decoder for the bytes of a document body.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TextDecoder {
    /// Strict 7-bit ASCII. Bytes above `0x7F` decode to `?`.
    Ascii,
    /// ISO-8859-1, every byte mapped to the code point of the same value.
    Latin1,
    /// Any decoder known to `encoding_rs` (Windows code pages, UTF-8, ...).
    Codec(&'static Encoding),
}

impl TextDecoder {
    pub fn utf8() -> Self {
        TextDecoder::Codec(UTF_8)
    }

    pub fn windows_1252() -> Self {
        TextDecoder::Codec(WINDOWS_1252)
    }

    /// The decoder used when a declared encoding cannot be honoured.
    pub fn platform_default() -> Self {
        Self::utf8()
    }

    /// A stable, human-readable name, mostly for logging and assertions.
    pub fn name(&self) -> &'static str {
        match self {
            TextDecoder::Ascii => "us-ascii",
            TextDecoder::Latin1 => "iso-8859-1",
            TextDecoder::Codec(encoding) => encoding.name(),
        }
    }

    /// Decodes `bytes`, replacing malformed sequences instead of failing.
    pub fn decode<'b>(&self, bytes: &'b [u8]) -> Cow<'b, str> {
        match self {
            TextDecoder::Ascii => {
                if bytes.is_ascii() {
                    // ASCII is valid UTF-8, so this borrows without copying.
                    String::from_utf8_lossy(bytes)
                } else {
                    Cow::Owned(
                        bytes
                            .iter()
                            .map(|&b| if b.is_ascii() { b as char } else { '?' })
                            .collect(),
                    )
                }
            }
            TextDecoder::Latin1 => encoding_rs::mem::decode_latin1(bytes),
            TextDecoder::Codec(encoding) => {
                let (text, _, had_errors) = encoding.decode(bytes);
                if had_errors {
                    log::warn!(
                        "Malformed {} input was replaced during decoding",
                        encoding.name()
                    );
                }
                text
            }
        }
    }
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Debug for TextDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextDecoder({})", self.name())
    }
}

/// The two values the `ENCODING` header field may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredEncoding {
    /// `USASCII`: narrow mode, the `CHARSET` field picks the code page.
    UsAscii,
    /// `UTF-8`: the `CHARSET` field is ignored.
    Utf8,
}

impl DeclaredEncoding {
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("USASCII") || name.eq_ignore_ascii_case("US-ASCII") {
            Some(DeclaredEncoding::UsAscii)
        } else if name.eq_ignore_ascii_case("UTF-8") || name.eq_ignore_ascii_case("UTF8") {
            Some(DeclaredEncoding::Utf8)
        } else {
            None
        }
    }
}

/// Picks the body decoder for a declared `(ENCODING, CHARSET)` pair.
pub fn resolve(encoding: &str, charset: &str) -> TextDecoder {
    let decoder = match DeclaredEncoding::parse(encoding) {
        Some(DeclaredEncoding::Utf8) => TextDecoder::utf8(),
        Some(DeclaredEncoding::UsAscii) => resolve_charset(charset),
        None => {
            log::warn!(
                "Unrecognized encoding '{}', using the default decoder",
                encoding
            );
            TextDecoder::platform_default()
        }
    };
    log::debug!(
        "Resolved ENCODING:{} CHARSET:{} to {}",
        encoding,
        charset,
        decoder.name()
    );
    decoder
}

fn resolve_charset(charset: &str) -> TextDecoder {
    let charset = charset.trim();
    if charset == "1252" {
        return TextDecoder::windows_1252();
    }
    if charset.eq_ignore_ascii_case("ISO-8859-1") {
        return TextDecoder::Latin1;
    }
    if charset.eq_ignore_ascii_case("NONE") {
        return TextDecoder::Ascii;
    }
    if let Some(encoding) = lookup_label(charset) {
        return TextDecoder::Codec(encoding);
    }
    log::warn!(
        "Unknown charset '{}', using the default decoder",
        charset
    );
    TextDecoder::platform_default()
}

/// Looks a charset up by label. Bare numbers are retried as Windows code pages.
fn lookup_label(charset: &str) -> Option<&'static Encoding> {
    if charset.is_empty() {
        return None;
    }
    Encoding::for_label(charset.as_bytes()).or_else(|| {
        charset
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| format!("windows-{}", charset))
            .and_then(|label| Encoding::for_label(label.as_bytes()))
    })
}
