use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static DECLARED_ENCODING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<\?xml[^>]*?\sencoding\s*=\s*["']([A-Za-z0-9._\-]+)["']"#)
        .expect("BUG: invalid DECLARED_ENCODING_RE regex literal")
});

/// Decodes raw XML bytes: a byte-order mark wins, then the `encoding`
/// pseudo-attribute of the XML declaration, then UTF-8.
pub fn decode_document(bytes: &[u8]) -> Cow<'_, str> {
    let declared = DECLARED_ENCODING_RE
        .captures(bytes)
        .and_then(|caps| caps.get(1))
        .and_then(|label| {
            let encoding = Encoding::for_label(label.as_bytes());
            if encoding.is_none() {
                log::warn!(
                    "Unknown XML encoding '{}', decoding as UTF-8",
                    String::from_utf8_lossy(label.as_bytes())
                );
            }
            encoding
        })
        .unwrap_or(UTF_8);

    // `decode` sniffs a BOM and strips it, overriding the declared encoding.
    let (text, used, had_errors) = declared.decode(bytes);
    log::debug!("Decoded XML document as {}", used.name());
    if had_errors {
        log::warn!("Malformed {} input was replaced during decoding", used.name());
    }
    text
}
