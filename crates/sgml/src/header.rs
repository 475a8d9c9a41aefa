//! The `NAME:VALUE` preamble of an OFX 1.x file.

use crate::error::SgmlError;
use crate::version::Version;
use ofxtree_encoding::TextDecoder;
use regex::Regex;
use std::sync::LazyLock;

static OFXHEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^OFXHEADER:\s*(\d{3})\s*$").expect("BUG: invalid OFXHEADER_RE regex literal")
});

static HEADER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][^:\s]*)\s*:(.*)$")
        .expect("BUG: invalid HEADER_LINE_RE regex literal")
});

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The parsed header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// `OFXHEADER`: the version of the header format itself.
    pub header_version: Version,
    /// `DATA`, normally `OFXSGML`.
    pub content_type: String,
    /// `VERSION`: the schema version of the body.
    pub version: Version,
    pub security: String,
    pub encoding: String,
    pub charset: String,
    pub compression: String,
    pub old_file_uid: Option<String>,
    pub new_file_uid: Option<String>,
}

impl Header {
    pub fn is_compressed(&self) -> bool {
        !self.compression.is_empty() && !self.compression.eq_ignore_ascii_case("NONE")
    }

    fn set(&mut self, name: &str, value: &str) {
        match name.to_ascii_uppercase().as_str() {
            "DATA" => self.content_type = value.to_string(),
            "VERSION" => self.version = Version::parse(value),
            "SECURITY" => self.security = value.to_string(),
            "ENCODING" => self.encoding = value.to_string(),
            "CHARSET" => self.charset = value.to_string(),
            "COMPRESSION" => self.compression = value.to_string(),
            "OLDFILEUID" => self.old_file_uid = file_uid(value),
            "NEWFILEUID" => self.new_file_uid = file_uid(value),
            _ => log::trace!("Ignoring unknown header field {}", name),
        }
    }
}

fn file_uid(value: &str) -> Option<String> {
    (!value.is_empty() && !value.eq_ignore_ascii_case("NONE")).then(|| value.to_string())
}

/// Outcome of looking for a tag-soup header at the start of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderScan {
    /// A valid `OFXHEADER:100` block. The body starts at line index `lines_consumed`.
    TagSoup { header: Header, lines_consumed: usize },
    /// Not a tag-soup document; the caller should try another dialect.
    NotTagSoup,
}

/// Reads the header block from the physical lines of a file.
///
/// Header text is always 7-bit, so every line is decoded as ASCII.
pub fn scan_header(lines: &[&[u8]]) -> Result<HeaderScan, SgmlError> {
    let mut index = lines
        .iter()
        .position(|line| !strip_bom(line).iter().all(u8::is_ascii_whitespace))
        .unwrap_or(lines.len());
    let Some(first) = lines.get(index) else {
        log::debug!("No header found: input is blank");
        return Ok(HeaderScan::NotTagSoup);
    };

    let first = decode_ascii(strip_bom(first));
    let Some(caps) = OFXHEADER_RE.captures(first.trim()) else {
        log::debug!("No OFXHEADER line at line {}", index + 1);
        return Ok(HeaderScan::NotTagSoup);
    };
    let header_version = Version::parse(&caps[1]);
    if header_version != Version::TAG_SOUP_HEADER {
        log::debug!("OFXHEADER {} is not a tag-soup header", &caps[1]);
        return Ok(HeaderScan::NotTagSoup);
    }

    let mut header = Header {
        header_version,
        ..Header::default()
    };
    index += 1;

    while let Some(raw) = lines.get(index) {
        if !raw.first().is_some_and(u8::is_ascii_alphabetic) {
            break;
        }
        let text = decode_ascii(raw);
        let caps = HEADER_LINE_RE
            .captures(text.trim_end())
            .ok_or_else(|| SgmlError::MalformedHeader {
                line: index + 1,
                text: text.clone(),
            })?;
        header.set(&caps[1], caps[2].trim());
        index += 1;
    }

    log::debug!(
        "Read tag-soup header (VERSION {}, ENCODING {}, CHARSET {}) over {} lines",
        header.version,
        header.encoding,
        header.charset,
        index
    );
    Ok(HeaderScan::TagSoup {
        header,
        lines_consumed: index,
    })
}

fn decode_ascii(raw: &[u8]) -> String {
    TextDecoder::Ascii.decode(raw).into_owned()
}

fn strip_bom(line: &[u8]) -> &[u8] {
    line.strip_prefix(UTF8_BOM).unwrap_or(line)
}
