use std::fmt;

/// A `major.minor.revision` triple read from a three-digit header code
/// such as `102`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl Version {
    /// Sentinel for a code that could not be parsed. No three-digit code maps to it.
    pub const INVALID: Version = Version {
        major: u8::MAX,
        minor: u8::MAX,
        revision: u8::MAX,
    };

    /// The only `OFXHEADER` value accepted for the tag-soup dialect.
    pub const TAG_SOUP_HEADER: Version = Version::new(1, 0, 0);

    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Parses exactly three ASCII digits, returning [`Version::INVALID`] otherwise.
    pub fn parse(code: &str) -> Version {
        match code.trim().as_bytes() {
            [a, b, c] if a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() => {
                Version::new(a - b'0', b - b'0', c - b'0')
            }
            _ => Version::INVALID,
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Version::INVALID
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::INVALID
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
        } else {
            f.write_str("invalid")
        }
    }
}
