use std::fmt;

/// A region a short number is dialed from.
///
/// Region codes are CLDR two-letter codes. Everything that is not one of them
/// (the "ZZ" unknown code, non-geographical "001", empty or malformed strings,
/// a missing region) is represented by [`RegionCode::Unknown`], which never
/// resolves to any metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionCode {
    Region([u8; 2]),
    Unknown,
}

impl RegionCode {
    /// Resolves a region code string. Lowercase input is accepted.
    pub fn parse(region_code: &str) -> Self {
        let bytes = region_code.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Self::Unknown;
        }
        let code = [bytes[0].to_ascii_uppercase(), bytes[1].to_ascii_uppercase()];
        if &code == b"ZZ" {
            return Self::Unknown;
        }
        Self::Region(code)
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn as_str(&self) -> &str {
        match self {
            // always ascii uppercase letters, see `parse`
            Self::Region(code) => std::str::from_utf8(code).unwrap_or(Self::zz()),
            Self::Unknown => Self::zz(),
        }
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RegionCode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<&String> for RegionCode {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<Option<&str>> for RegionCode {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or(Self::Unknown)
    }
}

impl From<&RegionCode> for RegionCode {
    fn from(value: &RegionCode) -> Self {
        *value
    }
}
