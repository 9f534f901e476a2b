//! Source positions, ranges and language editions.

use crate::error::FromJSONError;
use crate::json::{FromJSON, ToJSON};

use serde::{Deserialize, Serialize};
use serde_json::Value as JSON;

use std::fmt;

/// A point in the source text.
///
/// Lines start at 1, columns at 0. A position whose line is 0 is unknown.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}
impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn is_zero(&self) -> bool {
        self.line == 0 && self.column == 0
    }

    /// `true` if this position actually points somewhere.
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The source range covered by a node.
///
/// The all-zero value means "no location"; it is exported as `null` and
/// nodes carrying it omit their `loc` key altogether.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The name of the source, if known.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub start: Position,
    #[serde(default)]
    pub end: Position,
}
impl SourceLocation {
    pub fn new(start: Position, end: Position) -> Self {
        SourceLocation {
            source: None,
            start,
            end,
        }
    }

    /// The source, unless unknown or empty.
    pub fn named_source(&self) -> Option<&str> {
        self.source.as_ref().map(String::as_str).filter(|source| !source.is_empty())
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = if source.is_empty() {
            None
        } else {
            Some(source.to_string())
        };
        self
    }

    /// `true` for the all-zero location without a source. A source, even an
    /// empty one, counts as set.
    pub fn is_zero(&self) -> bool {
        self.source.is_none() && self.start.is_zero() && self.end.is_zero()
    }
}
impl FromJSON for SourceLocation {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        if value.is_null() {
            return Ok(SourceLocation::default());
        }
        SourceLocation::deserialize(value).map_err(FromJSONError::Json)
    }
}
impl ToJSON for SourceLocation {
    fn export(&self) -> JSON {
        if self.is_zero() {
            return JSON::Null;
        }
        json!({
            "source": self.source,
            "start": { "line": self.start.line, "column": self.start.column },
            "end": { "line": self.end.line, "column": self.end.column },
        })
    }
}
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(source) = self.named_source() {
            write!(f, "{}:", source)?;
        }
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// An edition of the ECMAScript language, ordered by release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    ES5,
    ES2015,
    ES2016,
    ES2017,
    ES2018,
    ES2019,
    ES2020,
    ES2021,
}
impl Version {
    /// ES6 is another name for ES2015.
    pub const ES6: Version = Version::ES2015;

    /// The edition number, e.g. 5 for ES5 and 6 for ES2015.
    pub fn edition(self) -> u32 {
        match self {
            Version::ES5 => 5,
            Version::ES2015 => 6,
            Version::ES2016 => 7,
            Version::ES2017 => 8,
            Version::ES2018 => 9,
            Version::ES2019 => 10,
            Version::ES2020 => 11,
            Version::ES2021 => 12,
        }
    }
}
impl Default for Version {
    fn default() -> Self {
        Version::ES5
    }
}
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Version::ES5 => f.write_str("ES5"),
            Version::ES2015 => f.write_str("ES6"),
            other => write!(f, "ES{}", 2009 + other.edition()),
        }
    }
}
