//! Validated record store paths.

use std::fmt::Display;

use crate::Error;

const RESERVED_CHARACTERS: [char; 5] = ['.', '#', '$', '[', ']'];

/// A validated path into the record store.
///
/// The empty path is the root of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPath {
    segments: Vec<String>,
}

impl RecordPath {
    /// Parse a slash separated path.
    ///
    /// Leading and trailing slashes are ignored, so `"/expenses/"` and
    /// `"expenses"` are the same path.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPath] if the path has an empty segment (`"a//b"`)
    /// or a segment with one of the characters `.`, `#`, `$`, `[` or `]`.
    pub fn parse(path: &str) -> Result<Self, Error> {
        let trimmed = path.trim_matches('/');

        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let segments = trimmed
            .split('/')
            .map(|segment| {
                if segment.is_empty() || segment.contains(RESERVED_CHARACTERS) {
                    Err(Error::InvalidPath(path.to_owned()))
                } else {
                    Ok(segment.to_owned())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    /// The root of the store.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Whether this is the root of the store.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path below this one at `key`.
    ///
    /// `key` may itself contain slashes to address a deeper descendant.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPath] if `key` is empty or not a valid path.
    pub fn child(&self, key: &str) -> Result<Self, Error> {
        let relative = Self::parse(key)?;

        if relative.is_root() {
            return Err(Error::InvalidPath(key.to_owned()));
        }

        let mut segments = self.segments.clone();
        segments.extend(relative.segments);

        Ok(Self { segments })
    }

    /// The last segment of the path, `None` for the root.
    pub fn key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Every proper prefix of this path, excluding the root.
    pub fn ancestors(&self) -> impl Iterator<Item = RecordPath> + '_ {
        (1..self.segments.len()).map(|len| RecordPath {
            segments: self.segments[..len].to_vec(),
        })
    }
}

impl Display for RecordPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
