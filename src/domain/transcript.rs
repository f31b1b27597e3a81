use std::fmt;

/// Lower-cased transcript text assembled from ordered fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Concatenates the fragments in order and lower-cases the result.
    /// Returns `None` when it is empty or whitespace only.
    pub fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Option<Self> {
        let joined: String = fragments.iter().map(AsRef::as_ref).collect();
        if joined.trim().is_empty() {
            return None;
        }
        Some(Self(joined.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
