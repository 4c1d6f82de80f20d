use std::time::{SystemTime, UNIX_EPOCH};

/// Kind of generated artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Still PNG.
    Image,
    /// Encoded clip.
    Video,
}

/// A finished artifact: where it lives and what produced it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedMedia {
    /// Data URI or file path.
    pub url: String,
    /// Prompt as typed.
    pub prompt: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Image or video.
    pub kind: MediaKind,
}

impl GeneratedMedia {
    /// Entry stamped with the current time.
    pub fn now(url: impl Into<String>, prompt: impl Into<String>, kind: MediaKind) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        Self {
            url: url.into(),
            prompt: prompt.into(),
            timestamp,
            kind,
        }
    }
}

/// Results accumulated over a session, oldest first. The caller owns it; nothing is evicted.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MediaHistory {
    entries: Vec<GeneratedMedia>,
}

impl MediaHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, media: GeneratedMedia) {
        self.entries.push(media);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[GeneratedMedia] {
        &self.entries
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&GeneratedMedia> {
        self.entries.last()
    }

    /// Entries of one kind, oldest first.
    pub fn of_kind(&self, kind: MediaKind) -> impl Iterator<Item = &GeneratedMedia> {
        self.entries.iter().filter(move |m| m.kind == kind)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/history.rs"]
mod tests;
