//! Song, setlist and lyric line model.
//!
//! Songs are ordered lists of lyric lines. A line may carry an absolute
//! time and a reference to the section (verse, chorus, ...) it belongs to.
//! The JSON representation uses camelCase field names.

mod error;
mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::SongError;
pub use store::{JsonSongStore, SongStore};

/// Kind of song section.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Verse,
    Chorus,
    Bridge,
    Intro,
    Outro,
    Instrumental,
    Custom,
}

impl SectionType {
    /// Display name used by the prompter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verse => "Verse",
            Self::Chorus => "Chorus",
            Self::Bridge => "Bridge",
            Self::Intro => "Intro",
            Self::Outro => "Outro",
            Self::Instrumental => "Instrumental",
            Self::Custom => "Section",
        }
    }
}

/// Section membership of a lyric line.
///
/// `start_time`/`end_time` are attributes of the section identity: when set,
/// they are expected on every line that shares the same [`SectionKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRef {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl SectionRef {
    pub fn new(section_type: SectionType) -> Self {
        Self {
            section_type,
            label: None,
            number: None,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_bounds(mut self, start: f64, end: f64) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Identity key of this section.
    pub fn key(&self) -> SectionKey {
        SectionKey {
            section_type: self.section_type,
            number: self.number,
            label: self.label.clone(),
        }
    }

    /// Both bounds, if the section is fully timed.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Human readable title, e.g. "Verse 2" or the custom label.
    pub fn title(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match self.number {
            Some(n) => format!("{} {}", self.section_type.name(), n),
            None => self.section_type.name().to_string(),
        }
    }
}

/// Identity of a section: two lines belong to the same section iff their
/// keys are equal. Start/end times are not part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub section_type: SectionType,
    pub number: Option<u32>,
    pub label: Option<String>,
}

impl SectionKey {
    /// Key of a line's section, `None` for lines outside any section.
    pub fn of(line: &LyricLine) -> Option<Self> {
        line.section.as_ref().map(SectionRef::key)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section_type.name())?;
        if let Some(n) = self.number {
            write!(f, " {}", n)?;
        }
        if let Some(label) = &self.label {
            write!(f, " ({})", label)?;
        }
        Ok(())
    }
}

/// A single lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionRef>,
}

impl LyricLine {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            time_seconds: None,
            section: None,
        }
    }

    pub fn at(mut self, time: f64) -> Self {
        self.time_seconds = Some(time);
        self
    }

    pub fn in_section(mut self, section: SectionRef) -> Self {
        self.section = Some(section);
        self
    }
}

/// A song: metadata plus lyric lines in performance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub lines: Vec<LyricLine>,
}

impl Song {
    /// Check the timing invariants of every line.
    ///
    /// Times must be finite and non-negative, section numbers positive, and a
    /// section's end must not precede its start.
    pub fn validate(&self) -> Result<(), SongError> {
        if let Some(duration) = self.duration_seconds {
            if !duration.is_finite() || duration < 0.0 {
                return Err(SongError::InvalidDuration { value: duration });
            }
        }

        for (index, line) in self.lines.iter().enumerate() {
            if let Some(time) = line.time_seconds {
                check_time(index, "timeSeconds", time)?;
            }

            let Some(section) = &line.section else {
                continue;
            };
            if section.number == Some(0) {
                return Err(SongError::InvalidSectionNumber { line: index });
            }
            if let Some(start) = section.start_time {
                check_time(index, "startTime", start)?;
            }
            if let Some(end) = section.end_time {
                check_time(index, "endTime", end)?;
            }
            if let Some((start, end)) = section.bounds() {
                if end < start {
                    return Err(SongError::InvertedSection {
                        line: index,
                        start,
                        end,
                    });
                }
            }
        }

        Ok(())
    }

    /// Time of the last timed line, used when the song has no explicit duration.
    pub fn last_line_time(&self) -> Option<f64> {
        self.lines.iter().rev().find_map(|line| line.time_seconds)
    }

    /// Duration to display and to stop the clock at.
    pub fn effective_duration(&self) -> Option<f64> {
        self.duration_seconds.or_else(|| self.last_line_time())
    }
}

fn check_time(line: usize, field: &'static str, value: f64) -> Result<(), SongError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SongError::InvalidTime { line, field, value })
    }
}

/// An ordered list of songs referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub songs: Vec<String>,
}
