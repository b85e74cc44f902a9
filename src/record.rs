use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::group::GroupRegion;

/// Persisted form of a [`GroupRegion`].
///
/// Field names and order are stable: `title`, `bounding`, `color`,
/// `font_size`, `flags`. Bounding values are rounded to integers on
/// serialize and taken verbatim on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub title: String,
    pub bounding: [i32; 4],
    pub color: String,
    #[serde(default)]
    pub font_size: f32,
    /// Open attribute bag; `None` when the record predates flags.
    #[serde(default)]
    pub flags: Option<Map<String, Value>>,
}

/// Error parsing a persisted group record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed group record: {0}")]
    Json(#[from] serde_json::Error),
}

impl GroupRecord {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl GroupRegion {
    /// Produce the persisted record: bounding rounded to the nearest
    /// integer, everything else verbatim. The flags bag is always emitted.
    pub fn to_record(&self) -> GroupRecord {
        GroupRecord {
            title: self.title.clone(),
            bounding: self.bounding().map(|v| v.round() as i32),
            color: self.color.clone(),
            font_size: self.raw_font_size(),
            flags: Some(self.flags().clone()),
        }
    }

    /// Bulk-load from a persisted record, overwriting title, bounding,
    /// color and flags. A record without a flags bag keeps the current
    /// flags; a zero font size keeps the current font size (asymmetric
    /// with [`to_record`], which always emits one).
    ///
    /// [`to_record`]: GroupRegion::to_record
    pub fn load_record(&mut self, record: &GroupRecord) {
        self.title = record.title.clone();
        self.set_bounding(record.bounding.map(|v| v as f32));
        self.color = record.color.clone();
        if let Some(flags) = &record.flags {
            self.replace_flags(flags.clone());
        }
        if record.font_size != 0.0 {
            self.set_raw_font_size(record.font_size);
        }
    }
}
