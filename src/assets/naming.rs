use std::collections::BTreeMap;

use crate::foundation::error::{ReelError, ReelResult};

/// Default directory of the legacy frame set.
pub const LEGACY_DIR: &str = "images";
/// First sequence number of the legacy frame set.
pub const LEGACY_FIRST: u32 = 2;
/// Last sequence number (inclusive) of the legacy frame set.
pub const LEGACY_LAST: u32 = 27;

/// One resolved frame: its external sequence number and where to fetch it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameEntry {
    /// External order number.
    pub sequence_number: u32,
    /// Source-relative URI of the encoded image.
    pub uri: String,
}

/// How sequence numbers map to asset URIs.
///
/// Resolution always yields entries in ascending sequence-number order; the position in that list
/// is the dense zero-based frame index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameNaming {
    /// Exported frame set naming: `frame000{n}1.png` below 10 and `frame00{n}1.png` from 10 up.
    ///
    /// The padding shrinks by one digit at 10 while the trailing `1` stays. Names are reproduced
    /// byte for byte so the stock asset folder loads unchanged.
    Legacy {
        /// Directory holding the frames, relative to the frame source root.
        #[serde(default = "default_legacy_dir")]
        dir: String,
        /// First sequence number (inclusive).
        #[serde(default = "default_legacy_first")]
        first: u32,
        /// Last sequence number (inclusive).
        #[serde(default = "default_legacy_last")]
        last: u32,
    },
    /// Explicit `{sequence number → uri}` table.
    Table {
        /// Entries keyed by sequence number. JSON object keys are decimal strings.
        #[serde(deserialize_with = "de_table_entries")]
        entries: BTreeMap<u32, String>,
    },
}

// Internally tagged enums buffer their input, so map keys arrive as strings and are parsed here.
fn de_table_entries<'de, D>(d: D) -> Result<BTreeMap<u32, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: BTreeMap<String, String> = serde::Deserialize::deserialize(d)?;
    raw.into_iter()
        .map(|(key, uri)| {
            key.trim().parse::<u32>().map(|n| (n, uri)).map_err(|_| {
                <D::Error as serde::de::Error>::custom(format!(
                    "frame table key '{key}' is not a sequence number"
                ))
            })
        })
        .collect()
}

fn default_legacy_dir() -> String {
    LEGACY_DIR.to_owned()
}

fn default_legacy_first() -> u32 {
    LEGACY_FIRST
}

fn default_legacy_last() -> u32 {
    LEGACY_LAST
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self::Legacy {
            dir: default_legacy_dir(),
            first: LEGACY_FIRST,
            last: LEGACY_LAST,
        }
    }
}

impl FrameNaming {
    /// Build a table naming from `(sequence_number, uri)` pairs.
    pub fn table<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self::Table {
            entries: pairs.into_iter().map(|(n, s)| (n, s.into())).collect(),
        }
    }

    /// Check the naming without resolving it.
    pub fn validate(&self) -> ReelResult<()> {
        match self {
            Self::Legacy { first, last, .. } => {
                if first > last {
                    return Err(ReelError::validation(format!(
                        "legacy frame range is empty: first {first} > last {last}"
                    )));
                }
            }
            Self::Table { entries } => {
                if entries.is_empty() {
                    return Err(ReelError::validation("frame table has no entries"));
                }
                if let Some((n, _)) = entries.iter().find(|(_, uri)| uri.trim().is_empty()) {
                    return Err(ReelError::validation(format!(
                        "frame table entry {n} has an empty uri"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve to frames in playback order.
    pub fn resolve(&self) -> ReelResult<Vec<FrameEntry>> {
        self.validate()?;
        let out = match self {
            Self::Legacy { dir, first, last } => (*first..=*last)
                .map(|n| FrameEntry {
                    sequence_number: n,
                    uri: join_dir(dir, &legacy_file_name(n)),
                })
                .collect(),
            Self::Table { entries } => entries
                .iter()
                .map(|(n, uri)| FrameEntry {
                    sequence_number: *n,
                    uri: uri.clone(),
                })
                .collect(),
        };
        Ok(out)
    }
}

/// File name for sequence number `n` under the legacy scheme.
pub fn legacy_file_name(n: u32) -> String {
    if n < 10 {
        format!("frame000{n}1.png")
    } else {
        format!("frame00{n}1.png")
    }
}

fn join_dir(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_owned()
    } else {
        format!("{dir}/{file}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
