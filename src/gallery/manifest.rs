// SPDX-License-Identifier: MPL-2.0
//! Photo manifest loading.
//!
//! The manifest is a small XML document bundled into the binary:
//!
//! ```xml
//! <photos>
//!     <photo>
//!         <title>Rose</title>
//!         <file>rose.jpg</file>
//!     </photo>
//! </photos>
//! ```
//!
//! The scan is depth-first and name-driven: the text of a `title` element
//! becomes the pending title, the text of a `file` element the pending file
//! name, and every closing `photo` tag appends the pending pair. The root
//! element name, nesting depth and attributes are ignored.
//!
//! Element text is kept verbatim, surrounding whitespace included. Text split
//! by comments or CDATA sections is joined back together.
//!
//! Malformed input never fails the load. The scan stops at the first reader
//! error and whatever was collected up to that point is returned.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

#[derive(RustEmbed)]
#[folder = "assets/manifest/"]
struct ManifestAsset;

/// Name of the bundled manifest inside `assets/manifest/`.
pub const BUNDLED_MANIFEST: &str = "photos.xml";

const PHOTO_TAG: &[u8] = b"photo";
const TITLE_TAG: &[u8] = b"title";
const FILE_TAG: &[u8] = b"file";

/// One manifest entry. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub title: String,
    pub file_name: String,
}

impl PhotoRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file_name: file_name.into(),
        }
    }
}

/// What happens to the pending title and file name once a record is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SparseRecordPolicy {
    /// Pending values stay as defaults for the next record until overwritten.
    #[default]
    CarryOver,
    /// Both pending values are cleared after every appended record.
    Reset,
}

/// Result of a manifest scan.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    photos: Vec<PhotoRecord>,
    truncated_by: Option<Error>,
}

impl Manifest {
    /// Records in document order.
    #[must_use]
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    #[must_use]
    pub fn into_photos(self) -> Vec<PhotoRecord> {
        self.photos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The reader error that ended the scan early, if any.
    #[must_use]
    pub fn truncated_by(&self) -> Option<&Error> {
        self.truncated_by.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    File,
}

/// Pending values plus which of them the current record set itself.
#[derive(Debug, Default)]
struct Pending {
    title: String,
    file_name: String,
    title_seen: bool,
    file_seen: bool,
}

impl Pending {
    fn begin(&mut self, field: Field) {
        match field {
            Field::Title => {
                self.title.clear();
                self.title_seen = true;
            }
            Field::File => {
                self.file_name.clear();
                self.file_seen = true;
            }
        }
    }

    fn push_text(&mut self, field: Field, text: &str) {
        match field {
            Field::Title => self.title.push_str(text),
            Field::File => self.file_name.push_str(text),
        }
    }

    fn commit(&mut self, policy: SparseRecordPolicy) -> PhotoRecord {
        let record = PhotoRecord::new(self.title.clone(), self.file_name.clone());

        if !(self.title_seen && self.file_seen) {
            tracing::warn!(
                title = %record.title,
                file = %record.file_name,
                title_set = self.title_seen,
                file_set = self.file_seen,
                ?policy,
                "photo entry is missing a field"
            );
        }

        if policy == SparseRecordPolicy::Reset {
            self.title.clear();
            self.file_name.clear();
        }
        self.title_seen = false;
        self.file_seen = false;

        record
    }
}

fn field_for(local_name: &[u8]) -> Option<Field> {
    match local_name {
        TITLE_TAG => Some(Field::Title),
        FILE_TAG => Some(Field::File),
        _ => None,
    }
}

/// Parses manifest bytes into an ordered list of records.
#[must_use]
pub fn parse(xml: &[u8], policy: SparseRecordPolicy) -> Manifest {
    let mut photos = Vec::new();
    let truncated_by = scan(xml, policy, &mut photos).err();

    if let Some(err) = &truncated_by {
        tracing::warn!(
            error = %err,
            loaded = photos.len(),
            "manifest scan stopped early"
        );
    }

    Manifest {
        photos,
        truncated_by,
    }
}

fn scan(xml: &[u8], policy: SparseRecordPolicy, photos: &mut Vec<PhotoRecord>) -> Result<()> {
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut pending = Pending::default();
    let mut capturing: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                capturing = field_for(e.local_name().as_ref());
                if let Some(field) = capturing {
                    pending.begin(field);
                }
            }
            Event::Empty(ref e) => {
                let local_name = e.local_name();
                if let Some(field) = field_for(local_name.as_ref()) {
                    pending.begin(field);
                } else if local_name.as_ref() == PHOTO_TAG {
                    photos.push(pending.commit(policy));
                }
                capturing = None;
            }
            Event::Text(ref e) => {
                if let Some(field) = capturing {
                    let text = e
                        .unescape()
                        .map_err(|err| Error::Manifest(err.to_string()))?;
                    pending.push_text(field, &text);
                }
            }
            Event::CData(ref e) => {
                if let Some(field) = capturing {
                    pending.push_text(field, &String::from_utf8_lossy(&**e));
                }
            }
            Event::End(ref e) => {
                let local_name = e.local_name();
                if local_name.as_ref() == PHOTO_TAG {
                    let record = pending.commit(policy);
                    tracing::debug!(
                        index = photos.len(),
                        title = %record.title,
                        file = %record.file_name,
                        "manifest record"
                    );
                    photos.push(record);
                }
                capturing = None;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Loads the manifest compiled into the binary.
#[must_use]
pub fn load_bundled(policy: SparseRecordPolicy) -> Manifest {
    match ManifestAsset::get(BUNDLED_MANIFEST) {
        Some(file) => parse(file.data.as_ref(), policy),
        None => {
            tracing::warn!(manifest = BUNDLED_MANIFEST, "bundled manifest not found");
            Manifest::default()
        }
    }
}
