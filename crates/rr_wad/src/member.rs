//! Types for the entries stored inside a WAD archive.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where a non-resident member's bytes can be re-derived from.
///
/// The two cases are fixed at construction time, so resolving never has to
/// guess from a file extension whether an offset applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// A byte range inside a WAD archive file
    Wad {
        /// Path of the archive file
        path: PathBuf,
        /// Absolute byte position of the data within the archive
        offset: u32,
        /// Length of the data in bytes
        size: u32,
    },

    /// A standalone file on disk, read in full
    File {
        /// Path of the file
        path: PathBuf,
    },
}

/// Residency state of a member's bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Payload {
    #[default]
    NotLoaded,
    Loaded(Vec<u8>),
}

/// One logical file inside a WAD archive.
///
/// A member's bytes are fetched lazily through [`Member::data`] and can be
/// released again with [`Member::unload`], so processing a large archive entry
/// by entry never needs more memory than the largest single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    version: u32,
    size: u32,
    locator: Option<Locator>,
    payload: Payload,
}

impl Member {
    /// Create an empty member with no data source.
    ///
    /// Call [`Member::set_data`] before the member is saved.
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            size: 0,
            locator: None,
            payload: Payload::NotLoaded,
        }
    }

    /// Create a member backed by a byte range inside a WAD archive file.
    pub fn from_wad(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        version: u32,
        size: u32,
        offset: u32,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            size,
            locator: Some(Locator::Wad {
                path: path.into(),
                offset,
                size,
            }),
            payload: Payload::NotLoaded,
        }
    }

    /// Create a member backed by a standalone file on disk.
    pub fn from_path(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        version: u32,
        size: u32,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            size,
            locator: Some(Locator::File { path: path.into() }),
            payload: Payload::NotLoaded,
        }
    }

    /// Get the archive-relative name of the member
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the version tag of the member
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Get the size of the member's data, in bytes
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the member's bytes are currently resident in memory
    pub fn is_loaded(&self) -> bool {
        matches!(self.payload, Payload::Loaded(_))
    }

    /// Get the member's data source, if it has one
    pub fn locator(&self) -> Option<&Locator> {
        self.locator.as_ref()
    }

    /// The filesystem path this member was packed from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        match &self.locator {
            Some(Locator::Wad { path, .. }) | Some(Locator::File { path }) => Some(path),
            None => None,
        }
    }

    /// Get the member's bytes, reading them from the locator if they are not
    /// already resident.
    ///
    /// An archive-backed member reads exactly its recorded byte range; a
    /// file-backed member reads the whole file and takes its size from the
    /// bytes read. Either way the result stays cached until
    /// [`Member::unload`] is called.
    pub fn data(&mut self) -> Result<&[u8]> {
        if matches!(self.payload, Payload::NotLoaded) {
            let bytes = self.resolve()?;
            self.size = bytes.len() as u32;
            self.payload = Payload::Loaded(bytes);
        }

        match &self.payload {
            Payload::Loaded(bytes) => Ok(bytes),
            Payload::NotLoaded => unreachable!(),
        }
    }

    /// Replace the member's bytes with a fresh buffer.
    ///
    /// The member becomes resident and its size is taken from the buffer. An
    /// archive-backed locator degrades to a whole-file one, since the member
    /// is no longer positionally tied to the archive it came from.
    pub fn set_data(&mut self, bytes: Vec<u8>) {
        self.size = bytes.len() as u32;
        self.locator = match self.locator.take() {
            Some(Locator::Wad { path, .. }) => Some(Locator::File { path }),
            other => other,
        };
        self.payload = Payload::Loaded(bytes);
    }

    /// Release the member's bytes from memory.
    ///
    /// Safe to call on an already unloaded member. A later [`Member::data`]
    /// re-reads from the locator, which must still describe valid content at
    /// that point; in particular, an archive that has since been overwritten
    /// by saving this same container will not reliably reproduce the original
    /// bytes.
    pub fn unload(&mut self) {
        self.payload = Payload::NotLoaded;
    }

    fn resolve(&self) -> Result<Vec<u8>> {
        match &self.locator {
            Some(Locator::Wad { path, offset, size }) => {
                let mut f = File::open(path)?;
                f.seek(SeekFrom::Start(u64::from(*offset)))?;
                let mut bytes = vec![0u8; *size as usize];
                f.read_exact(&mut bytes)?;
                Ok(bytes)
            }
            Some(Locator::File { path }) => Ok(std::fs::read(path)?),
            None => Err(Error::CustomError(format!(
                "member {} has no data source",
                self.name
            ))),
        }
    }
}
