//! The in-memory WAD container and its directory conversions.

use std::io;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::error::{Error, FileNotFoundError, Result};
use crate::member::Member;

/// Default version tag given to members packed from a directory.
pub const DEFAULT_VERSION: u32 = 1;

/// An in-memory WAD archive: a collection of [`Member`]s keyed by unique name.
///
/// A `Wad` is built either by decoding an archive file ([`Wad::load`]) or by
/// scanning a directory tree ([`Wad::from_directory`]), and is consumed by
/// serializing it back out ([`Wad::save`]) or by materializing its members
/// into a directory tree ([`Wad::extract`]).
#[derive(Debug, Default)]
pub struct Wad {
    pub(crate) files: IndexMap<String, Member>,
}

impl Wad {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member to the archive.
    ///
    /// A member with the same name as an existing one replaces it.
    pub fn add(&mut self, member: Member) {
        self.files.insert(member.name().to_owned(), member);
    }

    /// Search for a member by name
    pub fn get(&self, name: &str) -> Result<&Member> {
        self.files
            .get(name)
            .ok_or_else(|| Error::FileNotFound(FileNotFoundError::Name(name.to_owned())))
    }

    /// Search for a member by name, for mutation
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Member> {
        self.files
            .get_mut(name)
            .ok_or_else(|| Error::FileNotFound(FileNotFoundError::Name(name.to_owned())))
    }

    /// Returns an iterator over all the member names in this archive, in
    /// insertion order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_str())
    }

    /// Number of members contained in this archive
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether this archive contains no members
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Build an archive from every regular file under `root`.
    ///
    /// Each file becomes a non-resident member named by its path relative to
    /// `root`, with version [`DEFAULT_VERSION`] and its size taken from the
    /// filesystem. Nothing is read into memory until the member's data is
    /// first requested.
    #[instrument(skip_all, err)]
    pub fn from_directory(root: impl AsRef<Path>) -> Result<Wad> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::IOError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("source directory {} does not exist", root.display()),
            )));
        }

        let mut wad = Wad::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_dir() {
                continue;
            }

            let size = u32::try_from(entry.metadata().map_err(io::Error::from)?.len())
                .map_err(|_| {
                    Error::CustomError(format!(
                        "{} is too large for a WAD entry",
                        entry.path().display()
                    ))
                })?;

            let name = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::CustomError(e.to_string()))?
                .to_string_lossy()
                .into_owned();

            debug!("adding {}", name);
            wad.add(Member::from_path(
                name,
                entry.path(),
                DEFAULT_VERSION,
                size,
            ));
        }

        Ok(wad)
    }

    /// Write every member's data out as files under `dir`.
    ///
    /// Member names are normalized to `/` separators and joined onto `dir`,
    /// creating subdirectories as needed. Members are materialized and
    /// unloaded one at a time, so memory use is bounded by the largest single
    /// member rather than the archive total.
    #[instrument(skip_all, err)]
    pub fn extract(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::IOError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("target directory {} does not exist", dir.display()),
            )));
        }

        for member in self.files.values_mut() {
            let relative = member.name().replace('\\', "/");
            let target = dir.join(&relative);

            debug!("writing {}", target.display());
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, member.data()?)?;
            member.unload();
        }

        Ok(())
    }
}
