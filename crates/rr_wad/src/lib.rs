//! This library handles reading from and creating **WAD** files used by *Lego Rock Raiders*.
//!
//! # WAD Archive Format Documentation
//!
//! This crate provides utilities to read and extract data from the **WAD** archive format used by
//! the game *Lego Rock Raiders*. The WAD format is a custom binary format that stores various game
//! assets within a single file. WAD files are typically identified with the `.wad` extension.
//!
//! ## File Structure
//!
//! A WAD file consists of a header, two name tables, a fixed-size record table, and the raw data
//! for each entry.
//!
//! | Offset (bytes) | Field              | Description                                              |
//! |----------------|--------------------|----------------------------------------------------------|
//! | 0x0000         | Magic number       | 4 bytes: 0x44415757 ("WWAD")                             |
//! | 0x0004         | Entry Count        | 4 bytes: Number of entries in the archive                |
//! | 0x0008         | Archive Name Table | Entry Count null-terminated archive-relative names       |
//! | ...            | Source Name Table  | Entry Count null-terminated original filesystem paths    |
//! | ...            | Record Table       | Entry Count records of 16 bytes each                     |
//! | ...            | Data               | The raw bytes of each entry, back to back                |
//!
//! ### Header
//!
//! The WAD header consists of the following fields:
//!
//! - **Magic Number**: A 4-byte identifier set to the ASCII codes for "WWAD". This helps identify
//!   the file type.
//! - **Entry Count**: A 4-byte unsigned integer indicating the number of entries in the archive.
//!
//! ### Name Tables
//!
//! Both name tables store one null-terminated string per entry, with `\` as the directory
//! separator. The archive name table holds each entry's name inside the archive; the source name
//! table holds the filesystem path each entry was packed from. Both tables precede the record
//! table in full, so a reader must buffer every name before the first record.
//!
//! ### Record Table
//!
//! Each record describes one entry and has the following structure:
//!
//! | Offset (bytes) | Field          | Description                                              |
//! |----------------|----------------|----------------------------------------------------------|
//! | 0x0000         | Version        | 4 bytes: Opaque per-entry version tag, stored unchanged  |
//! | 0x0004         | Size           | 4 bytes: Size of the entry data in bytes                 |
//! | 0x0008         | Size (again)   | 4 bytes: Duplicate of the size field                     |
//! | 0x000C         | Data Offset    | 4 bytes: Offset of the entry data from the file start    |
//!
//! The size field is stored twice; the first copy is canonical. Entry data regions are contiguous
//! and unpadded, laid out in the same order as the tables.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.wad`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Ordering**: Entries are written in case-insensitive lexicographic name order, which makes
//!   the output byte-deterministic for a given entry set
//! - **Compression**: None; all entry data is stored raw

pub mod archive;
pub mod error;
pub mod member;
pub mod read;
pub mod types;
pub mod write;

pub use archive::Wad;
pub use member::{Locator, Member};
