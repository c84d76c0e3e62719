//! Base types for structure of WAD file.

use binrw::{BinRead, BinWrite};

/// WAD file header
///
/// Defines the header of the WAD file which always starts with "WWAD".
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(magic = b"WWAD", little)]
pub struct WadHeader {
    /// The number of entries stored in the file
    pub entries: u32,
}

/// WAD file record
///
/// Defines an entry in the WAD file. The name tables that precede the record
/// table carry the entry's archive name and original source path.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct WadRecord {
    /// An opaque version tag carried through the format unchanged
    pub version: u32,

    /// The size of the data for this entry
    pub size: u32,

    /// A duplicate of the size field, always written equal to `size`
    pub size_dup: u32,

    /// The offset to the data for this entry from the start of the file
    pub offset: u32,
}
