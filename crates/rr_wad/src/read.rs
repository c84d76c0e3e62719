//! Reading WAD archives
//!

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use binrw::BinRead;
use byteorder::ReadBytesExt;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::member::Member;
use crate::types::{WadHeader, WadRecord};
use crate::Wad;

impl Wad {
    /// Read a WAD archive from disk, collecting the members it contains.
    ///
    /// Every member is created non-resident, pointing back into the archive
    /// file by offset and size; its bytes are read on first access through
    /// [`crate::Member::data`]. A file that does not start with the `WWAD`
    /// magic fails with [`Error::InvalidArchive`]; any short read fails the
    /// whole load and no partial archive is returned.
    #[instrument(skip_all, err)]
    pub fn load(path: impl AsRef<Path>) -> Result<Wad> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);

        let header = match WadHeader::read(&mut reader) {
            Ok(header) => header,
            Err(binrw::Error::BadMagic { .. }) => return Err(Error::InvalidArchive),
            Err(e) => return Err(e.into()),
        };

        let names = Self::get_names(&mut reader, header.entries)?;
        // The source-name table only has to be consumed to keep the cursor
        // positioned; decoded members are located by offset and size alone.
        let _sources = Self::get_names(&mut reader, header.entries)?;
        let records = Self::get_records(&mut reader, header.entries)?;

        let mut wad = Wad::new();
        names.into_iter().zip(records).for_each(|(name, record)| {
            wad.add(Member::from_wad(
                name,
                path,
                record.version,
                record.size,
                record.offset,
            ));
        });

        Ok(wad)
    }

    fn get_records<R: Read + Seek>(reader: &mut R, count: u32) -> Result<Vec<WadRecord>> {
        (0..count)
            .map(|_| WadRecord::read(reader).map_err(Error::from))
            .collect()
    }

    fn get_names<R: Read>(reader: &mut R, count: u32) -> Result<Vec<String>> {
        (0..count)
            .map(|_| {
                let mut name_raw: Vec<u8> = Vec::new();
                loop {
                    let char = reader.read_u8()?;
                    if char == b'\0' {
                        break;
                    }
                    name_raw.push(char);
                }
                Ok(String::from_utf8_lossy(&name_raw).into_owned())
            })
            .collect()
    }
}
