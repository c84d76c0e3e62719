//! Writing WAD archives
//!

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use binrw::BinWrite;
use byteorder::WriteBytesExt;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{WadHeader, WadRecord};
use crate::Wad;

impl Wad {
    /// Serialize the archive to a file at `path`.
    ///
    /// See [`Wad::save_to`] for the layout guarantees.
    #[instrument(skip_all, err)]
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.save_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize the archive to a writer.
    ///
    /// Members are laid out in case-insensitive lexicographic name order, so
    /// two archives holding the same member set produce byte-identical
    /// output regardless of insertion order. Each member's data is fetched
    /// just before it is written and unloaded right after, so at most one
    /// member is resident at a time.
    ///
    /// Source names are emitted with `/` normalized to `\`; a member without
    /// a data source falls back to its archive name.
    #[instrument(skip_all, err)]
    pub fn save_to<W: Write + Seek>(&mut self, writer: &mut W) -> Result<()> {
        let mut order: Vec<String> = self.files.keys().cloned().collect();
        order.sort_by_key(|name| name.to_lowercase());

        WadHeader {
            entries: self.files.len() as u32,
        }
        .write(writer)?;

        for name in &order {
            write_cstring(writer, name)?;
        }

        for name in &order {
            let member = self
                .files
                .get(name.as_str())
                .expect("the name list is derived from the map itself");
            let source = match member.source_path() {
                Some(path) => path.to_string_lossy().into_owned(),
                None => name.clone(),
            };
            write_cstring(writer, &source.replace('/', "\\"))?;
        }

        // The fixed table is 16 bytes per entry, so the first data byte lands
        // right after it. Offsets are u32 on disk, so the layout has to stay
        // within 4 GiB even when every individual member fits.
        let start = writer.stream_position()? + 16 * self.files.len() as u64;
        let mut offset = u32::try_from(start)
            .map_err(|_| Error::CustomError("archive exceeds the WAD offset limit".into()))?;
        for name in &order {
            let member = self
                .files
                .get(name.as_str())
                .expect("the name list is derived from the map itself");
            WadRecord {
                version: member.version(),
                size: member.size(),
                size_dup: member.size(),
                offset,
            }
            .write(writer)?;
            offset = offset.checked_add(member.size()).ok_or_else(|| {
                Error::CustomError(format!(
                    "{} does not fit within the WAD offset table",
                    name
                ))
            })?;
        }

        for name in &order {
            let member = self
                .files
                .get_mut(name.as_str())
                .expect("the name list is derived from the map itself");
            writer.write_all(member.data()?)?;
            member.unload();
        }

        Ok(())
    }
}

fn write_cstring<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    writer.write_all(value.as_bytes())?;
    writer.write_u8(0u8)?;
    Ok(())
}
