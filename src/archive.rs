//! Archive writer capability.
//!
//! The pipeline assembles the export as in-memory `(path, bytes)` entries
//! and hands them to an [`ArchiveWriter`]. Keeping the writer behind a trait
//! lets the packaging stages run and be tested without producing a real
//! archive; [`ZipArchiveWriter`] is the production backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;

use crate::error::Result;

/// One file destined for the output archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive, `/`-separated.
    pub path: String,
    /// Serialized file content.
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }
}

/// Writes a set of entries as a single archive file.
pub trait ArchiveWriter {
    /// Creates the archive at `dest` containing exactly `entries`.
    fn write(&self, dest: &Path, entries: &[ArchiveEntry]) -> Result<()>;
}

/// Production backend: a deflate-compressed zip.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveWriter;

impl ArchiveWriter for ZipArchiveWriter {
    fn write(&self, dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
        let file = File::create(dest)?;
        let mut zip = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for entry in entries {
            zip.start_file(entry.path.as_str(), options)?;
            zip.write_all(&entry.bytes)?;
        }

        zip.finish()?;
        Ok(())
    }
}
