//! Input reading for BED-like sources
//!
//! Opens plain, gzip or bzip2 compressed files behind a single buffered
//! reader, detecting the format by extension or magic bytes.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::core::error::RecordParseError;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression format for input files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file path and/or content
///
/// - .gz extension or gzip magic bytes (1f 8b)
/// - .bz2 extension or bzip2 magic bytes (42 5a 68)
/// - Plain text otherwise
pub fn detect_compression(path: &Path) -> Result<CompressionFormat, RecordParseError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    // First check by extension
    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    // Then check by magic bytes
    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        // BZ2 magic: "BZh"
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Open a possibly compressed file as a buffered reader
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, RecordParseError> {
    if !path.exists() {
        return Err(RecordParseError::FileNotFound(path.to_path_buf()));
    }

    let format = detect_compression(path)?;
    let file = File::open(path)?;

    let reader: Box<dyn BufRead> = match format {
        CompressionFormat::Gzip => {
            let decoder = flate2::read::GzDecoder::new(file);
            Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, decoder))
        }
        CompressionFormat::Bzip2 => {
            let decoder = bzip2::read::BzDecoder::new(file);
            Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, decoder))
        }
        CompressionFormat::Plain => Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)),
    };

    Ok(reader)
}
