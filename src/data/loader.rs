use std::fs;
use std::io;
use std::path::Path;

use super::error::LoadError;

/// Width of one sample in bytes.
pub const SAMPLE_WIDTH: usize = 2;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Decode a sample file into a sequence of native-endian `i16`.
///
/// The size limit and the empty check run on file metadata only, so a rejected
/// file is never read. The whole body is sample data: there is no header, and
/// a trailing odd byte is dropped.
pub fn decode(path: &Path, max_size_kib: u64) -> Result<Vec<i16>, LoadError> {
    let unreadable = |source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(unreadable)?;
    if metadata.is_dir() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }
    check_size(metadata.len(), max_size_kib)?;

    let bytes = fs::read(path).map_err(unreadable)?;
    if bytes.len() % SAMPLE_WIDTH != 0 {
        log::debug!(
            "{}: ignoring trailing byte of odd-length file ({} bytes)",
            path.display(),
            bytes.len()
        );
    }
    Ok(decode_bytes(&bytes))
}

/// Reinterpret raw bytes as native-endian `i16`, one per byte pair.
pub fn decode_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(SAMPLE_WIDTH)
        .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
        .collect()
}

/// Size limits, applied in order: too large first, then empty.
fn check_size(size_bytes: u64, max_size_kib: u64) -> Result<(), LoadError> {
    let size_kib = size_bytes as f64 / 1024.0;
    if size_kib > max_size_kib as f64 {
        return Err(LoadError::TooLarge {
            size_kib,
            max_kib: max_size_kib,
        });
    }
    if size_bytes == 0 {
        return Err(LoadError::Empty);
    }
    Ok(())
}
