//! Byte-level encoding detection for CSV exports.
//!
//! Legacy CRM exports arrive in whatever encoding the exporting machine
//! used: UTF-8 (with or without BOM), UTF-16, or a Windows code page. The
//! strategy here is BOM sniff first, strict UTF-8 validation second, and a
//! windows-1252 fallback last — windows-1252 decodes any byte sequence, so
//! the fallback cannot fail, only mis-render the rare genuinely exotic file.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Decodes raw file bytes, returning the text and the encoding name used.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        let (text, _, _) = encoding.decode(bytes);
        return (text.into_owned(), encoding.name());
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), UTF_8.name()),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            (text.into_owned(), WINDOWS_1252.name())
        }
    }
}

/// Reads a file and decodes it with automatic encoding detection.
pub fn read_to_string(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let (text, encoding) = decode_bytes(&bytes);
    debug!(
        path = %path.display(),
        encoding,
        bytes = bytes.len(),
        "decoded file"
    );
    Ok(text)
}
