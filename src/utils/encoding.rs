//! Text decoding for reference documents and config files.
//!
//! Files are treated as UTF-8. A leading UTF-8 BOM is dropped so a heading on
//! the first line still matches, and invalid sequences become U+FFFD instead
//! of failing the read.

use encoding_rs::UTF_8;

/// Decode `bytes` as UTF-8, removing a leading BOM.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::debug!("Replaced invalid UTF-8 sequences while decoding {} bytes", bytes.len());
    }
    text.into_owned()
}
