//! Decompression of container entries.
//!
//! Entries are stored as raw deflate streams: no zlib or gzip header and no
//! trailing checksum.

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;

use crate::v8::types::error::{V8Error, Result};

/// Inflates a raw deflate stream.
///
/// A stream that runs out of input before its final block is an error, never
/// a partial result.
///
/// # Errors
/// Returns [`V8Error::DecompressionError`] on a corrupt or truncated stream.
pub fn inflate_raw(payload: &[u8]) -> Result<Vec<u8>> {
    let mut decompress = Decompress::new(false);
    let mut output: Vec<u8> = Vec::with_capacity(payload.len().saturating_mul(3).max(64));

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.capacity().max(1024));
        }

        let consumed = decompress.total_in();
        let produced = decompress.total_out();
        let status = decompress
            .decompress_vec(&payload[consumed as usize..], &mut output, FlushDecompress::None)
            .map_err(|e| V8Error::DecompressionError(format!("Raw deflate decompression failed: {}", e)))?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                if decompress.total_in() == consumed && decompress.total_out() == produced {
                    return Err(V8Error::DecompressionError(format!(
                        "Raw deflate stream ended unexpectedly after {} of {} input bytes",
                        consumed,
                        payload.len()
                    )));
                }
            }
        }
    }

    trace!("Inflated {} bytes -> {} bytes", payload.len(), output.len());
    Ok(output)
}
