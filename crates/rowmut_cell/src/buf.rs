//! Buffer normalisation helpers.
//!
//! Column data reaches the mutation layer either as plain slices or as
//! [`Buf`] views with a read cursor. Both end up as owned [`Bytes`].

use bytes::{Buf, Bytes};
use std::fmt::Write;

/// Copies the remaining bytes of `buf` into a freshly allocated [`Bytes`].
///
/// Unlike [`Buf::copy_to_bytes`], this never shares storage with the source,
/// even when `buf` is itself a [`Bytes`].
pub fn copy_remaining<B: Buf>(mut buf: B) -> Bytes {
    let mut out = Vec::with_capacity(buf.remaining());
    while buf.has_remaining() {
        let chunk = buf.chunk();
        out.extend_from_slice(chunk);
        let len = chunk.len();
        buf.advance(len);
    }
    Bytes::from(out)
}

/// Renders bytes for logs and summaries.
///
/// Printable ASCII is emitted verbatim; everything else as `\xHH`.
pub fn to_string_binary(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b.is_ascii_alphanumeric() || b" `~!@#$%^&*()-_=+[]{}|;:'\",.<>/?".contains(&b) {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "\\x{b:02X}");
        }
    }
    out
}
