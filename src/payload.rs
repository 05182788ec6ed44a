//! Helpers for crossing the opaque payload boundary.
//!
//! The emitter hands every callback the caller's bytes untouched. These
//! functions are the two halves of that convention: the emitting side views a
//! value as bytes, and the callback copies a bounded number of bytes back out
//! into a buffer it owns. Every copy is bounded by a caller-supplied length.

use bytemuck::Pod;

use crate::{Payload, PayloadError};

/// Views a plain-old-data value as a payload.
///
/// # Example
/// ```
/// use rs_fixed_events::payload;
///
/// let reading: u32 = 42;
/// assert_eq!(payload::arg(&reading), Some(&42u32.to_ne_bytes()[..]));
/// ```
pub fn arg<T: Pod>(value: &T) -> Payload<'_> {
    Some(bytemuck::bytes_of(value))
}

/// Wraps a byte buffer as a payload.
pub fn arg_bytes(bytes: &[u8]) -> Payload<'_> {
    Some(bytes)
}

/// Copies at most `max_len` bytes of `payload` into the front of `dst`.
///
/// Never reads past the end of the payload: a shorter payload copies only
/// its own length. Bytes of `dst` past the copied range are left untouched.
///
/// # Returns
/// * `Ok(n)` - The number of bytes copied.
/// * `Err(PayloadError::Missing)` - The emission carried no payload.
/// * `Err(PayloadError::TooLong { .. })` - The bytes to copy do not fit in `dst`.
///
/// # Example
/// ```
/// use rs_fixed_events::payload;
///
/// let mut value = [0u8; 6];
/// let copied = payload::read_into(&mut value, payload::arg_bytes(b"Test\0"), 5).unwrap();
/// assert_eq!(copied, 5);
/// assert_eq!(&value, b"Test\0\0");
/// ```
pub fn read_into(dst: &mut [u8], payload: Payload<'_>, max_len: usize) -> Result<usize, PayloadError> {
    let src = payload.ok_or(PayloadError::Missing)?;
    let len = max_len.min(src.len());
    if len > dst.len() {
        return Err(PayloadError::TooLong {
            len,
            capacity: dst.len(),
        });
    }
    dst[..len].copy_from_slice(&src[..len]);
    Ok(len)
}

/// Bounded copy followed by a C-string view of the copied bytes: the text
/// ends at the first NUL or at the end of the copy.
///
/// # Example
/// ```
/// use rs_fixed_events::payload;
///
/// let mut value = [0u8; 5];
/// let text = payload::read_str(&mut value, payload::arg_bytes(b"TEST\0"), 5).unwrap();
/// assert_eq!(text, "TEST");
/// ```
pub fn read_str<'a>(dst: &'a mut [u8], payload: Payload<'_>, max_len: usize) -> Result<&'a str, PayloadError> {
    let copied = read_into(dst, payload, max_len)?;
    let bytes = &dst[..copied];
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(copied);
    core::str::from_utf8(&bytes[..end]).map_err(|_| PayloadError::NotUtf8)
}

/// Reads a plain-old-data value from a payload of exactly `size_of::<T>()` bytes.
///
/// # Example
/// ```
/// use rs_fixed_events::{payload, PayloadError};
///
/// let celsius: i16 = -12;
/// assert_eq!(payload::read::<i16>(payload::arg(&celsius)), Ok(-12));
/// assert_eq!(
///     payload::read::<u32>(payload::arg(&celsius)),
///     Err(PayloadError::SizeMismatch { expected: 4, found: 2 })
/// );
/// ```
pub fn read<T: Pod>(payload: Payload<'_>) -> Result<T, PayloadError> {
    let src = payload.ok_or(PayloadError::Missing)?;
    bytemuck::try_pod_read_unaligned(src).map_err(|_| PayloadError::SizeMismatch {
        expected: core::mem::size_of::<T>(),
        found: src.len(),
    })
}
