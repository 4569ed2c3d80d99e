//! Growth policy for the tokenizer's buffers

use std::collections::TryReserveError;

/// Starting capacity of the token scratch buffer and the value array
pub const INITIAL_CAPACITY: usize = 4;

/// Push `item`, doubling the capacity first when the buffer is full
///
/// Growth goes through `try_reserve_exact` so an allocation failure comes
/// back as an error instead of aborting the process.
pub fn push_doubling<T>(buf: &mut Vec<T>, item: T) -> Result<(), TryReserveError> {
    if buf.len() == buf.capacity() {
        let additional = buf.capacity().max(INITIAL_CAPACITY);
        buf.try_reserve_exact(additional)?;
        tracing::trace!(capacity = buf.capacity(), "buffer grown");
    }
    buf.push(item);
    Ok(())
}
