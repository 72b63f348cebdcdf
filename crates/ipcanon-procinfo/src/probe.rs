//! Buffer sizing for listing syscalls that report truncation by
//! filling the destination completely.

/// Headroom applied to a count probe before the real listing call, so a
/// process spawned between the two calls still fits.
const PROBE_HEADROOM_PERCENT: usize = 10;

/// Capacity to allocate after a count probe returned `count` entries.
pub fn listing_capacity(count: usize) -> usize {
    let padded = count + count * PROBE_HEADROOM_PERCENT / 100;
    padded.max(1)
}

/// Next capacity after a listing call came back saturated. A result
/// shorter than `capacity` means the listing was complete and no retry
/// is needed.
pub fn grow_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(1)
}
