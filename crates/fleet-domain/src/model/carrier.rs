//! Capacity policy shared by ships and trucks

/// Anything that can hold containers up to a fixed maximum.
///
/// `is_full` compares with equality, not `>=`: callers count occupants
/// *before* attempting to add a container, so the count can never exceed
/// the maximum once every load path goes through this check.
pub trait Carrier {
    /// Maximum number of containers this carrier may hold at once.
    fn maximum_capacity(&self) -> u32;

    /// Whether the carrier has no room for another container.
    fn is_full(&self, occupants: usize) -> bool {
        occupants == self.maximum_capacity() as usize
    }
}
