use bittle::{Bits, BitsMut};

/// The set of opened valves, one bit per valve with a positive weight.
///
/// A bit set is canonical by construction: two sets holding the same valves
/// compare and hash equal no matter the order they were opened in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opened(u128);

impl Opened {
    /// The number of distinct valves that can be tracked.
    pub const CAPACITY: usize = 128;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Test if the valve with the given bit is open.
    #[inline]
    pub fn contains(&self, bit: u32) -> bool {
        self.0.test_bit(bit)
    }

    /// Copy of this set with the given bit added.
    #[inline]
    #[must_use]
    pub fn with(self, bit: u32) -> Self {
        let mut bits = self.0;
        bits.set_bit(bit);
        Self(bits)
    }

    /// Number of open valves.
    #[inline]
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
