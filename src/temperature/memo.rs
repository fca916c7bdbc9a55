//! Per-instance cache of converted temperatures.
use std::fmt;
use std::sync::OnceLock;

use super::scale::Scale;
use super::Temperature;

/// One write-once slot per scale, filled lazily on first conversion.
///
/// Concurrent first accesses to the same slot are serialized by `OnceLock`;
/// a slot is never observed half-written.
#[derive(Default)]
pub(crate) struct Conversions {
    slots: [OnceLock<Box<Temperature>>; 4],
}

impl Conversions {
    /// Returns the cached conversion for `scale`, computing it on first use.
    pub(crate) fn get_or_convert(&self, scale: Scale, convert: impl FnOnce() -> Temperature) -> &Temperature {
        self.slots[scale.index()].get_or_init(|| Box::new(convert()))
    }

    pub(crate) fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}

// A clone is a fresh value; it recomputes its own conversions.
impl Clone for Conversions {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl fmt::Debug for Conversions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversions").field("filled", &self.filled()).finish()
    }
}
