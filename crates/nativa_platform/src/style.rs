//! Window style flags and their translation to native bitmasks
//!
//! Hosts describe window decoration with [`StyleFlag`]s. Each backend owns a
//! static [`StyleTable`] that assigns every flag a bit index in its native
//! layout; resolution is a plain OR over those bits, so the order and
//! repetition of flags never matter.

use crate::error::{PlatformError, Result};
use bitflags::bitflags;

/// One abstract window decoration or behavior attribute
///
/// The discriminants are the host-facing ordinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum StyleFlag {
    /// No decoration at all (the empty style set)
    Borderless = 0,
    /// Title bar
    Titled = 1,
    /// Close button
    Closable = 2,
    /// Minimize button
    Miniaturizable = 3,
    /// User-resizable frame
    Resizable = 4,
    /// Utility/tool window
    Utility = 5,
    /// Covers the whole screen
    FullScreen = 6,
}

impl StyleFlag {
    /// Every flag, in ordinal order
    pub const ALL: [StyleFlag; 7] = [
        StyleFlag::Borderless,
        StyleFlag::Titled,
        StyleFlag::Closable,
        StyleFlag::Miniaturizable,
        StyleFlag::Resizable,
        StyleFlag::Utility,
        StyleFlag::FullScreen,
    ];

    /// Host-facing ordinal of this flag
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for StyleFlag {
    type Error = PlatformError;

    fn try_from(ordinal: u32) -> Result<Self> {
        StyleFlag::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(PlatformError::UnknownStyleFlag(ordinal))
    }
}

bitflags! {
    /// Platform-independent set of style flags
    ///
    /// `Borderless` has no bit of its own: it is the empty set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u32 {
        const TITLED = 1 << 0;
        const CLOSABLE = 1 << 1;
        const MINIATURIZABLE = 1 << 2;
        const RESIZABLE = 1 << 3;
        const UTILITY = 1 << 4;
        const FULL_SCREEN = 1 << 5;
    }
}

impl StyleFlags {
    /// The undecorated style
    pub const BORDERLESS: StyleFlags = StyleFlags::empty();

    /// The usual document window: titled, closable, miniaturizable, resizable
    pub const STANDARD: StyleFlags = StyleFlags::TITLED
        .union(StyleFlags::CLOSABLE)
        .union(StyleFlags::MINIATURIZABLE)
        .union(StyleFlags::RESIZABLE);

    /// Build a set from raw host ordinals
    pub fn from_ordinals(ordinals: &[u32]) -> Result<Self> {
        ordinals
            .iter()
            .map(|&ordinal| StyleFlag::try_from(ordinal))
            .collect()
    }

    /// Whether `flag` is part of this set (always true for `Borderless`)
    pub fn has(self, flag: StyleFlag) -> bool {
        self.contains(StyleFlags::from(flag))
    }
}

impl From<StyleFlag> for StyleFlags {
    fn from(flag: StyleFlag) -> Self {
        match flag {
            StyleFlag::Borderless => StyleFlags::BORDERLESS,
            StyleFlag::Titled => StyleFlags::TITLED,
            StyleFlag::Closable => StyleFlags::CLOSABLE,
            StyleFlag::Miniaturizable => StyleFlags::MINIATURIZABLE,
            StyleFlag::Resizable => StyleFlags::RESIZABLE,
            StyleFlag::Utility => StyleFlags::UTILITY,
            StyleFlag::FullScreen => StyleFlags::FULL_SCREEN,
        }
    }
}

impl FromIterator<StyleFlag> for StyleFlags {
    fn from_iter<I: IntoIterator<Item = StyleFlag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StyleFlags::empty(), |set, flag| set | StyleFlags::from(flag))
    }
}

/// A style resolved to a backend's native bit layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NativeStyleMask(pub u64);

impl NativeStyleMask {
    /// Raw native bits
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Whether the bit at `index` is set
    pub fn is_set(self, index: u32) -> bool {
        index < u64::BITS && self.0 & (1 << index) != 0
    }
}

/// Static flag → native bit index table of one backend
#[derive(Clone, Copy, Debug)]
pub struct StyleTable {
    entries: &'static [(StyleFlag, u32)],
}

impl StyleTable {
    /// Create a table; `Borderless` never needs an entry
    pub const fn new(entries: &'static [(StyleFlag, u32)]) -> Self {
        Self { entries }
    }

    /// The `(flag, bit index)` pairs of this table
    pub fn entries(&self) -> &'static [(StyleFlag, u32)] {
        self.entries
    }

    /// Native bit index assigned to `flag`
    pub fn bit(&self, flag: StyleFlag) -> Option<u32> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == flag)
            .map(|&(_, bit)| bit)
    }

    /// OR the native bits of every flag
    pub fn resolve<I>(&self, flags: I) -> NativeStyleMask
    where
        I: IntoIterator<Item = StyleFlag>,
    {
        self.resolve_set(flags.into_iter().collect())
    }

    /// Resolve an already-collected flag set
    pub fn resolve_set(&self, flags: StyleFlags) -> NativeStyleMask {
        let bits = self
            .entries
            .iter()
            .filter(|(flag, _)| flags.has(*flag))
            .fold(0u64, |mask, &(_, bit)| mask | (1 << bit));
        NativeStyleMask(bits)
    }

    /// Resolve raw host ordinals, rejecting any outside the enumeration
    pub fn resolve_ordinals(&self, ordinals: &[u32]) -> Result<NativeStyleMask> {
        Ok(self.resolve_set(StyleFlags::from_ordinals(ordinals)?))
    }

    /// Recover the flag set from a native mask; bits outside the table are ignored
    pub fn decode(&self, mask: NativeStyleMask) -> StyleFlags {
        self.entries
            .iter()
            .filter(|(_, bit)| mask.is_set(*bit))
            .map(|&(flag, _)| flag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: StyleTable = StyleTable::new(&[
        (StyleFlag::Titled, 0),
        (StyleFlag::Closable, 1),
        (StyleFlag::Miniaturizable, 2),
        (StyleFlag::Resizable, 3),
        (StyleFlag::Utility, 4),
        (StyleFlag::FullScreen, 14),
    ]);

    fn subsets() -> impl Iterator<Item = Vec<StyleFlag>> {
        (0u32..1 << StyleFlag::ALL.len()).map(|bits| {
            StyleFlag::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, flag)| *flag)
                .collect()
        })
    }

    #[test]
    fn test_decode_inverts_resolve_for_every_subset() {
        for flags in subsets() {
            let expected: StyleFlags = flags.iter().copied().collect();
            assert_eq!(TABLE.decode(TABLE.resolve(flags.clone())), expected);
        }
    }

    #[test]
    fn test_resolve_ignores_order_and_duplicates() {
        let a = TABLE.resolve([StyleFlag::Titled, StyleFlag::Resizable]);
        let b = TABLE.resolve([
            StyleFlag::Resizable,
            StyleFlag::Titled,
            StyleFlag::Resizable,
            StyleFlag::Titled,
        ]);
        assert_eq!(a, b);
        assert_eq!(a.bits(), 0b1001);
    }

    #[test]
    fn test_borderless_is_empty() {
        assert_eq!(TABLE.resolve([StyleFlag::Borderless]), NativeStyleMask(0));
        assert_eq!(
            TABLE.resolve([StyleFlag::Borderless, StyleFlag::Closable]),
            TABLE.resolve([StyleFlag::Closable])
        );
        assert!(StyleFlags::BORDERLESS.has(StyleFlag::Borderless));
    }

    #[test]
    fn test_unknown_ordinal_is_rejected() {
        let err = TABLE.resolve_ordinals(&[1, 2, 7]).unwrap_err();
        assert!(matches!(err, PlatformError::UnknownStyleFlag(7)));
        assert_eq!(err.kind(), crate::ErrorKind::Configuration);
    }

    #[test]
    fn test_ordinals_match_flags() {
        for flag in StyleFlag::ALL {
            assert_eq!(StyleFlag::try_from(flag.ordinal()).unwrap(), flag);
        }
        let mask = TABLE.resolve_ordinals(&[1, 2, 4]).unwrap();
        assert_eq!(
            TABLE.decode(mask),
            StyleFlags::TITLED | StyleFlags::CLOSABLE | StyleFlags::RESIZABLE
        );
    }

    #[test]
    fn test_decode_ignores_foreign_bits() {
        let mask = NativeStyleMask((1 << 0) | (1 << 40));
        assert_eq!(TABLE.decode(mask), StyleFlags::TITLED);
    }
}
