//! Tracking which configuration fields a partial update touched.

use bitflags::bitflags;

bitflags! {
    /// Fields present in a partial configuration update.
    ///
    /// Widgets use these to decide between an incremental patch and a full
    /// rebuild of their node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfigChanges: u32 {
        /// No changes
        const NONE        = 0;

        // Button: structural (bits 0-3)

        /// Visual type (`primary`, `danger`, ...).
        const TYPE        = 1 << 0;
        const SIZE        = 1 << 1;
        const SHAPE       = 1 << 2;
        /// Interaction effect.
        const EFFECT      = 1 << 3;

        // Button: patchable (bits 4-13)

        const TEXT        = 1 << 4;
        const DISABLED    = 1 << 5;
        /// Loading flag, loading text or spinner kind.
        const LOADING     = 1 << 6;
        /// Foreground, background or border color.
        const COLORS      = 1 << 7;
        /// Explicit width or height.
        const DIMENSIONS  = 1 << 8;
        const ICON        = 1 << 9;
        const GRADIENT    = 1 << 10;
        /// Any of the event callbacks.
        const CALLBACKS   = 1 << 11;
        const CLASS       = 1 << 12;
        /// Free-form style map, ripple color or shadow.
        const STYLE       = 1 << 13;

        // Group (bits 16-20)

        const DIRECTION   = 1 << 16;
        const SPACING     = 1 << 17;
        const ALIGNMENT   = 1 << 18;
        const WRAP        = 1 << 19;
        const BUTTONS     = 1 << 20;

        // Dropdown (bits 24-26)

        const ITEMS       = 1 << 24;
        const POSITION    = 1 << 25;
        const TRIGGER     = 1 << 26;
    }
}

impl ConfigChanges {
    /// Changes that force a button node to be rebuilt.
    pub const STRUCTURAL: Self = Self::TYPE
        .union(Self::SIZE)
        .union(Self::SHAPE)
        .union(Self::EFFECT);

    /// Changes that only touch inline styles.
    pub const STYLE_GROUP: Self = Self::COLORS
        .union(Self::DIMENSIONS)
        .union(Self::GRADIENT)
        .union(Self::STYLE);

    /// Group layout changes.
    pub const LAYOUT_GROUP: Self = Self::DIRECTION
        .union(Self::SPACING)
        .union(Self::ALIGNMENT)
        .union(Self::WRAP);

    /// Whether the node must be torn down and rebuilt.
    pub fn requires_rebuild(&self) -> bool {
        self.intersects(Self::STRUCTURAL)
    }

    /// Whether inline styles must be re-applied.
    pub fn requires_restyle(&self) -> bool {
        self.intersects(Self::STYLE_GROUP)
    }

    /// Set `flag` when `present` is true.
    pub(crate) fn mark(&mut self, flag: Self, present: bool) {
        if present {
            self.insert(flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_changes_require_rebuild() {
        for flag in [
            ConfigChanges::TYPE,
            ConfigChanges::SIZE,
            ConfigChanges::SHAPE,
            ConfigChanges::EFFECT,
        ] {
            assert!(flag.requires_rebuild());
        }
    }

    #[test]
    fn test_patchable_changes_do_not_rebuild() {
        let changes = ConfigChanges::TEXT | ConfigChanges::COLORS | ConfigChanges::CALLBACKS;
        assert!(!changes.requires_rebuild());
        assert!(changes.requires_restyle());
    }

    #[test]
    fn test_mark() {
        let mut changes = ConfigChanges::NONE;
        changes.mark(ConfigChanges::TEXT, false);
        assert!(changes.is_empty());
        changes.mark(ConfigChanges::TEXT, true);
        assert_eq!(changes, ConfigChanges::TEXT);
    }
}
