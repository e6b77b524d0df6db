//! Modifier and node flag sets.

use bitflags::bitflags;

bitflags! {
    /// Modifiers written on a declaration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const DEFAULT = 1 << 2;
        const CONST = 1 << 3;
        const ABSTRACT = 1 << 4;
        const PUBLIC = 1 << 5;
        const PRIVATE = 1 << 6;
        const PROTECTED = 1 << 7;
        const READONLY = 1 << 8;
        const STATIC = 1 << 9;
        const ASYNC = 1 << 10;
        const OVERRIDE = 1 << 11;
        const ACCESSOR = 1 << 12;
        const IN = 1 << 13;
        const OUT = 1 << 14;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const NON_PUBLIC_ACCESSIBILITY = Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

bitflags! {
    /// Flags on a node that are not written as modifiers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        /// `let` declaration list.
        const LET = 1 << 0;
        /// `const` declaration list.
        const CONST = 1 << 1;
        /// `namespace X {}` as opposed to `module X {}`.
        const NAMESPACE = 1 << 2;
        /// `declare global {}`.
        const GLOBAL_AUGMENTATION = 1 << 3;
        /// Documentation comment carries `@internal`.
        const INTERNAL = 1 << 4;
        /// Created by a transform rather than parsed.
        const SYNTHESIZED = 1 << 5;
        /// Body of a function or accessor contains `yield`.
        const HAS_YIELD = 1 << 6;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits();
    }
}
