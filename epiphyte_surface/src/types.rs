// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the surface: corners, margins, edge offsets, events.

bitflags::bitflags! {
    /// Bit components of a [`Corner`].
    ///
    /// A corner is a combination of a vertical component (`BOTTOM` set or
    /// unset), a horizontal component (`RIGHT` set or unset), and a
    /// direction-awareness marker (`FLIP_RTL`). Engines can branch on the
    /// individual bits instead of matching all eight corner variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CornerBit: u8 {
        /// Attach to the bottom edge of the anchor.
        const BOTTOM   = 1 << 0;
        /// Attach centered on the anchor (reserved for engine use).
        const CENTER   = 1 << 1;
        /// Attach to the right edge of the anchor.
        const RIGHT    = 1 << 2;
        /// Swap the horizontal component when the context is right-to-left.
        const FLIP_RTL = 1 << 3;
    }
}

/// Anchor-relative attachment point for the surface.
///
/// The `*Start`/`*End` variants are direction-aware: in a right-to-left
/// context their horizontal component flips. The `*Left`/`*Right` variants
/// are physical and never flip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Physical top-left corner of the anchor.
    TopLeft,
    /// Physical top-right corner of the anchor.
    TopRight,
    /// Physical bottom-left corner of the anchor.
    BottomLeft,
    /// Physical bottom-right corner of the anchor.
    BottomRight,
    /// Logical top-leading corner (flips in right-to-left contexts).
    #[default]
    TopStart,
    /// Logical top-trailing corner (flips in right-to-left contexts).
    TopEnd,
    /// Logical bottom-leading corner (flips in right-to-left contexts).
    BottomStart,
    /// Logical bottom-trailing corner (flips in right-to-left contexts).
    BottomEnd,
}

impl Corner {
    /// Decompose this corner into its [`CornerBit`] components.
    pub const fn bits(self) -> CornerBit {
        match self {
            Self::TopLeft => CornerBit::empty(),
            Self::TopRight => CornerBit::RIGHT,
            Self::BottomLeft => CornerBit::BOTTOM,
            Self::BottomRight => CornerBit::BOTTOM.union(CornerBit::RIGHT),
            Self::TopStart => CornerBit::FLIP_RTL,
            Self::TopEnd => CornerBit::FLIP_RTL.union(CornerBit::RIGHT),
            Self::BottomStart => CornerBit::BOTTOM.union(CornerBit::FLIP_RTL),
            Self::BottomEnd => CornerBit::BOTTOM
                .union(CornerBit::RIGHT)
                .union(CornerBit::FLIP_RTL),
        }
    }

    /// `true` if the corner attaches to the bottom edge of the anchor.
    pub const fn is_bottom(self) -> bool {
        self.bits().contains(CornerBit::BOTTOM)
    }

    /// `true` if the horizontal component flips in right-to-left contexts.
    pub const fn flips_in_rtl(self) -> bool {
        self.bits().contains(CornerBit::FLIP_RTL)
    }

    /// The canonical name of this corner, e.g. `"TOP_START"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "TOP_LEFT",
            Self::TopRight => "TOP_RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::BottomRight => "BOTTOM_RIGHT",
            Self::TopStart => "TOP_START",
            Self::TopEnd => "TOP_END",
            Self::BottomStart => "BOTTOM_START",
            Self::BottomEnd => "BOTTOM_END",
        }
    }

    /// Parse a canonical corner name.
    ///
    /// Returns `None` for unrecognized input; callers that need a total
    /// mapping fall back to [`Corner::default`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TOP_LEFT" => Some(Self::TopLeft),
            "TOP_RIGHT" => Some(Self::TopRight),
            "BOTTOM_LEFT" => Some(Self::BottomLeft),
            "BOTTOM_RIGHT" => Some(Self::BottomRight),
            "TOP_START" => Some(Self::TopStart),
            "TOP_END" => Some(Self::TopEnd),
            "BOTTOM_START" => Some(Self::BottomStart),
            "BOTTOM_END" => Some(Self::BottomEnd),
            _ => None,
        }
    }
}

/// Distance between the anchor's origin corner and the surface's origin corner.
///
/// Communicated to the engine together with an absolute position when the
/// surface is placed by explicit coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnchorMargin {
    /// Horizontal distance in pixels.
    pub left: f64,
    /// Vertical distance in pixels.
    pub top: f64,
}

/// Edge offsets written to the surface root.
///
/// `None` means *cleared*, not *unchanged*: every write applies all four
/// edges, removing any offset a previous write left behind. Switching the
/// anchored edge pair therefore never leaves a ghost offset from the
/// previous corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Offset from the left edge, in pixels.
    pub left: Option<f64>,
    /// Offset from the right edge, in pixels.
    pub right: Option<f64>,
    /// Offset from the top edge, in pixels.
    pub top: Option<f64>,
    /// Offset from the bottom edge, in pixels.
    pub bottom: Option<f64>,
}

/// Key identity carried by a [`KeyEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The escape key.
    Escape,
    /// The tab key.
    Tab,
    /// Any other key.
    Other,
}

/// A keyboard event observed on the surface root.
///
/// The surface forwards every key event to the engine without filtering;
/// interpretation is entirely the engine's business.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key was pressed.
    pub key: Key,
    /// Whether shift was held.
    pub shift: bool,
}

/// Lifecycle notification emitted from the surface root.
///
/// Hosts deliver these as bubbling, boundary-crossing events. Exactly one
/// is emitted per completed open or close transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface finished transitioning to visible.
    Opened,
    /// The surface finished transitioning to hidden.
    Closed,
}

/// Resolved name of the environment's transform style property.
///
/// Modern environments report [`TransformProperty::Transform`]; legacy
/// WebKit-prefixed environments report the prefixed variant. The adapter
/// resolves this once per surface and derives the `-origin` suffixed
/// property from it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransformProperty {
    /// The standard `transform` property.
    #[default]
    Transform,
    /// The legacy `-webkit-transform` property.
    WebkitTransform,
}

impl TransformProperty {
    /// Name of the transform property itself.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::WebkitTransform => "-webkit-transform",
        }
    }

    /// Name of the matching transform-origin property.
    pub const fn origin_name(self) -> &'static str {
        match self {
            Self::Transform => "transform-origin",
            Self::WebkitTransform => "-webkit-transform-origin",
        }
    }
}

/// Class names applied to the surface root and its anchor.
///
/// Hosts map these onto whatever styling mechanism they use; the names are
/// stable contract between the surface, its engines, and stylesheets.
pub mod css {
    /// Block class present on every surface root.
    pub const ROOT: &str = "epiphyte-surface";
    /// Marks the current anchor as a positioning context.
    pub const ANCHOR: &str = "epiphyte-surface--anchor";
    /// Present while the surface is fully open.
    pub const OPEN: &str = "epiphyte-surface--open";
    /// Present during the opening transition.
    pub const ANIMATING_OPEN: &str = "epiphyte-surface--animating-open";
    /// Present during the closing transition.
    pub const ANIMATING_CLOSED: &str = "epiphyte-surface--animating-closed";
    /// Present when the surface uses fixed positioning.
    pub const FIXED: &str = "epiphyte-surface--fixed";
    /// Present when the surface spans the full anchor width.
    pub const FULLWIDTH: &str = "epiphyte-surface--fullwidth";
    /// Present when the surface opened below its anchor.
    pub const IS_OPEN_BELOW: &str = "epiphyte-surface--is-open-below";
}
