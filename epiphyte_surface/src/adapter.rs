// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine-facing adapter.
//!
//! [`Adapter`] is the narrow facade a [`PositionEngine`] sees while one of
//! its methods runs. It isolates every environment side effect behind pure
//! queries and pure mutations, so the engine never holds host access of its
//! own and stays testable against a fake host.
//!
//! The adapter is constructed by [`Surface`](crate::surface::Surface) for
//! the duration of a single engine call. It is stateless apart from slots
//! borrowed from the surface: the previously focused node, the
//! once-resolved transform property, the surface's open flag, and the
//! notice buffer the surface drains when the call returns.
//!
//! [`PositionEngine`]: crate::engine::PositionEngine

use alloc::format;
use core::fmt;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::host::SurfaceHost;
use crate::types::{EdgeOffsets, SurfaceEvent, TransformProperty};

/// Facade over the host for one engine call.
pub struct Adapter<'a, K: Copy + Eq> {
    host: &'a mut (dyn SurfaceHost<K> + 'a),
    surface: K,
    anchor: Option<K>,
    open: &'a mut bool,
    saved_focus: &'a mut Option<K>,
    transform_property: &'a mut Option<TransformProperty>,
    notices: &'a mut SmallVec<[SurfaceEvent; 2]>,
}

impl<K: Copy + Eq + fmt::Debug> fmt::Debug for Adapter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("surface", &self.surface)
            .field("anchor", &self.anchor)
            .field("open", &self.open)
            .field("saved_focus", &self.saved_focus)
            .field("transform_property", &self.transform_property)
            .field("notices", &self.notices)
            .finish_non_exhaustive()
    }
}

impl<'a, K: Copy + Eq> Adapter<'a, K> {
    pub(crate) fn new(
        host: &'a mut (dyn SurfaceHost<K> + 'a),
        surface: K,
        anchor: Option<K>,
        open: &'a mut bool,
        saved_focus: &'a mut Option<K>,
        transform_property: &'a mut Option<TransformProperty>,
        notices: &'a mut SmallVec<[SurfaceEvent; 2]>,
    ) -> Self {
        Self {
            host,
            surface,
            anchor,
            open,
            saved_focus,
            transform_property,
            notices,
        }
    }

    /// `true` iff the computed text direction of the root is right-to-left.
    ///
    /// `false` when the root is unavailable (fail-open to left-to-right).
    pub fn is_rtl(&self) -> bool {
        self.host.is_rtl(self.surface)
    }

    /// `true` iff the currently focused node, walked through any nested
    /// focus scopes, is contained within this surface.
    pub fn is_focused(&self) -> bool {
        self.host.focused_path().contains(&self.surface)
    }

    /// Capture the deepest currently focused node.
    ///
    /// Captures nothing when nothing is focused; a later
    /// [`restore_focus`](Self::restore_focus) is then a safe no-op.
    pub fn save_focus(&mut self) {
        *self.saved_focus = self.host.focused_path().last().copied();
    }

    /// Re-focus the node captured by the last [`save_focus`](Self::save_focus).
    ///
    /// No-op when nothing was captured or the node no longer takes focus.
    pub fn restore_focus(&mut self) {
        if let Some(node) = self.saved_focus.take() {
            let _ = self.host.focus(node);
        }
    }

    /// Content size of the surface root.
    pub fn inner_dimensions(&self) -> Size {
        self.host.inner_dimensions(self.surface)
    }

    /// Viewport-relative bounds of the anchor, `None` when no anchor is set
    /// or the anchor cannot be measured.
    pub fn anchor_dimensions(&self) -> Option<Rect> {
        self.anchor.and_then(|anchor| self.host.bounding_rect(anchor))
    }

    /// Size of the document body.
    pub fn body_dimensions(&self) -> Size {
        self.host.body_dimensions()
    }

    /// Size of the window viewport.
    pub fn window_dimensions(&self) -> Size {
        self.host.window_dimensions()
    }

    /// Current window scroll offset.
    pub fn window_scroll(&self) -> Point {
        self.host.window_scroll()
    }

    /// `true` iff a live anchor is currently set.
    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    /// `true` iff the surface root hosts another surface as its container.
    ///
    /// Fixed at `false`: in this integration the surface never nests another
    /// instance as its own container. This is an intentional stub, not a
    /// missing feature.
    pub fn is_element_in_container(&self) -> bool {
        false
    }

    /// Add a class to the surface root.
    pub fn add_class(&mut self, class: &str) {
        self.host.add_class(self.surface, class);
    }

    /// Remove a class from the surface root.
    pub fn remove_class(&mut self, class: &str) {
        self.host.remove_class(self.surface, class);
    }

    /// `true` iff the surface root carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.host.has_class(self.surface, class)
    }

    /// Write edge offsets on the surface root.
    ///
    /// Every edge is applied: edges present in `offsets` are written, edges
    /// absent from it are explicitly cleared rather than left stale from a
    /// previous call.
    pub fn set_position(&mut self, offsets: EdgeOffsets) {
        self.write_edge("left", offsets.left);
        self.write_edge("right", offsets.right);
        self.write_edge("top", offsets.top);
        self.write_edge("bottom", offsets.bottom);
    }

    /// Write or clear the max-height of the surface root.
    pub fn set_max_height(&mut self, max_height: Option<f64>) {
        match max_height {
            Some(px) => {
                self.host
                    .set_style_property(self.surface, "max-height", &format!("{px}px"));
            }
            None => self.host.clear_style_property(self.surface, "max-height"),
        }
    }

    /// Write the transform origin of the surface root.
    ///
    /// The environment's transform property is resolved once per surface and
    /// the matching `-origin` suffixed property is written.
    pub fn set_transform_origin(&mut self, origin: &str) {
        let property = match *self.transform_property {
            Some(property) => property,
            None => {
                let resolved = self.host.transform_property();
                *self.transform_property = Some(resolved);
                resolved
            }
        };
        self.host
            .set_style_property(self.surface, property.origin_name(), origin);
    }

    /// Report a completed open transition.
    ///
    /// Flips the surface's open flag to match, emits a single
    /// [`SurfaceEvent::Opened`], and queues the notice the surface reacts to
    /// once the current engine call returns.
    pub fn notify_open(&mut self) {
        *self.open = true;
        self.host.emit(self.surface, SurfaceEvent::Opened);
        self.notices.push(SurfaceEvent::Opened);
    }

    /// Report a completed close transition.
    ///
    /// The closing counterpart of [`notify_open`](Self::notify_open).
    pub fn notify_close(&mut self) {
        *self.open = false;
        self.host.emit(self.surface, SurfaceEvent::Closed);
        self.notices.push(SurfaceEvent::Closed);
    }

    fn write_edge(&mut self, edge: &str, value: Option<f64>) {
        match value {
            Some(px) => {
                self.host
                    .set_style_property(self.surface, edge, &format!("{px}px"));
            }
            None => self.host.clear_style_property(self.surface, edge),
        }
    }
}
