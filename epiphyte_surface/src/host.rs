// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment primitives the surface consumes.
//!
//! [`SurfaceHost`] is the seam between this crate and whatever actually
//! owns nodes, geometry, focus, and styling: a retained scene, a browser
//! bridge, a test double. The surface core and the adapter call these
//! primitives; they never reach the position engine directly.
//!
//! Every method has a neutral default (`false`, zero dimensions, `None`,
//! or a no-op) so a host only overrides what its environment supports.
//! A query against something the host cannot answer yet, for example the
//! text direction of a node that is not attached, degrades to the neutral
//! value instead of failing.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::types::{SurfaceEvent, TransformProperty};

/// Host environment for one or more surfaces, generic over the node key `K`.
///
/// `K` is any small, copyable handle the host uses to identify nodes (a
/// generational id from a scene tree, an element handle, a plain integer in
/// tests). The surface stores the keys it is given and hands them back; it
/// never interprets them.
pub trait SurfaceHost<K> {
    /// `true` iff the computed text direction at `node` is right-to-left.
    ///
    /// Defaults to `false`: an unattached node fails open to left-to-right.
    fn is_rtl(&self, _node: K) -> bool {
        false
    }

    /// Root→target path of the deepest currently focused node, walked
    /// through any nested focus scopes. Empty when nothing is focused.
    fn focused_path(&self) -> Vec<K> {
        Vec::new()
    }

    /// Move focus to `node`.
    ///
    /// Returns `false` when the node does not expose a focus capability;
    /// callers treat that as a no-op.
    fn focus(&mut self, _node: K) -> bool {
        false
    }

    /// Content size of `node`.
    fn inner_dimensions(&self, _node: K) -> Size {
        Size::ZERO
    }

    /// Viewport-relative bounds of `node`, `None` when unavailable.
    fn bounding_rect(&self, _node: K) -> Option<Rect> {
        None
    }

    /// Size of the document body.
    fn body_dimensions(&self) -> Size {
        Size::ZERO
    }

    /// Size of the window viewport.
    fn window_dimensions(&self) -> Size {
        Size::ZERO
    }

    /// Current window scroll offset.
    fn window_scroll(&self) -> Point {
        Point::ZERO
    }

    /// Add a class to `node`. Adding a class twice has no further effect.
    fn add_class(&mut self, _node: K, _class: &str) {}

    /// Remove a class from `node`. Removing an absent class is a no-op.
    fn remove_class(&mut self, _node: K, _class: &str) {}

    /// `true` iff `node` currently carries `class`.
    fn has_class(&self, _node: K, _class: &str) -> bool {
        false
    }

    /// Write an inline style property on `node`.
    fn set_style_property(&mut self, _node: K, _property: &str, _value: &str) {}

    /// Remove an inline style property from `node`, if present.
    fn clear_style_property(&mut self, _node: K, _property: &str) {}

    /// The transform property this environment supports.
    ///
    /// Queried at most once per surface; the adapter caches the answer.
    fn transform_property(&self) -> TransformProperty {
        TransformProperty::Transform
    }

    /// Deliver a lifecycle event from `node`.
    ///
    /// Hosts dispatch these as bubbling events that cross composition
    /// boundaries, so listeners outside the surface's subtree observe them.
    fn emit(&mut self, _node: K, _event: SurfaceEvent) {}

    /// Start routing document-level clicks to the surface rooted at `node`.
    ///
    /// While registered, the host calls
    /// [`Surface::handle_body_click`](crate::surface::Surface::handle_body_click)
    /// with the full dispatch path of every document click.
    fn register_body_click(&mut self, _node: K) {}

    /// Stop routing document-level clicks to the surface rooted at `node`.
    ///
    /// Deregistering a listener that is not registered is a safe no-op.
    fn deregister_body_click(&mut self, _node: K) {}
}
