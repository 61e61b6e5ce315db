// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The position engine interface.
//!
//! The engine is the state machine that owns open/close/position
//! transition logic: corner selection, viewport clamping, transform-origin
//! math, quick versus animated opening. This crate does not implement one;
//! it drives whatever implementation is injected at
//! [`Surface::attach`](crate::surface::Surface::attach) and gives it
//! environment access exclusively through the [`Adapter`].
//!
//! Engines hold no host reference of their own. During [`open`],
//! [`close`], and [`handle_keydown`] they read geometry and write styles
//! through the adapter passed in, and report completed transitions with
//! [`Adapter::notify_open`] / [`Adapter::notify_close`], exactly once per
//! successful transition.
//!
//! [`open`]: PositionEngine::open
//! [`close`]: PositionEngine::close
//! [`handle_keydown`]: PositionEngine::handle_keydown

use kurbo::Point;

use crate::adapter::Adapter;
use crate::types::{AnchorMargin, Corner, KeyEvent};

/// A positioning state machine for one surface.
///
/// Configuration setters have no-op defaults so minimal engines implement
/// only the transitions. A quick engine for tests needs two methods:
///
/// ```
/// use epiphyte_surface::adapter::Adapter;
/// use epiphyte_surface::engine::PositionEngine;
///
/// struct Quick;
///
/// impl PositionEngine<u32> for Quick {
///     fn open(&mut self, surface: &mut Adapter<'_, u32>) {
///         surface.save_focus();
///         surface.notify_open();
///     }
///     fn close(&mut self, surface: &mut Adapter<'_, u32>) {
///         surface.restore_focus();
///         surface.notify_close();
///     }
/// }
/// ```
pub trait PositionEngine<K: Copy + Eq> {
    /// Begin the open transition.
    fn open(&mut self, surface: &mut Adapter<'_, K>);

    /// Begin the close transition.
    fn close(&mut self, surface: &mut Adapter<'_, K>);

    /// Set the anchor corner used for placement.
    fn set_anchor_corner(&mut self, _corner: Corner) {}

    /// Set the explicit viewport position used while hoisted.
    fn set_absolute_position(&mut self, _position: Point) {}

    /// Set the margin between the anchor's and the surface's origin corners.
    fn set_anchor_margin(&mut self, _margin: AnchorMargin) {}

    /// Set whether the surface is rendered outside normal layout flow.
    fn set_is_hoisted(&mut self, _hoisted: bool) {}

    /// Set whether open/close transitions skip their animations.
    fn set_quick_open(&mut self, _quick: bool) {}

    /// Handle a key event observed on the surface root.
    ///
    /// The surface forwards every key event unfiltered; the default
    /// implementation ignores them all.
    fn handle_keydown(&mut self, _event: KeyEvent, _surface: &mut Adapter<'_, K>) {}
}
