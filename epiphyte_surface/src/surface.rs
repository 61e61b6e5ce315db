// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The anchored surface component.
//!
//! [`Surface`] owns the externally mutable configuration (open flag, anchor,
//! corner, hoisting flags, explicit offset, quick-open) and translates each
//! configuration change into the minimal calls against its
//! [`PositionEngine`]. It also owns the bookkeeping the engine must not:
//! the anchor parked across hoist cycles, and the document-level click
//! subscription used for outside-click dismissal.
//!
//! ## Change handlers
//!
//! Every setter is an explicit change handler: it fires only when the value
//! actually changes, validates its ordering preconditions, and then issues
//! engine calls. Setters are silent no-ops while no engine is attached;
//! [`Surface::attach`] replays the accumulated configuration into the fresh
//! engine, so writes made before attachment converge to the same state.
//!
//! Two handlers are deliberately order-insensitive:
//!
//! - `x`/`y` commit in two phases. A write to one axis is stored but has no
//!   engine effect until the other axis is also non-null; once both are
//!   known the engine receives the position and margin, whichever axis was
//!   written last.
//! - `absolute`/`fixed` are independent flags folded into one derived hoist
//!   state. Engine traffic and anchor parking react to changes of the
//!   derived state, never to the individual flags, so the surface cannot
//!   double-park (and lose) its anchor when both flags flip in one cycle.
//!
//! ## Dismissal lifecycle
//!
//! The click subscription is tied to the engine's transition notices, not
//! to the open-flag write: it is acquired when the engine reports
//! [`SurfaceEvent::Opened`] and released on [`SurfaceEvent::Closed`]. At
//! most one subscription is active per surface, and repeated open/close
//! cycles acquire and release it in strict pairs.

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use crate::adapter::Adapter;
use crate::engine::PositionEngine;
use crate::host::SurfaceHost;
use crate::types::{AnchorMargin, Corner, KeyEvent, SurfaceEvent, TransformProperty, css};

/// An anchored floating surface.
///
/// Generic over the host's node key `K` and the injected engine `E`. One
/// engine instance is created per surface at [`attach`](Self::attach) time
/// and never recreated.
pub struct Surface<K: Copy + Eq, E: PositionEngine<K>> {
    root: K,
    engine: Option<E>,
    open: bool,
    quick: bool,
    absolute: bool,
    fixed: bool,
    fullwidth: bool,
    stay_open_on_body_click: bool,
    x: Option<f64>,
    y: Option<f64>,
    corner: Corner,
    anchor: Option<K>,
    previous_anchor: Option<K>,
    saved_focus: Option<K>,
    transform_property: Option<TransformProperty>,
    body_click_registered: bool,
    notices: SmallVec<[SurfaceEvent; 2]>,
}

impl<K: Copy + Eq + fmt::Debug, E: PositionEngine<K>> fmt::Debug for Surface<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("root", &self.root)
            .field("open", &self.open)
            .field("quick", &self.quick)
            .field("absolute", &self.absolute)
            .field("fixed", &self.fixed)
            .field("fullwidth", &self.fullwidth)
            .field("stay_open_on_body_click", &self.stay_open_on_body_click)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("corner", &self.corner)
            .field("anchor", &self.anchor)
            .field("previous_anchor", &self.previous_anchor)
            .field("body_click_registered", &self.body_click_registered)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, E: PositionEngine<K>> Surface<K, E> {
    /// Create a detached surface rooted at `root`.
    ///
    /// All configuration starts at its defaults: closed, not hoisted, no
    /// anchor, no explicit offset, corner [`Corner::TopStart`]. Setters work
    /// immediately but produce no engine traffic until
    /// [`attach`](Self::attach).
    pub fn new(root: K) -> Self {
        Self {
            root,
            engine: None,
            open: false,
            quick: false,
            absolute: false,
            fixed: false,
            fullwidth: false,
            stay_open_on_body_click: false,
            x: None,
            y: None,
            corner: Corner::default(),
            anchor: None,
            previous_anchor: None,
            saved_focus: None,
            transform_property: None,
            body_click_registered: false,
            notices: SmallVec::new(),
        }
    }

    /// Attach the engine and replay the accumulated configuration into it.
    ///
    /// The engine is created once per surface; a second call is ignored.
    /// Marks the root with [`css::ROOT`], syncs quick-open, corner, hoist
    /// state, and explicit coordinates, parks the anchor when already
    /// hoisted, and performs a pending open.
    pub fn attach(&mut self, engine: E, host: &mut dyn SurfaceHost<K>) {
        if self.engine.is_some() {
            return;
        }
        host.add_class(self.root, css::ROOT);

        let mut engine = engine;
        engine.set_quick_open(self.quick);
        engine.set_anchor_corner(self.corner);
        let hoisted = self.is_hoisted();
        if hoisted {
            engine.set_is_hoisted(true);
        }
        if let (Some(x), Some(y)) = (self.x, self.y) {
            engine.set_absolute_position(Point::new(x, y));
            engine.set_anchor_margin(AnchorMargin { left: x, top: y });
        }
        self.engine = Some(engine);

        if hoisted {
            self.park_anchor(host);
        }
        if self.open {
            self.with_engine(host, |engine, surface| engine.open(surface));
        }
    }

    /// `true` once an engine has been attached.
    pub fn is_attached(&self) -> bool {
        self.engine.is_some()
    }

    /// The surface's root node key.
    pub fn root(&self) -> K {
        self.root
    }

    /// Whether the surface is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the surface is rendered outside normal layout flow.
    pub fn is_hoisted(&self) -> bool {
        self.absolute || self.fixed
    }

    /// The current anchor, if any.
    pub fn anchor(&self) -> Option<K> {
        self.anchor
    }

    /// The current anchor corner.
    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// The explicit horizontal offset, if set.
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// The explicit vertical offset, if set.
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Whether open/close transitions skip their animations.
    pub fn quick(&self) -> bool {
        self.quick
    }

    /// Whether the surface uses absolute positioning.
    pub fn absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the surface uses fixed positioning.
    pub fn fixed(&self) -> bool {
        self.fixed
    }

    /// Whether the surface spans the full anchor width.
    pub fn fullwidth(&self) -> bool {
        self.fullwidth
    }

    /// Whether outside clicks are ignored instead of dismissing the surface.
    pub fn stay_open_on_body_click(&self) -> bool {
        self.stay_open_on_body_click
    }

    /// Open or close the surface.
    ///
    /// The engine performs the transition and reports completion through
    /// its adapter; an [`SurfaceEvent::Opened`] or [`SurfaceEvent::Closed`]
    /// event fires exactly once per completed transition, and the
    /// outside-click subscription follows those notices.
    pub fn set_open(&mut self, open: bool, host: &mut dyn SurfaceHost<K>) {
        if self.open == open {
            return;
        }
        self.open = open;
        if open {
            self.with_engine(host, |engine, surface| engine.open(surface));
        } else {
            self.with_engine(host, |engine, surface| engine.close(surface));
        }
    }

    /// Open the surface. Sugar for `set_open(true, ..)`.
    pub fn show(&mut self, host: &mut dyn SurfaceHost<K>) {
        self.set_open(true, host);
    }

    /// Close the surface. Sugar for `set_open(false, ..)`.
    pub fn close(&mut self, host: &mut dyn SurfaceHost<K>) {
        self.set_open(false, host);
    }

    /// Set or clear the anchor.
    ///
    /// A previous anchor's positioning mark is fully reverted before the
    /// new anchor is marked. Works while detached; only classes change.
    pub fn set_anchor(&mut self, anchor: Option<K>, host: &mut dyn SurfaceHost<K>) {
        self.write_anchor(anchor, host);
    }

    /// Set whether the surface uses absolute positioning.
    ///
    /// Folded with `fixed` into the derived hoist state; see
    /// [`set_fixed`](Self::set_fixed) for the symmetric flag.
    pub fn set_absolute(&mut self, absolute: bool, host: &mut dyn SurfaceHost<K>) {
        if self.absolute == absolute {
            return;
        }
        let was_hoisted = self.is_hoisted();
        self.absolute = absolute;
        self.sync_hoist(was_hoisted, host);
    }

    /// Set whether the surface uses fixed positioning.
    ///
    /// Also toggles [`css::FIXED`] on the root as a styling hook.
    pub fn set_fixed(&mut self, fixed: bool, host: &mut dyn SurfaceHost<K>) {
        if self.fixed == fixed {
            return;
        }
        let was_hoisted = self.is_hoisted();
        self.fixed = fixed;
        if fixed {
            host.add_class(self.root, css::FIXED);
        } else {
            host.remove_class(self.root, css::FIXED);
        }
        self.sync_hoist(was_hoisted, host);
    }

    /// Set whether the surface spans the full anchor width.
    pub fn set_fullwidth(&mut self, fullwidth: bool, host: &mut dyn SurfaceHost<K>) {
        if self.fullwidth == fullwidth {
            return;
        }
        self.fullwidth = fullwidth;
        if fullwidth {
            host.add_class(self.root, css::FULLWIDTH);
        } else {
            host.remove_class(self.root, css::FULLWIDTH);
        }
    }

    /// Set the explicit horizontal offset.
    ///
    /// Takes effect together with [`set_y`](Self::set_y): the engine sees
    /// the position only once both axes are non-null, in either write order.
    pub fn set_x(&mut self, x: Option<f64>) {
        if self.x == x {
            return;
        }
        self.x = x;
        self.sync_absolute_position();
    }

    /// Set the explicit vertical offset.
    ///
    /// The vertical counterpart of [`set_x`](Self::set_x).
    pub fn set_y(&mut self, y: Option<f64>) {
        if self.y == y {
            return;
        }
        self.y = y;
        self.sync_absolute_position();
    }

    /// Set whether open/close transitions skip their animations.
    ///
    /// Set this before the first open; flipping it mid-transition is left
    /// to the engine's discretion.
    pub fn set_quick(&mut self, quick: bool) {
        if self.quick == quick {
            return;
        }
        self.quick = quick;
        if let Some(engine) = self.engine.as_mut() {
            engine.set_quick_open(quick);
        }
    }

    /// Set the anchor corner.
    pub fn set_corner(&mut self, corner: Corner) {
        if self.corner == corner {
            return;
        }
        self.corner = corner;
        if let Some(engine) = self.engine.as_mut() {
            engine.set_anchor_corner(corner);
        }
    }

    /// Set the anchor corner by canonical name.
    ///
    /// Unrecognized names fall back to the default corner; this never fails.
    pub fn set_corner_name(&mut self, name: &str) {
        self.set_corner(Corner::from_name(name).unwrap_or_default());
    }

    /// Set whether outside clicks are ignored instead of closing the surface.
    ///
    /// The click subscription lifecycle is unaffected; only the reaction to
    /// a click outside the dispatch path changes.
    pub fn set_stay_open_on_body_click(&mut self, stay_open: bool) {
        self.stay_open_on_body_click = stay_open;
    }

    /// Forward a key event from the surface root to the engine.
    ///
    /// No filtering happens here; every event is forwarded.
    pub fn handle_keydown(&mut self, event: KeyEvent, host: &mut dyn SurfaceHost<K>) {
        self.with_engine(host, |engine, surface| engine.handle_keydown(event, surface));
    }

    /// React to a document-level click with the given dispatch path.
    ///
    /// Hosts call this for every document click while the surface holds the
    /// click subscription. The path is the event's full dispatch path,
    /// including segments across composition boundaries. The surface closes
    /// iff its root is absent from the path.
    pub fn handle_body_click(&mut self, path: &[K], host: &mut dyn SurfaceHost<K>) {
        if self.stay_open_on_body_click {
            return;
        }
        if path.contains(&self.root) {
            return;
        }
        self.set_open(false, host);
    }

    /// Run `f` against the engine and an adapter, then settle notices.
    ///
    /// Silent no-op while detached; this is the guarded precondition every
    /// engine-touching handler shares.
    fn with_engine(
        &mut self,
        host: &mut dyn SurfaceHost<K>,
        f: impl FnOnce(&mut E, &mut Adapter<'_, K>),
    ) {
        {
            let Self {
                root,
                engine,
                anchor,
                open,
                saved_focus,
                transform_property,
                notices,
                ..
            } = self;
            let Some(engine) = engine.as_mut() else {
                return;
            };
            let mut adapter = Adapter::new(
                &mut *host,
                *root,
                *anchor,
                open,
                saved_focus,
                transform_property,
                notices,
            );
            f(engine, &mut adapter);
        }
        self.drain_notices(host);
    }

    /// Apply queued transition notices: the click subscription is acquired
    /// on `Opened` and released on `Closed`, never on the raw flag write.
    fn drain_notices(&mut self, host: &mut dyn SurfaceHost<K>) {
        for notice in core::mem::take(&mut self.notices) {
            match notice {
                SurfaceEvent::Opened => self.acquire_body_click(host),
                SurfaceEvent::Closed => self.release_body_click(host),
            }
        }
    }

    fn acquire_body_click(&mut self, host: &mut dyn SurfaceHost<K>) {
        if self.body_click_registered {
            return;
        }
        self.body_click_registered = true;
        host.register_body_click(self.root);
    }

    fn release_body_click(&mut self, host: &mut dyn SurfaceHost<K>) {
        if !self.body_click_registered {
            return;
        }
        self.body_click_registered = false;
        host.deregister_body_click(self.root);
    }

    /// Push the explicit position to the engine once both axes are set.
    ///
    /// Two-phase commit: the engine sees `set_absolute_position` and
    /// `set_anchor_margin` only when both `x` and `y` are non-null, so the
    /// two write orders converge. Mirrors the positioning done in
    /// [`attach`](Self::attach).
    fn sync_absolute_position(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            if let (Some(x), Some(y)) = (self.x, self.y) {
                engine.set_absolute_position(Point::new(x, y));
                engine.set_anchor_margin(AnchorMargin { left: x, top: y });
            }
        }
    }

    /// React to a change of the derived hoist state.
    ///
    /// When the state is unchanged (the second of two reinforcing flags
    /// flipped), nothing happens: no engine call, no parking.
    fn sync_hoist(&mut self, was_hoisted: bool, host: &mut dyn SurfaceHost<K>) {
        let hoisted = self.is_hoisted();
        if hoisted == was_hoisted {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.set_is_hoisted(hoisted);
        if hoisted {
            self.park_anchor(host);
        } else {
            self.restore_anchor(host);
        }
    }

    /// Remember the live anchor and clear it: a hoisted surface is placed
    /// by explicit coordinates, not by an anchor.
    fn park_anchor(&mut self, host: &mut dyn SurfaceHost<K>) {
        self.previous_anchor = self.anchor;
        self.write_anchor(None, host);
    }

    /// Restore the parked anchor, provided none was set since parking.
    fn restore_anchor(&mut self, host: &mut dyn SurfaceHost<K>) {
        if self.anchor.is_none() {
            if let Some(previous) = self.previous_anchor.take() {
                self.write_anchor(Some(previous), host);
            }
        }
    }

    fn write_anchor(&mut self, new_anchor: Option<K>, host: &mut dyn SurfaceHost<K>) {
        if self.anchor == new_anchor {
            return;
        }
        if let Some(old) = self.anchor {
            host.remove_class(old, css::ANCHOR);
        }
        if let Some(new) = new_anchor {
            host.add_class(new, css::ANCHOR);
        }
        self.anchor = new_anchor;
    }
}
