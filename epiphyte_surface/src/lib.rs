// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epiphyte Surface: anchored floating-surface primitives.
//!
//! ## Overview
//!
//! This crate coordinates an anchored, floating surface used to host
//! transient UI content (menus, dropdowns) positioned relative to an anchor
//! node, with an open/close lifecycle, focus save/restore, and
//! dismiss-on-outside-click behavior. The hard part is not rendering: it is
//! keeping a set of externally mutable configuration properties, an opaque
//! positioning state machine, and the host environment consistent no matter
//! the order in which configuration is written.
//!
//! The crate does not position anything itself and it does not own a scene.
//! It is the coordination layer in between:
//!
//! - [`surface::Surface`] owns the configuration (open, anchor, corner,
//!   absolute/fixed hoisting, explicit x/y offset, quick-open) and
//!   translates each change into the minimal calls against the engine. It
//!   also owns the anchor parked across hoist cycles and the document-level
//!   click subscription.
//! - [`engine::PositionEngine`] is the injected state machine that owns
//!   corner selection, viewport clamping, and open/close transition logic.
//!   It is opaque to this crate and fully substitutable in tests.
//! - [`adapter::Adapter`] is the narrow facade the engine sees. All
//!   environment reads and writes the engine needs flow through it, so the
//!   engine never owns host access and stays environment-agnostic.
//! - [`host::SurfaceHost`] is the seam to whatever actually owns nodes,
//!   geometry, focus, and styling. Hosts feed pre-computed information in
//!   (dispatch paths, focus paths, geometry snapshots) and apply the writes
//!   coming back out.
//!
//! ## Dismissal
//!
//! While open, the surface holds a single document-level click subscription
//! on its host. For every document click the host hands the surface the
//! event's full dispatch path (including segments across composition
//! boundaries); the surface closes iff its own root is absent from that
//! path. The subscription is acquired on the engine's `Opened` notice and
//! released on `Closed`, never on the raw open-flag write, so it can never
//! outlive or precede visibility.
//!
//! ## Minimal example
//!
//! A surface driven by a recording host and a quick engine:
//!
//! ```rust
//! use epiphyte_surface::adapter::Adapter;
//! use epiphyte_surface::engine::PositionEngine;
//! use epiphyte_surface::host::SurfaceHost;
//! use epiphyte_surface::surface::Surface;
//! use epiphyte_surface::types::{Corner, SurfaceEvent};
//!
//! // A host that records emitted events; everything else keeps the
//! // neutral defaults.
//! #[derive(Default)]
//! struct Host {
//!     events: Vec<(u32, SurfaceEvent)>,
//! }
//!
//! impl SurfaceHost<u32> for Host {
//!     fn emit(&mut self, node: u32, event: SurfaceEvent) {
//!         self.events.push((node, event));
//!     }
//! }
//!
//! // An engine that opens and closes without animation.
//! struct Quick;
//!
//! impl PositionEngine<u32> for Quick {
//!     fn open(&mut self, surface: &mut Adapter<'_, u32>) {
//!         surface.save_focus();
//!         surface.notify_open();
//!     }
//!     fn close(&mut self, surface: &mut Adapter<'_, u32>) {
//!         surface.restore_focus();
//!         surface.notify_close();
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut surface = Surface::new(7_u32);
//! surface.attach(Quick, &mut host);
//!
//! surface.set_corner(Corner::BottomEnd);
//! surface.set_anchor(Some(3), &mut host);
//! surface.show(&mut host);
//! assert!(surface.is_open());
//!
//! // A click whose dispatch path misses the surface dismisses it.
//! surface.handle_body_click(&[9, 4], &mut host);
//! assert!(!surface.is_open());
//! assert_eq!(
//!     host.events,
//!     vec![(7, SurfaceEvent::Opened), (7, SurfaceEvent::Closed)]
//! );
//! ```
//!
//! ## Ordering guarantees
//!
//! Configuration handlers fire synchronously, in the order the caller
//! writes fields, and tolerate any caller-chosen order for the
//! order-sensitive pairs: `x`/`y` commit in two phases (the engine sees a
//! position only once both axes are non-null, converging from either write
//! order), and `absolute`/`fixed` fold into one derived hoist state so the
//! anchor is parked and restored exactly once per hoist cycle.
//!
//! ## Error handling
//!
//! This crate raises no errors. Queries against unavailable state return
//! neutral defaults (`false`, zero dimensions, `None`), handlers that need
//! an engine no-op silently while detached, and releasing an unheld click
//! subscription is safe. Correctness comes from well-defined no-op
//! behavior, not from retries.
//!
//! The core types are generic over the node identifier `K`, so callers can
//! use any small, copyable handle (a generational id from a scene tree, or
//! an application-specific id).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math; typically used when integrating into embedded or
//!   `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod engine;
pub mod host;
pub mod surface;
pub mod types;
