// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor parking across hoist cycles and explicit placement.
//!
//! Hoisting a surface (absolute or fixed positioning) parks its anchor;
//! removing the hoist restores it, unless an anchor was set in between.
//! While hoisted, the surface is placed by explicit x/y coordinates that
//! commit only once both axes are known.
//!
//! Run:
//! - `cargo run -p epiphyte_demos --example surface_hoisting`

use epiphyte_surface::adapter::Adapter;
use epiphyte_surface::engine::PositionEngine;
use epiphyte_surface::host::SurfaceHost;
use epiphyte_surface::surface::Surface;
use kurbo::Point;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Node(u32);

#[derive(Default)]
struct Host;

impl SurfaceHost<Node> for Host {}

/// Engine that prints the placement data it receives.
#[derive(Default)]
struct PrintingEngine;

impl PositionEngine<Node> for PrintingEngine {
    fn open(&mut self, surface: &mut Adapter<'_, Node>) {
        surface.notify_open();
    }

    fn close(&mut self, surface: &mut Adapter<'_, Node>) {
        surface.notify_close();
    }

    fn set_is_hoisted(&mut self, hoisted: bool) {
        println!("  engine: hoisted = {hoisted}");
    }

    fn set_absolute_position(&mut self, position: Point) {
        println!("  engine: absolute position = ({}, {})", position.x, position.y);
    }
}

fn main() {
    let root = Node(1);
    let anchor = Node(7);

    let mut host = Host;
    let mut surface = Surface::new(root);
    surface.attach(PrintingEngine, &mut host);
    surface.set_anchor(Some(anchor), &mut host);

    println!("== Hoist: the anchor is parked ==");
    surface.set_absolute(true, &mut host);
    assert_eq!(surface.anchor(), None);

    println!("== Explicit placement commits once both axes are set ==");
    surface.set_x(Some(120.0));
    // Nothing yet: the y axis is still unknown.
    surface.set_y(Some(80.0));

    println!("== Unhoist: the parked anchor comes back ==");
    surface.set_absolute(false, &mut host);
    assert_eq!(surface.anchor(), Some(anchor));

    println!("== Done ==");
}
