// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface lifecycle and outside-click dismissal.
//!
//! Drive a surface with a printing host and a quick engine: open it,
//! click inside (stays open), click outside (dismissed).
//!
//! Run:
//! - `cargo run -p epiphyte_demos --example surface_basics`

use epiphyte_surface::adapter::Adapter;
use epiphyte_surface::engine::PositionEngine;
use epiphyte_surface::host::SurfaceHost;
use epiphyte_surface::surface::Surface;
use epiphyte_surface::types::SurfaceEvent;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Node(u32);

/// Host that prints what the surface asks of it and counts the click
/// subscription.
#[derive(Default)]
struct PrintingHost {
    events: Vec<SurfaceEvent>,
    listening: bool,
}

impl SurfaceHost<Node> for PrintingHost {
    fn emit(&mut self, node: Node, event: SurfaceEvent) {
        println!("  emit {event:?} from {node:?}");
        self.events.push(event);
    }

    fn register_body_click(&mut self, node: Node) {
        println!("  + body click listener for {node:?}");
        self.listening = true;
    }

    fn deregister_body_click(&mut self, node: Node) {
        println!("  - body click listener for {node:?}");
        self.listening = false;
    }
}

/// Engine that completes transitions immediately.
#[derive(Default)]
struct QuickEngine {
    open: bool,
}

impl PositionEngine<Node> for QuickEngine {
    fn open(&mut self, surface: &mut Adapter<'_, Node>) {
        if !self.open {
            self.open = true;
            surface.save_focus();
            surface.notify_open();
        }
    }

    fn close(&mut self, surface: &mut Adapter<'_, Node>) {
        if self.open {
            self.open = false;
            surface.restore_focus();
            surface.notify_close();
        }
    }
}

fn main() {
    let root = Node(1);
    let item = Node(2);
    let elsewhere = Node(9);

    let mut host = PrintingHost::default();
    let mut surface = Surface::new(root);
    surface.attach(QuickEngine::default(), &mut host);

    println!("== Open ==");
    surface.show(&mut host);
    assert!(surface.is_open());
    assert!(host.listening);

    println!("== Click inside (dispatch path contains the surface) ==");
    surface.handle_body_click(&[root, item], &mut host);
    assert!(surface.is_open());

    println!("== Click outside ==");
    surface.handle_body_click(&[elsewhere], &mut host);
    assert!(!surface.is_open());
    assert!(!host.listening);

    assert_eq!(host.events, vec![SurfaceEvent::Opened, SurfaceEvent::Closed]);
    println!("== Done ==");
}
