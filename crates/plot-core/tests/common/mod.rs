// File: crates/plot-core/tests/common/mod.rs
// Purpose: Shared host double that counts repaint/detach requests and cursor hints.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use plot_core::{Cursor, Host, Plot, PlotOptions};

#[derive(Clone, Default)]
pub struct CountingHost {
    pub repaints: Rc<Cell<usize>>,
    pub detaches: Rc<Cell<usize>>,
    pub cursors: Rc<RefCell<Vec<Cursor>>>,
}

impl Host for CountingHost {
    fn repaint(&self) {
        self.repaints.set(self.repaints.get() + 1);
    }
    fn set_cursor(&self, cursor: Cursor) {
        self.cursors.borrow_mut().push(cursor);
    }
    fn detach(&self) {
        self.detaches.set(self.detaches.get() + 1);
    }
}

pub fn plot_with(width: i32, height: i32, options: PlotOptions) -> (Plot, CountingHost) {
    let host = CountingHost::default();
    let plot = Plot::new(host.clone(), width, height, options).expect("valid plot");
    (plot, host)
}

pub fn plot(width: i32, height: i32) -> (Plot, CountingHost) {
    plot_with(width, height, PlotOptions::default())
}
