//! Per-object tile summary shown beneath the canvas.

use gtk4::prelude::*;
use gtk4::{Box, Label, Orientation, ScrolledWindow};
use tilekit_layout::TileSummary;

pub struct SummaryList {
    pub widget: ScrolledWindow,
    lines: Box,
    total: Label,
}

impl SummaryList {
    pub fn new() -> Self {
        let container = Box::new(Orientation::Vertical, 2);
        container.set_margin_start(6);
        container.set_margin_end(6);
        container.set_margin_bottom(6);

        let lines = Box::new(Orientation::Vertical, 2);
        let total = Label::builder().xalign(0.0).visible(false).build();
        total.add_css_class("heading");

        container.append(&lines);
        container.append(&total);

        let widget = ScrolledWindow::builder()
            .min_content_height(140)
            .child(&container)
            .build();

        Self {
            widget,
            lines,
            total,
        }
    }

    /// Replaces the listed lines with `summary`.
    pub fn update(&self, summary: &TileSummary) {
        while let Some(child) = self.lines.first_child() {
            self.lines.remove(&child);
        }

        for line in summary.to_lines() {
            let label = Label::builder().label(line.as_str()).xalign(0.0).build();
            label.set_selectable(true);
            self.lines.append(&label);
        }

        self.total
            .set_label(&format!("Total tiles: {}", summary.total_tiles()));
        self.total.set_visible(!summary.is_empty());
    }
}

impl Default for SummaryList {
    fn default() -> Self {
        Self::new()
    }
}
