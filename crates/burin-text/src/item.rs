//! Stroke-text item model.
//!
//! [`StrokeText`] is the immutable-style spec value (text + style);
//! [`StrokeTextItem`] pairs it with a font and keeps the derived stroke
//! geometry cached, recomputing it on every geometry-affecting change.
//! Position and rotation are carried for the render adapter and do not
//! enter the cached paths, which stay in text-local coordinates.

use crate::stroker::TextStroker;
use burin_font::StrokeFont;
use burin_geometry::{Alignment, Angle, Path, Point};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Text content plus style of one stroke-text object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeText {
    pub text: String,
    pub position: Point,
    pub rotation: Angle,
    /// Cap height in output units.
    pub height: f64,
    /// Pen width as a fraction of the cap height.
    pub stroke_width_ratio: f64,
    pub line_spacing_factor: f64,
    pub align: Alignment,
    pub mirrored: bool,
}

impl StrokeText {
    pub fn new(text: impl Into<String>) -> Self {
        StrokeText {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Pen width derived from the cap height.
    pub fn stroke_width(&self) -> f64 {
        self.height * self.stroke_width_ratio
    }
}

impl Default for StrokeText {
    fn default() -> Self {
        StrokeText {
            text: String::new(),
            position: Point::ZERO,
            rotation: Angle::ZERO,
            height: 1.0,
            stroke_width_ratio: 0.15,
            line_spacing_factor: 1.0,
            align: Alignment::default(),
            mirrored: false,
        }
    }
}

/// A stroke-text object with cached, up-to-date stroke geometry.
#[derive(Debug, Clone)]
pub struct StrokeTextItem {
    font: Arc<StrokeFont>,
    spec: StrokeText,
    paths: Vec<Path>,
}

impl StrokeTextItem {
    pub fn new(font: Arc<StrokeFont>, spec: StrokeText) -> Self {
        let mut item = StrokeTextItem {
            font,
            spec,
            paths: Vec::new(),
        };
        item.update_paths();
        item
    }

    pub fn spec(&self) -> &StrokeText {
        &self.spec
    }

    pub fn font(&self) -> &Arc<StrokeFont> {
        &self.font
    }

    /// The cached stroke geometry, in text-local coordinates (mirrored
    /// when the spec says so).
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.spec.text = text.into();
        self.update_paths();
    }

    pub fn set_height(&mut self, height: f64) {
        self.spec.height = height;
        self.update_paths();
    }

    pub fn set_line_spacing_factor(&mut self, factor: f64) {
        self.spec.line_spacing_factor = factor;
        self.update_paths();
    }

    pub fn set_align(&mut self, align: Alignment) {
        self.spec.align = align;
        self.update_paths();
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.spec.mirrored = mirrored;
        self.update_paths();
    }

    /// Pen width only; the cached paths are unaffected.
    pub fn set_stroke_width_ratio(&mut self, ratio: f64) {
        self.spec.stroke_width_ratio = ratio;
    }

    /// Placement for the render adapter; the cached paths stay local.
    pub fn set_position(&mut self, position: Point) {
        self.spec.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Angle) {
        self.spec.rotation = rotation;
    }

    fn update_paths(&mut self) {
        let stroker = TextStroker::new(&self.font);
        let mut paths = stroker.stroke(
            &self.spec.text,
            self.spec.height,
            self.spec.line_spacing_factor,
            self.spec.align,
        );
        if self.spec.mirrored {
            for path in &mut paths {
                *path = path.mirrored();
            }
        }
        self.paths = paths;
    }
}
