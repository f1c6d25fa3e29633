// Copyright 2025 Lars Brubaker
// WASM bindings for polyclip-rust

use polyclip_rust::{BooleanOp, ClipOption, ClipResult, Clipper, Polygon};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A configured clipper that keeps the last result around for drawing.
#[wasm_bindgen]
pub struct ClipperJs {
    inner: Clipper,
    last: Option<ClipResult>,
    error: Option<String>,
}

#[wasm_bindgen]
impl ClipperJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ClipperJs {
        ClipperJs {
            inner: Clipper::new(),
            last: None,
            error: None,
        }
    }

    /// Set an option (0 = ValidateLinks, 1 = KeepDegenerate).
    pub fn set_option(&mut self, option: u32, value: bool) {
        let opt = match option {
            0 => ClipOption::ValidateLinks,
            1 => ClipOption::KeepDegenerate,
            _ => return,
        };
        self.inner.set_option(opt, value);
    }

    /// Clip two flat [x0,y0, x1,y1, ...] arrays and return true on success.
    /// op: 0=Intersection 1=Union 2=Difference 3=ReverseDifference
    pub fn clip(&mut self, subject: &[f64], clip: &[f64], op: u32) -> bool {
        let res = self.inner.boolean(
            &Polygon::from_flat(subject),
            &Polygon::from_flat(clip),
            boolean_op(op),
        );
        match res {
            Ok(r) => {
                self.last = Some(r);
                self.error = None;
                true
            }
            Err(e) => {
                self.last = None;
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Message for the last failed clip, if any.
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }

    pub fn contour_count(&self) -> u32 {
        self.last.as_ref().map_or(0, |r| r.contour_count() as u32)
    }

    /// Flat points of every contour, concatenated.
    pub fn get_points(&self) -> Vec<f64> {
        self.last
            .as_ref()
            .map_or_else(Vec::new, |r| r.polygon().to_flat())
    }

    /// Point count of each contour, for splitting `get_points`.
    pub fn get_contour_lengths(&self) -> Vec<u32> {
        self.last.as_ref().map_or_else(Vec::new, |r| {
            r.contours.iter().map(|c| c.len() as u32).collect()
        })
    }

    /// Crossing positions found on the subject ring, flat.
    pub fn get_crossings(&self) -> Vec<f64> {
        self.last.as_ref().map_or_else(Vec::new, |r| {
            r.subject
                .crossings()
                .flat_map(|n| {
                    let p = r.subject.point(n);
                    [p.x, p.y]
                })
                .collect()
        })
    }

    /// Entry (1) / exit (0) label of each subject crossing, same order as `get_crossings`.
    pub fn get_crossing_labels(&self) -> Vec<u8> {
        self.last.as_ref().map_or_else(Vec::new, |r| {
            r.subject
                .crossings()
                .map(|n| r.subject.node(n).is_entry as u8)
                .collect()
        })
    }
}

impl Default for ClipperJs {
    fn default() -> Self {
        Self::new()
    }
}

fn boolean_op(op: u32) -> BooleanOp {
    match op {
        0 => BooleanOp::Intersection,
        1 => BooleanOp::Union,
        2 => BooleanOp::Difference,
        3 => BooleanOp::ReverseDifference,
        _ => BooleanOp::Intersection,
    }
}

/// Convenience: clip once and return the flat output points.
#[wasm_bindgen]
pub fn clip_polygons(subject: &[f64], clip: &[f64], op: u32) -> Vec<f64> {
    let mut c = ClipperJs::new();
    if !c.clip(subject, clip, op) {
        return Vec::new();
    }
    c.get_points()
}

/// Convenience: same as clip_polygons but returns per-contour point counts.
#[wasm_bindgen]
pub fn clip_contour_lengths(subject: &[f64], clip: &[f64], op: u32) -> Vec<u32> {
    let mut c = ClipperJs::new();
    if !c.clip(subject, clip, op) {
        return Vec::new();
    }
    c.get_contour_lengths()
}
