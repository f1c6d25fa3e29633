// Copyright 2025 Lars Brubaker
// Shared test utilities for polyclip-rust tests.

#![allow(dead_code)]

use polyclip_rust::{ClipResult, Point, Polygon, Ring};

/// Install a test logger once; `RUST_LOG=debug cargo test` shows the pipeline.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse `.dat` style text: one vertex per line as `x y` or `x, y`.
/// Blank lines separate polygons.
pub fn parse_polygons(data: &str) -> Vec<Polygon> {
    let mut polygons: Vec<Polygon> = Vec::new();
    let mut current: Vec<f64> = Vec::new();

    for line in data.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                polygons.push(Polygon::from_flat(&std::mem::take(&mut current)));
            }
            continue;
        }
        let floats: Vec<f64> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<f64>().ok())
            .collect();
        current.extend(floats);
    }
    if !current.is_empty() {
        polygons.push(Polygon::from_flat(&current));
    }
    polygons
}

pub fn poly(pts: &[(f64, f64)]) -> Polygon {
    pts.iter().copied().collect()
}

pub fn square(x: f64, y: f64, size: f64) -> Polygon {
    poly(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

/// True when `a` and `b` describe the same closed loop, ignoring the starting
/// point and the walking direction.
pub fn same_loop(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    let reversed: Vec<Point> = b.iter().rev().copied().collect();
    for cand in [b, reversed.as_slice()] {
        for shift in 0..n {
            if (0..n).all(|i| close(a[i], cand[(i + shift) % n])) {
                return true;
            }
        }
    }
    false
}

pub fn assert_same_loop(actual: &Polygon, expected: &Polygon, label: &str) {
    assert!(
        same_loop(&actual.points, &expected.points),
        "{}: expected loop {:?}, got {:?}",
        label,
        expected.points,
        actual.points
    );
}

pub fn assert_area_approx(actual: f64, expected: f64, tolerance: f64, label: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{}: expected area ~{}, got {} (diff={})",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Contour areas, largest first.
pub fn sorted_areas(res: &ClipResult) -> Vec<f64> {
    let mut areas: Vec<f64> = res.contours.iter().map(Polygon::area).collect();
    areas.sort_by(|a, b| b.partial_cmp(a).unwrap());
    areas
}

/// Crossing labels of a ring in walk order must alternate.
pub fn verify_alternation(ring: &Ring) {
    let labels: Vec<bool> = ring.crossings().map(|n| ring.node(n).is_entry).collect();
    for pair in labels.windows(2) {
        assert_ne!(pair[0], pair[1], "{} ring labels do not alternate: {:?}", ring.side, labels);
    }
    if labels.len() >= 2 {
        assert_ne!(
            labels[0],
            labels[labels.len() - 1],
            "{} ring labels do not alternate around the wrap: {:?}",
            ring.side,
            labels
        );
    }
}

/// Counterparts point back, share coordinates, and share the processed flag.
pub fn verify_counterparts(ring: &Ring, other: &Ring) {
    for n in ring.crossings() {
        let node = ring.node(n);
        let cp = other.node(node.counterpart);
        assert!(cp.is_crossing, "{} node {} pairs with a vertex", ring.side, n);
        assert_eq!(cp.counterpart, n, "{} node {} counterpart is one-sided", ring.side, n);
        assert_eq!(cp.point, node.point);
        assert_eq!(cp.processed, node.processed);
    }
}

/// Structural checks on a finished clip.
pub fn verify_valid_output(res: &ClipResult) {
    for (i, contour) in res.contours.iter().enumerate() {
        for p in &contour.points {
            assert!(p.is_finite(), "contour {} has non-finite point {:?}", i, p);
        }
    }
    res.subject.check_links(&res.clip).expect("subject ring links");
    res.clip.check_links(&res.subject).expect("clip ring links");
    verify_alternation(&res.subject);
    verify_alternation(&res.clip);
    verify_counterparts(&res.subject, &res.clip);
    verify_counterparts(&res.clip, &res.subject);
    assert!(
        res.subject.crossings().all(|n| res.subject.node(n).processed),
        "tracing left crossings unprocessed"
    );
}
