//! Utility module for editing SVG paths as point lists.
//!
//! [`parse_svg_path`] flattens the path data of an SVG `<path>` element into
//! a list of [`PathPoint`]s, each an anchor or a Bézier control point in
//! absolute coordinates. [`points_to_svg_path`] turns such a list back into
//! path data. The supported commands are move-to, line-to, cubic Bézier curves,
//! vertical and horizontal lines, and close-path, each in absolute and relative
//! form. Other commands are skipped.
//!
//! ```
//! # use colorlab::path::{parse_svg_path, points_to_svg_path};
//! let points = parse_svg_path("M0 0 h1 v1 H0 z");
//! assert_eq!(points.len(), 4);
//! assert_eq!(
//!     points_to_svg_path(&points),
//!     "M0.000000 0.000000 L1.000000 0.000000 L1.000000 1.000000 L0.000000 1.000000 Z"
//! );
//! ```
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The command that produced a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo,
    /// Draw a straight line.
    LineTo,
    /// Draw a cubic Bézier curve.
    CurveTo,
}

/// The role of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// A point on the path.
    Anchor,
    /// A Bézier control point, which pulls the path without being on it.
    Control,
}

/// A point of a path in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
    /// The horizontal coordinate.
    pub x: Float,
    /// The vertical coordinate.
    pub y: Float,
    /// The command that produced this point.
    pub command: PathCommand,
    /// Whether this point is on the path or a Bézier control point.
    pub kind: PointKind,
}

impl PathPoint {
    /// Create a new anchor point.
    pub const fn anchor(x: Float, y: Float, command: PathCommand) -> Self {
        Self {
            x,
            y,
            command,
            kind: PointKind::Anchor,
        }
    }

    /// Create a new control point of a cubic Bézier curve.
    pub const fn control(x: Float, y: Float) -> Self {
        Self {
            x,
            y,
            command: PathCommand::CurveTo,
            kind: PointKind::Control,
        }
    }

    /// Determine whether this point is a control point.
    pub fn is_control(&self) -> bool {
        self.kind == PointKind::Control
    }
}

/// The number of points in the fallback shape.
const FALLBACK_POINTS: usize = 8;

/// Create the fallback shape, a regular octagon inscribed in the unit square.
///
/// The octagon's points lie on a circle with radius 0.4 around the center of
/// the unit square, starting at angle zero and continuing clockwise in SVG's
/// downward-pointing coordinates.
pub fn fallback_shape() -> Vec<PathPoint> {
    const TAU: Float = std::f64::consts::TAU as Float;

    (0..FALLBACK_POINTS)
        .map(|index| {
            let angle = index as Float / FALLBACK_POINTS as Float * TAU;
            PathPoint::anchor(
                angle.cos().mul_add(0.4, 0.5),
                angle.sin().mul_add(0.4, 0.5),
                PathCommand::LineTo,
            )
        })
        .collect()
}

// --------------------------------------------------------------------------------------------------------------------

/// Scan the numbers in a command's parameters.
///
/// Numbers are separated by white space or commas but also by a sign or a
/// second decimal point, as in the compact `1-2.5.5`, which holds three
/// numbers. Any other character acts as a separator, too.
fn scan_numbers(s: &str) -> Vec<Float> {
    let mut numbers = Vec::new();
    let mut start: Option<usize> = None;
    let mut seen_dot = false;

    let mut flush = |start: &mut Option<usize>, end: usize| {
        if let Some(begin) = start.take() {
            if let Ok(n) = s[begin..end].parse::<Float>() {
                numbers.push(n);
            }
        }
    };

    for (index, c) in s.char_indices() {
        match c {
            '0'..='9' => {
                if start.is_none() {
                    start = Some(index);
                    seen_dot = false;
                }
            }
            '.' => {
                if start.is_some() && seen_dot {
                    flush(&mut start, index);
                }
                if start.is_none() {
                    start = Some(index);
                }
                seen_dot = true;
            }
            '+' | '-' => {
                flush(&mut start, index);
                start = Some(index);
                seen_dot = false;
            }
            _ => flush(&mut start, index),
        }
    }
    flush(&mut start, s.len());

    numbers
}

/// Parse the data of an SVG path into points.
///
/// Relative coordinates are resolved against the current point. The first
/// coordinate pair of a move-to produces a [`PathCommand::MoveTo`] anchor, all
/// further pairs produce line-to anchors. A cubic Bézier curve produces two
/// control points followed by an anchor. Vertical and horizontal lines produce
/// line-to anchors. Close-path produces no points. Incomplete coordinate
/// groups are dropped.
///
/// If the path yields fewer than three points, which includes empty or
/// malformed path data, this function returns the [`fallback_shape`] instead.
pub fn parse_svg_path(data: &str) -> Vec<PathPoint> {
    let mut points = Vec::new();
    let (mut x, mut y) = (0.0 as Float, 0.0 as Float);

    // Split into commands, each a letter followed by its parameters.
    let mut commands = Vec::new();
    for (index, c) in data.char_indices() {
        if c.is_ascii_alphabetic() {
            commands.push(index);
        }
    }

    for (nth, &begin) in commands.iter().enumerate() {
        let end = commands.get(nth + 1).copied().unwrap_or(data.len());
        let letter = char::from(data.as_bytes()[begin]);
        let relative = letter.is_ascii_lowercase();
        let params = scan_numbers(&data[begin + 1..end]);

        // Resolve the given coordinates against the current point.
        let resolve = |dx: Float, dy: Float, x: Float, y: Float| {
            if relative {
                (x + dx, y + dy)
            } else {
                (dx, dy)
            }
        };

        match letter.to_ascii_uppercase() {
            'M' => {
                for (pair, xy) in params.chunks_exact(2).enumerate() {
                    let &[dx, dy] = xy else { continue };
                    (x, y) = resolve(dx, dy, x, y);
                    let command = if pair == 0 {
                        PathCommand::MoveTo
                    } else {
                        PathCommand::LineTo
                    };
                    points.push(PathPoint::anchor(x, y, command));
                }
            }
            'L' => {
                for xy in params.chunks_exact(2) {
                    let &[dx, dy] = xy else { continue };
                    (x, y) = resolve(dx, dy, x, y);
                    points.push(PathPoint::anchor(x, y, PathCommand::LineTo));
                }
            }
            'C' => {
                for c in params.chunks_exact(6) {
                    let &[cx1, cy1, cx2, cy2, dx, dy] = c else { continue };
                    let (x1, y1) = resolve(cx1, cy1, x, y);
                    let (x2, y2) = resolve(cx2, cy2, x, y);
                    points.push(PathPoint::control(x1, y1));
                    points.push(PathPoint::control(x2, y2));
                    (x, y) = resolve(dx, dy, x, y);
                    points.push(PathPoint::anchor(x, y, PathCommand::CurveTo));
                }
            }
            'V' => {
                for &dy in &params {
                    y = if relative { y + dy } else { dy };
                    points.push(PathPoint::anchor(x, y, PathCommand::LineTo));
                }
            }
            'H' => {
                for &dx in &params {
                    x = if relative { x + dx } else { dx };
                    points.push(PathPoint::anchor(x, y, PathCommand::LineTo));
                }
            }
            'Z' => {}
            _ => log::debug!("skipping unsupported path command {:?}", letter),
        }
    }

    if points.len() < 3 {
        log::debug!(
            "path data {:?} has {} points only, using fallback shape",
            data,
            points.len()
        );
        return fallback_shape();
    }

    points
}

/// Format a coordinate with six decimals, without negative zero.
fn coordinate(value: Float) -> String {
    let s = format!("{:.6}", value);
    match s.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0' || b == b'.') => digits.to_string(),
        _ => s,
    }
}

/// Turn points back into SVG path data.
///
/// The first point becomes a move-to. After that, every run of two control
/// points followed by an anchor becomes a cubic Bézier curve and every other
/// point becomes a line-to. The path is closed. Coordinates have six decimals.
/// An empty slice of points produces an empty string.
pub fn points_to_svg_path(points: &[PathPoint]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M{} {} ", coordinate(first.x), coordinate(first.y));
    let mut index = 0;
    while index < rest.len() {
        match rest[index..] {
            [p1, p2, p3, ..] if p1.is_control() && p2.is_control() && !p3.is_control() => {
                path.push_str(&format!(
                    "C{} {} {} {} {} {} ",
                    coordinate(p1.x),
                    coordinate(p1.y),
                    coordinate(p2.x),
                    coordinate(p2.y),
                    coordinate(p3.x),
                    coordinate(p3.y)
                ));
                index += 3;
            }
            [p, ..] => {
                path.push_str(&format!("L{} {} ", coordinate(p.x), coordinate(p.y)));
                index += 1;
            }
            [] => break,
        }
    }
    path.push('Z');

    path
}

/// Parse and reconstruct SVG path data in one go.
///
/// The result is stable: normalizing normalized path data does not change it.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn normalize_svg_path(data: &str) -> String {
    points_to_svg_path(&parse_svg_path(data))
}

// ====================================================================================================================
