// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Re-expressing path data under a transform list.
//!
//! Commands keep their kind and their relative/absolute flag. `H` and `V`
//! become `L`, since an axis-aligned line rarely stays axis-aligned.

use kurbo::{Affine, Point, Vec2};
use svgtypes::{FuzzyEq, FuzzyZero};

use crate::{ArcArgs, ControlArgs, CurveArgs, PathCommand, PathData, TransformOp};

/// Values closer than this to an integer are snapped to it.
const SNAP_EPSILON: f64 = 1e-10;

/// A transform function with all defaults resolved.
///
/// Angles are in degrees.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NormalizedOp {
    Matrix { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64 },
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate { angle: f64, cx: f64, cy: f64 },
    SkewX { angle: f64 },
    SkewY { angle: f64 },
}

impl NormalizedOp {
    /// Returns the full affine map of this function.
    pub fn to_affine(&self) -> Affine {
        match *self {
            NormalizedOp::Matrix { a, b, c, d, e, f } => Affine::new([a, b, c, d, e, f]),
            NormalizedOp::Translate { tx, ty } => Affine::translate(Vec2::new(tx, ty)),
            NormalizedOp::Scale { sx, sy } => Affine::scale_non_uniform(sx, sy),
            NormalizedOp::Rotate { angle, cx, cy } => {
                let center = Vec2::new(cx, cy);
                Affine::translate(center)
                    * Affine::rotate(angle.to_radians())
                    * Affine::translate(-center)
            }
            NormalizedOp::SkewX { angle } => {
                Affine::new([1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0])
            }
            NormalizedOp::SkewY { angle } => {
                Affine::new([1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0])
            }
        }
    }

    /// Returns the linear part of this function, without translation.
    pub fn linear(&self) -> Affine {
        let [a, b, c, d, _, _] = self.to_affine().as_coeffs();
        Affine::new([a, b, c, d, 0.0, 0.0])
    }
}

/// Two precomputed tables of normalized functions.
///
/// The absolute table applies to absolute coordinates. The relative one
/// applies to coordinate deltas, so every translation in it is zero.
#[derive(Clone, PartialEq, Debug)]
pub struct NormalizedTransform {
    absolute: Vec<NormalizedOp>,
    relative: Vec<NormalizedOp>,
}

impl NormalizedTransform {
    /// Resolves defaults of every function in `list`.
    ///
    /// An empty list is treated as the identity.
    pub fn new(list: &[TransformOp]) -> Self {
        if list.is_empty() {
            log::debug!("Empty transform list. Using identity.");
            let identity = vec![NormalizedOp::Scale { sx: 1.0, sy: 1.0 }];
            return NormalizedTransform { absolute: identity.clone(), relative: identity };
        }

        let absolute: Vec<_> = list.iter().map(|op| normalize(op, false)).collect();
        let relative: Vec<_> = list.iter().map(|op| normalize(op, true)).collect();
        log::trace!("Normalized transform: {:?} / {:?}.", absolute, relative);

        NormalizedTransform { absolute, relative }
    }

    /// Returns the table for absolute coordinates.
    #[inline]
    pub fn absolute(&self) -> &[NormalizedOp] {
        &self.absolute
    }

    /// Returns the table for relative coordinates.
    #[inline]
    pub fn relative(&self) -> &[NormalizedOp] {
        &self.relative
    }

    #[inline]
    fn table(&self, relative: bool) -> &[NormalizedOp] {
        if relative { &self.relative } else { &self.absolute }
    }
}

fn normalize(op: &TransformOp, relative: bool) -> NormalizedOp {
    match *op {
        TransformOp::Matrix { a, b, c, d, e, f } => {
            if relative {
                NormalizedOp::Matrix { a, b, c, d, e: 0.0, f: 0.0 }
            } else {
                NormalizedOp::Matrix { a, b, c, d, e, f }
            }
        }
        TransformOp::Translate { tx, ty } => {
            if relative {
                NormalizedOp::Translate { tx: 0.0, ty: 0.0 }
            } else {
                NormalizedOp::Translate { tx, ty: ty.unwrap_or(0.0) }
            }
        }
        TransformOp::Scale { sx, sy } => {
            NormalizedOp::Scale { sx, sy: sy.unwrap_or(sx) }
        }
        TransformOp::Rotate { angle, cx, cy } => {
            if relative {
                NormalizedOp::Rotate { angle, cx: 0.0, cy: 0.0 }
            } else {
                NormalizedOp::Rotate { angle, cx: cx.unwrap_or(0.0), cy: cy.unwrap_or(0.0) }
            }
        }
        TransformOp::SkewX { angle } => NormalizedOp::SkewX { angle },
        TransformOp::SkewY { angle } => NormalizedOp::SkewY { angle },
    }
}

/// Snaps values within `SNAP_EPSILON` of an integer. Never returns `-0`.
fn snap(n: f64) -> f64 {
    let rounded = n.round();
    if (n - rounded).abs() < SNAP_EPSILON {
        rounded + 0.0
    } else {
        n
    }
}

/// Applies `ops` to a point, the last function first.
pub fn apply_point(ops: &[NormalizedOp], p: Point) -> Point {
    let p = ops.iter().rev().fold(p, |p, op| op.to_affine() * p);
    Point::new(snap(p.x), snap(p.y))
}

/// Applies `ops` to an elliptical arc.
///
/// The ellipse is re-derived after each function: the image of an ellipse
/// under a linear map is the ellipse whose quadratic form coefficients are
/// `A`, `B` and `C` below. A reflection flips the sweep direction. The
/// large-arc flag never changes.
pub fn apply_arc(ops: &[NormalizedOp], arc: &ArcArgs) -> ArcArgs {
    let mut rx = arc.rx;
    let mut ry = arc.ry;
    let mut rotation = arc.x_axis_rotation;
    let mut sweep = arc.sweep;

    for op in ops.iter().rev() {
        let linear = op.linear();
        let [a, b, c, d, _, _] = linear.as_coeffs();
        let (sin, cos) = rotation.to_radians().sin_cos();

        let m0 = rx * (a * cos + c * sin);
        let m1 = rx * (b * cos + d * sin);
        let m2 = ry * (c * cos - a * sin);
        let m3 = ry * (d * cos - b * sin);

        let qa = m0 * m0 + m2 * m2;
        let qb = 2.0 * (m0 * m1 + m2 * m3);
        let qc = m1 * m1 + m3 * m3;
        let k = ((qa - qc) * (qa - qc) + qb * qb).sqrt();

        rx = snap(((qa + qc + k) / 2.0).sqrt());
        ry = snap(((qa + qc - k).max(0.0) / 2.0).sqrt());
        rotation = snap(qb.atan2(qa - qc) * 90.0 / std::f64::consts::PI);

        if linear.determinant() < 0.0 {
            sweep = !sweep;
        }
    }

    if ry.is_fuzzy_zero() && !arc.rx.is_fuzzy_zero() && !arc.ry.is_fuzzy_zero() {
        log::warn!("Elliptical arc collapsed to a line under a singular transform.");
    }

    ArcArgs {
        rx,
        ry,
        x_axis_rotation: rotation,
        large_arc: arc.large_arc,
        sweep,
        end: apply_point(ops, arc.end),
    }
}

/// Applies a transform list to path data.
#[derive(Clone, PartialEq, Debug)]
pub struct Transformer {
    table: NormalizedTransform,
}

impl Transformer {
    /// Creates a transformer for `list`.
    pub fn new(list: &[TransformOp]) -> Self {
        Transformer { table: NormalizedTransform::new(list) }
    }

    /// Returns the normalized tables.
    #[inline]
    pub fn tables(&self) -> &NormalizedTransform {
        &self.table
    }

    #[inline]
    fn point(&self, p: Point, relative: bool) -> Point {
        apply_point(self.table.table(relative), p)
    }

    /// Returns a transformed copy of `path`.
    ///
    /// The current point is tracked in source coordinates, since `H` and `V`
    /// values only make sense there. The very first moveto of a path is
    /// absolute even when written as `m`, and is treated so; the output keeps
    /// the original letter.
    pub fn transform(&self, path: &PathData) -> PathData {
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        let mut new_path = PathData::with_capacity(path.len());
        for (idx, cmd) in path.iter().enumerate() {
            let new_cmd = match *cmd {
                PathCommand::MoveTo { relative, ref sequence } => {
                    let mut new_sequence = Vec::with_capacity(sequence.len());
                    for (i, p) in sequence.iter().enumerate() {
                        let rel = relative && !(idx == 0 && i == 0);
                        new_sequence.push(self.point(*p, rel));
                        current = advance(current, *p, rel);
                        if i == 0 {
                            subpath_start = current;
                        }
                    }

                    PathCommand::MoveTo { relative, sequence: new_sequence }
                }
                PathCommand::LineTo { relative, ref sequence } => {
                    let sequence = sequence.iter().map(|p| {
                        current = advance(current, *p, relative);
                        self.point(*p, relative)
                    }).collect();

                    PathCommand::LineTo { relative, sequence }
                }
                PathCommand::HorizontalLine { relative, ref sequence } => {
                    let sequence = sequence.iter().map(|x| {
                        let p = Point::new(*x, if relative { 0.0 } else { current.y });
                        current = advance(current, p, relative);
                        self.point(p, relative)
                    }).collect();

                    PathCommand::LineTo { relative, sequence }
                }
                PathCommand::VerticalLine { relative, ref sequence } => {
                    let sequence = sequence.iter().map(|y| {
                        let p = Point::new(if relative { 0.0 } else { current.x }, *y);
                        current = advance(current, p, relative);
                        self.point(p, relative)
                    }).collect();

                    PathCommand::LineTo { relative, sequence }
                }
                PathCommand::CurveTo { relative, ref sequence } => {
                    let sequence = sequence.iter().map(|args| {
                        current = advance(current, args.end, relative);
                        CurveArgs {
                            control1: self.point(args.control1, relative),
                            control2: self.point(args.control2, relative),
                            end: self.point(args.end, relative),
                        }
                    }).collect();

                    PathCommand::CurveTo { relative, sequence }
                }
                PathCommand::SmoothCurveTo { relative, ref sequence } => {
                    let sequence = sequence.iter()
                        .map(|args| self.control_args(args, relative, &mut current))
                        .collect();

                    PathCommand::SmoothCurveTo { relative, sequence }
                }
                PathCommand::Quadratic { relative, ref sequence } => {
                    let sequence = sequence.iter()
                        .map(|args| self.control_args(args, relative, &mut current))
                        .collect();

                    PathCommand::Quadratic { relative, sequence }
                }
                PathCommand::SmoothQuadratic { relative, ref sequence } => {
                    let sequence = sequence.iter().map(|p| {
                        current = advance(current, *p, relative);
                        self.point(*p, relative)
                    }).collect();

                    PathCommand::SmoothQuadratic { relative, sequence }
                }
                PathCommand::EllipticalArc { relative, ref sequence } => {
                    let ops = self.table.table(relative);
                    let sequence = sequence.iter().map(|arc| {
                        current = advance(current, arc.end, relative);
                        apply_arc(ops, arc)
                    }).collect();

                    PathCommand::EllipticalArc { relative, sequence }
                }
                PathCommand::ClosePath => {
                    current = subpath_start;
                    PathCommand::ClosePath
                }
            };

            new_path.push(new_cmd);
        }

        new_path
    }

    fn control_args(&self, args: &ControlArgs, relative: bool, current: &mut Point) -> ControlArgs {
        *current = advance(*current, args.end, relative);
        ControlArgs {
            control: self.point(args.control, relative),
            end: self.point(args.end, relative),
        }
    }
}

#[inline]
fn advance(current: Point, p: Point, relative: bool) -> Point {
    if relative { current + p.to_vec2() } else { p }
}

/// Re-emits axis-aligned line segments as `H` or `V`.
///
/// A `LineTo` is rewritten only when every one of its groups runs along
/// the same axis. The current point is tracked in the coordinates of
/// `path` itself.
pub fn collapse_lines(path: &PathData) -> PathData {
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    let mut new_path = PathData::with_capacity(path.len());
    for cmd in path.iter() {
        let new_cmd = match *cmd {
            PathCommand::LineTo { relative, ref sequence } if !sequence.is_empty() => {
                let start = current;
                for p in sequence {
                    current = advance(current, *p, relative);
                }

                collapse_line(relative, sequence, start)
            }
            PathCommand::MoveTo { relative, ref sequence } => {
                for (i, p) in sequence.iter().enumerate() {
                    current = advance(current, *p, relative);
                    if i == 0 {
                        subpath_start = current;
                    }
                }

                cmd.clone()
            }
            PathCommand::ClosePath => {
                current = subpath_start;
                cmd.clone()
            }
            _ => {
                current = end_point(cmd, current);
                cmd.clone()
            }
        };

        new_path.push(new_cmd);
    }

    new_path
}

fn collapse_line(relative: bool, sequence: &[Point], start: Point) -> PathCommand {
    let horizontal = if relative {
        sequence.iter().all(|p| p.y.is_fuzzy_zero())
    } else {
        sequence.iter().all(|p| p.y.fuzzy_eq(&start.y))
    };

    if horizontal {
        let sequence = sequence.iter().map(|p| p.x).collect();
        return PathCommand::HorizontalLine { relative, sequence };
    }

    let vertical = if relative {
        sequence.iter().all(|p| p.x.is_fuzzy_zero())
    } else {
        sequence.iter().all(|p| p.x.fuzzy_eq(&start.x))
    };

    if vertical {
        let sequence = sequence.iter().map(|p| p.y).collect();
        return PathCommand::VerticalLine { relative, sequence };
    }

    PathCommand::LineTo { relative, sequence: sequence.to_vec() }
}

/// Returns the current point after `cmd`, for commands other than
/// `MoveTo` and `ClosePath`.
fn end_point(cmd: &PathCommand, current: Point) -> Point {
    let mut p = current;
    match *cmd {
        PathCommand::LineTo { relative, ref sequence }
        | PathCommand::SmoothQuadratic { relative, ref sequence } => {
            for end in sequence {
                p = advance(p, *end, relative);
            }
        }
        PathCommand::HorizontalLine { relative, ref sequence } => {
            for x in sequence {
                p.x = if relative { p.x + x } else { *x };
            }
        }
        PathCommand::VerticalLine { relative, ref sequence } => {
            for y in sequence {
                p.y = if relative { p.y + y } else { *y };
            }
        }
        PathCommand::CurveTo { relative, ref sequence } => {
            for args in sequence {
                p = advance(p, args.end, relative);
            }
        }
        PathCommand::SmoothCurveTo { relative, ref sequence }
        | PathCommand::Quadratic { relative, ref sequence } => {
            for args in sequence {
                p = advance(p, args.end, relative);
            }
        }
        PathCommand::EllipticalArc { relative, ref sequence } => {
            for args in sequence {
                p = advance(p, args.end, relative);
            }
        }
        PathCommand::MoveTo { .. } | PathCommand::ClosePath => {}
    }

    p
}
