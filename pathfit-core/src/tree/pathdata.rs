// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use kurbo::Point;

/// Arguments of a cubic Bézier curve segment.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveArgs {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Arguments of a segment with a single control point.
///
/// Used by quadratic curves and by smooth cubic curves, whose first control
/// point is implied.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ControlArgs {
    pub control: Point,
    pub end: Point,
}

/// Arguments of an elliptical arc segment.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcArgs {
    pub rx: f64,
    pub ry: f64,
    /// In degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

/// A path data command.
///
/// Unlike `usvg`-style normalized paths, commands are kept exactly as
/// written: relative commands stay relative and shorthand commands are not
/// expanded. Every command except `ClosePath` holds one or more argument
/// groups, one per implicit repetition.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum PathCommand {
    MoveTo {
        relative: bool,
        sequence: Vec<Point>,
    },
    LineTo {
        relative: bool,
        sequence: Vec<Point>,
    },
    HorizontalLine {
        relative: bool,
        sequence: Vec<f64>,
    },
    VerticalLine {
        relative: bool,
        sequence: Vec<f64>,
    },
    CurveTo {
        relative: bool,
        sequence: Vec<CurveArgs>,
    },
    SmoothCurveTo {
        relative: bool,
        sequence: Vec<ControlArgs>,
    },
    Quadratic {
        relative: bool,
        sequence: Vec<ControlArgs>,
    },
    SmoothQuadratic {
        relative: bool,
        sequence: Vec<Point>,
    },
    EllipticalArc {
        relative: bool,
        sequence: Vec<ArcArgs>,
    },
    ClosePath,
}

impl PathCommand {
    /// Returns the upper-case command letter.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo { .. } => 'M',
            PathCommand::LineTo { .. } => 'L',
            PathCommand::HorizontalLine { .. } => 'H',
            PathCommand::VerticalLine { .. } => 'V',
            PathCommand::CurveTo { .. } => 'C',
            PathCommand::SmoothCurveTo { .. } => 'S',
            PathCommand::Quadratic { .. } => 'Q',
            PathCommand::SmoothQuadratic { .. } => 'T',
            PathCommand::EllipticalArc { .. } => 'A',
            PathCommand::ClosePath => 'Z',
        }
    }

    /// Checks that the command uses relative coordinates.
    ///
    /// `ClosePath` is never relative.
    pub fn is_relative(&self) -> bool {
        match *self {
              PathCommand::MoveTo { relative, .. }
            | PathCommand::LineTo { relative, .. }
            | PathCommand::HorizontalLine { relative, .. }
            | PathCommand::VerticalLine { relative, .. }
            | PathCommand::CurveTo { relative, .. }
            | PathCommand::SmoothCurveTo { relative, .. }
            | PathCommand::Quadratic { relative, .. }
            | PathCommand::SmoothQuadratic { relative, .. }
            | PathCommand::EllipticalArc { relative, .. } => relative,
            PathCommand::ClosePath => false,
        }
    }
}

/// An SVG path data container.
///
/// Commands may be absolute or relative. A parsed path always starts
/// with a `MoveTo`.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct PathData(pub Vec<PathCommand>);

impl PathData {
    /// Creates a new path.
    #[inline]
    pub fn new() -> Self {
        PathData(Vec::new())
    }

    /// Creates a new path with a specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        PathData(Vec::with_capacity(capacity))
    }
}

impl std::ops::Deref for PathData {
    type Target = Vec<PathCommand>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for PathData {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::iter::FromIterator<PathCommand> for PathData {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        PathData(iter.into_iter().collect())
    }
}
