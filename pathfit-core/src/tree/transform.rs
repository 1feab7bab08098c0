// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// A single transform function.
///
/// Optional arguments are kept as written; defaults are resolved by
/// `NormalizedTransform`. Angles are in degrees.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TransformOp {
    Matrix {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
    Translate {
        tx: f64,
        ty: Option<f64>,
    },
    Scale {
        sx: f64,
        sy: Option<f64>,
    },
    /// `cx` and `cy` are either both set or both unset.
    Rotate {
        angle: f64,
        cx: Option<f64>,
        cy: Option<f64>,
    },
    SkewX {
        angle: f64,
    },
    SkewY {
        angle: f64,
    },
}

impl TransformOp {
    /// Returns the function name.
    pub fn name(&self) -> &'static str {
        match self {
            TransformOp::Matrix { .. } => "matrix",
            TransformOp::Translate { .. } => "translate",
            TransformOp::Scale { .. } => "scale",
            TransformOp::Rotate { .. } => "rotate",
            TransformOp::SkewX { .. } => "skewX",
            TransformOp::SkewY { .. } => "skewY",
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        match *self {
            TransformOp::Matrix { a, b, c, d, e, f: ff } => {
                write!(f, "{} {} {} {} {} {}", a, b, c, d, e, ff)?;
            }
            TransformOp::Translate { tx: x, ty: y } | TransformOp::Scale { sx: x, sy: y } => {
                write!(f, "{}", x)?;
                if let Some(y) = y {
                    write!(f, " {}", y)?;
                }
            }
            TransformOp::Rotate { angle, cx, cy } => {
                write!(f, "{}", angle)?;
                if let (Some(cx), Some(cy)) = (cx, cy) {
                    write!(f, " {} {}", cx, cy)?;
                }
            }
            TransformOp::SkewX { angle } | TransformOp::SkewY { angle } => {
                write!(f, "{}", angle)?;
            }
        }
        write!(f, ")")
    }
}

/// An ordered list of transform functions.
///
/// As in SVG, the last function is applied to a point first.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct TransformList(pub Vec<TransformOp>);

impl TransformList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        TransformList(Vec::new())
    }
}

impl std::ops::Deref for TransformList {
    type Target = Vec<TransformOp>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for TransformList {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::iter::FromIterator<TransformOp> for TransformList {
    fn from_iter<I: IntoIterator<Item = TransformOp>>(iter: I) -> Self {
        TransformList(iter.into_iter().collect())
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, op) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", op)?;
        }

        Ok(())
    }
}
