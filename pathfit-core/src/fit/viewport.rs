// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

use crate::{Error, ErrorKind, Result};

/// A source coordinate rectangle.
///
/// `width` and `height` are always positive.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    /// Minimum x.
    pub x: f64,
    /// Minimum y.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, checking that the size is positive.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            let text = format!("{} {} {} {}", x, y, width, height);
            return Err(Error::new(ErrorKind::InvalidViewBox, text));
        }

        Ok(Viewport { x, y, width, height })
    }

    /// Parses a `viewBox` attribute value.
    ///
    /// Four numbers separated by commas and/or whitespace.
    pub fn from_view_box(text: &str) -> Result<Self> {
        let vb: svgtypes::ViewBox = text.parse()
            .map_err(|_| Error::new(ErrorKind::InvalidViewBox, text))?;

        Viewport::new(vb.x, vb.y, vb.w, vb.h)
            .map_err(|_| Error::new(ErrorKind::InvalidViewBox, text))
    }

    /// Creates a viewport at the origin from numeric lengths.
    pub fn from_size(width: f64, height: f64) -> Result<Self> {
        let width = check_length(width)?;
        let height = check_length(height)?;
        Ok(Viewport { x: 0.0, y: 0.0, width, height })
    }

    /// Creates a viewport from SVG root attributes.
    ///
    /// A `viewBox` takes precedence. Otherwise both `width` and `height`
    /// are required.
    pub fn from_attributes(
        width: Option<&str>,
        height: Option<&str>,
        view_box: Option<&str>,
    ) -> Result<Self> {
        if let Some(view_box) = view_box {
            return Viewport::from_view_box(view_box);
        }

        match (width, height) {
            (Some(width), Some(height)) => {
                Viewport::from_size(parse_length(width)?, parse_length(height)?)
            }
            _ => {
                let text = format!("width={:?} height={:?}", width, height);
                Err(Error::new(ErrorKind::InsufficientData, text))
            }
        }
    }
}

/// Checks that a numeric length is positive and finite.
pub fn check_length(n: f64) -> Result<f64> {
    if n > 0.0 && n.is_finite() {
        Ok(n)
    } else {
        Err(Error::new(ErrorKind::InvalidLength, n.to_string()))
    }
}

/// Parses a positive length, unit-less or in `px`.
pub fn parse_length(text: &str) -> Result<f64> {
    let err = || Error::new(ErrorKind::InvalidLength, text);

    let length: svgtypes::Length = text.trim().parse().map_err(|_| err())?;
    match length.unit {
        svgtypes::LengthUnit::None | svgtypes::LengthUnit::Px => {}
        _ => return Err(err()),
    }

    check_length(length.num).map_err(|_| err())
}


/// An alignment along one axis.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Align {
    Min,
    Mid,
    Max,
}

impl Align {
    fn as_str(self) -> &'static str {
        match self {
            Align::Min => "Min",
            Align::Mid => "Mid",
            Align::Max => "Max",
        }
    }
}

/// A `preserveAspectRatio` value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AspectRatio {
    /// `false` for `none`.
    pub preserve: bool,
    /// Horizontal alignment.
    pub x: Align,
    /// Vertical alignment.
    pub y: Align,
    /// `slice` rather than `meet`.
    pub slice: bool,
}

impl Default for AspectRatio {
    /// `xMidYMid meet`
    fn default() -> Self {
        AspectRatio {
            preserve: true,
            x: Align::Mid,
            y: Align::Mid,
            slice: false,
        }
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = Error;

    /// Parses `none` or `x<Align>Y<Align>`, optionally followed by `meet`
    /// or `slice`.
    ///
    /// `defer` is not supported, since there is no referenced image.
    fn from_str(text: &str) -> Result<Self> {
        let err = || Error::new(ErrorKind::InvalidPreserveAspectRatio, text);

        let ar: svgtypes::AspectRatio = text.trim().parse().map_err(|_| err())?;
        if ar.defer {
            return Err(err());
        }

        use svgtypes::Align as A;
        let (x, y) = match ar.align {
            A::None => {
                if ar.slice {
                    return Err(err());
                }

                return Ok(AspectRatio { preserve: false, ..AspectRatio::default() });
            }
            A::XMinYMin => (Align::Min, Align::Min),
            A::XMidYMin => (Align::Mid, Align::Min),
            A::XMaxYMin => (Align::Max, Align::Min),
            A::XMinYMid => (Align::Min, Align::Mid),
            A::XMidYMid => (Align::Mid, Align::Mid),
            A::XMaxYMid => (Align::Max, Align::Mid),
            A::XMinYMax => (Align::Min, Align::Max),
            A::XMidYMax => (Align::Mid, Align::Max),
            A::XMaxYMax => (Align::Max, Align::Max),
        };

        Ok(AspectRatio { preserve: true, x, y, slice: ar.slice })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.preserve {
            return write!(f, "none");
        }

        write!(f, "x{}Y{} {}", self.x.as_str(), self.y.as_str(),
               if self.slice { "slice" } else { "meet" })
    }
}
