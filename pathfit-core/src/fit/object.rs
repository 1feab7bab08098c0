// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use crate::parser::{parse_float, Cursor, Token};
use crate::{Error, ErrorKind, Result};

/// A CSS `object-fit` value.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObjectFit {
    Fill,
    Contain,
    Cover,
    None,
    ScaleDown,
}

impl Default for ObjectFit {
    fn default() -> Self {
        ObjectFit::Fill
    }
}

impl FromStr for ObjectFit {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match text.trim() {
            "fill" => Ok(ObjectFit::Fill),
            "contain" => Ok(ObjectFit::Contain),
            "cover" => Ok(ObjectFit::Cover),
            "none" => Ok(ObjectFit::None),
            "scale-down" => Ok(ObjectFit::ScaleDown),
            _ => Err(Error::new(ErrorKind::InvalidObjectFit, text)),
        }
    }
}

impl fmt::Display for ObjectFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ObjectFit::Fill => "fill",
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        };

        write!(f, "{}", s)
    }
}

/// An offset along one axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PositionAxis {
    /// The offset, in percent or pixels.
    pub value: f64,
    /// `value` is a percentage of the free space.
    pub percent: bool,
    /// `value` is measured from the right or bottom edge.
    pub from_far_edge: bool,
}

impl PositionAxis {
    const CENTER: PositionAxis = PositionAxis { value: 50.0, percent: true, from_far_edge: false };
    const NEAR: PositionAxis = PositionAxis { value: 0.0, percent: true, from_far_edge: false };
    const FAR: PositionAxis = PositionAxis { value: 0.0, percent: true, from_far_edge: true };

    /// Returns the offset inside `free` space, which is the target size
    /// minus the scaled source size.
    pub fn offset(&self, free: f64) -> f64 {
        match (self.percent, self.from_far_edge) {
            (true, false) => free * self.value / 100.0,
            (true, true) => free * (100.0 - self.value) / 100.0,
            (false, false) => self.value,
            (false, true) => free - self.value,
        }
    }

    // Moves a length to the edge a keyword names.
    fn measured_from(self, edge: PositionAxis) -> PositionAxis {
        PositionAxis { from_far_edge: edge.from_far_edge, ..self }
    }
}

/// A CSS `object-position` value.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ObjectPosition {
    pub x: PositionAxis,
    pub y: PositionAxis,
}

impl Default for ObjectPosition {
    /// `50% 50%`
    fn default() -> Self {
        ObjectPosition { x: PositionAxis::CENTER, y: PositionAxis::CENTER }
    }
}

// Token kinds. Keyword sets below are unions of these.
const LENGTH: u8 = 0b0001;
const VERTICAL: u8 = 0b0010;
const HORIZONTAL: u8 = 0b0100;
const CENTER: u8 = 0b1000;

const X_KEYWORD: u8 = HORIZONTAL | CENTER;
const Y_KEYWORD: u8 = VERTICAL | CENTER;
const X_ANY: u8 = X_KEYWORD | LENGTH;
const Y_ANY: u8 = Y_KEYWORD | LENGTH;

#[derive(Clone, Copy, Debug)]
struct PositionToken {
    kind: u8,
    axis: PositionAxis,
}

impl PositionToken {
    #[inline]
    fn is(&self, kinds: u8) -> bool {
        self.kind & kinds != 0
    }
}

fn classify(text: &str) -> Option<PositionToken> {
    let (kind, axis) = match text {
        "center" => (CENTER, PositionAxis::CENTER),
        "left" => (HORIZONTAL, PositionAxis::NEAR),
        "right" => (HORIZONTAL, PositionAxis::FAR),
        "top" => (VERTICAL, PositionAxis::NEAR),
        "bottom" => (VERTICAL, PositionAxis::FAR),
        _ => {
            let mut c = Cursor::new("", text);
            let value = parse_float(c.consume(Token::SignedNumber))?;
            let percent = match c.rest() {
                "%" => true,
                "px" => false,
                _ => return None,
            };

            (LENGTH, PositionAxis { value, percent, from_far_edge: false })
        }
    };

    Some(PositionToken { kind, axis })
}

impl FromStr for ObjectPosition {
    type Err = Error;

    /// Parses the CSS position shorthand of one to four tokens.
    fn from_str(text: &str) -> Result<Self> {
        let err = || Error::new(ErrorKind::InvalidObjectPosition, text);

        let mut tokens = Vec::with_capacity(4);
        for word in text.split_whitespace() {
            tokens.push(classify(word).ok_or_else(err)?);
        }

        let (x, y) = match tokens.as_slice() {
            [p] => {
                if p.is(VERTICAL) {
                    (PositionAxis::CENTER, p.axis)
                } else {
                    (p.axis, PositionAxis::CENTER)
                }
            }
            [p0, p1] => {
                if p0.is(X_ANY) && p1.is(Y_ANY) {
                    (p0.axis, p1.axis)
                } else if p0.is(Y_KEYWORD) && p1.is(X_ANY)
                    && (p0.is(VERTICAL) || p1.is(HORIZONTAL))
                {
                    (p1.axis, p0.axis)
                } else {
                    return Err(err());
                }
            }
            [p0, p1, p2] => {
                if p0.is(HORIZONTAL) && p1.is(LENGTH) && p2.is(Y_KEYWORD) {
                    (p1.axis.measured_from(p0.axis), p2.axis)
                } else if p0.is(X_KEYWORD) && p1.is(VERTICAL) && p2.is(LENGTH) {
                    (p0.axis, p2.axis.measured_from(p1.axis))
                } else if p0.is(Y_KEYWORD) && p1.is(HORIZONTAL) && p2.is(LENGTH) {
                    (p2.axis.measured_from(p1.axis), p0.axis)
                } else if p0.is(VERTICAL) && p1.is(LENGTH) && p2.is(X_KEYWORD) {
                    (p2.axis, p1.axis.measured_from(p0.axis))
                } else {
                    return Err(err());
                }
            }
            [p0, p1, p2, p3] => {
                if !(p1.is(LENGTH) && p3.is(LENGTH)) {
                    return Err(err());
                }

                if p0.is(HORIZONTAL) && p2.is(VERTICAL) {
                    (p1.axis.measured_from(p0.axis), p3.axis.measured_from(p2.axis))
                } else if p0.is(VERTICAL) && p2.is(HORIZONTAL) {
                    (p3.axis.measured_from(p2.axis), p1.axis.measured_from(p0.axis))
                } else {
                    return Err(err());
                }
            }
            _ => return Err(err()),
        };

        Ok(ObjectPosition { x, y })
    }
}

/// An `object-fit` and `object-position` pair.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ObjectStyle {
    pub fit: ObjectFit,
    pub position: ObjectPosition,
}

impl ObjectStyle {
    /// Parses both properties, using defaults for missing ones.
    pub fn new(fit: Option<&str>, position: Option<&str>) -> Result<Self> {
        let mut style = ObjectStyle::default();
        style.update(fit, position)?;
        Ok(style)
    }

    /// Replaces the given properties.
    ///
    /// Nothing changes when either value is invalid.
    pub fn update(&mut self, fit: Option<&str>, position: Option<&str>) -> Result<()> {
        let fit = match fit {
            Some(text) => text.parse()?,
            None => self.fit,
        };

        let position = match position {
            Some(text) => text.parse()?,
            None => self.position,
        };

        self.fit = fit;
        self.position = position;
        Ok(())
    }

    /// Reads `object-fit` and `object-position` from a CSS declaration block,
    /// such as the content of a `style` attribute.
    ///
    /// Other properties are ignored. Missing properties keep their defaults.
    pub fn from_css(text: &str) -> Result<Self> {
        let mut style = ObjectStyle::default();
        style.update_from_css(text)?;
        Ok(style)
    }

    /// Like `from_css`, but missing properties keep their current values.
    pub fn update_from_css(&mut self, text: &str) -> Result<()> {
        let mut fit = None;
        let mut position = None;
        for declaration in simplecss::DeclarationTokenizer::from(text) {
            match declaration.name {
                "object-fit" => fit = Some(declaration.value),
                "object-position" => position = Some(declaration.value),
                _ => log::trace!("Ignoring CSS property '{}'.", declaration.name),
            }
        }

        self.update(fit, position)
    }
}
