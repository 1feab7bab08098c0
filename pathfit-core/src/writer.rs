// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Path data serialization.

use kurbo::Point;

use crate::{ArcArgs, ControlArgs, CurveArgs, PathCommand, PathData};

/// Path data formatting options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WriteOptions {
    /// Number of significant digits.
    ///
    /// Numbers smaller than `10^-(precision + 3)` are written as `0`.
    ///
    /// Default: 6
    pub precision: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            precision: 6,
        }
    }
}

/// Writes path data in the most compact form that keeps commands as they are.
///
/// Commands follow each other without a separator and numbers are separated
/// by a single space, e.g. `M0 0l2 -3z`.
pub fn write_path(path: &PathData, opt: &WriteOptions) -> String {
    let mut out = String::new();
    for cmd in path.iter() {
        write_command(cmd, opt, &mut out);
    }

    out
}

fn write_command(cmd: &PathCommand, opt: &WriteOptions, out: &mut String) {
    if let PathCommand::ClosePath = cmd {
        out.push('z');
        return;
    }

    let letter = cmd.letter();
    out.push(if cmd.is_relative() { letter.to_ascii_lowercase() } else { letter });

    let mut w = NumberWriter { out, opt, first: true };
    match cmd {
          PathCommand::MoveTo { sequence, .. }
        | PathCommand::LineTo { sequence, .. }
        | PathCommand::SmoothQuadratic { sequence, .. } => {
            for p in sequence {
                w.point(*p);
            }
        }
          PathCommand::HorizontalLine { sequence, .. }
        | PathCommand::VerticalLine { sequence, .. } => {
            for n in sequence {
                w.number(*n);
            }
        }
        PathCommand::CurveTo { sequence, .. } => {
            for &CurveArgs { control1, control2, end } in sequence {
                w.point(control1);
                w.point(control2);
                w.point(end);
            }
        }
          PathCommand::SmoothCurveTo { sequence, .. }
        | PathCommand::Quadratic { sequence, .. } => {
            for &ControlArgs { control, end } in sequence {
                w.point(control);
                w.point(end);
            }
        }
        PathCommand::EllipticalArc { sequence, .. } => {
            for &ArcArgs { rx, ry, x_axis_rotation, large_arc, sweep, end } in sequence {
                w.number(rx);
                w.number(ry);
                w.number(x_axis_rotation);
                w.flag(large_arc);
                w.flag(sweep);
                w.point(end);
            }
        }
        PathCommand::ClosePath => {}
    }
}

struct NumberWriter<'a> {
    out: &'a mut String,
    opt: &'a WriteOptions,
    first: bool,
}

impl NumberWriter<'_> {
    fn separate(&mut self) {
        if !self.first {
            self.out.push(' ');
        }
        self.first = false;
    }

    fn number(&mut self, n: f64) {
        self.separate();
        self.out.push_str(&format_number(n, self.opt.precision));
    }

    fn point(&mut self, p: Point) {
        self.number(p.x);
        self.number(p.y);
    }

    fn flag(&mut self, f: bool) {
        self.separate();
        self.out.push(if f { '1' } else { '0' });
    }
}

/// Formats a number with `precision` significant digits.
pub fn format_number(n: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if n == 0.0 || -n.abs().log10() > (precision + 3) as f64 {
        return "0".to_string();
    }

    // Round in scientific notation, then print the shortest decimal form.
    let rounded: f64 = match format!("{:.*e}", precision - 1, n).parse() {
        Ok(v) => v,
        Err(_) => n,
    };

    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
