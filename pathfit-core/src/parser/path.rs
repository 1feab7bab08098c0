// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{
    comma_wsp, coordinate_pair, coordinate_pairs, elliptical_arc, number, test_end,
    Cursor, Grammar, Token,
};
use crate::{ControlArgs, CurveArgs, ErrorKind, PathCommand, PathData, Result};

/// Parses SVG path data.
///
/// The text must start with a moveto command, optionally preceded by
/// whitespace. An empty text yields an empty path.
impl std::str::FromStr for PathData {
    type Err = crate::Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self> {
        parse_path(text)
    }
}

fn parse_path(text: &str) -> Result<PathData> {
    let commands = Grammar::PathData.split(text)?;

    let mut path = PathData::with_capacity(commands.len());
    for (idx, mut c) in commands.into_iter().enumerate() {
        let letter = c.name().as_bytes()[0];
        if idx == 0 && !matches!(letter, b'M' | b'm') {
            return Err(c.error_at_start(ErrorKind::ExpectedMovetoAtStart));
        }

        path.push(parse_command(letter, &mut c)?);
    }

    Ok(path)
}

fn parse_command(letter: u8, c: &mut Cursor) -> Result<PathCommand> {
    let relative = letter.is_ascii_lowercase();

    if letter.eq_ignore_ascii_case(&b'Z') {
        test_end(c, ErrorKind::ExpectedNothingAfterClose)?;
        return Ok(PathCommand::ClosePath);
    }

    c.consume(Token::Whitespace);

    let cmd = match letter.to_ascii_uppercase() {
        b'M' => PathCommand::MoveTo {
            relative,
            sequence: collect_arguments(c, coordinate_pair)?,
        },
        b'L' => PathCommand::LineTo {
            relative,
            sequence: collect_arguments(c, coordinate_pair)?,
        },
        b'H' => PathCommand::HorizontalLine {
            relative,
            sequence: collect_arguments(c, |c| number(c, false))?,
        },
        b'V' => PathCommand::VerticalLine {
            relative,
            sequence: collect_arguments(c, |c| number(c, false))?,
        },
        b'C' => PathCommand::CurveTo {
            relative,
            sequence: collect_arguments(c, |c| {
                let [control1, control2, end] = coordinate_pairs::<3>(c)?;
                Ok(CurveArgs { control1, control2, end })
            })?,
        },
        b'S' => PathCommand::SmoothCurveTo {
            relative,
            sequence: collect_arguments(c, control_args)?,
        },
        b'Q' => PathCommand::Quadratic {
            relative,
            sequence: collect_arguments(c, control_args)?,
        },
        b'T' => PathCommand::SmoothQuadratic {
            relative,
            sequence: collect_arguments(c, coordinate_pair)?,
        },
        _ => PathCommand::EllipticalArc {
            relative,
            sequence: collect_arguments(c, elliptical_arc)?,
        },
    };

    Ok(cmd)
}

fn control_args(c: &mut Cursor) -> Result<ControlArgs> {
    let [control, end] = coordinate_pairs::<2>(c)?;
    Ok(ControlArgs { control, end })
}

/// Reads one or more argument groups.
///
/// Groups are separated by comma-whitespace. A trailing comma demands
/// another group, and anything left unconsumed is read as one.
fn collect_arguments<'a, T, F>(c: &mut Cursor<'a>, mut parse: F) -> Result<Vec<T>>
    where F: FnMut(&mut Cursor<'a>) -> Result<T>
{
    let mut sequence = Vec::new();
    let mut must_follow = true;
    while must_follow || c.has_more() {
        if !sequence.is_empty() {
            must_follow = comma_wsp(c);
        }

        if must_follow || c.has_more() {
            sequence.push(parse(c)?);
        }
    }

    Ok(sequence)
}
