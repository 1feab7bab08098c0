// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{comma_wsp, number, test_end, Cursor, Grammar, Token};
use crate::{ErrorKind, Result, TransformList, TransformOp};

/// Parses an SVG transform list.
///
/// Function names are case-sensitive. Units are not allowed.
impl std::str::FromStr for TransformList {
    type Err = crate::Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self> {
        parse_transform_list(text)
    }
}

impl TransformList {
    /// Parses several transform lists as one, in the given order.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self> {
        let text = parts.iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        parse_transform_list(&text)
    }
}

fn parse_transform_list(text: &str) -> Result<TransformList> {
    let commands = Grammar::TransformList.split(text)?;

    let mut list = TransformList(Vec::with_capacity(commands.len()));
    for mut c in commands {
        list.push(parse_function(&mut c)?);
    }

    Ok(list)
}

/// Returns the number of required and of all arguments.
fn arity(name: &str) -> (usize, usize) {
    match name {
        "matrix" => (6, 6),
        "translate" | "scale" => (1, 2),
        "rotate" => (1, 3),
        _ => (1, 1),
    }
}

fn parse_function(c: &mut Cursor) -> Result<TransformOp> {
    let name = c.name();
    let (required, total) = arity(name);

    let mut args = collect_arguments(c, total)?;
    if args.len() != required && args.len() != total {
        return Err(c.error_at_start(ErrorKind::WrongArgumentCount));
    }

    test_end(c, ErrorKind::ExpectedNothingAfterClose)?;

    // Pad optional arguments so the match below stays simple.
    let given = args.len();
    args.resize(total, 0.0);
    let optional = |i: usize| if i < given { Some(args[i]) } else { None };

    let op = match name {
        "matrix" => TransformOp::Matrix {
            a: args[0], b: args[1], c: args[2], d: args[3], e: args[4], f: args[5],
        },
        "translate" => TransformOp::Translate { tx: args[0], ty: optional(1) },
        "scale" => TransformOp::Scale { sx: args[0], sy: optional(1) },
        "rotate" => TransformOp::Rotate { angle: args[0], cx: optional(1), cy: optional(2) },
        "skewX" => TransformOp::SkewX { angle: args[0] },
        _ => TransformOp::SkewY { angle: args[0] },
    };

    Ok(op)
}

/// Reads a parenthesized argument list of at most `total` numbers.
fn collect_arguments(c: &mut Cursor, total: usize) -> Result<Vec<f64>> {
    c.consume(Token::Whitespace);
    if !c.eat(Token::OpenParen) {
        return Err(c.error(ErrorKind::ExpectedOpeningBrace));
    }
    c.consume(Token::Whitespace);

    let mut args = Vec::with_capacity(total);
    for _ in 0..total {
        args.push(number(c, false)?);
        let must_follow = comma_wsp(c);
        if c.eat(Token::CloseParen) && !must_follow {
            return Ok(args);
        }
    }

    Err(c.error(ErrorKind::ExpectedClosingBrace))
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{ErrorKind, TransformList, TransformOp};

    macro_rules! test {
        ($name:ident, $text:expr, $( $op:expr ),*) => (
            #[test]
            fn $name() {
                let list = TransformList::from_str($text).unwrap();
                let expected: Vec<TransformOp> = vec![$( $op ),*];
                assert_eq!(list.0, expected);
            }
        )
    }

    macro_rules! test_err {
        ($name:ident, $text:expr, $kind:expr) => (
            #[test]
            fn $name() {
                assert_eq!(TransformList::from_str($text).unwrap_err().kind, $kind);
            }
        )
    }

    test!(empty, "",);

    test!(matrix, "matrix(1 0, 0 1 -5 6.5)",
        TransformOp::Matrix { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: -5.0, f: 6.5 }
    );

    test!(two_functions, "translate(1, 2) scale(4, 6)",
        TransformOp::Translate { tx: 1.0, ty: Some(2.0) },
        TransformOp::Scale { sx: 4.0, sy: Some(6.0) }
    );

    test!(no_separator, "translate(10)scale(2)",
        TransformOp::Translate { tx: 10.0, ty: None },
        TransformOp::Scale { sx: 2.0, sy: None }
    );

    test!(rotate_about_point, " rotate ( 90 40,40 ) ",
        TransformOp::Rotate { angle: 90.0, cx: Some(40.0), cy: Some(40.0) }
    );

    test!(rotate_plain, "rotate(-45)",
        TransformOp::Rotate { angle: -45.0, cx: None, cy: None }
    );

    test!(skews, "skewX(10) skewY(-5)",
        TransformOp::SkewX { angle: 10.0 },
        TransformOp::SkewY { angle: -5.0 }
    );

    test_err!(matrix_short, "matrix(1, 2, 3, 4, 5)", ErrorKind::WrongArgumentCount);
    test_err!(no_arguments, "translate()", ErrorKind::ExpectedNumber);
    test_err!(unit, "translate(4px)", ErrorKind::ExpectedNumber);
    test_err!(rotate_two, "rotate(10, 1)", ErrorKind::WrongArgumentCount);
    test_err!(scale_units, "scale(10, 1px, 2px)", ErrorKind::ExpectedClosingBrace);
    test_err!(skew_unit, "skewX(10deg)", ErrorKind::ExpectedClosingBrace);
    test_err!(unknown_function, "bla(10)", ErrorKind::ExpectedNothingBeforeCommand);
    test_err!(no_paren, "scale 2", ErrorKind::ExpectedOpeningBrace);
    test_err!(unclosed, "skewX(2", ErrorKind::ExpectedClosingBrace);
    test_err!(too_many, "skewY(1 2)", ErrorKind::ExpectedClosingBrace);
    test_err!(trailing_comma, "scale(2,)", ErrorKind::ExpectedNumber);
    test_err!(junk_after, "scale(2) x", ErrorKind::ExpectedNothingAfterClose);
    test_err!(case_sensitive, "Scale(2)", ErrorKind::ExpectedNothingBeforeCommand);

    #[test]
    fn from_parts_joins_in_order() {
        let list = TransformList::from_parts(&["translate(1)", "scale(2)"]).unwrap();
        assert_eq!(list.to_string(), "translate(1) scale(2)");
    }
}
