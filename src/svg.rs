// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data as a source of cubic Bézier chains.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{BezPath, Point};

impl BezPath {
    /// Build a path from SVG path data.
    ///
    /// Supported commands are `M`, `L`, `H`, `V`, `C`, `S` and `Z`, each in
    /// absolute and relative form, with implicit repetition of the previous
    /// command. Straight lines become cubic segments whose control points
    /// sit on the end points, so they flatten to their chords. A `Z` adds a
    /// closing line when the current point is not already the start point.
    ///
    /// Only one subpath is supported, since the result describes a single
    /// outline.
    ///
    /// # Errors
    ///
    /// Returns an [`SvgParseError`] if the data is malformed, uses an
    /// unsupported command, contains more than one subpath, or draws nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use silhouette::{BezPath, Point};
    ///
    /// let path = BezPath::from_svg("M0 0 L10 0").unwrap();
    /// assert_eq!(
    ///     path.points(),
    ///     &[
    ///         Point::new(0.0, 0.0),
    ///         Point::new(0.0, 0.0),
    ///         Point::new(10.0, 0.0),
    ///         Point::new(10.0, 0.0),
    ///     ]
    /// );
    /// ```
    pub fn from_svg(data: &str) -> Result<BezPath, SvgParseError> {
        let mut lexer = SvgLexer::new(data);
        let mut builder: Option<PathBuilder> = None;
        let mut last_cmd = 0;
        while let Some(c) = lexer.get_cmd(last_cmd)? {
            if c == b'm' || c == b'M' {
                let pt = lexer.get_maybe_relative(c)?;
                if matches!(&builder, Some(b) if b.points.len() > 1) {
                    return Err(SvgParseError::MultipleSubpaths);
                }
                builder = Some(PathBuilder::new(pt));
                lexer.last_pt = pt;
                // Extra coordinate pairs after a moveto are implicit linetos.
                last_cmd = c - (b'M' - b'L');
                continue;
            }
            let b = builder.as_mut().ok_or(SvgParseError::MissingMoveTo)?;
            match c {
                b'l' | b'L' => {
                    let pt = lexer.get_maybe_relative(c)?;
                    b.line_to(pt);
                }
                b'h' | b'H' => {
                    let x = lexer.get_number()?;
                    let x = if c == b'h' { x + lexer.last_pt.x } else { x };
                    b.line_to(Point::new(x, lexer.last_pt.y));
                }
                b'v' | b'V' => {
                    let y = lexer.get_number()?;
                    let y = if c == b'v' { y + lexer.last_pt.y } else { y };
                    b.line_to(Point::new(lexer.last_pt.x, y));
                }
                b'c' | b'C' => {
                    let p1 = lexer.get_maybe_relative(c)?;
                    let p2 = lexer.get_maybe_relative(c)?;
                    let p3 = lexer.get_maybe_relative(c)?;
                    b.curve_to(p1, p2, p3);
                }
                b's' | b'S' => {
                    let p1 = match last_cmd {
                        b'c' | b'C' | b's' | b'S' => b.reflected_control(),
                        _ => lexer.last_pt,
                    };
                    let p2 = lexer.get_maybe_relative(c)?;
                    let p3 = lexer.get_maybe_relative(c)?;
                    b.curve_to(p1, p2, p3);
                }
                b'z' | b'Z' => {
                    b.close();
                    lexer.last_pt = b.current();
                    // No implicit repetition after a closepath.
                    last_cmd = 0;
                    continue;
                }
                _ => return Err(SvgParseError::UnknownCommand(char::from(c))),
            }
            lexer.last_pt = b.current();
            last_cmd = c;
        }
        match builder {
            Some(b) if b.points.len() > 1 => Ok(BezPath::from_validated(b.points)),
            _ => Err(SvgParseError::Empty),
        }
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// Every segment is written as an absolute `C` command. No care is taken
    /// to produce a short string.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BezPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start();
        write!(f, "M{},{}", start.x, start.y)?;
        for seg in self.segments() {
            write!(
                f,
                " C{},{} {},{} {},{}",
                seg.p1.x, seg.p1.y, seg.p2.x, seg.p2.y, seg.p3.x, seg.p3.y
            )?;
        }
        Ok(())
    }
}

/// An error which can be returned when parsing SVG path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SvgParseError {
    /// A number was expected.
    Wrong,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// Encountered an unknown or unsupported command letter.
    UnknownCommand(char),
    /// A drawing command appeared before the first moveto.
    MissingMoveTo,
    /// A second subpath was started after the first one drew something.
    MultipleSubpaths,
    /// The data contains no segments.
    Empty,
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgParseError::Wrong => write!(f, "Unable to parse a number"),
            SvgParseError::UnexpectedEof => write!(f, "Unexpected EOF"),
            SvgParseError::UnknownCommand(letter) => write!(f, "Unknown command, \"{letter}\""),
            SvgParseError::MissingMoveTo => write!(f, "Path data must start with a moveto"),
            SvgParseError::MultipleSubpaths => write!(f, "Only a single subpath is supported"),
            SvgParseError::Empty => write!(f, "Path data contains no segments"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SvgParseError {}

/// Accumulates control points in [`BezPath`] layout.
struct PathBuilder {
    points: Vec<Point>,
    start: Point,
}

impl PathBuilder {
    fn new(start: Point) -> PathBuilder {
        PathBuilder {
            points: alloc::vec![start],
            start,
        }
    }

    fn current(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    fn line_to(&mut self, pt: Point) {
        let current = self.current();
        self.points.extend([current, pt, pt]);
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.points.extend([p1, p2, p3]);
    }

    /// The reflection of the previous segment's second control point about
    /// the current point.
    fn reflected_control(&self) -> Point {
        let n = self.points.len();
        let current = self.points[n - 1];
        let ctrl = self.points[n - 2];
        Point::new(2.0 * current.x - ctrl.x, 2.0 * current.y - ctrl.y)
    }

    fn close(&mut self) {
        if self.current() != self.start {
            self.line_to(self.start);
        }
    }
}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
    last_pt: Point,
}

impl SvgLexer<'_> {
    fn new(data: &str) -> SvgLexer<'_> {
        SvgLexer {
            data,
            ix: 0,
            last_pt: Point::ZERO,
        }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    fn get_cmd(&mut self, last_cmd: u8) -> Result<Option<u8>, SvgParseError> {
        self.skip_ws();
        let Some(c) = self.get_byte() else {
            return Ok(None);
        };
        if c.is_ascii_alphabetic() {
            return Ok(Some(c));
        }
        self.unget();
        if last_cmd != 0 && (c == b'-' || c == b'+' || c == b'.' || c.is_ascii_digit()) {
            // Plausible number start
            Ok(Some(last_cmd))
        } else {
            Err(SvgParseError::Wrong)
        }
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn get_number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let start = self.ix;
        let c = self.get_byte().ok_or(SvgParseError::UnexpectedEof)?;
        if !(c == b'-' || c == b'+') {
            self.unget();
        }
        let mut digit_count = 0;
        let mut seen_period = false;
        while let Some(c) = self.get_byte() {
            if c.is_ascii_digit() {
                digit_count += 1;
            } else if c == b'.' && !seen_period {
                seen_period = true;
            } else {
                self.unget();
                break;
            }
        }
        if digit_count == 0 {
            return Err(SvgParseError::Wrong);
        }
        self.skip_exponent();
        self.data[start..self.ix]
            .parse()
            .map_err(|_| SvgParseError::Wrong)
    }

    /// Consume an exponent suffix such as `e-3`, if one is present.
    fn skip_exponent(&mut self) {
        let mark = self.ix;
        if !matches!(self.peek_byte(), Some(b'e' | b'E')) {
            return;
        }
        self.ix += 1;
        if matches!(self.peek_byte(), Some(b'-' | b'+')) {
            self.ix += 1;
        }
        let digits_start = self.ix;
        while matches!(self.peek_byte(), Some(c) if c.is_ascii_digit()) {
            self.ix += 1;
        }
        if self.ix == digits_start {
            self.ix = mark;
        }
    }

    fn get_number_pair(&mut self) -> Result<Point, SvgParseError> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        self.opt_comma();
        Ok(Point::new(x, y))
    }

    fn get_maybe_relative(&mut self, cmd: u8) -> Result<Point, SvgParseError> {
        let pt = self.get_number_pair()?;
        if cmd.is_ascii_lowercase() {
            Ok(Point::new(pt.x + self.last_pt.x, pt.y + self.last_pt.y))
        } else {
            Ok(pt)
        }
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }
}
