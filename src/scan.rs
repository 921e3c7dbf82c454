use std::ops::Range;

/// Parse a fixed-point decimal with one fractional digit into tenths.
///
/// `"12.3"` -> 123, `"-5.0"` -> -50. A leading `-` flips the sign and the
/// single `.` is skipped; everything else is folded in as a digit. Input is
/// assumed well-formed (`-?[0-9]+\.[0-9]`); anything else produces garbage,
/// not an error.
pub fn parse_tenths(field: &[u8]) -> i32 {
    let mut value = 0i32;
    let mut neg = false;
    for &b in field {
        match b {
            b'-' => neg = true,
            b'.' => {}
            _ => value = value * 10 + (b - b'0') as i32,
        }
    }
    if neg {
        -value
    } else {
        value
    }
}

/// Iterator over the `key;value` lines a worker owns, yielding the key slice
/// and the value in tenths.
///
/// A worker owns exactly the lines whose start offset falls inside its
/// assigned range. The constructor realigns the start: a cut landing
/// mid-line skips forward past that line's terminator (the previous worker
/// finishes it), while a cut already sitting on a line start scans in place.
/// A line begun before the end boundary is parsed to completion even when it
/// runs past it, and end-of-buffer acts as a terminator for a final
/// unterminated line.
pub struct LineScanner<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(buf: &'a [u8], range: Range<usize>) -> Self {
        let mut pos = range.start;
        if pos > 0 && buf[pos - 1] != b'\n' {
            pos = match buf[pos..].iter().position(|&b| b == b'\n') {
                Some(nl) => pos + nl + 1,
                None => buf.len(),
            };
        }
        Self {
            buf,
            pos,
            end: range.end,
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = (&'a [u8], i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end || self.pos >= self.buf.len() {
            return None;
        }
        let line = self.pos;
        let sep = line + self.buf[line..].iter().position(|&b| b == b';')?;
        let terminator = match self.buf[sep + 1..].iter().position(|&b| b == b'\n') {
            Some(nl) => sep + 1 + nl,
            None => self.buf.len(),
        };
        let value = parse_tenths(&self.buf[sep + 1..terminator]);
        self.pos = terminator + 1;
        Some((&self.buf[line..sep], value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tenths() {
        assert_eq!(parse_tenths(b"12.3"), 123);
        assert_eq!(parse_tenths(b"-5.0"), -50);
        assert_eq!(parse_tenths(b"0.0"), 0);
        assert_eq!(parse_tenths(b"-99.9"), -999);
        assert_eq!(parse_tenths(b"101.7"), 1017);
    }

    fn scan(input: &str, range: Range<usize>) -> Vec<(String, i32)> {
        LineScanner::new(input.as_bytes(), range)
            .map(|(k, v)| (String::from_utf8(k.to_vec()).unwrap(), v))
            .collect()
    }

    #[test]
    fn full_range_yields_every_line() {
        let input = "Tokyo;23.5\nParis;-5.0\nOslo;0.0\n";
        assert_eq!(
            scan(input, 0..input.len()),
            vec![
                ("Tokyo".to_string(), 235),
                ("Paris".to_string(), -50),
                ("Oslo".to_string(), 0),
            ]
        );
    }

    #[test]
    fn missing_final_terminator() {
        let input = "Tokyo;23.5\nParis;-5.0";
        assert_eq!(
            scan(input, 0..input.len()),
            vec![("Tokyo".to_string(), 235), ("Paris".to_string(), -50)]
        );
    }

    #[test]
    fn cut_mid_line_is_skipped_and_finished_by_previous_worker() {
        let input = "Tokyo;23.5\nParis;-5.0\n";
        // Cut at byte 14 splits "Paris;-5.0". The first worker runs past its
        // boundary to finish the line; the second finds nothing left.
        assert_eq!(scan(input, 0..14), vec![
            ("Tokyo".to_string(), 235),
            ("Paris".to_string(), -50),
        ]);
        assert_eq!(scan(input, 14..input.len()), vec![]);
    }

    #[test]
    fn cut_exactly_on_line_start() {
        let input = "Tokyo;23.5\nParis;-5.0\n";
        // Terminator at byte 10, so byte 11 starts "Paris". Neither worker
        // skips or double-counts it.
        assert_eq!(scan(input, 0..11), vec![("Tokyo".to_string(), 235)]);
        assert_eq!(scan(input, 11..input.len()), vec![("Paris".to_string(), -50)]);
    }

    #[test]
    fn cut_exactly_on_terminator() {
        let input = "Tokyo;23.5\nParis;-5.0\n";
        // Cut at byte 10 lands on the '\n' itself: mid-line for the scanner,
        // so the second worker skips to byte 11 while the first finishes
        // "Tokyo" past its boundary.
        assert_eq!(scan(input, 0..10), vec![("Tokyo".to_string(), 235)]);
        assert_eq!(scan(input, 10..input.len()), vec![("Paris".to_string(), -50)]);
    }

    #[test]
    fn empty_range_yields_nothing() {
        let input = "Tokyo;23.5\n";
        assert_eq!(scan(input, 0..0), vec![]);
        assert_eq!(scan(input, 4..4), vec![]);
    }
}
