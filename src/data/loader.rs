use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use super::model::{CourseList, CourseRecord};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the course list from `path`.
///
/// Only failing to open the file is an error. Malformed lines are dropped,
/// and a read failure part-way keeps whatever was parsed before it.
pub fn load_file(path: &Path) -> Result<CourseList, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_records(BufReader::new(file));
    info!(
        "loaded {} course records from {} ({} lines skipped)",
        list.len(),
        path.display(),
        list.skipped
    );
    if list.is_empty() {
        warn!("{} contains no course records", path.display());
    }
    Ok(list)
}

/// Parse every line of `reader` into a [`CourseList`].
pub fn parse_records<R: BufRead>(reader: R) -> CourseList {
    let mut list = CourseList::default();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let bytes = match line {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("stopped reading at line {line_no}: {e}");
                break;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        let text = text.strip_suffix('\r').unwrap_or(&text);

        match parse_line(text) {
            Some(record) => list.records.push(record),
            None => {
                debug!("skipping malformed line {line_no}: {text:?}");
                list.skipped += 1;
            }
        }
    }

    list
}

// ---------------------------------------------------------------------------
// Line grammar:  <mark:real> <code:integer> <name:rest-of-line>
// ---------------------------------------------------------------------------

/// Parse one line. Returns `None` when the mark or code is missing or not
/// numeric.
///
/// Fields are read as numeric prefixes, so no whitespace is required after
/// the code: `85 10001Algorithms` yields code `10001` and name `Algorithms`,
/// and `85 100.5 Name` yields code `100` and name `.5 Name`.
pub fn parse_line(line: &str) -> Option<CourseRecord> {
    let (mark_tok, rest) = split_prefix(line.trim_start(), real_prefix_len);
    let mark = mark_tok.parse::<f64>().ok().filter(|m| m.is_finite())?;

    let (code_tok, rest) = split_prefix(rest.trim_start(), integer_prefix_len);
    let code = code_tok.parse::<i32>().ok()?;

    let name = rest.trim_start();
    Some(CourseRecord::new(mark, code, name))
}

fn split_prefix(s: &str, prefix_len: fn(&[u8]) -> usize) -> (&str, &str) {
    s.split_at(prefix_len(s.as_bytes()))
}

fn digits_len(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

fn sign_len(b: &[u8]) -> usize {
    usize::from(matches!(b.first(), Some(b'+' | b'-')))
}

/// Length of the leading `[+-]?\d+`, or 0 when there is none.
fn integer_prefix_len(b: &[u8]) -> usize {
    let sign = sign_len(b);
    match digits_len(&b[sign..]) {
        0 => 0,
        n => sign + n,
    }
}

/// Length of the leading `[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?`, or 0.
fn real_prefix_len(b: &[u8]) -> usize {
    let mut end = sign_len(b);
    let int_digits = digits_len(&b[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = digits_len(&b[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&b[end + 1..]);
        let exp_digits = digits_len(&b[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn parses_mark_code_and_name() {
        let rec = parse_line("85 10001 Intro to Systems").unwrap();
        assert_eq!(rec, CourseRecord::new(85.0, 10001, "Intro to Systems"));
    }

    #[test]
    fn name_keeps_inner_and_trailing_spacing() {
        let rec = parse_line("  67.5\t30012   Quantum  Mechanics  ").unwrap();
        assert_eq!(rec.mark, 67.5);
        assert_eq!(rec.code, 30012);
        assert_eq!(rec.name, "Quantum  Mechanics  ");
    }

    #[test]
    fn name_may_be_empty() {
        let rec = parse_line("55 40001").unwrap();
        assert_eq!(rec.name, "");
        let rec = parse_line("55 40001   ").unwrap();
        assert_eq!(rec.name, "");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("abc 10001 Name").is_none());
        assert!(parse_line("85 Name only").is_none());
        assert!(parse_line("85").is_none());
        assert!(parse_line("85abc 10001 Name").is_none());
        assert!(parse_line("inf 10001 Not a mark").is_none());
        assert!(parse_line(". 10001 Lone dot").is_none());
        assert!(parse_line("85 - 10001 Bare sign").is_none());
    }

    #[test]
    fn name_may_follow_the_code_directly() {
        let rec = parse_line("85 10001Algorithms").unwrap();
        assert_eq!(rec, CourseRecord::new(85.0, 10001, "Algorithms"));
    }

    #[test]
    fn fractional_code_stops_at_the_point() {
        let rec = parse_line("85 100.5 Name").unwrap();
        assert_eq!(rec.code, 100);
        assert_eq!(rec.name, ".5 Name");
    }

    #[test]
    fn mark_accepts_real_number_forms() {
        assert_eq!(parse_line(".5 10001 A").unwrap().mark, 0.5);
        assert_eq!(parse_line("7. 10001 A").unwrap().mark, 7.0);
        assert_eq!(parse_line("-1.5e1 10001 A").unwrap().mark, -15.0);
        assert_eq!(parse_line("+62 10001 A").unwrap().mark, 62.0);
        assert_eq!(parse_line("1e2x 10001 A"), None);
        assert_eq!(parse_line("1e2 10001 A").unwrap().mark, 100.0);
        assert!(parse_line("1e400 10001 Overflowing mark").is_none());
    }

    #[test]
    fn out_of_range_code_is_rejected() {
        assert!(parse_line("85 99999999999 Overflow").is_none());
    }

    #[test]
    fn parse_records_skips_bad_lines_and_keeps_order() {
        let data = "85 10001 Intro to Systems\r\n\
                    garbage line\n\
                    72 20002 Data Structures\n\
                    \n\
                    91 10003 Algorithms";
        let list = parse_records(Cursor::new(data));

        assert_eq!(list.len(), 3);
        assert_eq!(list.skipped, 2);
        let codes: Vec<i32> = list.records.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![10001, 20002, 10003]);
        assert_eq!(list.records[0].name, "Intro to Systems");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let data: &[u8] = b"60 20005 Caf\xe9 Studies\n";
        let list = parse_records(Cursor::new(data));
        assert_eq!(list.len(), 1);
        assert_eq!(list.records[0].code, 20005);
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "85 10001 Intro to Systems").unwrap();
        writeln!(file, "not a record").unwrap();
        writeln!(file, "72 20002 Data Structures").unwrap();

        let list = load_file(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.skipped, 1);
    }

    #[test]
    fn file_without_records_loads_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header line").unwrap();

        let list = load_file(file.path()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.skipped, 1);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courselist.dat");

        let err = load_file(&path).unwrap_err();
        let LoadError::SourceUnavailable { path: reported, .. } = err;
        assert_eq!(reported, path);
    }
}
