use std::fmt;

use crate::error::InvalidChoice;

// ---------------------------------------------------------------------------
// CourseRecord – one line of the course list
// ---------------------------------------------------------------------------

/// Divisor that turns a course code into its academic year.
pub const YEAR_DIVISOR: i32 = 10_000;

/// A single parsed course (one line of `courselist.dat`).
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    /// Recorded score.
    pub mark: f64,
    /// Course identifier, e.g. `10001`.
    pub code: i32,
    /// Course title: everything after the code, kept verbatim.
    pub name: String,
}

impl CourseRecord {
    pub fn new(mark: f64, code: i32, name: impl Into<String>) -> Self {
        Self {
            mark,
            code,
            name: name.into(),
        }
    }

    /// Academic year encoded in the course code (truncating division).
    pub fn year(&self) -> i32 {
        self.code / YEAR_DIVISOR
    }
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

// ---------------------------------------------------------------------------
// CourseList – the complete parsed file
// ---------------------------------------------------------------------------

/// All records parsed from the data source, in file order.
#[derive(Debug, Clone, Default)]
pub struct CourseList {
    pub records: Vec<CourseRecord>,
    /// Lines that did not match `<mark> <code> <name>` and were dropped.
    pub skipped: usize,
}

impl CourseList {
    /// Number of successfully parsed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Operator selections
// ---------------------------------------------------------------------------

/// Which academic year the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    AllYears,
    Year(i32),
}

/// Highest academic year a course code can encode.
pub const LAST_YEAR: i32 = 4;

/// Operator menu choice: `0` means every year, `1..=4` a single year.
impl TryFrom<i32> for YearFilter {
    type Error = InvalidChoice;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            0 => Ok(YearFilter::AllYears),
            1..=LAST_YEAR => Ok(YearFilter::Year(choice)),
            value => Err(InvalidChoice { what: "year", value }),
        }
    }
}

impl YearFilter {
    pub fn matches(&self, record: &CourseRecord) -> bool {
        match self {
            YearFilter::AllYears => true,
            YearFilter::Year(year) => record.year() == *year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::AllYears => write!(f, "all years"),
            YearFilter::Year(year) => write!(f, "year {year}"),
        }
    }
}

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ByTitle,
    ByCode,
}

/// Operator menu choice: `1` is by title, `2` by code.
impl TryFrom<i32> for SortKey {
    type Error = InvalidChoice;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(SortKey::ByTitle),
            2 => Ok(SortKey::ByCode),
            value => Err(InvalidChoice {
                what: "sort method",
                value,
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::ByTitle => write!(f, "course title"),
            SortKey::ByCode => write!(f, "course code"),
        }
    }
}
