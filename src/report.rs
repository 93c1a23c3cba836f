use std::fmt;
use std::io::{self, Write};

use crate::data::filter::FilteredView;
use crate::data::model::YearFilter;
use crate::stats::Summary;

pub const NO_COURSES_MESSAGE: &str = "No courses have been found for the selected year.";

/// One-decimal rendering; NaN or infinite values (a single mark) print as
/// `undefined`.
struct OneDecimal(f64);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "undefined")
        }
    }
}

/// Print the listing and its statistics block.
///
/// An empty view prints only [`NO_COURSES_MESSAGE`] and computes nothing.
pub fn render<W: Write>(out: &mut W, view: &FilteredView, filter: YearFilter) -> io::Result<()> {
    let Some(summary) = Summary::compute(&view.marks) else {
        return writeln!(out, "{NO_COURSES_MESSAGE}");
    };

    for record in &view.records {
        writeln!(out, "{record}")?;
    }

    let scope = match filter {
        YearFilter::AllYears => "across all years ".to_string(),
        YearFilter::Year(year) => format!("of year {year}"),
    };
    writeln!(out)?;
    writeln!(
        out,
        "The relevant statistics for courses {scope} are as follows - "
    )?;
    writeln!(out)?;

    write_summary(out, &summary)?;
    writeln!(
        out,
        "Total number of records for your selection: {}",
        summary.count
    )?;
    writeln!(out)
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Mean: {}", OneDecimal(summary.mean))?;
    writeln!(out, "Standard Deviation: {}", OneDecimal(summary.std_dev))?;
    writeln!(out, "Standard Error: {}", OneDecimal(summary.std_error))?;
    writeln!(out)
}
