use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::data::filter::build_view;
use crate::data::loader::load_file;
use crate::data::model::CourseList;
use crate::prompt::{ask_sort_key, ask_year_filter};
use crate::report::render;

// ---------------------------------------------------------------------------
// One interactive session over a loaded course list
// ---------------------------------------------------------------------------

pub struct CourseStatsApp {
    pub courses: CourseList,
}

impl CourseStatsApp {
    /// Read the course list. The file is closed again before this returns.
    pub fn load(path: &Path) -> Result<Self> {
        let courses = load_file(path)?;
        Ok(Self { courses })
    }

    /// Ask for year and sort order, then print the report.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let filter = ask_year_filter(input, output).context("reading year selection")?;
        let key = ask_sort_key(input, output).context("reading sort selection")?;
        info!("selection: {filter}, sorted by {key}");

        let view = build_view(&self.courses.records, filter, key);
        if view.is_empty() {
            info!("no courses match {filter}");
        }
        render(output, &view, filter).context("writing report")?;
        output.flush().context("flushing report")?;
        Ok(())
    }
}
