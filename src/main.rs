mod app;
mod data;
mod error;
mod prompt;
mod report;
mod stats;

use std::io;
use std::path::Path;

use app::CourseStatsApp;

/// Course list read from the working directory.
const DATA_FILE: &str = "courselist.dat";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = CourseStatsApp::load(Path::new(DATA_FILE))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())
}
