use crate::core::tracker::{JsonTracker, Tracker};
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use std::io;

/// Handle the `info` command: parsed identity of every window in one snapshot.
pub fn handle() -> AppResult<()> {
    let mut tracker = JsonTracker::new(io::stdin().lock());
    let snap = tracker.snap()?;

    let mut table = Table::new(vec![
        Column::new("ID", 12),
        Column::new("App", 20),
        Column::new("SubApp", 24),
        Column::new("Title", 40),
    ]);
    for w in &snap.windows {
        let info = w.info();
        table.add_row(vec![w.id.to_string(), info.app, info.sub_app, info.title]);
    }
    print!("{}", table.render());
    Ok(())
}
