use crate::core::tracker::{JsonTracker, Tracker};
use crate::errors::AppResult;
use std::io;

/// Handle the `deps` command
pub fn handle() -> AppResult<()> {
    let tracker = JsonTracker::new(io::empty());
    println!("{}", tracker.deps());
    Ok(())
}
