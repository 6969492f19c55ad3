//! rWinTime main entrypoint.

use rwintime::run;
use rwintime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
