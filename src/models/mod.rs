pub mod report;
pub mod snapshot;
pub mod stream;
pub mod window;
pub mod winfo;
