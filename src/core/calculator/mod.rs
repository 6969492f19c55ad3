pub mod aggregate;
pub mod timeline;
