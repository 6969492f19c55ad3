pub mod calculator;
pub mod labels;
pub mod logic;
pub mod tracker;
