pub mod charts;
pub mod dashboard;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod records;
pub mod theme;
