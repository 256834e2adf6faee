pub mod reports;
pub mod scenarios;
pub mod scripted;
pub mod tester;

pub use tester::*;
