pub mod date;
pub mod logs;
pub mod number;
