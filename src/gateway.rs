pub mod events;
pub mod logs;
#[cfg(test)]
pub mod memory;
