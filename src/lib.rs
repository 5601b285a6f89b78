//! term2048 library exports for testing

pub mod audio;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
