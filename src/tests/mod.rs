#[cfg(test)]
pub mod common;

pub mod assertion_format;
