pub mod codec;
pub mod core;
pub mod operations;
pub mod store;
#[cfg(test)]
pub mod test_utils;
