pub mod create_table;
pub mod helpers;
pub mod insert;
pub mod select;
