pub mod column;
pub mod row;
pub mod table;
pub mod value;
