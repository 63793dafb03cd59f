pub mod where_condition;
