use std::fmt;
use std::str::FromStr;

use crate::db::table::core::{column::ColumnDefinition, value::Value};
use crate::error::EngineError;

mod create_statement;
mod insert_statement;
mod select_statement;
pub mod statement_tree;

pub use statement_tree::StatementTree;

#[derive(Debug, PartialEq, Clone)]
pub enum SqlStatement {
    CreateDatabase(CreateDatabaseStatement),
    CreateTable(CreateTableStatement),
    InsertInto(InsertIntoStatement),
    Select(SelectStatement),
}

impl SqlStatement {
    pub fn object_name(&self) -> &str {
        match self {
            SqlStatement::CreateDatabase(statement) => &statement.database_name,
            SqlStatement::CreateTable(statement) => &statement.table_name,
            SqlStatement::InsertInto(statement) => &statement.table_name,
            SqlStatement::Select(statement) => &statement.table_name,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct CreateDatabaseStatement {
    pub database_name: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CreateTableStatement {
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InsertIntoStatement {
    pub table_name: String,
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SelectStatement {
    pub table_name: String,
    pub columns: SelectStatementColumns,
    pub where_clause: Option<WhereCondition>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum SelectStatementColumns {
    All,
    Specific(Vec<String>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct WhereCondition {
    pub l_side: Operand,
    pub operator: Operator,
    pub r_side: Operand,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Column(String),
    Value(Value),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessEquals,
    GreaterEquals,
}

impl FromStr for Operator {
    type Err = EngineError;

    fn from_str(operator: &str) -> Result<Self, Self::Err> {
        match operator {
            "=" => Ok(Operator::Equals),
            "!=" => Ok(Operator::NotEquals),
            "<" => Ok(Operator::LessThan),
            ">" => Ok(Operator::GreaterThan),
            "<=" => Ok(Operator::LessEquals),
            ">=" => Ok(Operator::GreaterEquals),
            other => Err(EngineError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessEquals => "<=",
            Operator::GreaterEquals => ">=",
        };
        f.write_str(symbol)
    }
}
