use crate::db::table::core::{column::ColumnDefinition, value::DataType};
use crate::error::{EngineError, Result};
use crate::interpreter::ast::{
    CreateDatabaseStatement, CreateTableStatement,
    statement_tree::{CreateDatabaseNode, CreateNode, single_table_name},
};

pub fn build_create_database(node: CreateDatabaseNode) -> Result<CreateDatabaseStatement> {
    match node.database {
        Some(database_name) => Ok(CreateDatabaseStatement { database_name }),
        None => Err(EngineError::InvalidStatement(
            "create database names no database".to_string(),
        )),
    }
}

// An absent definition list becomes an empty column list; the engine decides
// whether that is acceptable.
pub fn build_create(node: CreateNode) -> Result<CreateTableStatement> {
    let table_name = single_table_name(&node.table)?;
    let columns = node
        .create_definitions
        .unwrap_or_default()
        .into_iter()
        .map(|definition| {
            ColumnDefinition::new(
                definition.column.column,
                DataType::from_type_name(&definition.definition.data_type),
            )
        })
        .collect();
    Ok(CreateTableStatement {
        table_name,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ast::{SqlStatement, StatementTree};
    use serde_json::json;

    #[test]
    fn create_statement_is_generated_correctly() {
        // CREATE TABLE users (name VARCHAR(255), age INT);
        let tree = StatementTree::from_value(json!({
            "type": "create",
            "keyword": "table",
            "table": [{"db": null, "table": "users"}],
            "create_definitions": [
                {
                    "column": {"type": "column_ref", "column": "name"},
                    "definition": {"dataType": "VARCHAR", "length": 255}
                },
                {
                    "column": {"type": "column_ref", "column": "age"},
                    "definition": {"dataType": "INT"}
                }
            ]
        }));
        assert_eq!(
            SqlStatement::CreateTable(CreateTableStatement {
                table_name: "users".to_string(),
                columns: vec![
                    ColumnDefinition::new("name", DataType::Text),
                    ColumnDefinition::new("age", DataType::Integer),
                ],
            }),
            tree.into_statement().unwrap()
        );
    }

    #[test]
    fn missing_definitions_yield_no_columns() {
        let tree = StatementTree::from_value(json!({
            "type": "create",
            "table": [{"table": "empty"}]
        }));
        match tree.into_statement().unwrap() {
            SqlStatement::CreateTable(statement) => assert!(statement.columns.is_empty()),
            other => panic!("expected CreateTable, got {:?}", other),
        }
    }

    #[test]
    fn create_database_statement_is_generated_correctly() {
        // CREATE DATABASE shop;
        let tree = StatementTree::from_value(json!({
            "type": "create",
            "keyword": "database",
            "database": "shop"
        }));
        assert_eq!(
            SqlStatement::CreateDatabase(CreateDatabaseStatement {
                database_name: "shop".to_string(),
            }),
            tree.into_statement().unwrap()
        );
    }

    #[test]
    fn create_database_without_name_is_invalid() {
        let tree = StatementTree::from_value(json!({"type": "create", "keyword": "DATABASE"}));
        assert!(matches!(
            tree.into_statement(),
            Err(EngineError::InvalidStatement(_))
        ));
    }

    #[test]
    fn create_without_table_is_invalid() {
        let tree = StatementTree::from_value(json!({"type": "create", "table": []}));
        assert!(tree.into_statement().is_err());
    }
}
