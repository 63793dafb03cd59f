use tracing::info;

use crate::db::database::Database;
use crate::db::table::codec::encode_header;
use crate::error::{EngineError, Result};
use crate::interpreter::ast::CreateTableStatement;

pub async fn create_table(database: &Database, statement: CreateTableStatement) -> Result<()> {
    if statement.columns.is_empty() {
        return Err(EngineError::NoColumnsDefined(statement.table_name));
    }
    let column_names: Vec<&str> = statement
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    let header = encode_header(&column_names);
    database
        .store
        .create_file(&statement.table_name, &header)
        .await?;
    info!(table = %statement.table_name, columns = %header, "created table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::core::{column::ColumnDefinition, value::DataType};
    use crate::db::table::test_utils::{default_database, empty_database};

    fn users_statement() -> CreateTableStatement {
        CreateTableStatement {
            table_name: "users".to_string(),
            columns: vec![
                ColumnDefinition::new("id", DataType::Integer),
                ColumnDefinition::new("name", DataType::Text),
                ColumnDefinition::new("age", DataType::Integer),
            ],
        }
    }

    #[tokio::test]
    async fn create_table_writes_header_in_column_order() {
        let (dir, database) = empty_database().await;
        assert!(create_table(&database, users_statement()).await.is_ok());
        let content = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
        assert_eq!("id,name,age", content.lines().next().unwrap());
        assert_eq!("id,name,age\n", content);
    }

    #[tokio::test]
    async fn create_table_errors_when_table_already_exists() {
        let (dir, database) = default_database().await;
        let before = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
        let result = create_table(&database, users_statement()).await;
        assert!(matches!(result, Err(EngineError::TableAlreadyExists(_))));
        assert_eq!("Table users already exists", result.unwrap_err().to_string());
        let after = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn create_table_without_columns_errors() {
        let (dir, database) = empty_database().await;
        let statement = CreateTableStatement {
            table_name: "empty".to_string(),
            columns: vec![],
        };
        let result = create_table(&database, statement).await;
        assert!(matches!(result, Err(EngineError::NoColumnsDefined(_))));
        assert!(!dir.path().join("empty.csv").exists());
    }
}
