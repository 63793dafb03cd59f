use tracing::debug;

use crate::db::database::Database;
use crate::db::table::codec;
use crate::error::{EngineError, Result};
use crate::interpreter::ast::InsertIntoStatement;

// Every tuple is checked and encoded before the first append. A failure
// part-way through the appends is not rolled back.
pub async fn insert(database: &Database, statement: InsertIntoStatement) -> Result<usize> {
    let table_name = &statement.table_name;
    if statement.values.is_empty() || statement.values.iter().any(|row| row.is_empty()) {
        return Err(EngineError::NoValuesProvided(table_name.clone()));
    }

    if database.config.strict_insert_arity {
        let contents = database.store.read_all(table_name).await?;
        let expected = codec::decode(&contents.header)?.len();
        if let Some(row) = statement.values.iter().find(|row| row.len() != expected) {
            return Err(EngineError::ColumnCountMismatch {
                table: table_name.clone(),
                expected,
                actual: row.len(),
            });
        }
    }

    let lines = statement
        .values
        .iter()
        .map(|row| codec::encode(row))
        .collect::<Result<Vec<String>>>()?;
    for line in &lines {
        database.store.append_line(table_name, line).await?;
    }
    debug!(table = %table_name, rows = lines.len(), "inserted rows");
    Ok(lines.len())
}
