use crate::db::database::Database;
use crate::db::table::core::row::Row;
use crate::error::Result;

pub mod ast;

pub async fn run_statement(database: &Database, statement_tree: &str) -> Result<Option<Vec<Row>>> {
    let sql_statement = ast::StatementTree::from_json(statement_tree)?.into_statement()?;
    database.execute(sql_statement).await
}
