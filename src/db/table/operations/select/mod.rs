use tracing::debug;

use crate::db::database::Database;
use crate::db::table::core::{row::Row, table::Table};
use crate::db::table::operations::helpers::where_condition::matches_where_clause;
use crate::error::Result;
use crate::interpreter::ast::{Operand, SelectStatement, SelectStatementColumns};

pub async fn select(database: &Database, statement: SelectStatement) -> Result<Vec<Row>> {
    let contents = database.store.read_all(&statement.table_name).await?;
    let table = Table::decode(&statement.table_name, contents)?;
    check_columns(&table, &statement)?;

    let mut rows = vec![];
    for row in table.iter() {
        if let Some(where_clause) = &statement.where_clause
            && !matches_where_clause(&table.name, row, where_clause)?
        {
            continue;
        }
        rows.push(get_columns(&table, row, &statement.columns)?);
    }
    debug!(
        table = %table.name,
        scanned = table.len(),
        matched = rows.len(),
        "selected rows"
    );
    Ok(rows)
}

// Unknown columns fail against the header, whether or not any row exists.
fn check_columns(table: &Table, statement: &SelectStatement) -> Result<()> {
    if let SelectStatementColumns::Specific(columns) = &statement.columns {
        for column in columns {
            table.check_column(column)?;
        }
    }
    if let Some(where_clause) = &statement.where_clause {
        for operand in [&where_clause.l_side, &where_clause.r_side] {
            if let Operand::Column(column) = operand {
                table.check_column(column)?;
            }
        }
    }
    Ok(())
}

fn get_columns(table: &Table, row: &Row, columns: &SelectStatementColumns) -> Result<Row> {
    match columns {
        SelectStatementColumns::All => Ok(row.clone()),
        SelectStatementColumns::Specific(columns) => row.project(&table.name, columns),
    }
}
