use tracing::warn;

use crate::db::table::codec;
use crate::db::table::core::row::Row;
use crate::db::table::store::TableContents;
use crate::error::{EngineError, Result};

#[derive(Debug)]
pub struct Table {
    pub name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn decode(name: &str, contents: TableContents) -> Result<Self> {
        let columns = codec::decode(&contents.header)?;
        let mut rows = Vec::with_capacity(contents.lines.len());
        for (line_num, line) in contents.lines.iter().enumerate() {
            let mut fields = codec::decode(line)?;
            if fields.len() != columns.len() {
                warn!(
                    table = name,
                    line = line_num + 2,
                    expected = columns.len(),
                    actual = fields.len(),
                    "row width does not match header"
                );
                fields.resize(columns.len(), String::new());
            }
            rows.push(Row(columns.iter().cloned().zip(fields).collect()));
        }
        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn check_column(&self, column: &str) -> Result<()> {
        if self.columns.iter().any(|name| name == column) {
            Ok(())
        } else {
            Err(EngineError::ColumnNotFound {
                table: self.name.clone(),
                column: column.to_string(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}
