use std::ops::Deref;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{EngineError, Result};

/// A decoded row: column names paired with raw field text, in column order.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Row(pub Vec<(String, String)>);

impl Deref for Row {
    type Target = Vec<(String, String)>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn project(&self, table_name: &str, columns: &[String]) -> Result<Row> {
        let mut projected = vec![];
        for column in columns {
            match self.get(column) {
                Some(value) => projected.push((column.clone(), value.to_string())),
                None => {
                    return Err(EngineError::ColumnNotFound {
                        table: table_name.to_string(),
                        column: column.clone(),
                    });
                }
            }
        }
        Ok(Row(projected))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Row {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Row(pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
