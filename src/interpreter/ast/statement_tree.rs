use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::db::table::core::value::Value;
use crate::error::{EngineError, Result};
use crate::interpreter::ast::{
    SqlStatement,
    create_statement::{build_create, build_create_database},
    insert_statement::build_insert,
    select_statement::build_select,
};

#[derive(Debug)]
pub struct StatementTree(JsonValue);

impl StatementTree {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(StatementTree(serde_json::from_str(json)?))
    }

    pub fn from_value(value: JsonValue) -> Self {
        StatementTree(value)
    }

    fn statement_type(&self) -> Option<&str> {
        self.0.get("type").and_then(JsonValue::as_str)
    }

    fn creates_database(&self) -> bool {
        self.0
            .get("keyword")
            .and_then(JsonValue::as_str)
            .is_some_and(|keyword| keyword.eq_ignore_ascii_case("database"))
    }

    pub fn into_statement(self) -> Result<SqlStatement> {
        let statement_type = self.statement_type().map(str::to_ascii_lowercase);
        match statement_type.as_deref() {
            Some("create") if self.creates_database() => Ok(SqlStatement::CreateDatabase(
                build_create_database(serde_json::from_value(self.0)?)?,
            )),
            Some("create") => Ok(SqlStatement::CreateTable(build_create(
                serde_json::from_value(self.0)?,
            )?)),
            Some("insert") => Ok(SqlStatement::InsertInto(build_insert(
                serde_json::from_value(self.0)?,
            )?)),
            Some("select") => Ok(SqlStatement::Select(build_select(
                serde_json::from_value(self.0)?,
            )?)),
            Some(other) => Err(EngineError::InvalidStatement(format!(
                "unsupported statement type `{}`",
                other
            ))),
            None => Err(EngineError::InvalidStatement(
                "statement tree has no type".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TableRef {
    pub table: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateNode {
    #[serde(default)]
    pub table: Vec<TableRef>,
    #[serde(default)]
    pub create_definitions: Option<Vec<CreateDefinition>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDatabaseNode {
    #[serde(default)]
    pub database: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDefinition {
    pub column: ColumnRef,
    pub definition: DefinitionNode,
}

#[derive(Debug, Deserialize)]
pub struct ColumnRef {
    pub column: String,
}

#[derive(Debug, Deserialize)]
pub struct DefinitionNode {
    #[serde(rename = "dataType")]
    pub data_type: String,
}

#[derive(Debug, Deserialize)]
pub struct InsertNode {
    #[serde(default)]
    pub table: Vec<TableRef>,
    #[serde(default)]
    pub values: Option<Vec<ValueList>>,
}

#[derive(Debug, Deserialize)]
pub struct ValueList {
    #[serde(default)]
    pub value: Vec<ExprNode>,
}

#[derive(Debug, Deserialize)]
pub struct SelectNode {
    #[serde(default)]
    pub from: Vec<TableRef>,
    #[serde(default)]
    pub columns: Option<ColumnsNode>,
    #[serde(default, rename = "where")]
    pub where_clause: Option<ExprNode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ColumnsNode {
    Star(String),
    List(Vec<SelectColumn>),
}

#[derive(Debug, Deserialize)]
pub struct SelectColumn {
    pub expr: ColumnRef,
}

// A binary comparison, a column reference or a literal.
#[derive(Debug, Deserialize)]
pub struct ExprNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub left: Option<Box<ExprNode>>,
    #[serde(default)]
    pub right: Option<Box<ExprNode>>,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub value: JsonValue,
}

pub fn single_table_name(tables: &[TableRef]) -> Result<String> {
    match tables.first() {
        Some(table_ref) => Ok(table_ref.table.clone()),
        None => Err(EngineError::InvalidStatement(
            "statement names no table".to_string(),
        )),
    }
}

/// `string` and unknown node types become text.
pub fn literal_value(node: &ExprNode) -> Result<Value> {
    match (node.kind.as_str(), &node.value) {
        ("null", _) => Ok(Value::Null),
        ("number", JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => n
                .as_f64()
                .map(Value::Real)
                .ok_or_else(|| invalid_literal(node)),
        },
        ("number", JsonValue::String(s)) => {
            if let Ok(i) = s.trim().parse::<i64>() {
                Ok(Value::Integer(i))
            } else {
                s.trim()
                    .parse::<f64>()
                    .map(Value::Real)
                    .map_err(|_| invalid_literal(node))
            }
        }
        ("number", _) => Err(invalid_literal(node)),
        ("bool", JsonValue::Bool(b)) => Ok(Value::Boolean(*b)),
        ("bool", _) => Err(invalid_literal(node)),
        (_, JsonValue::String(s)) => Ok(Value::Text(s.clone())),
        (_, JsonValue::Null) => Ok(Value::Null),
        (_, other) => Ok(Value::Text(other.to_string())),
    }
}

fn invalid_literal(node: &ExprNode) -> EngineError {
    EngineError::InvalidStatement(format!(
        "invalid {} literal {}",
        node.kind, node.value
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn literal(node: JsonValue) -> Result<Value> {
        literal_value(&serde_json::from_value(node).unwrap())
    }

    #[test]
    fn literals_take_their_declared_type() {
        let number = |value: JsonValue| literal(json!({"type": "number", "value": value}));
        assert_eq!(Value::Integer(30), number(json!(30)).unwrap());
        assert_eq!(Value::Real(2.5), number(json!(2.5)).unwrap());
        assert_eq!(Value::Integer(7), number(json!("7")).unwrap());
        assert_eq!(
            Value::Text("Alice".to_string()),
            literal(json!({"type": "single_quote_string", "value": "Alice"})).unwrap()
        );
        assert_eq!(
            Value::Boolean(true),
            literal(json!({"type": "bool", "value": true})).unwrap()
        );
        assert_eq!(Value::Null, literal(json!({"type": "null", "value": null})).unwrap());
    }

    #[test]
    fn non_numeric_number_literal_is_invalid() {
        let result = literal(json!({"type": "number", "value": "abc"}));
        assert!(matches!(result, Err(EngineError::InvalidStatement(_))));
    }

    #[test]
    fn unknown_statement_type_is_invalid() {
        let tree =
            StatementTree::from_value(json!({"type": "update", "table": [{"table": "users"}]}));
        let result = tree.into_statement();
        match result {
            Err(EngineError::InvalidStatement(message)) => assert!(message.contains("update")),
            other => panic!("expected InvalidStatement, got {:?}", other),
        }
    }

    #[test]
    fn broken_json_is_invalid() {
        let result = StatementTree::from_json("{not json");
        assert!(matches!(result, Err(EngineError::InvalidStatement(_))));
    }

    #[test]
    fn missing_type_is_invalid() {
        let result = StatementTree::from_value(json!({"table": []})).into_statement();
        assert!(matches!(result, Err(EngineError::InvalidStatement(_))));
    }
}
