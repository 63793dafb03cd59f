use crate::db::table::core::value::Value;
use crate::error::Result;
use crate::interpreter::ast::{
    InsertIntoStatement,
    statement_tree::{InsertNode, literal_value, single_table_name},
};

pub fn build_insert(node: InsertNode) -> Result<InsertIntoStatement> {
    let table_name = single_table_name(&node.table)?;
    let mut values = vec![];
    for row in node.values.unwrap_or_default() {
        let row_values = row
            .value
            .iter()
            .map(literal_value)
            .collect::<Result<Vec<Value>>>()?;
        values.push(row_values);
    }
    Ok(InsertIntoStatement { table_name, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ast::{SqlStatement, StatementTree};
    use serde_json::json;

    #[test]
    fn single_row_insert_statement_is_generated_correctly() {
        // INSERT INTO users VALUES ('Alice', 30);
        let tree = StatementTree::from_value(json!({
            "type": "insert",
            "table": [{"table": "users"}],
            "columns": null,
            "values": [{"type": "expr_list", "value": [
                {"type": "single_quote_string", "value": "Alice"},
                {"type": "number", "value": 30}
            ]}]
        }));
        assert_eq!(
            SqlStatement::InsertInto(InsertIntoStatement {
                table_name: "users".to_string(),
                values: vec![vec![Value::Text("Alice".to_string()), Value::Integer(30)]],
            }),
            tree.into_statement().unwrap()
        );
    }

    #[test]
    fn multi_row_insert_statement_keeps_row_order() {
        let tree = StatementTree::from_value(json!({
            "type": "insert",
            "table": [{"table": "users"}],
            "values": [
                {"value": [{"type": "string", "value": "Alice"}]},
                {"value": [{"type": "string", "value": "Bob"}]}
            ]
        }));
        let SqlStatement::InsertInto(statement) = tree.into_statement().unwrap() else {
            panic!("expected InsertInto");
        };
        assert_eq!(
            vec![
                vec![Value::Text("Alice".to_string())],
                vec![Value::Text("Bob".to_string())],
            ],
            statement.values
        );
    }

    #[test]
    fn insert_without_values_is_empty() {
        let tree = StatementTree::from_value(json!({
            "type": "insert",
            "table": [{"table": "users"}]
        }));
        let SqlStatement::InsertInto(statement) = tree.into_statement().unwrap() else {
            panic!("expected InsertInto");
        };
        assert!(statement.values.is_empty());
    }
}
