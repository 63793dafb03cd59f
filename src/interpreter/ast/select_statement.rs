use crate::error::{EngineError, Result};
use crate::interpreter::ast::{
    Operand, Operator, SelectStatement, SelectStatementColumns, WhereCondition,
    statement_tree::{ColumnsNode, ExprNode, SelectNode, literal_value, single_table_name},
};

const WILDCARD: &str = "*";

pub fn build_select(node: SelectNode) -> Result<SelectStatement> {
    let table_name = single_table_name(&node.from)?;
    let columns = selected_columns(node.columns)?;
    let where_clause = match node.where_clause {
        Some(expr) => Some(where_condition(&expr)?),
        None => None,
    };
    Ok(SelectStatement {
        table_name,
        columns,
        where_clause,
    })
}

fn selected_columns(columns: Option<ColumnsNode>) -> Result<SelectStatementColumns> {
    match columns {
        None => Ok(SelectStatementColumns::All),
        Some(ColumnsNode::Star(column)) if column == WILDCARD => Ok(SelectStatementColumns::All),
        Some(ColumnsNode::Star(column)) => Ok(SelectStatementColumns::Specific(vec![column])),
        Some(ColumnsNode::List(list)) => {
            if list.is_empty() {
                return Err(EngineError::InvalidStatement(
                    "select lists no columns".to_string(),
                ));
            }
            if list.iter().any(|c| c.expr.column == WILDCARD) {
                return Ok(SelectStatementColumns::All);
            }
            Ok(SelectStatementColumns::Specific(
                list.into_iter().map(|c| c.expr.column).collect(),
            ))
        }
    }
}

// The operator is checked before the operands so composite clauses
// (`AND`/`OR`) surface as unsupported operators.
fn where_condition(expr: &ExprNode) -> Result<WhereCondition> {
    if expr.kind != "binary_expr" {
        return Err(EngineError::InvalidStatement(format!(
            "expected a comparison in WHERE, found `{}`",
            expr.kind
        )));
    }
    let operator: Operator = expr
        .operator
        .as_deref()
        .ok_or_else(|| EngineError::InvalidStatement("comparison has no operator".to_string()))?
        .parse()?;
    Ok(WhereCondition {
        l_side: operand(expr.left.as_deref())?,
        operator,
        r_side: operand(expr.right.as_deref())?,
    })
}

fn operand(expr: Option<&ExprNode>) -> Result<Operand> {
    let Some(expr) = expr else {
        return Err(EngineError::InvalidStatement(
            "comparison is missing an operand".to_string(),
        ));
    };
    match expr.kind.as_str() {
        "column_ref" => match &expr.column {
            Some(column) => Ok(Operand::Column(column.clone())),
            None => Err(EngineError::InvalidStatement(
                "column reference has no column".to_string(),
            )),
        },
        "binary_expr" => Err(EngineError::InvalidStatement(
            "nested expressions are not supported".to_string(),
        )),
        _ => Ok(Operand::Value(literal_value(expr)?)),
    }
}
