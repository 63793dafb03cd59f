use crate::db::table::core::{row::Row, value::Value};
use crate::error::{EngineError, Result};
use crate::interpreter::ast::{Operand, Operator, WhereCondition};

// A numeric literal on the right makes the comparison numeric; anything else
// compares trimmed strings. `age > 26` compares numbers, `26 < age` strings.
pub fn matches_where_clause(
    table_name: &str,
    row: &Row,
    where_clause: &WhereCondition,
) -> Result<bool> {
    let l_side = resolve(table_name, row, &where_clause.l_side)?;
    let r_side = resolve(table_name, row, &where_clause.r_side)?;

    match &where_clause.r_side {
        Operand::Value(right) if right.is_numeric() => {
            let left = l_side.as_number();
            let right = right.as_f64().unwrap_or(f64::NAN);
            Ok(compare(&left, &right, where_clause.operator))
        }
        _ => Ok(compare(
            &l_side.as_text().trim(),
            &r_side.as_text().trim(),
            where_clause.operator,
        )),
    }
}

enum Resolved<'a> {
    Field(&'a str),
    Literal(&'a Value),
}

impl Resolved<'_> {
    fn as_text(&self) -> String {
        match self {
            Resolved::Field(field) => field.to_string(),
            Resolved::Literal(value) => value.to_string(),
        }
    }

    // Unparseable text becomes NaN, so it fails every comparison except `!=`.
    fn as_number(&self) -> f64 {
        match self {
            Resolved::Literal(value) if value.is_numeric() => value.as_f64().unwrap_or(f64::NAN),
            other => other.as_text().trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }
}

fn resolve<'a>(table_name: &str, row: &'a Row, operand: &'a Operand) -> Result<Resolved<'a>> {
    match operand {
        Operand::Value(value) => Ok(Resolved::Literal(value)),
        Operand::Column(column) => match row.get(column) {
            Some(field) => Ok(Resolved::Field(field)),
            None => Err(EngineError::ColumnNotFound {
                table: table_name.to_string(),
                column: column.clone(),
            }),
        },
    }
}

fn compare<T: PartialOrd + ?Sized>(left: &T, right: &T, operator: Operator) -> bool {
    match operator {
        Operator::Equals => left == right,
        Operator::NotEquals => left != right,
        Operator::LessThan => left < right,
        Operator::GreaterThan => left > right,
        Operator::LessEquals => left <= right,
        Operator::GreaterEquals => left >= right,
    }
}
