use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DataType {
    Integer,
    Real,
    Text,
}

impl DataType {
    pub fn from_type_name(type_name: &str) -> DataType {
        let base = type_name
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_uppercase();
        match base.as_str() {
            "INT" | "INTEGER" | "BIGINT" | "SMALLINT" | "TINYINT" | "SERIAL" => DataType::Integer,
            "REAL" | "FLOAT" | "DOUBLE" | "DECIMAL" | "NUMERIC" => DataType::Real,
            _ => DataType::Text,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl Value {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Real(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => Ok(()),
        }
    }
}
