use crate::db::table::core::value::Value;
use crate::error::{EngineError, Result};

const DELIMITER: char = ',';
const QUOTE: char = '"';

// Text is quoted with embedded quotes doubled. Line breaks cannot be stored
// in a one-line-per-row file and are rejected.
pub fn encode(values: &[Value]) -> Result<String> {
    Ok(values
        .iter()
        .map(encode_value)
        .collect::<Result<Vec<String>>>()?
        .join(","))
}

fn encode_value(value: &Value) -> Result<String> {
    match value {
        Value::Text(text) if text.contains(['\n', '\r']) => {
            Err(EngineError::InvalidStatement(format!(
                "text value {:?} contains a line break",
                text
            )))
        }
        Value::Text(text) => Ok(format!("{QUOTE}{}{QUOTE}", text.replace(QUOTE, "\"\""))),
        other => Ok(other.to_string()),
    }
}

pub fn encode_header<S: AsRef<str>>(column_names: &[S]) -> String {
    column_names
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}

pub fn decode(line: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                chars.next();
                current.push(QUOTE);
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(EngineError::MalformedRow(format!(
            "unbalanced quotes in line `{}`",
            line
        )));
    }
    fields.push(current);
    Ok(fields)
}
