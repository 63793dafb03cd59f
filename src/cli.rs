use serde::Serialize;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::db::database::Database;
use crate::db::table::core::row::Row;
use crate::error::EngineError;
use crate::interpreter::run_statement;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<Vec<Row>>,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

impl From<Result<Option<Vec<Row>>, EngineError>> for Response {
    fn from(result: Result<Option<Vec<Row>>, EngineError>) -> Self {
        match result {
            Ok(rows) => Response::Ok { rows },
            Err(error) => Response::Error {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }
}

pub async fn respond(database: &Database, line: &str) -> String {
    render(run_statement(database, line).await)
}

fn render(result: Result<Option<Vec<Row>>, EngineError>) -> String {
    if let Err(error) = &result {
        warn!(kind = error.kind(), %error, "statement failed");
    }
    let response = Response::from(result);
    serde_json::to_string(&response).unwrap_or_else(|error| {
        format!(
            r#"{{"status":"error","kind":"UnknownError","message":"{}"}}"#,
            error
        )
    })
}

// `\c <name>`, `\connect <name>` or `connect <name>`.
fn connect_target(input: &str) -> Option<&str> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?;
    let name = parts.next()?;
    let is_connect =
        matches!(command, "\\c" | "\\connect") || command.eq_ignore_ascii_case("connect");
    (is_connect && parts.next().is_none()).then_some(name)
}

pub async fn cli(mut database: Database) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"Welcome to the csvgres CLI\n").await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            stdout.write_all(b"Goodbye!\n").await?;
            break;
        }
        let output = match connect_target(input) {
            Some(database_name) => match database.connect(database_name).await {
                Ok(connected) => {
                    database = connected;
                    render(Ok(None))
                }
                Err(error) => render(Err(error)),
            },
            None => respond(&database, input).await,
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }
    Ok(())
}
