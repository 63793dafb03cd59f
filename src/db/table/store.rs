use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::{EngineError, Result};

const TABLE_EXTENSION: &str = "csv";

#[derive(Debug, PartialEq)]
pub struct TableContents {
    pub header: String,
    pub lines: Vec<String>,
}

/// Maps table names onto `<base_dir>/<table>.csv`.
#[derive(Debug, Clone)]
pub struct TableStore {
    base_dir: PathBuf,
}

impl TableStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await?;
        Ok(())
    }

    pub fn path(&self, table_name: &str) -> Result<PathBuf> {
        validate_name("table", table_name)?;
        Ok(self
            .base_dir
            .join(format!("{}.{}", table_name, TABLE_EXTENSION)))
    }

    pub async fn exists(&self, table_name: &str) -> Result<bool> {
        Ok(fs::try_exists(self.path(table_name)?).await?)
    }

    pub async fn create_file(&self, table_name: &str, header: &str) -> Result<()> {
        if self.exists(table_name).await? {
            return Err(EngineError::TableAlreadyExists(table_name.to_string()));
        }
        // create_new closes the gap between the existence check and the write.
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path(table_name)?)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(EngineError::TableAlreadyExists(table_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(format!("{}\n", header).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn append_line(&self, table_name: &str, line: &str) -> Result<()> {
        let mut file = match OpenOptions::new()
            .append(true)
            .open(self.path(table_name)?)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EngineError::TableNotFound(table_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn read_all(&self, table_name: &str) -> Result<TableContents> {
        let content = match fs::read_to_string(self.path(table_name)?).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EngineError::TableNotFound(table_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        split_contents(table_name, &content)
    }
}

fn split_contents(table_name: &str, content: &str) -> Result<TableContents> {
    let mut lines = content
        .trim_end_matches(['\n', '\r'])
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string());
    match lines.next() {
        Some(header) if !header.is_empty() => Ok(TableContents {
            header,
            lines: lines.collect(),
        }),
        _ => Err(EngineError::MalformedRow(format!(
            "table {} has no header line",
            table_name
        ))),
    }
}

// Table and database names become path segments and must stay inside the data directory.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(EngineError::InvalidStatement(format!(
            "invalid {} name `{}`",
            kind, name
        )));
    }
    Ok(())
}
