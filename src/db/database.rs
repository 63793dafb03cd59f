use std::io::ErrorKind;

use tokio::fs;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::db::table::core::row::Row;
use crate::db::table::operations::{create_table, insert, select};
use crate::db::table::store::{TableStore, validate_name};
use crate::error::{EngineError, Result};
use crate::interpreter::ast::{
    CreateDatabaseStatement, CreateTableStatement, InsertIntoStatement, SelectStatement,
    SqlStatement,
};

pub struct Database {
    pub store: TableStore,
    pub config: EngineConfig,
}

impl Database {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            store: TableStore::new(config.table_dir()),
            config,
        }
    }

    // Creates the table directory, including a configured database namespace.
    pub async fn open(config: EngineConfig) -> Result<Self> {
        if let Some(database_name) = &config.database {
            validate_name("database", database_name)?;
        }
        let database = Self::new(config);
        database.store.init().await?;
        Ok(database)
    }

    pub async fn execute(&self, sql_statement: SqlStatement) -> Result<Option<Vec<Row>>> {
        debug!(name = sql_statement.object_name(), "executing statement");
        match sql_statement {
            SqlStatement::CreateDatabase(statement) => {
                self.create_database(statement).await?;
                Ok(None)
            }
            SqlStatement::CreateTable(statement) => {
                self.create_table(statement).await?;
                Ok(None)
            }
            SqlStatement::InsertInto(statement) => {
                self.insert(statement).await?;
                Ok(None)
            }
            SqlStatement::Select(statement) => Ok(Some(self.select(statement).await?)),
        }
    }

    pub async fn create_database(&self, statement: CreateDatabaseStatement) -> Result<()> {
        let database_name = statement.database_name;
        validate_name("database", &database_name)?;
        fs::create_dir_all(&self.config.data_dir).await?;
        match fs::create_dir(self.config.data_dir.join(&database_name)).await {
            Ok(()) => {
                info!(database = %database_name, "created database");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(EngineError::DatabaseAlreadyExists(database_name))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns an engine whose tables live in the existing `database_name` namespace.
    pub async fn connect(&self, database_name: &str) -> Result<Database> {
        validate_name("database", database_name)?;
        let path = self.config.data_dir.join(database_name);
        let is_dir = match fs::metadata(&path).await {
            Ok(metadata) => metadata.is_dir(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        if !is_dir {
            return Err(EngineError::DatabaseNotFound(database_name.to_string()));
        }
        let config = EngineConfig {
            database: Some(database_name.to_string()),
            ..self.config.clone()
        };
        info!(database = database_name, "connected");
        Ok(Database::new(config))
    }

    pub async fn create_table(&self, statement: CreateTableStatement) -> Result<()> {
        create_table::create_table(self, statement).await
    }

    pub async fn insert(&self, statement: InsertIntoStatement) -> Result<usize> {
        insert::insert(self, statement).await
    }

    pub async fn select(&self, statement: SelectStatement) -> Result<Vec<Row>> {
        select::select(self, statement).await
    }

    pub async fn has_table(&self, table_name: &str) -> Result<bool> {
        self.store.exists(table_name).await
    }
}
