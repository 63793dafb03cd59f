#[cfg(test)]
use crate::config::EngineConfig;
#[cfg(test)]
use crate::db::database::Database;
#[cfg(test)]
use tempfile::TempDir;

// users(name, age) with Alice (30) and Bob (25).
#[cfg(test)]
pub async fn default_database() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let database = Database::open(EngineConfig::with_data_dir(dir.path()))
        .await
        .unwrap();
    database
        .store
        .create_file("users", "name,age")
        .await
        .unwrap();
    database
        .store
        .append_line("users", r#""Alice",30"#)
        .await
        .unwrap();
    database
        .store
        .append_line("users", r#""Bob",25"#)
        .await
        .unwrap();
    (dir, database)
}

#[cfg(test)]
pub async fn empty_database() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let database = Database::open(EngineConfig::with_data_dir(dir.path()))
        .await
        .unwrap();
    (dir, database)
}
