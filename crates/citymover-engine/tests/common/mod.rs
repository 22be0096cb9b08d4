#![allow(dead_code)]

use citymover_core::User;
use citymover_core_types::Sensitive;
use citymover_engine::{login, Database};
use tempfile::TempDir;

/// Initialized database in a fresh temp directory
pub fn setup() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db = Database::new(temp_dir.path().join("city_app.db"));
    assert!(db.initialize().is_ready());
    (temp_dir, db)
}

pub fn demo_owner(db: &Database) -> User {
    login(db, "owner1", &Sensitive::from("123456")).unwrap().user
}

pub fn demo_user(db: &Database) -> User {
    login(db, "user1", &Sensitive::from("123456")).unwrap().user
}

pub fn city_id(db: &Database, name: &str) -> i64 {
    citymover_engine::queries::cities(db)
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .expect("seeded city")
}
