//! CLI integration tests
//!
//! Run the `citymover` binary against a temp database and check exit status
//! and output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("city_app.db")
}

fn run(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_citymover"))
        .env_remove("CITYMOVER_DB")
        .env_remove("CITYMOVER_DATA_DIR")
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn city_id(db: &Path, name: &str) -> i64 {
    let cities = json(&run(db, &["--json", "cities"]));
    cities
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .and_then(|c| c["id"].as_i64())
        .expect("seeded city")
}

#[test]
fn test_init_creates_database() {
    // Given: An empty temp directory
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    // When: We run init
    let output = run(&db, &["--json", "init"]);

    // Then: The database exists with seed data reported
    let value = json(&output);
    assert_eq!(value["status"], "ready");
    assert!(db.exists());
}

#[test]
fn test_cities_lists_fourteen() {
    let temp_dir = TempDir::new().unwrap();
    let cities = json(&run(&db_path(&temp_dir), &["--json", "cities"]));
    assert_eq!(cities.as_array().unwrap().len(), 14);
}

#[test]
fn test_login_demo_owner() {
    let temp_dir = TempDir::new().unwrap();
    let session = json(&run(
        &db_path(&temp_dir),
        &["--json", "login", "--username", "owner1", "--password", "123456"],
    ));
    assert_eq!(session["user"]["role"], "owner");
    assert_eq!(session["route"], "OwnerDashboard");
}

#[test]
fn test_login_failure_exits_nonzero_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        &db_path(&temp_dir),
        &["login", "--username", "owner1", "--password", "bad"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"));
    assert!(stderr.contains("بيانات الدخول غير صحيحة"));
}

#[test]
fn test_post_then_browse() {
    // Given: A fresh database
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let damascus = city_id(&db, "دمشق").to_string();

    // When: The demo owner posts in Mezzeh
    let posted = json(&run(
        &db,
        &[
            "--json", "post", "--username", "owner1", "--password", "123456", "--city",
            damascus.as_str(), "--area", "المزة", "--title", "Flat", "--rent", "450", "--lat",
            "33.5", "--lon", "36.25",
        ],
    ));
    let id = posted["id"].as_i64().unwrap();

    // Then: Browsing the area returns it
    let outcome = json(&run(
        &db,
        &["--json", "browse", "--city", damascus.as_str(), "--area", "المزة"],
    ));
    assert_eq!(outcome["outcome"], "listings");
    assert_eq!(outcome["listings"][0]["id"], id);
    assert_eq!(outcome["listings"][0]["owner_username"], "owner1");
}

#[test]
fn test_post_in_closed_area_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let damascus = city_id(&db, "دمشق").to_string();

    let output = run(
        &db,
        &[
            "post", "--username", "owner1", "--password", "123456", "--city", damascus.as_str(),
            "--area", "جوبر", "--title", "Flat",
        ],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_AREA_NOT_ALLOWED"));
}

#[test]
fn test_edit_and_delete_listing() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let aleppo = city_id(&db, "حلب").to_string();
    let creds = ["--username", "owner1", "--password", "123456"];

    let mut post_args = vec!["--json", "post"];
    post_args.extend(creds);
    post_args.extend(["--city", aleppo.as_str(), "--area", "الحمدانية", "--title", "Flat", "--rent", "300"]);
    let id = json(&run(&db, &post_args))["id"].as_i64().unwrap().to_string();

    // Edit only the rent; the title is kept
    let mut edit_args = vec!["--json", "edit", "--id", id.as_str(), "--rent", "350"];
    edit_args.extend(creds);
    json(&run(&db, &edit_args));

    let shown = json(&run(&db, &["--json", "show", "--id", id.as_str()]));
    assert_eq!(shown["rent"], 350);
    assert_eq!(shown["title"], "Flat");

    let mut delete_args = vec!["--json", "delete", "--id", id.as_str()];
    delete_args.extend(creds);
    json(&run(&db, &delete_args));

    let output = run(&db, &["show", "--id", id.as_str()]);
    assert!(!output.status.success());
}

#[test]
fn test_signup_duplicate_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        &db_path(&temp_dir),
        &["signup", "--username", "user1", "--password", "x", "--role", "owner"],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_DUPLICATE_USERNAME"));
}

#[test]
fn test_listings_requires_scope() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&db_path(&temp_dir), &["listings"]);
    assert!(!output.status.success());
}

#[test]
fn test_show_missing_listing_prints_localized_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&db_path(&temp_dir), &["show", "--id", "4242"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"));
    assert!(stderr.contains("العنصر المطلوب غير موجود"));
}

#[test]
fn test_areas_unknown_city_prints_localized_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&db_path(&temp_dir), &["areas", "--city", "4242"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"));
    assert!(stderr.contains("المدينة غير موجودة"));
}

#[test]
fn test_edit_without_fields_reports_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let aleppo = city_id(&db, "حلب").to_string();
    let creds = ["--username", "owner1", "--password", "123456"];

    let mut post_args = vec!["--json", "post"];
    post_args.extend(creds);
    post_args.extend(["--city", aleppo.as_str(), "--area", "الحمدانية", "--title", "Flat"]);
    let id = json(&run(&db, &post_args))["id"].as_i64().unwrap().to_string();

    let mut edit_args = vec!["edit", "--id", id.as_str()];
    edit_args.extend(creds);
    let output = run(&db, &edit_args);

    assert!(!output.status.success());
    let shown = json(&run(&db, &["--json", "show", "--id", id.as_str()]));
    assert_eq!(shown["title"], "Flat");
}
