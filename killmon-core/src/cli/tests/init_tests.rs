use crate::cli::conf::init;
use crate::conf::{CONFIG_FILE_NAME, load_config};
use tempfile::TempDir;

#[test]
fn init_writes_a_config_that_loads() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let path = init(dir.path().to_path_buf()).unwrap();

    // Assert
    assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
    let cfg = load_config(&path).unwrap();
    assert!(!cfg.settings.handle.is_empty());
}

#[test]
fn init_accepts_explicit_file_name_and_creates_parents() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("mine.hcl");

    // Act
    let path = init(target.clone()).unwrap();

    // Assert
    assert_eq!(path, target);
    assert!(target.is_file());
}

#[test]
fn init_refuses_to_overwrite() {
    // Arrange
    let dir = TempDir::new().unwrap();
    init(dir.path().to_path_buf()).unwrap();

    // Act
    let second = init(dir.path().to_path_buf());

    // Assert
    assert!(second.is_err());
}
