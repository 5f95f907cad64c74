use compass_core::{ArchiveBuilder, ResultArchive};
use tempfile::TempDir;

/// Helper function to create a test archive
pub async fn create_test_archive() -> (TempDir, ResultArchive) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let archive = ArchiveBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create archive");
    (temp_dir, archive)
}
