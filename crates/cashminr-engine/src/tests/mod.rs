//! Shared test helpers.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::models::Article;

pub fn create_test_content_dir() -> TempDir {
    TempDir::new().expect("failed to create temp content dir")
}

/// A plausible article record for the given slug and category.
pub fn sample_article(slug: &str, category: &str) -> Article {
    Article {
        id: format!("id-{slug}"),
        title: format!("Article {slug}"),
        slug: slug.to_string(),
        category: category.to_string(),
        content: "# Title\n\nIntro paragraph.\n\n## Details\n\n- point one\n- point two"
            .to_string(),
        created_at: Some("2025-05-01T12:00:00Z".to_string()),
        updated_at: Some("2025-05-02T12:00:00Z".to_string()),
        read_time: Some(3),
        excerpt: Some(format!("Excerpt for {slug}.")),
    }
}

/// Write an article record as JSON under the temp dir, creating parents.
pub fn create_article_file(dir: &TempDir, name: &str, article: &Article) -> PathBuf {
    create_raw_file(
        dir,
        name,
        &serde_json::to_string_pretty(article).expect("failed to serialize article"),
    )
}

pub fn create_raw_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}
