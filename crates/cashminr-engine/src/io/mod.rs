use crate::models::{Article, ArticleCatalog};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Article not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to parse article {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse one article record.
pub fn read_article(relative_path: &RelativePath, content_root: &Path) -> Result<Article, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let raw = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    serde_json::from_str(&raw).map_err(|source| IoError::Parse {
        path: absolute_path,
        source,
    })
}

/// Scan for article records in the content directory.
pub fn scan_article_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Load every article under the content directory into a catalog.
pub fn load_catalog(content_root: &Path) -> Result<ArticleCatalog, IoError> {
    let files = scan_article_files(content_root)?;

    let mut catalog = ArticleCatalog::new();
    for path in files {
        let raw = fs::read_to_string(&path).map_err(IoError::Io)?;
        let article: Article = serde_json::from_str(&raw).map_err(|source| IoError::Parse {
            path: path.clone(),
            source,
        })?;
        catalog.insert(article);
    }
    Ok(catalog)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
