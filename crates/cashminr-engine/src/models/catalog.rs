use std::collections::BTreeMap;

use super::article::Article;

/// The product's article taxonomy, in display order.
pub const CATEGORIES: [&str; 5] = ["investing", "mortgages", "credit", "retirement", "savings"];

/// In-memory article collection keyed by slug.
///
/// Uses BTreeMap for deterministic slug-ordered iteration.
#[derive(Debug, Default)]
pub struct ArticleCatalog {
    articles: BTreeMap<String, Article>,
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an article, replacing any previous record with the same slug.
    pub fn insert(&mut self, article: Article) -> Option<Article> {
        self.articles.insert(article.slug.clone(), article)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// All articles in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.values()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.get(slug)
    }

    pub fn by_id(&self, id: &str) -> Option<&Article> {
        self.articles.values().find(|article| article.id == id)
    }

    /// Articles matching a search term and/or category, in slug order.
    ///
    /// The term matches case-insensitively against title, content, or
    /// category; the category filter is an exact match. An empty term and
    /// `None` category pass everything through, so both filters compose.
    pub fn filtered(&self, search_term: &str, category: Option<&str>) -> Vec<&Article> {
        let term = search_term.trim().to_lowercase();
        self.articles
            .values()
            .filter(|article| {
                term.is_empty()
                    || article.title.to_lowercase().contains(&term)
                    || article.content.to_lowercase().contains(&term)
                    || article.category.to_lowercase().contains(&term)
            })
            .filter(|article| category.is_none_or(|c| article.category == c))
            .collect()
    }
}
