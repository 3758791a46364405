//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid every test file inventing its
//! own item shape.

#![doc(hidden)]

use crate::types::ListItem;

/// A representative listing item: covers the blog-post shape (title,
/// excerpt, author, category, status) and the job-posting shape
/// (department, location) with one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleItem {
    pub id: usize,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
}

impl ListItem for SampleItem {
    fn search_fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("excerpt", self.excerpt.as_str()),
            ("author", self.author.as_str()),
        ]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "category" => self.category.as_deref(),
            "status" => self.status.as_deref(),
            "department" => self.department.as_deref(),
            "location" => self.location.as_deref(),
            _ => None,
        }
    }
}

/// A blog post with a category.
pub fn make_post(id: usize, title: &str, category: &str) -> SampleItem {
    SampleItem {
        id,
        title: title.to_string(),
        excerpt: format!("Excerpt for {}", title),
        author: "Editorial Team".to_string(),
        category: Some(category.to_string()),
        status: None,
        department: None,
        location: None,
    }
}

/// A blog post with explicit excerpt and author.
pub fn make_post_full(
    id: usize,
    title: &str,
    excerpt: &str,
    author: &str,
    category: &str,
) -> SampleItem {
    SampleItem {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        category: Some(category.to_string()),
        status: None,
        department: None,
        location: None,
    }
}

/// A job opening with a department and location.
pub fn make_job(id: usize, title: &str, department: &str, location: &str) -> SampleItem {
    SampleItem {
        id,
        title: title.to_string(),
        excerpt: format!("We are hiring: {}", title),
        author: String::new(),
        category: None,
        status: Some("Open".to_string()),
        department: Some(department.to_string()),
        location: Some(location.to_string()),
    }
}

/// A numbered corpus of posts cycling through the given categories.
pub fn make_posts(count: usize, categories: &[&str]) -> Vec<SampleItem> {
    (0..count)
        .map(|id| {
            let category = categories[id % categories.len().max(1)];
            make_post(id, &format!("Post {}", id), category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_post_shape() {
        let post = make_post(42, "Water Treatment", "News");
        assert_eq!(post.id, 42);
        assert_eq!(post.facet("category"), Some("News"));
        assert_eq!(post.facet("department"), None);
        assert_eq!(post.search_fields()[0], ("title", "Water Treatment"));
    }

    #[test]
    fn make_posts_cycles_categories() {
        let posts = make_posts(4, &["News", "Projects"]);
        assert_eq!(posts[0].facet("category"), Some("News"));
        assert_eq!(posts[1].facet("category"), Some("Projects"));
        assert_eq!(posts[2].facet("category"), Some("News"));
    }
}
