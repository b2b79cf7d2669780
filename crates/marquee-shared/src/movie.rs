//! The UI-facing movie model.

use serde::{Deserialize, Serialize};

use crate::constants::IMAGE_BASE_URL;

/// A movie as rendered by the screens.
///
/// Deliberately holds only the fields the UI needs; everything else from the
/// catalog (vote stats, language, genre ids, ...) stays in the cache row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// TMDB movie id.
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    /// Relative poster path (e.g. `/poster.jpg`), empty when absent.
    pub poster_path: String,
    /// Relative backdrop path, empty when absent.
    pub backdrop_path: String,
}

impl Movie {
    /// Full poster image URL, or `None` when the catalog had no poster.
    pub fn poster_url(&self) -> Option<String> {
        if self.poster_path.is_empty() {
            None
        } else {
            Some(format!("{IMAGE_BASE_URL}{}", self.poster_path))
        }
    }

    /// Full backdrop image URL, or `None` when the catalog had no backdrop.
    pub fn backdrop_url(&self) -> Option<String> {
        if self.backdrop_path.is_empty() {
            None
        } else {
            Some(format!("{IMAGE_BASE_URL}{}", self.backdrop_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_urls() {
        let movie = Movie {
            id: 1,
            title: "Test".into(),
            original_title: "Test".into(),
            overview: String::new(),
            poster_path: "/poster.jpg".into(),
            backdrop_path: String::new(),
        };
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(movie.backdrop_url(), None);
    }
}
