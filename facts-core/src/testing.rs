//! Shared fixtures for unit and integration tests.
//!
//! Kept in the library (rather than duplicated per test file) so the QA
//! suites and in-module tests agree on pool shapes: `sample_source` has two
//! topics with three and two facts plus a three-fact general pool, and
//! `empty_source` has nothing at all.

use crate::source::ContentSource;

/// A small deterministic content source: "космос" (3 facts), "океан"
/// (2 facts), and a 3-fact general pool.
pub fn sample_source() -> ContentSource {
    ContentSource::with_pools(
        vec![
            (
                "космос".to_string(),
                vec![
                    "Солнце составляет 99,8% массы Солнечной системы.".to_string(),
                    "На Венере сутки длиннее года.".to_string(),
                    "Нейтронная звезда размером с город весит как Солнце.".to_string(),
                ],
            ),
            (
                "океан".to_string(),
                vec![
                    "Океан изучен меньше, чем поверхность Луны.".to_string(),
                    "Марианская впадина глубже высоты Эвереста.".to_string(),
                ],
            ),
        ],
        vec![
            "Бананы — это ягоды, а клубника — нет.".to_string(),
            "У осьминога три сердца и голубая кровь.".to_string(),
            "Молния в пять раз горячее поверхности Солнца.".to_string(),
        ],
    )
}

/// A content source with no topics and no general pool.
pub fn empty_source() -> ContentSource {
    ContentSource::with_pools(Vec::new(), Vec::new())
}
