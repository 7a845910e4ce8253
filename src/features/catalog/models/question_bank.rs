use std::path::Path;

use serde::Deserialize;
use validator::Validate;

use crate::core::error::{AppError, Result};

/// One category of the static question bank with its questions
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    #[validate(length(min = 1, max = 255, message = "categoryName must be 1-255 characters"))]
    pub category_name: String,

    #[validate(nested)]
    pub questions: Vec<QuestionEntry>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEntry {
    #[validate(length(min = 1, message = "questionText must not be empty"))]
    pub question_text: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "musicName must not exceed 255 characters"))]
    pub music_name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 1024, message = "musicNamePath must not exceed 1024 characters"))]
    pub music_name_path: Option<String>,

    #[validate(range(min = 0, message = "difficulty must not be negative"))]
    pub difficulty: i32,

    #[validate(nested)]
    pub answers: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    #[validate(length(min = 1, message = "answerText must not be empty"))]
    pub answer_text: String,

    pub point: i32,
}

/// Immutable, validated question bank loaded once at start-up.
///
/// Every public constructor ([`QuestionBank::load`], [`QuestionBank::from_json`],
/// [`QuestionBank::from_entries`]) validates, so every instance has passed validation.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    entries: Vec<CategoryEntry>,
}

impl QuestionBank {
    /// Read and validate the question bank at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!(
                "Failed to read question bank {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<CategoryEntry> = serde_json::from_str(raw)
            .map_err(|e| AppError::Validation(format!("Invalid question bank: {}", e)))?;

        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<CategoryEntry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(entry).map_err(|e| match e {
                AppError::Validation(msg) => AppError::Validation(format!("[{}] {}", index, msg)),
                other => other,
            })?;
        }

        Ok(Self { entries })
    }

    /// Skip validation, for exercising the seeder's own checks
    #[cfg(test)]
    pub(crate) fn from_entries_unchecked(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Entries whose category name matches `category_text`, in bank order
    pub fn entries_for<'a>(
        &'a self,
        category_text: &'a str,
    ) -> impl Iterator<Item = &'a CategoryEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.category_name == category_text)
    }

    pub fn question_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.questions.len()).sum()
    }
}

/// Validate a single bank entry, naming the offending field on failure
pub fn validate_entry(entry: &CategoryEntry) -> Result<()> {
    entry.validate().map_err(|e| {
        AppError::Validation(format!(
            "Invalid question bank entry '{}': {}",
            entry.category_name, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BANK: &str = r#"[
        {
            "categoryName": "80s",
            "questions": [
                {
                    "questionText": "Name the band",
                    "musicName": "Take On Me",
                    "musicNamePath": "music/take-on-me.mp3",
                    "difficulty": 1,
                    "answers": [
                        { "answerText": "a-ha", "point": 10 },
                        { "answerText": "1985", "point": 20 }
                    ]
                },
                {
                    "questionText": "Name the year",
                    "difficulty": 2,
                    "answers": []
                }
            ]
        },
        {
            "categoryName": "ALL IN",
            "questions": [
                {
                    "questionText": "Everything",
                    "difficulty": 3,
                    "answers": [{ "answerText": "Queen", "point": 40 }]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parses_valid_bank() {
        let bank = QuestionBank::from_json(VALID_BANK).unwrap();

        assert_eq!(bank.entries().len(), 2);
        assert_eq!(bank.question_count(), 3);

        let first = &bank.entries()[0].questions[0];
        assert_eq!(first.music_name.as_deref(), Some("Take On Me"));
        assert_eq!(first.answers[1].point, 20);

        // Media fields are optional
        assert!(bank.entries()[0].questions[1].music_name.is_none());
    }

    #[test]
    fn test_entries_for_matches_exact_category_text() {
        let bank = QuestionBank::from_json(VALID_BANK).unwrap();

        assert_eq!(bank.entries_for("ALL IN").count(), 1);
        assert_eq!(bank.entries_for("all in").count(), 0);
    }

    #[test]
    fn test_missing_field_is_named() {
        let raw = r#"[{ "categoryName": "80s", "questions": [{ "difficulty": 1, "answers": [] }] }]"#;

        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("questionText"), "{}", err);
    }

    #[test]
    fn test_missing_point_is_named() {
        let raw = r#"[{ "categoryName": "80s", "questions": [
            { "questionText": "q", "difficulty": 1, "answers": [{ "answerText": "a" }] }
        ] }]"#;

        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("point"), "{}", err);
    }

    #[test]
    fn test_empty_text_fails_validation() {
        let raw = r#"[{ "categoryName": "80s", "questions": [
            { "questionText": "q", "difficulty": 1, "answers": [{ "answerText": "", "point": 5 }] }
        ] }]"#;

        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("answerText"), "{}", err);
    }

    #[test]
    fn test_negative_difficulty_fails_validation() {
        let raw = r#"[{ "categoryName": "80s", "questions": [
            { "questionText": "q", "difficulty": -1, "answers": [] }
        ] }]"#;

        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("difficulty"), "{}", err);
    }

    #[test]
    fn test_bundled_bank_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/questions.json");
        let bank = QuestionBank::load(&path).unwrap();

        assert!(bank.question_count() > 0);
        assert!(bank
            .entries()
            .iter()
            .any(|entry| entry.category_name == crate::shared::constants::ALL_IN_CATEGORY));
    }

    #[test]
    fn test_from_entries_validates() {
        let entries = vec![CategoryEntry {
            category_name: "80s".to_string(),
            questions: vec![QuestionEntry {
                question_text: String::new(),
                music_name: None,
                music_name_path: None,
                difficulty: 1,
                answers: Vec::new(),
            }],
        }];

        let err = QuestionBank::from_entries(entries).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("questionText"), "{}", err);
    }

    #[test]
    fn test_load_missing_file_is_internal_error() {
        let err = QuestionBank::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
