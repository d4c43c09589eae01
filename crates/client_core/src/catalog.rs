//! Built-in example reviews the user can load into the draft.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleCategory {
    Positive,
    Negative,
    Neutral,
}

impl ExampleCategory {
    pub const ALL: [ExampleCategory; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Positive => "Positive Reviews",
            Self::Negative => "Negative Reviews",
            Self::Neutral => "Neutral Reviews",
        }
    }
}

impl fmt::Display for ExampleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown example category '{0}' (expected positive, negative or neutral)")]
    UnknownCategory(String),
    #[error("no {category} example at index {index} ({available} available)")]
    IndexOutOfRange {
        category: ExampleCategory,
        index: usize,
        available: usize,
    },
}

impl FromStr for ExampleCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" => Ok(Self::Positive),
            "negative" | "neg" => Ok(Self::Negative),
            "neutral" | "neu" => Ok(Self::Neutral),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

const POSITIVE: &[&str] = &[
    "This movie was absolutely amazing! Best film I've seen this year! The acting was superb and the plot kept me engaged throughout.",
    "Incredible performances and a gripping storyline. Highly recommend! A masterpiece of cinema.",
    "Fantastic! Every scene was brilliantly executed. The director's vision really shines through.",
];

const NEGATIVE: &[&str] = &[
    "Terrible movie. Complete waste of time and money. Poor acting and boring plot.",
    "Very disappointed. The story made no sense and the characters were one-dimensional.",
    "Awful film. I couldn't even finish watching it. Absolutely terrible in every aspect.",
];

const NEUTRAL: &[&str] = &[
    "It was okay, nothing special. Some good moments but overall average.",
    "Decent movie, had its ups and downs. Not great, not terrible.",
];

pub fn examples(category: ExampleCategory) -> &'static [&'static str] {
    match category {
        ExampleCategory::Positive => POSITIVE,
        ExampleCategory::Negative => NEGATIVE,
        ExampleCategory::Neutral => NEUTRAL,
    }
}

pub fn example(category: ExampleCategory, index: usize) -> Result<&'static str, CatalogError> {
    let entries = examples(category);
    entries
        .get(index)
        .copied()
        .ok_or(CatalogError::IndexOutOfRange {
            category,
            index,
            available: entries.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_examples_within_review_limit() {
        for category in ExampleCategory::ALL {
            let entries = examples(category);
            assert!(!entries.is_empty(), "{category} is empty");
            for text in entries {
                assert!(crate::validation::validate(text).is_ok());
            }
        }
    }

    #[test]
    fn lookup_is_ordered_and_bounds_checked() {
        assert!(example(ExampleCategory::Negative, 0)
            .expect("first")
            .starts_with("Terrible movie."));
        assert_eq!(
            example(ExampleCategory::Neutral, 2),
            Err(CatalogError::IndexOutOfRange {
                category: ExampleCategory::Neutral,
                index: 2,
                available: 2,
            })
        );
    }

    #[test]
    fn parses_category_names() {
        assert_eq!("Positive".parse(), Ok(ExampleCategory::Positive));
        assert_eq!(" neu ".parse(), Ok(ExampleCategory::Neutral));
        assert!(matches!(
            "mixed".parse::<ExampleCategory>(),
            Err(CatalogError::UnknownCategory(_))
        ));
    }
}
