//! Keyword Classification.
//!
//! A category fires when any of its keywords occurs anywhere in the message,
//! compared case-insensitively. Each category is checked independently, so one
//! message can land in several categories at once.

use indexmap::IndexMap;
use tracing::debug;

use super::category::Category;

/// Words that make the composer open with a greeting line.
const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "greetings"];

/// Keyword rules in configuration order.
#[derive(Debug, Clone, Default)]
pub struct CategoryRules {
    rules: Vec<(Category, Vec<String>)>,
}

impl CategoryRules {
    /// Builds rules from the `categories` mapping of the configuration.
    /// Keywords are lower-cased once here; empty keywords are dropped.
    pub fn from_map(categories: &IndexMap<String, Vec<String>>) -> Self {
        let rules = categories
            .iter()
            .map(|(name, keywords)| {
                let keywords = keywords
                    .iter()
                    .map(|k| k.to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (Category::from(name.as_str()), keywords)
            })
            .collect();
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[String])> {
        self.rules.iter().map(|(c, k)| (c, k.as_slice()))
    }
}

/// Maps message text to the categories it triggers.
#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    rules: CategoryRules,
}

impl CategoryClassifier {
    pub fn new(rules: CategoryRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    /// Returns triggered categories in rule order, or `[General]` when nothing fires.
    /// Never returns an empty list.
    pub fn classify(&self, message: &str) -> Vec<Category> {
        let text = message.to_lowercase();

        let triggered: Vec<Category> = self
            .rules
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|(category, _)| category.clone())
            .collect();

        if triggered.is_empty() {
            debug!("No keyword rule matched, falling back to general");
            return vec![Category::General];
        }

        debug!("Triggered categories: {}", Category::join(&triggered));
        triggered
    }
}

/// Detects greetings independently of the configured rules.
pub struct GreetingDetector;

impl GreetingDetector {
    pub fn detect(message: &str) -> bool {
        let text = message.to_lowercase();
        GREETING_WORDS.iter().any(|g| text.contains(g))
    }
}
