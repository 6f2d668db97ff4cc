//! Reply body composition.
//!
//! Segment order:
//! 1. a greeting line, when the greeting detector fires
//! 2. the priority categories, in `PRIORITY_ORDER`
//! 3. every other triggered category, in classifier order
//!
//! Segments are joined with a single space.

use indexmap::IndexMap;
use std::collections::HashMap;

use super::category::{Category, PRIORITY_ORDER};
use super::classifier::GreetingDetector;
use super::picker::{RandomPicker, TemplatePicker};

/// Built-in opening lines used when the message greets us.
pub const GREETING_LINES: [&str; 4] = [
    "Hi there! 😊",
    "Hello! 👋",
    "Hey! How can I help you today?",
    "Greetings! Happy to assist.",
];

/// Candidate replies per category.
#[derive(Debug, Clone, Default)]
pub struct ResponseTemplates {
    templates: HashMap<Category, Vec<String>>,
}

impl ResponseTemplates {
    /// Builds templates from the `responses` mapping of the configuration.
    pub fn from_map(responses: &IndexMap<String, Vec<String>>) -> Self {
        let templates = responses
            .iter()
            .map(|(name, list)| (Category::from(name.as_str()), list.clone()))
            .collect();
        Self { templates }
    }

    /// Configured templates for `category`; empty when none are configured.
    pub fn for_category(&self, category: &Category) -> &[String] {
        self.templates
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Assembles reply bodies from triggered categories.
pub struct ResponseComposer {
    templates: ResponseTemplates,
    picker: Box<dyn TemplatePicker>,
}

impl ResponseComposer {
    pub fn new(templates: ResponseTemplates) -> Self {
        Self::with_picker(templates, Box::new(RandomPicker))
    }

    pub fn with_picker(templates: ResponseTemplates, picker: Box<dyn TemplatePicker>) -> Self {
        Self { templates, picker }
    }

    /// Composes the reply body for `message` given its triggered `categories`.
    pub fn compose(&self, message: &str, categories: &[Category]) -> String {
        let mut segments: Vec<String> = Vec::new();

        if GreetingDetector::detect(message) {
            segments.push(self.greeting_line().to_string());
        }

        for category in render_order(categories) {
            segments.push(self.render_segment(category));
        }

        segments.join(" ")
    }

    /// One of `GREETING_LINES`, chosen by the picker.
    pub fn greeting_line(&self) -> &'static str {
        GREETING_LINES[self.picker.pick(GREETING_LINES.len())]
    }

    /// A configured template plus trailing phrase, or the built-in default.
    pub fn render_segment(&self, category: &Category) -> String {
        let candidates = self.templates.for_category(category);
        if candidates.is_empty() {
            return category.default_response().to_string();
        }

        let selected = &candidates[self.picker.pick(candidates.len())];
        format!("{}{}", selected, category.trailing_phrase())
    }
}

/// Priority categories first, then the rest in input order, without duplicates.
pub fn render_order(categories: &[Category]) -> Vec<&Category> {
    let mut ordered: Vec<&Category> = PRIORITY_ORDER
        .iter()
        .filter_map(|p| categories.iter().find(|c| *c == p))
        .collect();

    for category in categories.iter().filter(|c| !c.is_priority()) {
        if !ordered.contains(&category) {
            ordered.push(category);
        }
    }

    ordered
}
