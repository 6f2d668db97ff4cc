//! Category kinds.
//!
//! Configuration refers to categories by name. Five names carry built-in phrasing,
//! `general` is the classifier fallback, and every other name is a custom category.

use std::fmt;

/// A category a message can be classified into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Problem reports (`support_issue`)
    SupportIssue,
    /// Asks for something to be done (`request`)
    Request,
    /// Asks for information (`inquiry`)
    Inquiry,
    /// Thanks and compliments (`appreciation`)
    Appreciation,
    /// Only reachable through an explicit `greeting` keyword category
    Greeting,
    /// Fallback when no keyword rule fires
    General,
    /// Any other configured category name
    Custom(String),
}

/// Rendering order for the known categories; everything else follows in classifier order.
pub const PRIORITY_ORDER: [Category; 4] = [
    Category::SupportIssue,
    Category::Request,
    Category::Inquiry,
    Category::Appreciation,
];

const GENERIC_DEFAULT: &str = "Thank you for reaching out. We'll get back to you soon.";

impl Category {
    /// Configuration name of the category
    pub fn name(&self) -> &str {
        match self {
            Category::SupportIssue => "support_issue",
            Category::Request => "request",
            Category::Inquiry => "inquiry",
            Category::Appreciation => "appreciation",
            Category::Greeting => "greeting",
            Category::General => "general",
            Category::Custom(name) => name,
        }
    }

    pub fn is_priority(&self) -> bool {
        PRIORITY_ORDER.contains(self)
    }

    /// Phrase appended after a configured template. Custom and general categories get none.
    pub fn trailing_phrase(&self) -> &'static str {
        match self {
            Category::SupportIssue => " We're actively looking into it.",
            Category::Request => " Let me know if there's anything else you’d like.",
            Category::Inquiry => " I’ll get back to you with more information shortly.",
            Category::Appreciation => " Your kind words mean a lot to us!",
            Category::Greeting => " Always good to hear from you!",
            Category::General | Category::Custom(_) => "",
        }
    }

    /// Sentence used when no templates are configured for the category.
    pub fn default_response(&self) -> &'static str {
        match self {
            Category::SupportIssue => "We've noted the issue and will investigate it promptly.",
            Category::Request => "Your request has been acknowledged.",
            Category::Inquiry => "Thanks for asking. We'll get back to you shortly.",
            Category::Appreciation => "Thanks for the kind words!",
            Category::Greeting => "Hi there!",
            Category::General | Category::Custom(_) => GENERIC_DEFAULT,
        }
    }

    /// Joins category names the way they appear in signatures and history (`a, b`).
    pub fn join(categories: &[Category]) -> String {
        categories
            .iter()
            .map(Category::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        match name {
            "support_issue" => Category::SupportIssue,
            "request" => Category::Request,
            "inquiry" => Category::Inquiry,
            "appreciation" => Category::Appreciation,
            "greeting" => Category::Greeting,
            "general" => Category::General,
            other => Category::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for name in ["support_issue", "request", "inquiry", "appreciation", "greeting", "general", "billing"] {
            assert_eq!(Category::from(name).name(), name);
        }
        assert_eq!(Category::from("billing"), Category::Custom("billing".to_string()));
    }

    #[test]
    fn test_custom_has_no_trailing_phrase() {
        assert_eq!(Category::Custom("billing".into()).trailing_phrase(), "");
        assert_eq!(Category::General.trailing_phrase(), "");
        assert_eq!(
            Category::Custom("billing".into()).default_response(),
            Category::General.default_response()
        );
    }

    #[test]
    fn test_join() {
        let cats = vec![Category::SupportIssue, Category::Custom("billing".into())];
        assert_eq!(Category::join(&cats), "support_issue, billing");
        assert_eq!(Category::join(&[Category::General]), "general");
    }

    #[test]
    fn test_priority_membership() {
        assert!(Category::Inquiry.is_priority());
        assert!(!Category::General.is_priority());
        assert!(!Category::Greeting.is_priority());
    }
}
