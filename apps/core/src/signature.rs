//! Signature block appended to every reply.

use colored::Colorize;

use crate::decoration::strip_decoration;

pub const DEFAULT_SENDER_NAME: &str = "*Dharmin Joshi";
pub const DEFAULT_SENDER_ALIAS: &str = "DevKay*";

/// Who signs the automated replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub sender_name: String,
    pub sender_alias: String,
}

impl Default for Signature {
    fn default() -> Self {
        Self::new(DEFAULT_SENDER_NAME, DEFAULT_SENDER_ALIAS)
    }
}

impl Signature {
    pub fn new(sender_name: impl Into<String>, sender_alias: impl Into<String>) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_alias: sender_alias.into(),
        }
    }

    /// Undecorated signature text for the given category label and timestamp.
    pub fn render_plain(&self, category_label: &str, timestamp: &str) -> String {
        format!(
            "Best regards,\n{} / {}\n\n\
             _Automated message generated from the DevKay Protocol._\n\
             _Category: {} | Timestamp: {}_\n\
             _If you have any questions, feel free to ask. Thank you for your patience._",
            self.sender_name, self.sender_alias, category_label, timestamp
        )
    }

    /// Same text as `render_plain`, colored for terminal display.
    pub fn render_decorated(&self, category_label: &str, timestamp: &str) -> String {
        self.render_plain(category_label, timestamp).blue().to_string()
    }
}

/// A full reply in both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    /// Colored, for the terminal.
    pub decorated: String,
    /// Escape-free, for storage and the HTTP boundary.
    pub plain: String,
}

impl RenderedResponse {
    /// Joins body and signature with a blank line.
    pub fn assemble(body: &str, signature: &Signature, category_label: &str, timestamp: &str) -> Self {
        let decorated = format!(
            "{}\n\n{}",
            body,
            signature.render_decorated(category_label, timestamp)
        );
        let plain = strip_decoration(&decorated);
        Self { decorated, plain }
    }
}
