//! # Brain Module
//!
//! Rule-based analysis and reply composition for the responder.
//! Pure keyword matching, no model involved.
//!
//! ## Components
//! - `category`: Category kinds and their built-in phrases
//! - `classifier`: Keyword rules and the greeting detector
//! - `picker`: Template selection strategy (random in production)
//! - `composer`: Priority-ordered reply body assembly

pub mod category;
pub mod classifier;
pub mod composer;
pub mod picker;

pub use category::{Category, PRIORITY_ORDER};
pub use classifier::{CategoryClassifier, CategoryRules, GreetingDetector};
pub use composer::{render_order, ResponseComposer, ResponseTemplates, GREETING_LINES};
pub use picker::{FixedPicker, RandomPicker, TemplatePicker};
