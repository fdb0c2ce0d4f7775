pub mod assemble;
mod candidate;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod model;
pub mod normalize;
pub mod patterns;
pub mod structural;
pub mod util;

pub use assemble::AssembleOptions;
pub use error::ExtractError;
pub use extract::extract_questions;
pub use model::{Language, OriginalQuestion, ParsedQuestion, QuestionFormat, QuestionRecord};
pub use patterns::true_false_options;
