#[macro_use]
extern crate lazy_static;

pub mod cache;
pub mod checker;
pub mod dictionary;
pub mod suggest;
pub mod tokens;

pub use cache::CorrectnessCache;
pub use checker::{SpellChecker, SpellingError};
pub use dictionary::Dictionary;
pub use suggest::{edit_distance, suggest, MAX_EDIT_DISTANCE, MAX_SUGGESTIONS};
pub use tokens::{Token, Tokenizer};
