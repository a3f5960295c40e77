//! The interactive init wizard: question flow, answer shape, and the
//! free-text folder validation backing the location prompts.

pub mod answers;
pub mod questions;
pub mod validate;

pub use answers::InitAnswers;
pub use questions::run_init_wizard;
pub use validate::{split_locations, validate_location, LocationCheck};
