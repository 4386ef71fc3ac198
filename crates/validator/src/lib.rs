//! Snippet Validator: size, shape, and production-strictness checks shared by the Rule
//! Engine and the DSL compiler.

pub mod meaningful_logic;
pub mod validate;

pub use meaningful_logic::has_meaningful_logic;
pub use validate::SnippetValidator;
