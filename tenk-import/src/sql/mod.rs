//! Statement generator: parsed sheets to an SQL import script

mod generator;
mod ids;
mod literal;
mod script;
mod summary;

pub use generator::{GeneratorOptions, generate_import_sql};
pub use ids::IdMinter;
pub use summary::{GameOutcome, ImportSummary};
