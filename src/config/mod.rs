//! Layered configuration loading.
//!
//! Loads an ordered list of templated file paths and merges them into one
//! nested mapping:
//! 1. **Resolve** - platform directories for the application (see [`crate::paths`])
//! 2. **Expand** - `{{.Role}}` placeholders in each template
//! 3. **Read** - files that exist; missing or unreadable files are skipped
//! 4. **Parse** - with a single, caller-chosen [`Parser`]
//! 5. **Merge** - deep merge into the root, in template order
//!
//! ## Merge Strategy
//! - Mappings: merged key by key, recursively
//! - Sequences and scalars: resolved by [`Precedence`] (first file wins by default)
//! - Null: never shadows a value from another file

mod loader;
mod merge;
mod parser;
mod template;

pub use loader::Multiconf;
pub use merge::{Precedence, deep_merge, merge_into};
pub use parser::{Format, JsonParser, Mapping, ParseError, Parser, YamlParser};
pub use template::{TemplateError, expand};
