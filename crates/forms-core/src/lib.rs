//! # forms-core - Core Domain Types
//!
//! Foundation crate for fieldset form rendering. Provides the fieldset schema,
//! the entry values map, field naming and sizing rules, HTML escaping, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, indexmap, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Schema (`schema`)
//! - [`Fieldset`] - Ordered sections of fields, one tab per section
//! - [`Section`] - A titled group of fields
//! - [`FieldProperty`] - Declared type, options, attributes, size, value, title
//! - [`FieldType`] - Supported field kinds (unknown kinds become `Text`)
//! - [`Visibility`] - Entry publication state
//!
//! ### Values (`values`)
//! - [`Values`] - Current entry values with dot-path lookup
//!
//! ### Naming and Layout
//! - [`element_name()`] - Field key to form control name (`seo.title` → `seo[title]`)
//! - [`SizeTable`] - Size key to grid column class
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use forms_core::prelude::*;
//! ```

pub mod error;
pub mod html;
pub mod logging;
pub mod name;
pub mod schema;
pub mod size;
pub mod values;

/// Prelude for common imports used throughout all fieldset form crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use html::escape;
pub use name::element_name;
pub use schema::{FieldProperty, FieldType, Fieldset, Section, Visibility};
pub use size::{SizeTable, FULL_WIDTH};
pub use values::{value_text, Values};
