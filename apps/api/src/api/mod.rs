//! API layer - controller helpers, schema fragments and shared handlers

pub mod controller;
pub mod expand;
pub mod formatting;
pub mod handlers;
pub mod schema;
pub mod values;

pub use controller::ApiController;
pub use expand::{is_expand_field, ExpandMap, EXPAND_ALL};
pub use formatting::{FieldFormatter, TextFormatter};
pub use handlers::options_handler;
pub use schema::{JsonSchemaEngine, JsonSchemaFragment, SchemaEngine};
pub use values::{filter_values, RequestData};
