//! # Schema Factories
//!
//! Entry points for building schema trees. Each factory returns a fresh node
//! whose modifiers (`min`, `max`, `int`, `default`, `optional`, `nullable`)
//! consume and return it, so a whole tree reads as one expression:
//!
//! ```
//! use vschema_schema::validate;
//!
//! let post = validate::object()
//!     .field("id", validate::number().int())
//!     .field("title", validate::string().min(1))
//!     .field("status", validate::enumeration(["draft", "published"])?)
//!     .field("tags", validate::array(validate::string()).max(10));
//! # Ok::<(), vschema_core::SchemaError>(())
//! ```

use vschema_core::SchemaError;

use crate::array::ArraySchema;
use crate::boolean::BooleanSchema;
use crate::enumeration::EnumSchema;
use crate::node::Schema;
use crate::number::NumberSchema;
use crate::object::ObjectSchema;
use crate::string::StringSchema;

/// A string schema.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A number schema.
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// A boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// An enum schema over `options`, in the given order.
///
/// # Errors
///
/// Fails when `options` is empty or repeats a value.
pub fn enumeration<I, S>(options: I) -> Result<EnumSchema, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EnumSchema::new(options)
}

/// An array schema whose elements match `items`.
pub fn array<S: Schema>(items: S) -> ArraySchema<S> {
    ArraySchema::new(items)
}

/// An object schema with no fields yet; add them with [`ObjectSchema::field`].
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}
