//! A small JSON document model.
//!
//! Scenes are assembled as a tree of [`JsonValue`]s and stringified once, right before they are
//! handed to the browser-side renderer.

mod array;
mod number;
mod object;
mod stringify;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use stringify::*;
pub use value::JsonValue;
