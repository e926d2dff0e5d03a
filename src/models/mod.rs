//! Typed client-shape views of the catalog entities.
//!
//! Every field is optional: the structs describe what a well-formed item
//! looks like, while required-field rules live in [`crate::schema`].

pub mod banner;
pub mod category;
pub mod product;
pub mod section;
pub mod subcategory;

pub use banner::*;
pub use category::*;
pub use product::*;
pub use section::*;
pub use subcategory::*;
