//! Request inputs with validation at construction
//!
//! Bodies deserialize into `*Input` types with every field optional so a
//! missing field becomes a `ValidationError` instead of a decoder error.
//! Converting to the matching `New*` type is the only way to reach the
//! repositories, so nothing unvalidated ever touches the pool.

pub mod validation;
pub mod category;
pub mod product;
pub mod supplier;

pub use validation::{NumericInput, ValidationError};
pub use category::{CategoryInput, NewCategory};
pub use product::{NewProduct, ProductInput};
pub use supplier::{NewSupplier, SupplierInput};
