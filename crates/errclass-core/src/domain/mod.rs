//! Domain model (names, fields, errors, instances).

pub mod errors;
pub mod fields;
pub mod instance;
pub mod name;

pub use errors::ValidationError;
pub use fields::Fields;
pub use instance::ErrorInstance;
pub use name::CategoryName;
