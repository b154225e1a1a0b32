pub mod row;
pub mod types;

pub use row::*;
pub use types::*;
