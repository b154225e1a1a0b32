pub mod aggregators;
pub mod filter;
pub mod mutate;
pub mod reshape;

pub use aggregators::*;
pub use filter::*;
pub use mutate::*;
pub use reshape::*;
