
pub mod addresses;
pub mod abi;
pub mod query;
pub mod tokens;

pub use addresses::*;
pub use query::*;
pub use tokens::*;
