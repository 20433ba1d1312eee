pub mod corpus;
pub mod engine;
pub mod index;
pub mod set;
pub mod types;
pub mod value;
