pub mod models;
pub mod pool;
pub mod seed;

pub use pool::DatabaseError;
