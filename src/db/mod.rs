pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryRecordStore;
pub use pool::{create_pool, run_migrations};
pub use postgres::PgRecordStore;
pub use store::{OrderFilter, QuoteFilter, RecordStore};
