//! Record Repository Implementations

mod postgres;

pub use postgres::PostgresRecordRepository;
