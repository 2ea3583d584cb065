//! Record Use Cases

mod list_records;
mod save_record;

pub use list_records::ListRecordsUseCase;
pub use save_record::SaveRecordUseCase;
