pub mod mapping;
pub mod summary;
pub mod types;

pub use mapping::{map_response, response_table, stringify_answer, ResponseTable};
pub use summary::{person_identifier, summarize_open_text, OpenTextSample, OpenTextSummary};
