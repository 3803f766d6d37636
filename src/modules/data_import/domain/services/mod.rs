pub mod csv_aggregator;
pub mod field_parser;
pub mod text_decoder;

pub use csv_aggregator::{CandidateSet, CsvAggregator};
pub use field_parser::{FieldParser, ParsedRecord, DEFAULT_DELIMITERS};
pub use text_decoder::decode_latin1;
