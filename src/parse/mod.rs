pub mod rc_parser;
pub mod rc_serializer;

pub use rc_parser::parse_rc;
pub use rc_serializer::serialize_rc;
