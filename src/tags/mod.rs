pub mod mapper;
pub mod retriever;
pub mod symbol;
pub mod validator;

pub use mapper::{to_tag, Tag};
pub use retriever::{collect_tags, retrieve_tags, SUPPORTED_CHAIN_ID};
pub use symbol::clean_symbol;
pub use validator::is_clean_pair;
