pub mod raw_query;
pub mod resolve;

pub use raw_query::RawQueryUseCase;
pub use resolve::ResolveUseCase;
