pub mod response;
pub mod sql;

pub use response::ResponseChain;
pub use sql::SqlGenerationChain;
