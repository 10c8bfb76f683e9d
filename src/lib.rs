pub mod corpus;
pub mod crawl;
pub mod error;
pub mod rank;
pub mod report;
