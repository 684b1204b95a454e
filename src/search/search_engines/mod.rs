mod bfs;
mod dfs;
mod search_engine;
mod search_statistics;
mod termination_condition;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
