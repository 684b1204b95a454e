use crate::problem::EncodedProblem;
use crate::search::{
    search_engines::{Bfs, Dfs, SearchStatistics, TerminationCondition},
    Plan,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The search space was exhausted without finding a plan
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &EncodedProblem,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    /// Depth first, children in the order they are generated
    Dfs,
    /// Breadth first, finds plans with the fewest operators
    Bfs,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Dfs => Box::new(Dfs::new()),
            SearchEngineName::Bfs => Box::new(Bfs::new()),
        }
    }
}
