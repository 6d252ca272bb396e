use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoverError<C> {
    #[error("No customers to serve")]
    EmptyInput,
    #[error("Customer {0:?} accepts no drinks")]
    UnsatisfiableCustomer(C),
    #[error("Drinks exhausted with {uncovered} customers unserved")]
    NoFeasibleCover { uncovered: usize },
    #[error("No cover of at most {limit} drinks")]
    SizeLimitReached { limit: usize },
    #[error("Search interrupted at combination size {combination_size} after {tested} tests")]
    Interrupted { combination_size: usize, tested: u64 },
}
