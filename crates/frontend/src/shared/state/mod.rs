pub mod pagination;
pub mod sort;

pub use pagination::PaginationState;
pub use sort::SortState;
