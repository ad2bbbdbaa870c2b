//! Upstream integration with the OpenPageRank API.

pub mod open_page_rank;

pub use open_page_rank::PageRankClient;
