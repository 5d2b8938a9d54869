mod counts;
mod filter;

#[cfg(test)]
mod tests;

pub use counts::SeverityCounts;
pub use filter::{Filter, visible};
