pub mod classify;
pub mod cli;
pub mod conf;
pub mod grouping;
pub mod logging;
pub mod model;
pub mod query;
pub mod stream;
