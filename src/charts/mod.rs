pub mod error;
pub mod routes;
pub mod service;

pub use error::ChartError;
pub use service::{ChartQuery, ChartService};
