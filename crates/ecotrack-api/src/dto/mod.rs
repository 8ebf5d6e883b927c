mod request;
mod response;

pub use request::{AqiQuery, ClassifyQuery, EstimateRequest, HistoryQuery, SummaryQuery};
pub use response::{
    EstimateResponse, HealthResponse, HistoryResponse, MigrateResponse, ProgressResponse,
};
