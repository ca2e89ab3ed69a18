pub mod engine;
pub mod overlap;
pub mod parser;
pub mod pipeline;
pub mod request;
pub mod season;

pub use crate::domain::model::{AnimalRecord, HourRange, Season, VisitReport, VisitRequest};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
