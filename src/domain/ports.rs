use crate::domain::model::{ParsedAnimals, VisitReport, VisitRequest};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn delimiter(&self) -> u8;
    fn has_header(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ParsedAnimals>;
    fn transform(&self, request: &VisitRequest, animals: ParsedAnimals) -> Result<VisitReport>;
}
