use crate::core::Pipeline;
use crate::domain::model::{VisitReport, VisitRequest};
use crate::utils::error::Result;

pub struct VisitEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> VisitEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self, request: &VisitRequest) -> Result<VisitReport> {
        tracing::info!(
            "Planning visit on {} {} ({}) between {}",
            request.day,
            request.month,
            request.season,
            request.window
        );

        // Extract
        let animals = self.pipeline.extract()?;
        tracing::debug!("Extracted {} data lines from {}", animals.lines.len(), animals.source);

        // Transform
        let report = self.pipeline.transform(request, animals)?;
        tracing::info!("{} animals available", report.available().count());

        Ok(report)
    }
}
