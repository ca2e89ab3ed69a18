use crate::core::parser::read_animals;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{ParsedAnimals, ReportEntry, VisitReport, VisitRequest};
use crate::utils::error::Result;

pub struct VisitPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VisitPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for VisitPipeline<S, C> {
    fn extract(&self) -> Result<ParsedAnimals> {
        read_animals(&self.storage, &self.config)
    }

    fn transform(&self, request: &VisitRequest, animals: ParsedAnimals) -> Result<VisitReport> {
        let mut entries = Vec::new();

        for line in animals.lines {
            let animal = match line {
                Ok(animal) => animal,
                Err(e) => {
                    entries.push(ReportEntry::Warning(e));
                    continue;
                }
            };

            // 冬眠中的動物不論時段都不列出
            if animal.hibernates_in(request.season) {
                tracing::debug!("{} is hibernating in {}", animal.name, request.season);
                continue;
            }

            if request.window.overlaps(&animal.active_range) {
                entries.push(ReportEntry::Available(animal));
            } else {
                tracing::debug!(
                    "{} ({}) is outside {}",
                    animal.name,
                    animal.active_range,
                    request.window
                );
            }
        }

        Ok(VisitReport {
            request: request.clone(),
            entries,
        })
    }
}
