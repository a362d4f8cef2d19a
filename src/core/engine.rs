use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives one conversion run through its three phases. Stateless between
/// runs; a failure in any phase aborts the rest of the run.
pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Extracting records...");
        let extraction = self.pipeline.extract()?;
        let converted = extraction.records.len();
        let skipped = extraction.skipped;
        tracing::info!("Extracted {} records ({} skipped)", converted, skipped);
        self.monitor.log_stats("Extract");

        if extraction.records.is_empty() {
            // Nothing to write; leave any existing destination untouched.
            tracing::warn!("No records found in the selected source");
            self.monitor.log_final_stats();
            return Ok(RunSummary {
                destination: None,
                converted: 0,
                skipped,
            });
        }

        tracing::info!("Rendering output lines...");
        let result = self.pipeline.transform(extraction.records)?;
        tracing::info!("Rendered {} entries", result.lines.len());
        self.monitor.log_stats("Transform");

        tracing::info!("Writing output...");
        let destination = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", destination);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            destination: Some(destination),
            converted,
            skipped,
        })
    }
}
