use crate::error::Result;
use crate::evaluation::SensorEvaluation;

use super::MonitoringHandler;

impl MonitoringHandler {
    /// Evaluation of the newest point, `None` until history has data.
    pub fn evaluate(&self) -> Result<Option<SensorEvaluation>> {
        let Some(latest) = self.history.latest() else {
            return Ok(None);
        };
        Ok(Some(latest.snapshot()?.evaluate()))
    }
}
