use super::SensorStatus;

impl SensorStatus {
    /// Worst-wins fold: Critical > Warning > Normal. Empty input is Normal.
    pub fn worst_of<I>(statuses: I) -> SensorStatus
    where
        I: IntoIterator<Item = SensorStatus>,
    {
        statuses
            .into_iter()
            .max()
            .unwrap_or(SensorStatus::Normal)
    }
}
