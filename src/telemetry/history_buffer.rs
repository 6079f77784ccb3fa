use std::collections::VecDeque;

use crate::sensor::SensorKind;

use super::SensorDataPoint;

/// Points kept for the live chart.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Rolling window of the most recent points, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    points: VecDeque<SensorDataPoint>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Keeps only the newest `capacity` points of `points`.
    pub fn from_points(capacity: usize, points: impl IntoIterator<Item = SensorDataPoint>) -> Self {
        let mut buffer = Self::new(capacity);
        for point in points {
            buffer.push(point);
        }
        buffer
    }

    /// Appends `point`, returning the evicted oldest point when full.
    pub fn push(&mut self, point: SensorDataPoint) -> Option<SensorDataPoint> {
        let evicted = if self.points.len() == self.capacity {
            self.points.pop_front()
        } else {
            None
        };
        self.points.push_back(point);
        evicted
    }

    pub fn latest(&self) -> Option<&SensorDataPoint> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SensorDataPoint> {
        self.points.iter()
    }

    /// Values of one sensor, oldest first.
    pub fn series(&self, kind: SensorKind) -> Vec<f64> {
        self.points.iter().map(|p| p.value(kind)).collect()
    }

    pub fn to_vec(&self) -> Vec<SensorDataPoint> {
        self.points.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(n: usize) -> SensorDataPoint {
        SensorDataPoint {
            date: format!("t{}", n),
            temperature: 25.0 + n as f64,
            moisture: 60.0,
            ph: 6.5,
        }
    }

    #[test]
    fn test_push_evicts_oldest_when_full() {
        let mut buffer = HistoryBuffer::new(3);
        for n in 0..3 {
            assert!(buffer.push(point(n)).is_none());
        }
        let evicted = buffer.push(point(3)).unwrap();

        assert_eq!(evicted.date, "t0");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.latest().unwrap().date, "t3");
        assert_eq!(buffer.series(SensorKind::Temperature), vec![26.0, 27.0, 28.0]);
    }

    #[test]
    fn test_from_points_keeps_newest() {
        let buffer = HistoryBuffer::from_points(2, (0..5).map(point));
        let dates: Vec<String> = buffer.iter().map(|p| p.date.clone()).collect();
        assert_eq!(dates, vec!["t3", "t4"]);
    }

    #[test]
    fn test_zero_capacity_still_holds_latest() {
        let mut buffer = HistoryBuffer::new(0);
        buffer.push(point(1));
        buffer.push(point(2));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.latest().unwrap().date, "t2");
    }

    #[test]
    fn test_default_capacity() {
        let buffer = HistoryBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), DEFAULT_HISTORY_CAPACITY);
    }
}
