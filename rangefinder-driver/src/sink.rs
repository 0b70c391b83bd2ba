use crossbeam_channel::{unbounded, Receiver, Sender};
use rangefinder_data::Point3D;

/// Owns the point cloud of the current scan session.
///
/// Points are kept in insertion order and never evicted; the cloud only
/// shrinks on [`PointSink::reset`].
#[derive(Debug, Default)]
pub struct PointSink {
    points: Vec<Point3D>,
    observers: Vec<Sender<usize>>,
}

impl PointSink {
    pub fn new() -> PointSink {
        PointSink {
            points: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn append(&mut self, point: Point3D) {
        self.points.push(point);
        self.notify();
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.notify();
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Points as the 3D view consumes them, see [`Point3D::render_order`].
    pub fn render_points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.points.iter().map(Point3D::render_order)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a receiver of the point count, sent after every append and reset.
    ///
    /// The channel is unbounded so every count is delivered in order. An
    /// observer that never drains its receiver grows with the cloud; drop
    /// the receiver to unsubscribe.
    pub fn subscribe(&mut self) -> Receiver<usize> {
        let (tx, rx) = unbounded();
        self.observers.push(tx);
        rx
    }

    fn notify(&mut self) {
        let count = self.points.len();
        // drop observers whose receiver is gone
        self.observers.retain(|tx| tx.send(count).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut sink = PointSink::new();
        let p1 = Point3D::new(1., 0., 0.);
        let p2 = Point3D::new(0., 2., 0.);
        let p3 = Point3D::new(0., 0., 3.);
        sink.append(p1);
        sink.append(p2);
        sink.append(p3);
        assert_eq!(sink.points(), &[p1, p2, p3]);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_reset() {
        let mut sink = PointSink::new();
        for i in 0..50 {
            sink.append(Point3D::new(i as f64, 0., 0.));
        }
        sink.reset();
        assert!(sink.is_empty());
        assert_eq!(sink.render_points().count(), 0);

        sink.reset();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_points() {
        let mut sink = PointSink::new();
        sink.append(Point3D::new(1., 2., 3.));
        assert_eq!(sink.render_points().collect::<Vec<_>>(), vec![(1., 3., 2.)]);
    }

    #[test]
    fn test_observers_receive_counts() {
        let mut sink = PointSink::new();
        let rx = sink.subscribe();
        sink.append(Point3D::new(0., 0., 0.));
        sink.append(Point3D::new(0., 0., 0.));
        sink.reset();
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn test_dropped_observer_is_pruned() {
        let mut sink = PointSink::new();
        let rx = sink.subscribe();
        drop(rx);
        let kept = sink.subscribe();
        sink.append(Point3D::new(0., 0., 0.));
        assert_eq!(sink.observers.len(), 1);
        assert_eq!(kept.try_recv(), Ok(1));
    }

    #[test]
    fn test_slow_observer_gets_every_count() {
        let mut sink = PointSink::new();
        let rx = sink.subscribe();
        for i in 0..500 {
            sink.append(Point3D::new(i as f64, 0., 0.));
        }
        assert_eq!(rx.len(), 500);
        assert_eq!(rx.try_iter().last(), Some(500));

        drop(rx);
        sink.reset();
        assert!(sink.observers.is_empty());
    }
}
