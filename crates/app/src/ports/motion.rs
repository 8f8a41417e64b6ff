//! Motion source port — scan results for security cameras.

/// Supplies the result of a single motion scan.
///
/// Called while the camera's lock is held, so implementations must not block.
pub trait MotionSource: Send + Sync {
    fn detect(&self) -> bool;
}

impl<T: MotionSource + ?Sized> MotionSource for std::sync::Arc<T> {
    fn detect(&self) -> bool {
        (**self).detect()
    }
}
