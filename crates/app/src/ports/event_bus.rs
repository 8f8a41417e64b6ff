//! Event bus port — where the hub sends its reports.

use std::future::Future;

use smarthub_domain::event::Event;

/// Publishes hub events to interested observers.
///
/// Publishing is best-effort: an observer that is gone or lagging must not
/// turn a command outcome into a failure.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = ()> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = ()> + Send {
        (**self).publish(event)
    }
}
