//! Synchronous event dispatch with per-kind handler lists and an optional
//! priority queue.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use thiserror::Error;

use super::event::{Event, EventKind};
use super::listener::EventListener;

/// Error type handlers may return. Boxed so handlers can surface any error.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A callback subscribed to one event kind.
type Handler = Box<dyn Fn(&Event) -> Result<(), HandlerError> + Send + Sync>;

/// Errors surfaced by event dispatch.
#[derive(Debug, Error)]
pub enum EventError {
    /// A handler failed; dispatch of the remaining handlers was aborted.
    #[error("handler for {kind:?} events failed: {source}")]
    Handler {
        kind: EventKind,
        #[source]
        source: HandlerError,
    },
}

/// Manages handler registration, synchronous dispatch, and priority
/// queueing of events.
///
/// Handlers for a kind run in registration order. Duplicate registration is
/// permitted and results in duplicate invocation. Dispatch takes the
/// dispatcher by shared reference, so the handler list cannot be mutated
/// while it is being iterated.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
    queue: BinaryHeap<QueuedEvent>,
    queue_seq: u64,
}

impl EventDispatcher {
    /// Create a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher and let each listener register its handlers.
    pub fn with_listeners(listeners: &[&dyn EventListener]) -> Self {
        let mut dispatcher = Self::new();
        for listener in listeners {
            listener.setup(&mut dispatcher);
        }
        dispatcher
    }

    /// Register a handler for an event kind, appended after any existing
    /// handlers for that kind.
    pub fn register_handler(
        &mut self,
        kind: EventKind,
        handler: impl Fn(&Event) -> Result<(), HandlerError> + Send + Sync + 'static,
    ) {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Number of handlers registered for a kind.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Dispatch an event to every handler registered for its kind.
    ///
    /// A kind with no registrations is a silent no-op. Handlers run
    /// synchronously in registration order; the first handler error aborts
    /// dispatch of the remaining handlers and propagates.
    pub fn dispatch(&self, event: &Event) -> Result<(), EventError> {
        let Some(handlers) = self.handlers.get(&event.kind) else {
            return Ok(());
        };
        for handler in handlers {
            handler(event).map_err(|source| EventError::Handler {
                kind: event.kind,
                source,
            })?;
        }
        Ok(())
    }

    /// Enqueue an event for later priority-ordered processing.
    pub fn queue(&mut self, event: Event) {
        let entry = QueuedEvent {
            priority: event.priority(),
            seq: self.queue_seq,
            event,
        };
        self.queue_seq += 1;
        self.queue.push(entry);
    }

    /// Number of events waiting in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Pop and dispatch the most urgent queued event.
    ///
    /// Returns `Ok(false)` when the queue is empty. Equal priorities
    /// resolve in insertion order.
    pub fn process_next(&mut self) -> Result<bool, EventError> {
        match self.queue.pop() {
            Some(entry) => {
                self.dispatch(&entry.event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Process queued events until the queue is empty, returning how many
    /// were dispatched. Stops at the first handler error; events still in
    /// the queue stay queued.
    pub fn drain(&mut self) -> Result<usize, EventError> {
        let mut dispatched = 0;
        while self.process_next()? {
            dispatched += 1;
        }
        Ok(dispatched)
    }
}

/// Queue entry ordered by `(priority, seq)`.
struct QueuedEvent {
    priority: i32,
    seq: u64,
    event: Event,
}

impl PartialEq for QueuedEvent {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for QueuedEvent {}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEvent {
    // BinaryHeap pops the maximum; invert so the lowest (priority, seq)
    // comes out first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;

    /// Shared log of handler invocations, usable from `Send + Sync` handlers.
    fn invocation_log() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn recording_handler(
        log: &Arc<Mutex<Vec<String>>>,
        label: &str,
    ) -> impl Fn(&Event) -> Result<(), HandlerError> + Send + Sync + 'static {
        let log = Arc::clone(log);
        let label = label.to_string();
        move |event| {
            log.lock().unwrap().push(format!("{label}:{}", event.source));
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_runs_handlers_in_registration_order() {
        let log = invocation_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register_handler(
            EventKind::TechnologyConnection,
            recording_handler(&log, "first"),
        );
        dispatcher.register_handler(
            EventKind::TechnologyConnection,
            recording_handler(&log, "second"),
        );
        // Handlers for other kinds must not run.
        dispatcher.register_handler(EventKind::DataTransfer, recording_handler(&log, "other"));

        let event = Event::new(EventKind::TechnologyConnection, "java", "cpp");
        dispatcher.dispatch(&event).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first:java", "second:java"]);
    }

    #[test]
    fn test_dispatch_without_handlers_is_a_silent_noop() {
        let dispatcher = EventDispatcher::new();
        let event = Event::new(EventKind::SystemNotification, "a", "b");
        assert!(dispatcher.dispatch(&event).is_ok());
    }

    #[test]
    fn test_duplicate_registration_runs_twice() {
        let count = Arc::new(Mutex::new(0u32));
        let mut dispatcher = EventDispatcher::new();
        for _ in 0..2 {
            let count = Arc::clone(&count);
            dispatcher.register_handler(EventKind::DataTransfer, move |_| {
                *count.lock().unwrap() += 1;
                Ok(())
            });
        }

        let event = Event::data_transfer("a", "b", json!(null));
        dispatcher.dispatch(&event).unwrap();
        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn test_failing_handler_aborts_remaining_handlers() {
        let log = invocation_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register_handler(EventKind::Error, recording_handler(&log, "ran"));
        dispatcher.register_handler(EventKind::Error, |_| Err("boom".into()));
        dispatcher.register_handler(EventKind::Error, recording_handler(&log, "skipped"));

        let event = Event::new(EventKind::Error, "gate", "");
        let err = dispatcher.dispatch(&event).unwrap_err();
        assert!(matches!(err, EventError::Handler { kind, .. } if kind == EventKind::Error));
        assert_eq!(*log.lock().unwrap(), vec!["ran:gate"]);
    }

    #[test]
    fn test_queue_drains_in_priority_order() {
        let log = invocation_log();
        let mut dispatcher = EventDispatcher::new();
        for kind in [
            EventKind::TechnologyConnection,
            EventKind::DataTransfer,
            EventKind::SystemNotification,
            EventKind::Error,
        ] {
            dispatcher.register_handler(kind, recording_handler(&log, "got"));
        }

        dispatcher.queue(Event::data_transfer("transfer", "x", json!(1)));
        dispatcher.queue(Event::new(EventKind::TechnologyConnection, "conn", "x"));
        dispatcher.queue(Event::new(EventKind::Error, "error", "x"));
        dispatcher.queue(Event::new(EventKind::SystemNotification, "notice", "x"));

        let dispatched = dispatcher.drain().unwrap();
        assert_eq!(dispatched, 4);
        assert_eq!(dispatcher.queue_len(), 0);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["got:error", "got:notice", "got:conn", "got:transfer"]
        );
    }

    #[test]
    fn test_metadata_priority_reorders_queue() {
        let log = invocation_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register_handler(EventKind::DataTransfer, recording_handler(&log, "got"));
        dispatcher.register_handler(EventKind::Error, recording_handler(&log, "got"));

        dispatcher.queue(Event::new(EventKind::Error, "error", "x"));
        dispatcher
            .queue(Event::data_transfer("urgent", "x", json!(1)).with_metadata("priority", json!(-1)));

        dispatcher.drain().unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["got:urgent", "got:error"]);
    }

    #[test]
    fn test_queue_ties_resolve_in_insertion_order() {
        let log = invocation_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register_handler(EventKind::DataTransfer, recording_handler(&log, "got"));

        for source in ["one", "two", "three"] {
            dispatcher.queue(Event::data_transfer(source, "x", json!(null)));
        }

        dispatcher.drain().unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["got:one", "got:two", "got:three"]
        );
    }

    #[test]
    fn test_failed_drain_leaves_rest_queued() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register_handler(EventKind::Error, |_| Err("boom".into()));

        dispatcher.queue(Event::new(EventKind::Error, "first", "x"));
        dispatcher.queue(Event::new(EventKind::Error, "second", "x"));

        assert!(dispatcher.drain().is_err());
        // The failing event was consumed; the other remains.
        assert_eq!(dispatcher.queue_len(), 1);
    }

    #[test]
    fn test_process_next_on_empty_queue() {
        let mut dispatcher = EventDispatcher::new();
        assert!(!dispatcher.process_next().unwrap());
    }
}
