//! Event listeners — bundles of handler registrations.

use super::dispatcher::EventDispatcher;
use super::event::EventKind;

/// A bundle of handler registrations.
///
/// Implementations register their handlers on the dispatcher they are given;
/// typically via [`EventDispatcher::with_listeners`].
pub trait EventListener {
    /// Register this listener's handlers on the dispatcher.
    fn setup(&self, dispatcher: &mut EventDispatcher);
}

/// Stock listener that logs connection and transfer events through the
/// `log` facade.
#[derive(Debug, Default)]
pub struct LogListener;

impl EventListener for LogListener {
    fn setup(&self, dispatcher: &mut EventDispatcher) {
        dispatcher.register_handler(EventKind::TechnologyConnection, |event| {
            log::info!("technology connection: {} -> {}", event.source, event.destination);
            Ok(())
        });
        dispatcher.register_handler(EventKind::DataTransfer, |event| {
            log::info!("data transfer: {} -> {}", event.source, event.destination);
            Ok(())
        });
    }
}
