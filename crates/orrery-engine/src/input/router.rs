//! Per-channel handler table.
//!
//! A game registers one plain function per event channel it cares about.
//! Events on channels with no handler are dropped.

use crate::api::game::EngineContext;
use crate::input::queue::{EventChannel, InputEvent};

pub type Handler<T> = fn(&mut T, &mut EngineContext, &InputEvent);

pub struct EventRouter<T> {
    handlers: [Option<Handler<T>>; EventChannel::COUNT],
}

// Manual impls: a derive would require `T: Copy`.
impl<T> Clone for EventRouter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EventRouter<T> {}

impl<T> EventRouter<T> {
    pub fn new() -> Self {
        Self {
            handlers: [None; EventChannel::COUNT],
        }
    }

    /// Register `handler` for `channel`, replacing any previous one.
    pub fn on(mut self, channel: EventChannel, handler: Handler<T>) -> Self {
        self.handlers[channel.index()] = Some(handler);
        self
    }

    pub fn handles(&self, channel: EventChannel) -> bool {
        self.handlers[channel.index()].is_some()
    }

    /// Call the handler registered for the event's channel.
    /// Returns false when no handler is registered.
    pub fn dispatch(&self, target: &mut T, ctx: &mut EngineContext, event: &InputEvent) -> bool {
        match self.handlers[event.channel().index()] {
            Some(handler) => {
                handler(target, ctx, event);
                true
            }
            None => {
                log::trace!("no handler for {}", event.channel().name());
                false
            }
        }
    }
}

impl<T> Default for EventRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        clicks: u32,
        last_input: Option<String>,
    }

    fn on_click(c: &mut Counter, _ctx: &mut EngineContext, _ev: &InputEvent) {
        c.clicks += 1;
    }

    fn on_input(c: &mut Counter, _ctx: &mut EngineContext, ev: &InputEvent) {
        if let InputEvent::Input { value, .. } = ev {
            c.last_input = Some(value.clone());
        }
    }

    #[test]
    fn dispatches_to_registered_channel() {
        let router = EventRouter::<Counter>::new()
            .on(EventChannel::Click, on_click)
            .on(EventChannel::Input, on_input);
        let mut counter = Counter::default();
        let mut ctx = EngineContext::new();

        assert!(router.dispatch(&mut counter, &mut ctx, &InputEvent::Click { target: 0 }));
        assert!(router.dispatch(
            &mut counter,
            &mut ctx,
            &InputEvent::Input { control: 1, value: "2".into() }
        ));
        assert_eq!(counter.clicks, 1);
        assert_eq!(counter.last_input.as_deref(), Some("2"));
    }

    #[test]
    fn unhandled_channel_is_dropped() {
        let router = EventRouter::<Counter>::new().on(EventChannel::Click, on_click);
        let mut counter = Counter::default();
        let mut ctx = EngineContext::new();
        assert!(!router.dispatch(&mut counter, &mut ctx, &InputEvent::Wheel { delta: 1.0 }));
        assert!(!router.handles(EventChannel::Resize));
        assert_eq!(counter.clicks, 0);
    }
}
