//! Event plumbing between the overlay and the switcher.
//!
//! Every event travels with the span that was current when it was sent, so
//! handling it on the other side stays attached to the originating trace.

pub mod switcher;

use tracing::Span;

#[derive(Debug)]
pub struct Sender<Event>(crossbeam_channel::Sender<(Span, Event)>);

#[derive(Debug)]
pub struct Receiver<Event>(crossbeam_channel::Receiver<(Span, Event)>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("event channel closed")]
pub struct ChannelClosed;

pub fn channel<Event>() -> (Sender<Event>, Receiver<Event>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (Sender(tx), Receiver(rx))
}

impl<Event> Sender<Event> {
    pub fn send(&self, event: Event) -> Result<(), ChannelClosed> {
        self.0.send((Span::current(), event)).map_err(|_| ChannelClosed)
    }
}

impl<Event> Clone for Sender<Event> {
    fn clone(&self) -> Self { Sender(self.0.clone()) }
}

impl<Event> Receiver<Event> {
    /// Blocks for the next event. `None` once every sender is gone.
    pub fn recv(&self) -> Option<(Span, Event)> { self.0.recv().ok() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_sees_events_then_disconnect() {
        let (tx, rx) = channel();
        let tx2 = tx.clone();
        tx.send(1).unwrap();
        tx2.send(2).unwrap();
        drop(tx);
        drop(tx2);
        let events: Vec<i32> = std::iter::from_fn(|| rx.recv()).map(|(_, e)| e).collect();
        assert_eq!(events, vec![1, 2]);
        assert!(rx.recv().is_none());
    }

    #[test]
    fn send_fails_without_receiver() {
        let (tx, rx) = channel::<()>();
        drop(rx);
        assert_eq!(tx.send(()), Err(ChannelClosed));
    }
}
