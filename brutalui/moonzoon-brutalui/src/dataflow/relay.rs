use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

/// Sending half of an event stream.
///
/// Cloning a relay yields another sender into the same stream. Sends after
/// the receiving task has ended are dropped silently.
#[derive(Debug)]
pub struct Relay<T> {
    sender: UnboundedSender<T>,
}

impl<T> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> Relay<T> {
    pub fn send(&self, value: T) {
        let _ = self.sender.unbounded_send(value);
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>) {
    let (sender, receiver) = unbounded();
    (Relay { sender }, receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn events_arrive_in_send_order() {
        let (clicked_relay, clicked_stream) = relay();
        clicked_relay.send(1);
        clicked_relay.clone().send(2);
        clicked_relay.send(3);
        drop(clicked_relay);

        let received: Vec<i32> = clicked_stream.collect().await;
        assert_eq!(received, vec![1, 2, 3]);
    }

    #[test]
    fn sends_after_the_receiver_is_gone_are_dropped() {
        let (dismissed_relay, dismissed_stream) = relay::<()>();
        drop(dismissed_stream);
        dismissed_relay.send(());
        dismissed_relay.clone().send(());
    }
}
