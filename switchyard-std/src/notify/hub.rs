//! Synchronous publish/subscribe hub.

use switchyard_core::{
    BoxObserver, Message, Observer, PublishError, PublishReport, Subject, SubscriberFailure,
    SubscriptionId,
};

/// How a publish reacts to a failing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// Notify every subscriber, then report all failures together (default).
    #[default]
    ContinueOnError,
    /// Stop at the first failing subscriber.
    AbortOnError,
}

/// A subject that delivers every published state to its subscribers.
///
/// Subscribers are notified synchronously, one after another, in the order
/// they subscribed. The same observer may be subscribed more than once; each
/// subscription is notified separately.
///
/// # Example
///
/// ```rust,ignore
/// let mut hub = NotificationHub::<String>::new();
/// hub.subscribe(|category: &String| println!("now showing {category}"));
/// hub.subscribe(FetchingObserver::new(catalog));
///
/// hub.publish("tools".to_string())?;
/// ```
pub struct NotificationHub<S: Message> {
    subscribers: Vec<(SubscriptionId, BoxObserver<S>)>,
    state: Option<S>,
    policy: DeliveryPolicy,
    next_id: u64,
}

impl<S: Message> Default for NotificationHub<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Message> NotificationHub<S> {
    /// Create an empty hub with [`DeliveryPolicy::ContinueOnError`].
    pub fn new() -> Self {
        Self::with_policy(DeliveryPolicy::default())
    }

    /// Create an empty hub with the given failure policy.
    pub fn with_policy(policy: DeliveryPolicy) -> Self {
        Self {
            subscribers: Vec::new(),
            state: None,
            policy,
            next_id: 0,
        }
    }

    /// The failure policy.
    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// The most recently published state.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Number of subscriptions.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether there are no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Subscription ids in notification order.
    pub fn subscriptions(&self) -> Vec<SubscriptionId> {
        self.subscribers.iter().map(|(id, _)| *id).collect()
    }
}

fn deliver<S: Message>(
    subscribers: &[(SubscriptionId, BoxObserver<S>)],
    policy: DeliveryPolicy,
    state: &S,
) -> Result<PublishReport, PublishError> {
    let mut delivered = 0;
    let mut failures = Vec::new();

    for (position, (id, observer)) in subscribers.iter().enumerate() {
        match observer.update(state) {
            Ok(()) => delivered += 1,
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(subscription = %id, position, %error, "subscriber failed");

                if policy == DeliveryPolicy::AbortOnError {
                    return Err(PublishError::Aborted {
                        subscription: *id,
                        delivered,
                        source: error,
                    });
                }
                failures.push(SubscriberFailure {
                    subscription: *id,
                    position,
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(PublishReport { delivered })
    } else {
        Err(PublishError::Failed {
            delivered,
            failures,
        })
    }
}

impl<S: Message> Subject<S> for NotificationHub<S> {
    fn subscribe<O: Observer<S>>(&mut self, observer: O) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, observer.boxed()));

        #[cfg(feature = "tracing")]
        tracing::debug!(subscription = %id, total = self.subscribers.len(), "subscribed");

        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.subscribers.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        self.subscribers.remove(index);

        #[cfg(feature = "tracing")]
        tracing::debug!(subscription = %id, total = self.subscribers.len(), "unsubscribed");

        true
    }

    fn publish(&mut self, state: S) -> Result<PublishReport, PublishError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(subscribers = self.subscribers.len(), "publishing state");

        let state = self.state.insert(state);
        deliver(&self.subscribers, self.policy, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> impl Observer<String> {
        let log = log.clone();
        move |state: &String| log.lock().unwrap().push(format!("{tag}({state})"))
    }

    #[test]
    fn test_publish_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut hub = NotificationHub::<String>::new();
        hub.subscribe(recorder(&log, "A"));
        hub.subscribe(recorder(&log, "B"));
        hub.subscribe(recorder(&log, "C"));

        let report = hub.publish("tools".to_string()).unwrap();

        assert_eq!(report.delivered, 3);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["A(tools)", "B(tools)", "C(tools)"]
        );
        assert_eq!(hub.state().map(String::as_str), Some("tools"));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let mut hub = NotificationHub::<u32>::new();
        assert_eq!(hub.publish(1).unwrap().delivered, 0);
        assert_eq!(hub.state(), Some(&1));
    }

    #[test]
    fn test_duplicate_subscriptions_each_notified() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut hub = NotificationHub::<String>::new();
        let first = hub.subscribe(recorder(&log, "A"));
        let second = hub.subscribe(recorder(&log, "A"));

        assert_ne!(first, second);
        hub.publish("garden".to_string()).unwrap();
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unsubscribe_keeps_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut hub = NotificationHub::<String>::new();
        let a = hub.subscribe(recorder(&log, "A"));
        let b = hub.subscribe(recorder(&log, "B"));
        let c = hub.subscribe(recorder(&log, "C"));

        assert!(hub.unsubscribe(b));
        assert!(!hub.unsubscribe(b));
        assert_eq!(hub.subscriptions(), vec![a, c]);

        hub.publish("toys".to_string()).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["A(toys)", "C(toys)"]);
    }

    #[test]
    fn test_continue_on_error_collects_failures() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut hub = NotificationHub::<String>::new();
        hub.subscribe(recorder(&log, "A"));
        let bad = hub.subscribe(|_: &String| Err::<(), _>("offline"));
        hub.subscribe(recorder(&log, "C"));

        let err = hub.publish("tools".to_string()).unwrap_err();

        assert_eq!(*log.lock().unwrap(), vec!["A(tools)", "C(tools)"]);
        match err {
            PublishError::Failed {
                delivered,
                failures,
            } => {
                assert_eq!(delivered, 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].subscription, bad);
                assert_eq!(failures[0].position, 1);
                assert_eq!(failures[0].error.to_string(), "offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_abort_on_error_stops_delivery() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut hub = NotificationHub::<String>::with_policy(DeliveryPolicy::AbortOnError);
        hub.subscribe(recorder(&log, "A"));
        let bad = hub.subscribe(|_: &String| Err::<(), _>("offline"));
        hub.subscribe(recorder(&log, "C"));

        let err = hub.publish("tools".to_string()).unwrap_err();

        assert_eq!(*log.lock().unwrap(), vec!["A(tools)"]);
        assert_eq!(err.delivered(), 1);
        assert_eq!(err.failed_subscriptions(), vec![bad]);
        assert_eq!(hub.state().map(String::as_str), Some("tools"));
    }
}
