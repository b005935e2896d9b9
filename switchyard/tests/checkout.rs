//! A hub driving a dispatcher: selecting a payment method switches strategy.

use std::sync::{Arc, Mutex};
use switchyard::{
    BoxError, ContextRecord, NotificationHub, PublishError, StrategyDispatcher, StrategyRegistry,
    Subject, observers::LoggingObserver, testing::RecordingObserver,
};

mod common;
use common::{PaymentResult, amount, call_log, payment_registry};

type Payments = StrategyDispatcher<ContextRecord, StrategyRegistry<ContextRecord, PaymentResult>>;

fn method_switcher(
    payments: &Arc<Mutex<Payments>>,
) -> impl Fn(&String) -> Result<(), BoxError> + Send + Sync + 'static {
    let payments = payments.clone();
    move |method: &String| {
        let mut payments = payments.lock().map_err(|_| "payments lock poisoned")?;
        payments.set_strategy(method)?;
        Ok(())
    }
}

#[test]
fn test_selection_switches_active_strategy() {
    let log = call_log();
    let payments = Arc::new(Mutex::new(
        Payments::new(payment_registry(&log), "CreditCard").unwrap(),
    ));
    let selections = RecordingObserver::<String>::new();

    let mut hub = NotificationHub::<String>::new();
    hub.subscribe(LoggingObserver::named("payment_method"));
    hub.subscribe(method_switcher(&payments));
    hub.subscribe(selections.clone());

    hub.publish("PayPal".to_string()).unwrap();
    let receipt = payments.lock().unwrap().invoke(amount(25)).unwrap();

    assert_eq!(receipt.method, "PayPal");
    assert_eq!(selections.states(), vec!["PayPal".to_string()]);
}

#[test]
fn test_unknown_selection_reported_and_ignored() {
    let log = call_log();
    let payments = Arc::new(Mutex::new(
        Payments::new(payment_registry(&log), "CreditCard").unwrap(),
    ));
    let selections = RecordingObserver::<String>::new();

    let mut hub = NotificationHub::<String>::new();
    let switcher = hub.subscribe(method_switcher(&payments));
    hub.subscribe(selections.clone());

    let err = hub.publish("Bitcoin".to_string()).unwrap_err();

    let PublishError::Failed {
        delivered,
        failures,
    } = err
    else {
        panic!("expected aggregated failures");
    };
    assert_eq!(delivered, 1);
    assert_eq!(failures[0].subscription, switcher);
    assert_eq!(
        failures[0].error.to_string(),
        "no strategy registered under `Bitcoin`"
    );

    // The later subscriber still saw the selection, the dispatcher did not move.
    assert_eq!(selections.count(), 1);
    assert_eq!(payments.lock().unwrap().active(), "CreditCard");
    assert_eq!(
        payments.lock().unwrap().invoke(amount(1)).unwrap().method,
        "CreditCard"
    );
}
