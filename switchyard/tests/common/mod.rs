#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use switchyard::{ContextRecord, ExtractError, RegistryBuilder, StrategyRegistry};

// ============================================================================
// Payment fixtures
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub method: &'static str,
    pub amount: u64,
}

pub type PaymentResult = Result<Receipt, ExtractError>;

/// Every strategy call, as `(method, context)`.
pub type CallLog = Arc<Mutex<Vec<(&'static str, ContextRecord)>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn amount(value: u64) -> ContextRecord {
    ContextRecord::new().with("amount", value.to_string())
}

fn recording_method(
    method: &'static str,
    log: &CallLog,
) -> impl Fn(ContextRecord) -> PaymentResult + Send + Sync + 'static {
    let log = log.clone();
    move |ctx: ContextRecord| {
        log.lock().unwrap().push((method, ctx.clone()));
        Ok(Receipt {
            method,
            amount: ctx.parse("amount")?,
        })
    }
}

/// CreditCard and PayPal handlers that log their calls.
pub fn payment_registry(log: &CallLog) -> StrategyRegistry<ContextRecord, PaymentResult> {
    RegistryBuilder::new()
        .register("CreditCard", recording_method("CreditCard", log))
        .register("PayPal", recording_method("PayPal", log))
        .build()
        .unwrap()
}

/// A PayPal handler that needs an email address on the context.
pub fn paypal_requiring_email(ctx: ContextRecord) -> PaymentResult {
    ctx.require("email")?;
    Ok(Receipt {
        method: "PayPal",
        amount: ctx.parse("amount")?,
    })
}
