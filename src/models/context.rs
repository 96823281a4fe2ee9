//! The ephemeral pricing input.

use serde::{Deserialize, Serialize};

/// The user's current selections on the rate step of the booking wizard.
///
/// A context is created when the user enters the rate step, mutated on every
/// input change, and discarded when the user navigates back past the step.
/// The engine never stores one; each quote is computed fresh from the most
/// recently committed context.
///
/// # Example
///
/// ```
/// use pricing_engine::models::PricingContext;
///
/// let context = PricingContext {
///     service_type: "Plumbing".to_string(),
///     service_task: "Sink Declogging".to_string(),
///     input_quantity: 4,
///     preferred_time: "21:00".to_string(),
///     workers_requested: 5,
/// };
/// assert_eq!(context.service_type, "Plumbing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContext {
    /// The selected service category (one of the five fixed categories).
    pub service_type: String,
    /// The selected task; must exist under `service_type` in the catalog.
    pub service_task: String,
    /// The user-entered quantity. Coerced into `[1, 999]` by the engine.
    #[serde(default = "default_quantity")]
    pub input_quantity: u32,
    /// The preferred service time as "HH:MM" (24-hour), or empty for none.
    #[serde(default)]
    pub preferred_time: String,
    /// The number of workers the client asked for. Clamped by the engine.
    #[serde(default = "default_workers")]
    pub workers_requested: u32,
}

fn default_quantity() -> u32 {
    1
}

fn default_workers() -> u32 {
    1
}

impl PricingContext {
    /// Creates a context with default quantity, time, and worker count.
    pub fn new(service_type: impl Into<String>, service_task: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            service_task: service_task.into(),
            input_quantity: default_quantity(),
            preferred_time: String::new(),
            workers_requested: default_workers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_safe_defaults() {
        let context = PricingContext::new("Laundry", "Regular Clothes");
        assert_eq!(context.input_quantity, 1);
        assert_eq!(context.workers_requested, 1);
        assert!(context.preferred_time.is_empty());
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_defaults() {
        let json = r#"{
            "service_type": "Car Washing",
            "service_task": "Sedan Wash"
        }"#;

        let context: PricingContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.input_quantity, 1);
        assert_eq!(context.workers_requested, 1);
        assert_eq!(context.preferred_time, "");
    }

    #[test]
    fn test_deserialize_full_context() {
        let json = r#"{
            "service_type": "Plumbing",
            "service_task": "Sink Declogging",
            "input_quantity": 4,
            "preferred_time": "21:00",
            "workers_requested": 5
        }"#;

        let context: PricingContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.input_quantity, 4);
        assert_eq!(context.preferred_time, "21:00");
        assert_eq!(context.workers_requested, 5);
    }
}
