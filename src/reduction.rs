//! Reduction traces.
//!
//! Contains the `ReductionTrace` type, which records how a number was
//! reduced so a result can be explained step by step.

use serde::{Deserialize, Serialize};

/// A reduced value with every intermediate digit sum.
///
/// This is read-only once produced and safe to serialize alongside a
/// result.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::ReductionTrace;
///
/// let mut trace = ReductionTrace::new(1985);
/// trace.push_step(23);
/// trace.push_step(5);
///
/// assert_eq!(trace.input, 1985);
/// assert_eq!(trace.value, 5);
/// assert_eq!(trace.steps, vec![1985, 23, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionTrace {
    /// The number that was reduced.
    pub input: u32,

    /// The final value.
    pub value: u32,

    /// Every value seen, starting with the input and ending with the
    /// final value.
    pub steps: Vec<u32>,

    /// Whether the input was a special number and left untouched.
    pub preserved: bool,
}

impl ReductionTrace {
    /// Start a trace at `input`.
    pub fn new(input: u32) -> Self {
        Self {
            input,
            value: input,
            steps: vec![input],
            preserved: false,
        }
    }

    /// Record the next digit sum.
    pub fn push_step(&mut self, value: u32) {
        self.steps.push(value);
        self.value = value;
    }

    /// Mark the input as exempt from reduction.
    pub fn preserve(&mut self) {
        self.preserved = true;
    }

    /// Number of digit-sum passes applied.
    pub fn passes(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_creation() {
        let trace = ReductionTrace::new(7);
        assert_eq!(trace.value, 7);
        assert_eq!(trace.passes(), 0);
        assert!(!trace.preserved);
    }

    #[test]
    fn test_trace_steps() {
        let mut trace = ReductionTrace::new(99);
        trace.push_step(18);
        trace.push_step(9);
        assert_eq!(trace.passes(), 2);
        assert_eq!(trace.steps[1], 18);
        assert_eq!(trace.value, 9);
    }

    #[test]
    fn test_trace_serializes_camel_case() {
        let trace = ReductionTrace::new(11);
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["input"], 11);
        assert_eq!(json["preserved"], false);
    }

    #[test]
    fn test_passes_on_deserialized_trace_without_steps() {
        let trace: ReductionTrace =
            serde_json::from_str(r#"{"input":1,"value":1,"steps":[],"preserved":false}"#)
                .unwrap();
        assert_eq!(trace.passes(), 0);
    }
}
