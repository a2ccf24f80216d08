//! How Fatal-class calls and sink failures end the calling flow

/// Payload used when the sink itself cannot be written
pub const SINK_FAILURE_MESSAGE: &str = "failed to write log line to sink";

/// Abnormal termination strategy
///
/// `Panic` unwinds with the message as a `String` payload, so an enclosing
/// `catch_unwind` can intercept it. `Exit` ends the process immediately
/// with the given status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    #[default]
    Panic,
    Exit(i32),
}

impl Termination {
    /// End the calling flow. Never returns.
    pub fn terminate(self, message: String) -> ! {
        match self {
            Termination::Panic => std::panic::panic_any(message),
            Termination::Exit(code) => std::process::exit(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;

    #[test]
    fn test_panic_carries_message() {
        let payload = catch_unwind(|| Termination::Panic.terminate("boom".to_string()))
            .expect_err("terminate must not return");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom"));
    }

    #[test]
    fn test_default_is_panic() {
        assert_eq!(Termination::default(), Termination::Panic);
    }
}
