//! Diagnostic sink shared by every netfish crate.

/// Tracing target all netfish diagnostics are emitted under.
pub const DIAGNOSTIC_TARGET: &str = "netfish";

/// Fixed tag prepended to every diagnostic message.
pub const DIAGNOSTIC_PREFIX: &str = "Netfish Error";

/// Emits a human-readable diagnostic on the error channel.
///
/// This is purely a side effect. Callers have already decided to fail (or to
/// carry on, for soft conditions like a non-success HTTP status) before
/// calling it.
pub fn render_error(text: impl std::fmt::Display) {
    tracing::error!(target: DIAGNOSTIC_TARGET, "{} | {}", DIAGNOSTIC_PREFIX, text);
}

/// [`render_error`] for an HTTP response, with the status as a field.
pub fn render_status_error(text: impl std::fmt::Display, status: u16) {
    tracing::error!(target: DIAGNOSTIC_TARGET, status, "{} | {}", DIAGNOSTIC_PREFIX, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::capture_diagnostics;

    #[test]
    fn messages_carry_the_prefix() {
        let captured = capture_diagnostics();
        render_error("Item not found");

        assert_eq!(captured.messages(), ["Netfish Error | Item not found"]);
    }

    #[test]
    fn status_is_a_field() {
        let captured = capture_diagnostics();
        render_status_error("Network response error", 503);

        let lines = captured.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Netfish Error | Network response error"), "{lines:?}");
        assert!(lines[0].contains("status=503"), "{lines:?}");
    }

    #[test]
    fn other_targets_are_not_captured() {
        let captured = capture_diagnostics();
        tracing::error!(target: "elsewhere", "unrelated");

        assert!(captured.lines().is_empty());
    }
}
