use thiserror::Error;

/// Errors that can occur in the core engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid card string: {0}")]
    InvalidCard(String),
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no available combo after blocker removal")]
    NoAvailableCombo,
    #[error("out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_single_line() {
        let errors = [
            EngineError::InvalidCard("Xx".to_string()),
            EngineError::InvalidRange("ZZ+".to_string()),
            EngineError::NoAvailableCombo,
            EngineError::OutOfRange("cannot draw from empty deck".to_string()),
        ];
        for e in errors {
            let msg = e.to_string();
            assert!(!msg.is_empty());
            assert!(!msg.contains('\n'));
        }
    }
}
