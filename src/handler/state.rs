use crate::{Error, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    Start,
    Validating,
    Invoking,
    Completing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerEvent {
    Begin,
    InputValid,
    InputInvalid,
    GenerationSucceeded,
    GenerationFailed,
    EnvelopeBuilt,
}

/// Result of a job, carried into envelope construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(String),
    ValidationFailed(String),
    DownstreamFailed(String),
}

/// Linear state machine for one job. Every path ends in exactly one
/// `Completing -> Done` step.
#[derive(Debug)]
pub struct HandlerStateMachine {
    state: HandlerState,
    request_id: String,
}

impl HandlerStateMachine {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            state: HandlerState::Start,
            request_id: request_id.into(),
        }
    }

    pub fn current_state(&self) -> HandlerState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state == HandlerState::Done
    }

    pub fn transition(&mut self, event: HandlerEvent) -> Result<HandlerState> {
        let new_state = match (self.state, event) {
            (HandlerState::Start, HandlerEvent::Begin) => HandlerState::Validating,
            (HandlerState::Validating, HandlerEvent::InputValid) => HandlerState::Invoking,
            (HandlerState::Validating, HandlerEvent::InputInvalid) => HandlerState::Completing,
            (HandlerState::Invoking, HandlerEvent::GenerationSucceeded)
            | (HandlerState::Invoking, HandlerEvent::GenerationFailed) => HandlerState::Completing,
            (HandlerState::Completing, HandlerEvent::EnvelopeBuilt) => HandlerState::Done,
            (current, event) => {
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", current),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "[{}] {:?} -> {:?} ({:?})",
            self.request_id, self.state, new_state, event
        );
        self.state = new_state;
        Ok(new_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_path() {
        let mut fsm = HandlerStateMachine::new("req-1");
        assert_eq!(fsm.current_state(), HandlerState::Start);

        fsm.transition(HandlerEvent::Begin).unwrap();
        fsm.transition(HandlerEvent::InputValid).unwrap();
        assert_eq!(fsm.current_state(), HandlerState::Invoking);
        fsm.transition(HandlerEvent::GenerationSucceeded).unwrap();
        assert_eq!(fsm.current_state(), HandlerState::Completing);
        fsm.transition(HandlerEvent::EnvelopeBuilt).unwrap();
        assert!(fsm.is_terminal());
    }

    #[test]
    fn test_validation_failure_skips_invoking() {
        let mut fsm = HandlerStateMachine::new("req-2");
        fsm.transition(HandlerEvent::Begin).unwrap();
        assert_eq!(
            fsm.transition(HandlerEvent::InputInvalid).unwrap(),
            HandlerState::Completing
        );
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let mut fsm = HandlerStateMachine::new("req-3");
        let err = fsm.transition(HandlerEvent::GenerationSucceeded).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
        assert_eq!(fsm.current_state(), HandlerState::Start);

        fsm.transition(HandlerEvent::Begin).unwrap();
        fsm.transition(HandlerEvent::InputInvalid).unwrap();
        fsm.transition(HandlerEvent::EnvelopeBuilt).unwrap();
        assert!(fsm.transition(HandlerEvent::Begin).is_err());
    }
}
