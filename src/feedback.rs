//! Best-effort feedback accompanying an increment.
//!
//! The controller fires cues through [`Feedback`] and drops any error, so
//! nothing here can affect counter state. [`CueQueue`] is the adapter used
//! by the HTTP host: it queues cues for the page to play and refuses the
//! ones the page reported it cannot play.

use serde::Serialize;

pub const VIBRATE_MS: u32 = 10;
pub const CLICK_TONE: ClickTone = ClickTone {
    frequency_hz: 800.0,
    duration_ms: 100,
    start_gain: 0.3,
    end_gain: 0.01,
};

/// Short sine blip with an exponential decay envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClickTone {
    pub frequency_hz: f64,
    pub duration_ms: u32,
    pub start_gain: f64,
    pub end_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    Pulse,
    Vibrate { duration_ms: u32 },
    Click(ClickTone),
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    #[error("feedback failed: {0}")]
    Failed(String),
}

pub trait Feedback {
    fn pulse(&mut self) -> Result<(), FeedbackError>;
    fn vibrate(&mut self, duration_ms: u32) -> Result<(), FeedbackError>;
    fn click(&mut self, tone: ClickTone) -> Result<(), FeedbackError>;
}

/// What the page said it can do when the session started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub vibration: bool,
    pub audio: bool,
}

#[derive(Debug, Default)]
pub struct CueQueue {
    capabilities: Capabilities,
    pending: Vec<Effect>,
}

impl CueQueue {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            pending: Vec::new(),
        }
    }

    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }
}

impl Feedback for CueQueue {
    fn pulse(&mut self) -> Result<(), FeedbackError> {
        self.pending.push(Effect::Pulse);
        Ok(())
    }

    fn vibrate(&mut self, duration_ms: u32) -> Result<(), FeedbackError> {
        if !self.capabilities.vibration {
            return Err(FeedbackError::Unsupported("vibration"));
        }
        self.pending.push(Effect::Vibrate { duration_ms });
        Ok(())
    }

    fn click(&mut self, tone: ClickTone) -> Result<(), FeedbackError> {
        if !self.capabilities.audio {
            return Err(FeedbackError::Unsupported("audio"));
        }
        self.pending.push(Effect::Click(tone));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_refuses_missing_capabilities() {
        let mut queue = CueQueue::new(Capabilities::default());
        assert!(queue.pulse().is_ok());
        assert!(matches!(
            queue.vibrate(VIBRATE_MS),
            Err(FeedbackError::Unsupported("vibration"))
        ));
        assert!(matches!(
            queue.click(CLICK_TONE),
            Err(FeedbackError::Unsupported("audio"))
        ));
        assert_eq!(queue.drain(), vec![Effect::Pulse]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn effects_serialize_with_kind_tag() {
        let json = serde_json::to_value(vec![
            Effect::Pulse,
            Effect::Vibrate { duration_ms: 10 },
            Effect::Click(CLICK_TONE),
        ])
        .unwrap();

        assert_eq!(json[0], serde_json::json!({ "kind": "pulse" }));
        assert_eq!(json[1], serde_json::json!({ "kind": "vibrate", "duration_ms": 10 }));
        assert_eq!(json[2]["kind"], "click");
        assert_eq!(json[2]["duration_ms"], 100);
        assert_eq!(json[2]["frequency_hz"], 800.0);
    }
}
