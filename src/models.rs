use crate::counter::WidgetState;
use crate::feedback::{Capabilities, Effect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionRequest {
    pub system_prefers_dark: bool,
    pub supports_vibration: bool,
    pub supports_audio: bool,
}

impl SessionRequest {
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            vibration: self.supports_vibration,
            audio: self.supports_audio,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoopMaxRequest {
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetView {
    pub count: u64,
    pub loop_enabled: bool,
    pub loop_max: u64,
    pub dark_mode: bool,
    pub sound_enabled: bool,
}

impl From<WidgetState> for WidgetView {
    fn from(state: WidgetState) -> Self {
        Self {
            count: state.count,
            loop_enabled: state.loop_enabled,
            loop_max: state.loop_max,
            dark_mode: state.dark_mode,
            sound_enabled: state.sound_enabled,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WidgetResponse {
    pub state: WidgetView,
    pub effects: Vec<Effect>,
}
