//! Counter state and its transitions.
//!
//! Every transition takes the state by value and returns the next one, so
//! the rules can be checked without any environment attached. Side effects
//! live in [`crate::controller`].

pub const INITIAL_COUNT: u64 = 1;
pub const DEFAULT_LOOP_MAX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    pub count: u64,
    pub loop_enabled: bool,
    pub loop_max: u64,
    pub dark_mode: bool,
    pub sound_enabled: bool,
}

impl WidgetState {
    /// Builds the load-time state. A persisted dark-mode flag wins over the
    /// system color scheme; sound stays off unless it was persisted on.
    pub fn initialize(
        persisted_dark_mode: Option<bool>,
        system_prefers_dark: bool,
        persisted_sound_enabled: Option<bool>,
    ) -> Self {
        Self {
            count: INITIAL_COUNT,
            loop_enabled: false,
            loop_max: DEFAULT_LOOP_MAX,
            dark_mode: persisted_dark_mode.unwrap_or(system_prefers_dark),
            sound_enabled: persisted_sound_enabled.unwrap_or(false),
        }
    }

    pub fn increment(self) -> Self {
        let count = if self.loop_enabled {
            if self.count >= self.loop_max {
                INITIAL_COUNT
            } else {
                self.count + 1
            }
        } else {
            self.count.saturating_add(1)
        };
        Self { count, ..self }
    }

    pub fn reset(self) -> Self {
        Self {
            count: INITIAL_COUNT,
            ..self
        }
    }

    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    /// Flips loop mode. Turning it on with a count already past the max
    /// restarts the count so it stays inside `[1, loop_max]`.
    pub fn toggle_loop(self) -> Self {
        let loop_enabled = !self.loop_enabled;
        let count = if loop_enabled && self.count > self.loop_max {
            INITIAL_COUNT
        } else {
            self.count
        };
        Self {
            count,
            loop_enabled,
            ..self
        }
    }

    /// Applies raw loop-max field text. Text that does not start with a
    /// positive integer leaves the state untouched, so partial input typed
    /// mid-edit is harmless.
    pub fn set_loop_max(self, raw: &str) -> Self {
        let Some(loop_max) = parse_loop_max(raw) else {
            return self;
        };
        let count = if self.count > loop_max {
            INITIAL_COUNT
        } else {
            self.count
        };
        Self {
            count,
            loop_max,
            ..self
        }
    }

    pub fn toggle_sound(self) -> Self {
        Self {
            sound_enabled: !self.sound_enabled,
            ..self
        }
    }
}

/// Lenient leading-integer parse: skips leading whitespace, accepts one
/// sign, then takes the run of ASCII digits and ignores whatever follows.
/// Returns `None` for no digits or non-positive values; values past
/// `u64::MAX` saturate.
pub fn parse_loop_max(raw: &str) -> Option<u64> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // A run of digits only fails to parse by overflowing.
    let value: u64 = rest[..digits_len].parse().unwrap_or(u64::MAX);
    if negative || value == 0 {
        return None;
    }
    Some(value)
}
