use crate::counter::WidgetState;
use crate::feedback::{CLICK_TONE, Feedback, FeedbackError, VIBRATE_MS};
use crate::preferences::{DARK_MODE_KEY, PreferenceStore, SOUND_ENABLED_KEY, read_flag, write_flag};
use tracing::debug;

/// Owns the widget state together with the preference store and feedback
/// ports it writes through.
#[derive(Debug)]
pub struct CounterController<S, F> {
    state: WidgetState,
    store: S,
    feedback: F,
}

impl<S: PreferenceStore, F: Feedback> CounterController<S, F> {
    pub fn initialize(store: S, feedback: F, system_prefers_dark: bool) -> Self {
        let state = WidgetState::initialize(
            read_flag(&store, DARK_MODE_KEY),
            system_prefers_dark,
            read_flag(&store, SOUND_ENABLED_KEY),
        );
        Self {
            state,
            store,
            feedback,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Puts back a state and store captured before an operation whose
    /// side effects could not be completed.
    pub fn restore(&mut self, state: WidgetState, store: S) {
        self.state = state;
        self.store = store;
    }

    pub fn into_parts(self) -> (S, F) {
        (self.store, self.feedback)
    }

    pub fn increment(&mut self) -> WidgetState {
        self.state = self.state.increment();

        let pulsed = self.feedback.pulse();
        best_effort("pulse", pulsed);
        let vibrated = self.feedback.vibrate(VIBRATE_MS);
        best_effort("vibrate", vibrated);
        if self.state.sound_enabled {
            self.play_click();
        }
        self.state
    }

    pub fn reset(&mut self) -> WidgetState {
        self.state = self.state.reset();
        self.state
    }

    pub fn toggle_dark_mode(&mut self) -> WidgetState {
        self.state = self.state.toggle_dark_mode();
        write_flag(&mut self.store, DARK_MODE_KEY, self.state.dark_mode);
        self.state
    }

    pub fn toggle_loop(&mut self) -> WidgetState {
        self.state = self.state.toggle_loop();
        self.state
    }

    pub fn set_loop_max(&mut self, raw: &str) -> WidgetState {
        self.state = self.state.set_loop_max(raw);
        self.state
    }

    /// Flips sound and persists it. Turning sound on plays one click so the
    /// user hears what they enabled.
    pub fn toggle_sound(&mut self) -> WidgetState {
        self.state = self.state.toggle_sound();
        write_flag(&mut self.store, SOUND_ENABLED_KEY, self.state.sound_enabled);
        if self.state.sound_enabled {
            self.play_click();
        }
        self.state
    }

    fn play_click(&mut self) {
        let clicked = self.feedback.click(CLICK_TONE);
        best_effort("click", clicked);
    }
}

fn best_effort(cue: &str, result: Result<(), FeedbackError>) {
    if let Err(err) = result {
        debug!(cue, "feedback suppressed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Capabilities, ClickTone, CueQueue, Effect};
    use crate::preferences::Preferences;

    #[derive(Debug, Default)]
    struct FailingFeedback {
        attempts: usize,
    }

    impl Feedback for FailingFeedback {
        fn pulse(&mut self) -> Result<(), FeedbackError> {
            self.attempts += 1;
            Err(FeedbackError::Failed("animation blocked".into()))
        }

        fn vibrate(&mut self, _duration_ms: u32) -> Result<(), FeedbackError> {
            self.attempts += 1;
            Err(FeedbackError::Unsupported("vibration"))
        }

        fn click(&mut self, _tone: ClickTone) -> Result<(), FeedbackError> {
            self.attempts += 1;
            Err(FeedbackError::Failed("audio context suspended".into()))
        }
    }

    fn all_capabilities() -> CueQueue {
        CueQueue::new(Capabilities {
            vibration: true,
            audio: true,
        })
    }

    fn controller() -> CounterController<Preferences, CueQueue> {
        CounterController::initialize(Preferences::default(), all_capabilities(), false)
    }

    #[test]
    fn initialize_reads_persisted_flags() {
        let mut prefs = Preferences::default();
        write_flag(&mut prefs, DARK_MODE_KEY, false);
        write_flag(&mut prefs, SOUND_ENABLED_KEY, true);

        let controller = CounterController::initialize(prefs, all_capabilities(), true);
        let state = controller.state();
        assert!(!state.dark_mode);
        assert!(state.sound_enabled);
        assert_eq!(state.count, 1);
    }

    #[test]
    fn increment_emits_cues_without_sound() {
        let mut controller = controller();
        assert_eq!(controller.increment().count, 2);
        assert_eq!(
            controller.feedback_mut().drain(),
            vec![Effect::Pulse, Effect::Vibrate { duration_ms: VIBRATE_MS }]
        );
    }

    #[test]
    fn increment_clicks_when_sound_enabled() {
        let mut controller = controller();
        controller.toggle_sound();
        controller.feedback_mut().drain();

        controller.increment();
        let effects = controller.feedback_mut().drain();
        assert_eq!(effects.len(), 3);
        assert_eq!(effects[2], Effect::Click(CLICK_TONE));
    }

    #[test]
    fn failing_feedback_never_blocks_state() {
        let mut controller =
            CounterController::initialize(Preferences::default(), FailingFeedback::default(), false);
        controller.toggle_sound();
        for _ in 0..3 {
            controller.increment();
        }
        assert_eq!(controller.state().count, 4);
        assert!(controller.state().sound_enabled);
        assert_eq!(controller.feedback_mut().attempts, 1 + 3 * 3);
    }

    #[test]
    fn reset_and_loop_emit_no_cues() {
        let mut controller = controller();
        controller.increment();
        controller.feedback_mut().drain();

        assert_eq!(controller.reset().count, 1);
        assert!(controller.toggle_loop().loop_enabled);
        assert_eq!(controller.set_loop_max("3").loop_max, 3);
        assert!(controller.feedback_mut().drain().is_empty());
    }

    #[test]
    fn toggle_dark_mode_writes_through_and_survives_reinit() {
        let mut controller = controller();
        let toggled = controller.toggle_dark_mode();
        assert!(toggled.dark_mode);
        assert_eq!(controller.store().get(DARK_MODE_KEY).as_deref(), Some("true"));

        let (prefs, feedback) = controller.into_parts();
        let reloaded = CounterController::initialize(prefs, feedback, false);
        assert_eq!(reloaded.state().dark_mode, toggled.dark_mode);
    }

    #[test]
    fn toggle_sound_confirms_only_when_turned_on() {
        let mut controller = controller();
        controller.toggle_sound();
        assert_eq!(controller.store().get(SOUND_ENABLED_KEY).as_deref(), Some("true"));
        assert_eq!(controller.feedback_mut().drain(), vec![Effect::Click(CLICK_TONE)]);

        controller.toggle_sound();
        assert_eq!(controller.store().get(SOUND_ENABLED_KEY).as_deref(), Some("false"));
        assert!(controller.feedback_mut().drain().is_empty());
    }

    #[test]
    fn looping_sequence_wraps() {
        let mut controller = controller();
        controller.toggle_loop();
        controller.set_loop_max("3");
        let counts: Vec<u64> = (0..5).map(|_| controller.increment().count).collect();
        assert_eq!(counts, vec![2, 3, 1, 2, 3]);
    }
}
