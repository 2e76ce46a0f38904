/// Whether the session is currently producing sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Play/pause state machine.
///
/// Decides transitions; the app applies them to the output stream and the
/// visualizer. Besides explicit toggling, the volume control drives state:
/// reaching zero forces a pause, and leaving zero after such an auto-pause
/// resumes. An explicit toggle always clears the auto-pause latch so the
/// next user action wins.
pub struct PlaybackController {
    state: PlaybackState,
    auto_paused: bool,
    observers: Vec<Box<dyn FnMut(PlaybackState)>>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Paused,
            auto_paused: false,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn subscribe(&mut self, observer: impl FnMut(PlaybackState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn transition(&mut self, next: PlaybackState) -> PlaybackState {
        self.state = next;
        for observer in &mut self.observers {
            observer(next);
        }
        next
    }

    /// Explicit user play/pause intent.
    pub fn toggle_play(&mut self) -> PlaybackState {
        self.auto_paused = false;
        match self.state {
            PlaybackState::Paused => self.transition(PlaybackState::Playing),
            PlaybackState::Playing => self.transition(PlaybackState::Paused),
        }
    }

    /// Feeds a volume change into the state machine. Returns the forced
    /// transition, if any.
    pub fn set_volume_percent(&mut self, percent: f32) -> Option<PlaybackState> {
        if percent <= 0.0 {
            if self.state == PlaybackState::Playing {
                self.auto_paused = true;
                return Some(self.transition(PlaybackState::Paused));
            }
            None
        } else if self.state == PlaybackState::Paused && self.auto_paused {
            self.auto_paused = false;
            Some(self.transition(PlaybackState::Playing))
        } else {
            None
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
