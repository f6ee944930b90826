//! Volume state for the transport boundary

/// Volume level with mute state
///
/// Levels live on the transport's 0.0..=1.0 scale and are clamped on the
/// way in. Muting preserves the level so unmute restores it.
#[derive(Debug, Clone)]
pub struct Volume {
    level: f32,
    muted: bool,
}

impl Volume {
    /// Create a volume at the given level
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Set the level (clamped to 0.0..=1.0)
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
    }

    /// Get the stored level, ignoring mute
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Mute, preserving the level
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute, restoring the preserved level
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The level the transport should play at
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.5)
    }
}
