//! Match configuration options.

use core::time::Duration;

/// How quickly the computer opponent acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeedLevel {
    /// One opponent tick every four seconds.
    Easy,
    /// One opponent tick every two seconds.
    #[default]
    Medium,
    /// One opponent tick every second.
    Hard,
}

impl SpeedLevel {
    /// Returns the interval between opponent ticks.
    #[must_use]
    pub const fn tick_interval(self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(4000),
            Self::Medium => Duration::from_millis(2000),
            Self::Hard => Duration::from_millis(1000),
        }
    }
}

/// Configuration options for a match.
///
/// Only timing is configurable; the rules are fixed. The delays are advisory
/// values handed to whatever schedules the opponent.
///
/// ```
/// use core::time::Duration;
/// use speedrs::{MatchOptions, SpeedLevel};
///
/// let options = MatchOptions::default()
///     .with_speed(SpeedLevel::Hard)
///     .with_opponent_draw_delay(Duration::from_millis(150));
/// assert_eq!(options.tick_interval(), Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Opponent speed.
    pub speed: SpeedLevel,
    /// Pause between an opponent play and its follow-up draw.
    pub opponent_draw_delay: Duration,
    /// Pause before the presentation layer should re-check for a finished match.
    pub terminal_check_delay: Duration,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            speed: SpeedLevel::Medium,
            opponent_draw_delay: Duration::from_millis(200),
            terminal_check_delay: Duration::from_millis(300),
        }
    }
}

impl MatchOptions {
    /// Sets the opponent speed.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::{MatchOptions, SpeedLevel};
    ///
    /// let options = MatchOptions::default().with_speed(SpeedLevel::Easy);
    /// assert_eq!(options.speed, SpeedLevel::Easy);
    /// ```
    #[must_use]
    pub const fn with_speed(mut self, speed: SpeedLevel) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the delay before the opponent refills a slot it just played from.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use speedrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_opponent_draw_delay(Duration::ZERO);
    /// assert_eq!(options.opponent_draw_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_opponent_draw_delay(mut self, delay: Duration) -> Self {
        self.opponent_draw_delay = delay;
        self
    }

    /// Sets the delay before re-checking whether the match has finished.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use speedrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_terminal_check_delay(Duration::from_millis(50));
    /// assert_eq!(options.terminal_check_delay, Duration::from_millis(50));
    /// ```
    #[must_use]
    pub const fn with_terminal_check_delay(mut self, delay: Duration) -> Self {
        self.terminal_check_delay = delay;
        self
    }

    /// Returns the interval between opponent ticks for the configured speed.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.speed.tick_interval()
    }
}
