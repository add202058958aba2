//! Runtime configuration of the platform layer.

/// Diagnostic verbosity of the platform layer.
///
/// The levels follow the ESP-IDF `esp_log_level_t` ordering: a message is
/// emitted when its level is at or below the level in effect.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    /// No output
    None = 0,
    /// Unrecoverable conditions only
    Error = 1,
    /// Conditions the caller should know about, such as legacy wire behavior
    Warn = 2,
    /// Configuration changes
    #[default]
    Info = 3,
    /// Every register access with its index and value
    Debug = 4,
    /// Raw bus traffic
    Verbose = 5,
}

impl LogLevel {
    /// Returns `true` if a message at `level` passes this threshold.
    #[must_use]
    pub fn enables(self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}

impl From<u8> for LogLevel {
    /// Values above `Verbose` saturate to `Verbose`.
    fn from(value: u8) -> Self {
        match value {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Verbose,
        }
    }
}

/// How a double-word register write is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DWordWrite {
    /// Send the 2 index bytes followed by all 4 data bytes.
    #[default]
    Full,
    /// Send only the first 4 bytes of the frame: the index and the two
    /// high-order data bytes. Matches the ESP-IDF platform port that shipped
    /// with this truncation, for deployments that depend on it.
    LegacyTruncated,
}

/// Platform configuration, passed to [`Platform::new`](crate::Platform::new).
///
/// # Examples
///
/// ```rust
/// use vl53l1_platform::{Config, DWordWrite, LogLevel};
///
/// let config = Config::default()
///     .with_log_level(LogLevel::Debug)
///     .with_tick_period_ms(10)
///     .with_dword_write(DWordWrite::LegacyTruncated);
///
/// assert_eq!(config.tick_period_ms, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Initial logging level
    pub log_level: LogLevel,
    /// Scheduler tick period; waits are rounded up to a multiple of it
    pub tick_period_ms: u32,
    /// Wire behavior of double-word writes
    pub dword_write: DWordWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            tick_period_ms: 1,
            dword_write: DWordWrite::Full,
        }
    }
}

impl Config {
    /// Sets the initial logging level.
    #[must_use]
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Sets the scheduler tick period. A period of zero is treated as 1 ms.
    #[must_use]
    pub fn with_tick_period_ms(mut self, tick_period_ms: u32) -> Self {
        self.tick_period_ms = tick_period_ms.max(1);
        self
    }

    /// Selects the double-word write behavior.
    #[must_use]
    pub fn with_dword_write(mut self, dword_write: DWordWrite) -> Self {
        self.dword_write = dword_write;
        self
    }

    /// Rounds `ms` up to a whole number of ticks, in milliseconds.
    pub(crate) fn round_to_ticks(self, ms: u32) -> u32 {
        let tick = self.tick_period_ms.max(1);
        ms.div_ceil(tick).saturating_mul(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_threshold() {
        assert!(LogLevel::Info.enables(LogLevel::Error));
        assert!(LogLevel::Info.enables(LogLevel::Info));
        assert!(!LogLevel::Info.enables(LogLevel::Debug));
        assert!(!LogLevel::None.enables(LogLevel::Error));
        assert!(!LogLevel::Verbose.enables(LogLevel::None));
    }

    #[test]
    fn level_from_raw_saturates() {
        assert_eq!(LogLevel::from(4), LogLevel::Debug);
        assert_eq!(LogLevel::from(200), LogLevel::Verbose);
        assert_eq!(u8::from(LogLevel::Warn), 2);
    }

    #[test]
    fn wait_rounds_up_to_ticks() {
        let config = Config::default().with_tick_period_ms(10);
        assert_eq!(config.round_to_ticks(0), 0);
        assert_eq!(config.round_to_ticks(1), 10);
        assert_eq!(config.round_to_ticks(50), 50);
        assert_eq!(config.round_to_ticks(51), 60);
        assert_eq!(Config::default().round_to_ticks(7), 7);
    }

    #[test]
    fn zero_tick_period_is_clamped() {
        assert_eq!(Config::default().with_tick_period_ms(0).tick_period_ms, 1);
    }
}
