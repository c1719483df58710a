pub const DEFAULT_WRAPPER_ID: &str = "header-logo-wrapper";
pub const DEFAULT_STATIC_ID: &str = "header-logo-static";
pub const DEFAULT_FLYER_ID: &str = "header-logo-fly";
pub const DEFAULT_SETTLE_EVENT: &str = "htmx:afterSettle";

pub const ATTR_LAUNCH_DELAY: &str = "data-flight-launch-delay";
pub const ATTR_FADE_AFTER: &str = "data-flight-fade-after";
pub const ATTR_FLIGHT_DURATION: &str = "data-flight-duration";
pub const ATTR_OPACITY_DURATION: &str = "data-flight-opacity-duration";
pub const ATTR_BORDER_DURATION: &str = "data-flight-border-duration";
pub const ATTR_RESTORE_DURATION: &str = "data-flight-restore-duration";
pub const ATTR_SCALE: &str = "data-flight-scale";

/// Largest delay `setTimeout` takes without wrapping.
pub const MAX_DURATION_MS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{attribute}: {value:?} is not a number")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },
    #[error("{attribute}: {value:?} is out of range")]
    OutOfRange {
        attribute: &'static str,
        value: String,
    },
}

/// Durations of the flight sequence.
///
/// The defaults line up with the page's htmx swap: content fades out over
/// the first 400ms, the flyer takes over, and settle lands roughly 1.6s
/// after the click.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightTiming {
    /// Click to launch.
    pub launch_delay_ms: u32,
    /// Launch to flyer fade-out.
    pub fade_after_ms: u32,
    pub flight_ms: u32,
    pub flyer_opacity_ms: u32,
    pub border_ms: u32,
    /// Static logo fade-in after settle.
    pub restore_ms: u32,
    pub scale: f64,
}

impl Default for FlightTiming {
    fn default() -> Self {
        Self {
            launch_delay_ms: 400,
            fade_after_ms: 600,
            flight_ms: 1200,
            flyer_opacity_ms: 600,
            border_ms: 400,
            restore_ms: 400,
            scale: 1.2,
        }
    }
}

impl FlightTiming {
    /// Applies `data-flight-*` overrides. `lookup` returns the raw attribute
    /// value, or `None` when the attribute is absent.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = [
            (ATTR_LAUNCH_DELAY, &mut self.launch_delay_ms),
            (ATTR_FADE_AFTER, &mut self.fade_after_ms),
            (ATTR_FLIGHT_DURATION, &mut self.flight_ms),
            (ATTR_OPACITY_DURATION, &mut self.flyer_opacity_ms),
            (ATTR_BORDER_DURATION, &mut self.border_ms),
            (ATTR_RESTORE_DURATION, &mut self.restore_ms),
        ];
        for (attribute, slot) in millis {
            if let Some(raw) = lookup(attribute) {
                *slot = parse_millis(attribute, &raw)?;
            }
        }
        if let Some(raw) = lookup(ATTR_SCALE) {
            self.scale = parse_scale(&raw)?;
        }
        Ok(self)
    }
}

fn parse_millis(attribute: &'static str, raw: &str) -> Result<u32, ConfigError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| ConfigError::InvalidNumber {
        attribute,
        value: raw.to_string(),
    })?;
    u32::try_from(value)
        .ok()
        .filter(|millis| *millis <= MAX_DURATION_MS)
        .ok_or_else(|| ConfigError::OutOfRange {
            attribute,
            value: raw.to_string(),
        })
}

fn parse_scale(raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        attribute: ATTR_SCALE,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfRange {
            attribute: ATTR_SCALE,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogoConfig {
    pub wrapper_id: String,
    pub static_id: String,
    pub flyer_id: String,
    /// Dispatched on `document.body` once swapped content has settled.
    pub settle_event: String,
    pub timing: FlightTiming,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            wrapper_id: DEFAULT_WRAPPER_ID.to_string(),
            static_id: DEFAULT_STATIC_ID.to_string(),
            flyer_id: DEFAULT_FLYER_ID.to_string(),
            settle_event: DEFAULT_SETTLE_EVENT.to_string(),
            timing: FlightTiming::default(),
        }
    }
}
