use std::fmt;

use crate::config::FlightTiming;
use crate::geometry::FlightVector;

pub const FLYER_BORDER_COLOR: &str = "#4a90b8";
pub const FLYER_BORDER_WIDTH_PX: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionPart {
    pub property: &'static str,
    pub duration_ms: u32,
}

impl TransitionPart {
    pub fn ease(property: &'static str, duration_ms: u32) -> Self {
        Self {
            property,
            duration_ms,
        }
    }
}

impl fmt::Display for TransitionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = f64::from(self.duration_ms) / 1000.0;
        write!(f, "{} {}s ease", self.property, seconds)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Transition {
    #[default]
    None,
    Parts(Vec<TransitionPart>),
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => f.write_str("none"),
            Transition::Parts(parts) => {
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Transform {
    #[default]
    None,
    Flight { vector: FlightVector, scale: f64 },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::None => f.write_str("none"),
            Transform::Flight { vector, scale } => write!(
                f,
                "translate({}px, {}px) scale({})",
                vector.dx, vector.dy, scale
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width_px: f64,
    pub color: &'static str,
}

impl Border {
    pub fn drawn() -> Self {
        Self {
            width_px: FLYER_BORDER_WIDTH_PX,
            color: FLYER_BORDER_COLOR,
        }
    }

    pub fn cleared() -> Self {
        Self {
            width_px: 0.0,
            color: FLYER_BORDER_COLOR,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width_px == 0.0 {
            write!(f, "0 solid {}", self.color)
        } else {
            write!(f, "{}px solid {}", self.width_px, self.color)
        }
    }
}

/// A partial style update. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    pub transition: Option<Transition>,
    pub opacity: Option<f64>,
    pub transform: Option<Transform>,
    pub border: Option<Border>,
}

impl StylePatch {
    pub fn opacity(value: f64) -> Self {
        Self {
            opacity: Some(value),
            ..Self::default()
        }
    }

    /// Static logo at launch: hidden so the flyer takes its place.
    pub fn launch_static() -> Self {
        Self::opacity(0.0)
    }

    pub fn launch_flyer(timing: &FlightTiming, vector: FlightVector) -> Self {
        Self {
            transition: Some(Transition::Parts(vec![
                TransitionPart::ease("transform", timing.flight_ms),
                TransitionPart::ease("opacity", timing.flyer_opacity_ms),
                TransitionPart::ease("border", timing.border_ms),
            ])),
            opacity: Some(1.0),
            transform: Some(Transform::Flight {
                vector,
                scale: timing.scale,
            }),
            border: Some(Border::drawn()),
        }
    }

    pub fn fade_flyer() -> Self {
        Self::opacity(0.0)
    }

    pub fn restore_static(timing: &FlightTiming) -> Self {
        Self {
            transition: Some(Transition::Parts(vec![TransitionPart::ease(
                "opacity",
                timing.restore_ms,
            )])),
            opacity: Some(1.0),
            ..Self::default()
        }
    }

    /// Flyer back to rest with no transition, so the reset is instant.
    pub fn reset_flyer() -> Self {
        Self {
            transition: Some(Transition::None),
            opacity: Some(0.0),
            transform: Some(Transform::None),
            border: Some(Border::cleared()),
        }
    }

    /// CSS declarations in the order they must be written: the transition
    /// goes first so it governs the property changes that follow.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(4);
        if let Some(transition) = &self.transition {
            out.push(("transition", transition.to_string()));
        }
        if let Some(border) = &self.border {
            out.push(("border", border.to_string()));
        }
        if let Some(opacity) = self.opacity {
            out.push(("opacity", opacity.to_string()));
        }
        if let Some(transform) = &self.transform {
            out.push(("transform", transform.to_string()));
        }
        out
    }
}

/// Resolved value of the animated properties of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoStyle {
    pub transition: Transition,
    pub opacity: f64,
    pub transform: Transform,
    pub border: Border,
}

impl LogoStyle {
    pub fn static_rest() -> Self {
        Self {
            transition: Transition::None,
            opacity: 1.0,
            transform: Transform::None,
            border: Border::cleared(),
        }
    }

    pub fn flyer_rest() -> Self {
        Self {
            opacity: 0.0,
            ..Self::static_rest()
        }
    }

    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(transition) = &patch.transition {
            self.transition = transition.clone();
        }
        if let Some(border) = patch.border {
            self.border = border;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
        if let Some(transform) = patch.transform {
            self.transform = transform;
        }
    }
}
