//! Header logo flight: on click the static logo hands off to a flyer that
//! travels to the viewport center, and both snap back to rest once htmx has
//! settled the swapped content.

pub mod config;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod geometry;
pub mod scheduler;
pub mod style;
mod trace;

pub use config::{ConfigError, FlightTiming, LogoConfig};
pub use controller::{FlightPhase, LogoController, LogoSurface};
#[cfg(target_arch = "wasm32")]
pub use dom::{DomSurface, LogoFlight, MountError};
pub use geometry::{FlightVector, Rect, Viewport};
pub use scheduler::{Scheduler, TimeoutScheduler};
pub use style::{Border, LogoStyle, StylePatch, Transform, Transition, TransitionPart};

#[cfg(target_arch = "wasm32")]
pub use exports::{mount_logo_flight, unmount_logo_flight};

#[cfg(target_arch = "wasm32")]
mod exports {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::config::LogoConfig;
    use crate::dom::{LogoFlight, MountError};
    use crate::trace;

    thread_local! {
        static MOUNTED: RefCell<Option<LogoFlight>> = RefCell::new(None);
    }

    fn remount() -> Result<(), MountError> {
        let flight = LogoFlight::mount(&LogoConfig::default())?;
        let previous = MOUNTED.with(|slot| slot.borrow_mut().replace(flight));
        if let Some(previous) = previous {
            previous.detach();
        }
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        if let Err(err) = remount() {
            trace::mount_failed(&err.to_string());
        }
    }

    /// Mounts against the default element ids, replacing any earlier mount.
    #[wasm_bindgen(js_name = mountLogoFlight)]
    pub fn mount_logo_flight() -> Result<(), JsValue> {
        remount().map_err(|err| js_sys::Error::new(&err.to_string()).into())
    }

    #[wasm_bindgen(js_name = unmountLogoFlight)]
    pub fn unmount_logo_flight() {
        let previous = MOUNTED.with(|slot| slot.borrow_mut().take());
        if let Some(previous) = previous {
            previous.detach();
        }
    }
}
