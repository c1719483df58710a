use crate::controller::FlightPhase;

pub(crate) fn phase(run: u64, phase: FlightPhase) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::debug!("logo flight", format!("run {run}: {phase:?}"));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (run, phase);
    }
}

pub(crate) fn restarted(run: u64, from: FlightPhase) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::log!("logo flight: click restarted run", run as f64, format!("{from:?}"));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (run, from);
    }
}

#[allow(dead_code)]
pub(crate) fn style_rejected(property: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!("logo flight: style rejected", property, value);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (property, value);
    }
}

#[allow(dead_code)]
pub(crate) fn mounted(wrapper_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::log!("logo flight: mounted", wrapper_id);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = wrapper_id;
    }
}

#[allow(dead_code)]
pub(crate) fn mount_failed(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!("logo flight: not mounted", message);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
