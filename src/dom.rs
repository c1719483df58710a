use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement, Window};

use crate::config::{ConfigError, LogoConfig};
use crate::controller::{LogoController, LogoSurface};
use crate::geometry::{Rect, Viewport};
use crate::scheduler::TimeoutScheduler;
use crate::style::StylePatch;
use crate::trace;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element #{id} not found")]
    MissingElement { id: String },
    #[error("element #{id} is not an HTML element")]
    NotHtmlElement { id: String },
    #[error("invalid flight config: {0}")]
    Config(#[from] ConfigError),
}

pub struct DomSurface {
    window: Window,
    static_logo: HtmlElement,
    flyer: HtmlElement,
}

impl LogoSurface for DomSurface {
    fn static_bounds(&self) -> Rect {
        let rect = self.static_logo.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn viewport(&self) -> Viewport {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width, height)
    }

    fn style_static(&self, patch: &StylePatch) {
        apply_patch(&self.static_logo.style(), patch);
    }

    fn style_flyer(&self, patch: &StylePatch) {
        apply_patch(&self.flyer.style(), patch);
    }
}

fn apply_patch(style: &CssStyleDeclaration, patch: &StylePatch) {
    for (property, value) in patch.declarations() {
        if style.set_property(property, &value).is_err() {
            trace::style_rejected(property, &value);
        }
    }
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement { id: id.to_string() })?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement { id: id.to_string() })
}

pub type DomController = LogoController<DomSurface, TimeoutScheduler>;

/// A mounted logo animation. Dropping it detaches both listeners and
/// cancels any pending step.
pub struct LogoFlight {
    controller: DomController,
    _click: EventListener,
    _settle: EventListener,
}

impl LogoFlight {
    pub fn mount(config: &LogoConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let body = document.body().ok_or(MountError::NoBody)?;
        let wrapper = html_element(&document, &config.wrapper_id)?;
        let static_logo = html_element(&document, &config.static_id)?;
        let flyer = html_element(&document, &config.flyer_id)?;

        let timing = config
            .timing
            .clone()
            .with_overrides(|name| wrapper.get_attribute(name))?;

        let controller = LogoController::new(
            DomSurface {
                window,
                static_logo,
                flyer,
            },
            TimeoutScheduler,
            timing,
        );

        let click = {
            let controller = controller.clone();
            EventListener::new(&wrapper, "click", move |_event| controller.on_click())
        };
        let settle = {
            let controller = controller.clone();
            EventListener::new(&body, config.settle_event.clone(), move |_event| {
                controller.on_settled()
            })
        };
        trace::mounted(&config.wrapper_id);
        Ok(Self {
            controller,
            _click: click,
            _settle: settle,
        })
    }

    pub fn controller(&self) -> &DomController {
        &self.controller
    }

    /// Puts both logos back at rest, then drops the mount. A plain drop
    /// cancels pending steps but leaves a flight's styles on the page.
    pub fn detach(self) {
        self.controller.on_settled();
    }
}
