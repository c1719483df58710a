use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::FlightTiming;
use crate::geometry::{FlightVector, Rect, Viewport};
use crate::scheduler::Scheduler;
use crate::style::StylePatch;
use crate::trace;

/// The two logo elements and the window they live in.
pub trait LogoSurface {
    fn static_bounds(&self) -> Rect;
    fn viewport(&self) -> Viewport;
    fn style_static(&self, patch: &StylePatch);
    fn style_flyer(&self, patch: &StylePatch);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    /// Both logos at rest.
    Idle,
    /// Clicked; waiting for the page content to fade before launching.
    Armed,
    /// Flyer visible and travelling toward the center.
    Flying,
    /// Flyer faded out mid-flight. Nothing is pending until settle.
    MidFade,
}

struct FlightState<H> {
    phase: FlightPhase,
    run: u64,
    vector: Option<FlightVector>,
    pending: Option<H>,
}

struct ControllerInner<S, T: Scheduler> {
    surface: S,
    scheduler: T,
    timing: FlightTiming,
    state: RefCell<FlightState<T::Timer>>,
}

/// Drives the header logo through one flight per click.
///
/// At most one timer is in flight. A click in any phase cancels it and starts
/// a new run; a settle cancels it and puts both logos back at rest.
pub struct LogoController<S, T: Scheduler> {
    inner: Rc<ControllerInner<S, T>>,
}

impl<S, T: Scheduler> Clone for LogoController<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S, T> LogoController<S, T>
where
    S: LogoSurface + 'static,
    T: Scheduler + 'static,
{
    pub fn new(surface: S, scheduler: T, timing: FlightTiming) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                surface,
                scheduler,
                timing,
                state: RefCell::new(FlightState {
                    phase: FlightPhase::Idle,
                    run: 0,
                    vector: None,
                    pending: None,
                }),
            }),
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.inner.state.borrow().phase
    }

    pub fn vector(&self) -> Option<FlightVector> {
        self.inner.state.borrow().vector
    }

    pub fn timing(&self) -> &FlightTiming {
        &self.inner.timing
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn on_click(&self) {
        let inner = &self.inner;
        let vector =
            FlightVector::toward_center(inner.surface.static_bounds(), inner.surface.viewport());
        let (run, cancelled) = {
            let mut state = inner.state.borrow_mut();
            let previous = state.phase;
            state.run += 1;
            state.phase = FlightPhase::Armed;
            state.vector = Some(vector);
            if previous != FlightPhase::Idle {
                trace::restarted(state.run, previous);
            }
            (state.run, state.pending.take())
        };
        drop(cancelled);
        trace::phase(run, FlightPhase::Armed);
        let timer = schedule(inner, inner.timing.launch_delay_ms, run, ControllerInner::launch);
        inner.state.borrow_mut().pending = Some(timer);
    }

    pub fn on_settled(&self) {
        let inner = &self.inner;
        let (run, cancelled) = {
            let mut state = inner.state.borrow_mut();
            state.run += 1;
            state.phase = FlightPhase::Idle;
            state.vector = None;
            (state.run, state.pending.take())
        };
        drop(cancelled);
        inner.surface.style_static(&StylePatch::restore_static(&inner.timing));
        inner.surface.style_flyer(&StylePatch::reset_flyer());
        trace::phase(run, FlightPhase::Idle);
    }
}

fn schedule<S, T>(
    inner: &Rc<ControllerInner<S, T>>,
    delay_ms: u32,
    run: u64,
    step: fn(&Rc<ControllerInner<S, T>>, u64),
) -> T::Timer
where
    S: LogoSurface + 'static,
    T: Scheduler + 'static,
{
    let weak: Weak<ControllerInner<S, T>> = Rc::downgrade(inner);
    inner.scheduler.after(
        delay_ms,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                step(&inner, run);
            }
        }),
    )
}

impl<S, T> ControllerInner<S, T>
where
    S: LogoSurface + 'static,
    T: Scheduler + 'static,
{
    /// Advances `run` from `from` to `to`. Fails for a superseded run.
    fn enter(&self, run: u64, from: FlightPhase, to: FlightPhase) -> Option<Option<T::Timer>> {
        let mut state = self.state.borrow_mut();
        if state.run != run || state.phase != from {
            return None;
        }
        state.phase = to;
        Some(state.pending.take())
    }

    fn launch(self: &Rc<Self>, run: u64) {
        let Some(fired) = self.enter(run, FlightPhase::Armed, FlightPhase::Flying) else {
            return;
        };
        drop(fired);
        let Some(vector) = self.state.borrow().vector else {
            return;
        };
        self.surface.style_static(&StylePatch::launch_static());
        self.surface
            .style_flyer(&StylePatch::launch_flyer(&self.timing, vector));
        trace::phase(run, FlightPhase::Flying);
        let timer = schedule(self, self.timing.fade_after_ms, run, Self::fade);
        self.state.borrow_mut().pending = Some(timer);
    }

    fn fade(self: &Rc<Self>, run: u64) {
        let Some(fired) = self.enter(run, FlightPhase::Flying, FlightPhase::MidFade) else {
            return;
        };
        drop(fired);
        self.surface.style_flyer(&StylePatch::fade_flyer());
        trace::phase(run, FlightPhase::MidFade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;
    use crate::style::{Border, LogoStyle, Transform, Transition, TransitionPart};
    use std::cell::Cell;

    struct RecordingSurface {
        bounds: Cell<Rect>,
        viewport: Cell<Viewport>,
        static_logo: RefCell<LogoStyle>,
        flyer: RefCell<LogoStyle>,
        writes: Cell<usize>,
    }

    impl RecordingSurface {
        fn new(bounds: Rect, viewport: Viewport) -> Self {
            Self {
                bounds: Cell::new(bounds),
                viewport: Cell::new(viewport),
                static_logo: RefCell::new(LogoStyle::static_rest()),
                flyer: RefCell::new(LogoStyle::flyer_rest()),
                writes: Cell::new(0),
            }
        }

        fn static_logo(&self) -> LogoStyle {
            self.static_logo.borrow().clone()
        }

        fn flyer(&self) -> LogoStyle {
            self.flyer.borrow().clone()
        }
    }

    impl LogoSurface for RecordingSurface {
        fn static_bounds(&self) -> Rect {
            self.bounds.get()
        }

        fn viewport(&self) -> Viewport {
            self.viewport.get()
        }

        fn style_static(&self, patch: &StylePatch) {
            self.writes.set(self.writes.get() + 1);
            self.static_logo.borrow_mut().apply(patch);
        }

        fn style_flyer(&self, patch: &StylePatch) {
            self.writes.set(self.writes.get() + 1);
            self.flyer.borrow_mut().apply(patch);
        }
    }

    fn setup() -> (LogoController<RecordingSurface, ManualScheduler>, ManualScheduler) {
        let surface = RecordingSurface::new(
            Rect::new(24.0, 12.0, 120.0, 48.0),
            Viewport::new(1280.0, 800.0),
        );
        let scheduler = ManualScheduler::default();
        let controller =
            LogoController::new(surface, scheduler.clone(), FlightTiming::default());
        (controller, scheduler)
    }

    fn expected_vector() -> FlightVector {
        FlightVector::new(640.0 - 84.0, 400.0 - 36.0)
    }

    #[test]
    fn nothing_moves_before_launch_delay() {
        let (controller, clock) = setup();
        controller.on_click();
        assert_eq!(controller.phase(), FlightPhase::Armed);
        assert_eq!(controller.vector(), Some(expected_vector()));
        clock.advance(399);
        assert_eq!(controller.surface().static_logo(), LogoStyle::static_rest());
        assert_eq!(controller.surface().flyer(), LogoStyle::flyer_rest());
        assert_eq!(controller.surface().writes.get(), 0);
    }

    #[test]
    fn launch_swaps_logos_and_starts_flight() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(400);
        assert_eq!(controller.phase(), FlightPhase::Flying);
        assert_eq!(controller.surface().static_logo().opacity, 0.0);

        let flyer = controller.surface().flyer();
        assert_eq!(flyer.opacity, 1.0);
        assert_eq!(
            flyer.transform,
            Transform::Flight {
                vector: expected_vector(),
                scale: 1.2,
            }
        );
        assert_eq!(flyer.transform.to_string(), "translate(556px, 364px) scale(1.2)");
        assert_eq!(flyer.border, Border::drawn());
        assert_eq!(
            flyer.transition,
            Transition::Parts(vec![
                TransitionPart::ease("transform", 1200),
                TransitionPart::ease("opacity", 600),
                TransitionPart::ease("border", 400),
            ])
        );
    }

    #[test]
    fn flyer_fades_one_second_after_click() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(999);
        assert_eq!(controller.surface().flyer().opacity, 1.0);
        clock.advance(1);
        assert_eq!(clock.now_ms(), 1000);
        assert_eq!(controller.phase(), FlightPhase::MidFade);
        let flyer = controller.surface().flyer();
        assert_eq!(flyer.opacity, 0.0);
        assert!(matches!(flyer.transform, Transform::Flight { .. }));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn settle_restores_rest_state() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(1600);
        controller.on_settled();
        assert_eq!(controller.phase(), FlightPhase::Idle);
        assert_eq!(controller.vector(), None);

        let static_logo = controller.surface().static_logo();
        assert_eq!(static_logo.opacity, 1.0);
        assert_eq!(static_logo.transition.to_string(), "opacity 0.4s ease");

        let flyer = controller.surface().flyer();
        assert_eq!(flyer.transition, Transition::None);
        assert_eq!(flyer.opacity, 0.0);
        assert_eq!(flyer.transform, Transform::None);
        assert_eq!(flyer.border, Border::cleared());
    }

    #[test]
    fn settling_twice_matches_settling_once() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(1200);
        controller.on_settled();
        let once = (controller.surface().static_logo(), controller.surface().flyer());
        controller.on_settled();
        let twice = (controller.surface().static_logo(), controller.surface().flyer());
        assert_eq!(once, twice);
        assert_eq!(controller.phase(), FlightPhase::Idle);
    }

    #[test]
    fn settle_while_armed_cancels_launch() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(200);
        controller.on_settled();
        assert_eq!(clock.pending(), 0);
        clock.advance(2000);
        assert_eq!(controller.phase(), FlightPhase::Idle);
        assert_eq!(controller.surface().static_logo().opacity, 1.0);
        assert_eq!(controller.surface().flyer().opacity, 0.0);
    }

    #[test]
    fn settle_mid_flight_cancels_fade() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(500);
        assert_eq!(controller.phase(), FlightPhase::Flying);
        controller.on_settled();
        let writes = controller.surface().writes.get();
        clock.advance(2000);
        assert_eq!(controller.surface().writes.get(), writes);
        assert_eq!(controller.surface().flyer(), LogoStyle::flyer_rest());
    }

    #[test]
    fn second_click_restarts_the_sequence() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(300);
        controller.on_click();
        assert_eq!(clock.pending(), 1);

        clock.advance(399);
        assert_eq!(controller.phase(), FlightPhase::Armed);
        assert_eq!(controller.surface().flyer().opacity, 0.0);

        clock.advance(1);
        assert_eq!(clock.now_ms(), 700);
        assert_eq!(controller.phase(), FlightPhase::Flying);
        clock.advance(600);
        assert_eq!(controller.phase(), FlightPhase::MidFade);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn click_mid_flight_uses_fresh_bounds() {
        let (controller, clock) = setup();
        controller.on_click();
        clock.advance(600);
        controller
            .surface()
            .bounds
            .set(Rect::new(0.0, 0.0, 80.0, 80.0));
        controller.on_click();
        assert_eq!(controller.vector(), Some(FlightVector::new(600.0, 360.0)));
        clock.advance(400);
        assert_eq!(
            controller.surface().flyer().transform.to_string(),
            "translate(600px, 360px) scale(1.2)"
        );
    }

    #[test]
    fn custom_timing_drives_the_schedule() {
        let surface = RecordingSurface::new(Rect::new(0.0, 0.0, 10.0, 10.0), Viewport::new(10.0, 10.0));
        let clock = ManualScheduler::default();
        let timing = FlightTiming {
            launch_delay_ms: 50,
            fade_after_ms: 80,
            scale: 2.0,
            ..FlightTiming::default()
        };
        let controller = LogoController::new(surface, clock.clone(), timing);
        controller.on_click();
        clock.advance(50);
        assert_eq!(controller.phase(), FlightPhase::Flying);
        assert_eq!(
            controller.surface().flyer().transform.to_string(),
            "translate(0px, 0px) scale(2)"
        );
        clock.advance(80);
        assert_eq!(controller.phase(), FlightPhase::MidFade);
    }

    #[test]
    fn dropping_controller_cancels_pending_timer() {
        let (controller, clock) = setup();
        controller.on_click();
        assert_eq!(clock.pending(), 1);
        drop(controller);
        assert_eq!(clock.pending(), 0);
        clock.advance(2000);
    }
}
