//! Tab strip
//!
//! A window's strip owns its tab sequence together with the controller (and
//! therefore the live session). There is no shared or global controller:
//! every strip drives its own gestures.

use shelf_tabs::{Point, Tab, TabId, TabSequence};

use crate::config::DragConfig;
use crate::controller::{DragController, DragOutcome};
use crate::host::{Key, StripHost};
use crate::render::RenderSink;
use crate::session::DragPhase;
use crate::shift::DisplacementPlan;
use crate::Result;

pub struct TabStrip<P, S, H> {
    sequence: TabSequence<P>,
    controller: DragController<S, H>,
}

impl<P, S: RenderSink, H: StripHost> TabStrip<P, S, H> {
    pub fn new(sequence: TabSequence<P>, config: DragConfig, sink: S, host: H) -> Self {
        Self {
            sequence,
            controller: DragController::new(config, sink, host),
        }
    }

    pub fn sequence(&self) -> &TabSequence<P> {
        &self.sequence
    }

    /// Pointer-down on a tab
    pub fn begin(&mut self, tab_id: &TabId, sample: Point) -> Result<()> {
        self.controller.begin(&self.sequence, tab_id, sample)
    }

    /// Pointer-move while the button is held
    pub fn update(&mut self, sample: Point) {
        self.controller.update(&self.sequence, sample);
    }

    /// Pointer-up
    pub fn release(&mut self) -> DragOutcome<P> {
        self.controller.release(&mut self.sequence)
    }

    pub fn cancel(&mut self) -> DragOutcome<P> {
        self.controller.cancel()
    }

    pub fn on_key(&mut self, key: Key) -> DragOutcome<P> {
        self.controller.on_key(key)
    }

    pub fn on_capture_lost(&mut self) -> DragOutcome<P> {
        self.controller.on_capture_lost()
    }

    pub fn phase(&self) -> DragPhase {
        self.controller.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase().is_dragging()
    }

    /// Offsets currently applied to the tabs, if a session is live
    pub fn current_plan(&self) -> Option<&DisplacementPlan> {
        self.controller.session().map(|s| s.plan())
    }

    /// Append a tab. Any live gesture is cancelled first so that its origin
    /// index stays valid.
    pub fn push(&mut self, tab: Tab<P>) -> shelf_tabs::Result<()> {
        self.controller.cancel::<P>();
        self.sequence.push(tab)
    }

    pub fn insert(&mut self, index: usize, tab: Tab<P>) -> shelf_tabs::Result<usize> {
        self.controller.cancel::<P>();
        self.sequence.insert(index, tab)
    }

    /// Close a tab; the last tab of a strip cannot be closed.
    pub fn close(&mut self, tab_id: &TabId) -> shelf_tabs::Result<Tab<P>> {
        self.controller.cancel::<P>();
        self.sequence.close(tab_id)
    }

    pub fn sink(&self) -> &S {
        self.controller.sink()
    }

    pub fn host(&self) -> &H {
        self.controller.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.controller.host_mut()
    }
}
