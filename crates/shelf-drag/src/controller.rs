//! Drag session controller
//!
//! Owns at most one [`DragSession`] and walks it through
//! Armed → Dragging ⇄ Detached → Committing/Cancelling. Every exit path ends
//! in [`DragController::cleanup`], which takes the session out of its slot in
//! one step and is therefore idempotent.

use serde::Serialize;
use shelf_tabs::{CommitExecutor, DetachDirective, Point, TabId, TabSequence};

use crate::config::DragConfig;
use crate::detach::should_detach;
use crate::error::DragError;
use crate::host::{Key, StripHost};
use crate::insertion::{insertion_index, marker_offset};
use crate::render::{emit, RenderCommand, RenderSink};
use crate::session::{DragPhase, DragSession};
use crate::shift::{plan_shifts, DisplacementPlan};
use crate::Result;

/// Result of a finished gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOutcome<P> {
    /// A click, a drag that landed where it started, or no session at all
    None,
    Reordered { from: usize, to: usize },
    /// The tab left the sequence; the host should open a window for it
    Detached(DetachDirective<P>),
    Cancelled,
}

impl<P> DragOutcome<P> {
    pub fn is_none(&self) -> bool {
        matches!(self, DragOutcome::None)
    }
}

pub struct DragController<S, H> {
    config: DragConfig,
    sink: S,
    host: H,
    session: Option<DragSession>,
}

impl<S: RenderSink, H: StripHost> DragController<S, H> {
    pub fn new(config: DragConfig, sink: S, host: H) -> Self {
        Self {
            config,
            sink,
            host,
            session: None,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> DragPhase {
        self.session
            .as_ref()
            .map(|s| s.phase)
            .unwrap_or(DragPhase::Idle)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Arm a new session for `tab_id` at a pointer-down sample.
    ///
    /// A session that is still live is cancelled and cleaned up first.
    pub fn begin<P>(
        &mut self,
        sequence: &TabSequence<P>,
        tab_id: &TabId,
        sample: Point,
    ) -> Result<()> {
        if self.session.is_some() {
            tracing::debug!(tab_id = %tab_id, "Force-cleaning previous drag session");
            self.cancel::<P>();
        }

        let origin = sequence
            .position(tab_id)
            .ok_or_else(|| DragError::UnknownTab(tab_id.to_string()))?;

        self.host.acquire_capture()?;
        self.host.subscribe_session_input();

        let session = DragSession::arm(tab_id.clone(), origin, sample);
        tracing::debug!(
            tab_id = %tab_id,
            from = %DragPhase::Idle,
            to = %DragPhase::Armed,
            origin,
            "Drag phase transition"
        );
        self.session = Some(session);

        Ok(())
    }

    /// Feed a pointer-move sample into the live session.
    pub fn update<P>(&mut self, sequence: &TabSequence<P>, sample: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current = sample;
        let delta = session.displacement();

        match session.phase {
            DragPhase::Armed => {
                let threshold = self.config.drag_threshold;
                if delta.x.abs() <= threshold && delta.y.abs() <= threshold {
                    return;
                }

                let Some(origin) = sequence.position(&session.tab_id) else {
                    tracing::warn!(tab_id = %session.tab_id, "Dragged tab vanished before drag start");
                    self.cancel::<P>();
                    return;
                };

                session.origin_index = origin;
                session.transition_to(DragPhase::Dragging);
                session.ghost_shown = true;
                emit(
                    &mut self.sink,
                    RenderCommand::ShowGhost {
                        tab_id: session.tab_id.clone(),
                        position: sample,
                    },
                );
            }
            DragPhase::Dragging | DragPhase::Detached => {
                emit(&mut self.sink, RenderCommand::MoveGhost { position: sample });
            }
            DragPhase::Idle | DragPhase::Committing | DragPhase::Cancelling => return,
        }

        let ids = sequence.ids();
        let widths: Vec<f64> = ids.iter().map(|id| self.host.tab_width(id)).collect();
        let strip_left = self.host.strip_left();

        let detached = should_detach(delta.y, self.config.detach_threshold);
        let was_detached = session.phase == DragPhase::Detached;

        if detached && !was_detached {
            session.transition_to(DragPhase::Detached);
            session.plan.clear();
            emit(&mut self.sink, RenderCommand::ResetAllOffsets);
            emit(&mut self.sink, RenderCommand::HideInsertionMarker);
            emit(
                &mut self.sink,
                RenderCommand::SetDetachedStyle { detached: true },
            );
            return;
        }

        if detached {
            return;
        }

        if was_detached {
            session.transition_to(DragPhase::Dragging);
            emit(
                &mut self.sink,
                RenderCommand::SetDetachedStyle { detached: false },
            );
            if let Some(last) = session.last_index {
                apply_plan(
                    &mut self.sink,
                    session,
                    &ids,
                    &widths,
                    strip_left,
                    last,
                );
            }
        }

        let candidate = insertion_index(&widths, sample.x - strip_left);
        if session.last_index != Some(candidate) {
            tracing::debug!(
                tab_id = %session.tab_id,
                from = ?session.last_index,
                to = candidate,
                "Insertion index changed"
            );
            session.last_index = Some(candidate);
            apply_plan(
                &mut self.sink,
                session,
                &ids,
                &widths,
                strip_left,
                candidate,
            );
        }
    }

    /// Finish the gesture at the last pointer sample and commit its result.
    pub fn release<P>(&mut self, sequence: &mut TabSequence<P>) -> DragOutcome<P> {
        let Some(session) = self.session.as_mut() else {
            return DragOutcome::None;
        };

        let phase = session.phase;
        if phase == DragPhase::Armed {
            session.transition_to(DragPhase::Committing);
            self.cleanup();
            return DragOutcome::None;
        }
        if !phase.is_dragging() {
            self.cleanup();
            return DragOutcome::None;
        }

        session.transition_to(DragPhase::Committing);

        let outcome = match sequence.position(&session.tab_id) {
            None => {
                tracing::warn!(tab_id = %session.tab_id, "Dragged tab vanished before release");
                DragOutcome::Cancelled
            }
            Some(origin) if phase == DragPhase::Detached => {
                if sequence.len() > 1 {
                    let frame = self.host.container_frame();
                    let release_point = frame.origin + session.current;
                    match CommitExecutor::detach(sequence, &session.tab_id, release_point, frame.size)
                    {
                        Some(directive) => DragOutcome::Detached(directive),
                        None => DragOutcome::Cancelled,
                    }
                } else {
                    tracing::warn!(
                        tab_id = %session.tab_id,
                        origin,
                        "Cannot detach the only tab; treating as cancelled"
                    );
                    DragOutcome::Cancelled
                }
            }
            Some(origin) => {
                let last_slot = sequence.len() - 1;
                let target = session.last_index.unwrap_or(origin).min(last_slot);
                if target == origin {
                    DragOutcome::None
                } else {
                    match CommitExecutor::move_tab(sequence, origin, target) {
                        Ok(()) => DragOutcome::Reordered {
                            from: origin,
                            to: target,
                        },
                        Err(e) => {
                            tracing::error!(error = %e, "Reorder commit failed");
                            DragOutcome::Cancelled
                        }
                    }
                }
            }
        };

        self.settle_visuals();
        self.cleanup();

        outcome
    }

    /// Abandon the gesture. The sequence is never touched and every visual
    /// goes back to rest.
    pub fn cancel<P>(&mut self) -> DragOutcome<P> {
        let Some(session) = self.session.as_mut() else {
            return DragOutcome::None;
        };

        if session.phase != DragPhase::Cancelling {
            session.transition_to(DragPhase::Cancelling);
        }

        self.settle_visuals();
        self.cleanup();

        DragOutcome::Cancelled
    }

    /// Keyboard input while a session is live. Escape cancels a drag.
    pub fn on_key<P>(&mut self, key: Key) -> DragOutcome<P> {
        if key == Key::Escape && self.phase().is_dragging() {
            tracing::debug!("Drag cancelled by key");
            return self.cancel();
        }
        DragOutcome::None
    }

    /// The platform took the pointer capture away from the strip.
    pub fn on_capture_lost<P>(&mut self) -> DragOutcome<P> {
        match self.phase() {
            DragPhase::Dragging | DragPhase::Detached => {
                tracing::debug!("Drag cancelled by capture loss");
                self.cancel()
            }
            DragPhase::Armed => {
                if let Some(session) = self.session.as_mut() {
                    session.transition_to(DragPhase::Cancelling);
                }
                self.cleanup();
                DragOutcome::None
            }
            _ => DragOutcome::None,
        }
    }

    /// Zero every offset and clear the marker, ghost and dimming.
    fn settle_visuals(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.plan.clear();
        emit(&mut self.sink, RenderCommand::ResetAllOffsets);
        emit(&mut self.sink, RenderCommand::HideInsertionMarker);
        emit(
            &mut self.sink,
            RenderCommand::RestoreOpacity {
                tab_id: session.tab_id.clone(),
            },
        );
        if session.ghost_shown {
            emit(&mut self.sink, RenderCommand::HideGhost);
        }
    }

    /// Tear down the live session: release capture and drop session-scoped
    /// listeners. A session only exists while capture is held, so emptying
    /// the slot is what guarantees a single release; a second call finds the
    /// slot empty and does nothing.
    pub fn cleanup(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        self.host.release_capture();
        self.host.unsubscribe_session_input();

        tracing::debug!(
            tab_id = %session.tab_id,
            phase = %session.phase,
            "Drag session cleaned up"
        );
    }
}

/// Recompute the displacement plan for `candidate` and push it to the sink
/// along with the marker position.
fn apply_plan<S: RenderSink>(
    sink: &mut S,
    session: &mut DragSession,
    ids: &[TabId],
    widths: &[f64],
    strip_left: f64,
    candidate: usize,
) {
    let origin = session.origin_index;
    let width = widths.get(origin).copied().unwrap_or(0.0);
    let shifts = plan_shifts(origin, candidate, width, ids.len());
    session.plan = DisplacementPlan::resolve(&shifts, ids);

    for (index, offset) in shifts.iter() {
        if let Some(id) = ids.get(index) {
            emit(
                sink,
                RenderCommand::AnimateTabOffset {
                    tab_id: id.clone(),
                    offset,
                },
            );
        }
    }

    emit(
        sink,
        RenderCommand::ShowInsertionMarker {
            x: strip_left + marker_offset(widths, origin, candidate),
        },
    );
}
