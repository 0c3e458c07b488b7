//! Test doubles for the renderer and the host window

use std::collections::HashMap;

use shelf_tabs::{Frame, Point, Size, Tab, TabId, TabSequence};

use crate::error::{CaptureError, RenderError};
use crate::host::StripHost;
use crate::render::{RenderCommand, RenderSink};

pub(crate) fn sequence(names: &[&str]) -> TabSequence<()> {
    TabSequence::from_tabs(names.iter().map(|name| Tab::with_id(*name, ())).collect()).unwrap()
}

pub(crate) fn ids<P>(sequence: &TabSequence<P>) -> Vec<String> {
    sequence.iter().map(|t| t.id.to_string()).collect()
}

/// Records every command; optionally fails each submission after recording it.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub commands: Vec<RenderCommand>,
    pub failing: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            commands: Vec::new(),
            failing: true,
        }
    }

    pub fn count(&self, predicate: impl Fn(&RenderCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Last offset animated for each tab
    pub fn final_offsets(&self) -> HashMap<TabId, f64> {
        let mut offsets = HashMap::new();
        for command in &self.commands {
            match command {
                RenderCommand::AnimateTabOffset { tab_id, offset } => {
                    offsets.insert(tab_id.clone(), *offset);
                }
                RenderCommand::ResetAllOffsets => {
                    for offset in offsets.values_mut() {
                        *offset = 0.0;
                    }
                }
                _ => {}
            }
        }
        offsets
    }

    pub fn last_marker(&self) -> Option<f64> {
        let mut marker = None;
        for command in &self.commands {
            match command {
                RenderCommand::ShowInsertionMarker { x } => marker = Some(*x),
                RenderCommand::HideInsertionMarker => marker = None,
                _ => {}
            }
        }
        marker
    }
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, command: RenderCommand) -> Result<(), RenderError> {
        self.commands.push(command);
        if self.failing {
            return Err(RenderError::Rejected("scripted failure".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct FakeHost {
    pub width: f64,
    pub widths: HashMap<TabId, f64>,
    pub strip_left: f64,
    pub frame: Frame,
    pub acquired: usize,
    pub released: usize,
    pub subscribed: bool,
    pub deny_capture: bool,
}

impl FakeHost {
    pub fn uniform(width: f64) -> Self {
        Self {
            width,
            widths: HashMap::new(),
            strip_left: 0.0,
            frame: Frame::new(Point::new(100.0, 200.0), Size::new(800.0, 600.0)),
            acquired: 0,
            released: 0,
            subscribed: false,
            deny_capture: false,
        }
    }

    pub fn holds_capture(&self) -> bool {
        self.acquired > self.released
    }
}

impl StripHost for FakeHost {
    fn tab_width(&self, tab_id: &TabId) -> f64 {
        self.widths.get(tab_id).copied().unwrap_or(self.width)
    }

    fn strip_left(&self) -> f64 {
        self.strip_left
    }

    fn container_frame(&self) -> Frame {
        self.frame
    }

    fn acquire_capture(&mut self) -> Result<(), CaptureError> {
        if self.deny_capture {
            return Err(CaptureError::Busy);
        }
        self.acquired += 1;
        Ok(())
    }

    fn release_capture(&mut self) {
        self.released += 1;
    }

    fn subscribe_session_input(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe_session_input(&mut self) {
        self.subscribed = false;
    }
}
