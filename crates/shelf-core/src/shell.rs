//! Shell window registry
//!
//! Owns every open window and routes pointer gestures to the strip of the
//! window they happen in. A detach outcome from one strip becomes a new
//! window holding exactly the detached tab.

use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;

use shelf_drag::{DragOutcome, Key, TabStrip};
use shelf_tabs::{Frame, Point, Tab, TabId, TabSequence};

use crate::config::ShellConfig;
use crate::error::CoreError;
use crate::folder::FolderTab;
use crate::window::{ShellWindow, WindowBackend, WindowId};
use crate::Result;

/// What a finished gesture did to the shell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShellEvent {
    None,
    Reordered {
        window: WindowId,
        from: usize,
        to: usize,
    },
    Detached {
        source: WindowId,
        window: WindowId,
        tab_id: TabId,
    },
    Cancelled,
}

pub struct Shell<B: WindowBackend> {
    config: ShellConfig,
    backend: B,
    /// Open windows, in opening order
    windows: Vec<ShellWindow<B::Sink, B::Host>>,
    focused: Option<WindowId>,
}

impl<B: WindowBackend> Shell<B> {
    pub fn new(config: ShellConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            windows: Vec::new(),
            focused: None,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Open a window with a single tab showing the configured start folder
    pub fn open_default_window(&mut self) -> Result<WindowId> {
        let first = Tab::new(FolderTab::new(self.config.start_directory.clone()));
        let frame = Frame::new(Point::default(), self.config.default_window_size);
        self.open_window(frame, first)
    }

    /// Open a window at `frame` holding `first` as its only tab
    pub fn open_window(&mut self, frame: Frame, first: Tab<FolderTab>) -> Result<WindowId> {
        let frame = Frame::new(frame.origin, self.config.fit_window_size(frame.size));
        let id = WindowId::new();
        let (sink, host) = self.backend.open_window(&id, frame)?;
        self.install_window(id.clone(), frame, sink, host, first);
        Ok(id)
    }

    fn install_window(
        &mut self,
        id: WindowId,
        frame: Frame,
        sink: B::Sink,
        host: B::Host,
        first: Tab<FolderTab>,
    ) {
        let strip = TabStrip::new(TabSequence::new(first), self.config.drag, sink, host);

        tracing::info!(
            window_id = %id,
            x = frame.origin.x,
            y = frame.origin.y,
            width = frame.size.width,
            height = frame.size.height,
            "Opened window"
        );

        self.windows.push(ShellWindow {
            id: id.clone(),
            frame,
            created_at: Utc::now(),
            strip,
        });
        self.focused = Some(id);
    }

    pub fn close_window(&mut self, window_id: &WindowId) -> Result<()> {
        let index = self
            .windows
            .iter()
            .position(|w| &w.id == window_id)
            .ok_or_else(|| CoreError::WindowNotFound(window_id.to_string()))?;

        let mut window = self.windows.remove(index);
        window.strip.cancel();
        self.backend.close_window(window_id);

        if self.focused.as_ref() == Some(window_id) {
            self.focused = self.windows.last().map(|w| w.id.clone());
        }

        tracing::info!(window_id = %window_id, "Closed window");

        Ok(())
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&ShellWindow<B::Sink, B::Host>> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn window_mut(
        &mut self,
        window_id: &WindowId,
    ) -> Option<&mut ShellWindow<B::Sink, B::Host>> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &ShellWindow<B::Sink, B::Host>> {
        self.windows.iter()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn focused_window(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn focus(&mut self, window_id: &WindowId) -> Result<()> {
        self.require(window_id)?;
        self.focused = Some(window_id.clone());
        Ok(())
    }

    /// Open a folder in a new tab at the end of a window's strip
    pub fn open_tab(&mut self, window_id: &WindowId, path: impl Into<PathBuf>) -> Result<TabId> {
        let tab = Tab::new(FolderTab::new(path));
        let tab_id = tab.id.clone();
        self.require_mut(window_id)?.strip.push(tab)?;

        tracing::info!(window_id = %window_id, tab_id = %tab_id, "Opened tab");

        Ok(tab_id)
    }

    /// Close a tab; the last tab of a window stays open.
    pub fn close_tab(&mut self, window_id: &WindowId, tab_id: &TabId) -> Result<Tab<FolderTab>> {
        let tab = self.require_mut(window_id)?.strip.close(tab_id)?;

        tracing::info!(window_id = %window_id, tab_id = %tab_id, "Closed tab");

        Ok(tab)
    }

    pub fn begin_drag(&mut self, window_id: &WindowId, tab_id: &TabId, sample: Point) -> Result<()> {
        self.require_mut(window_id)?.strip.begin(tab_id, sample)?;
        Ok(())
    }

    pub fn update_drag(&mut self, window_id: &WindowId, sample: Point) -> Result<()> {
        self.require_mut(window_id)?.strip.update(sample);
        Ok(())
    }

    pub fn release_drag(&mut self, window_id: &WindowId) -> Result<ShellEvent> {
        let outcome = self.require_mut(window_id)?.strip.release();
        self.apply_outcome(window_id, outcome)
    }

    pub fn cancel_drag(&mut self, window_id: &WindowId) -> Result<ShellEvent> {
        let outcome = self.require_mut(window_id)?.strip.cancel();
        self.apply_outcome(window_id, outcome)
    }

    pub fn key(&mut self, window_id: &WindowId, key: Key) -> Result<ShellEvent> {
        let outcome = self.require_mut(window_id)?.strip.on_key(key);
        self.apply_outcome(window_id, outcome)
    }

    pub fn capture_lost(&mut self, window_id: &WindowId) -> Result<ShellEvent> {
        let outcome = self.require_mut(window_id)?.strip.on_capture_lost();
        self.apply_outcome(window_id, outcome)
    }

    /// Turn a strip outcome into shell state.
    ///
    /// A detached tab gets a window of its own at the directive's frame. If
    /// the backend cannot open that window the tab goes back to the slot it
    /// was detached from, leaving the source strip as it was before the
    /// gesture. Without a source window to return to, the tab comes back
    /// inside [`CoreError::DetachFailed`].
    pub fn apply_outcome(
        &mut self,
        source: &WindowId,
        outcome: DragOutcome<FolderTab>,
    ) -> Result<ShellEvent> {
        let directive = match outcome {
            DragOutcome::None => return Ok(ShellEvent::None),
            DragOutcome::Cancelled => return Ok(ShellEvent::Cancelled),
            DragOutcome::Reordered { from, to } => {
                return Ok(ShellEvent::Reordered {
                    window: source.clone(),
                    from,
                    to,
                })
            }
            DragOutcome::Detached(directive) => directive,
        };

        let frame = Frame::new(
            directive.frame.origin,
            self.config.fit_window_size(directive.frame.size),
        );
        let tab_id = directive.tab.id.clone();
        let window_id = WindowId::new();

        match self.backend.open_window(&window_id, frame) {
            Ok((sink, host)) => {
                self.install_window(window_id.clone(), frame, sink, host, directive.tab);

                tracing::info!(
                    source = %source,
                    window_id = %window_id,
                    tab_id = %tab_id,
                    "Moved detached tab to new window"
                );

                Ok(ShellEvent::Detached {
                    source: source.clone(),
                    window: window_id,
                    tab_id,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, tab_id = %tab_id, "Could not open window for detached tab");
                match self.window_mut(source) {
                    Some(window) => {
                        window.strip.insert(directive.origin_index, directive.tab)?;
                        Err(e)
                    }
                    None => Err(CoreError::DetachFailed {
                        tab: Box::new(directive.tab),
                        cause: Box::new(e),
                    }),
                }
            }
        }
    }

    fn require(&self, window_id: &WindowId) -> Result<&ShellWindow<B::Sink, B::Host>> {
        self.window(window_id)
            .ok_or_else(|| CoreError::WindowNotFound(window_id.to_string()))
    }

    fn require_mut(&mut self, window_id: &WindowId) -> Result<&mut ShellWindow<B::Sink, B::Host>> {
        self.window_mut(window_id)
            .ok_or_else(|| CoreError::WindowNotFound(window_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_drag::{CaptureError, RenderCommand, StripHost};
    use shelf_tabs::{DetachDirective, Size, TabError};

    #[derive(Debug)]
    struct TestHost {
        frame: Frame,
    }

    impl StripHost for TestHost {
        fn tab_width(&self, _tab_id: &TabId) -> f64 {
            100.0
        }

        fn container_frame(&self) -> Frame {
            self.frame
        }

        fn acquire_capture(&mut self) -> std::result::Result<(), CaptureError> {
            Ok(())
        }

        fn release_capture(&mut self) {}
    }

    #[derive(Default)]
    struct TestBackend {
        opened: Vec<(WindowId, Frame)>,
        closed: Vec<WindowId>,
        refuse: bool,
    }

    impl WindowBackend for TestBackend {
        type Sink = Vec<RenderCommand>;
        type Host = TestHost;

        fn open_window(&mut self, id: &WindowId, frame: Frame) -> Result<(Self::Sink, Self::Host)> {
            if self.refuse {
                return Err(CoreError::Backend("no display".to_string()));
            }
            self.opened.push((id.clone(), frame));
            Ok((Vec::new(), TestHost { frame }))
        }

        fn close_window(&mut self, id: &WindowId) {
            self.closed.push(id.clone());
        }
    }

    fn shell() -> Shell<TestBackend> {
        Shell::new(ShellConfig::new(PathBuf::from("/home/ada")), TestBackend::default())
    }

    fn titles(shell: &Shell<TestBackend>, window: &WindowId) -> Vec<String> {
        shell
            .window(window)
            .unwrap()
            .strip()
            .sequence()
            .iter()
            .map(|t| t.payload.display_title())
            .collect()
    }

    fn main_window(shell: &mut Shell<TestBackend>) -> WindowId {
        let first = Tab::new(FolderTab::new("/home/ada/Documents"));
        let frame = Frame::new(Point::new(50.0, 60.0), Size::new(1000.0, 700.0));
        let window = shell.open_window(frame, first).unwrap();
        shell.open_tab(&window, "/home/ada/Music").unwrap();
        shell.open_tab(&window, "/home/ada/Pictures").unwrap();
        window
    }

    fn tab_at(shell: &Shell<TestBackend>, window: &WindowId, index: usize) -> TabId {
        shell
            .window(window)
            .unwrap()
            .strip()
            .sequence()
            .get(index)
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn test_default_window_uses_start_directory() {
        let mut shell = shell();
        let window = shell.open_default_window().unwrap();
        assert_eq!(titles(&shell, &window), vec!["ada"]);
        assert_eq!(shell.focused_window(), Some(&window));
        assert_eq!(
            shell.window(&window).unwrap().frame().size,
            Size::new(1024.0, 700.0)
        );
    }

    #[test]
    fn test_reorder_through_shell() {
        let mut shell = shell();
        let window = main_window(&mut shell);
        let documents = tab_at(&shell, &window, 0);

        shell.begin_drag(&window, &documents, Point::new(50.0, 15.0)).unwrap();
        shell.update_drag(&window, Point::new(250.0, 18.0)).unwrap();
        let event = shell.release_drag(&window).unwrap();

        assert_eq!(
            event,
            ShellEvent::Reordered {
                window: window.clone(),
                from: 0,
                to: 2
            }
        );
        assert_eq!(titles(&shell, &window), vec!["Music", "Pictures", "Documents"]);
    }

    #[test]
    fn test_detach_opens_window_with_tab() {
        let mut shell = shell();
        let window = main_window(&mut shell);
        let music = tab_at(&shell, &window, 1);

        shell.begin_drag(&window, &music, Point::new(150.0, 15.0)).unwrap();
        shell.update_drag(&window, Point::new(400.0, 300.0)).unwrap();
        let event = shell.release_drag(&window).unwrap();

        let ShellEvent::Detached {
            source,
            window: new_window,
            tab_id,
        } = event
        else {
            panic!("expected a detach event");
        };

        assert_eq!(source, window);
        assert_eq!(tab_id, music);
        assert_eq!(shell.window_count(), 2);
        assert_eq!(shell.focused_window(), Some(&new_window));
        assert_eq!(titles(&shell, &window), vec!["Documents", "Pictures"]);
        assert_eq!(titles(&shell, &new_window), vec!["Music"]);

        let frame = shell.window(&new_window).unwrap().frame();
        assert_eq!(frame.size, Size::new(1000.0, 700.0));
        assert_eq!(frame.center(), Point::new(450.0, 360.0));
    }

    #[test]
    fn test_small_window_is_enlarged() {
        let mut shell = shell();
        let first = Tab::new(FolderTab::new("/tmp"));
        let window = shell
            .open_window(Frame::new(Point::default(), Size::new(100.0, 100.0)), first)
            .unwrap();
        assert_eq!(
            shell.window(&window).unwrap().frame().size,
            Size::new(480.0, 320.0)
        );
    }

    #[test]
    fn test_detach_last_tab_is_cancelled() {
        let mut shell = shell();
        let window = shell.open_default_window().unwrap();
        let only = tab_at(&shell, &window, 0);

        shell.begin_drag(&window, &only, Point::new(50.0, 15.0)).unwrap();
        shell.update_drag(&window, Point::new(50.0, 200.0)).unwrap();

        assert_eq!(shell.release_drag(&window).unwrap(), ShellEvent::Cancelled);
        assert_eq!(shell.window_count(), 1);
        assert_eq!(titles(&shell, &window), vec!["ada"]);
    }

    #[test]
    fn test_failed_window_returns_tab_to_source() {
        let mut shell = shell();
        let window = main_window(&mut shell);
        let before = shell.window(&window).unwrap().strip().sequence().ids();

        for index in [0, 1, 2] {
            let tab_id = tab_at(&shell, &window, index);
            let x = 50.0 + 100.0 * index as f64;

            shell.begin_drag(&window, &tab_id, Point::new(x, 15.0)).unwrap();
            shell.update_drag(&window, Point::new(x, 150.0)).unwrap();
            shell.backend_mut().refuse = true;

            let result = shell.release_drag(&window);
            assert!(matches!(result, Err(CoreError::Backend(_))));
            assert_eq!(shell.window_count(), 1);
            assert_eq!(shell.window(&window).unwrap().strip().sequence().ids(), before);
        }
        assert_eq!(titles(&shell, &window), vec!["Documents", "Music", "Pictures"]);
    }

    #[test]
    fn test_failed_detach_without_source_hands_tab_back() {
        let mut shell = shell();
        shell.backend_mut().refuse = true;

        let tab = Tab::new(FolderTab::new("/home/ada/Music"));
        let tab_id = tab.id.clone();
        let directive = DetachDirective {
            tab,
            origin_index: 1,
            frame: Frame::new(Point::default(), Size::new(800.0, 600.0)),
        };

        let result = shell.apply_outcome(&WindowId::from("gone"), DragOutcome::Detached(directive));
        match result {
            Err(CoreError::DetachFailed { tab, cause }) => {
                assert_eq!(tab.id, tab_id);
                assert!(matches!(*cause, CoreError::Backend(_)));
            }
            other => panic!("expected the tab back, got {other:?}"),
        }
        assert_eq!(shell.window_count(), 0);
    }

    #[test]
    fn test_escape_cancels_through_shell() {
        let mut shell = shell();
        let window = main_window(&mut shell);
        let pictures = tab_at(&shell, &window, 2);

        shell.begin_drag(&window, &pictures, Point::new(250.0, 15.0)).unwrap();
        shell.update_drag(&window, Point::new(20.0, 15.0)).unwrap();
        assert_eq!(shell.key(&window, Key::Escape).unwrap(), ShellEvent::Cancelled);
        assert_eq!(shell.release_drag(&window).unwrap(), ShellEvent::None);
        assert_eq!(titles(&shell, &window), vec!["Documents", "Music", "Pictures"]);
    }

    #[test]
    fn test_capture_loss_through_shell() {
        let mut shell = shell();
        let window = main_window(&mut shell);
        let music = tab_at(&shell, &window, 1);

        shell.begin_drag(&window, &music, Point::new(150.0, 15.0)).unwrap();
        shell.update_drag(&window, Point::new(280.0, 15.0)).unwrap();
        assert_eq!(shell.capture_lost(&window).unwrap(), ShellEvent::Cancelled);
        assert_eq!(titles(&shell, &window), vec!["Documents", "Music", "Pictures"]);
    }

    #[test]
    fn test_close_last_tab_rejected() {
        let mut shell = shell();
        let window = shell.open_default_window().unwrap();
        let only = tab_at(&shell, &window, 0);

        let result = shell.close_tab(&window, &only);
        assert!(matches!(result, Err(CoreError::Tab(TabError::LastTab))));
    }

    #[test]
    fn test_close_window_moves_focus() {
        let mut shell = shell();
        let first = shell.open_default_window().unwrap();
        let second = shell.open_default_window().unwrap();
        assert_eq!(shell.focused_window(), Some(&second));

        shell.close_window(&second).unwrap();
        assert_eq!(shell.focused_window(), Some(&first));
        assert_eq!(shell.backend().closed, vec![second]);
        assert_eq!(shell.backend().opened.len(), 2);
    }

    #[test]
    fn test_unknown_window() {
        let mut shell = shell();
        let missing = WindowId::from("missing");
        assert!(matches!(
            shell.open_tab(&missing, "/tmp"),
            Err(CoreError::WindowNotFound(_))
        ));
        assert!(matches!(
            shell.focus(&missing),
            Err(CoreError::WindowNotFound(_))
        ));
    }
}
