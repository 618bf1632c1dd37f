//! Open/closed state of a medium card's detail drawer.
//!
//! Owned by a single card instance. Only user clicks on that card's own
//! controls move it.

/// User interaction on a medium card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    /// Click anywhere on the closed preview surface
    SurfaceClicked,
    /// Click on the call-to-action; propagation is stopped so the surface
    /// never sees it
    CtaClicked,
    /// Click on the dimmed overlay behind the open drawer
    OverlayClicked,
    /// Drawer dismissed (handle drag, escape, close button)
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewState {
    open: bool,
}

impl PreviewState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an event; returns whether the state changed.
    pub fn apply(&mut self, event: PreviewEvent) -> bool {
        let next = match event {
            PreviewEvent::SurfaceClicked => true,
            PreviewEvent::CtaClicked => self.open,
            PreviewEvent::OverlayClicked | PreviewEvent::CloseRequested => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    /// Drawer `onOpenChange`-style setter
    pub fn set_open(&mut self, open: bool) -> bool {
        self.apply(if open {
            PreviewEvent::SurfaceClicked
        } else {
            PreviewEvent::CloseRequested
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!PreviewState::default().is_open());
    }

    #[test]
    fn surface_click_opens_once() {
        let mut state = PreviewState::default();
        assert!(state.apply(PreviewEvent::SurfaceClicked));
        assert!(state.is_open());
        assert!(!state.apply(PreviewEvent::SurfaceClicked));
        assert!(state.is_open());
    }

    #[test]
    fn cta_click_never_toggles() {
        let mut state = PreviewState::default();
        assert!(!state.apply(PreviewEvent::CtaClicked));
        assert!(!state.is_open());

        state.apply(PreviewEvent::SurfaceClicked);
        assert!(!state.apply(PreviewEvent::CtaClicked));
        assert!(state.is_open());
    }

    #[test]
    fn overlay_and_close_return_to_closed() {
        let mut state = PreviewState::default();
        state.apply(PreviewEvent::SurfaceClicked);
        assert!(state.apply(PreviewEvent::OverlayClicked));
        assert!(!state.is_open());

        state.set_open(true);
        assert!(state.apply(PreviewEvent::CloseRequested));
        assert!(!state.apply(PreviewEvent::CloseRequested));
    }
}
