//! Drag-and-drop routing for the drop target and the surrounding page.
//!
//! The browser navigates to a file dropped anywhere on the page unless
//! every drag event is cancelled, so both surfaces always suppress the
//! default. Only a drop on the target hands files to the widget.

/// The four drag events the widget listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragKind {
    /// Map a DOM event type to a drag kind.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragKind::Enter),
            "dragover" => Some(DragKind::Over),
            "dragleave" => Some(DragKind::Leave),
            "drop" => Some(DragKind::Drop),
            _ => None,
        }
    }
}

/// Where a drag event was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSurface {
    /// The drop target itself.
    Target,
    /// Anywhere else on the page.
    Page,
}

/// What the event handler must do with the DOM event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    /// Forward the event's files to `accept`.
    pub deliver_files: bool,
}

/// Highlight state of the drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZone {
    highlighted: bool,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn handle(&mut self, kind: DragKind, surface: DragSurface) -> DragResponse {
        let deliver_files = match surface {
            DragSurface::Target => {
                self.highlighted = matches!(kind, DragKind::Enter | DragKind::Over);
                kind == DragKind::Drop
            }
            DragSurface::Page => false,
        };

        DragResponse {
            prevent_default: true,
            stop_propagation: true,
            deliver_files,
        }
    }
}
