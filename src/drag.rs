//! The pointer-drag protocol.
//!
//! A drag has two phases. While the pointer moves, the host feeds [`DragEvent::Moved`] deltas into
//! [`SliderControl::handle_drag_event()`][crate::control::SliderControl::handle_drag_event] and
//! only the provisional thumb position changes, so observers stay quiet and the thumb is not
//! snapped mid-drag. When the pointer releases, [`DragEvent::Ended`] converts the provisional
//! position back into a value, rounds it to the nearest integer step and commits it through the
//! regular value setter.

use crate::control::SliderControl;

/// An incremental pointer-drag event along the slider's axis, as emitted by the host's input
/// source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer moved while dragging. `delta` is the distance moved along the drag axis since
    /// the previous event, in the same units as the track extent.
    Moved { delta: f32 },
    /// The pointer was released, ending the drag.
    Ended,
}

impl SliderControl {
    /// Feed a pointer-drag event into the control. `Moved` events advance the provisional thumb
    /// position without touching the value or notifying observers; the `Ended` event commits.
    /// Programmatic setter calls remain legal while a drag is in progress.
    pub fn handle_drag_event(&self, event: DragEvent) {
        match event {
            DragEvent::Moved { delta } => self.drag_moved(delta),
            DragEvent::Ended => self.drag_ended(),
        }
    }
}
