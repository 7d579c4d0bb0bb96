//! Traits for the rendering toolkit that hosts a slider control.
//!
//! The control model never talks to a renderer directly. The host implements [`SliderScene`] to
//! hand the control its renderable proxies and the geometric extent of its track, and the control
//! pushes thumb positions back through [`SceneNode::set_position()`]. Everything else about
//! meshes, materials and scene-graph parenting stays on the host's side of this seam.

use crate::range::TrackExtent;

/// A renderable proxy created and owned by the rendering toolkit. The control only ever moves it
/// along the drag axis and releases it on disposal.
pub trait SceneNode: Send {
    /// Move this node to a position along the drag axis. Called for every provisional thumb
    /// position during a drag as well as for the resynchronized position after a commit.
    fn set_position(&self, position: f32);

    /// Release whatever the toolkit allocated for this node. The control guarantees this is
    /// called at most once per node, and that a failure to release one node never prevents the
    /// remaining nodes from being released.
    fn dispose(&self);
}

/// The factory a host toolkit implements to realize a slider control. The returned nodes are
/// collected by the control and disposed together when the control is disposed.
pub trait SliderScene {
    /// Create the static track the thumb slides along. The `name` is the owning control's name,
    /// toolkits typically derive mesh names from it.
    fn create_track(&self, name: &str) -> Box<dyn SceneNode>;

    /// Create the draggable thumb.
    fn create_thumb(&self, name: &str) -> Box<dyn SceneNode>;

    /// The geometric positions of the track's endpoints along the drag axis. `start` corresponds
    /// to the domain minimum and `end` to the maximum.
    fn track_extent(&self) -> TrackExtent;
}
