// Re-export the macros first so `use trackbar::prelude::*;` brings them along
pub use crate::debug::*;

pub use crate::control::{
    SliderControl, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_VALUE,
};
pub use crate::drag::DragEvent;
pub use crate::event::{ObserverToken, ValueChangedEvent};
pub use crate::range::{SliderRange, TrackExtent};
pub use crate::scene::{SceneNode, SliderScene};
pub use crate::state::SliderState;
