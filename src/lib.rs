//! A slider control model for 3D user interfaces. The crate owns the numeric domain, the
//! geometric extent along the drag axis, and the mapping between the two; rendering and pointer
//! input stay behind the traits in [`scene`].

#[macro_use]
pub mod debug;

/// Everything you'd need to use a slider control. Import this with `use trackbar::prelude::*;`.
pub mod prelude;

pub mod control;
pub mod drag;
pub mod event;
pub mod range;
pub mod scene;
pub mod state;

// The `track_*!()` macros expand to paths through this re-export.
#[doc(hidden)]
pub use log;
