//! The slider control model: a numeric domain, a committed value, and a draggable thumb kept in
//! sync through the mapping in [`range`][crate::range].

use atomic_float::AtomicF32;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::event::{ObserverToken, ValueChangedEvent};
use crate::range::{SliderRange, TrackExtent};
use crate::scene::{SceneNode, SliderScene};

/// Default lower bound of a newly constructed control's domain.
pub const DEFAULT_MINIMUM: f32 = 0.0;
/// Default upper bound of a newly constructed control's domain.
pub const DEFAULT_MAXIMUM: f32 = 100.0;
/// Default committed value of a newly constructed control.
pub const DEFAULT_VALUE: f32 = 50.0;

/// Everything the control borrows from the rendering toolkit once it has been realized. The nodes
/// are collected in creation order so disposal can release all of them in one pass.
struct Realization {
    extent: TrackExtent,
    /// Track first, thumb second.
    nodes: Vec<Box<dyn SceneNode>>,
}

impl Realization {
    fn thumb(&self) -> Option<&dyn SceneNode> {
        self.nodes.get(1).map(|node| node.as_ref())
    }
}

/// A one-dimensional slider control. The committed value always lies in `[minimum, maximum]`, and
/// `minimum <= maximum` is maintained by mutually clamping the bounds setters. All numeric inputs
/// are normalized rather than rejected, so none of the setters return errors.
///
/// Values are stored in atomics so the setters can take `&self`, which lets the control be shared
/// with the input and rendering callbacks that drive it. The model itself is synchronous and
/// event-driven, there is no internal parallelism.
pub struct SliderControl {
    name: String,

    minimum: AtomicF32,
    maximum: AtomicF32,
    /// The committed value. Only [`set_value()`][Self::set_value()] writes this.
    value: AtomicF32,
    /// The thumb's geometric position. Diverges from the value's mapped position while a drag is
    /// in progress, and is resynchronized on every commit.
    thumb_position: AtomicF32,
    /// Whether a drag is in progress. Set on the first drag movement, cleared on drag end.
    drag_active: AtomicBool,

    value_changed: ValueChangedEvent,
    realized: Mutex<Option<Realization>>,
    disposed: AtomicBool,
}

impl SliderControl {
    /// Build a new [`SliderControl`] with the default `0..=100` domain and a value of 50. Use the
    /// `with_*` functions to override the defaults. An explicit `with_value(0.0)` is honored like
    /// any other value.
    pub fn new(name: impl Into<String>) -> Self {
        let control = Self {
            name: name.into(),
            minimum: AtomicF32::new(DEFAULT_MINIMUM),
            maximum: AtomicF32::new(DEFAULT_MAXIMUM),
            value: AtomicF32::new(DEFAULT_VALUE),
            thumb_position: AtomicF32::new(0.0),
            drag_active: AtomicBool::new(false),
            value_changed: ValueChangedEvent::new(),
            realized: Mutex::new(None),
            disposed: AtomicBool::new(false),
        };
        control
            .thumb_position
            .store(control.position_of(DEFAULT_VALUE), Ordering::Relaxed);

        control
    }

    /// Override the domain's lower bound. Applied through the regular setter, so it is capped at
    /// the current maximum and the value is re-clamped.
    pub fn with_minimum(self, minimum: f32) -> Self {
        self.set_minimum(minimum);
        self
    }

    /// Override the domain's upper bound.
    pub fn with_maximum(self, maximum: f32) -> Self {
        self.set_maximum(maximum);
        self
    }

    /// Override the initial value. Set the bounds first or the value may get clamped into the
    /// default domain.
    pub fn with_value(self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn minimum(&self) -> f32 {
        self.minimum.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn maximum(&self) -> f32 {
        self.maximum.load(Ordering::Relaxed)
    }

    /// The current committed value. Always within [`range()`][Self::range()].
    #[inline]
    pub fn value(&self) -> f32 {
        self.value.load(Ordering::Relaxed)
    }

    /// The thumb's current geometric position along the drag axis. Tracks the committed value
    /// except while a drag is in progress.
    #[inline]
    pub fn thumb_position(&self) -> f32 {
        self.thumb_position.load(Ordering::Relaxed)
    }

    /// A snapshot of the current numeric domain.
    pub fn range(&self) -> SliderRange {
        SliderRange::new(self.minimum(), self.maximum())
    }

    /// The geometric extent of the track, or [`TrackExtent::SENTINEL`] if the control has not
    /// been realized yet.
    pub fn extent(&self) -> TrackExtent {
        self.realized
            .lock()
            .as_ref()
            .map(|realization| realization.extent)
            .unwrap_or(TrackExtent::SENTINEL)
    }

    /// Whether a drag is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_active.load(Ordering::Relaxed)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Relaxed)
    }

    /// The geometric position corresponding to a value, with degenerate domains and extents
    /// mapping to the start of the track.
    pub fn position_of(&self, value: f32) -> f32 {
        self.extent().position_at(self.range().normalize(value))
    }

    /// Register an observer for committed value changes. Observers fire synchronously and in
    /// registration order, and never fire for provisional drag movement.
    pub fn on_value_changed(
        &self,
        handler: impl Fn(f32) + Send + Sync + 'static,
    ) -> ObserverToken {
        self.value_changed.subscribe(handler)
    }

    /// Remove a previously registered observer. Returns whether the token still referred to a
    /// live subscription.
    pub fn remove_observer(&self, token: ObserverToken) -> bool {
        self.value_changed.unsubscribe(token)
    }

    /// Set the committed value, clamped into the current domain. If the clamped value equals the
    /// current one this is a no-op and observers stay quiet. Otherwise the thumb is moved to the
    /// value's mapped position and every observer is notified with the new value.
    ///
    /// Returns whether the value actually changed. Non-finite inputs are dropped.
    ///
    /// Observers may call back into the setters; notifications then nest and the last write wins.
    pub fn set_value(&self, value: f32) -> bool {
        if !value.is_finite() {
            track_debug_assert!(value.is_finite(), "dropping non-finite value {}", value);
            return false;
        }

        let clamped = self.range().clamp(value);
        if clamped == self.value() {
            return false;
        }

        self.value.store(clamped, Ordering::Relaxed);
        // Resynchronize the thumb before notifying so a reentrant setter call from an observer
        // sees a consistent control
        self.sync_thumb_to_value();
        self.value_changed.emit(clamped);

        true
    }

    /// Set the domain's lower bound. The bound is capped at the current maximum, raising it past
    /// the maximum never pushes the maximum up. The current value is re-clamped into the new
    /// domain, notifying observers only if that moved it.
    pub fn set_minimum(&self, minimum: f32) {
        if !minimum.is_finite() {
            track_debug_assert!(minimum.is_finite(), "dropping non-finite minimum {}", minimum);
            return;
        }
        if minimum == self.minimum() {
            return;
        }

        self.minimum
            .store(minimum.min(self.maximum()), Ordering::Relaxed);
        self.reapply_value();
    }

    /// Set the domain's upper bound. Symmetric to [`set_minimum()`][Self::set_minimum()]: the
    /// bound is raised to the current minimum if needed, and the value is re-clamped.
    pub fn set_maximum(&self, maximum: f32) {
        if !maximum.is_finite() {
            track_debug_assert!(maximum.is_finite(), "dropping non-finite maximum {}", maximum);
            return;
        }
        if maximum == self.maximum() {
            return;
        }

        self.maximum
            .store(maximum.max(self.minimum()), Ordering::Relaxed);
        self.reapply_value();
    }

    /// Create this control's renderable proxies and adopt the scene's track extent. The thumb
    /// snaps to the current value's position immediately. Realizing twice, or realizing a
    /// disposed control, is a logged no-op.
    pub fn realize(&self, scene: &dyn SliderScene) {
        if self.is_disposed() {
            track_warn!("tried to realize disposed slider control '{}'", self.name);
            return;
        }

        {
            let mut realized = self.realized.lock();
            if realized.is_some() {
                track_warn!("slider control '{}' has already been realized", self.name);
                return;
            }

            let track = scene.create_track(&self.name);
            let thumb = scene.create_thumb(&self.name);
            let extent = scene.track_extent();
            track_debug_assert!(
                extent.start.is_finite() && extent.end.is_finite(),
                "non-finite track extent for slider control '{}'",
                self.name
            );

            *realized = Some(Realization {
                extent,
                nodes: vec![track, thumb],
            });
        }

        self.sync_thumb_to_value();
    }

    /// Release every renderable proxy collected at realization time. The numeric state is
    /// unaffected. The first call wins, later calls are no-ops, and a control that was never
    /// realized simply has nothing to release.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::Relaxed) {
            return;
        }

        let realization = self.realized.lock().take();
        if let Some(realization) = realization {
            track_trace!("disposing slider control '{}'", self.name);
            for node in &realization.nodes {
                node.dispose();
            }
        }
    }

    /// Advance the provisional thumb position by an incremental drag delta, clamped to the track.
    /// Purely visual feedback: the committed value and the observers are untouched.
    pub(crate) fn drag_moved(&self, delta: f32) {
        if !delta.is_finite() {
            track_debug_assert!(delta.is_finite(), "dropping non-finite drag delta {}", delta);
            return;
        }

        if !self.drag_active.swap(true, Ordering::Relaxed) {
            track_trace!("drag started on slider control '{}'", self.name);
        }

        let position = self.extent().clamp(self.thumb_position() + delta);
        self.thumb_position.store(position, Ordering::Relaxed);
        self.push_thumb_position(position);
    }

    /// Convert the provisional thumb position back into a value, rounded to the nearest integer
    /// step of the domain, and commit it. The thumb snaps to the committed value's exact mapped
    /// position even when the rounded value turns out to be unchanged.
    pub(crate) fn drag_ended(&self) {
        self.drag_active.store(false, Ordering::Relaxed);

        let minimum = self.minimum();
        let maximum = self.maximum();
        let fraction = self.extent().fraction_of(self.thumb_position());
        // f32::round() rounds half-away-from-zero, which is the tie-break we want here
        let candidate = minimum + (fraction * (maximum - minimum)).round();

        if !self.set_value(candidate.clamp(minimum, maximum)) {
            self.sync_thumb_to_value();
        }
    }

    /// Re-clamp the current value after a bounds change. `set_value()` takes care of the position
    /// resync and the notification when the clamp moves the value; when it doesn't, the mapping
    /// may still have changed, so the thumb is resynchronized either way.
    fn reapply_value(&self) {
        if !self.set_value(self.value()) {
            self.sync_thumb_to_value();
        }
    }

    fn sync_thumb_to_value(&self) {
        let position = self.position_of(self.value());
        self.thumb_position.store(position, Ordering::Relaxed);
        self.push_thumb_position(position);
    }

    fn push_thumb_position(&self, position: f32) {
        if let Some(realization) = &*self.realized.lock() {
            if let Some(thumb) = realization.thumb() {
                thumb.set_position(position);
            }
        }
    }
}
