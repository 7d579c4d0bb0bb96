//! Saving and restoring a control's numeric state.

use serde::{Deserialize, Serialize};

use crate::control::SliderControl;

/// A control's numeric state so it can be recalled at a later point. Stored as plain values, the
/// geometric side is derived from the extent at restore time and needs no persisting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderState {
    pub minimum: f32,
    pub maximum: f32,
    pub value: f32,
}

impl SliderControl {
    /// Snapshot the current domain and value.
    pub fn save_state(&self) -> SliderState {
        SliderState {
            minimum: self.minimum(),
            maximum: self.maximum(),
            value: self.value(),
        }
    }

    /// Restore a previously saved state through the regular setters, so the usual clamping rules
    /// apply and observers are notified if the committed value ends up changing.
    pub fn load_state(&self, state: &SliderState) {
        track_debug_assert!(
            state.minimum <= state.maximum,
            "loading state with bounds out of order: {} > {}",
            state.minimum,
            state.maximum
        );

        // Mutual clamping can cap the first bound when the loaded domain does not overlap the
        // current one, so the minimum is applied again after the maximum.
        self.set_minimum(state.minimum);
        self.set_maximum(state.maximum);
        self.set_minimum(state.minimum);
        self.set_value(state.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let slider = SliderControl::new("slider")
            .with_minimum(-6.0)
            .with_maximum(6.0)
            .with_value(1.5);

        let json = serde_json::to_string(&slider.save_state()).expect("state should serialize");
        let state: SliderState = serde_json::from_str(&json).expect("state should deserialize");

        let restored = SliderControl::new("slider");
        restored.load_state(&state);
        assert_eq!(restored.save_state(), slider.save_state());
    }

    #[test]
    fn loading_a_disjoint_domain() {
        let slider = SliderControl::new("slider");
        slider.load_state(&SliderState {
            minimum: -50.0,
            maximum: -10.0,
            value: -20.0,
        });

        assert_eq!(slider.minimum(), -50.0);
        assert_eq!(slider.maximum(), -10.0);
        assert_eq!(slider.value(), -20.0);
    }

    #[test]
    fn loading_clamps_the_stored_value() {
        let slider = SliderControl::new("slider");
        slider.load_state(&SliderState {
            minimum: 0.0,
            maximum: 10.0,
            value: 25.0,
        });

        assert_eq!(slider.value(), 10.0);
    }
}
