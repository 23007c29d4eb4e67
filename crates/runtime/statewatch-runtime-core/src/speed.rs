//! Per-state playback speed overrides.

use hashbrown::HashMap;

#[derive(Clone, Copy, Debug, Default)]
struct SpeedData {
    /// Host speed captured when the override engaged, restored on exit.
    default_speed: f32,
    override_speed: f32,
    active: bool,
}

/// Applies per-state playback speed overrides keyed by state name.
///
/// At most one override is engaged at a time: entering an overridden state
/// captures the host's current speed and switches to the override; leaving
/// the state switches back to the captured speed.
#[derive(Debug, Default)]
pub struct SpeedOverrides {
    overrides: HashMap<String, SpeedData>,
}

impl SpeedOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an override for `state_name`.
    pub fn set_override(&mut self, state_name: impl Into<String>, speed: f32) {
        self.overrides.insert(
            state_name.into(),
            SpeedData {
                override_speed: speed,
                ..Default::default()
            },
        );
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Called once per host tick with the current state name and the host's
    /// current playback speed. Returns the speed the host should switch to,
    /// if any.
    pub fn tick(&mut self, current_state: &str, host_speed: f32) -> Option<f32> {
        // At most one entry is active at a time.
        for (name, data) in self.overrides.iter_mut() {
            if !data.active {
                continue;
            }
            if name.as_str() == current_state {
                return None;
            }
            data.active = false;
            return Some(data.default_speed);
        }
        let data = self.overrides.get_mut(current_state)?;
        data.active = true;
        data.default_speed = host_speed;
        Some(data.override_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_engages_on_entry_and_restores_on_exit() {
        let mut overrides = SpeedOverrides::new();
        overrides.set_override("Run", 2.0);

        // Not in an overridden state yet.
        assert_eq!(overrides.tick("Idle", 1.0), None);

        // Entering Run captures the host speed and returns the override.
        assert_eq!(overrides.tick("Run", 1.0), Some(2.0));
        // Staying put changes nothing.
        assert_eq!(overrides.tick("Run", 2.0), None);

        // Leaving Run restores the captured speed.
        assert_eq!(overrides.tick("Idle", 2.0), Some(1.0));
        // And the override can engage again on re-entry.
        assert_eq!(overrides.tick("Run", 1.0), Some(2.0));
    }

    #[test]
    fn no_overrides_means_no_speed_changes() {
        let mut overrides = SpeedOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(overrides.tick("Idle", 1.0), None);
    }

    #[test]
    fn replacing_an_override_resets_it() {
        let mut overrides = SpeedOverrides::new();
        overrides.set_override("Run", 2.0);
        assert_eq!(overrides.tick("Run", 1.0), Some(2.0));

        // Replacing while engaged drops the captured speed; the fresh entry
        // engages against the host's current speed on the next entry.
        overrides.set_override("Run", 3.0);
        assert_eq!(overrides.tick("Idle", 2.0), None);
        assert_eq!(overrides.tick("Run", 1.0), Some(3.0));
    }
}
