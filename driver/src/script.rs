use serde::{Deserialize, Serialize};

use crate::input::{KeyBindings, KeyState};

/// Keys pressed and released once simulated time reaches `at_s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at_s: f32,
    #[serde(default)]
    pub down: Vec<String>,
    #[serde(default)]
    pub up: Vec<String>,
}

impl ScriptStep {
    pub fn press(at_s: f32, keys: &[&str]) -> Self {
        Self {
            at_s,
            down: keys.iter().map(|s| s.to_string()).collect(),
            up: Vec::new(),
        }
    }

    pub fn release(at_s: f32, keys: &[&str]) -> Self {
        Self {
            at_s,
            down: Vec::new(),
            up: keys.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Time-ordered input timeline, replayed against simulated time.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
    cursor: usize,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        // Stable, so steps sharing a timestamp keep their written order
        steps.sort_by(|a, b| a.at_s.total_cmp(&b.at_s));
        Self { steps, cursor: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Key names the script uses that no binding maps to an intent.
    pub fn unbound_keys(&self, bindings: &KeyBindings) -> Vec<String> {
        let mut out: Vec<String> = self
            .steps
            .iter()
            .flat_map(|s| s.down.iter().chain(s.up.iter()))
            .filter(|k| !bindings.is_bound(k))
            .cloned()
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Apply every step due at or before `now`. Releases in a step go before its presses.
    /// Returns how many steps were applied.
    pub fn feed(&mut self, now: f32, keys: &mut KeyState) -> usize {
        let start = self.cursor;
        while let Some(step) = self.steps.get(self.cursor) {
            if step.at_s > now {
                break;
            }
            for k in &step.up {
                keys.release(k);
            }
            for k in &step.down {
                keys.press(k);
            }
            self.cursor += 1;
        }
        self.cursor - start
    }
}
