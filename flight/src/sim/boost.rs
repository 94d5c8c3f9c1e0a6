use serde::{Deserialize, Serialize};

use crate::BoostConfig;

/// Depletable boost energy in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostResource {
    amount: f32,
    pub drain_rate: f32,
    pub recharge_rate: f32,
}

/// Result of one boost update: the gate the integrator reads this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostOutput {
    pub boosting: bool,
    /// 1 when not boosting, the configured multiplier otherwise.
    pub multiplier: f32,
}

impl Default for BoostOutput {
    fn default() -> Self {
        Self { boosting: false, multiplier: 1.0 }
    }
}

impl BoostResource {
    /// Full tank.
    pub fn new(cfg: &BoostConfig) -> Self {
        Self::with_amount(cfg, 1.0)
    }

    pub fn with_amount(cfg: &BoostConfig, amount: f32) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            drain_rate: cfg.drain_rate,
            recharge_rate: cfg.recharge_rate,
        }
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Drain while boost is requested and energy remains, otherwise recharge.
    /// The tank hitting empty closes the gate in the same call.
    pub fn update(&mut self, wants_boost: bool, multiplier: f32, dt: f32) -> BoostOutput {
        if wants_boost && self.amount > 0.0 {
            let mut drained = (self.amount - self.drain_rate * dt).max(0.0);
            if drained == self.amount && self.drain_rate * dt > 0.0 {
                // Step too small to register in f32: take at least one ulp
                drained = step_down(self.amount);
            }
            self.amount = drained;
            if self.amount > 0.0 {
                return BoostOutput { boosting: true, multiplier };
            }
        } else if self.amount < 1.0 {
            let mut charged = (self.amount + self.recharge_rate * dt).min(1.0);
            if charged == self.amount && self.recharge_rate * dt > 0.0 {
                charged = step_up(self.amount);
            }
            self.amount = charged;
        }
        BoostOutput::default()
    }
}

/// Next representable value below a positive `x`.
fn step_down(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}

/// Next representable value above a non-negative `x` below 1.
fn step_up(x: f32) -> f32 {
    f32::from_bits(x.to_bits() + 1)
}
