use std::collections::HashSet;

use bevy::prelude::Resource;
use flight::Intent;
use serde::{Deserialize, Serialize};

/// One field of [`Intent`], for looking up what a key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentFlag {
    Forward,
    Back,
    Left,
    Right,
    Boost,
    Up,
    Down,
}

impl IntentFlag {
    pub const ALL: [IntentFlag; 7] = [
        IntentFlag::Forward,
        IntentFlag::Back,
        IntentFlag::Left,
        IntentFlag::Right,
        IntentFlag::Boost,
        IntentFlag::Up,
        IntentFlag::Down,
    ];

    fn set(self, intent: &mut Intent) {
        match self {
            IntentFlag::Forward => intent.forward = true,
            IntentFlag::Back => intent.back = true,
            IntentFlag::Left => intent.left = true,
            IntentFlag::Right => intent.right = true,
            IntentFlag::Boost => intent.boost = true,
            IntentFlag::Up => intent.up = true,
            IntentFlag::Down => intent.down = true,
        }
    }
}

/// Key codes bound to each intent flag. Names follow the physical key codes
/// a windowing layer reports (`KeyW`, `ShiftLeft`, `ArrowUp`, ...).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub back: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub boost: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: keys(&["KeyW"]),
            back: keys(&["KeyS"]),
            left: keys(&["KeyA"]),
            right: keys(&["KeyD"]),
            boost: keys(&["ShiftLeft", "ShiftRight"]),
            up: keys(&["ArrowUp"]),
            down: keys(&["ArrowDown"]),
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, flag: IntentFlag) -> &[String] {
        match flag {
            IntentFlag::Forward => &self.forward,
            IntentFlag::Back => &self.back,
            IntentFlag::Left => &self.left,
            IntentFlag::Right => &self.right,
            IntentFlag::Boost => &self.boost,
            IntentFlag::Up => &self.up,
            IntentFlag::Down => &self.down,
        }
    }

    pub fn is_bound(&self, key: &str) -> bool {
        IntentFlag::ALL
            .iter()
            .any(|&flag| self.keys_for(flag).iter().any(|k| k == key))
    }

    /// A flag is set while any of its keys is held.
    pub fn reduce(&self, keys: &KeyState) -> Intent {
        let mut intent = Intent::IDLE;
        for flag in IntentFlag::ALL {
            if self.keys_for(flag).iter().any(|k| keys.is_held(k)) {
                flag.set(&mut intent);
            }
        }
        intent
    }
}

/// Keys currently held, built from down/up events.
#[derive(Resource, Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}
