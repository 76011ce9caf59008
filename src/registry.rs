//! Name → effect lookup.
//!
//! The host resolves effects by name (from the command line or while cycling
//! the gallery). Each entry records the call contract, the extra parameters
//! the effect consumes in their declared order, and a bound implementation
//! that pulls those parameters out of `EffectInputs`.

use crate::effects::{Effect, Shape, color, distortion, layer};
use crate::error::Error;

/// An extra argument an effect declares, beyond position and color/layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Time,
    Size,
    Touch,
    Amount,
}

impl Param {
    pub fn as_str(self) -> &'static str {
        match self {
            Param::Time => "time",
            Param::Size => "size",
            Param::Touch => "touch",
            Param::Amount => "amount",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EffectEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
    pub effect: Effect,
}

impl EffectEntry {
    pub fn shape(&self) -> Shape {
        self.effect.shape()
    }

    pub fn takes(&self, param: Param) -> bool {
        self.params.contains(&param)
    }
}

pub struct Registry {
    entries: Vec<EffectEntry>,
}

impl Registry {
    /// Every built-in effect, in catalogue order.
    pub fn builtin() -> Self {
        let entries = vec![
            EffectEntry {
                name: "passthrough",
                description: "returns the input color unchanged",
                params: &[],
                effect: Effect::Color(|p, c, _| color::passthrough(p, c)),
            },
            EffectEntry {
                name: "recolor",
                description: "opaque red, original alpha",
                params: &[],
                effect: Effect::Color(|p, c, _| color::recolor(p, c)),
            },
            EffectEntry {
                name: "invertAlpha",
                description: "red where the content is transparent",
                params: &[],
                effect: Effect::Color(|p, c, _| color::invert_alpha(p, c)),
            },
            EffectEntry {
                name: "gradient",
                description: "red = x/y, blue = y/x",
                params: &[],
                effect: Effect::Color(|p, c, _| color::gradient(p, c)),
            },
            EffectEntry {
                name: "rainbow",
                description: "hue wheel around the origin, rotating over time",
                params: &[Param::Time],
                effect: Effect::Color(|p, c, i| color::rainbow(p, c, i.time)),
            },
            EffectEntry {
                name: "wave",
                description: "vertical ripple, 5px amplitude",
                params: &[Param::Time],
                effect: Effect::Distortion(|p, i| distortion::wave(p, i.time)),
            },
            EffectEntry {
                name: "relativeWave",
                description: "vertical ripple growing toward the right edge",
                params: &[Param::Time, Param::Size],
                effect: Effect::Distortion(|p, i| distortion::relative_wave(p, i.time, i.size)),
            },
            EffectEntry {
                name: "loupe",
                description: "magnifying lens under the pointer",
                params: &[Param::Size, Param::Touch],
                effect: Effect::Layer(|p, l, i| layer::loupe(p, l, i.size, i.touch)),
            },
            EffectEntry {
                name: "circles",
                description: "dissolve-in through a grid of cells",
                params: &[Param::Size, Param::Amount],
                effect: Effect::Color(|p, c, i| color::circles(p, c, i.size, i.amount)),
            },
            EffectEntry {
                name: "crosswarp",
                description: "squeeze toward the centre and fade out",
                params: &[Param::Size, Param::Amount],
                effect: Effect::Layer(|p, l, i| layer::crosswarp(p, l, i.size, i.amount)),
            },
            EffectEntry {
                name: "sinebow",
                description: "ten drifting sine lines in shifting hues",
                params: &[Param::Size, Param::Time],
                effect: Effect::Color(|p, c, i| color::sinebow(p, c, i.size, i.time)),
            },
        ];
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn entry(&self, index: usize) -> Option<&EffectEntry> {
        self.entries.get(index)
    }

    /// Position of `name` in catalogue order.
    ///
    /// Matching is exact first, then case-insensitive, then ignoring `-` and
    /// `_`, so `invert-alpha` finds `invertAlpha`.
    pub fn index_of(&self, name: &str) -> Result<usize, Error> {
        if let Some(i) = self.entries.iter().position(|e| e.name == name) {
            return Ok(i);
        }
        if let Some(i) = self.entries.iter().position(|e| e.name.eq_ignore_ascii_case(name)) {
            return Ok(i);
        }
        let wanted = squash(name);
        self.entries
            .iter()
            .position(|e| squash(e.name) == wanted)
            .ok_or_else(|| Error::UnknownEffect(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&EffectEntry, Error> {
        let index = self.index_of(name)?;
        Ok(&self.entries[index])
    }
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
