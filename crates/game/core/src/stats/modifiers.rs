//! Temporary attribute modifiers (buffs, debuffs, absorb shields).
//!
//! Modifiers live in a flat collection and totals are summed on demand for
//! every query. Nothing is cached, so a modifier granted mid-turn or one that
//! expired at the last turn boundary is reflected by the very next roll.

/// Attribute a modifier adjusts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeType {
    /// Raises the defense threshold against armor-checked attacks.
    Armor,
    /// Raises the defense threshold against body-checked attacks.
    Body,
    /// Raises the defense threshold against mind-checked attacks.
    Mind,
    /// Raises the defense threshold against soul-checked attacks.
    Soul,
    /// Soaks incoming damage before hit points are lost; depleted as it soaks.
    Absorb,
    /// Extra movement per action (read by the movement collaborator).
    Movement,
}

/// Where a modifier came from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeSource {
    #[default]
    Circumstance,
    Item,
    Spiritual,
    Status,
}

/// A single timed (or permanent) modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeModifier {
    pub kind: AttributeType,
    pub amount: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: AttributeSource,
    /// Turns remaining. `None` lasts until something external clears it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

impl AttributeModifier {
    /// Create a permanent modifier.
    pub fn new(kind: AttributeType, amount: i32, source: AttributeSource) -> Self {
        Self {
            kind,
            amount,
            source,
            duration: None,
        }
    }

    /// Limit the modifier to a number of turns (builder pattern).
    #[must_use]
    pub fn with_duration(mut self, turns: u32) -> Self {
        self.duration = Some(turns);
        self
    }

    /// Returns false once the duration has run out.
    pub fn is_active(&self) -> bool {
        self.duration.is_none_or(|turns| turns > 0)
    }
}

/// The live collection of modifiers on one squaddie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeModifierSet {
    modifiers: Vec<AttributeModifier>,
}

impl AttributeModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier.
    ///
    /// Returns false (and stores nothing) for a modifier that has already expired.
    pub fn add(&mut self, modifier: AttributeModifier) -> bool {
        if !modifier.is_active() {
            return false;
        }
        self.modifiers.push(modifier);
        true
    }

    /// Sum of every active modifier of the given type.
    pub fn total(&self, kind: AttributeType) -> i32 {
        self.active(kind).map(|modifier| modifier.amount).sum()
    }

    /// Active modifiers of the given type, in the order they were granted.
    pub fn active(&self, kind: AttributeType) -> impl Iterator<Item = &AttributeModifier> {
        self.modifiers
            .iter()
            .filter(move |modifier| modifier.kind == kind && modifier.is_active())
    }

    /// Soak up to `damage` with absorb modifiers, oldest first.
    ///
    /// Each absorb modifier loses what it soaks; spent ones are removed.
    /// Returns the amount absorbed.
    pub fn absorb_damage(&mut self, damage: u32) -> u32 {
        let mut remaining = damage;
        for modifier in self
            .modifiers
            .iter_mut()
            .filter(|modifier| modifier.kind == AttributeType::Absorb && modifier.is_active())
        {
            if remaining == 0 {
                break;
            }
            let capacity = modifier.amount.max(0) as u32;
            let soaked = capacity.min(remaining);
            modifier.amount -= soaked as i32;
            remaining -= soaked;
        }
        self.modifiers
            .retain(|modifier| modifier.kind != AttributeType::Absorb || modifier.amount > 0);
        damage - remaining
    }

    /// Tick every timed modifier down by one turn.
    pub fn decrement_durations(&mut self) {
        for turns in self
            .modifiers
            .iter_mut()
            .filter_map(|modifier| modifier.duration.as_mut())
        {
            *turns = turns.saturating_sub(1);
        }
    }

    /// Remove every modifier whose duration reached zero.
    pub fn prune_expired(&mut self) {
        self.modifiers.retain(AttributeModifier::is_active);
    }

    /// Remove every modifier from a source (dispel, item unequipped).
    pub fn remove_source(&mut self, source: AttributeSource) {
        self.modifiers.retain(|modifier| modifier.source != source);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeModifier> {
        self.modifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
