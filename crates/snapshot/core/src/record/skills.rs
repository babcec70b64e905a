//! Skill progression and the profession derived from it.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// The closed set of skills an entity can train.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    // Combat
    Melee,
    Range,
    Mage,
    Defense,

    // Gathering
    Fishing,
    Hunting,
    Food,
    Carving,
    Alchemy,
    Herbalism,
    Water,
    Prospecting,
}

impl SkillKind {
    /// Combat styles that decide an entity's profession.
    pub const COMBAT_STYLES: [SkillKind; 3] = [SkillKind::Melee, SkillKind::Range, SkillKind::Mage];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Experience and level for one skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub exp: u64,
    pub level: u32,
}

impl SkillRecord {
    pub const fn new(exp: u64, level: u32) -> Self {
        Self { exp, level }
    }

    /// Orders by experience first, level second.
    pub fn standing_cmp(&self, other: &Self) -> Ordering {
        self.exp
            .cmp(&other.exp)
            .then_with(|| self.level.cmp(&other.level))
    }
}

/// Profession shown for an entity, derived from its combat skills.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Profession {
    /// No single combat style leads.
    #[default]
    None,
    Warrior,
    Archer,
    Mage,
}

impl Profession {
    pub const fn for_style(style: SkillKind) -> Self {
        match style {
            SkillKind::Melee => Profession::Warrior,
            SkillKind::Range => Profession::Archer,
            SkillKind::Mage => Profession::Mage,
            _ => Profession::None,
        }
    }
}

/// Fixed table of skills, one optional slot per [`SkillKind`].
///
/// A slot is allocated the first time an update mentions that skill and is
/// reused afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroupRecord {
    skills: [Option<SkillRecord>; SkillKind::COUNT],
    /// Highest skill level as reported by the server.
    pub level: Option<u32>,
}

impl SkillGroupRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: SkillKind) -> Option<&SkillRecord> {
        self.skills[kind.index()].as_ref()
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> Option<&mut SkillRecord> {
        self.skills[kind.index()].as_mut()
    }

    /// Returns the slot for `kind`, allocating a zeroed record on first use.
    pub fn get_or_insert(&mut self, kind: SkillKind) -> &mut SkillRecord {
        self.skills[kind.index()].get_or_insert_with(SkillRecord::default)
    }

    pub fn insert(&mut self, kind: SkillKind, record: SkillRecord) -> Option<SkillRecord> {
        self.skills[kind.index()].replace(record)
    }

    /// Iterates populated skills in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, &SkillRecord)> + '_ {
        use strum::IntoEnumIterator;

        SkillKind::iter().filter_map(move |kind| self.get(kind).map(|record| (kind, record)))
    }

    /// Derives the profession from melee, range and mage.
    ///
    /// The style with the highest standing (experience, then level) wins.
    /// Missing skills count as zero. When the two leading styles have the same
    /// experience the result is [`Profession::None`], whatever their levels.
    ///
    /// Computed on demand; nothing is cached by the merge step.
    pub fn dominant_profession(&self) -> Profession {
        let mut ranked = SkillKind::COMBAT_STYLES
            .map(|style| (style, self.get(style).copied().unwrap_or_default()));

        ranked.sort_by(|(_, a), (_, b)| b.standing_cmp(a));

        let (leader, best) = ranked[0];
        let (_, runner_up) = ranked[1];
        if best.exp == runner_up.exp {
            Profession::None
        } else {
            Profession::for_style(leader)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(melee: (u64, u32), range: (u64, u32), mage: (u64, u32)) -> SkillGroupRecord {
        let mut skills = SkillGroupRecord::empty();
        skills.insert(SkillKind::Melee, SkillRecord::new(melee.0, melee.1));
        skills.insert(SkillKind::Range, SkillRecord::new(range.0, range.1));
        skills.insert(SkillKind::Mage, SkillRecord::new(mage.0, mage.1));
        skills
    }

    #[test]
    fn all_equal_is_no_profession() {
        let skills = group((100, 3), (100, 3), (100, 3));
        assert_eq!(skills.dominant_profession(), Profession::None);
    }

    #[test]
    fn strictly_leading_melee_is_warrior() {
        let skills = group((250, 4), (100, 3), (90, 3));
        assert_eq!(skills.dominant_profession(), Profession::Warrior);
    }

    #[test]
    fn tie_between_top_two_is_no_profession() {
        let skills = group((10, 1), (300, 5), (300, 5));
        assert_eq!(skills.dominant_profession(), Profession::None);
    }

    #[test]
    fn equal_experience_ignores_levels() {
        let skills = group((100, 1), (100, 2), (100, 3));
        assert_eq!(skills.dominant_profession(), Profession::None);
    }

    #[test]
    fn top_two_experience_tie_ignores_levels() {
        let skills = group((10, 9), (300, 2), (300, 5));
        assert_eq!(skills.dominant_profession(), Profession::None);
    }

    #[test]
    fn experience_decides_before_level() {
        let skills = group((90, 9), (100, 1), (95, 8));
        assert_eq!(skills.dominant_profession(), Profession::Archer);
    }

    #[test]
    fn missing_skills_count_as_zero() {
        let mut skills = SkillGroupRecord::empty();
        assert_eq!(skills.dominant_profession(), Profession::None);

        skills.insert(SkillKind::Range, SkillRecord::new(1, 1));
        assert_eq!(skills.dominant_profession(), Profession::Archer);
    }

    #[test]
    fn non_combat_skills_do_not_count() {
        let mut skills = group((5, 1), (5, 1), (5, 1));
        skills.insert(SkillKind::Fishing, SkillRecord::new(10_000, 10));
        assert_eq!(skills.dominant_profession(), Profession::None);
    }

    #[test]
    fn skill_names_are_snake_case() {
        assert_eq!(SkillKind::Prospecting.to_string(), "prospecting");
        assert_eq!("HERBALISM".parse::<SkillKind>().unwrap(), SkillKind::Herbalism);
    }
}
