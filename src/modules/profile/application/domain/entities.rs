use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of skills a student can rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Python,
    Java,
    #[serde(rename = "C++")]
    Cpp,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    JavaScript,
    #[serde(rename = "SQL")]
    Sql,
    #[serde(rename = "Node.js", alias = "Node js")]
    NodeJs,
}

impl Skill {
    pub const COUNT: usize = 8;

    pub const ALL: [Skill; Skill::COUNT] = [
        Skill::Python,
        Skill::Java,
        Skill::Cpp,
        Skill::Html,
        Skill::Css,
        Skill::JavaScript,
        Skill::Sql,
        Skill::NodeJs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Skill::Python => "Python",
            Skill::Java => "Java",
            Skill::Cpp => "C++",
            Skill::Html => "HTML",
            Skill::Css => "CSS",
            Skill::JavaScript => "JavaScript",
            Skill::Sql => "SQL",
            Skill::NodeJs => "Node.js",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill: {0}")]
pub struct SkillParseError(pub String);

impl FromStr for Skill {
    type Err = SkillParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == "Node js" {
            return Ok(Skill::NodeJs);
        }

        Skill::ALL
            .into_iter()
            .find(|skill| skill.as_str() == name)
            .ok_or_else(|| SkillParseError(s.to_string()))
    }
}

/// Slider value for one skill, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ProficiencyLevel(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Proficiency must be between 0 and 10, got {0}")]
pub struct ProficiencyError(pub i64);

impl ProficiencyLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;
    pub const DEFAULT: ProficiencyLevel = ProficiencyLevel(5);

    pub fn new(level: i64) -> Result<Self, ProficiencyError> {
        if level < i64::from(Self::MIN) || level > i64::from(Self::MAX) {
            return Err(ProficiencyError(level));
        }
        Ok(Self(level as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Share of the full scale, used to fill progress bars.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

impl Default for ProficiencyLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for ProficiencyLevel {
    type Error = ProficiencyError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<ProficiencyLevel> for u8 {
    fn from(level: ProficiencyLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One optional rating per skill, indexed by [`Skill`].
///
/// A skill is "selected" exactly when it has a rating. Serialized as a JSON
/// object keyed by skill name, in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Skill, ProficiencyLevel>",
    into = "BTreeMap<Skill, ProficiencyLevel>"
)]
pub struct SkillRatings([Option<ProficiencyLevel>; Skill::COUNT]);

impl SkillRatings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: Skill) -> Option<ProficiencyLevel> {
        self.0[skill.index()]
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.get(skill).is_some()
    }

    /// Sets the rating of `skill`, returning the previous one.
    pub fn rate(&mut self, skill: Skill, level: ProficiencyLevel) -> Option<ProficiencyLevel> {
        self.0[skill.index()].replace(level)
    }

    /// Replaces the selection. Skills that stay selected keep their level,
    /// new ones start at the default and the rest are dropped.
    ///
    /// The order of `skills` is not kept: [`SkillRatings::iter`] always
    /// yields skills in [`Skill`] declaration order.
    pub fn select_only(&mut self, skills: &[Skill]) {
        for skill in Skill::ALL {
            let slot = &mut self.0[skill.index()];
            if skills.contains(&skill) {
                slot.get_or_insert(ProficiencyLevel::DEFAULT);
            } else {
                *slot = None;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, ProficiencyLevel)> + '_ {
        Skill::ALL
            .into_iter()
            .zip(self.0.iter())
            .filter_map(|(skill, level)| level.map(|l| (skill, l)))
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|level| level.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Skill, ProficiencyLevel)> for SkillRatings {
    fn from_iter<I: IntoIterator<Item = (Skill, ProficiencyLevel)>>(iter: I) -> Self {
        let mut ratings = Self::new();
        for (skill, level) in iter {
            ratings.rate(skill, level);
        }
        ratings
    }
}

impl From<BTreeMap<Skill, ProficiencyLevel>> for SkillRatings {
    fn from(map: BTreeMap<Skill, ProficiencyLevel>) -> Self {
        map.into_iter().collect()
    }
}

impl From<SkillRatings> for BTreeMap<Skill, ProficiencyLevel> {
    fn from(ratings: SkillRatings) -> Self {
        ratings.iter().collect()
    }
}

pub const NO_CERTIFICATE: &str = "None";

/// Certificate file name captured at save time, `"None"` when nothing was attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateName {
    #[default]
    Absent,
    File(String),
}

impl CertificateName {
    pub fn as_str(&self) -> &str {
        match self {
            CertificateName::Absent => NO_CERTIFICATE,
            CertificateName::File(name) => name,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CertificateName::Absent)
    }
}

impl From<String> for CertificateName {
    fn from(name: String) -> Self {
        if name == NO_CERTIFICATE {
            CertificateName::Absent
        } else {
            CertificateName::File(name)
        }
    }
}

impl From<CertificateName> for String {
    fn from(name: CertificateName) -> Self {
        match name {
            CertificateName::Absent => NO_CERTIFICATE.to_string(),
            CertificateName::File(name) => name,
        }
    }
}

impl fmt::Display for CertificateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of a file staged in one of the upload inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedAttachment {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl StagedAttachment {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image")
    }
}

/// A saved student profile snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub bio: String,
    pub skills: SkillRatings,
    pub project_title: String,
    pub project_description: String,
    pub certificate_name: CertificateName,
}
