use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Axis;

/// A subject a teacher can register with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Arte")]
    Art,
    #[serde(rename = "Biologia")]
    Biology,
    #[serde(rename = "Geografia")]
    Geography,
    #[serde(rename = "História")]
    History,
    #[serde(rename = "Filosofia")]
    Philosophy,
    #[serde(rename = "Sociologia")]
    Sociology,
    #[serde(rename = "Língua Inglesa")]
    English,
    #[serde(rename = "Língua Portuguesa")]
    Portuguese,
    #[serde(rename = "Matemática")]
    Mathematics,
    #[serde(rename = "Física")]
    Physics,
    #[serde(rename = "Química")]
    Chemistry,
    #[serde(rename = "Projetos de Vida")]
    LifeProjects,
    #[serde(rename = "Pensamento Computacional")]
    ComputationalThinking,
    #[serde(rename = "Programação")]
    Programming,
    #[serde(rename = "Educação Física")]
    PhysicalEducation,
}

impl Subject {
    pub const ALL: [Subject; 15] = [
        Self::Art,
        Self::Biology,
        Self::Geography,
        Self::History,
        Self::Philosophy,
        Self::Sociology,
        Self::English,
        Self::Portuguese,
        Self::Mathematics,
        Self::Physics,
        Self::Chemistry,
        Self::LifeProjects,
        Self::ComputationalThinking,
        Self::Programming,
        Self::PhysicalEducation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Art => "Arte",
            Self::Biology => "Biologia",
            Self::Geography => "Geografia",
            Self::History => "História",
            Self::Philosophy => "Filosofia",
            Self::Sociology => "Sociologia",
            Self::English => "Língua Inglesa",
            Self::Portuguese => "Língua Portuguesa",
            Self::Mathematics => "Matemática",
            Self::Physics => "Física",
            Self::Chemistry => "Química",
            Self::LifeProjects => "Projetos de Vida",
            Self::ComputationalThinking => "Pensamento Computacional",
            Self::Programming => "Programação",
            Self::PhysicalEducation => "Educação Física",
        }
    }
}

impl Subject {
    /// The axis whose books a teacher of this subject votes on.
    pub fn axis(self) -> Axis {
        match self {
            Self::Geography
            | Self::History
            | Self::Philosophy
            | Self::Sociology
            | Self::LifeProjects => Axis::Humanities,
            Self::Biology | Self::Physics | Self::Chemistry => Axis::NaturalSciences,
            Self::Art | Self::English | Self::Portuguese | Self::PhysicalEducation => {
                Axis::Languages
            }
            Self::Mathematics => Axis::Mathematics,
            Self::ComputationalThinking | Self::Programming => Axis::Computing,
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.name() == s)
            .ok_or_else(|| format!("Unknown subject '{s}'"))
    }
}
