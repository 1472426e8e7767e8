use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rocket::request::FromParam;
use serde::{Deserialize, Serialize};

/// The knowledge areas ("eixos") that books are selected for.
/// Teachers vote within exactly one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "Ciências Humanas e Sociais Aplicadas")]
    Humanities,
    #[serde(rename = "Ciências da Natureza e suas Tecnologias")]
    NaturalSciences,
    #[serde(rename = "Linguagens e suas Tecnologias")]
    Languages,
    #[serde(rename = "Matemática e suas Tecnologias")]
    Mathematics,
    #[serde(rename = "Programação e Pensamento Computacional")]
    Computing,
}

impl Axis {
    /// Every axis, in report order.
    pub const ALL: [Axis; 5] = [
        Self::Humanities,
        Self::NaturalSciences,
        Self::Languages,
        Self::Mathematics,
        Self::Computing,
    ];

    /// The display name, which is also the wire format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Humanities => "Ciências Humanas e Sociais Aplicadas",
            Self::NaturalSciences => "Ciências da Natureza e suas Tecnologias",
            Self::Languages => "Linguagens e suas Tecnologias",
            Self::Mathematics => "Matemática e suas Tecnologias",
            Self::Computing => "Programação e Pensamento Computacional",
        }
    }

    /// A short ASCII identifier, convenient in URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Humanities => "humanas",
            Self::NaturalSciences => "natureza",
            Self::Languages => "linguagens",
            Self::Mathematics => "matematica",
            Self::Computing => "computacao",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    /// Accepts either the display name or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.name() == s || axis.slug() == s)
            .ok_or_else(|| format!("Unknown axis '{s}'"))
    }
}

impl<'a> FromParam<'a> for Axis {
    type Error = String;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_name_or_slug() {
        for axis in Axis::ALL {
            assert_eq!(Ok(axis), axis.name().parse());
            assert_eq!(Ok(axis), axis.slug().parse());
        }
        assert!("Humanas".parse::<Axis>().is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = rocket::serde::json::to_string(&Axis::Mathematics).unwrap();
        assert_eq!(json, "\"Matemática e suas Tecnologias\"");
    }
}
