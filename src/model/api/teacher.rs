use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    common::{Axis, Subject},
    registry::NewTeacher,
};

/// The body of a login-or-register request. The axis may be left out, as it
/// follows from the subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub eixo: Option<String>,
}

impl TryFrom<LoginRequest> for NewTeacher {
    type Error = Error;

    /// Validate a login request, trimming the name and resolving the subject
    /// and axis by their display names. A given axis must be the subject's.
    fn try_from(request: LoginRequest) -> Result<Self> {
        let missing = || Error::validation("Name and subject are required");

        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(missing)?
            .to_string();
        let subject: Subject = request
            .subject
            .filter(|s| !s.is_empty())
            .ok_or_else(missing)?
            .parse()
            .map_err(Error::Validation)?;
        let eixo = subject.axis();
        if let Some(requested) = request.eixo.filter(|s| !s.is_empty()) {
            let requested: Axis = requested.parse().map_err(Error::Validation)?;
            if requested != eixo {
                return Err(Error::validation(format!(
                    "Subject '{subject}' belongs to axis '{eixo}', not '{requested}'"
                )));
            }
        }

        Ok(Self {
            name,
            subject,
            eixo,
        })
    }
}

#[cfg(test)]
mod examples {
    use super::*;

    impl LoginRequest {
        pub fn example() -> Self {
            Self {
                name: Some("Maria Aparecida Souza".into()),
                subject: Some("História".into()),
                eixo: Some("Ciências Humanas e Sociais Aplicadas".into()),
            }
        }

        pub fn example2() -> Self {
            Self {
                name: Some("João Pereira".into()),
                subject: Some("Geografia".into()),
                eixo: Some("Ciências Humanas e Sociais Aplicadas".into()),
            }
        }
    }
}
