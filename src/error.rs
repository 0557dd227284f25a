//! Error type shared by every command in the crate

use thiserror::Error;

use crate::notice::Notice;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("{title}: {message}")]
    Unavailable { title: String, message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlatformError>;

impl PlatformError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    pub fn unavailable(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable { title: title.into(), message: message.into() }
    }

    /// Error toast shown to the user for this failure
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotFound { .. } => Notice::error("Registro não encontrado", self.to_string()),
            Self::Validation { message, .. } => Notice::error("Verifique os campos", message.clone()),
            Self::Unavailable { title, message } => Notice::error(title.clone(), message.clone()),
            _ => Notice::error("Erro inesperado", self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_unavailable_notice_keeps_title() {
        let err = PlatformError::unavailable(
            "Certificado não disponível",
            "Complete a aula para ter acesso ao certificado.",
        );
        let notice = err.notice();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Certificado não disponível");
        assert_eq!(notice.description, "Complete a aula para ter acesso ao certificado.");
    }

    #[test]
    fn test_validation_display() {
        let err = PlatformError::validation("student_name", "Nome do aluno é obrigatório");
        assert_eq!(err.to_string(), "invalid student_name: Nome do aluno é obrigatório");
        assert_eq!(err.notice().description, "Nome do aluno é obrigatório");
    }
}
