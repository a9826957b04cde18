use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolocronError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid phone number '{value}'. Phone number must be 10 digits young Padawan")]
    InvalidPhone { value: String },

    #[error("Invalid birthday date '{value}'. Birthday date must be <DD.MM.YYYY> format")]
    InvalidBirthday { value: String },

    #[error("Invalid Email '{value}'. Do or do not. There is no try")]
    InvalidEmail { value: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Cannot remove the last phone number of {name}")]
    CannotRemoveLastPhone { name: String },

    #[error("Wrong number of arguments. Usage: {usage}")]
    WrongArity { usage: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl HolocronError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn wrong_arity(usage: &str) -> Self {
        Self::WrongArity {
            usage: usage.into(),
        }
    }

    /// True for malformed input, failed lookups and arity mistakes.
    /// Everything else is an infrastructure failure.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::Database(_) | Self::Io(_) | Self::Json(_) | Self::Other(_)
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BlankField { .. }
                | Self::InvalidPhone { .. }
                | Self::InvalidBirthday { .. }
                | Self::InvalidEmail { .. }
        )
    }
}

pub type HolocronResult<T> = Result<T, HolocronError>;
