use thiserror::Error;

/// Result type alias using CityMoverError
pub type Result<T> = std::result::Result<T, CityMoverError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that front ends and tests can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Account
    DuplicateUsername,

    // Lookup
    NotFound,

    // Form input
    Validation,
    AreaNotAllowed,

    // Ownership / role
    Forbidden,

    // Storage
    Persistence,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DuplicateUsername => "ERR_DUPLICATE_USERNAME",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::AreaNotAllowed => "ERR_AREA_NOT_ALLOWED",
            ExErrorKind::Forbidden => "ERR_FORBIDDEN",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus enough context (operation, entity, form
/// field) for a front end to pick a localized message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add operation context unless a lower layer already set one
    pub fn with_op_if_missing(self, op: impl Into<String>) -> Self {
        if self.op.is_some() {
            self
        } else {
            self.with_op(op)
        }
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add the form field the error refers to
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for City Mover operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CityMoverError {
    // ===== Account Errors =====
    /// Username already taken
    #[error("Username already exists: {username}")]
    DuplicateUsername { username: String },

    /// No user matches the supplied username/password pair
    #[error("Invalid credentials for user: {username}")]
    InvalidCredentials { username: String },

    /// Role string is not one of user/owner/admin
    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    /// Acting user may not perform this operation
    #[error("User {user_id} with role {role} may not {action}")]
    RoleNotPermitted {
        user_id: i64,
        role: String,
        action: String,
    },

    // ===== Lookup Errors =====
    #[error("City not found: {city_id}")]
    CityNotFound { city_id: i64 },

    #[error("Property not found: {property_id}")]
    PropertyNotFound { property_id: i64 },

    // ===== Validation Errors =====
    /// Required form field is empty or whitespace-only
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Rent is not an integer
    #[error("Invalid rent: {value:?} is not a whole number")]
    InvalidRent { value: String },

    /// Latitude/longitude is not a number
    #[error("Invalid coordinate {field}: {value:?}")]
    InvalidCoordinates { field: String, value: String },

    /// Area is outside the city's active allow-list
    #[error("Area {area} is not open for listings in {city}")]
    AreaNotAllowed { city: String, area: String },
}

impl From<CityMoverError> for ExError {
    fn from(err: CityMoverError) -> Self {
        let message = err.to_string();
        match err {
            CityMoverError::DuplicateUsername { username } => {
                ExError::new(ExErrorKind::DuplicateUsername)
                    .with_entity_id(username)
                    .with_field("username")
                    .with_message(message)
            }

            CityMoverError::InvalidCredentials { username } => ExError::new(ExErrorKind::NotFound)
                .with_op("login")
                .with_entity_id(username)
                .with_message(message),

            CityMoverError::UnknownRole { .. } => ExError::new(ExErrorKind::Validation)
                .with_field("role")
                .with_message(message),

            CityMoverError::RoleNotPermitted { user_id, .. } => {
                ExError::new(ExErrorKind::Forbidden)
                    .with_entity_id(user_id)
                    .with_message(message)
            }

            CityMoverError::CityNotFound { city_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(city_id)
                .with_field("city")
                .with_message(message),

            CityMoverError::PropertyNotFound { property_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(property_id)
                    .with_message(message)
            }

            CityMoverError::MissingField { field } => ExError::new(ExErrorKind::Validation)
                .with_field(field)
                .with_message(message),

            CityMoverError::InvalidRent { .. } => ExError::new(ExErrorKind::Validation)
                .with_field("rent")
                .with_message(message),

            CityMoverError::InvalidCoordinates { field, .. } => {
                ExError::new(ExErrorKind::Validation)
                    .with_field(field)
                    .with_message(message)
            }

            CityMoverError::AreaNotAllowed { area, .. } => {
                ExError::new(ExErrorKind::AreaNotAllowed)
                    .with_entity_id(area)
                    .with_field("area")
                    .with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_field() {
        let err = ExError::new(ExErrorKind::Validation)
            .with_op("post_listing")
            .with_field("rent")
            .with_message("not a number");
        let s = err.to_string();
        assert!(s.starts_with("[ERR_VALIDATION]"));
        assert!(s.contains("post_listing"));
        assert!(s.contains("(field: rent)"));
    }

    #[test]
    fn test_with_op_if_missing_keeps_existing() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("login")
            .with_op_if_missing("signup");
        assert_eq!(err.op(), Some("login"));

        let err = ExError::new(ExErrorKind::NotFound).with_op_if_missing("signup");
        assert_eq!(err.op(), Some("signup"));
    }

    #[test]
    fn test_property_not_found_carries_id() {
        let err = ExError::from(CityMoverError::PropertyNotFound { property_id: 9 });
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("9"));
        assert_eq!(err.field(), None);
    }
}
