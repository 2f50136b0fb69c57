use thiserror::Error;

/// Result type alias using DmError
pub type Result<T> = std::result::Result<T, DmError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that tests, log lines and the CLI
/// can rely on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmErrorKind {
    // Validation
    InvalidInput,
    InvalidPrice,
    ConstraintViolation,

    // Configuration
    Configuration,

    // Storage
    Persistence,
    Migration,
    ConnectionUnavailable,

    // Integration/IO
    Io,
}

impl DmErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DmErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            DmErrorKind::InvalidPrice => "ERR_INVALID_PRICE",
            DmErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            DmErrorKind::Configuration => "ERR_CONFIGURATION",
            DmErrorKind::Persistence => "ERR_PERSISTENCE",
            DmErrorKind::Migration => "ERR_MIGRATION",
            DmErrorKind::ConnectionUnavailable => "ERR_CONNECTION_UNAVAILABLE",
            DmErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation and
/// entity context needed to make sense of a failure in a log line.
#[derive(Debug, Clone)]
pub struct DmError {
    kind: DmErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<DmError>>,
}

impl DmError {
    /// Create a new error with the specified kind
    pub fn new(kind: DmErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: DmError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> DmErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&DmError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for DmError {
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
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for DmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for DishMenu
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    // ===== Validation Errors =====
    /// Price text could not be parsed as a two-digit fixed point amount
    #[error("Invalid price '{input}': {reason}")]
    InvalidPrice { input: String, reason: String },

    /// A bulk import document is not a list of dishes
    #[error("Invalid import document: {reason}")]
    InvalidImport { reason: String },

    // ===== Configuration Errors =====
    /// Settings file does not exist
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: String },

    /// Settings file exists but is not valid settings JSON
    #[error("Settings file {path} is malformed: {reason}")]
    SettingsMalformed { path: String, reason: String },

    /// Named connection string is not present in the settings
    #[error("Connection string '{name}' is not configured")]
    ConnectionStringMissing { name: String },

    /// Connection string does not describe a usable target
    #[error("Invalid connection string: {reason}")]
    InvalidConnectionString { reason: String },
}

impl From<MenuError> for DmError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::InvalidPrice { input, reason } => DmError::new(DmErrorKind::InvalidPrice)
                .with_op("parse_price")
                .with_message(format!("'{}': {}", input, reason)),

            MenuError::InvalidImport { reason } => DmError::new(DmErrorKind::InvalidInput)
                .with_op("parse_import")
                .with_message(reason),

            MenuError::SettingsNotFound { path } => DmError::new(DmErrorKind::Configuration)
                .with_op("load_settings")
                .with_entity_id(path)
                .with_message("Settings file not found"),

            MenuError::SettingsMalformed { path, reason } => {
                DmError::new(DmErrorKind::Configuration)
                    .with_op("load_settings")
                    .with_entity_id(path)
                    .with_message(reason)
            }

            MenuError::ConnectionStringMissing { name } => {
                DmError::new(DmErrorKind::Configuration)
                    .with_op("connection_string")
                    .with_entity_id(name)
                    .with_message("Connection string is not configured")
            }

            MenuError::InvalidConnectionString { reason } => {
                DmError::new(DmErrorKind::InvalidInput)
                    .with_op("parse_connection_string")
                    .with_message(reason)
            }
        }
    }
}
