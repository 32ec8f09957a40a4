//! Error types for the Larder core library.

/// Errors that can occur while converting, consolidating or exporting.
///
/// Most variants describe problems in the input data (recipes, plans,
/// units). The list-building operations treat those as recoverable: they
/// log them and carry on. See [`Error::is_data_error`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No direct conversion factor exists between two units
    #[error("No conversion from '{from}' to '{to}'")]
    UnsupportedConversion {
        /// Unit the quantity is expressed in
        from: String,
        /// Unit that was requested
        to: String,
    },

    /// A recipe declares zero (or missing) base servings
    #[error("Recipe '{recipe_id}' has invalid base servings: {servings}")]
    InvalidServings {
        /// Recipe whose servings are unusable
        recipe_id: String,
        /// The offending servings value
        servings: u32,
    },

    /// A meal slot references a recipe the lookup does not know
    #[error("Recipe not found: {id}")]
    RecipeNotFound {
        /// Recipe ID that was not found
        id: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (reading plans, recipes or config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience `Result` type alias for Larder operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error stems from the input data itself.
    ///
    /// Data errors are never fatal to shopping list generation: the
    /// offending conversion, slot or recipe is logged and skipped.
    pub fn is_data_error(&self) -> bool {
        match self {
            Error::UnsupportedConversion { .. } => true,
            Error::InvalidServings { .. } => true,
            Error::RecipeNotFound { .. } => true,
            Error::Serialization(_) => true,
            Error::Config { .. } => false,
            Error::Io(_) => false,
            Error::Toml(_) => false,
        }
    }

    /// Creates a new unsupported conversion error.
    pub fn unsupported_conversion<F, T>(from: F, to: T) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        Error::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a new recipe-not-found error.
    pub fn recipe_not_found<S: Into<String>>(id: S) -> Self {
        Error::RecipeNotFound { id: id.into() }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
