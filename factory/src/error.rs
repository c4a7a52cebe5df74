use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building and rendering registry descriptors.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "Could not determine {}. Environment variable '{}' is empty.",
        what,
        variable
    ))]
    MissingIdentity {
        what: &'static str,
        variable: &'static str,
    },

    #[snafu(display("An ingress requires the name of the service it routes to."))]
    MissingBackend,

    #[snafu(display("Invalid quantity '{}'", value))]
    InvalidQuantity { value: String },

    #[snafu(display("Unable to read file '{}': {}", path.display(), source))]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Unable to {}: {}", action, source))]
    Yaml {
        action: String,
        source: serde_yaml::Error,
    },

    #[snafu(display("Unable to serialize {}: {}", what, source))]
    Model {
        what: String,
        source: registry_model::Error,
    },
}

impl Error {
    /// Whether the error means the process is misconfigured and must not continue. Other errors
    /// are caller mistakes scoped to a single request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::MissingIdentity { .. })
    }
}
