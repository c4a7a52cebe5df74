use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Unable to serialize '{}' as yaml: {}", name, source))]
    YamlSerialization {
        name: String,
        source: serde_yaml::Error,
    },
}
