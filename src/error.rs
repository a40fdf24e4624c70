use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown Moodle version: {0}")]
    UnknownMoodleVersion(String),
    #[error("invalid frankenstyle name: {0}")]
    InvalidFrankenstyleName(String),
    #[error("invalid plugin type: {0}")]
    InvalidPluginType(String),
    #[error("invalid plugin name")]
    InvalidPluginName,
    #[error("invalid Moodle version: {0}")]
    InvalidMoodleVersion(String),
}
