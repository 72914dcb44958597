#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("cannot parse key: {0}")]
    MalformedKey(String),

    #[error("a service set cannot be an object with no related host: {0}")]
    ObjectWithoutHost(String),

    #[error("service set template \"{0}\" already exists")]
    DuplicateTemplateName(String),
}
