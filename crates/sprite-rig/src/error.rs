use thiserror::Error;

/// Failures raised by name-based sub-sprite operations.
///
/// All errors surface synchronously at the call site; nothing is caught or
/// retried internally. Offset arithmetic and list composition are statically
/// typed, so the only runtime failures are registry-key ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RigError {
    /// A sub-sprite is already registered under this name. Remove it first
    /// or pick another name.
    #[error("\"{0}\" is already the name of a sub-sprite")]
    DuplicateName(String),

    /// No sub-sprite is registered under this name.
    #[error("\"{0}\" is not the name of a sub-sprite")]
    NameNotFound(String),
}

pub type Result<T> = std::result::Result<T, RigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        let err = RigError::NameNotFound("arm".into());
        assert_eq!(err.to_string(), "\"arm\" is not the name of a sub-sprite");

        let err = RigError::DuplicateName("arm".into());
        assert_eq!(err.to_string(), "\"arm\" is already the name of a sub-sprite");
    }
}
