use thiserror::Error;

/// A violated programming contract inside the rendering runtime.
///
/// This is never a user-facing condition: it signals a bug in the caller
/// (for example, invoking the bridge on the server without first installing
/// a work store for the render). It is not retried and not translated;
/// the enclosing render fails with it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invariant: {message}")]
pub struct InvariantError {
    message: &'static str,
}

impl InvariantError {
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::InvariantError;

    #[test]
    fn display_includes_contract_description() {
        let err = InvariantError::new("expected a work store for this render");
        assert_eq!(
            err.to_string(),
            "invariant: expected a work store for this render"
        );
    }
}
