pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("collect error: {0}")]
    Collect(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn collect(msg: impl Into<String>) -> Self {
        Self::Collect(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            CarouselError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            CarouselError::collect("x")
                .to_string()
                .contains("collect error:")
        );
        assert!(
            CarouselError::encode("x")
                .to_string()
                .contains("encode error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = CarouselError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
