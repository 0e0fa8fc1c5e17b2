use uc_syntax::Tokenizer;

use crate::ServerError;

pub const DEFAULT_ENDPOINT: &str = "tcp://127.0.0.1:32132";
pub const DEFAULT_LANGUAGE: &str = "python";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// ZeroMQ endpoint the reply socket binds to.
    pub endpoint: String,
    /// Source language requests must name.
    pub language: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            language: language.into(),
        }
    }

    pub fn check_language(&self, tokenizer: &dyn Tokenizer) -> Result<(), ServerError> {
        if self.language.eq_ignore_ascii_case(tokenizer.language()) {
            Ok(())
        } else {
            Err(ServerError::UnsupportedLanguage {
                configured: self.language.clone(),
                available: tokenizer.language(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_lexer::PythonTokenizer;

    #[test]
    fn defaults_are_loopback_python() {
        let config = ServerConfig::default();
        assert!(config.endpoint.starts_with("tcp://127.0.0.1:"));
        assert_eq!(config.language, "python");
        assert!(config.check_language(&PythonTokenizer).is_ok());
    }

    #[test]
    fn other_languages_are_refused() {
        let config = ServerConfig::new(DEFAULT_ENDPOINT, "ruby");
        let err = config.check_language(&PythonTokenizer).unwrap_err();
        assert!(matches!(err, ServerError::UnsupportedLanguage { .. }));
    }
}
