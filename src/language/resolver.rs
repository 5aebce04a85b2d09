//! Language name resolution.

use std::sync::Arc;

use log::debug;

use crate::error::{Result, StopwordError};
use crate::language::{LanguageCode, LanguageDetector, LanguageDirectory, LanguageName};

/// Turns detected codes into canonical language names.
///
/// There is no default language: a code missing from the directory is always
/// [`StopwordError::UnknownLanguageCode`].
#[derive(Clone)]
pub struct LanguageResolver {
    directory: Arc<LanguageDirectory>,
    detector: Arc<dyn LanguageDetector>,
}

impl LanguageResolver {
    pub fn new(directory: Arc<LanguageDirectory>, detector: Arc<dyn LanguageDetector>) -> Self {
        LanguageResolver {
            directory,
            detector,
        }
    }

    /// Look `code` up in the directory.
    pub fn resolve(&self, code: &LanguageCode) -> Result<LanguageName> {
        self.directory
            .get(code)
            .cloned()
            .ok_or_else(|| StopwordError::unknown_language_code(code.as_str()))
    }

    /// Detect the language of `text` and resolve its name.
    pub fn detect_and_resolve(&self, text: &str) -> Result<(LanguageCode, LanguageName)> {
        let code = self.detector.detect(text)?;
        debug!("Detected language code: {code}");
        let name = self.resolve(&code)?;
        debug!("Detected language: {name}");
        Ok((code, name))
    }

    pub fn directory(&self) -> &Arc<LanguageDirectory> {
        &self.directory
    }
}

impl std::fmt::Debug for LanguageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResolver")
            .field("directory", &self.directory.len())
            .field("detector", &self.detector.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(&'static str);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Result<LanguageCode> {
            Ok(LanguageCode::new(self.0))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn resolver(code: &'static str) -> LanguageResolver {
        LanguageResolver::new(
            Arc::new(LanguageDirectory::bundled().unwrap()),
            Arc::new(FixedDetector(code)),
        )
    }

    #[test]
    fn test_resolve_known_code() {
        let resolver = resolver("en");
        assert_eq!(
            resolver.resolve(&LanguageCode::new("en")).unwrap(),
            LanguageName::new("english")
        );
    }

    #[test]
    fn test_unknown_code_never_defaults() {
        let resolver = resolver("xx");
        for _ in 0..3 {
            match resolver.resolve(&LanguageCode::new("xx")) {
                Err(StopwordError::UnknownLanguageCode(code)) => assert_eq!(code, "xx"),
                other => panic!("expected unknown code, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_detect_and_resolve() {
        let (code, name) = resolver("fr").detect_and_resolve("bonjour").unwrap();
        assert_eq!(code.as_str(), "fr");
        assert_eq!(name.as_str(), "french");

        assert!(matches!(
            resolver("xx").detect_and_resolve("???"),
            Err(StopwordError::UnknownLanguageCode(_))
        ));
    }
}
