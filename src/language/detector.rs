//! Language detection.

use log::{debug, warn};
use whatlang::Lang;

use crate::error::{Result, StopwordError};
use crate::language::LanguageCode;

/// Guesses the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Return the best-guess two-letter code for `text`.
    ///
    /// Fails with [`StopwordError::DetectionFailed`] when no language can be
    /// determined; never returns a placeholder code.
    fn detect(&self, text: &str) -> Result<LanguageCode>;

    /// Get the name of this detector (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Detector backed by the `whatlang` trigram models.
#[derive(Clone, Debug, Default)]
pub struct WhatlangDetector {
    require_reliable: bool,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject guesses whatlang itself marks as unreliable.
    pub fn require_reliable(mut self, require: bool) -> Self {
        self.require_reliable = require;
        self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<LanguageCode> {
        if text.trim().is_empty() {
            return Err(StopwordError::detection("text is empty"));
        }

        let info = whatlang::detect(text)
            .ok_or_else(|| StopwordError::detection("no language matched the text"))?;

        debug!(
            "whatlang guessed {} (confidence {:.2}, reliable: {})",
            info.lang().code(),
            info.confidence(),
            info.is_reliable()
        );

        if !info.is_reliable() {
            if self.require_reliable {
                return Err(StopwordError::detection(format!(
                    "guess '{}' is not reliable (confidence {:.2})",
                    info.lang().code(),
                    info.confidence()
                )));
            }
            warn!(
                "Language guess '{}' is not reliable, using it anyway",
                info.lang().code()
            );
        }

        iso639_1(info.lang()).map(LanguageCode::new).ok_or_else(|| {
            StopwordError::detection(format!(
                "'{}' has no two-letter language code",
                info.lang().code()
            ))
        })
    }

    fn name(&self) -> &'static str {
        "whatlang"
    }
}

/// Map whatlang's ISO 639-3 languages to ISO 639-1 codes.
#[allow(unreachable_patterns)]
fn iso639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Afr => "af",
        Lang::Aka => "ak",
        Lang::Amh => "am",
        Lang::Ara => "ar",
        Lang::Aze => "az",
        Lang::Bel => "be",
        Lang::Ben => "bn",
        Lang::Bul => "bg",
        Lang::Cat => "ca",
        Lang::Ces => "cs",
        Lang::Cmn => "zh",
        Lang::Dan => "da",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Eng => "en",
        Lang::Epo => "eo",
        Lang::Est => "et",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hrv => "hr",
        Lang::Hun => "hu",
        Lang::Hye => "hy",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jav => "jv",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kat => "ka",
        Lang::Khm => "km",
        Lang::Kor => "ko",
        Lang::Lat => "la",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Mkd => "mk",
        Lang::Mya => "my",
        Lang::Nep => "ne",
        Lang::Nld => "nl",
        Lang::Nob => "no",
        Lang::Ori => "or",
        Lang::Pan => "pa",
        Lang::Pes => "fa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Sin => "si",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Sna => "sn",
        Lang::Spa => "es",
        Lang::Srp => "sr",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tgl => "tl",
        Lang::Tha => "th",
        Lang::Tuk => "tk",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Uzb => "uz",
        Lang::Vie => "vi",
        Lang::Yid => "yi",
        Lang::Zul => "zu",
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageDirectory;

    const ENGLISH: &str = "The quick brown fox jumps over the lazy dog while the farmer \
                           watches from the porch and drinks his morning coffee.";
    const FRENCH: &str = "Le renard brun rapide saute par-dessus le chien paresseux pendant \
                          que le fermier regarde depuis la terrasse et boit son café.";
    const GERMAN: &str = "Der schnelle braune Fuchs springt über den faulen Hund, während der \
                          Bauer von der Veranda aus zuschaut und seinen Kaffee trinkt.";

    #[test]
    fn test_detects_common_languages() {
        let detector = WhatlangDetector::new();
        assert_eq!(detector.detect(ENGLISH).unwrap().as_str(), "en");
        assert_eq!(detector.detect(FRENCH).unwrap().as_str(), "fr");
        assert_eq!(detector.detect(GERMAN).unwrap().as_str(), "de");
    }

    #[test]
    fn test_empty_text_fails() {
        let detector = WhatlangDetector::new();
        for text in ["", "   \n\t"] {
            assert!(matches!(
                detector.detect(text),
                Err(StopwordError::DetectionFailed(_))
            ));
        }
    }

    #[test]
    fn test_unintelligible_text_never_yields_a_code() {
        let detector = WhatlangDetector::new();
        let result = detector.detect("1234 5678 !!! ???");
        assert!(matches!(result, Err(StopwordError::DetectionFailed(_))));
    }

    const CATALAN: &str = "La guineu marró ràpida salta per sobre del gos mandrós mentre el \
                           pagès mira des del porxo i es beu el cafè del matí. Els veïns \
                           diuen que aquesta és la millor època de l'any per anar a \
                           collir bolets al bosc, però cal vigilar amb la pluja.";

    #[test]
    fn test_iso_mapping() {
        assert_eq!(iso639_1(Lang::Eng), Some("en"));
        assert_eq!(iso639_1(Lang::Nob), Some("no"));
        assert_eq!(iso639_1(Lang::Cmn), Some("zh"));
        assert_eq!(iso639_1(Lang::Cat), Some("ca"));
    }

    #[test]
    fn test_every_whatlang_language_has_a_directory_code() {
        let directory = LanguageDirectory::bundled().unwrap();
        for &lang in Lang::all() {
            let code = iso639_1(lang).unwrap_or_else(|| panic!("{lang:?} has no code"));
            assert!(
                directory.get(&LanguageCode::new(code)).is_some(),
                "{lang:?} maps to '{code}' which the directory lacks"
            );
        }
    }

    #[test]
    fn test_catalan_resolves_to_a_code() {
        let detector = WhatlangDetector::new();
        assert_eq!(detector.detect(CATALAN).unwrap().as_str(), "ca");
    }

    #[test]
    fn test_detector_name() {
        assert_eq!(WhatlangDetector::new().name(), "whatlang");
    }
}
