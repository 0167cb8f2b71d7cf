use serde::{Deserialize, Serialize};

/// Languages a learner can study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Spanish,
    French,
    Italian,
    English,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 4] = [
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::Italian,
        TargetLanguage::English,
    ];

    /// Total lookup on the exact id: anything else resolves to Spanish.
    pub fn resolve(id: &str) -> Self {
        match id {
            "spanish" => TargetLanguage::Spanish,
            "french" => TargetLanguage::French,
            "italian" => TargetLanguage::Italian,
            "english" => TargetLanguage::English,
            _ => TargetLanguage::Spanish,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "spanish",
            TargetLanguage::French => "french",
            TargetLanguage::Italian => "italian",
            TargetLanguage::English => "english",
        }
    }

    pub fn display_name(self) -> &'static str {
        self.config().label
    }

    pub fn config(self) -> &'static LanguageConfig {
        match self {
            TargetLanguage::Spanish => &SPANISH,
            TargetLanguage::French => &FRENCH,
            TargetLanguage::Italian => &ITALIAN,
            TargetLanguage::English => &ENGLISH,
        }
    }
}

/// Display metadata for a target language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub id: TargetLanguage,
    pub label: &'static str,
    pub flag: &'static str,
    pub native_name: &'static str,
    /// BCP 47 tag for speech synthesis and recognition.
    pub speech_lang: &'static str,
    pub greeting: &'static str,
    pub congrats_message: &'static str,
    pub welcome_back: &'static str,
    pub goodbye: &'static str,
}

static SPANISH: LanguageConfig = LanguageConfig {
    id: TargetLanguage::Spanish,
    label: "Spanish",
    flag: "🇪🇸",
    native_name: "Español",
    speech_lang: "es-ES",
    greeting: "¡Hola!",
    congrats_message: "¡Felicidades!",
    welcome_back: "¡Bienvenido!",
    goodbye: "¡Hasta luego!",
};

static FRENCH: LanguageConfig = LanguageConfig {
    id: TargetLanguage::French,
    label: "French",
    flag: "🇫🇷",
    native_name: "Français",
    speech_lang: "fr-FR",
    greeting: "Bonjour !",
    congrats_message: "Félicitations !",
    welcome_back: "Bienvenue !",
    goodbye: "Au revoir !",
};

static ITALIAN: LanguageConfig = LanguageConfig {
    id: TargetLanguage::Italian,
    label: "Italian",
    flag: "🇮🇹",
    native_name: "Italiano",
    speech_lang: "it-IT",
    greeting: "Ciao!",
    congrats_message: "Congratulazioni!",
    welcome_back: "Benvenuto!",
    goodbye: "Arrivederci!",
};

static ENGLISH: LanguageConfig = LanguageConfig {
    id: TargetLanguage::English,
    label: "English",
    flag: "🇬🇧",
    native_name: "English",
    speech_lang: "en-US",
    greeting: "Hello!",
    congrats_message: "Congratulations!",
    welcome_back: "Welcome back!",
    goodbye: "Goodbye!",
};

pub fn language_list() -> Vec<&'static LanguageConfig> {
    TargetLanguage::ALL.iter().map(|lang| lang.config()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_ids() {
        assert_eq!(TargetLanguage::resolve("french"), TargetLanguage::French);
        assert_eq!(TargetLanguage::resolve("italian"), TargetLanguage::Italian);
        assert_eq!(TargetLanguage::resolve("english"), TargetLanguage::English);
    }

    #[test]
    fn test_unknown_language_falls_back_to_spanish() {
        assert_eq!(TargetLanguage::resolve("klingon"), TargetLanguage::Spanish);
        assert_eq!(TargetLanguage::resolve(""), TargetLanguage::Spanish);
        assert_eq!(TargetLanguage::resolve("klingon").display_name(), "Spanish");
    }

    #[test]
    fn test_resolve_is_exact() {
        assert_eq!(TargetLanguage::resolve("Italian"), TargetLanguage::Spanish);
        assert_eq!(TargetLanguage::resolve(" english "), TargetLanguage::Spanish);
        assert_eq!(TargetLanguage::resolve("FRENCH"), TargetLanguage::Spanish);
    }

    #[test]
    fn test_registry_entries_are_consistent() {
        for lang in TargetLanguage::ALL {
            let config = lang.config();
            assert_eq!(config.id, lang);
            assert_eq!(TargetLanguage::resolve(lang.id()), lang);
            assert!(config.speech_lang.contains('-'));
        }
        assert_eq!(language_list().len(), 4);
    }
}
