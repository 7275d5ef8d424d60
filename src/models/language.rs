use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bn,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Bn => "bn",
            Language::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Bn => "বাংলা",
            Language::En => "English",
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::Bn => Language::En,
            Language::En => Language::Bn,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bn" | "bangla" | "bengali" => Ok(Language::Bn),
            "en" | "english" => Ok(Language::En),
            _ => Err(anyhow::anyhow!("Unknown language: {} (use bn or en)", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("BN".parse::<Language>().unwrap(), Language::Bn);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn toggled_flips_between_languages() {
        assert_eq!(Language::Bn.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }
}
