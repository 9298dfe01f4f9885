//! Question category value object

use crate::core::error::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Trivia topic (Value Object)
///
/// A closed set assigned by the provider. Each category has a display label,
/// which is what the provider returns in payloads, and an integer code used
/// when filtering a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionCategory {
    GeneralKnowledge,
    EntertainmentBooks,
    EntertainmentFilm,
    EntertainmentMusic,
    EntertainmentMusicalsAndTheatres,
    EntertainmentTelevision,
    EntertainmentVideoGames,
    EntertainmentBoardGames,
    ScienceAndNature,
    ScienceComputers,
    ScienceMathematics,
    Mythology,
    Sports,
    Geography,
    History,
    Politics,
    Art,
    Celebrities,
    Animals,
    Vehicles,
    EntertainmentComics,
    ScienceGadgets,
    EntertainmentJapaneseAnimeAndManga,
    EntertainmentCartoonAndAnimations,
}

impl QuestionCategory {
    /// Every category, in provider code order
    pub const ALL: [QuestionCategory; 24] = [
        QuestionCategory::GeneralKnowledge,
        QuestionCategory::EntertainmentBooks,
        QuestionCategory::EntertainmentFilm,
        QuestionCategory::EntertainmentMusic,
        QuestionCategory::EntertainmentMusicalsAndTheatres,
        QuestionCategory::EntertainmentTelevision,
        QuestionCategory::EntertainmentVideoGames,
        QuestionCategory::EntertainmentBoardGames,
        QuestionCategory::ScienceAndNature,
        QuestionCategory::ScienceComputers,
        QuestionCategory::ScienceMathematics,
        QuestionCategory::Mythology,
        QuestionCategory::Sports,
        QuestionCategory::Geography,
        QuestionCategory::History,
        QuestionCategory::Politics,
        QuestionCategory::Art,
        QuestionCategory::Celebrities,
        QuestionCategory::Animals,
        QuestionCategory::Vehicles,
        QuestionCategory::EntertainmentComics,
        QuestionCategory::ScienceGadgets,
        QuestionCategory::EntertainmentJapaneseAnimeAndManga,
        QuestionCategory::EntertainmentCartoonAndAnimations,
    ];

    /// Provider-assigned code, used as the `category` query parameter
    pub fn code(&self) -> u32 {
        match self {
            QuestionCategory::GeneralKnowledge => 9,
            QuestionCategory::EntertainmentBooks => 10,
            QuestionCategory::EntertainmentFilm => 11,
            QuestionCategory::EntertainmentMusic => 12,
            QuestionCategory::EntertainmentMusicalsAndTheatres => 13,
            QuestionCategory::EntertainmentTelevision => 14,
            QuestionCategory::EntertainmentVideoGames => 15,
            QuestionCategory::EntertainmentBoardGames => 16,
            QuestionCategory::ScienceAndNature => 17,
            QuestionCategory::ScienceComputers => 18,
            QuestionCategory::ScienceMathematics => 19,
            QuestionCategory::Mythology => 20,
            QuestionCategory::Sports => 21,
            QuestionCategory::Geography => 22,
            QuestionCategory::History => 23,
            QuestionCategory::Politics => 24,
            QuestionCategory::Art => 25,
            QuestionCategory::Celebrities => 26,
            QuestionCategory::Animals => 27,
            QuestionCategory::Vehicles => 28,
            QuestionCategory::EntertainmentComics => 29,
            QuestionCategory::ScienceGadgets => 30,
            QuestionCategory::EntertainmentJapaneseAnimeAndManga => 31,
            QuestionCategory::EntertainmentCartoonAndAnimations => 32,
        }
    }

    /// Label exactly as the provider spells it (after entity decoding)
    pub fn label(&self) -> &'static str {
        match self {
            QuestionCategory::GeneralKnowledge => "General Knowledge",
            QuestionCategory::EntertainmentBooks => "Entertainment: Books",
            QuestionCategory::EntertainmentFilm => "Entertainment: Film",
            QuestionCategory::EntertainmentMusic => "Entertainment: Music",
            QuestionCategory::EntertainmentMusicalsAndTheatres => {
                "Entertainment: Musicals & Theatres"
            }
            QuestionCategory::EntertainmentTelevision => "Entertainment: Television",
            QuestionCategory::EntertainmentVideoGames => "Entertainment: Video Games",
            QuestionCategory::EntertainmentBoardGames => "Entertainment: Board Games",
            QuestionCategory::ScienceAndNature => "Science & Nature",
            QuestionCategory::ScienceComputers => "Science: Computers",
            QuestionCategory::ScienceMathematics => "Science: Mathematics",
            QuestionCategory::Mythology => "Mythology",
            QuestionCategory::Sports => "Sports",
            QuestionCategory::Geography => "Geography",
            QuestionCategory::History => "History",
            QuestionCategory::Politics => "Politics",
            QuestionCategory::Art => "Art",
            QuestionCategory::Celebrities => "Celebrities",
            QuestionCategory::Animals => "Animals",
            QuestionCategory::Vehicles => "Vehicles",
            QuestionCategory::EntertainmentComics => "Entertainment: Comics",
            QuestionCategory::ScienceGadgets => "Science: Gadgets",
            QuestionCategory::EntertainmentJapaneseAnimeAndManga => {
                "Entertainment: Japanese Anime & Manga"
            }
            QuestionCategory::EntertainmentCartoonAndAnimations => {
                "Entertainment: Cartoon & Animations"
            }
        }
    }

    /// Exact-match lookup from a provider label
    ///
    /// Unrecognized labels are an error: a category added by the provider
    /// breaks decoding instead of being silently dropped.
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == label)
            .ok_or_else(|| DecodeError::UnknownCategory(label.to_string()))
    }

    /// Lookup by provider code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for QuestionCategory {
    type Err = DecodeError;

    /// Accepts either the provider label or its numeric code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return Self::from_code(code).ok_or_else(|| DecodeError::UnknownCategory(s.to_string()));
        }
        Self::from_label(s)
    }
}

impl Serialize for QuestionCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for QuestionCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
