//! Localized content table.
//!
//! Text is addressed by the closed [`ContentKey`] set rather than by free-form
//! strings, so a table can be checked for completeness when it is loaded. A
//! strict table ([`ContentTable::new`]) refuses to load with gaps; a lenient
//! one ([`ContentTable::lenient`]) loads anyway and renders the visible
//! `[MISSING TEXT: KEY]` placeholder on lookup. Lookups never fail.
//!
//! Template entries contain named placeholders in braces, filled in by
//! [`ContentTable::format`]:
//!
//! ```rust
//! use compass_core::{ContentKey, ContentTable, Language};
//!
//! let table = ContentTable::builtin();
//! let counter = table.format(
//!     Language::En,
//!     ContentKey::StepCounter,
//!     &[("current", "3".to_string()), ("total", "8".to_string())],
//! );
//! assert_eq!(counter, "Step 3/8");
//! ```

use std::{borrow::Cow, collections::HashMap, fmt, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CompassError, IoResultExt, Result},
    models::Language,
};

/// Every piece of text the questionnaire can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKey {
    Title,
    Subtitle,
    GeneralDisclaimer,
    Yes,
    No,
    Next,
    Back,
    StartOver,
    /// Template with `{current}` and `{total}`
    StepCounter,
    VasMicrocopy,
    ResultTitle,
    /// Template with `{score}`
    ResultSubtitlePain,
    ResultBreakdown,
    ScoreNow,
    ScoreAfter,
    ScoreAkns,
    AknsYes,
    AknsNo,
    FillAllFields,
    Urgent,
    NoPain,
    WorstPain,
    StartQuizPrompt,
    ViewResult,
    DesignCredit,
    AdviceUrgentShort,
    AdviceUrgentLong,
    AdviceLowShort,
    AdviceLowLong,
    AdviceModerateShort,
    AdviceModerateLong,
    AdviceHighShort,
    AdviceHighLong,
    WarningWalkStairs,
    WarningRunJump,
}

impl ContentKey {
    /// The complete key set, used for completeness checks.
    pub const ALL: [ContentKey; 35] = [
        ContentKey::Title,
        ContentKey::Subtitle,
        ContentKey::GeneralDisclaimer,
        ContentKey::Yes,
        ContentKey::No,
        ContentKey::Next,
        ContentKey::Back,
        ContentKey::StartOver,
        ContentKey::StepCounter,
        ContentKey::VasMicrocopy,
        ContentKey::ResultTitle,
        ContentKey::ResultSubtitlePain,
        ContentKey::ResultBreakdown,
        ContentKey::ScoreNow,
        ContentKey::ScoreAfter,
        ContentKey::ScoreAkns,
        ContentKey::AknsYes,
        ContentKey::AknsNo,
        ContentKey::FillAllFields,
        ContentKey::Urgent,
        ContentKey::NoPain,
        ContentKey::WorstPain,
        ContentKey::StartQuizPrompt,
        ContentKey::ViewResult,
        ContentKey::DesignCredit,
        ContentKey::AdviceUrgentShort,
        ContentKey::AdviceUrgentLong,
        ContentKey::AdviceLowShort,
        ContentKey::AdviceLowLong,
        ContentKey::AdviceModerateShort,
        ContentKey::AdviceModerateLong,
        ContentKey::AdviceHighShort,
        ContentKey::AdviceHighLong,
        ContentKey::WarningWalkStairs,
        ContentKey::WarningRunJump,
    ];

    /// Key name as written in content files.
    pub fn name(&self) -> String {
        serde_json::to_value(self)
            .ok()
            .and_then(|value| value.as_str().map(String::from))
            .unwrap_or_else(|| format!("{self:?}"))
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

type Entries = HashMap<Language, HashMap<ContentKey, String>>;

/// Per-language text for every [`ContentKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    entries: Entries,
}

impl ContentTable {
    /// Creates a table, failing with [`CompassError::MissingContent`] on the
    /// first key without text in some language.
    pub fn new(entries: Entries) -> Result<Self> {
        let table = Self { entries };
        if let Some((language, key)) = table.missing().into_iter().next() {
            return Err(CompassError::MissingContent {
                language,
                key: key.name(),
            });
        }
        Ok(table)
    }

    /// Creates a table without the completeness check. Gaps render as
    /// placeholders.
    pub fn lenient(entries: Entries) -> Self {
        Self { entries }
    }

    /// The built-in Dutch and English content.
    pub fn builtin() -> Self {
        let mut entries = Entries::new();
        entries.insert(Language::Nl, to_map(DUTCH));
        entries.insert(Language::En, to_map(ENGLISH));
        Self { entries }
    }

    /// Parses `{"nl": {"TITLE": "..."}, "en": {...}}` and merges it over the
    /// built-in content, then checks completeness. Keys left out keep their
    /// built-in text; a blank override counts as missing.
    pub fn from_json_overrides(json: &str) -> Result<Self> {
        let overrides: Entries = serde_json::from_str(json)?;
        let mut table = Self::builtin();
        for (language, texts) in overrides {
            table.entries.entry(language).or_default().extend(texts);
        }
        Self::new(table.entries)
    }

    /// Loads overrides from a JSON file, see [`Self::from_json_overrides`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).fs_context(path)?;
        Self::from_json_overrides(&json)
    }

    /// All `(language, key)` pairs without text.
    pub fn missing(&self) -> Vec<(Language, ContentKey)> {
        Language::ALL
            .iter()
            .flat_map(|&language| {
                ContentKey::ALL
                    .iter()
                    .filter(move |key| self.raw(language, **key).is_none())
                    .map(move |&key| (language, key))
            })
            .collect()
    }

    fn raw(&self, language: Language, key: ContentKey) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|texts| texts.get(&key))
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Text for `key`, or a visible placeholder when the table has a gap.
    pub fn text(&self, language: Language, key: ContentKey) -> Cow<'_, str> {
        match self.raw(language, key) {
            Some(text) => Cow::Borrowed(text),
            None => {
                warn!("No {language} text for content key {key}");
                Cow::Owned(format!("[MISSING TEXT: {key}]"))
            }
        }
    }

    /// Text for a template key with each `{name}` replaced by its value.
    pub fn format(&self, language: Language, key: ContentKey, args: &[(&str, String)]) -> String {
        args.iter()
            .fold(self.text(language, key).into_owned(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_map(texts: &[(ContentKey, &str)]) -> HashMap<ContentKey, String> {
    texts
        .iter()
        .map(|(key, text)| (*key, (*text).to_string()))
        .collect()
}

const DUTCH: &[(ContentKey, &str)] = &[
    (ContentKey::Title, "Knie belasting compas"),
    (ContentKey::Subtitle, "ADVISEREND hulpmiddel bij patello femoraal pijnsyndroom"),
    (ContentKey::GeneralDisclaimer, "De informatie in deze app is niet bedoeld als medisch advies en vervangt geen consult bij een arts of fysiotherapeut. Gebruik van deze app is op eigen risico. Bij twijfel, verandering of verergering van klachten wordt geadviseerd direct contact op te nemen met een huisarts of fysiotherapeut. De ontwikkelaars aanvaarden geen aansprakelijkheid voor enige schade voortvloeiend uit het gebruik van deze app."),
    (ContentKey::Yes, "JA"),
    (ContentKey::No, "NEE"),
    (ContentKey::Next, "Volgende"),
    (ContentKey::Back, "Terug"),
    (ContentKey::StartOver, "Start opnieuw"),
    (ContentKey::StepCounter, "Stap {current}/{total}"),
    (ContentKey::VasMicrocopy, "Tik een getal. Score 0 = geen pijn, 10 = ergste pijn."),
    (ContentKey::ResultTitle, "Uw advies"),
    (ContentKey::ResultSubtitlePain, "Gebaseerd op uw hoogste pijnscore: {score}"),
    (ContentKey::ResultBreakdown, "Score overzicht:"),
    (ContentKey::ScoreNow, "Pijn nu (VAS):"),
    (ContentKey::ScoreAfter, "Pijn na activiteit (VAS):"),
    (ContentKey::ScoreAkns, "Screening/Functionele klachten:"),
    (ContentKey::AknsYes, "Ja, klachten nemen toe."),
    (ContentKey::AknsNo, "Nee, klachten nemen niet toe."),
    (ContentKey::FillAllFields, "Vul alle antwoorden in voordat u verder gaat."),
    (ContentKey::Urgent, "Urgent"),
    (ContentKey::NoPain, "Geen pijn"),
    (ContentKey::WorstPain, "Ergste pijn"),
    (ContentKey::StartQuizPrompt, "Welkom. Druk op Enter om te starten."),
    (ContentKey::ViewResult, "Bekijk resultaat"),
    (ContentKey::DesignCredit, "Ontworpen en gebouwd door Sija Van Den Heuvel."),
    (ContentKey::AdviceUrgentShort, "Advies: Neem contact op met uw huisarts of fysiotherapeut."),
    (ContentKey::AdviceUrgentLong, "Advies: Neem contact op met uw huisarts of fysiotherapeut voor advies. Door de verandering in uw situatie en/ of uw klachten is het advies uit deze app niet meer relevant voor uw situatie."),
    (ContentKey::AdviceLowShort, "Advies: Doe rustig aan vandaag."),
    (ContentKey::AdviceLowLong, "Probeer te bewegen op een manier waarbij u de knie niet veel belast. Denk hierbij aan fietsen op een lage versnelling of korte stukjes wandelen. Als de pijn hierdoor toeneemt neem dan rust. Vermijd explosieve bewegingen zoals hardlopen of springen waar mogelijk. Bij lang aanhoudende pijn neemt contact op met een fysiotherapeut."),
    (ContentKey::AdviceModerateShort, "Advies: U kunt vandaag uw belastende activiteiten opbouwen."),
    (ContentKey::AdviceModerateLong, "Probeer over te gaan op rust of niet belastende vormen van bewegingen als de pijn een score van 6 of hoger krijgt. Vermijd nu nog explosieve bewegingen zoals sprinten of springen waar mogelijk. Bij lang aanhoudende pijn neemt contact op met een fysiotherapeut."),
    (ContentKey::AdviceHighShort, "Advies: U kunt vandaag uw belastende activiteiten opbouwen. U kunt ook uw explosieve oefeningen opbouwen zolang dit geen pijn veroorzaakt."),
    (ContentKey::AdviceHighLong, "U kunt ook uw explosieve oefeningen opbouwen zolang dit geen pijn veroorzaakt. Probeer over te gaan op rust of niet belastende vormen van bewegingen als de pijn een score van 6 of hoger krijgt."),
    (ContentKey::WarningWalkStairs, "Let op: uw pijn wordt duidelijk erger bij lopen of traplopen. Pas activiteiten extra aan en overleg bij aanhoudende klachten."),
    (ContentKey::WarningRunJump, "Let op: uw pijn wordt duidelijk erger bij springen of rennen. Pas activiteiten extra aan en overleg bij aanhoudende klachten."),
];

const ENGLISH: &[(ContentKey, &str)] = &[
    (ContentKey::Title, "Knee Load Compass"),
    (ContentKey::Subtitle, "ADVISORY tool for Patellofemoral Pain Syndrome"),
    (ContentKey::GeneralDisclaimer, "The information in this app is not intended as medical advice and does not replace consultation with a doctor or physiotherapist. Use of this app is at your own risk. If in doubt, or if symptoms change or worsen, it is advised to contact a general practitioner or physiotherapist immediately. The developers accept no liability for any damage resulting from the use of this app."),
    (ContentKey::Yes, "YES"),
    (ContentKey::No, "NO"),
    (ContentKey::Next, "Next"),
    (ContentKey::Back, "Back"),
    (ContentKey::StartOver, "Start Over"),
    (ContentKey::StepCounter, "Step {current}/{total}"),
    (ContentKey::VasMicrocopy, "Type a number. Score 0 = no pain, 10 = worst pain."),
    (ContentKey::ResultTitle, "Your Advice"),
    (ContentKey::ResultSubtitlePain, "Based on your highest pain score: {score}"),
    (ContentKey::ResultBreakdown, "Score Breakdown:"),
    (ContentKey::ScoreNow, "Pain now (VAS):"),
    (ContentKey::ScoreAfter, "Pain after activity (VAS):"),
    (ContentKey::ScoreAkns, "Screening/Functional complaints:"),
    (ContentKey::AknsYes, "Yes, symptoms increase."),
    (ContentKey::AknsNo, "No, symptoms do not increase."),
    (ContentKey::FillAllFields, "Please fill in all answers before proceeding."),
    (ContentKey::Urgent, "Urgent"),
    (ContentKey::NoPain, "No pain"),
    (ContentKey::WorstPain, "Worst pain"),
    (ContentKey::StartQuizPrompt, "Welcome. Press Enter to start."),
    (ContentKey::ViewResult, "View Result"),
    (ContentKey::DesignCredit, "Designed and built by Sija Van Den Heuvel."),
    (ContentKey::AdviceUrgentShort, "Advice: Contact your GP or physiotherapist."),
    (ContentKey::AdviceUrgentLong, "Advice: Contact your GP or physiotherapist immediately for advice. Due to the change in your situation and/or symptoms, the advice from this app is no longer relevant for you."),
    (ContentKey::AdviceLowShort, "Advice: Take it easy today."),
    (ContentKey::AdviceLowLong, "Try moving in ways that do not stress the knee much. Consider cycling at a low gear or taking short walks. If pain increases, rest. Avoid explosive movements like running or jumping where possible. If pain persists for a long time, contact a physiotherapist."),
    (ContentKey::AdviceModerateShort, "Advice: You can gradually increase your load-bearing activities today."),
    (ContentKey::AdviceModerateLong, "Try switching to rest or low-impact movements if the pain reaches a score of 6 or higher. Avoid explosive movements like sprinting or jumping for now where possible. If pain persists for a long time, contact a physiotherapist."),
    (ContentKey::AdviceHighShort, "Advice: You can gradually increase your load-bearing activities today. You can also build up your explosive exercises as long as they do not cause pain."),
    (ContentKey::AdviceHighLong, "You can also build up your explosive exercises as long as they do not cause pain. Try switching to rest or low-impact movements if the pain reaches a score of 6 or higher."),
    (ContentKey::WarningWalkStairs, "Note: your pain clearly worsens with walking or stair climbing. Adjust activities additionally and consult if symptoms persist."),
    (ContentKey::WarningRunJump, "Note: your pain clearly worsens with jumping or running. Adjust activities additionally and consult if symptoms persist."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_complete() {
        let table = ContentTable::builtin();
        assert!(table.missing().is_empty());
        assert!(ContentTable::new(table.entries.clone()).is_ok());
    }

    #[test]
    fn test_key_names_are_screaming_snake_case() {
        assert_eq!(ContentKey::Title.name(), "TITLE");
        assert_eq!(ContentKey::AdviceUrgentShort.name(), "ADVICE_URGENT_SHORT");
        assert_eq!(ContentKey::ResultSubtitlePain.to_string(), "RESULT_SUBTITLE_PAIN");
    }

    #[test]
    fn test_strict_table_rejects_gaps() {
        let mut entries = ContentTable::builtin().entries;
        entries
            .get_mut(&Language::En)
            .unwrap()
            .remove(&ContentKey::WarningRunJump);

        let err = ContentTable::new(entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing content for key 'WARNING_RUN_JUMP' in language 'en'"
        );
    }

    #[test]
    fn test_lenient_table_renders_placeholder() {
        let mut entries = ContentTable::builtin().entries;
        entries.remove(&Language::En);
        let table = ContentTable::lenient(entries);

        assert_eq!(
            table.text(Language::En, ContentKey::Title),
            "[MISSING TEXT: TITLE]"
        );
        assert_eq!(table.text(Language::Nl, ContentKey::Title), "Knie belasting compas");
        assert_eq!(table.missing().len(), ContentKey::ALL.len());
    }

    #[test]
    fn test_format_fills_named_placeholders() {
        let table = ContentTable::builtin();
        let subtitle = table.format(
            Language::Nl,
            ContentKey::ResultSubtitlePain,
            &[("score", "6".to_string())],
        );
        assert_eq!(subtitle, "Gebaseerd op uw hoogste pijnscore: 6");
    }

    #[test]
    fn test_json_overrides_merge_over_builtin() {
        let table =
            ContentTable::from_json_overrides(r#"{"en": {"TITLE": "Knee Compass"}}"#).unwrap();
        assert_eq!(table.text(Language::En, ContentKey::Title), "Knee Compass");
        assert_eq!(table.text(Language::Nl, ContentKey::Title), "Knie belasting compas");

        assert!(ContentTable::from_json_overrides(r#"{"en": {"NOT_A_KEY": "x"}}"#).is_err());
    }

    #[test]
    fn test_blank_override_is_missing_content() {
        let err = ContentTable::from_json_overrides(r#"{"nl": {"URGENT": "  "}}"#).unwrap_err();
        match err {
            CompassError::MissingContent { language, key } => {
                assert_eq!(language, Language::Nl);
                assert_eq!(key, "URGENT");
            }
            other => panic!("Expected MissingContent error, got {other:?}"),
        }
    }
}
