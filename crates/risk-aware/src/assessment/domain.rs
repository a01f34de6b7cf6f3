use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::intake::InvalidInput;

/// Wire names of the questionnaire fields, shared by intake errors and the questionnaire view.
pub mod field {
    pub const AGE: &str = "age";
    pub const GENDER: &str = "gender";
    pub const RELATIONSHIP_STATUS: &str = "relationshipStatus";
    pub const SEXUAL_ACTIVITY: &str = "sexualActivity";
    pub const CONDOM_USE: &str = "condomUse";
    pub const UNPROTECTED_SEX_72H: &str = "unprotectedSex72h";
    pub const PARTNER_STATUS: &str = "partnerStatus";
    pub const SHARED_NEEDLES: &str = "sharedNeedles";
    pub const UNLICENSED_TATTOO: &str = "unlicensedTattoo";
    pub const BLOOD_CONTACT: &str = "bloodContact";
    pub const SYMPTOMS: &str = "symptoms";
    pub const PREVIOUS_TEST: &str = "previousTest";
    pub const TIME_SINCE_EXPOSURE: &str = "timeSinceExposure";
}

/// Closed set of answers for a single-choice (or multi-select) question.
///
/// `token` is the stable wire value, `label` the wording shown on the form. Parsing accepts
/// either, ignoring ASCII case and surrounding whitespace.
pub trait AnswerOption: Copy + Sized + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn token(self) -> &'static str;
    fn label(self) -> &'static str;

    fn parse_answer(raw: &str) -> Result<Self, InvalidInput> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| {
                option.token().eq_ignore_ascii_case(needle)
                    || option.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| InvalidInput::UnknownOption {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }
}

/// Respondent age in whole years, always within the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 12;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 18;

    pub fn new(years: i64) -> Result<Self, InvalidInput> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&years) {
            Ok(Self(years as u8))
        } else {
            Err(InvalidInput::AgeOutOfRange { found: years })
        }
    }

    pub const fn years(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Unspecified,
    Female,
    Male,
    Other,
}

impl AnswerOption for Gender {
    const FIELD: &'static str = field::GENDER;
    const ALL: &'static [Self] = &[Self::Unspecified, Self::Female, Self::Male, Self::Other];

    fn token(self) -> &'static str {
        match self {
            Gender::Unspecified => "unspecified",
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Gender::Unspecified => "Prefer not to say",
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Non-binary/Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipStatus {
    Single,
    Partnered,
    Married,
    Unspecified,
}

impl AnswerOption for RelationshipStatus {
    const FIELD: &'static str = field::RELATIONSHIP_STATUS;
    const ALL: &'static [Self] = &[
        Self::Single,
        Self::Partnered,
        Self::Married,
        Self::Unspecified,
    ];

    fn token(self) -> &'static str {
        match self {
            RelationshipStatus::Single => "single",
            RelationshipStatus::Partnered => "partnered",
            RelationshipStatus::Married => "married",
            RelationshipStatus::Unspecified => "unspecified",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RelationshipStatus::Single => "Single",
            RelationshipStatus::Partnered => "In a relationship",
            RelationshipStatus::Married => "Married",
            RelationshipStatus::Unspecified => "Prefer not to say",
        }
    }
}

/// Sexual activity in the last three months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SexualActivity {
    None,
    OnePartner,
    MultiplePartners,
}

impl AnswerOption for SexualActivity {
    const FIELD: &'static str = field::SEXUAL_ACTIVITY;
    const ALL: &'static [Self] = &[Self::None, Self::OnePartner, Self::MultiplePartners];

    fn token(self) -> &'static str {
        match self {
            SexualActivity::None => "none",
            SexualActivity::OnePartner => "onePartner",
            SexualActivity::MultiplePartners => "multiplePartners",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SexualActivity::None => "No",
            SexualActivity::OnePartner => "Yes, 1 partner",
            SexualActivity::MultiplePartners => "Yes, multiple partners",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CondomUse {
    Always,
    Mostly,
    Sometimes,
    Never,
}

impl AnswerOption for CondomUse {
    const FIELD: &'static str = field::CONDOM_USE;
    const ALL: &'static [Self] = &[Self::Always, Self::Mostly, Self::Sometimes, Self::Never];

    fn token(self) -> &'static str {
        match self {
            CondomUse::Always => "always",
            CondomUse::Mostly => "mostly",
            CondomUse::Sometimes => "sometimes",
            CondomUse::Never => "never",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CondomUse::Always => "Always",
            CondomUse::Mostly => "Mostly",
            CondomUse::Sometimes => "Sometimes",
            CondomUse::Never => "Never",
        }
    }
}

/// Partner's HIV status as known to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartnerStatus {
    Negative,
    Positive,
    Unknown,
}

impl AnswerOption for PartnerStatus {
    const FIELD: &'static str = field::PARTNER_STATUS;
    const ALL: &'static [Self] = &[Self::Negative, Self::Positive, Self::Unknown];

    fn token(self) -> &'static str {
        match self {
            PartnerStatus::Negative => "negative",
            PartnerStatus::Positive => "positive",
            PartnerStatus::Unknown => "unknown",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PartnerStatus::Negative => "Negative",
            PartnerStatus::Positive => "Positive",
            PartnerStatus::Unknown => "Unknown",
        }
    }
}

/// Symptoms noticed in the last few weeks. `None` is the explicit "nothing to report" choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Symptom {
    Fever,
    NightSweats,
    SwollenLymphNodes,
    Rash,
    Fatigue,
    WeightLoss,
    SoreThroat,
    None,
}

impl Symptom {
    /// Symptoms that count towards the rubric's symptom bonus.
    pub const fn is_weighted(self) -> bool {
        match self {
            Symptom::Fever
            | Symptom::NightSweats
            | Symptom::WeightLoss
            | Symptom::SwollenLymphNodes => true,
            Symptom::Rash | Symptom::Fatigue | Symptom::SoreThroat | Symptom::None => false,
        }
    }
}

impl AnswerOption for Symptom {
    const FIELD: &'static str = field::SYMPTOMS;
    const ALL: &'static [Self] = &[
        Self::Fever,
        Self::NightSweats,
        Self::SwollenLymphNodes,
        Self::Rash,
        Self::Fatigue,
        Self::WeightLoss,
        Self::SoreThroat,
        Self::None,
    ];

    fn token(self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::NightSweats => "nightSweats",
            Symptom::SwollenLymphNodes => "swollenLymphNodes",
            Symptom::Rash => "rash",
            Symptom::Fatigue => "fatigue",
            Symptom::WeightLoss => "weightLoss",
            Symptom::SoreThroat => "soreThroat",
            Symptom::None => "none",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::NightSweats => "Night sweats",
            Symptom::SwollenLymphNodes => "Swollen lymph nodes",
            Symptom::Rash => "Rash",
            Symptom::Fatigue => "Fatigue",
            Symptom::WeightLoss => "Unexplained weight loss",
            Symptom::SoreThroat => "Sore throat",
            Symptom::None => "None",
        }
    }
}

/// Most recent HIV test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreviousTest {
    Never,
    Over1Year,
    Within6Months,
    Within1Month,
}

impl AnswerOption for PreviousTest {
    const FIELD: &'static str = field::PREVIOUS_TEST;
    const ALL: &'static [Self] = &[
        Self::Never,
        Self::Over1Year,
        Self::Within6Months,
        Self::Within1Month,
    ];

    fn token(self) -> &'static str {
        match self {
            PreviousTest::Never => "never",
            PreviousTest::Over1Year => "over1Year",
            PreviousTest::Within6Months => "within6Months",
            PreviousTest::Within1Month => "within1Month",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PreviousTest::Never => "Never",
            PreviousTest::Over1Year => "Over 1 year ago",
            PreviousTest::Within6Months => "Within last 6 months",
            PreviousTest::Within1Month => "Within last month",
        }
    }
}

/// How long ago a possible exposure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeSinceExposure {
    None,
    Under72h,
    ThreeDaysToSixWeeks,
    OverSixWeeks,
}

impl TimeSinceExposure {
    /// True while post-exposure prophylaxis can still be started.
    pub const fn within_pep_window(self) -> bool {
        matches!(self, TimeSinceExposure::Under72h)
    }
}

impl AnswerOption for TimeSinceExposure {
    const FIELD: &'static str = field::TIME_SINCE_EXPOSURE;
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Under72h,
        Self::ThreeDaysToSixWeeks,
        Self::OverSixWeeks,
    ];

    fn token(self) -> &'static str {
        match self {
            TimeSinceExposure::None => "none",
            TimeSinceExposure::Under72h => "under72h",
            TimeSinceExposure::ThreeDaysToSixWeeks => "threeDaysToSixWeeks",
            TimeSinceExposure::OverSixWeeks => "overSixWeeks",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TimeSinceExposure::None => "No known exposure",
            TimeSinceExposure::Under72h => "Less than 72 hours",
            TimeSinceExposure::ThreeDaysToSixWeeks => "3 days – 6 weeks",
            TimeSinceExposure::OverSixWeeks => "More than 6 weeks",
        }
    }
}

impl FromStr for Gender {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for RelationshipStatus {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for SexualActivity {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for CondomUse {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for PartnerStatus {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for Symptom {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for PreviousTest {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

impl FromStr for TimeSinceExposure {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_answer(raw)
    }
}

/// Raw questionnaire answers exactly as a form, JSON body or command line delivered them.
///
/// Nothing here is trusted; `IntakeGuard` turns it into an `AnswerSet` or an `InvalidInput`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSubmission {
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub relationship_status: Option<String>,
    pub sexual_activity: Option<String>,
    pub condom_use: Option<String>,
    pub unprotected_sex72h: Option<bool>,
    pub partner_status: Option<String>,
    pub shared_needles: Option<bool>,
    pub unlicensed_tattoo: Option<bool>,
    pub blood_contact: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symptoms: Vec<String>,
    pub previous_test: Option<String>,
    pub time_since_exposure: Option<String>,
}

// A multi-select with nothing chosen may arrive as `null` or not at all.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A complete, validated set of one session's answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub age: Age,
    pub gender: Gender,
    pub relationship_status: RelationshipStatus,
    pub sexual_activity: SexualActivity,
    pub condom_use: CondomUse,
    pub unprotected_sex72h: bool,
    pub partner_status: PartnerStatus,
    pub shared_needles: bool,
    pub unlicensed_tattoo: bool,
    pub blood_contact: bool,
    pub symptoms: BTreeSet<Symptom>,
    pub previous_test: PreviousTest,
    pub time_since_exposure: TimeSinceExposure,
}

impl AnswerSet {
    /// Reported symptoms, ignoring the explicit "none" choice.
    pub fn reported_symptoms(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.symptoms
            .iter()
            .copied()
            .filter(|symptom| *symptom != Symptom::None)
    }

    pub fn has_weighted_symptom(&self) -> bool {
        self.symptoms.iter().any(|symptom| symptom.is_weighted())
    }

    pub fn needle_or_blood_exposure(&self) -> bool {
        self.shared_needles || self.unlicensed_tattoo || self.blood_contact
    }
}
