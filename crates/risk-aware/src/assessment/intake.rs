use std::collections::BTreeSet;

use super::domain::{field, Age, AnswerOption, AnswerSet, QuestionnaireSubmission, Symptom};

/// Validation errors raised while building an `AnswerSet`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("missing answer for `{field}`")]
    MissingField { field: &'static str },
    #[error("age must be between 12 and 100 (found {found})")]
    AgeOutOfRange { found: i64 },
    #[error("`{value}` is not a valid answer for `{field}`")]
    UnknownOption { field: &'static str, value: String },
}

impl InvalidInput {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            InvalidInput::MissingField { field } | InvalidInput::UnknownOption { field, .. } => {
                *field
            }
            InvalidInput::AgeOutOfRange { .. } => field::AGE,
        }
    }
}

/// Guard responsible for producing `AnswerSet` instances.
///
/// Fields are checked in questionnaire order and the first problem is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Convert a raw submission into a validated answer set.
    pub fn answer_set_from_submission(
        &self,
        submission: QuestionnaireSubmission,
    ) -> Result<AnswerSet, InvalidInput> {
        let QuestionnaireSubmission {
            age,
            gender,
            relationship_status,
            sexual_activity,
            condom_use,
            unprotected_sex72h,
            partner_status,
            shared_needles,
            unlicensed_tattoo,
            blood_contact,
            symptoms,
            previous_test,
            time_since_exposure,
        } = submission;

        let age = Age::new(required(age, field::AGE)?)?;
        let gender = choice(gender)?;
        let relationship_status = choice(relationship_status)?;
        let sexual_activity = choice(sexual_activity)?;
        let condom_use = choice(condom_use)?;
        let unprotected_sex72h = required(unprotected_sex72h, field::UNPROTECTED_SEX_72H)?;
        let partner_status = choice(partner_status)?;
        let shared_needles = required(shared_needles, field::SHARED_NEEDLES)?;
        let unlicensed_tattoo = required(unlicensed_tattoo, field::UNLICENSED_TATTOO)?;
        let blood_contact = required(blood_contact, field::BLOOD_CONTACT)?;
        let symptoms = symptoms
            .iter()
            .map(|raw| Symptom::parse_answer(raw))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let previous_test = choice(previous_test)?;
        let time_since_exposure = choice(time_since_exposure)?;

        Ok(AnswerSet {
            age,
            gender,
            relationship_status,
            sexual_activity,
            condom_use,
            unprotected_sex72h,
            partner_status,
            shared_needles,
            unlicensed_tattoo,
            blood_contact,
            symptoms,
            previous_test,
            time_since_exposure,
        })
    }
}

impl TryFrom<QuestionnaireSubmission> for AnswerSet {
    type Error = InvalidInput;

    fn try_from(submission: QuestionnaireSubmission) -> Result<Self, Self::Error> {
        IntakeGuard::new().answer_set_from_submission(submission)
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, InvalidInput> {
    value.ok_or(InvalidInput::MissingField { field })
}

fn choice<T: AnswerOption>(value: Option<String>) -> Result<T, InvalidInput> {
    let raw = required(value, T::FIELD)?;
    T::parse_answer(&raw)
}
