use serde::Serialize;

use super::domain::{
    field, Age, AnswerOption, CondomUse, Gender, PartnerStatus, PreviousTest, RelationshipStatus,
    SexualActivity, Symptom, TimeSinceExposure,
};

/// Groups of questions in the order a form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSection {
    PersonalInformation,
    ProtectionAndPartner,
    NeedleAndBloodExposure,
    Symptoms,
    TestingHistory,
}

impl QuestionSection {
    pub const fn title(self) -> &'static str {
        match self {
            QuestionSection::PersonalInformation => "Personal Information",
            QuestionSection::ProtectionAndPartner => "Protection & Partner Information",
            QuestionSection::NeedleAndBloodExposure => "Needle / Blood Exposure",
            QuestionSection::Symptoms => "Symptoms Checklist",
            QuestionSection::TestingHistory => "HIV Testing History & Exposure Timeline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerChoice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    Number { min: u8, max: u8, default: u8 },
    Choice { options: Vec<AnswerChoice> },
    Toggle,
    MultiSelect { options: Vec<AnswerChoice> },
}

/// A single question as an external form renderer should present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: &'static str,
    pub section: QuestionSection,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// The full questionnaire in presentation order.
pub fn questionnaire() -> Vec<Question> {
    use QuestionSection::*;

    vec![
        Question {
            field: field::AGE,
            section: PersonalInformation,
            prompt: "Age",
            kind: QuestionKind::Number {
                min: Age::MIN,
                max: Age::MAX,
                default: Age::DEFAULT,
            },
        },
        choice::<Gender>(PersonalInformation, "Gender"),
        choice::<RelationshipStatus>(PersonalInformation, "Relationship status"),
        choice::<SexualActivity>(PersonalInformation, "Sexual activity in last 3 months"),
        choice::<CondomUse>(ProtectionAndPartner, "How often do you use condoms?"),
        toggle(
            field::UNPROTECTED_SEX_72H,
            ProtectionAndPartner,
            "Had unprotected sex in the last 72 hours?",
        ),
        choice::<PartnerStatus>(ProtectionAndPartner, "Partner's HIV status"),
        toggle(
            field::SHARED_NEEDLES,
            NeedleAndBloodExposure,
            "Shared needles/injection equipment?",
        ),
        toggle(
            field::UNLICENSED_TATTOO,
            NeedleAndBloodExposure,
            "Got a tattoo/piercing from an unlicensed place?",
        ),
        toggle(
            field::BLOOD_CONTACT,
            NeedleAndBloodExposure,
            "Contact with someone else's blood?",
        ),
        Question {
            field: Symptom::FIELD,
            section: Symptoms,
            prompt: "Any symptoms in the last few weeks?",
            kind: QuestionKind::MultiSelect {
                options: options::<Symptom>(),
            },
        },
        choice::<PreviousTest>(TestingHistory, "Previous HIV test"),
        choice::<TimeSinceExposure>(TestingHistory, "If exposure occurred, how long ago?"),
    ]
}

fn options<T: AnswerOption>() -> Vec<AnswerChoice> {
    T::ALL
        .iter()
        .map(|option| AnswerChoice {
            value: option.token(),
            label: option.label(),
        })
        .collect()
}

fn choice<T: AnswerOption>(section: QuestionSection, prompt: &'static str) -> Question {
    Question {
        field: T::FIELD,
        section,
        prompt,
        kind: QuestionKind::Choice {
            options: options::<T>(),
        },
    }
}

fn toggle(field: &'static str, section: QuestionSection, prompt: &'static str) -> Question {
    Question {
        field,
        section,
        prompt,
        kind: QuestionKind::Toggle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_answer_field_has_one_question() {
        let questions = questionnaire();
        let fields: Vec<&str> = questions.iter().map(|question| question.field).collect();

        assert_eq!(questions.len(), 13);
        assert_eq!(fields.first(), Some(&field::AGE));
        assert_eq!(fields.last(), Some(&field::TIME_SINCE_EXPOSURE));
        for (index, name) in fields.iter().enumerate() {
            assert!(
                !fields[index + 1..].contains(name),
                "{name} appears more than once"
            );
        }
    }

    #[test]
    fn symptom_question_offers_every_symptom() {
        let questions = questionnaire();
        let symptoms = questions
            .iter()
            .find(|question| question.field == field::SYMPTOMS)
            .expect("symptom question present");

        match &symptoms.kind {
            QuestionKind::MultiSelect { options } => {
                assert_eq!(options.len(), Symptom::ALL.len());
                assert!(options.iter().any(|option| option.value == "nightSweats"));
            }
            other => panic!("expected multi select, got {other:?}"),
        }
    }

    #[test]
    fn questionnaire_serializes_with_kind_tag() {
        let value = serde_json::to_value(questionnaire()).expect("serializes");
        assert_eq!(value[0]["kind"], "number");
        assert_eq!(value[0]["max"], 100);
        assert_eq!(value[5]["kind"], "toggle");
        assert_eq!(value[5]["field"], "unprotectedSex72h");
    }
}
