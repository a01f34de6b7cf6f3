use super::super::domain::{
    AnswerOption, AnswerSet, CondomUse, PartnerStatus, PreviousTest, SexualActivity,
};
use super::ScoreComponent;
use serde::{Deserialize, Serialize};

const UNPROTECTED_SEX_72H_POINTS: u16 = 4;
const SHARED_NEEDLES_POINTS: u16 = 6;
const UNLICENSED_TATTOO_POINTS: u16 = 2;
const BLOOD_CONTACT_POINTS: u16 = 2;
// Flat bonus, however many weighted symptoms are reported.
const SYMPTOM_BONUS_POINTS: u16 = 2;

/// Rubric factors that can contribute points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    SexualActivity,
    CondomUse,
    PartnerStatus,
    UnprotectedSex72h,
    SharedNeedles,
    UnlicensedTattoo,
    BloodContact,
    Symptoms,
    PreviousTest,
}

pub(crate) fn sexual_activity_points(activity: SexualActivity) -> u16 {
    match activity {
        SexualActivity::None => 0,
        SexualActivity::OnePartner => 1,
        SexualActivity::MultiplePartners => 4,
    }
}

pub(crate) fn condom_use_points(condom_use: CondomUse) -> u16 {
    match condom_use {
        CondomUse::Always => 0,
        CondomUse::Mostly => 1,
        CondomUse::Sometimes => 2,
        CondomUse::Never => 4,
    }
}

pub(crate) fn partner_status_points(status: PartnerStatus) -> u16 {
    match status {
        PartnerStatus::Negative => 0,
        PartnerStatus::Positive => 5,
        PartnerStatus::Unknown => 2,
    }
}

pub(crate) fn previous_test_points(previous_test: PreviousTest) -> u16 {
    match previous_test {
        PreviousTest::Never => 1,
        PreviousTest::Over1Year | PreviousTest::Within6Months | PreviousTest::Within1Month => 0,
    }
}

pub(crate) fn score_answers(answers: &AnswerSet) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    award(
        &mut components,
        RiskFactor::SexualActivity,
        sexual_activity_points(answers.sexual_activity),
        || format!("sexual activity: {}", answers.sexual_activity.label()),
    );

    award(
        &mut components,
        RiskFactor::CondomUse,
        condom_use_points(answers.condom_use),
        || format!("condom use: {}", answers.condom_use.label().to_lowercase()),
    );

    award(
        &mut components,
        RiskFactor::PartnerStatus,
        partner_status_points(answers.partner_status),
        || {
            format!(
                "partner HIV status: {}",
                answers.partner_status.label().to_lowercase()
            )
        },
    );

    if answers.unprotected_sex72h {
        award(
            &mut components,
            RiskFactor::UnprotectedSex72h,
            UNPROTECTED_SEX_72H_POINTS,
            || "unprotected sex in the last 72 hours".to_string(),
        );
    }

    if answers.shared_needles {
        award(
            &mut components,
            RiskFactor::SharedNeedles,
            SHARED_NEEDLES_POINTS,
            || "shared needles or injection equipment".to_string(),
        );
    }

    if answers.unlicensed_tattoo {
        award(
            &mut components,
            RiskFactor::UnlicensedTattoo,
            UNLICENSED_TATTOO_POINTS,
            || "tattoo or piercing from an unlicensed place".to_string(),
        );
    }

    if answers.blood_contact {
        award(
            &mut components,
            RiskFactor::BloodContact,
            BLOOD_CONTACT_POINTS,
            || "contact with someone else's blood".to_string(),
        );
    }

    if answers.has_weighted_symptom() {
        award(&mut components, RiskFactor::Symptoms, SYMPTOM_BONUS_POINTS, || {
            let weighted: Vec<&str> = answers
                .symptoms
                .iter()
                .filter(|symptom| symptom.is_weighted())
                .map(|symptom| symptom.label())
                .collect();
            format!("reported {}", weighted.join(", ").to_lowercase())
        });
    }

    award(
        &mut components,
        RiskFactor::PreviousTest,
        previous_test_points(answers.previous_test),
        || "never tested for HIV".to_string(),
    );

    components
}

fn award(
    components: &mut Vec<ScoreComponent>,
    factor: RiskFactor,
    points: u16,
    note: impl FnOnce() -> String,
) {
    if points > 0 {
        components.push(ScoreComponent {
            factor,
            points,
            note: note(),
        });
    }
}
