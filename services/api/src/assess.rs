use crate::infra::load_submission;
use chrono::{Local, Utc};
use clap::Args;
use risk_aware::assessment::{
    assess, questionnaire, AssessmentReport, QuestionKind, QuestionnaireSubmission,
};
use risk_aware::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Read answers from a JSON file (same field names as the HTTP API) instead of flags
    #[arg(
        long,
        conflicts_with_all = [
            "age",
            "gender",
            "relationship_status",
            "sexual_activity",
            "condom_use",
            "unprotected_sex_72h",
            "partner_status",
            "shared_needles",
            "unlicensed_tattoo",
            "blood_contact",
            "symptoms",
            "previous_test",
            "time_since_exposure",
        ]
    )]
    pub(crate) answers: Option<PathBuf>,
    /// Age in years (12-100)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: Option<i64>,
    /// unspecified, female, male or other
    #[arg(long, default_value = "unspecified")]
    pub(crate) gender: String,
    /// single, partnered, married or unspecified
    #[arg(long, default_value = "unspecified")]
    pub(crate) relationship_status: String,
    /// Sexual activity in the last 3 months: none, onePartner or multiplePartners
    #[arg(long)]
    pub(crate) sexual_activity: Option<String>,
    /// always, mostly, sometimes or never
    #[arg(long)]
    pub(crate) condom_use: Option<String>,
    /// Had unprotected sex in the last 72 hours
    #[arg(long)]
    pub(crate) unprotected_sex_72h: bool,
    /// Partner's HIV status: negative, positive or unknown
    #[arg(long)]
    pub(crate) partner_status: Option<String>,
    /// Shared needles or injection equipment
    #[arg(long)]
    pub(crate) shared_needles: bool,
    /// Tattoo or piercing from an unlicensed place
    #[arg(long)]
    pub(crate) unlicensed_tattoo: bool,
    /// Contact with someone else's blood
    #[arg(long)]
    pub(crate) blood_contact: bool,
    /// Symptom noticed in the last few weeks (repeatable)
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<String>,
    /// never, over1Year, within6Months or within1Month
    #[arg(long)]
    pub(crate) previous_test: Option<String>,
    /// none, under72h, threeDaysToSixWeeks or overSixWeeks
    #[arg(long)]
    pub(crate) time_since_exposure: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the questionnaire as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    fn submission(&self) -> QuestionnaireSubmission {
        QuestionnaireSubmission {
            age: self.age,
            gender: Some(self.gender.clone()),
            relationship_status: Some(self.relationship_status.clone()),
            sexual_activity: self.sexual_activity.clone(),
            condom_use: self.condom_use.clone(),
            unprotected_sex72h: Some(self.unprotected_sex_72h),
            partner_status: self.partner_status.clone(),
            shared_needles: Some(self.shared_needles),
            unlicensed_tattoo: Some(self.unlicensed_tattoo),
            blood_contact: Some(self.blood_contact),
            symptoms: self.symptoms.clone(),
            previous_test: self.previous_test.clone(),
            time_since_exposure: self.time_since_exposure.clone(),
        }
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let submission = match &args.answers {
        Some(path) => load_submission(path)?,
        None => args.submission(),
    };

    let report = assess(submission, Utc::now())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let questions = questionnaire();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    let mut current_section = None;
    for question in &questions {
        if current_section != Some(question.section) {
            println!("\n{}", question.section.title());
            current_section = Some(question.section);
        }

        match &question.kind {
            QuestionKind::Number { min, max, default } => println!(
                "- {} [{}]: number {}-{} (default {})",
                question.prompt, question.field, min, max, default
            ),
            QuestionKind::Toggle => {
                println!("- {} [{}]: yes/no", question.prompt, question.field)
            }
            QuestionKind::Choice { options } | QuestionKind::MultiSelect { options } => {
                let multi = matches!(question.kind, QuestionKind::MultiSelect { .. });
                println!(
                    "- {} [{}]{}",
                    question.prompt,
                    question.field,
                    if multi { " (select any)" } else { "" }
                );
                for option in options {
                    println!("    {} = {}", option.value, option.label);
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn render_report(report: &AssessmentReport) -> String {
    let mut out = String::new();
    let mut push = |line: String| {
        out.push_str(&line);
        out.push('\n');
    };

    push("HIV risk awareness self-assessment".to_string());
    push(report.disclaimer.to_string());
    push(report.privacy_notice.to_string());

    push(format!(
        "\nYour result: {} (score {})",
        report.banner.title, report.result.score
    ));
    push(format!(
        "[{}] {}",
        report.banner.severity.label().to_uppercase(),
        report.banner.message
    ));

    if let Some(advisory) = report.pep_advisory {
        push(format!("[WARNING] {advisory}"));
    }

    if !report.result.components.is_empty() {
        push("\nScore breakdown".to_string());
        for component in &report.result.components {
            push(format!("- +{} {}", component.points, component.note));
        }
    }

    push("\nRecommended medical tests".to_string());
    for (index, test) in report.recommended_tests.iter().enumerate() {
        push(format!("{}. {}", index + 1, test.name));
        for detail in test.details {
            push(format!("   - {detail}"));
        }
    }

    push("\nMessage for the healthcare specialist".to_string());
    push(report.clinician_note.note.to_string());
    push("They may require:".to_string());
    for follow_up in report.clinician_note.follow_ups {
        push(format!("- {follow_up}"));
    }

    push("\nHealth resources".to_string());
    for resource in report.health_resources {
        push(format!("- {resource}"));
    }

    push("\nSummary of your answers".to_string());
    for line in &report.summary {
        push(format!("- {}: {}", line.label, line.value));
    }

    push(format!(
        "\nAssessment completed on: {}",
        report
            .assessed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    ));

    out
}
