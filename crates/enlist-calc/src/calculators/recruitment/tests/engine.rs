use super::common::*;
use crate::calculators::recruitment::{
    compute_score, ApplicantCategory, ApplicantInput, Attendance, BonusClaim, Certificate,
    ScoreCeiling, Specialty,
};

#[test]
fn general_engineer_with_perfect_attendance_scores_ninety() {
    let result = compute_score(&general_applicant()).expect("score");

    assert_eq!(result.certificate_score(), 70);
    assert_eq!(result.major_score(), 0);
    assert_eq!(result.attendance_score(), 20);
    assert_eq!(result.bonus_points_score(), 0);
    assert_eq!(result.total_score(), 90);
}

#[test]
fn driving_licence_counts_for_driving_specialty() {
    let result = compute_score(&driving_applicant()).expect("score");

    assert_eq!(result.certificate_score(), 50);
    assert_eq!(result.major_score(), 20);
    assert_eq!(result.attendance_score(), 6);
    assert_eq!(result.total_score(), 76);
}

#[test]
fn driving_licence_outside_driving_scores_as_none() {
    let mut input = driving_applicant();
    input.specialty = Some(Specialty::Mechanical);

    let result = compute_score(&input).expect("score");

    assert_eq!(result.certificate_score(), 20);
    assert_eq!(result.total_score(), 46);
}

#[test]
fn general_category_ignores_supplied_specialty_and_licence() {
    let mut input = general_applicant();
    input.specialty = Some(Specialty::Driving);
    input.certificate = Certificate::Type1Manual;
    input.major = crate::calculators::recruitment::Major::CreditBank140;

    let result = compute_score(&input).expect("score");

    assert_eq!(result.certificate_score(), 60);
    assert_eq!(result.major_score(), 0);
    assert_eq!(result.total_score(), 80);
}

#[test]
fn specialized_without_technical_specialty_is_rejected() {
    let mut input = ApplicantInput::new(
        ApplicantCategory::Specialized,
        Certificate::Certified,
        Attendance::Absence0,
    );
    let missing = compute_score(&input).unwrap_err();
    assert_eq!(missing.field(), "specialty");

    input.specialty = Some(Specialty::General);
    let general = compute_score(&input).unwrap_err();
    assert_eq!(general.field(), "specialty");
}

#[test]
fn totals_never_exceed_the_category_ceiling() {
    let mut input = electronics_applicant();
    input.bonus_claims = vec![
        BonusClaim::NationalMerit,
        BonusClaim::VoluntaryEnlistment,
        BonusClaim::OverseasResident,
        BonusClaim::MultiChild3,
        BonusClaim::VolunteerHours64,
        BonusClaim::BloodDonation8,
    ];

    let result = compute_score(&input).expect("score");
    let ceiling = ScoreCeiling::for_category(ApplicantCategory::Specialized);

    assert_eq!(result.bonus_points_score(), 15);
    assert_eq!(result.total_score(), ceiling.total);
    assert_eq!(result.percent_of_ceiling(&ceiling), 100);
}

#[test]
fn change_specialty_clears_driving_licence() {
    let mut input = driving_applicant();
    input.change_specialty(Specialty::Maintenance);
    assert_eq!(input.certificate, Certificate::None);

    let mut kept = electronics_applicant();
    kept.change_specialty(Specialty::Medical);
    assert_eq!(kept.certificate, Certificate::NationalEngineer);
}

#[test]
fn change_category_to_general_resets_specialty() {
    let mut input = driving_applicant();
    input.change_category(ApplicantCategory::General);

    assert_eq!(input.specialty, Some(Specialty::General));
    assert_eq!(input.certificate, Certificate::None);
}

#[test]
fn change_category_to_specialized_starts_on_electronics() {
    let mut input = general_applicant();
    input.change_category(ApplicantCategory::Specialized);

    assert_eq!(input.specialty, Some(Specialty::Electronics));
    assert_eq!(input.certificate, Certificate::NationalEngineer);
    assert!(compute_score(&input).is_ok());

    let mut licensed = ApplicantInput::new(
        ApplicantCategory::General,
        Certificate::Type1Manual,
        Attendance::Absence0,
    );
    licensed.change_category(ApplicantCategory::Specialized);
    assert_eq!(licensed.specialty, Some(Specialty::Electronics));
    assert_eq!(licensed.certificate, Certificate::None);

    let mut driver = driving_applicant();
    driver.change_category(ApplicantCategory::Specialized);
    assert_eq!(driver.specialty, Some(Specialty::Driving));
    assert_eq!(driver.certificate, Certificate::LargeSpecial);
}

#[test]
fn evaluate_reports_ceiling_and_percent() {
    let outcome = engine().evaluate(&general_applicant()).expect("outcome");

    assert_eq!(outcome.specialty, Specialty::General);
    assert_eq!(outcome.ceiling.total, 105);
    assert_eq!(outcome.percent_of_ceiling, 86);
    assert!(!outcome.korean_tests_abolished);
    assert!(outcome.cutoff.is_none());
}

#[test]
fn recruitment_month_never_changes_base_scores() {
    let mut input = electronics_applicant();
    let without_month = compute_score(&input).expect("score");
    input.recruitment_month = Some(month(2025, 10));
    let with_month = compute_score(&input).expect("score");

    assert_eq!(without_month, with_month);
}

#[test]
fn input_deserializes_from_camel_case_payload() {
    let input: ApplicantInput = serde_json::from_str(
        r#"{
            "category": "specialized",
            "specialty": "electronic",
            "certificate": "learningL4L3",
            "major": "polytechnic2Year",
            "attendance": "absence3to4",
            "bonusPoints": ["koreanHistory12", "englishToeic730plus"],
            "recruitmentMonth": "2025년 8월"
        }"#,
    )
    .expect("payload");

    assert_eq!(input.specialty, Some(Specialty::Electronics));
    assert_eq!(input.recruitment_month, Some(month(2025, 8)));
    let result = compute_score(&input).expect("score");
    assert_eq!(result.total_score(), 45 + 32 + 8 + 4);
}
