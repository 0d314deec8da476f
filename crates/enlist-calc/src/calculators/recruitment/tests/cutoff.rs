use super::common::*;
use crate::calculators::recruitment::{
    compare_to_cutoff, Comparison, ComparisonStatus, CutoffLookup, CutoffTable, Specialty,
};

#[test]
fn compares_against_previous_round_and_last_year() {
    let mut input = electronics_applicant();
    input.recruitment_month = Some(month(2025, 4));

    let outcome = engine().evaluate(&input).expect("outcome");
    let report = outcome.cutoff.expect("cutoff report");

    assert_eq!(report.previous_month.reference, month(2025, 3));
    assert_eq!(report.previous_month.cutoff, CutoffLookup::Recorded(96.0));
    assert_eq!(
        report.previous_month.result,
        Some(Comparison {
            status: ComparisonStatus::Pass,
            diff: 8.0,
        })
    );
    assert_eq!(report.last_year_same_month.reference, month(2024, 4));
    assert_eq!(
        report.last_year_same_month.result,
        Some(Comparison {
            status: ComparisonStatus::Pass,
            diff: 19.0,
        })
    );
}

#[test]
fn january_looks_back_to_december() {
    let table = CutoffTable::published();
    let report = compare_to_cutoff(90, month(2025, 1), Specialty::General, &table);

    assert_eq!(report.previous_month.reference, month(2024, 12));
    assert_eq!(
        report.previous_month.result,
        Some(Comparison {
            status: ComparisonStatus::Fail,
            diff: 9.0,
        })
    );
    assert_eq!(report.last_year_same_month.cutoff, CutoffLookup::NoData);
    assert_eq!(report.last_year_same_month.result, None);
}

#[test]
fn equal_score_passes_with_zero_diff() {
    let comparison = Comparison::between(97.0, 97.0);
    assert_eq!(comparison.status, ComparisonStatus::Pass);
    assert_eq!(comparison.diff, 0.0);
}

#[test]
fn sentinel_reads_as_no_recruitment() {
    let mut table = CutoffTable::new();
    table.insert(month(2025, 5), Specialty::Medical, 99_999.0);

    let report = compare_to_cutoff(100, month(2025, 6), Specialty::Medical, &table);

    assert_eq!(report.previous_month.cutoff, CutoffLookup::NoRecruitment);
    assert_eq!(report.previous_month.result, None);
}

#[test]
fn imports_csv_with_korean_names_and_markers() {
    let csv = "year,month,specialty,cutoff\n\
               25,5,의무,113\n\
               2025,5,driving,모집 없음\n\
               2025,5,기계,\n\
               25,6,maintenance,none\n";

    let table = CutoffTable::from_reader(csv.as_bytes()).expect("import");

    assert_eq!(
        table.lookup(month(2025, 5), Specialty::Medical),
        CutoffLookup::Recorded(113.0)
    );
    assert_eq!(
        table.lookup(month(2025, 5), Specialty::Driving),
        CutoffLookup::NoRecruitment
    );
    assert_eq!(
        table.lookup(month(2025, 5), Specialty::Mechanical),
        CutoffLookup::NoData
    );
    assert_eq!(
        table.lookup(month(2025, 6), Specialty::Maintenance),
        CutoffLookup::NoRecruitment
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn rejects_unknown_specialty_with_line_number() {
    let csv = "year,month,specialty,cutoff\n25,5,의무,113\n25,5,조리,80\n";

    let error = CutoffTable::from_reader(csv.as_bytes()).unwrap_err();

    assert!(error.to_string().contains("line 3"), "{error}");
    assert!(error.to_string().contains("조리"));
}

#[test]
fn rejects_non_numeric_cutoff() {
    let csv = "year,month,specialty,cutoff\n25,5,의무,high\n";

    assert!(CutoffTable::from_reader(csv.as_bytes()).is_err());
}
