use super::common::*;
use crate::calculators::savings::{compute_savings, Branch, Contribution, Rank, SavingsInput};

#[test]
fn army_2025_maximum_contribution_matures_as_published() {
    let result = compute_savings(&army_2025_input()).expect("savings");

    assert_eq!(result.breakdown.total_deposit, 9_900_000);
    assert_eq!(result.breakdown.base_interest, 391_875);
    assert_eq!(result.breakdown.additional_interest, 0);
    assert_eq!(result.breakdown.government_match, 9_900_000);
    assert_eq!(result.breakdown.remaining_savings, 10_200_000);
    assert_eq!(result.total, 30_391_875);
    assert_eq!(result.tax_exemption_benefit, 60_349);
}

#[test]
fn rank_periods_walk_exactly_the_service_length() {
    let result = compute_savings(&army_2025_input()).expect("savings");

    assert_eq!(result.service_months, 18);
    assert_eq!(result.months.len(), 18);
    assert_eq!(result.months.first().map(|m| m.month), Some(month(2025, 6)));
    assert_eq!(result.months.last().map(|m| m.month), Some(month(2026, 11)));

    let spans: Vec<_> = result
        .rank_periods
        .iter()
        .map(|period| (period.rank, period.start, period.end, period.months))
        .collect();
    assert_eq!(
        spans,
        vec![
            (Rank::Private, month(2025, 6), month(2025, 7), 2),
            (Rank::PrivateFirstClass, month(2025, 8), month(2026, 1), 6),
            (Rank::Corporal, month(2026, 2), month(2026, 7), 6),
            (Rank::Sergeant, month(2026, 8), month(2026, 11), 4),
        ]
    );
    assert_eq!(result.rank_periods[3].recommended_manwon, 35);
}

#[test]
fn split_contribution_switches_tables_at_new_year() {
    let result = compute_savings(&army_2024_split_input()).expect("savings");

    let in_2024 = result.months.iter().filter(|m| m.month.year() == 2024).count();
    assert_eq!(in_2024, 7);
    assert_eq!(result.breakdown.total_deposit, 8_850_000);
    assert_eq!(result.breakdown.base_interest, 350_313);
    assert_eq!(result.breakdown.remaining_savings, 10_530_000);
    assert_eq!(result.total, 28_580_313);

    let january = result
        .months
        .iter()
        .find(|m| m.month == month(2025, 1))
        .expect("january");
    assert_eq!(january.rank, Rank::PrivateFirstClass);
    assert_eq!(january.salary, 900_000);
    assert_eq!(january.contribution, 550_000);
}

#[test]
fn total_is_the_sum_of_components() {
    for branch in [Branch::ArmyMarines, Branch::Navy, Branch::AirForce] {
        let mut input = army_2024_split_input();
        input.branch = branch;
        input.residual_savings_rate = 37.5;
        let result = compute_savings(&input).expect("savings");
        let breakdown = result.breakdown;

        assert_eq!(
            result.total,
            breakdown.total_deposit
                + breakdown.base_interest
                + breakdown.government_match
                + breakdown.remaining_savings
        );
    }
}

#[test]
fn navy_serves_twenty_months() {
    let input = SavingsInput::new(
        month(2025, 1),
        Branch::Navy,
        Contribution::Flat { monthly: 40 },
        5.0,
    );

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.service_months, 20);
    assert_eq!(result.breakdown.total_deposit, 8_000_000);
    assert_eq!(result.breakdown.base_interest, 350_000);
    assert_eq!(result.rank_periods[3].months, 6);
}

#[test]
fn air_force_serves_twenty_one_months() {
    let mut input = army_2025_input();
    input.branch = Branch::AirForce;

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.months.len(), 21);
    assert_eq!(result.rank_periods[3].months, 7);
}

#[test]
fn over_cap_contribution_is_clamped() {
    let mut input = army_2025_input();
    input.contribution = Contribution::Flat { monthly: 999 };

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.schedule.monthly_manwon(2025), 55);
    assert_eq!(result.breakdown.total_deposit, 9_900_000);
}

#[test]
fn disabling_match_and_residual_savings() {
    let mut input = army_2025_input();
    input.government_match = false;
    input.residual_savings_rate = 0.0;

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.breakdown.government_match, 0);
    assert_eq!(result.breakdown.remaining_savings, 0);
    assert_eq!(result.total, 9_900_000 + 391_875);
}

#[test]
fn residual_rate_scales_and_clamps() {
    let mut input = army_2025_input();
    input.residual_savings_rate = 50.0;
    let half = compute_savings(&input).expect("savings");
    assert_eq!(half.breakdown.remaining_savings, 5_100_000);

    input.residual_savings_rate = 150.0;
    let clamped = compute_savings(&input).expect("savings");
    assert_eq!(clamped.breakdown.remaining_savings, 10_200_000);

    input.residual_savings_rate = f64::NAN;
    let error = compute_savings(&input).unwrap_err();
    assert_eq!(error.field(), "residualSavingsRate");
}

#[test]
fn flat_amount_for_2024_enlistee_uses_each_years_cap() {
    let mut input = army_2024_split_input();
    input.contribution = Contribution::Flat { monthly: 999 };

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.schedule.monthly_manwon(2024), 40);
    assert_eq!(result.schedule.monthly_manwon(2025), 55);
    assert_eq!(result.breakdown.total_deposit, 8_850_000);
}

#[test]
fn enlistment_after_the_last_table_uses_the_latest_scale() {
    let mut input = army_2025_input();
    input.enlistment = month(2026, 3);

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.schedule.monthly_manwon(2026), 55);
    assert_eq!(result.months[0].salary, 750_000);
    assert_eq!(result.breakdown.total_deposit, 9_900_000);
    assert_eq!(result.breakdown.remaining_savings, 10_200_000);
    assert_eq!(result.total, 30_391_875);
}

#[test]
fn enlistment_before_the_first_table_uses_the_earliest_scale() {
    let mut input = army_2025_input();
    input.enlistment = month(2023, 11);
    input.contribution = Contribution::Split {
        year_2024: 40,
        year_2025: 55,
    };

    let result = compute_savings(&input).expect("savings");

    assert_eq!(result.months[0].month, month(2023, 11));
    assert_eq!(result.months[0].salary, 640_000);
    assert_eq!(result.schedule.monthly_manwon(2023), 40);
    assert_eq!(result.breakdown.total_deposit, 7_800_000);
    assert_eq!(result.breakdown.base_interest, 308_750);
    assert_eq!(result.breakdown.remaining_savings, 10_280_000);
    assert_eq!(result.total, 26_188_750);
}

#[test]
fn rejects_service_ending_before_any_table() {
    let mut input = army_2025_input();
    input.enlistment = month(2022, 1);
    assert_eq!(compute_savings(&input).unwrap_err().field(), "enlistment");
}

#[test]
fn rejects_invalid_interest_rates() {
    let mut input = army_2025_input();
    for rate in [-0.5, 100.5, f64::INFINITY] {
        input.interest_rate = rate;
        assert_eq!(compute_savings(&input).unwrap_err().field(), "interestRate");
    }
}

#[test]
fn split_contribution_for_2025_enlistee_is_rejected() {
    let mut input = army_2025_input();
    input.contribution = Contribution::Split {
        year_2024: 40,
        year_2025: 55,
    };

    assert_eq!(compute_savings(&input).unwrap_err().field(), "contribution");
}

#[test]
fn input_deserializes_with_defaults_and_korean_branch() {
    let input: SavingsInput = serde_json::from_str(
        r#"{
            "enlistment": "2025년 6월",
            "branch": "육군/해병대",
            "contribution": { "monthly": 55 },
            "interestRate": 5.0
        }"#,
    )
    .expect("payload");

    assert_eq!(input, army_2025_input());
}
