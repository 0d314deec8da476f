use crate::infra::{current_month, load_cutoffs};
use clap::Args;
use enlist_calc::calculators::format::{format_manwon, format_rate, format_won, percent_of};
use enlist_calc::calculators::recruitment::{
    ApplicantCategory, ApplicantInput, Attendance, BonusClaim, Certificate, ComparisonStatus,
    CutoffComparison, CutoffLookup, Major, ScoreEngine, ScoreOutcome, Specialty,
};
use enlist_calc::calculators::savings::{
    Branch, Contribution, SavingsEngine, SavingsInput, SavingsResult, SavingsTables, BANK_RATES,
};
use enlist_calc::calculators::{CalculationError, YearMonth};
use enlist_calc::config::AppConfig;
use enlist_calc::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant category (general | specialized)
    #[arg(long)]
    pub(crate) category: ApplicantCategory,
    /// Technical specialty; required for specialized applicants
    #[arg(long)]
    pub(crate) specialty: Option<Specialty>,
    /// Certificate tag, e.g. nationalEngineer or largeSpecial
    #[arg(long)]
    pub(crate) certificate: Certificate,
    /// Major tag (defaults to nonMajor)
    #[arg(long)]
    pub(crate) major: Option<Major>,
    /// Attendance tier, e.g. absence0 or absence3to4
    #[arg(long, default_value = "absence0")]
    pub(crate) attendance: Attendance,
    /// Bonus claim tag; repeat for several claims
    #[arg(long = "bonus")]
    pub(crate) bonus: Vec<BonusClaim>,
    /// Recruitment round (YYYY-MM or "2025년 9월") for the policy gate and cutoffs
    #[arg(long, value_parser = crate::infra::parse_year_month)]
    pub(crate) month: Option<YearMonth>,
    /// Cutoff CSV overriding APP_CUTOFF_CSV and the published table
    #[arg(long)]
    pub(crate) cutoff_csv: Option<PathBuf>,
    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SavingsArgs {
    /// Enlistment month (YYYY-MM). Defaults to the current month.
    #[arg(long, value_parser = crate::infra::parse_year_month)]
    pub(crate) enlistment: Option<YearMonth>,
    /// Branch of service (armyMarines | navy | airForce)
    #[arg(long, default_value = "armyMarines")]
    pub(crate) branch: Branch,
    /// Monthly contribution in 만원. Defaults to the year's cap.
    #[arg(long)]
    pub(crate) monthly: Option<u32>,
    /// Monthly contribution in 만원 before 2025 (enlistment before 2025 only)
    #[arg(long = "monthly-2024")]
    pub(crate) monthly_2024: Option<u32>,
    /// Monthly contribution in 만원 from 2025 (enlistment before 2025 only)
    #[arg(long = "monthly-2025")]
    pub(crate) monthly_2025: Option<u32>,
    /// Combined annual interest rate in percent
    #[arg(long, default_value_t = 5.0, conflicts_with = "bank")]
    pub(crate) rate: f64,
    /// Use a bank's advertised combined rate instead of --rate
    #[arg(long)]
    pub(crate) bank: Option<String>,
    /// Leave out the government matching contribution
    #[arg(long)]
    pub(crate) no_match: bool,
    /// Percent of leftover salary also saved
    #[arg(long, default_value_t = 100.0)]
    pub(crate) residual_rate: f64,
    /// Print the month-by-month ledger
    #[arg(long)]
    pub(crate) list_months: bool,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        category,
        specialty,
        certificate,
        major,
        attendance,
        bonus,
        month,
        cutoff_csv,
        json,
    } = args;

    let config = AppConfig::load()?;
    let cutoffs = load_cutoffs(cutoff_csv.as_deref(), &config.datasets)?;
    let engine = ScoreEngine::new(Arc::new(cutoffs));

    let mut input = ApplicantInput::new(category, certificate, attendance);
    if let Some(specialty) = specialty {
        input.change_specialty(specialty);
    }
    input.major = major.unwrap_or_default();
    for claim in bonus {
        input.select_bonus(claim);
    }
    input.recruitment_month = month;

    let outcome = engine.evaluate(&input)?;
    if json {
        print_json(&outcome);
    } else {
        render_score(&outcome);
    }
    Ok(())
}

pub(crate) fn run_savings_report(args: SavingsArgs) -> Result<(), AppError> {
    let tables = SavingsTables::standard();
    let enlistment = args.enlistment.unwrap_or_else(current_month);
    let contribution = savings_contribution(&args, enlistment, &tables);
    let rate = match args.bank.as_deref() {
        Some(name) => bank_rate(name)?,
        None => args.rate,
    };

    let mut input = SavingsInput::new(enlistment, args.branch, contribution, rate);
    input.government_match = !args.no_match;
    input.residual_savings_rate = args.residual_rate;

    let engine = SavingsEngine::new(Arc::new(tables));
    let result = engine.compute(&input)?;
    if args.json {
        print_json(&result);
    } else {
        render_savings(&result, args.list_months);
    }
    Ok(())
}

fn savings_contribution(
    args: &SavingsArgs,
    enlistment: YearMonth,
    tables: &SavingsTables,
) -> Contribution {
    if args.monthly_2024.is_some() || args.monthly_2025.is_some() {
        return Contribution::Split {
            year_2024: args
                .monthly_2024
                .or(args.monthly)
                .or_else(|| tables.cap_manwon(2024))
                .unwrap_or(0),
            year_2025: args
                .monthly_2025
                .or(args.monthly)
                .or_else(|| tables.cap_manwon(2025))
                .unwrap_or(0),
        };
    }

    let monthly = args
        .monthly
        .or_else(|| tables.cap_manwon(enlistment.year()))
        .unwrap_or(0);
    Contribution::Flat { monthly }
}

fn bank_rate(name: &str) -> Result<f64, CalculationError> {
    BANK_RATES
        .iter()
        .find(|bank| bank.bank == name.trim())
        .map(|bank| f64::from(bank.total_rate().basis_points()) / 100.0)
        .ok_or_else(|| {
            let known: Vec<&str> = BANK_RATES.iter().map(|bank| bank.bank).collect();
            CalculationError::invalid(
                "bank",
                format!("unknown bank '{}' (known: {})", name, known.join(", ")),
            )
        })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON output unavailable: {}", err),
    }
}

fn render_score(outcome: &ScoreOutcome) {
    let result = &outcome.result;
    let ceiling = &outcome.ceiling;

    println!(
        "Recruitment score estimate ({} / {})",
        outcome.category.label(),
        outcome.specialty.display_name()
    );
    println!(
        "- Total {} / {} ({}%)",
        result.total_score(),
        ceiling.total,
        outcome.percent_of_ceiling
    );
    let components = [
        ("Certificate", result.certificate_score(), ceiling.certificate),
        ("Major", result.major_score(), ceiling.major),
        ("Attendance", result.attendance_score(), ceiling.attendance),
        ("Bonus", result.bonus_points_score(), ceiling.bonus),
    ];
    for (label, score, max) in components {
        if max == 0 {
            continue;
        }
        println!(
            "  - {}: {} / {} ({}%)",
            label,
            score,
            max,
            percent_of(u32::from(score), u32::from(max))
        );
    }

    let bonus = &outcome.bonus;
    println!(
        "  Bonus detail: social {} (volunteer {} + blood {}), other {}",
        bonus.social, bonus.volunteer, bonus.blood_donation, bonus.other
    );
    if !bonus.superseded.is_empty() {
        println!("  Ignored lower claims in the same group: {:?}", bonus.superseded);
    }
    if outcome.korean_tests_abolished {
        println!("  Note: Korean history and language certificates earn no bonus from 2025-09.");
        if !bonus.excluded_by_policy.is_empty() {
            println!("  Excluded claims: {:?}", bonus.excluded_by_policy);
        }
    }

    if let Some(report) = &outcome.cutoff {
        println!("\nCutoff comparison");
        render_comparison("Previous round", &report.previous_month);
        render_comparison("Same round last year", &report.last_year_same_month);
    }
}

fn render_comparison(label: &str, comparison: &CutoffComparison) {
    let reference = comparison.reference.korean_label();
    match (comparison.cutoff, comparison.result) {
        (CutoffLookup::Recorded(cutoff), Some(result)) => {
            let verdict = match result.status {
                ComparisonStatus::Pass => "above",
                ComparisonStatus::Fail => "below",
            };
            println!(
                "- {} ({}): cutoff {:.0}, {} by {:.0}",
                label, reference, cutoff, verdict, result.diff
            );
        }
        (CutoffLookup::NoRecruitment, _) => {
            println!("- {} ({}): no recruitment held", label, reference)
        }
        _ => println!("- {} ({}): no data", label, reference),
    }
}

fn render_savings(result: &SavingsResult, list_months: bool) {
    let breakdown = &result.breakdown;

    println!(
        "Military savings maturity estimate ({}, {} months at {})",
        result.branch.label(),
        result.service_months,
        format_rate(result.interest_rate.basis_points())
    );
    println!("- Total at discharge: {}", format_won(result.total));
    println!("  - Deposits: {}", format_won(breakdown.total_deposit));
    println!("  - Interest: {}", format_won(breakdown.base_interest));
    println!("  - Government match: {}", format_won(breakdown.government_match));
    println!("  - Saved salary: {}", format_won(breakdown.remaining_savings));
    println!(
        "  Tax-free interest saves about {}",
        format_won(result.tax_exemption_benefit)
    );

    println!("Contribution schedule:");
    for entry in result.schedule.entries() {
        let clamped = if entry.requested_manwon > entry.cap_manwon {
            format!(" (requested {}, capped)", format_manwon(entry.requested_manwon))
        } else {
            String::new()
        };
        println!(
            "  - from {}: {} per month{}",
            entry.from_year,
            format_manwon(entry.monthly_manwon),
            clamped
        );
    }

    println!("Rank periods:");
    for period in &result.rank_periods {
        println!(
            "  - {}: {} ~ {} ({} months, recommended {})",
            period.rank,
            period.start.korean_label(),
            period.end.korean_label(),
            period.months,
            format_manwon(period.recommended_manwon)
        );
    }

    if list_months {
        println!("Monthly ledger:");
        for month in &result.months {
            println!(
                "  - {} {}: salary {} | saved {} | left {}",
                month.month,
                month.rank,
                format_won(month.salary),
                format_won(month.contribution),
                format_won(month.remaining)
            );
        }
    }
}
