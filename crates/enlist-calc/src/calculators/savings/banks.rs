use serde::Serialize;

use super::domain::InterestRate;
use crate::calculators::format::format_rate;

/// Advertised rate of one bank offering the product, in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankRate {
    pub bank: &'static str,
    pub base_rate: InterestRate,
    pub preferential_rate: InterestRate,
    pub benefit: &'static str,
    pub official_link: &'static str,
}

impl BankRate {
    pub fn total_rate(&self) -> InterestRate {
        InterestRate::from_basis_points(
            self.base_rate.basis_points() + self.preferential_rate.basis_points(),
        )
    }
}

const fn bank(
    bank: &'static str,
    base: u32,
    preferential: u32,
    benefit: &'static str,
    official_link: &'static str,
) -> BankRate {
    BankRate {
        bank,
        base_rate: InterestRate::from_basis_points(base),
        preferential_rate: InterestRate::from_basis_points(preferential),
        benefit,
        official_link,
    }
}

pub const BANK_RATES: [BankRate; 8] = [
    bank("국민은행", 500, 100, "KB국민카드 연계 혜택", "https://www.kbstar.com"),
    bank("우리은행", 510, 100, "우리 WON 뱅킹 앱 가입시 우대", "https://www.wooribank.com"),
    bank("하나은행", 520, 90, "하나멤버스 포인트 적립 혜택", "https://www.hanabank.com"),
    bank("신한은행", 530, 80, "SOL 앱 가입 우대", "https://www.shinhan.com"),
    bank("NH농협은행", 510, 110, "NH앱 가입시 추가 우대금리", "https://banking.nonghyup.com"),
    bank("IBK기업은행", 520, 90, "i-ONE뱅크 앱 가입 우대", "https://www.ibk.co.kr"),
    bank("SC제일은행", 500, 90, "모바일뱅킹 가입 시 우대금리", "https://www.standardchartered.co.kr"),
    bank("부산은행", 510, 80, "썸뱅크 앱 가입 우대", "https://www.busanbank.co.kr"),
];

/// Selectable combined rate for the rate picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestRateOption {
    pub rate: InterestRate,
    pub label: String,
}

const MIN_RATE_BPS: u32 = 500;
const MAX_RATE_BPS: u32 = 800;
const RATE_STEP_BPS: usize = 10;

/// 5.0% to 8.0% in 0.1 point steps.
pub fn interest_rate_options() -> Vec<InterestRateOption> {
    (MIN_RATE_BPS..=MAX_RATE_BPS)
        .step_by(RATE_STEP_BPS)
        .map(|basis_points| InterestRateOption {
            rate: InterestRate::from_basis_points(basis_points),
            label: format_rate(basis_points),
        })
        .collect()
}
