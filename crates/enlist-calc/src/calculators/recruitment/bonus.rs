use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::domain::{BonusClaim, BonusGroup};
use super::tables::{bonus_points, MAX_BONUS_POINTS, MAX_SOCIAL_BONUS_POINTS};
use crate::calculators::calendar::YearMonth;

/// First recruitment round in which Korean proficiency certificates no longer
/// earn bonus points.
pub const KOREAN_TEST_ABOLITION: YearMonth = YearMonth::from_parts(2025, 9);

pub fn korean_tests_abolished(month: Option<YearMonth>) -> bool {
    month.is_some_and(|month| month >= KOREAN_TEST_ABOLITION)
}

/// Mutable set of claims that keeps at most one member per exclusive group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusSelection {
    claims: BTreeSet<BonusClaim>,
}

impl BonusSelection {
    /// Build a selection from arbitrary claims. Duplicates collapse and a
    /// group with several members keeps its highest-value claim.
    pub fn from_claims(claims: impl IntoIterator<Item = BonusClaim>) -> Self {
        let (selection, _) = Self::normalize(claims);
        selection
    }

    fn normalize(claims: impl IntoIterator<Item = BonusClaim>) -> (Self, Vec<BonusClaim>) {
        let mut ungrouped = BTreeSet::new();
        let mut grouped: BTreeMap<BonusGroup, BonusClaim> = BTreeMap::new();
        let mut superseded = Vec::new();

        for claim in claims {
            match claim.group() {
                None => {
                    ungrouped.insert(claim);
                }
                Some(group) => match grouped.get(&group).copied() {
                    None => {
                        grouped.insert(group, claim);
                    }
                    Some(existing) if existing == claim => {}
                    Some(existing) if bonus_points(claim) > bonus_points(existing) => {
                        superseded.push(existing);
                        grouped.insert(group, claim);
                    }
                    Some(_) => superseded.push(claim),
                },
            }
        }

        ungrouped.extend(grouped.into_values());
        superseded.sort();
        superseded.dedup();
        (Self { claims: ungrouped }, superseded)
    }

    /// Add `claim`, evicting any other member of its group.
    pub fn select(&mut self, claim: BonusClaim) {
        if let Some(group) = claim.group() {
            self.claims.retain(|existing| existing.group() != Some(group));
        }
        self.claims.insert(claim);
    }

    pub fn deselect(&mut self, claim: BonusClaim) {
        self.claims.remove(&claim);
    }

    pub fn contains(&self, claim: BonusClaim) -> bool {
        self.claims.contains(&claim)
    }

    pub fn claims(&self) -> impl Iterator<Item = BonusClaim> + '_ {
        self.claims.iter().copied()
    }

    pub fn into_claims(self) -> Vec<BonusClaim> {
        self.claims.into_iter().collect()
    }
}

/// How the bonus component was assembled from the raw claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusBreakdown {
    pub volunteer: u8,
    pub blood_donation: u8,
    /// Volunteer plus blood donation after the social cap.
    pub social: u8,
    pub other: u8,
    /// Social plus other after the overall cap.
    pub total: u8,
    /// Claims worth nothing for the chosen recruitment month.
    pub excluded_by_policy: Vec<BonusClaim>,
    /// Claims dropped because a higher claim of the same group was present.
    pub superseded: Vec<BonusClaim>,
}

pub fn resolve_bonus(claims: &[BonusClaim], month: Option<YearMonth>) -> BonusBreakdown {
    let (selection, superseded) = BonusSelection::normalize(claims.iter().copied());
    let abolished = korean_tests_abolished(month);

    let mut volunteer = 0u8;
    let mut blood_donation = 0u8;
    let mut other = 0u8;
    let mut excluded_by_policy = Vec::new();

    for claim in selection.claims() {
        let points = bonus_points(claim);
        match claim.group() {
            Some(BonusGroup::VolunteerHours) => volunteer += points,
            Some(BonusGroup::BloodDonation) => blood_donation += points,
            Some(group) if group.is_korean_test() && abolished => excluded_by_policy.push(claim),
            _ => other += points,
        }
    }

    let social = (volunteer + blood_donation).min(MAX_SOCIAL_BONUS_POINTS);
    let total = social.saturating_add(other).min(MAX_BONUS_POINTS);

    BonusBreakdown {
        volunteer,
        blood_donation,
        social,
        other,
        total,
        excluded_by_policy,
        superseded,
    }
}
