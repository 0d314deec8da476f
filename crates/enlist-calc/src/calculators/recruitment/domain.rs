use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bonus::BonusSelection;
use crate::calculators::calendar::YearMonth;
use crate::calculators::error::CalculationError;
use crate::calculators::parse_variant;

/// Applicant track; selects the point tables and the score ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicantCategory {
    /// 일반기술병
    General,
    /// 전문기술병
    Specialized,
}

impl ApplicantCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicantCategory::General => "일반기술병",
            ApplicantCategory::Specialized => "전문기술병",
        }
    }
}

/// Technical track. Only the specialized category chooses one; the general
/// category is always scored as [`Specialty::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Specialty {
    General,
    #[serde(alias = "electronic")]
    Electronics,
    #[serde(alias = "chemical")]
    ChemicalDefense,
    Medical,
    Mechanical,
    Driving,
    Maintenance,
    #[serde(alias = "communication")]
    Communications,
}

impl Specialty {
    pub const ALL: [Specialty; 8] = [
        Specialty::General,
        Specialty::Electronics,
        Specialty::ChemicalDefense,
        Specialty::Medical,
        Specialty::Mechanical,
        Specialty::Driving,
        Specialty::Maintenance,
        Specialty::Communications,
    ];

    /// Name used by the published cutoff tables.
    pub const fn display_name(self) -> &'static str {
        match self {
            Specialty::General => "일반기술",
            Specialty::Electronics => "전자계산",
            Specialty::ChemicalDefense => "화생방",
            Specialty::Medical => "의무",
            Specialty::Mechanical => "기계",
            Specialty::Driving => "차량운전",
            Specialty::Maintenance => "차량정비",
            Specialty::Communications => "통신전자전기",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|specialty| specialty.display_name() == name)
    }
}

/// Qualification claimed for the certificate component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Certificate {
    NationalEngineer,
    NationalIndustrial,
    NationalTechnician,
    LearningL6L5,
    LearningL4L3,
    LearningL2,
    Certified,
    Uncertified,
    LargeSpecial,
    Type1Manual,
    Type2Manual,
    None,
}

impl Certificate {
    /// Driving licences only count for the driving specialty.
    pub const fn is_driving_licence(self) -> bool {
        matches!(
            self,
            Certificate::LargeSpecial | Certificate::Type1Manual | Certificate::Type2Manual
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Major {
    University4YearCompleted,
    University4YearInProgress,
    University3YearCompleted,
    University3YearInProgress,
    University2YearCompleted,
    University2YearInProgress,
    University1YearCompleted,
    University1YearInProgress,
    HighSchoolRelated,
    HighSchoolUnrelated,
    Polytechnic2Year,
    Polytechnic1Year,
    Polytechnic6Month,
    CreditBank40,
    CreditBank80,
    CreditBank120,
    CreditBank140,
    #[default]
    NonMajor,
}

/// Unexcused absences recorded in high school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attendance {
    Absence0,
    #[serde(rename = "absence1to2")]
    Absence1To2,
    #[serde(rename = "absence3to4")]
    Absence3To4,
    #[serde(rename = "absence5to6")]
    Absence5To6,
    #[serde(rename = "absence7plus")]
    Absence7Plus,
}

/// Groups within which at most one claim may be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BonusGroup {
    KoreanHistory,
    KoreanLanguage,
    EnglishToeic,
    EnglishToefl,
    EnglishTeps,
    VolunteerHours,
    BloodDonation,
}

impl BonusGroup {
    /// Volunteer hours and blood donations share the social-contribution cap.
    pub const fn is_social(self) -> bool {
        matches!(self, BonusGroup::VolunteerHours | BonusGroup::BloodDonation)
    }

    /// Korean proficiency tests, abolished as bonus items from September 2025.
    pub const fn is_korean_test(self) -> bool {
        matches!(self, BonusGroup::KoreanHistory | BonusGroup::KoreanLanguage)
    }
}

/// A single extra-credit entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BonusClaim {
    NationalMerit,
    VoluntaryEnlistment,
    OverseasResident,
    MultiChild3,
    MultiChild2,
    EconomicDisadvantage,
    VolunteerHours8,
    VolunteerHours16,
    VolunteerHours24,
    VolunteerHours32,
    VolunteerHours40,
    VolunteerHours48,
    VolunteerHours56,
    VolunteerHours64,
    BloodDonation1,
    BloodDonation2,
    BloodDonation3,
    BloodDonation4,
    BloodDonation5,
    BloodDonation6,
    BloodDonation7,
    BloodDonation8,
    DesignatedSpecialty,
    ChemicalDriverLicense,
    AircraftMaintenance,
    CareerDesignRecommendation,
    KoreanHistory34,
    KoreanHistory12,
    KoreanLanguage34,
    KoreanLanguage12,
    #[serde(rename = "englishToeic520to729")]
    EnglishToeic520To729,
    #[serde(rename = "englishToeic730plus")]
    EnglishToeic730Plus,
    #[serde(rename = "englishToefl59to81")]
    EnglishToefl59To81,
    #[serde(rename = "englishToefl82plus")]
    EnglishToefl82Plus,
    #[serde(rename = "englishTeps201to276")]
    EnglishTeps201To276,
    #[serde(rename = "englishTeps277plus")]
    EnglishTeps277Plus,
}

impl BonusClaim {
    pub fn group(self) -> Option<BonusGroup> {
        use BonusClaim::*;
        match self {
            VolunteerHours8 | VolunteerHours16 | VolunteerHours24 | VolunteerHours32
            | VolunteerHours40 | VolunteerHours48 | VolunteerHours56 | VolunteerHours64 => {
                Some(BonusGroup::VolunteerHours)
            }
            BloodDonation1 | BloodDonation2 | BloodDonation3 | BloodDonation4 | BloodDonation5
            | BloodDonation6 | BloodDonation7 | BloodDonation8 => Some(BonusGroup::BloodDonation),
            KoreanHistory34 | KoreanHistory12 => Some(BonusGroup::KoreanHistory),
            KoreanLanguage34 | KoreanLanguage12 => Some(BonusGroup::KoreanLanguage),
            EnglishToeic520To729 | EnglishToeic730Plus => Some(BonusGroup::EnglishToeic),
            EnglishToefl59To81 | EnglishToefl82Plus => Some(BonusGroup::EnglishToefl),
            EnglishTeps201To276 | EnglishTeps277Plus => Some(BonusGroup::EnglishTeps),
            NationalMerit | VoluntaryEnlistment | OverseasResident | MultiChild3 | MultiChild2
            | EconomicDisadvantage | DesignatedSpecialty | ChemicalDriverLicense
            | AircraftMaintenance | CareerDesignRecommendation => None,
        }
    }

    pub fn is_korean_test(self) -> bool {
        self.group().is_some_and(BonusGroup::is_korean_test)
    }
}

macro_rules! parse_via_serde {
    ($($ty:ty => $field:literal),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = CalculationError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    parse_variant($field, raw)
                }
            }
        )*
    };
}

parse_via_serde! {
    ApplicantCategory => "category",
    Specialty => "specialty",
    Certificate => "certificate",
    Major => "major",
    Attendance => "attendance",
    BonusClaim => "bonus claim",
}

/// Caller-supplied selections for one score estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInput {
    pub category: ApplicantCategory,
    #[serde(default)]
    pub specialty: Option<Specialty>,
    pub certificate: Certificate,
    #[serde(default)]
    pub major: Major,
    pub attendance: Attendance,
    #[serde(default, alias = "bonusPoints")]
    pub bonus_claims: Vec<BonusClaim>,
    #[serde(default)]
    pub recruitment_month: Option<YearMonth>,
}

impl ApplicantInput {
    pub fn new(
        category: ApplicantCategory,
        certificate: Certificate,
        attendance: Attendance,
    ) -> Self {
        let specialty = match category {
            ApplicantCategory::General => Some(Specialty::General),
            ApplicantCategory::Specialized => None,
        };

        Self {
            category,
            specialty,
            certificate,
            major: Major::default(),
            attendance,
            bonus_claims: Vec::new(),
            recruitment_month: None,
        }
    }

    /// The specialty actually scored. General applicants are always on the
    /// general track; specialized applicants must name a technical track.
    pub fn resolved_specialty(&self) -> Result<Specialty, CalculationError> {
        match (self.category, self.specialty) {
            (ApplicantCategory::General, _) => Ok(Specialty::General),
            (ApplicantCategory::Specialized, Some(Specialty::General)) => {
                Err(CalculationError::invalid(
                    "specialty",
                    "specialized applicants must choose a technical specialty",
                ))
            }
            (ApplicantCategory::Specialized, Some(specialty)) => Ok(specialty),
            (ApplicantCategory::Specialized, None) => Err(CalculationError::invalid(
                "specialty",
                "required when category is specialized",
            )),
        }
    }

    /// Switch specialty, clearing a driving licence that no longer counts.
    pub fn change_specialty(&mut self, specialty: Specialty) {
        if specialty != Specialty::Driving && self.certificate.is_driving_licence() {
            self.certificate = Certificate::None;
        }
        self.specialty = Some(specialty);
    }

    /// Switch category. General applicants move to the general specialty;
    /// specialized applicants without a technical track start on electronics.
    pub fn change_category(&mut self, category: ApplicantCategory) {
        self.category = category;
        match category {
            ApplicantCategory::General => self.change_specialty(Specialty::General),
            ApplicantCategory::Specialized
                if matches!(self.specialty, None | Some(Specialty::General)) =>
            {
                self.change_specialty(Specialty::Electronics)
            }
            ApplicantCategory::Specialized => {}
        }
    }

    /// Add a claim, evicting any other member of its exclusive group.
    pub fn select_bonus(&mut self, claim: BonusClaim) {
        let mut selection = BonusSelection::from_claims(self.bonus_claims.iter().copied());
        selection.select(claim);
        self.bonus_claims = selection.into_claims();
    }

    pub fn deselect_bonus(&mut self, claim: BonusClaim) {
        self.bonus_claims.retain(|existing| *existing != claim);
    }
}
