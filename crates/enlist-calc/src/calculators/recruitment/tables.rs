//! Point tables for the first-round (document) screening score.
//!
//! Every table is an exhaustive `match`, so adding an enum member without a
//! score is a compile error rather than a silent zero.

use serde::Serialize;

use super::domain::{ApplicantCategory, Attendance, BonusClaim, Certificate, Major};

/// Bonus points never exceed this total.
pub const MAX_BONUS_POINTS: u8 = 15;

/// Volunteer hours plus blood donations never exceed this.
pub const MAX_SOCIAL_BONUS_POINTS: u8 = 8;

pub fn certificate_points(category: ApplicantCategory, certificate: Certificate) -> u8 {
    match category {
        ApplicantCategory::General => match certificate {
            Certificate::NationalEngineer | Certificate::LearningL6L5 => 70,
            Certificate::NationalIndustrial | Certificate::LearningL4L3 => 68,
            Certificate::NationalTechnician | Certificate::LearningL2 => 66,
            Certificate::Certified => 64,
            Certificate::Uncertified => 62,
            // The general track has no driving specialty; licences score as none.
            Certificate::LargeSpecial
            | Certificate::Type1Manual
            | Certificate::Type2Manual
            | Certificate::None => 60,
        },
        ApplicantCategory::Specialized => match certificate {
            Certificate::NationalEngineer
            | Certificate::LearningL6L5
            | Certificate::LargeSpecial => 50,
            Certificate::NationalIndustrial
            | Certificate::LearningL4L3
            | Certificate::Type1Manual => 45,
            Certificate::NationalTechnician
            | Certificate::LearningL2
            | Certificate::Type2Manual => 40,
            Certificate::Certified => 30,
            Certificate::Uncertified => 26,
            Certificate::None => 20,
        },
    }
}

pub fn major_points(category: ApplicantCategory, major: Major) -> u8 {
    if category == ApplicantCategory::General {
        return 0;
    }

    match major {
        Major::University4YearCompleted | Major::CreditBank140 => 40,
        Major::University4YearInProgress => 38,
        Major::University3YearCompleted | Major::CreditBank120 => 36,
        Major::University3YearInProgress | Major::HighSchoolRelated => 34,
        Major::University2YearCompleted | Major::Polytechnic2Year | Major::CreditBank80 => 32,
        Major::University2YearInProgress | Major::Polytechnic1Year => 30,
        Major::University1YearCompleted | Major::CreditBank40 => 28,
        Major::University1YearInProgress | Major::Polytechnic6Month => 26,
        Major::HighSchoolUnrelated | Major::NonMajor => 20,
    }
}

pub fn attendance_points(category: ApplicantCategory, attendance: Attendance) -> u8 {
    let best = match category {
        ApplicantCategory::General => 20,
        ApplicantCategory::Specialized => 10,
    };
    let deduction = match attendance {
        Attendance::Absence0 => 0,
        Attendance::Absence1To2 => 1,
        Attendance::Absence3To4 => 2,
        Attendance::Absence5To6 => 3,
        Attendance::Absence7Plus => 4,
    };
    best - deduction
}

pub fn bonus_points(claim: BonusClaim) -> u8 {
    use BonusClaim::*;
    match claim {
        NationalMerit | VoluntaryEnlistment | OverseasResident | MultiChild3
        | EconomicDisadvantage | DesignatedSpecialty | ChemicalDriverLicense
        | AircraftMaintenance => 4,
        MultiChild2 => 2,
        CareerDesignRecommendation => 1,
        VolunteerHours8 | BloodDonation1 => 1,
        VolunteerHours16 | BloodDonation2 => 2,
        VolunteerHours24 | BloodDonation3 => 3,
        VolunteerHours32 | BloodDonation4 => 4,
        VolunteerHours40 | BloodDonation5 => 5,
        VolunteerHours48 | BloodDonation6 => 6,
        VolunteerHours56 | BloodDonation7 => 7,
        VolunteerHours64 | BloodDonation8 => 8,
        KoreanHistory34 | KoreanLanguage34 => 1,
        KoreanHistory12 | KoreanLanguage12 => 2,
        EnglishToeic520To729 | EnglishToefl59To81 | EnglishTeps201To276 => 1,
        EnglishToeic730Plus | EnglishToefl82Plus | EnglishTeps277Plus => 2,
    }
}

/// Maximum obtainable points per component (interview excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCeiling {
    pub certificate: u8,
    pub major: u8,
    pub attendance: u8,
    pub bonus: u8,
    pub total: u8,
}

impl ScoreCeiling {
    pub const fn for_category(category: ApplicantCategory) -> Self {
        match category {
            ApplicantCategory::General => Self {
                certificate: 70,
                major: 0,
                attendance: 20,
                bonus: MAX_BONUS_POINTS,
                total: 105,
            },
            ApplicantCategory::Specialized => Self {
                certificate: 50,
                major: 40,
                attendance: 10,
                bonus: MAX_BONUS_POINTS,
                total: 115,
            },
        }
    }
}
