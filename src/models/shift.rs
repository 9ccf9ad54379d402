//! Shift codes, categories and hour policies.
//!
//! Every shift code the engine understands is listed once in
//! [`SHIFT_VOCABULARY`]. Each [`ShiftCategory`] maps to exactly one
//! [`HourPolicy`], which decides which hour bucket its duration lands in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code recorded for a day without any shift.
pub const NOT_WORKED_CODE: &str = "0";

/// Normalizes a raw schedule cell into a shift code.
///
/// Trims whitespace and upper-cases; blank cells become [`NOT_WORKED_CODE`].
///
/// # Examples
///
/// ```
/// use shift_ledger::models::normalize_code;
///
/// assert_eq!(normalize_code(" dts "), "DTS");
/// assert_eq!(normalize_code("   "), "0");
/// ```
pub fn normalize_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NOT_WORKED_CODE.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Semantic category of a shift code.
///
/// Serialized with the category names used on the source schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftCategory {
    /// Day shift.
    #[serde(rename = "DIA")]
    Day,
    /// Night shift.
    #[serde(rename = "NOITE")]
    Night,
    /// Day shift taken over from a colleague.
    #[serde(rename = "TROCA_DIA")]
    DaySwap,
    /// Night shift taken over from a colleague.
    #[serde(rename = "TROCA_NOITE")]
    NightSwap,
    /// Afternoon shift taken over from a colleague.
    #[serde(rename = "TROCA_TARDE")]
    AfternoonSwap,
    /// Full administrative day.
    #[serde(rename = "ADMINISTRATIVO")]
    Administrative,
    /// Administrative morning.
    #[serde(rename = "ADMINISTRATIVO_MANHA")]
    AdministrativeMorning,
    /// Administrative afternoon.
    #[serde(rename = "ADMINISTRATIVO_TARDE")]
    AdministrativeAfternoon,
    /// Supplementary work on a day shift.
    #[serde(rename = "DIA_TRABALHO_SUPLEMENTAR")]
    DaySupplementary,
    /// Supplementary work on a night shift.
    #[serde(rename = "NOITE_TRABALHO_SUPLEMENTAR")]
    NightSupplementary,
    /// Supplementary day work on a public holiday.
    #[serde(rename = "DIA_TRABALHO_SUPLEMENTAR_FERIADO")]
    DaySupplementaryHoliday,
    /// Supplementary night work on a public holiday.
    #[serde(rename = "NOITE_TRABALHO_SUPLEMENTAR_FERIADO")]
    NightSupplementaryHoliday,
    /// Supplementary day work covering a swap.
    #[serde(rename = "DIA_TRABALHO_SUPLEMENTAR_TROCA")]
    DaySupplementarySwap,
    /// Supplementary night work covering a swap.
    #[serde(rename = "NOITE_TRABALHO_SUPLEMENTAR_TROCA")]
    NightSupplementarySwap,
    /// Annual vacation.
    #[serde(rename = "FERIAS")]
    Vacation,
    /// Leave of absence.
    #[serde(rename = "LICENCA")]
    Leave,
    /// Sick leave.
    #[serde(rename = "BAIXA")]
    SickLeave,
    /// Unjustified absence.
    #[serde(rename = "FALTA_INJUSTIFICADA")]
    UnjustifiedAbsence,
    /// Justified absence.
    #[serde(rename = "FALTA_JUSTIFICADA")]
    JustifiedAbsence,
    /// Dispensation from duty.
    #[serde(rename = "DISPENSA")]
    Dispensation,
    /// Obligatory rest day worked; its hours are owed back as rest.
    #[serde(rename = "FOLGA_OBRIGATORIA_SUPLEMENTAR")]
    ObligatoryRestDay,
    /// No shift recorded.
    #[serde(rename = "NAO_TRABALHADO")]
    NotWorked,
    /// A code outside the vocabulary.
    #[serde(rename = "OUTRO_NAO_CLASSIFICADO")]
    UnclassifiedOther,
}

/// How a category's duration is split across the hour buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourPolicy {
    /// No hours are counted, whatever the configured duration.
    NoHours,
    /// Normal hours up to the daily cap, the excess is overtime.
    Ordinary,
    /// Every hour is overtime.
    Overtime,
    /// Every hour goes to the obligatory-rest-day bucket.
    ObligatoryRest,
}

/// Exact code → category table. Add new shift codes here.
pub const SHIFT_VOCABULARY: &[(&str, ShiftCategory)] = &[
    ("D", ShiftCategory::Day),
    ("N", ShiftCategory::Night),
    ("TD", ShiftCategory::DaySwap),
    ("TN", ShiftCategory::NightSwap),
    ("TT", ShiftCategory::AfternoonSwap),
    ("A", ShiftCategory::Administrative),
    ("AM", ShiftCategory::AdministrativeMorning),
    ("AT", ShiftCategory::AdministrativeAfternoon),
    ("DTS", ShiftCategory::DaySupplementary),
    ("NTS", ShiftCategory::NightSupplementary),
    ("DTSF", ShiftCategory::DaySupplementaryHoliday),
    ("NTSF", ShiftCategory::NightSupplementaryHoliday),
    ("DTST", ShiftCategory::DaySupplementarySwap),
    ("NTST", ShiftCategory::NightSupplementarySwap),
    ("F", ShiftCategory::Vacation),
    ("L", ShiftCategory::Leave),
    ("B", ShiftCategory::SickLeave),
    ("FI", ShiftCategory::UnjustifiedAbsence),
    ("FJ", ShiftCategory::JustifiedAbsence),
    ("DP", ShiftCategory::Dispensation),
    ("FOTS", ShiftCategory::ObligatoryRestDay),
    (NOT_WORKED_CODE, ShiftCategory::NotWorked),
];

impl ShiftCategory {
    /// Looks up the category of a normalized code.
    ///
    /// Returns `None` for codes outside [`SHIFT_VOCABULARY`]; the empty code
    /// counts as not worked.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_ledger::models::ShiftCategory;
    ///
    /// assert_eq!(ShiftCategory::from_code("FOTS"), Some(ShiftCategory::ObligatoryRestDay));
    /// assert_eq!(ShiftCategory::from_code(""), Some(ShiftCategory::NotWorked));
    /// assert_eq!(ShiftCategory::from_code("XYZ"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        if code.is_empty() {
            return Some(ShiftCategory::NotWorked);
        }
        SHIFT_VOCABULARY
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, category)| *category)
    }

    /// Returns the hour policy for this category.
    pub fn policy(self) -> HourPolicy {
        use ShiftCategory::*;

        match self {
            NotWorked | Vacation | Leave | SickLeave | UnjustifiedAbsence | JustifiedAbsence
            | Dispensation => HourPolicy::NoHours,
            ObligatoryRestDay => HourPolicy::ObligatoryRest,
            DaySupplementary
            | NightSupplementary
            | DaySupplementaryHoliday
            | NightSupplementaryHoliday
            | DaySupplementarySwap
            | NightSupplementarySwap => HourPolicy::Overtime,
            Day | Night | DaySwap | NightSwap | AfternoonSwap | Administrative
            | AdministrativeMorning | AdministrativeAfternoon | UnclassifiedOther => {
                HourPolicy::Ordinary
            }
        }
    }

    /// Returns true if days in this category can carry hours.
    pub fn is_working(self) -> bool {
        self.policy() != HourPolicy::NoHours
    }

    /// Returns the category name used on schedules and in serialized output.
    pub fn as_str(self) -> &'static str {
        use ShiftCategory::*;

        match self {
            Day => "DIA",
            Night => "NOITE",
            DaySwap => "TROCA_DIA",
            NightSwap => "TROCA_NOITE",
            AfternoonSwap => "TROCA_TARDE",
            Administrative => "ADMINISTRATIVO",
            AdministrativeMorning => "ADMINISTRATIVO_MANHA",
            AdministrativeAfternoon => "ADMINISTRATIVO_TARDE",
            DaySupplementary => "DIA_TRABALHO_SUPLEMENTAR",
            NightSupplementary => "NOITE_TRABALHO_SUPLEMENTAR",
            DaySupplementaryHoliday => "DIA_TRABALHO_SUPLEMENTAR_FERIADO",
            NightSupplementaryHoliday => "NOITE_TRABALHO_SUPLEMENTAR_FERIADO",
            DaySupplementarySwap => "DIA_TRABALHO_SUPLEMENTAR_TROCA",
            NightSupplementarySwap => "NOITE_TRABALHO_SUPLEMENTAR_TROCA",
            Vacation => "FERIAS",
            Leave => "LICENCA",
            SickLeave => "BAIXA",
            UnjustifiedAbsence => "FALTA_INJUSTIFICADA",
            JustifiedAbsence => "FALTA_JUSTIFICADA",
            Dispensation => "DISPENSA",
            ObligatoryRestDay => "FOLGA_OBRIGATORIA_SUPLEMENTAR",
            NotWorked => "NAO_TRABALHADO",
            UnclassifiedOther => "OUTRO_NAO_CLASSIFICADO",
        }
    }
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
