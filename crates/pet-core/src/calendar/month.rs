use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreWizardError;

const MONTH_NAMES: [&str; 12] = ["January", "February", "March", "April", "May", "June", "July", "August",
                                 "September", "October", "November", "December"];

/// Mes de calendario con índice de mes base cero (0 = enero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month_index: u32,
}

impl YearMonth {
    pub fn new(year: i32, month_index: u32) -> Result<Self, CoreWizardError> {
        if month_index > 11 || NaiveDate::from_ymd_opt(year, month_index + 1, 1).is_none() {
            return Err(CoreWizardError::InvalidMonth { year, month_index });
        }
        Ok(Self { year, month_index })
    }

    /// Mes que contiene `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(),
               month_index: date.month0() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Día `day` del mes, si existe.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, day)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        let next = self.next().first_day();
        u32::try_from((next - first).num_days()).unwrap_or(0)
    }

    /// Celdas vacías antes del día 1 (0 = domingo).
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Mes anterior. En el límite inferior del calendario devuelve el mismo mes.
    pub fn prev(&self) -> Self {
        let (year, month_index) = if self.month_index == 0 {
            (self.year - 1, 11)
        } else {
            (self.year, self.month_index - 1)
        };
        Self::new(year, month_index).unwrap_or(*self)
    }

    /// Mes siguiente. En el límite superior del calendario devuelve el mismo mes.
    pub fn next(&self) -> Self {
        let (year, month_index) = if self.month_index == 11 {
            (self.year + 1, 0)
        } else {
            (self.year, self.month_index + 1)
        };
        Self::new(year, month_index).unwrap_or(*self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month_index
    }

    /// Etiqueta visible, p.ej. "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month_index as usize], self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn june_2024_starts_on_saturday_with_30_days() {
        let m = YearMonth::new(2024, 5).unwrap();
        assert_eq!(m.leading_blanks(), 6);
        assert_eq!(m.days_in_month(), 30);
        assert_eq!(m.label(), "June 2024");
        assert_eq!(m.to_string(), "2024-06");
    }

    #[test]
    fn february_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, 1).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 1).unwrap().days_in_month(), 28);
    }

    #[test]
    fn navigation_wraps_years() {
        let dec = YearMonth::new(2024, 11).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2025, 0).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(YearMonth::new(2024, 0).unwrap().prev(), YearMonth::new(2023, 11).unwrap());
    }

    #[test]
    fn month_index_is_zero_based_and_validated() {
        assert!(YearMonth::new(2024, 12).is_err());
        let d = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        assert_eq!(YearMonth::of(d).month_index(), 8);
        assert!(YearMonth::of(d).contains(d));
    }
}
