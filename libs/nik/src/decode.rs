//! Decoding a NIK into a structured record.
//!
//! # Century resolution
//!
//! Only two digits of the birth year are stored. A year field `y` is placed
//! in the reference date's century when `y` is not greater than the
//! reference's two-digit year, and in the previous century otherwise. With a
//! reference year of 2025, `97` becomes 1997 and `05` becomes 2005.
//!
//! This cannot represent anyone aged 100 or more: a person born in 1920
//! decodes as born in 2020. The rule is kept as is. Records whose alternate
//! reading would still be a plausible age carry `century_ambiguous = true`
//! so callers can warn.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::code::{DateLayout, Nik};
use crate::cohort::{Gender, Generation, Zodiac};
use crate::regions::{city_location, province_name, Location};
use crate::IdentifierError;

/// Oldest age treated as plausible when flagging century ambiguity.
pub const MAX_PLAUSIBLE_AGE: i32 = 110;

/// A fully decoded NIK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierRecord {
    pub raw_code: Nik,
    pub province_code: String,
    pub city_code: String,
    pub district_code: String,
    /// Province named by the two-digit table.
    pub province: String,
    /// City and province named by the four-digit table.
    pub location: Location,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    /// Group order the birth date was read with.
    pub date_layout: DateLayout,
    pub sequence: String,
    pub gender: Gender,
    /// Whole years between the birth date and the reference date.
    pub age: i32,
    pub zodiac: Zodiac,
    pub generation: Generation,
    pub century_ambiguous: bool,
}

impl IdentifierRecord {
    /// Birth date as a calendar date.
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day)
    }
}

/// Decodes a code relative to today's local date.
pub fn decode(code: &str) -> Result<IdentifierRecord, IdentifierError> {
    decode_at(code, Local::now().date_naive())
}

/// Decodes a code relative to a fixed reference date.
pub fn decode_at(code: &str, reference: NaiveDate) -> Result<IdentifierRecord, IdentifierError> {
    let nik = Nik::parse(code)?;
    decode_nik(&nik, reference)
}

/// Decodes an already validated code relative to a fixed reference date.
pub fn decode_nik(nik: &Nik, reference: NaiveDate) -> Result<IdentifierRecord, IdentifierError> {
    let birth = read_birth_date(nik, reference)?;
    let age = age_on(birth.date, reference);
    let century_ambiguous = age + 100 <= MAX_PLAUSIBLE_AGE;
    if century_ambiguous {
        debug!(
            nik = %nik,
            birth_year = birth.date.year(),
            "two-digit birth year also fits the previous century"
        );
    }

    let month = birth.date.month();
    let day = birth.date.day();
    let zodiac = Zodiac::from_month_day(month, day).ok_or(IdentifierError::InvalidBirthDate {
        year: birth.date.year(),
        month,
        day,
    })?;

    Ok(IdentifierRecord {
        raw_code: *nik,
        province_code: nik.province_code().to_string(),
        city_code: nik.city_code().to_string(),
        district_code: nik.district_code().to_string(),
        province: province_name(nik.province_code()).to_string(),
        location: city_location(nik.city_code()),
        birth_year: birth.date.year(),
        birth_month: month,
        birth_day: day,
        date_layout: birth.layout,
        sequence: nik.sequence().to_string(),
        gender: Gender::from_digit(nik.gender_digit()),
        age,
        zodiac,
        generation: Generation::from_birth_year(birth.date.year()),
        century_ambiguous,
    })
}

/// Places a two-digit year relative to the reference year.
#[must_use]
pub fn resolve_century(year_2digit: u32, reference_year: i32) -> i32 {
    let current = reference_year.rem_euclid(100);
    let century = reference_year - current;
    let y = year_2digit as i32;
    if y <= current {
        century + y
    } else {
        century - 100 + y
    }
}

/// Completed years from `birth` to `reference`.
#[must_use]
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let before_birthday = (reference.month(), reference.day()) < (birth.month(), birth.day());
    reference.year() - birth.year() - i32::from(before_birthday)
}

struct BirthDate {
    date: NaiveDate,
    layout: DateLayout,
}

/// Reads the birth date with the `YY MM DD` offsets, falling back to the
/// `DD MM YY` card order when the first reading is not a past calendar date.
fn read_birth_date(nik: &Nik, reference: NaiveDate) -> Result<BirthDate, IdentifierError> {
    let groups = nik.date_groups();
    match birth_date_in(DateLayout::YearMonthDay, groups, reference) {
        Ok(date) => Ok(BirthDate {
            date,
            layout: DateLayout::YearMonthDay,
        }),
        Err(primary) => {
            let date = birth_date_in(DateLayout::DayMonthYear, groups, reference)
                .map_err(|_| primary)?;
            debug!(nik = %nik, "birth date read in day-month-year order");
            Ok(BirthDate {
                date,
                layout: DateLayout::DayMonthYear,
            })
        }
    }
}

fn birth_date_in(
    layout: DateLayout,
    groups: [u32; 3],
    reference: NaiveDate,
) -> Result<NaiveDate, IdentifierError> {
    let (yy, month, day) = layout.split(groups);
    let year = resolve_century(yy, reference.year());
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(IdentifierError::InvalidBirthDate { year, month, day })?;
    if date > reference {
        return Err(IdentifierError::BirthDateAfterReference {
            birth: date,
            reference,
        });
    }
    Ok(date)
}
