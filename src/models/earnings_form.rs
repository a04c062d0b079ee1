//! Raw form input for an earnings calculation.
//!
//! This module defines [`EarningsForm`], the text exactly as the user typed
//! it into each field, and [`EarningsField`], which names those fields.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifies one of the input fields of the earnings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningsField {
    /// Ordinary hourly rate.
    EarningsPerHour,
    /// Ordinary hours worked per day.
    HoursWorkedPerDay,
    /// Days worked in the month.
    DaysWorkedPerMonth,
    /// Overtime hours worked in the month.
    OvertimeHoursInMonth,
    /// Percentage uplift applied to the hourly rate for overtime hours.
    OvertimeSurchargePercent,
    /// Percentage of base earnings paid as a night additional.
    NightSurchargePercent,
}

impl EarningsField {
    /// Every field, in the order the form presents them.
    pub const ALL: [EarningsField; 6] = [
        EarningsField::EarningsPerHour,
        EarningsField::HoursWorkedPerDay,
        EarningsField::DaysWorkedPerMonth,
        EarningsField::OvertimeHoursInMonth,
        EarningsField::OvertimeSurchargePercent,
        EarningsField::NightSurchargePercent,
    ];

    /// Returns the snake_case name used in JSON and in audit steps.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_control::models::EarningsField;
    ///
    /// assert_eq!(EarningsField::EarningsPerHour.as_str(), "earnings_per_hour");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            EarningsField::EarningsPerHour => "earnings_per_hour",
            EarningsField::HoursWorkedPerDay => "hours_worked_per_day",
            EarningsField::DaysWorkedPerMonth => "days_worked_per_month",
            EarningsField::OvertimeHoursInMonth => "overtime_hours_in_month",
            EarningsField::OvertimeSurchargePercent => "overtime_surcharge_percent",
            EarningsField::NightSurchargePercent => "night_surcharge_percent",
        }
    }
}

/// The raw text of every field on the earnings form.
///
/// Only a JSON object deserializes into a form. Fields missing from it,
/// or set to `null`, become the empty string, which later parses to zero.
/// JSON numbers are accepted as well and kept in their textual form so
/// that they go through the same parser. Unknown keys are ignored.
///
/// # Example
///
/// ```
/// use overtime_control::models::EarningsForm;
///
/// let form: EarningsForm = serde_json::from_str(r#"{"earnings_per_hour": "10"}"#).unwrap();
/// assert_eq!(form.earnings_per_hour, "10");
/// assert_eq!(form.hours_worked_per_day, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EarningsForm {
    /// Text of the hourly rate field.
    pub earnings_per_hour: String,
    /// Text of the hours-per-day field.
    pub hours_worked_per_day: String,
    /// Text of the days-per-month field.
    pub days_worked_per_month: String,
    /// Text of the overtime hours field.
    pub overtime_hours_in_month: String,
    /// Text of the overtime surcharge percentage field.
    pub overtime_surcharge_percent: String,
    /// Text of the night surcharge percentage field.
    pub night_surcharge_percent: String,
}

impl EarningsForm {
    /// Returns the raw text held by `field`.
    pub fn value(&self, field: EarningsField) -> &str {
        match field {
            EarningsField::EarningsPerHour => &self.earnings_per_hour,
            EarningsField::HoursWorkedPerDay => &self.hours_worked_per_day,
            EarningsField::DaysWorkedPerMonth => &self.days_worked_per_month,
            EarningsField::OvertimeHoursInMonth => &self.overtime_hours_in_month,
            EarningsField::OvertimeSurchargePercent => &self.overtime_surcharge_percent,
            EarningsField::NightSurchargePercent => &self.night_surcharge_percent,
        }
    }

    /// Replaces the text of `field`.
    pub fn set(&mut self, field: EarningsField, text: impl Into<String>) {
        let text = text.into();
        match field {
            EarningsField::EarningsPerHour => self.earnings_per_hour = text,
            EarningsField::HoursWorkedPerDay => self.hours_worked_per_day = text,
            EarningsField::DaysWorkedPerMonth => self.days_worked_per_month = text,
            EarningsField::OvertimeHoursInMonth => self.overtime_hours_in_month = text,
            EarningsField::OvertimeSurchargePercent => self.overtime_surcharge_percent = text,
            EarningsField::NightSurchargePercent => self.night_surcharge_percent = text,
        }
    }
}

impl<'de> Deserialize<'de> for EarningsForm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FormVisitor)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Number(number) => number.to_string(),
        }
    }
}

/// Accepts maps only, so arrays are never read positionally into fields.
struct FormVisitor;

impl<'de> Visitor<'de> for FormVisitor {
    type Value = EarningsForm;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object of earnings form fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut form = EarningsForm::default();

        while let Some(key) = map.next_key::<String>()? {
            match EarningsField::ALL.into_iter().find(|f| f.as_str() == key) {
                Some(field) => {
                    let text = map
                        .next_value::<Option<FieldValue>>()?
                        .map(FieldValue::into_text)
                        .unwrap_or_default();
                    form.set(field, text);
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(form)
    }
}
