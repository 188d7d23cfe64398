// Outpatient filter panel state
use crate::domain::dashboard::AppliedFilter;
use crate::domain::error::ValidationError;
use crate::domain::filter::{
    select_render_mode, DepartmentSelection, OutpatientQuery, Period, RenderMode,
};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional overrides, as they arrive from a request
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub department: Option<String>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutpatientViewState {
    department: DepartmentSelection,
    period: Period,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Default for OutpatientViewState {
    fn default() -> Self {
        Self {
            department: DepartmentSelection::All,
            period: Period::Daily,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 10, 31),
        }
    }
}

impl OutpatientViewState {
    pub fn department(&self) -> &DepartmentSelection {
        &self.department
    }

    pub fn select_department(&mut self, department: DepartmentSelection) {
        self.department = department;
    }

    pub fn select_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Replace both bounds; the range must not be inverted
    pub fn set_date_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(ValidationError::InvertedRange {
                    start: s.format(DATE_FORMAT).to_string(),
                    end: e.format(DATE_FORMAT).to_string(),
                });
            }
        }
        self.start_date = start;
        self.end_date = end;
        Ok(())
    }

    pub fn clear_date_range(&mut self) {
        self.start_date = None;
        self.end_date = None;
    }

    /// Apply every present parameter, or none of them if any is invalid
    pub fn apply(&mut self, params: &FilterParams) -> Result<(), ValidationError> {
        let mut next = self.clone();

        if let Some(department) = &params.department {
            next.select_department(department.parse()?);
        }
        if let Some(period) = &params.period {
            next.select_period(period.parse()?);
        }

        let start = match &params.start_date {
            Some(raw) => parse_date(raw)?,
            None => next.start_date,
        };
        let end = match &params.end_date {
            Some(raw) => parse_date(raw)?,
            None => next.end_date,
        };
        next.set_date_range(start, end)?;

        *self = next;
        Ok(())
    }

    pub fn render_mode(&self) -> RenderMode {
        select_render_mode(&self.department)
    }

    pub fn query(&self) -> OutpatientQuery {
        OutpatientQuery {
            department: self.department.to_string(),
            period: self.period,
            start_date: self.start_date.map(format_date),
            end_date: self.end_date.map(format_date),
        }
    }

    pub fn applied_filter(&self) -> AppliedFilter {
        AppliedFilter {
            department: self.department.clone(),
            period: self.period,
            start_date: self.start_date.map(format_date),
            end_date: self.end_date.map(format_date),
        }
    }
}

/// Empty input clears the bound
fn parse_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
