// Outpatient filter values and chart render mode
use super::color::{OVERLAID_DEFAULT_COLOR, STACKED_DEFAULT_COLOR};
use super::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const ALL_DEPARTMENTS: &str = "全科";
pub const ALL_DEPARTMENTS_BY_COLOR: &str = "全科(色分)";
/// Departments offered when the master list cannot be loaded
pub const BUILTIN_DEPARTMENTS: [&str; 3] = ["内科", "小児科", "整形外科"];

/// Aggregation period of the outpatient series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    #[serde(rename = "年毎")]
    Yearly,
    #[serde(rename = "月毎")]
    Monthly,
    #[serde(rename = "日毎")]
    Daily,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Yearly => "年毎",
            Period::Monthly => "月毎",
            Period::Daily => "日毎",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "年毎" => Ok(Period::Yearly),
            "月毎" => Ok(Period::Monthly),
            "日毎" => Ok(Period::Daily),
            other => Err(ValidationError::UnknownPeriod(other.to_string())),
        }
    }
}

/// Which department(s) the outpatient view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentSelection {
    /// Every department summed into one series
    All,
    /// Every department, one series each
    AllByDepartment,
    Single(String),
}

impl DepartmentSelection {
    pub fn as_str(&self) -> &str {
        match self {
            DepartmentSelection::All => ALL_DEPARTMENTS,
            DepartmentSelection::AllByDepartment => ALL_DEPARTMENTS_BY_COLOR,
            DepartmentSelection::Single(name) => name,
        }
    }
}

impl fmt::Display for DepartmentSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepartmentSelection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ValidationError::EmptyDepartment),
            ALL_DEPARTMENTS => Ok(DepartmentSelection::All),
            ALL_DEPARTMENTS_BY_COLOR => Ok(DepartmentSelection::AllByDepartment),
            name => Ok(DepartmentSelection::Single(name.to_string())),
        }
    }
}

impl Serialize for DepartmentSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderMode {
    /// Area chart, values cumulative per category
    Stacked,
    /// Line chart, each series drawn independently
    Overlaid,
}

impl RenderMode {
    pub fn default_color(&self) -> &'static str {
        match self {
            RenderMode::Stacked => STACKED_DEFAULT_COLOR,
            RenderMode::Overlaid => OVERLAID_DEFAULT_COLOR,
        }
    }
}

pub fn select_render_mode(department: &DepartmentSelection) -> RenderMode {
    match department {
        DepartmentSelection::AllByDepartment => RenderMode::Stacked,
        DepartmentSelection::All | DepartmentSelection::Single(_) => RenderMode::Overlaid,
    }
}

/// Variables of the outpatient GraphQL query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientQuery {
    pub department: String,
    pub period: Period,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode() {
        assert_eq!(
            select_render_mode(&DepartmentSelection::AllByDepartment),
            RenderMode::Stacked
        );
        assert_eq!(
            select_render_mode(&DepartmentSelection::All),
            RenderMode::Overlaid
        );
        assert_eq!(
            select_render_mode(&DepartmentSelection::Single("内科".to_string())),
            RenderMode::Overlaid
        );
    }

    #[test]
    fn test_parse_department() {
        assert_eq!("全科".parse::<DepartmentSelection>(), Ok(DepartmentSelection::All));
        assert_eq!("全科(色分)".parse::<DepartmentSelection>(), Ok(DepartmentSelection::AllByDepartment));
        assert_eq!(
            " 小児科 ".parse::<DepartmentSelection>(),
            Ok(DepartmentSelection::Single("小児科".to_string()))
        );
        assert_eq!(
            "".parse::<DepartmentSelection>(),
            Err(ValidationError::EmptyDepartment)
        );
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("年毎".parse::<Period>(), Ok(Period::Yearly));
        assert_eq!("月毎".parse::<Period>(), Ok(Period::Monthly));
        assert_eq!("日毎".parse::<Period>(), Ok(Period::Daily));
        assert_eq!(
            "weekly".parse::<Period>(),
            Err(ValidationError::UnknownPeriod("weekly".to_string()))
        );
    }

    #[test]
    fn test_query_variables_wire_format() {
        let query = OutpatientQuery {
            department: "全科".to_string(),
            period: Period::Monthly,
            start_date: Some("2025-01-01".to_string()),
            end_date: None,
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "department": "全科",
                "period": "月毎",
                "startDate": "2025-01-01",
                "endDate": null
            })
        );
    }
}
