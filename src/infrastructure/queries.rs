// GraphQL query documents

pub const GET_INPATIENT_DATA: &str = r#"
query GetInpatientData {
  inpatientData {
    title
    labels
    values
  }
}
"#;

pub const GET_OUTPATIENT_DATA: &str = r#"
query GetOutpatientData(
  $department: String!
  $period: String!
  $startDate: String
  $endDate: String
) {
  outpatientData(
    department: $department
    period: $period
    startDate: $startDate
    endDate: $endDate
  ) {
    title
    labels
    datasets {
      label
      data
      borderColor
      backgroundColor
      fill
    }
  }
}
"#;

pub const GET_DEPARTMENTS: &str = r#"
query GetDepartments {
  departments {
    id
    name
    seq
    isDisplay
    color
  }
}
"#;
