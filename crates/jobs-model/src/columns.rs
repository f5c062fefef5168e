//! Column names of the raw listing file and the cleaned export.

pub const COMPANY: &str = "Company";
pub const COMPANY_SCORE: &str = "Company Score";
pub const JOB_TITLE: &str = "Job Title";
pub const LOCATION: &str = "Location";
pub const DATE: &str = "Date";
pub const SALARY: &str = "Salary";
pub const SKILLS: &str = "Skills";

/// Recognized columns of the raw input, in source order.
pub const RAW_COLUMNS: [&str; 7] = [
    COMPANY,
    COMPANY_SCORE,
    JOB_TITLE,
    LOCATION,
    DATE,
    SALARY,
    SKILLS,
];

pub const DAYS_SINCE_POSTED: &str = "days_since_posted";
pub const SALARY_MIN: &str = "salary_min";
pub const SALARY_MAX: &str = "salary_max";
pub const SALARY_AVG: &str = "salary_avg";
pub const SALARY_TYPE: &str = "salary_type";

/// Columns of the cleaned dataset export, in output order.
pub const CLEANED_COLUMNS: [&str; 10] = [
    COMPANY,
    COMPANY_SCORE,
    JOB_TITLE,
    LOCATION,
    DAYS_SINCE_POSTED,
    SALARY_MIN,
    SALARY_MAX,
    SALARY_AVG,
    SALARY_TYPE,
    SKILLS,
];
