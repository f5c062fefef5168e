//! Normalization of free-text listing fields.
//!
//! - **salary**: salary expressions into ranges with a source unit
//! - **posting_age**: relative posting ages into day counts
//! - **skills**: skill lists into canonical tokens and per-skill rows
//! - **numeric**: finite number parsing shared by the above

pub mod numeric;
pub mod posting_age;
pub mod salary;
pub mod skills;

pub use numeric::{parse_finite_f64, parse_i64};
pub use posting_age::normalize_posting_age;
pub use salary::{
    SalaryParts, clean_salary_text, normalize_salary, parse_salary_bound, split_salary,
};
pub use skills::{canonical_skill, explode_skills, tokenize_skills};
