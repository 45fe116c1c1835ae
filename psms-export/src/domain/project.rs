//! Project types.

use super::ids::ProjectId;
use super::value::Value;

/// A project listed under a problem bank.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    /// `None` when the listing carried no usable id; such a project is still
    /// exported, but its terms cannot be fetched.
    pub project_id: Option<ProjectId>,
    pub title: String,
    pub description: String,
}

/// Eligibility and facility terms from a project's detail record.
///
/// Resolution is all-or-nothing: either every field came from the API, or
/// every field is the `"N/A"` sentinel. A partially-populated set is never
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTerms {
    total_requirement: Value,
    min_cgpa: Value,
    max_cgpa: Value,
    stipend: Value,
    branch_eligibility: Value,
}

impl ProjectTerms {
    /// Build terms from the five source fields.
    ///
    /// Returns [`ProjectTerms::not_available`] if any field is missing.
    pub fn resolve(
        total_requirement: Option<Value>,
        min_cgpa: Option<Value>,
        max_cgpa: Option<Value>,
        stipend: Option<Value>,
        branch_eligibility: Option<Value>,
    ) -> Self {
        match (
            total_requirement,
            min_cgpa,
            max_cgpa,
            stipend,
            branch_eligibility,
        ) {
            (Some(total_requirement), Some(min_cgpa), Some(max_cgpa), Some(stipend), Some(branch)) => {
                Self {
                    total_requirement,
                    min_cgpa,
                    max_cgpa,
                    stipend,
                    branch_eligibility: branch,
                }
            }
            _ => Self::not_available(),
        }
    }

    /// Every field set to `"N/A"`.
    pub fn not_available() -> Self {
        Self {
            total_requirement: Value::not_available(),
            min_cgpa: Value::not_available(),
            max_cgpa: Value::not_available(),
            stipend: Value::not_available(),
            branch_eligibility: Value::not_available(),
        }
    }

    pub fn is_available(&self) -> bool {
        *self != Self::not_available()
    }

    pub fn total_requirement(&self) -> &Value {
        &self.total_requirement
    }

    pub fn min_cgpa(&self) -> &Value {
        &self.min_cgpa
    }

    pub fn max_cgpa(&self) -> &Value {
        &self.max_cgpa
    }

    pub fn stipend(&self) -> &Value {
        &self.stipend
    }

    pub fn branch_eligibility(&self) -> &Value {
        &self.branch_eligibility
    }
}
