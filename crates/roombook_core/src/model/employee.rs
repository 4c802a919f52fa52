//! Employee record and its company-resolved read model.

use super::company::Company;
use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Stored employee shape; `company_id` is not checked against companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub company_id: RecordId,
}

/// Employee fields supplied on create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    /// `0` means "not selected".
    pub company_id: RecordId,
}

/// Employee with its company attached at read time.
///
/// Serializes flat, with an extra `company` field (`null` when dangling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    #[serde(flatten)]
    pub employee: Employee,
    pub company: Option<Company>,
}

impl Employee {
    pub fn from_draft(id: RecordId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            company_id: draft.company_id,
        }
    }
}

impl Record for Employee {
    fn id(&self) -> RecordId {
        self.id
    }
}
