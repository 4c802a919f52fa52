//! Company tenant record.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// A tenant company of the building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    /// CNPJ, either masked (`11.222.333/0001-81`) or bare digits.
    pub tax_id: String,
}

/// Company fields supplied on create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub tax_id: String,
}

impl Company {
    pub fn from_draft(id: RecordId, draft: CompanyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            tax_id: draft.tax_id,
        }
    }
}

impl Record for Company {
    fn id(&self) -> RecordId {
        self.id
    }
}
