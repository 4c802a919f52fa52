//! Company CRUD.

use crate::model::company::{Company, CompanyDraft};
use crate::model::RecordId;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::slots::{next_id, position_of, read_records, write_records, COMPANIES_KEY};
use log::{error, info};

pub struct CompanyService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CompanyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_all(&self) -> Vec<Company> {
        read_records(&self.store, COMPANIES_KEY)
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<Company> {
        self.get_all().into_iter().find(|company| company.id == id)
    }

    /// Appends a company with the next sequential id.
    ///
    /// `None` (nothing written) once the id space is exhausted.
    pub fn create(&self, draft: CompanyDraft) -> Option<Company> {
        let mut companies = self.get_all();
        let Some(id) = next_id(&companies) else {
            error!(
                "event=record_create module=service entity=company status=error error_code=id_space_exhausted records={}",
                companies.len()
            );
            return None;
        };
        let company = Company::from_draft(id, draft);
        companies.push(company.clone());
        write_records(&self.store, COMPANIES_KEY, &companies);
        info!("event=record_create module=service entity=company status=ok id={id}");
        Some(company)
    }

    /// Replaces every field but `id`; `None` when `id` is unknown.
    pub fn update(&self, id: RecordId, draft: CompanyDraft) -> Option<Company> {
        let mut companies = self.get_all();
        let index = position_of(&companies, id)?;
        companies[index] = Company::from_draft(id, draft);
        write_records(&self.store, COMPANIES_KEY, &companies);
        Some(companies.swap_remove(index))
    }

    /// Removes the company; employees pointing at it are left untouched.
    pub fn delete(&self, id: RecordId) -> bool {
        let mut companies = self.get_all();
        let Some(index) = position_of(&companies, id) else {
            return false;
        };
        companies.remove(index);
        write_records(&self.store, COMPANIES_KEY, &companies);
        info!("event=record_delete module=service entity=company status=ok id={id}");
        true
    }
}
