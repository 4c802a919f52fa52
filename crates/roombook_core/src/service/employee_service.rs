//! Employee CRUD with company resolution.

use crate::model::company::Company;
use crate::model::employee::{Employee, EmployeeDetails, EmployeeDraft};
use crate::model::RecordId;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::slots::{next_id, position_of, read_records, write_records, EMPLOYEES_KEY};
use crate::service::company_service::CompanyService;
use log::{error, info};

pub struct EmployeeService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EmployeeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All employees, each with its company attached (`None` when dangling).
    pub fn get_all(&self) -> Vec<EmployeeDetails> {
        let companies = CompanyService::new(&self.store).get_all();
        self.stored()
            .into_iter()
            .map(|employee| attach_company(employee, &companies))
            .collect()
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<EmployeeDetails> {
        self.get_all()
            .into_iter()
            .find(|details| details.employee.id == id)
    }

    pub fn get_by_company(&self, company_id: RecordId) -> Vec<EmployeeDetails> {
        self.get_all()
            .into_iter()
            .filter(|details| details.employee.company_id == company_id)
            .collect()
    }

    pub fn create(&self, draft: EmployeeDraft) -> Option<EmployeeDetails> {
        let mut employees = self.stored();
        let Some(id) = next_id(&employees) else {
            error!(
                "event=record_create module=service entity=employee status=error error_code=id_space_exhausted records={}",
                employees.len()
            );
            return None;
        };
        let employee = Employee::from_draft(id, draft);
        employees.push(employee.clone());
        write_records(&self.store, EMPLOYEES_KEY, &employees);
        info!(
            "event=record_create module=service entity=employee status=ok id={} company_id={}",
            employee.id, employee.company_id
        );
        Some(self.resolve(employee))
    }

    pub fn update(&self, id: RecordId, draft: EmployeeDraft) -> Option<EmployeeDetails> {
        let mut employees = self.stored();
        let index = position_of(&employees, id)?;
        employees[index] = Employee::from_draft(id, draft);
        write_records(&self.store, EMPLOYEES_KEY, &employees);
        Some(self.resolve(employees.swap_remove(index)))
    }

    /// Removes the employee; their reservations are left untouched.
    pub fn delete(&self, id: RecordId) -> bool {
        let mut employees = self.stored();
        let Some(index) = position_of(&employees, id) else {
            return false;
        };
        employees.remove(index);
        write_records(&self.store, EMPLOYEES_KEY, &employees);
        info!("event=record_delete module=service entity=employee status=ok id={id}");
        true
    }

    fn stored(&self) -> Vec<Employee> {
        read_records(&self.store, EMPLOYEES_KEY)
    }

    fn resolve(&self, employee: Employee) -> EmployeeDetails {
        let companies = CompanyService::new(&self.store).get_all();
        attach_company(employee, &companies)
    }
}

fn attach_company(employee: Employee, companies: &[Company]) -> EmployeeDetails {
    let company = companies
        .iter()
        .find(|company| company.id == employee.company_id)
        .cloned();
    EmployeeDetails { employee, company }
}
