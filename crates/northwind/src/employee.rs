use chrono::NaiveDate;

use entysync_core::{ByIdSynchronizer, Entity};

/// Employee, with an optional "reports to" relation onto another employee.
#[derive(Debug, Clone, Default)]
pub struct Employee<'a> {
    pub employee_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub home_phone: Option<String>,
    pub extension: Option<String>,
    pub notes: Option<String>,
    reports_to: ByIdSynchronizer<'a, Employee<'a>>,
}

impl<'a> Employee<'a> {
    pub fn new(
        employee_id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn reports_to(&self) -> Option<i32> {
        self.reports_to.id_or_none()
    }

    pub fn set_reports_to(&mut self, employee_id: Option<i32>) {
        self.reports_to.set_id_or_none(employee_id);
    }

    pub fn reports_to_employee(&self) -> Option<&'a Employee<'a>> {
        self.reports_to.entity()
    }

    pub fn set_reports_to_employee(&mut self, manager: Option<&'a Employee<'a>>) {
        self.reports_to.set_entity(manager);
    }
}

impl Entity for Employee<'_> {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.employee_id
    }
}
