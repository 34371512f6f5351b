//! Subject types for the property tests.
//!
//! Compiled into the integration tests through `#[path]`, and scanned from disk by the CLI tests, so both paths
//! describe the same declarations.

#![allow(dead_code)]

use beanprobe::accessors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Bean-style: private fields behind `get_`/`set_` pairs.
#[derive(Debug, Clone, Default)]
pub struct EmployeeBean {
    first_name: String,
    last_name: String,
    start_date: CalendarDate,
}

#[accessors]
impl EmployeeBean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name = first_name;
    }

    pub fn get_last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: String) {
        self.last_name = last_name;
    }

    pub fn get_start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: CalendarDate) {
        self.start_date = start_date;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Pojo-style: public fields, and a single public reader whose name differs from the field it reads.
#[derive(Debug, Clone, Default)]
pub struct EmployeePojo {
    pub first_name: String,
    pub last_name: String,
    pub start_date: CalendarDate,
}

#[accessors]
impl EmployeePojo {
    pub fn get_start(&self) -> CalendarDate {
        self.start_date
    }

    fn set_start(&mut self, start: CalendarDate) {
        self.start_date = start;
    }
}
