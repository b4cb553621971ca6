use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 部門在目錄中的位置；目錄只增不減，所以 id 一旦發出就永遠有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepartmentId(pub(crate) usize);

impl DepartmentId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    /// 聘僱此員工的部門（非擁有關係）
    pub department: DepartmentId,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub employees: Vec<Employee>,
}

impl Department {
    pub(crate) fn new(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            employees: Vec::new(),
        }
    }

    pub fn employee_names(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.name.as_str()).collect()
    }

    /// `[John, Mary]`
    pub fn roster(&self) -> String {
        format!("[{}]", self.employee_names().join(", "))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 單一範例的執行結果
#[derive(Debug, Clone)]
pub struct ExampleReport {
    pub name: String,
    pub output: String,
    pub duration: Duration,
}

impl ExampleReport {
    pub fn line_count(&self) -> usize {
        self.output.lines().count()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}
