use crate::core::{Department, DepartmentId, Employee};
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 部門與員工的目錄，只增不減
///
/// 部門名稱查詢永遠回傳第一個符合的部門；`add_department` 不檢查重名，
/// 後加入的同名部門仍存在於集合中，但無法再被查詢到。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Directory {
    departments: Vec<Department>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 無條件新增部門，即使名稱已存在
    pub fn add_department(&mut self, name: impl Into<String>) -> &Department {
        let id = self.push_department(name.into());
        &self.departments[id.0]
    }

    pub fn find_department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.name == name)
    }

    fn find_department_id(&self, name: &str) -> Option<DepartmentId> {
        self.find_department(name).map(|dept| dept.id)
    }

    /// 聘僱員工；部門不存在時直接建立新部門
    pub fn hire_employee(
        &mut self,
        name: impl Into<String>,
        age: u32,
        department_name: &str,
    ) -> &Employee {
        let id = match self.find_department_id(department_name) {
            Some(id) => id,
            None => {
                tracing::debug!("🏢 Department '{}' not found, creating it", department_name);
                self.push_department(department_name.to_string())
            }
        };

        let employee = Employee {
            name: name.into(),
            age,
            department: id,
        };

        let department = &mut self.departments[id.0];
        tracing::debug!("👤 Hired {} into '{}'", employee.name, department.name);

        let position = department.employees.len();
        department.employees.push(employee);
        &department.employees[position]
    }

    fn push_department(&mut self, name: String) -> DepartmentId {
        let id = DepartmentId(self.departments.len());
        self.departments.push(Department::new(id, name));
        id
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.get(id.0)
    }

    /// 解析員工的部門反向參照
    pub fn employer(&self, employee: &Employee) -> Option<&Department> {
        self.department(employee.department)
    }

    /// 全部部門（含無法查詢到的同名部門），依加入順序
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn employee_count(&self) -> usize {
        self.departments.iter().map(|d| d.employees.len()).sum()
    }

    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// 每個部門一行 `名稱 [員工, ...]`，可再附上一次查詢結果
    pub fn write_text(&self, out: &mut dyn Write, find: Option<&str>) -> crate::Result<()> {
        for dept in &self.departments {
            writeln!(out, "{} {}", dept, dept.roster())?;
        }

        if let Some(name) = find {
            match self.find_department(name) {
                Some(dept) => writeln!(out, "found: {} {}", dept, dept.roster())?,
                None => writeln!(out, "found: None")?,
            }
        }
        Ok(())
    }

    /// `{"directory": ..., "found": ...}`，沒有查詢時省略 `found`
    pub fn write_json(&self, out: &mut dyn Write, find: Option<&str>) -> crate::Result<()> {
        let mut report = serde_json::json!({ "directory": self.to_json()? });
        if let Some(name) = find {
            report["found"] = serde_json::to_value(self.find_department(name))?;
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        Ok(())
    }
}

/// 可在多個呼叫者間共用的目錄
///
/// 查詢加聘僱在同一次上鎖內完成，不會因為競爭而多建部門。
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
}

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    // 目錄操作不會中途 panic，中毒的鎖內容仍然一致
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_department(&self, name: impl Into<String>) -> DepartmentId {
        self.lock().add_department(name).id
    }

    pub fn find_department(&self, name: &str) -> Option<Department> {
        self.lock().find_department(name).cloned()
    }

    pub fn hire_employee(&self, name: impl Into<String>, age: u32, department_name: &str) -> Employee {
        self.lock().hire_employee(name, age, department_name).clone()
    }

    pub fn with_directory<R>(&self, f: impl FnOnce(&Directory) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    pub fn snapshot(&self) -> Directory {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_department_returns_new_empty_department() {
        let mut directory = Directory::new();
        let dept = directory.add_department("Marketing");

        assert_eq!(dept.name, "Marketing");
        assert!(dept.employees.is_empty());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_add_department_accepts_empty_name() {
        let mut directory = Directory::new();
        directory.add_department("");

        assert!(directory.find_department("").is_some());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut directory = Directory::new();
        directory.add_department("Sales");

        assert!(directory.find_department("sales").is_none());
        assert!(directory.find_department("Sales").is_some());
    }

    #[test]
    fn test_employer_resolves_back_reference() {
        let mut directory = Directory::new();
        let employee = directory.hire_employee("John", 24, "Sales").clone();

        let employer = directory.employer(&employee).unwrap();
        assert_eq!(employer.name, "Sales");
        assert_eq!(employer.id, employee.department);
    }

    #[test]
    fn test_employee_count() {
        let mut directory = Directory::new();
        directory.hire_employee("John", 24, "Sales");
        directory.hire_employee("Todd", 21, "Information Group");
        directory.add_department("Marketing");

        assert_eq!(directory.len(), 3);
        assert_eq!(directory.employee_count(), 2);
    }

    #[test]
    fn test_to_json_keeps_insertion_order() {
        let mut directory = Directory::new();
        directory.hire_employee("John", 24, "Sales");
        directory.hire_employee("Mary", 21, "Sales");

        let json = directory.to_json().unwrap();
        let sales = &json["departments"][0];
        assert_eq!(sales["name"], "Sales");
        assert_eq!(sales["employees"][0]["name"], "John");
        assert_eq!(sales["employees"][1]["name"], "Mary");
        assert_eq!(sales["employees"][1]["age"], 21);
    }

    #[test]
    fn test_hire_returns_the_appended_employee() {
        let mut directory = Directory::new();
        directory.hire_employee("John", 24, "Sales");
        let mary = directory.hire_employee("Mary", 21, "Sales").clone();

        let sales = directory.find_department("Sales").unwrap();
        assert_eq!(sales.employees.last(), Some(&mary));
        assert_eq!(mary.age, 21);
    }

    #[test]
    fn test_shared_directory_recovers_from_poisoned_lock() {
        let shared = SharedDirectory::default();
        shared.hire_employee("John", 24, "Sales");

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            shared.with_directory(|_| panic!("reader blew up"));
        }));
        assert!(panicked.is_err());

        let mary = shared.hire_employee("Mary", 21, "Sales");
        let sales = shared.find_department("Sales").unwrap();
        assert_eq!(sales.employee_names(), vec!["John", "Mary"]);
        assert_eq!(mary.department, sales.id);
        assert_eq!(shared.snapshot().len(), 1);
    }

    #[test]
    fn test_shared_directory_hires_concurrently_into_one_department() {
        let shared = SharedDirectory::default();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.hire_employee(format!("worker-{}", i), 30, "Ops"))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        shared.with_directory(|directory| {
            assert_eq!(directory.len(), 1);
            assert_eq!(directory.find_department("Ops").unwrap().employees.len(), 8);
        });
    }
}
