use crate::core::directory::Directory;
use crate::utils::error::Result;
use std::io::Write;

/// 未找到部門時的輸出
pub const NOT_FOUND: &str = "None";

fn roster_line(directory: &Directory, department_name: &str) -> String {
    directory
        .find_department(department_name)
        .map(|dept| dept.roster())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// 簡單工廠：聘僱員工時自動建立部門
pub fn simple_factory_demo(out: &mut dyn Write) -> Result<()> {
    let mut directory = Directory::new();
    run_simple_factory(&mut directory, out)
}

pub fn run_simple_factory(directory: &mut Directory, out: &mut dyn Write) -> Result<()> {
    directory.hire_employee("John", 24, "Sales");
    directory.hire_employee("Mary", 21, "Sales");
    directory.hire_employee("Todd", 21, "Information Group");

    directory.add_department("Marketing");
    for dept in directory.departments() {
        writeln!(out, "{}", dept)?;
    }

    writeln!(out, "{}", roster_line(directory, "Information Group"))?;
    writeln!(out, "{}", roster_line(directory, "Sales"))?;

    // 同一個查詢，從部門那一側取得
    let sales = directory.find_department("Sales").map(|dept| dept.id);
    let via_id = sales
        .and_then(|id| directory.department(id))
        .map(|dept| dept.roster())
        .unwrap_or_else(|| NOT_FOUND.to_string());
    writeln!(out, "{}", via_id)?;

    Ok(())
}
