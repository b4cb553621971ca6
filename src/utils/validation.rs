use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 檢查選取的範例名稱都存在於目錄中
pub fn validate_known_names(field_name: &str, names: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in names {
        if !known_set.contains(name.as_str()) {
            return Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!("Unknown example. Available: {}", known.join(", ")),
            });
        }
    }

    Ok(())
}

/// 一筆待聘僱的員工：`NAME:AGE:DEPARTMENT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HireSpec {
    pub name: String,
    pub age: u32,
    pub department: String,
}

/// 解析 `NAME:AGE:DEPARTMENT`，部門名稱可以包含冒號以外的任何字元（含空白）
pub fn parse_hire_spec(field_name: &str, raw: &str) -> Result<HireSpec> {
    let mut parts = raw.splitn(3, ':');
    let (name, age, department) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(age), Some(department)) => (name, age, department),
        _ => {
            return Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: raw.to_string(),
                reason: "Expected NAME:AGE:DEPARTMENT".to_string(),
            })
        }
    };

    let age = age
        .trim()
        .parse::<u32>()
        .map_err(|e| CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: format!("Age is not a number: {}", e),
        })?;

    Ok(HireSpec {
        name: name.to_string(),
        age,
        department: department.to_string(),
    })
}
