//! Table names for each catalog entity.
//!
//! Every simple entity persists into the same two-table shape (base +
//! translations, uniform columns), so the repository only needs the names.

use bizdir_core::catalog::EntityDescriptor;

/// Table pair backing one simple localized entity.
#[derive(Debug)]
pub struct EntityTables {
    pub base: &'static str,
    pub translations: &'static str,
}

pub const CATEGORY_TABLES: EntityTables = EntityTables {
    base: "categories",
    translations: "category_translations",
};

pub const COUNTRY_TABLES: EntityTables = EntityTables {
    base: "countries",
    translations: "country_translations",
};

pub const INDUSTRY_TABLES: EntityTables = EntityTables {
    base: "industries",
    translations: "industry_translations",
};

pub const EMPLOYEE_JOB_TITLE_TABLES: EntityTables = EntityTables {
    base: "employee_job_titles",
    translations: "employee_job_title_translations",
};

pub const MARITAL_STATUS_TABLES: EntityTables = EntityTables {
    base: "marital_statuses",
    translations: "marital_status_translations",
};

pub const EDUCATION_LEVEL_TABLES: EntityTables = EntityTables {
    base: "education_levels",
    translations: "education_level_translations",
};

pub const MISSION_STATEMENT_TABLES: EntityTables = EntityTables {
    base: "mission_statements",
    translations: "mission_statement_translations",
};

pub const CHARITY_TABLES: EntityTables = EntityTables {
    base: "charities",
    translations: "charity_translations",
};

pub const ROLE_STATUS_TABLES: EntityTables = EntityTables {
    base: "role_statuses",
    translations: "role_status_translations",
};

/// Resolve the table pair for a catalog entity.
///
/// Panics on an unregistered entity: that is a wiring bug and we want it
/// to fail fast at startup.
pub fn tables_for(desc: &EntityDescriptor) -> &'static EntityTables {
    match desc.entity {
        "Category" => &CATEGORY_TABLES,
        "Country" => &COUNTRY_TABLES,
        "Industry" => &INDUSTRY_TABLES,
        "EmployeeJobTitle" => &EMPLOYEE_JOB_TITLE_TABLES,
        "MaritalStatus" => &MARITAL_STATUS_TABLES,
        "EducationLevel" => &EDUCATION_LEVEL_TABLES,
        "MissionStatement" => &MISSION_STATEMENT_TABLES,
        "Charity" => &CHARITY_TABLES,
        "RoleStatus" => &ROLE_STATUS_TABLES,
        other => panic!("no tables registered for entity {other}"),
    }
}
