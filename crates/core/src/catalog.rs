//! Static catalog of every simple localized entity.
//!
//! Each business concept (Category, Country, ...) shares one record shape;
//! what differs is naming: table-facing slugs, envelope keys, and the
//! entity-prefixed wire field names (`CategoryLink`, `CategoryName`, ...).
//! The descriptor is the single source of those names, so the service,
//! formatter, and whitelist never hard-code a per-entity string.

/// Wire field name for the language foreign key, shared by every entity.
pub const LANGUAGE_ID_FIELD: &str = "LanguageID";

/// Wire field name for the OG image path on entities that carry one.
pub const OG_IMAGE_FIELD: &str = "OgImage";

/// Naming schema for one simple localized entity.
#[derive(Debug)]
pub struct EntityDescriptor {
    /// Type name, used as the nesting key in detail payloads ("Category").
    pub entity: &'static str,
    /// Envelope key for a single record ("category").
    pub entity_key: &'static str,
    /// Envelope key for list payloads ("categories").
    pub plural_key: &'static str,
    /// Human label for messages ("Categories").
    pub plural_label: &'static str,
    /// URL path segment ("employee-job-titles").
    pub route_slug: &'static str,
    /// Wire name of the surrogate id ("CategoryID").
    pub id_field: &'static str,
    /// Wire name of the slug-like natural key ("CategoryLink").
    pub identity_field: &'static str,
    /// Type name of the translation record ("CategoryTranslation").
    pub translation_entity: &'static str,
    /// Wire name of the translation surrogate id ("CategoryTranslationID").
    pub translation_id_field: &'static str,
    /// Wire name of the localized name ("CategoryName").
    pub name_field: &'static str,
    /// Wire name of the localized description ("CategoryDescription").
    pub description_field: &'static str,
    /// Whether base records carry a mutable OG image path.
    pub has_og_image: bool,
}

impl EntityDescriptor {
    /// Fields the generic setter sweep may touch on a base record.
    ///
    /// FK-like fields are deliberately absent: they get semantic validation
    /// instead of blind assignment.
    pub fn base_fields(&self) -> Vec<&'static str> {
        let mut fields = vec![self.identity_field];
        if self.has_og_image {
            fields.push(OG_IMAGE_FIELD);
        }
        fields
    }

    /// Fields accepted in translation payloads. `LanguageID` is listed so
    /// its presence is not reported as an unknown field; the service handles
    /// it separately (validated on create, immutable on update).
    pub fn translation_fields(&self) -> [&'static str; 3] {
        [self.name_field, self.description_field, LANGUAGE_ID_FIELD]
    }
}

pub const CATEGORY: EntityDescriptor = EntityDescriptor {
    entity: "Category",
    entity_key: "category",
    plural_key: "categories",
    plural_label: "Categories",
    route_slug: "categories",
    id_field: "CategoryID",
    identity_field: "CategoryLink",
    translation_entity: "CategoryTranslation",
    translation_id_field: "CategoryTranslationID",
    name_field: "CategoryName",
    description_field: "CategoryDescription",
    has_og_image: true,
};

pub const COUNTRY: EntityDescriptor = EntityDescriptor {
    entity: "Country",
    entity_key: "country",
    plural_key: "countries",
    plural_label: "Countries",
    route_slug: "countries",
    id_field: "CountryID",
    identity_field: "CountryLink",
    translation_entity: "CountryTranslation",
    translation_id_field: "CountryTranslationID",
    name_field: "CountryName",
    description_field: "CountryDescription",
    has_og_image: false,
};

pub const INDUSTRY: EntityDescriptor = EntityDescriptor {
    entity: "Industry",
    entity_key: "industry",
    plural_key: "industries",
    plural_label: "Industries",
    route_slug: "industries",
    id_field: "IndustryID",
    identity_field: "IndustryLink",
    translation_entity: "IndustryTranslation",
    translation_id_field: "IndustryTranslationID",
    name_field: "IndustryName",
    description_field: "IndustryDescription",
    has_og_image: false,
};

pub const EMPLOYEE_JOB_TITLE: EntityDescriptor = EntityDescriptor {
    entity: "EmployeeJobTitle",
    entity_key: "employeeJobTitle",
    plural_key: "employeeJobTitles",
    plural_label: "Employee job titles",
    route_slug: "employee-job-titles",
    id_field: "EmployeeJobTitleID",
    identity_field: "EmployeeJobTitleCode",
    translation_entity: "EmployeeJobTitleTranslation",
    translation_id_field: "EmployeeJobTitleTranslationID",
    name_field: "EmployeeJobTitleName",
    description_field: "EmployeeJobTitleDescription",
    has_og_image: false,
};

pub const MARITAL_STATUS: EntityDescriptor = EntityDescriptor {
    entity: "MaritalStatus",
    entity_key: "maritalStatus",
    plural_key: "maritalStatuses",
    plural_label: "Marital statuses",
    route_slug: "marital-statuses",
    id_field: "MaritalStatusID",
    identity_field: "MaritalStatusCode",
    translation_entity: "MaritalStatusTranslation",
    translation_id_field: "MaritalStatusTranslationID",
    name_field: "MaritalStatusName",
    description_field: "MaritalStatusDescription",
    has_og_image: false,
};

pub const EDUCATION_LEVEL: EntityDescriptor = EntityDescriptor {
    entity: "EducationLevel",
    entity_key: "educationLevel",
    plural_key: "educationLevels",
    plural_label: "Education levels",
    route_slug: "education-levels",
    id_field: "EducationLevelID",
    identity_field: "EducationLevelCode",
    translation_entity: "EducationLevelTranslation",
    translation_id_field: "EducationLevelTranslationID",
    name_field: "EducationLevelName",
    description_field: "EducationLevelDescription",
    has_og_image: false,
};

pub const MISSION_STATEMENT: EntityDescriptor = EntityDescriptor {
    entity: "MissionStatement",
    entity_key: "missionStatement",
    plural_key: "missionStatements",
    plural_label: "Mission statements",
    route_slug: "mission-statements",
    id_field: "MissionStatementID",
    identity_field: "MissionStatementLink",
    translation_entity: "MissionStatementTranslation",
    translation_id_field: "MissionStatementTranslationID",
    name_field: "MissionStatementName",
    description_field: "MissionStatementDescription",
    has_og_image: true,
};

pub const CHARITY: EntityDescriptor = EntityDescriptor {
    entity: "Charity",
    entity_key: "charity",
    plural_key: "charities",
    plural_label: "Charities",
    route_slug: "charities",
    id_field: "CharityID",
    identity_field: "CharityLink",
    translation_entity: "CharityTranslation",
    translation_id_field: "CharityTranslationID",
    name_field: "CharityName",
    description_field: "CharityDescription",
    has_og_image: true,
};

pub const ROLE_STATUS: EntityDescriptor = EntityDescriptor {
    entity: "RoleStatus",
    entity_key: "roleStatus",
    plural_key: "roleStatuses",
    plural_label: "Role statuses",
    route_slug: "role-statuses",
    id_field: "RoleStatusID",
    identity_field: "RoleStatusCode",
    translation_entity: "RoleStatusTranslation",
    translation_id_field: "RoleStatusTranslationID",
    name_field: "RoleStatusName",
    description_field: "RoleStatusDescription",
    has_og_image: false,
};

/// Every simple localized entity, in seeding order.
pub const ALL: &[&EntityDescriptor] = &[
    &CATEGORY,
    &COUNTRY,
    &INDUSTRY,
    &EMPLOYEE_JOB_TITLE,
    &MARITAL_STATUS,
    &EDUCATION_LEVEL,
    &MISSION_STATEMENT,
    &CHARITY,
    &ROLE_STATUS,
];

/// Resolve a descriptor from its URL path segment.
pub fn by_route_slug(slug: &str) -> Option<&'static EntityDescriptor> {
    ALL.iter().copied().find(|d| d.route_slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_slugs_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.route_slug, b.route_slug);
            }
        }
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(by_route_slug("categories").unwrap().entity, "Category");
        assert_eq!(
            by_route_slug("employee-job-titles").unwrap().identity_field,
            "EmployeeJobTitleCode"
        );
        assert!(by_route_slug("widgets").is_none());
    }

    #[test]
    fn base_fields_include_og_image_only_when_flagged() {
        assert!(CATEGORY.base_fields().contains(&OG_IMAGE_FIELD));
        assert!(!COUNTRY.base_fields().contains(&OG_IMAGE_FIELD));
    }
}
