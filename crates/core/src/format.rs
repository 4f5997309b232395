//! Projection of persisted records into response-shaped wire maps.
//!
//! The detail path deliberately swallows language/translation resolution
//! failures into placeholder strings: a missing language or translation must
//! never fail a read of the base entity. This is the only intentional
//! error-suppression boundary outside seeding.

use serde_json::{json, Map, Value};

use crate::catalog::{EntityDescriptor, LANGUAGE_ID_FIELD, OG_IMAGE_FIELD};
use crate::directory::{Language, LanguageDirectory};
use crate::store::{BaseRecord, LocalizedStore, TranslationRecord};
use crate::types::DbId;

/// Placeholder when the language collaborator cannot resolve the language.
pub const LANGUAGE_UNAVAILABLE: &str = "Language details unavailable";

/// Placeholder when no translation exists for the requested language.
pub const TRANSLATION_UNAVAILABLE: &str = "Translation not available for the selected language";

/// Flat wire map of a base record.
pub fn base(desc: &EntityDescriptor, record: &BaseRecord) -> Value {
    let mut map = Map::new();
    map.insert(desc.id_field.to_string(), json!(record.id));
    map.insert(desc.identity_field.to_string(), json!(record.identity));
    if desc.has_og_image {
        map.insert(OG_IMAGE_FIELD.to_string(), json!(record.og_image));
    }
    Value::Object(map)
}

/// Flat wire map of a translation record.
pub fn translation(desc: &EntityDescriptor, record: &TranslationRecord) -> Value {
    let mut map = Map::new();
    map.insert(desc.translation_id_field.to_string(), json!(record.id));
    map.insert(desc.id_field.to_string(), json!(record.parent_id));
    map.insert(LANGUAGE_ID_FIELD.to_string(), json!(record.language_id));
    map.insert(desc.name_field.to_string(), json!(record.name));
    map.insert(
        desc.description_field.to_string(),
        json!(record.description),
    );
    Value::Object(map)
}

/// Wire map of a resolved language.
pub fn language(lang: &Language) -> Value {
    json!({
        "LanguageID": lang.id,
        "LanguageCode": lang.code,
        "LanguageName": lang.name,
    })
}

/// Detail projection: the base record enriched with the resolved language
/// and the matching translation, nested under the entity type key.
///
/// Resolution failures degrade into placeholders and are never propagated.
pub async fn detail(
    desc: &EntityDescriptor,
    store: &dyn LocalizedStore,
    languages: &dyn LanguageDirectory,
    record: &BaseRecord,
    language_id: DbId,
) -> Value {
    let mut body = match base(desc, record) {
        Value::Object(map) => map,
        _ => unreachable!("base projection is always an object"),
    };

    let language_value = match languages.get(language_id).await {
        Ok(lang) => language(&lang),
        Err(_) => Value::String(LANGUAGE_UNAVAILABLE.to_string()),
    };
    body.insert("Language".to_string(), language_value);

    let translation_value = match store
        .find_translation_by_language(record.id, language_id)
        .await
    {
        Ok(Some(t)) => translation(desc, &t),
        _ => Value::String(TRANSLATION_UNAVAILABLE.to_string()),
    };
    body.insert("Translation".to_string(), translation_value);

    let mut outer = Map::new();
    outer.insert(desc.entity.to_string(), Value::Object(body));
    Value::Object(outer)
}
