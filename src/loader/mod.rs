//! Record loader for catstore
//!
//! Enumerates record files in a root directory, parses each into a typed
//! [`Record`] and validates it against the registered schema. One file, one
//! record.
//!
//! # File convention
//!
//! - File names match `Record_*.json`; other entries are ignored
//! - Content is a JSON object; each member is an attribute, except the
//!   reserved `extent` member, which the loader consumes into the record's
//!   spatial extent (coordinates longitude-first)
//! - `identifier.value` carries the record identity as a URN-UUID
//!
//! # Failure policy
//!
//! Loading aborts on the first malformed file. A partially loaded catalog
//! would silently change query cardinalities, so the store is either fully
//! consistent or not constructed at all.

mod errors;

pub use errors::{LoadError, LoadResult};

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::geo::{BoundingBox, Extent};
use crate::record::{AttributeValue, Record};
use crate::schema::{AttributeDef, AttributeType, RecordSchema};

/// File name convention for record files
pub const RECORD_FILE_PATTERN: &str = r"^Record_.*\.json$";

/// Reserved top-level member consumed into the record's spatial extent
const EXTENT_MEMBER: &str = "extent";

/// URN namespace prefix for record identifiers
const URN_UUID_PREFIX: &str = "urn:uuid:";

/// Serialized form of the `extent` member
#[derive(Debug, Deserialize)]
struct ExtentSpec {
    crs: String,
    /// Lower corner, longitude-first
    min: [f64; 2],
    /// Upper corner, longitude-first
    max: [f64; 2],
}

/// Loads typed records from a directory of record files
pub struct RecordLoader {
    root: PathBuf,
    schema: RecordSchema,
}

impl RecordLoader {
    /// Creates a loader for the given root directory and schema
    pub fn new(root: impl Into<PathBuf>, schema: RecordSchema) -> Self {
        Self {
            root: root.into(),
            schema,
        }
    }

    /// Returns the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads every record file under the root.
    ///
    /// Files are visited in sorted file-name order so load order, and with
    /// it query result order, is deterministic. Any malformed file aborts
    /// the whole load.
    pub fn load_all(&self) -> LoadResult<Vec<Record>> {
        let pattern = Regex::new(RECORD_FILE_PATTERN).expect("valid record file pattern");

        let entries = fs::read_dir(&self.root)
            .map_err(|e| LoadError::io(self.root.display().to_string(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LoadError::io(self.root.display().to_string(), e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.is_match(name));
            if matches {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        let mut seen_ids = BTreeSet::new();
        for path in &paths {
            let record = self.load_record_file(path)?;
            if !seen_ids.insert(record.id().to_string()) {
                return Err(LoadError::DuplicateIdentifier {
                    path: path.display().to_string(),
                    id: record.id().to_string(),
                });
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Loads a single record file
    fn load_record_file(&self, path: &Path) -> LoadResult<Record> {
        let display = path.display().to_string();

        let content =
            fs::read_to_string(path).map_err(|e| LoadError::io(display.clone(), e))?;
        let value: Value = serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            path: display.clone(),
            source: e,
        })?;

        let Value::Object(mut members) = value else {
            return Err(LoadError::NotAnObject { path: display });
        };

        let extent = match members.remove(EXTENT_MEMBER) {
            Some(spec) => Some(parse_extent(&display, spec)?),
            None => None,
        };

        let attributes = parse_attributes(&display, members)?;
        validate_attributes(&display, &self.schema.attributes, &attributes)?;

        let id = extract_identifier(&display, &attributes)?;
        Ok(Record::new(id, attributes, extent))
    }
}

/// Converts the remaining JSON members into typed attribute values
fn parse_attributes(
    path: &str,
    members: Map<String, Value>,
) -> LoadResult<BTreeMap<String, AttributeValue>> {
    let mut attributes = BTreeMap::new();
    for (name, value) in members {
        let attribute =
            serde_json::from_value(value).map_err(|e| LoadError::Parse {
                path: path.to_string(),
                source: e,
            })?;
        attributes.insert(name, attribute);
    }
    Ok(attributes)
}

/// Validates an attribute map against a set of definitions.
///
/// Required attributes must be present, undeclared attributes are rejected
/// and each value's shape must match its definition; complex attributes are
/// checked recursively.
fn validate_attributes(
    path: &str,
    defs: &std::collections::HashMap<String, AttributeDef>,
    attributes: &BTreeMap<String, AttributeValue>,
) -> LoadResult<()> {
    for (name, def) in defs {
        if def.required && !attributes.contains_key(name) {
            return Err(LoadError::MissingAttribute {
                path: path.to_string(),
                name: name.clone(),
            });
        }
    }

    for (name, value) in attributes {
        let def = defs.get(name).ok_or_else(|| LoadError::UndeclaredAttribute {
            path: path.to_string(),
            name: name.clone(),
        })?;

        match (&def.attr_type, value) {
            (AttributeType::Literal, AttributeValue::Simple(_)) => {}
            (AttributeType::Complex { properties }, AttributeValue::Complex(sub_values)) => {
                validate_attributes(path, properties, sub_values)?;
            }
            (expected, actual) => {
                return Err(LoadError::ShapeMismatch {
                    path: path.to_string(),
                    name: name.clone(),
                    expected: expected.kind_name(),
                    actual: if actual.is_complex() { "complex" } else { "literal" },
                });
            }
        }
    }

    Ok(())
}

/// Extracts and validates the URN-UUID identifier from `identifier.value`
fn extract_identifier(
    path: &str,
    attributes: &BTreeMap<String, AttributeValue>,
) -> LoadResult<String> {
    let id = attributes
        .get("identifier")
        .and_then(|identifier| identifier.property("value"))
        .and_then(|value| value.as_simple())
        .and_then(|value| value.as_str())
        .ok_or_else(|| LoadError::MissingIdentifier {
            path: path.to_string(),
        })?;

    let uuid_part = id
        .strip_prefix(URN_UUID_PREFIX)
        .ok_or_else(|| LoadError::InvalidIdentifier {
            path: path.to_string(),
            id: id.to_string(),
        })?;
    Uuid::parse_str(uuid_part).map_err(|_| LoadError::InvalidIdentifier {
        path: path.to_string(),
        id: id.to_string(),
    })?;

    Ok(id.to_string())
}

/// Parses the reserved `extent` member into a spatial extent
fn parse_extent(path: &str, spec: Value) -> LoadResult<Extent> {
    let spec: ExtentSpec = serde_json::from_value(spec)
        .map_err(|e| LoadError::invalid_extent(path, e.to_string()))?;

    let bbox = BoundingBox::new(spec.min[0], spec.min[1], spec.max[0], spec.max[1]);
    if !bbox.is_valid() {
        return Err(LoadError::invalid_extent(
            path,
            "bounding box corners are not finite min <= max",
        ));
    }

    Ok(Extent::new(bbox, spec.crs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::record_schema;
    use serde_json::json;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &Value) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(content.to_string().as_bytes()).unwrap();
    }

    fn minimal_record(uuid: &str) -> Value {
        json!({
            "identifier": { "value": format!("urn:uuid:{}", uuid) },
            "type": "http://purl.org/dc/dcmitype/Dataset"
        })
    }

    #[test]
    fn test_load_sorted_by_file_name() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "Record_b.json",
            &minimal_record("00000000-0000-4000-8000-000000000002"),
        );
        write_file(
            tmp.path(),
            "Record_a.json",
            &minimal_record("00000000-0000-4000-8000-000000000001"),
        );

        let loader = RecordLoader::new(tmp.path(), record_schema());
        let records = loader.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].id().ends_with("1"));
        assert!(records[1].id().ends_with("2"));
    }

    #[test]
    fn test_non_matching_files_ignored() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "Record_a.json",
            &minimal_record("00000000-0000-4000-8000-000000000001"),
        );
        write_file(tmp.path(), "notes.txt", &json!("not a record"));
        write_file(tmp.path(), "Dataset_b.json", &json!({})); // wrong prefix

        let loader = RecordLoader::new(tmp.path(), record_schema());
        assert_eq!(loader.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_json_aborts_load() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "Record_a.json",
            &minimal_record("00000000-0000-4000-8000-000000000001"),
        );
        let mut file = File::create(tmp.path().join("Record_b.json")).unwrap();
        file.write_all(b"{ not json").unwrap();

        let loader = RecordLoader::new(tmp.path(), record_schema());
        assert!(matches!(loader.load_all(), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_missing_required_attribute_aborts() {
        let tmp = TempDir::new().unwrap();
        // No "type" attribute
        write_file(
            tmp.path(),
            "Record_a.json",
            &json!({
                "identifier": { "value": "urn:uuid:00000000-0000-4000-8000-000000000001" }
            }),
        );

        let loader = RecordLoader::new(tmp.path(), record_schema());
        let err = loader.load_all().unwrap_err();
        assert!(matches!(err, LoadError::MissingAttribute { ref name, .. } if name == "type"));
    }

    #[test]
    fn test_undeclared_attribute_aborts() {
        let tmp = TempDir::new().unwrap();
        let mut record = minimal_record("00000000-0000-4000-8000-000000000001");
        record["publisher"] = json!("nobody");
        write_file(tmp.path(), "Record_a.json", &record);

        let loader = RecordLoader::new(tmp.path(), record_schema());
        let err = loader.load_all().unwrap_err();
        assert!(matches!(err, LoadError::UndeclaredAttribute { ref name, .. } if name == "publisher"));
    }

    #[test]
    fn test_shape_mismatch_aborts() {
        let tmp = TempDir::new().unwrap();
        // "identifier" must be complex
        write_file(
            tmp.path(),
            "Record_a.json",
            &json!({
                "identifier": "urn:uuid:00000000-0000-4000-8000-000000000001",
                "type": "t"
            }),
        );

        let loader = RecordLoader::new(tmp.path(), record_schema());
        let err = loader.load_all().unwrap_err();
        assert!(matches!(err, LoadError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_invalid_identifier_aborts() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "Record_a.json",
            &json!({
                "identifier": { "value": "not-a-urn" },
                "type": "t"
            }),
        );

        let loader = RecordLoader::new(tmp.path(), record_schema());
        assert!(matches!(
            loader.load_all(),
            Err(LoadError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_duplicate_identifier_aborts() {
        let tmp = TempDir::new().unwrap();
        let record = minimal_record("00000000-0000-4000-8000-000000000001");
        write_file(tmp.path(), "Record_a.json", &record);
        write_file(tmp.path(), "Record_b.json", &record);

        let loader = RecordLoader::new(tmp.path(), record_schema());
        assert!(matches!(
            loader.load_all(),
            Err(LoadError::DuplicateIdentifier { .. })
        ));
    }

    #[test]
    fn test_extent_parsed_and_reserved() {
        let tmp = TempDir::new().unwrap();
        let mut record = minimal_record("00000000-0000-4000-8000-000000000001");
        record["extent"] = json!({
            "crs": "EPSG:4326",
            "min": [13.754, 60.042],
            "max": [17.920, 68.410]
        });
        write_file(tmp.path(), "Record_a.json", &record);

        let loader = RecordLoader::new(tmp.path(), record_schema());
        let records = loader.load_all().unwrap();
        let extent = records[0].extent().unwrap();
        assert_eq!(extent.crs, "EPSG:4326");
        assert_eq!(extent.bbox.min_x, 13.754);
        // The extent member never surfaces as an attribute
        assert!(records[0].attribute("extent").is_none());
    }

    #[test]
    fn test_invalid_extent_aborts() {
        let tmp = TempDir::new().unwrap();
        let mut record = minimal_record("00000000-0000-4000-8000-000000000001");
        record["extent"] = json!({
            "crs": "EPSG:4326",
            "min": [17.920, 60.042],
            "max": [13.754, 68.410]
        });
        write_file(tmp.path(), "Record_a.json", &record);

        let loader = RecordLoader::new(tmp.path(), record_schema());
        assert!(matches!(
            loader.load_all(),
            Err(LoadError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn test_random_uuid_accepted() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "Record_a.json",
            &minimal_record(&Uuid::new_v4().to_string()),
        );

        let loader = RecordLoader::new(tmp.path(), record_schema());
        assert_eq!(loader.load_all().unwrap().len(), 1);
    }
}
