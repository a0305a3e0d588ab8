use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result, SourceContext};

/// Top-level key holding the list of mode entries.
const DATA_KEY: &str = "data";

/// Structured data format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// One input document, kept for diagnostics
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name (usually the path as given on the command line)
    pub name: String,
    /// Raw document text
    pub content: String,
    /// Format the document was parsed as
    pub format: Format,
}

impl Document {
    /// Source context for error reporting against this document.
    pub fn source_context(&self) -> SourceContext {
        SourceContext::new(&self.content, &self.name)
    }
}

/// One raw entry of the merged `data` list.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Index of the document the entry came from
    pub document: usize,
    /// Position of the entry inside that document's `data` list
    pub index: usize,
    /// Untyped entry content
    pub value: Value,
}

impl Entry {
    /// Get a field of the entry if the entry is a mapping.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.value.as_object().and_then(|map| map.get(key))
    }
}

/// The merged `data` field of all documents.
#[derive(Debug, Clone, Default)]
pub enum Data {
    /// No document had a `data` key
    #[default]
    Missing,
    /// Entries of every document, in document order
    Entries(Vec<Entry>),
    /// Some document had a `data` key that is not a sequence
    Invalid {
        /// Index of the offending document
        document: usize,
        /// Kind of value found instead of a sequence
        found: &'static str,
    },
}

/// Shape of a single input document.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    data: Option<Value>,
    #[serde(flatten)]
    rest: IndexMap<String, Value>,
}

/// Mode descriptor merged from one or more input documents
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    documents: Vec<Document>,
    fields: IndexMap<String, Value>,
    data: Data,
}

impl FromStr for Descriptor {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let mut descriptor = Self::new();
        descriptor.merge_str(s, "modes.json", Format::Json)?;
        Ok(descriptor)
    }
}

impl Descriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and merge every file in order
    pub fn from_files<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut descriptor = Self::new();
        for path in paths {
            descriptor.merge_file(path)?;
        }
        Ok(descriptor)
    }

    /// Read a descriptor file and merge it into this descriptor
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        self.merge_str(&content, &path.display().to_string(), Format::from_path(path))
    }

    /// Parse a document from a string and merge it into this descriptor
    pub fn merge_str(&mut self, content: &str, name: &str, format: Format) -> Result<()> {
        let raw: RawDocument = match format {
            Format::Json => {
                serde_json::from_str(content).map_err(|e| Error::json(&e, content, name))?
            }
            Format::Toml => toml::from_str(content).map_err(|e| Error::toml(&e, content, name))?,
        };

        let document = self.documents.len();
        self.documents.push(Document {
            name: name.to_string(),
            content: content.to_string(),
            format,
        });

        // Plain keys: last document wins
        self.fields.extend(raw.rest);

        match raw.data {
            None => {}
            Some(Value::Array(values)) => {
                let entries = values
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| Entry {
                        document,
                        index,
                        value,
                    });
                if let Data::Entries(existing) = &mut self.data {
                    existing.extend(entries);
                } else if matches!(self.data, Data::Missing) {
                    self.data = Data::Entries(entries.collect());
                }
            }
            Some(other) => {
                if !matches!(self.data, Data::Invalid { .. }) {
                    self.data = Data::Invalid {
                        document,
                        found: value_kind(&other),
                    };
                }
            }
        }

        debug!(
            document = name,
            entries = self.entries().map_or(0, <[Entry]>::len),
            "merged mode descriptor"
        );
        Ok(())
    }

    /// All merged documents, in merge order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Get a document by index
    pub fn document(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Names of all merged documents, in merge order
    pub fn sources(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.name.as_str()).collect()
    }

    /// Get a top-level key other than `data`
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The merged `data` field
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// The merged entries, if `data` was present and well-formed
    pub fn entries(&self) -> Option<&[Entry]> {
        match &self.data {
            Data::Entries(entries) => Some(entries),
            _ => None,
        }
    }

    /// Human-readable location of an entry (e.g. "modes.json: data[1]")
    pub fn location(&self, entry: &Entry) -> String {
        let name = self
            .document(entry.document)
            .map_or("<unknown>", |d| d.name.as_str());
        format!("{}: {}[{}]", name, DATA_KEY, entry.index)
    }

    /// Source context of the document an entry came from.
    ///
    /// Falls back to the last document, or an empty source, when the index
    /// is out of range.
    pub fn source_context(&self, document: usize) -> SourceContext {
        self.document(document)
            .or_else(|| self.documents.last())
            .map_or_else(
                || SourceContext::new("", "<no input>"),
                Document::source_context,
            )
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn literals(descriptor: &Descriptor) -> Vec<&str> {
        descriptor
            .entries()
            .unwrap()
            .iter()
            .filter_map(|e| e.field("value").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn test_single_document() {
        let descriptor =
            Descriptor::from_str(r#"{"data":[{"value":"dev","default":true},{"value":"prod"}]}"#)
                .unwrap();

        assert_eq!(literals(&descriptor), ["dev", "prod"]);
        assert_eq!(descriptor.sources(), ["modes.json"]);
        assert_eq!(
            descriptor.entries().unwrap()[0].field("default"),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_data_accumulates_across_documents() {
        let mut descriptor = Descriptor::new();
        descriptor
            .merge_str(r#"{"data":[{"value":"dev"}]}"#, "a.json", Format::Json)
            .unwrap();
        descriptor
            .merge_str(r#"{"data":[{"value":"prod"}]}"#, "b.json", Format::Json)
            .unwrap();

        assert_eq!(literals(&descriptor), ["dev", "prod"]);
        let entries = descriptor.entries().unwrap();
        assert_eq!(entries[1].document, 1);
        assert_eq!(entries[1].index, 0);
        assert_eq!(descriptor.location(&entries[1]), "b.json: data[0]");
    }

    #[test]
    fn test_plain_keys_last_write_wins() {
        let mut descriptor = Descriptor::new();
        descriptor
            .merge_str(r#"{"owner":"a","team":"x"}"#, "a.json", Format::Json)
            .unwrap();
        descriptor
            .merge_str(r#"{"owner":"b"}"#, "b.json", Format::Json)
            .unwrap();

        assert_eq!(descriptor.field("owner"), Some(&json!("b")));
        assert_eq!(descriptor.field("team"), Some(&json!("x")));
        assert!(descriptor.field("data").is_none());
        assert!(matches!(descriptor.data(), Data::Missing));
    }

    #[test]
    fn test_toml_document() {
        let mut descriptor = Descriptor::new();
        descriptor
            .merge_str(
                "[[data]]\nvalue = \"dev\"\ndefault = true\n\n[[data]]\nvalue = \"prod\"\nmeta = \"tighten_logging\"\n",
                "modes.toml",
                Format::Toml,
            )
            .unwrap();

        assert_eq!(literals(&descriptor), ["dev", "prod"]);
        assert_eq!(
            descriptor.entries().unwrap()[1].field("meta"),
            Some(&json!("tighten_logging"))
        );
    }

    #[test]
    fn test_non_sequence_data_is_invalid() {
        let mut descriptor = Descriptor::new();
        descriptor
            .merge_str(r#"{"data":{"value":"dev"}}"#, "a.json", Format::Json)
            .unwrap();
        descriptor
            .merge_str(r#"{"data":[{"value":"prod"}]}"#, "b.json", Format::Json)
            .unwrap();

        match descriptor.data() {
            Data::Invalid { document, found } => {
                assert_eq!(*document, 0);
                assert_eq!(*found, "a mapping");
            }
            other => panic!("expected invalid data, got {other:?}"),
        }
        assert!(descriptor.entries().is_none());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Descriptor::from_str(r#"{"data": ["#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_document_is_parse_error() {
        let err = Descriptor::from_str(r#"[{"value":"dev"}]"#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let mut descriptor = Descriptor::new();
        let err = descriptor
            .merge_str("[[data]\nvalue = ", "modes.toml", Format::Toml)
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert!(descriptor.documents().is_empty());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("modes.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("modes.TOML")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("modes.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("modes")), Format::Json);
    }

    #[test]
    fn test_source_context_fallback() {
        let descriptor = Descriptor::new();
        assert_eq!(descriptor.source_context(3).filename(), "<no input>");
    }
}
