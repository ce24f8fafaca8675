//! Table schemas and table provenance.

use std::fmt;

/// Column data types understood by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Int,
    BigInt,
    Float,
    Double,
    Decimal { precision: u8, scale: u8 },
    Varchar,
    Date,
    Timestamp,
    List(Box<DataType>),
    Struct(Vec<Field>),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Int => write!(f, "INT"),
            DataType::BigInt => write!(f, "BIGINT"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::Decimal { precision, scale } => write!(f, "DECIMAL({}, {})", precision, scale),
            DataType::Varchar => write!(f, "VARCHAR"),
            DataType::Date => write!(f, "DATE"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::List(inner) => write!(f, "LIST<{}>", inner),
            DataType::Struct(fields) => {
                write!(f, "STRUCT<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, ">")
            }
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}

/// Ordered list of fields. Name lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSchema {
    fields: Vec<Field>,
}

impl TableSchema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Find a field by name, ignoring case.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if a field with this name exists, ignoring case.
    pub fn contains_field(&self, name: &str) -> bool {
        self.find_field(name).is_some()
    }

    /// Remove a field by name (ignoring case), returning it.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        let index = self
            .fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))?;
        Some(self.fields.remove(index))
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Where a table's metadata comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Iceberg table whose metadata is managed by the engine itself.
    InternalIceberg,
    /// A simple structured (JSON) file dataset.
    JsonFile,
    /// Iceberg table living in a version-controlled source.
    VersionedIceberg,
    /// Dataset promoted from an external file format (parquet, csv, ...).
    ExternalFormat,
    /// A virtual dataset.
    View,
}

impl TableKind {
    /// Tables whose own format keeps authoritative metadata.
    pub fn is_self_describing(&self) -> bool {
        matches!(self, TableKind::InternalIceberg | TableKind::JsonFile)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TableKind::InternalIceberg => "internal iceberg table",
            TableKind::JsonFile => "json file dataset",
            TableKind::VersionedIceberg => "versioned iceberg table",
            TableKind::ExternalFormat => "external format dataset",
            TableKind::View => "view",
        };
        f.write_str(label)
    }
}

/// A table as returned by the catalog: its path, schema and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub path: crate::CatalogPath,
    pub schema: TableSchema,
    pub kind: TableKind,
}

impl TableInfo {
    pub fn new(path: crate::CatalogPath, schema: TableSchema, kind: TableKind) -> Self {
        Self { path, schema, kind }
    }
}
