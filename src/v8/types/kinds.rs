//! Known metadata object kinds and the identifiers of their fields.
//!
//! Metadata documents refer to object kinds and to the child collections of an
//! object (attributes, tabular sections, forms, templates) by fixed identifiers.
//! The set is closed and lives in static tables.

/// Category of a top-level metadata object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    ExternalDataProcessor,
    ExternalReport,
    Configuration,
}

/// Child collection of a metadata object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Attributes,
    Tables,
    Forms,
    Templates,
}

const FIELDS: &[(ObjectKind, MetadataField, &str)] = &[
    (ObjectKind::ExternalDataProcessor, MetadataField::Attributes, "ec6bb5e5-b7a8-4d75-bec9-658107a699cf"),
    (ObjectKind::ExternalDataProcessor, MetadataField::Tables, "2bcef0d1-0981-11d6-b9b8-0050bae0a95d"),
    (ObjectKind::ExternalDataProcessor, MetadataField::Forms, "d5b0e5ed-256d-401c-9c36-f630cafd8a62"),
    (ObjectKind::ExternalDataProcessor, MetadataField::Templates, "3daea016-69b7-4ed4-9453-127911372fe6"),
    (ObjectKind::ExternalReport, MetadataField::Attributes, "7e7123e0-29e2-11d6-a3c7-0050bae0a776"),
    (ObjectKind::ExternalReport, MetadataField::Tables, "b077d780-29e2-11d6-a3c7-0050bae0a776"),
    (ObjectKind::ExternalReport, MetadataField::Forms, "a3b368c0-29e2-11d6-a3c7-0050bae0a776"),
    (ObjectKind::ExternalReport, MetadataField::Templates, "3daea016-69b7-4ed4-9453-127911372fe6"),
];

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::ExternalDataProcessor,
        ObjectKind::ExternalReport,
        ObjectKind::Configuration,
    ];

    /// Looks up a kind by its identifier. Matching ignores ASCII case.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
    }

    pub fn id(&self) -> &'static str {
        match self {
            ObjectKind::ExternalDataProcessor => "c3831ec8-d8d5-4f93-8a22-f9bfae07327f",
            ObjectKind::ExternalReport => "e41aff26-25cf-4bb6-b6c1-3f478a75f374",
            ObjectKind::Configuration => "9cd510cd-abfc-11d4-9434-004095e12fc7",
        }
    }

    /// Identifier under which this kind stores the given child collection.
    ///
    /// Configurations have no entries in the table.
    pub fn field_id(&self, field: MetadataField) -> Option<&'static str> {
        FIELDS
            .iter()
            .find(|(kind, f, _)| kind == self && *f == field)
            .map(|(_, _, id)| *id)
    }

    /// Reverse lookup of a field identifier within this kind.
    pub fn field_by_id(&self, id: &str) -> Option<MetadataField> {
        FIELDS
            .iter()
            .find(|(kind, _, known)| kind == self && known.eq_ignore_ascii_case(id))
            .map(|(_, field, _)| *field)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ObjectKind::ExternalDataProcessor => write!(f, "external data processor"),
            ObjectKind::ExternalReport => write!(f, "external report"),
            ObjectKind::Configuration => write!(f, "configuration"),
        }
    }
}
