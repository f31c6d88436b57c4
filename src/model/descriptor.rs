use serde::Serialize;

/// Metadata of one struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Go field name
    pub name: String,
    /// Type expression, e.g. `int64`, `*time.Time`, `[]byte`
    #[serde(rename = "type")]
    pub ty: String,
    /// Storage column name; never empty
    pub column: String,
    /// Whether this field is the model's primary key
    pub primary_key: bool,
    /// Doc and trailing comments, markers stripped
    pub comments: Vec<String>,
}

/// Metadata of one qualifying struct type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Go type name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
    /// Doc comments of the type
    pub comments: Vec<String>,
}

impl ModelDescriptor {
    /// The field flagged as primary key, if any
    pub fn primary_key(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Column names in declaration order
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.column.as_str()).collect()
    }
}
