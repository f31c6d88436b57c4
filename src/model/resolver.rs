//! Column name and primary key resolution for a single field

use crate::source::StructTag;

/// Tag key holding `;`-separated column options
pub const ORM_TAG_KEY: &str = "gorm";
/// Tag key whose value is used verbatim as column name when no ORM tag exists
pub const SERIALIZATION_TAG_KEY: &str = "json";

const COLUMN_PREFIX: &str = "column:";
const PRIMARY_KEY_TOKENS: [&str; 2] = ["primaryKey", "primary_key"];

/// Resolved storage attributes of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name, never empty
    pub column: String,
    /// Whether the ORM tag flags the field as primary key
    pub primary_key: bool,
}

/// Resolve column and primary-key flag for a field
///
/// Precedence:
/// 1. ORM tag present: `column:<name>` tokens set the column (last wins),
///    `primaryKey` / `primary_key` set the flag.
/// 2. Otherwise a non-empty serialization tag value is the column, verbatim.
/// 3. Whatever is still unset falls back to [`snake_case`] of the field name.
pub fn resolve_column(field_name: &str, tag: Option<&StructTag>) -> ColumnSpec {
    let mut column = None;
    let mut primary_key = false;

    let orm = tag.and_then(|t| t.get(ORM_TAG_KEY)).filter(|v| !v.is_empty());
    if let Some(orm) = orm {
        for token in orm.split(';') {
            if let Some(name) = token.strip_prefix(COLUMN_PREFIX) {
                column = Some(name.to_string());
            } else if PRIMARY_KEY_TOKENS.contains(&token) {
                primary_key = true;
            }
        }
    } else if let Some(name) = tag
        .and_then(|t| t.get(SERIALIZATION_TAG_KEY))
        .filter(|v| !v.is_empty())
    {
        column = Some(name);
    }

    ColumnSpec {
        column: column
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| snake_case(field_name)),
        primary_key,
    }
}

/// Snake-case a Go identifier
///
/// Every literal `ID` becomes `id` before splitting, so `UserID` maps to
/// `userid` and `GRID` to `g_rid`. An underscore goes before each remaining
/// ASCII uppercase letter except at position 0.
pub fn snake_case(name: &str) -> String {
    let name = name.replace("ID", "id");
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
