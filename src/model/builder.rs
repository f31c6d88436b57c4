use super::classifier::ModelDecl;
use super::descriptor::{FieldDescriptor, ModelDescriptor};
use super::resolver::resolve_column;
use crate::source::{SourceUnit, StructTag};
use tracing::debug;
use tree_sitter::Node;

/// Column name that makes a field the primary key when no tag flags one
pub const INFERRED_PRIMARY_KEY_COLUMN: &str = "id";

/// Build the descriptor of a qualifying type
pub fn build_model(decl: &ModelDecl<'_>) -> ModelDescriptor {
    let unit = decl.unit();
    let mut fields: Vec<FieldDescriptor> = decl
        .field_declarations()
        .into_iter()
        .flat_map(|node| build_fields(unit, node))
        .collect();
    let primary_key = select_primary_key(&mut fields);

    debug!(
        model = decl.name(),
        fields = fields.len(),
        primary_key = primary_key.map(|i| fields[i].column.as_str()),
        "built model"
    );
    ModelDescriptor {
        name: decl.name().to_string(),
        fields,
        comments: decl.comments(),
    }
}

/// Flag exactly one primary key and return its index
///
/// The first tag-flagged field wins; without one, the first field whose
/// column is `id`. Every other flag is cleared.
pub fn select_primary_key(fields: &mut [FieldDescriptor]) -> Option<usize> {
    let chosen = fields.iter().position(|f| f.primary_key).or_else(|| {
        fields
            .iter()
            .position(|f| f.column == INFERRED_PRIMARY_KEY_COLUMN)
    });
    for (i, field) in fields.iter_mut().enumerate() {
        field.primary_key = chosen == Some(i);
    }
    chosen
}

/// One descriptor per declared name; embedded fields are named after their type
fn build_fields(unit: &SourceUnit, node: Node<'_>) -> Vec<FieldDescriptor> {
    let Some(ty_node) = node.child_by_field_name("type") else {
        return Vec::new();
    };

    let mut cursor = node.walk();
    let mut names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .map(|n| unit.text(n).to_string())
        .collect();

    let mut ty = type_expression(unit, ty_node);
    if names.is_empty() {
        // `*Base` embeds keep the star outside the type node
        let mut cursor = node.walk();
        let stars = node
            .children(&mut cursor)
            .take_while(|c| c.id() != ty_node.id())
            .filter(|c| c.kind() == "*")
            .count();
        ty = format!("{}{ty}", "*".repeat(stars));
        names.push(embedded_name(unit, ty_node));
    }

    let tag = node
        .child_by_field_name("tag")
        .and_then(|t| StructTag::from_literal(unit.text(t)));
    let mut comments = unit.doc_comments(node);
    comments.extend(unit.trailing_comment(node));

    names
        .into_iter()
        .map(|name| {
            let spec = resolve_column(&name, tag.as_ref());
            FieldDescriptor {
                ty: ty.clone(),
                column: spec.column,
                primary_key: spec.primary_key,
                comments: comments.clone(),
                name,
            }
        })
        .collect()
}

/// Render a type expression, rebuilding pointer levels around the base type
pub(crate) fn type_expression(unit: &SourceUnit, node: Node<'_>) -> String {
    match node.kind() {
        "pointer_type" => match node.named_child(0) {
            Some(inner) => format!("*{}", type_expression(unit, inner)),
            None => unit.text(node).to_string(),
        },
        "qualified_type" => match (
            node.child_by_field_name("package"),
            node.child_by_field_name("name"),
        ) {
            (Some(package), Some(name)) => {
                format!("{}.{}", unit.text(package), unit.text(name))
            }
            _ => unit.text(node).to_string(),
        },
        _ => unit.text(node).to_string(),
    }
}

fn embedded_name(unit: &SourceUnit, node: Node<'_>) -> String {
    match node.kind() {
        "pointer_type" => node
            .named_child(0)
            .map(|inner| embedded_name(unit, inner))
            .unwrap_or_default(),
        "qualified_type" => node
            .child_by_field_name("name")
            .map(|n| unit.text(n).to_string())
            .unwrap_or_default(),
        "generic_type" => node
            .child_by_field_name("type")
            .map(|n| embedded_name(unit, n))
            .unwrap_or_default(),
        _ => unit.text(node).to_string(),
    }
}
