//! Finds the struct types that carry the `TableName() string` marker

use crate::generator::GenerationContext;
use crate::source::SourceUnit;
use std::collections::HashMap;
use tracing::{debug, warn};
use tree_sitter::Node;

/// Name of the marker method
pub const MARKER_METHOD: &str = "TableName";

/// A qualifying struct type inside a parsed unit
#[derive(Clone, Copy)]
pub struct ModelDecl<'u> {
    unit: &'u SourceUnit,
    spec: Node<'u>,
    name: &'u str,
}

impl<'u> ModelDecl<'u> {
    /// Unit the type is declared in
    pub fn unit(&self) -> &'u SourceUnit {
        self.unit
    }

    /// Type name
    pub fn name(&self) -> &'u str {
        self.name
    }

    /// The `type_spec` node
    pub fn spec(&self) -> Node<'u> {
        self.spec
    }

    /// Doc comments of the type
    ///
    /// For `type T struct{...}` they sit above the `type` keyword, inside a
    /// `type ( ... )` group they sit above the spec itself.
    pub fn comments(&self) -> Vec<String> {
        let grouped = self.spec.prev_sibling().map(|s| s.kind()) != Some("type");
        match self.spec.parent() {
            Some(decl) if !grouped => self.unit.doc_comments(decl),
            _ => self.unit.doc_comments(self.spec),
        }
    }

    /// `field_declaration` nodes in declaration order
    pub fn field_declarations(&self) -> Vec<Node<'u>> {
        let Some(list) = self
            .spec
            .child_by_field_name("type")
            .and_then(|body| find_named_child(body, "field_declaration_list"))
        else {
            return Vec::new();
        };
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|n| n.kind() == "field_declaration")
            .collect()
    }
}

/// Classify every unit in order, seeding `ctx` from the first unit that
/// declares a package
pub fn collect_model_decls<'u>(
    units: &'u [SourceUnit],
    ctx: &GenerationContext,
) -> Vec<ModelDecl<'u>> {
    let mut decls = Vec::new();
    for unit in units {
        if let Some(package) = unit.package_name() {
            if ctx.seed(package) {
                debug!(package, path = %unit.path().display(), "seeded generation context");
            }
        }
        decls.extend(classify_unit(unit));
    }
    decls
}

/// Qualifying types of one unit, in marker-method order
pub fn classify_unit(unit: &SourceUnit) -> Vec<ModelDecl<'_>> {
    let root = unit.root();
    let types = struct_specs(unit);

    let mut cursor = root.walk();
    let methods: Vec<_> = root
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "method_declaration")
        .collect();

    let mut decls = Vec::new();
    for method in methods {
        let Some(receiver) = marker_receiver(unit, method) else {
            continue;
        };
        match types.get(receiver) {
            Some(&Some(spec)) => {
                debug!(model = receiver, path = %unit.path().display(), "found qualifying type");
                decls.push(ModelDecl {
                    unit,
                    spec,
                    name: receiver,
                });
            }
            Some(None) => warn!(
                model = receiver,
                path = %unit.path().display(),
                "{MARKER_METHOD} receiver is not a struct type; skipping"
            ),
            None => warn!(
                model = receiver,
                path = %unit.path().display(),
                "{MARKER_METHOD} receiver type is not declared in this file; skipping"
            ),
        }
    }
    decls
}

/// Top-level type specs by name; `None` for non-struct types
fn struct_specs(unit: &SourceUnit) -> HashMap<&str, Option<Node<'_>>> {
    let root = unit.root();
    let mut specs = HashMap::new();
    let mut cursor = root.walk();
    for decl in root
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "type_declaration")
    {
        let mut inner = decl.walk();
        for spec in decl
            .named_children(&mut inner)
            .filter(|n| n.kind() == "type_spec")
        {
            let Some(name) = spec.child_by_field_name("name") else {
                continue;
            };
            let is_struct = spec
                .child_by_field_name("type")
                .is_some_and(|t| t.kind() == "struct_type");
            specs.insert(unit.text(name), is_struct.then_some(spec));
        }
    }
    specs
}

/// Receiver type name if `method` is `func (T|*T) TableName() string`
fn marker_receiver<'u>(unit: &'u SourceUnit, method: Node<'u>) -> Option<&'u str> {
    let name = method.child_by_field_name("name")?;
    if unit.text(name) != MARKER_METHOD {
        return None;
    }

    let params = method.child_by_field_name("parameters")?;
    if !non_comment_children(params).is_empty() {
        return None;
    }

    let result = method.child_by_field_name("result")?;
    if !is_single_string(unit, result) {
        return None;
    }

    let receiver = method.child_by_field_name("receiver")?;
    let [decl] = non_comment_children(receiver)[..] else {
        return None;
    };
    let mut ty = decl.child_by_field_name("type")?;
    if ty.kind() == "pointer_type" {
        ty = ty.named_child(0)?;
    }
    (ty.kind() == "type_identifier").then(|| unit.text(ty))
}

/// `string`, `(string)` or `(name string)`
fn is_single_string(unit: &SourceUnit, result: Node<'_>) -> bool {
    let is_string = |n: Node<'_>| n.kind() == "type_identifier" && unit.text(n) == "string";
    match result.kind() {
        "type_identifier" => is_string(result),
        "parameter_list" => match non_comment_children(result)[..] {
            [decl] if decl.kind() == "parameter_declaration" => {
                let mut cursor = decl.walk();
                let names = decl.children_by_field_name("name", &mut cursor).count();
                names <= 1 && decl.child_by_field_name("type").is_some_and(is_string)
            }
            _ => false,
        },
        _ => false,
    }
}

fn non_comment_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

fn find_named_child<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|n| n.kind() == kind);
    found
}
