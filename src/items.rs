use serde::Serialize;

/// One constructor parameter / stored attribute of a node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub type_name: String,
    pub field_name: String,
}

impl FieldSpec {
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }
}

/// A concrete node type, parsed from one grammar line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl TypeDescriptor {
    /// Name of the visitor method this node dispatches to.
    pub fn visit_method(&self, base_name: &str) -> String {
        visit_method_name(&self.name, base_name)
    }
}

/// `visit<TypeName><BaseName>`.
///
/// Both the visitor interface and every node's `accept` body are rendered
/// from this, so the two can never disagree.
pub fn visit_method_name(type_name: &str, base_name: &str) -> String {
    format!("visit{}{}", type_name, base_name)
}

/// Name of the single parameter of every visitor method.
pub fn param_name(base_name: &str) -> String {
    base_name.to_lowercase()
}
