use std::fmt;

/// Identity of a node in the rendered document.
///
/// Identities are the `id` attributes the renderer assigned (`node_17`).
/// They are unique per document and are the only key the navigation core
/// ever passes around.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One row of a pre-baked symbol table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRow {
    pub name: String,
    pub describes: String,
}

impl SymbolRow {
    pub fn new(name: impl Into<String>, describes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            describes: describes.into(),
        }
    }
}

/// Annotations the renderer baked into one node element.
///
/// Everything here is consumed read-only. `referenced` is a non-owning
/// back-reference to another node's identity; `error_target` groups the
/// node with its pre-rendered error messages. `symbols` is empty for nodes
/// without a symbol table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub kind: String,
    pub line: u32,
    pub column: u32,
    pub referenced: Option<NodeId>,
    pub error_target: Option<String>,
    pub symbols: Vec<SymbolRow>,
}

impl Annotation {
    pub fn new(kind: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: kind.into(),
            line,
            column,
            referenced: None,
            error_target: None,
            symbols: Vec::new(),
        }
    }

    pub fn with_reference(mut self, target: impl Into<NodeId>) -> Self {
        self.referenced = Some(target.into());
        self
    }

    pub fn with_error_target(mut self, target: impl Into<String>) -> Self {
        self.error_target = Some(target.into());
        self
    }

    pub fn with_symbols(mut self, symbols: Vec<SymbolRow>) -> Self {
        self.symbols = symbols;
        self
    }
}
