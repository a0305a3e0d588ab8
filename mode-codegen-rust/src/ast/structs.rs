//! Rust struct builder.

use modegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    fn vis(&self) -> &'static str {
        if self.is_public { "pub " } else { "" }
    }
}

/// Shape of a struct's fields.
#[derive(Debug, Clone)]
enum Shape {
    Unit,
    Named(Vec<Field>),
    Tuple(Vec<Field>),
}

/// Builder for Rust structs.
///
/// A struct without fields renders as a unit struct; tuple fields are added
/// with [`Struct::tuple_field`].
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    shape: Shape,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            shape: Shape::Unit,
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    /// Add a named field.
    pub fn field(mut self, field: Field) -> Self {
        if let Shape::Named(fields) = &mut self.shape {
            fields.push(field);
        } else {
            self.shape = Shape::Named(vec![field]);
        }
        self
    }

    /// Add a positional field; only the field's type and visibility are used.
    pub fn tuple_field(mut self, field: Field) -> Self {
        if let Shape::Tuple(fields) = &mut self.shape {
            fields.push(field);
        } else {
            self.shape = Shape::Tuple(vec![field]);
        }
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .iter()
            .flat_map(|doc| doc.lines().map(CodeFragment::doc))
            .collect();

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        match &self.shape {
            Shape::Unit => {
                fragments.push(CodeFragment::Line(format!("{}struct {};", vis, self.name)));
            }
            Shape::Tuple(fields) => {
                let fields = fields
                    .iter()
                    .map(|f| format!("{}{}", f.vis(), f.ty))
                    .collect::<Vec<_>>()
                    .join(", ");
                fragments.push(CodeFragment::Line(format!(
                    "{}struct {}({});",
                    vis, self.name, fields
                )));
            }
            Shape::Named(fields) => {
                let body = fields
                    .iter()
                    .flat_map(|f| {
                        f.doc
                            .iter()
                            .flat_map(|doc| doc.lines().map(CodeFragment::doc))
                            .chain(std::iter::once(CodeFragment::Line(format!(
                                "{}{}: {},",
                                f.vis(),
                                f.name,
                                f.ty
                            ))))
                            .collect::<Vec<_>>()
                    })
                    .collect();
                fragments.push(CodeFragment::braced(
                    format!("{}struct {} {{", vis, self.name),
                    body,
                ));
            }
        }
        fragments
    }
}
