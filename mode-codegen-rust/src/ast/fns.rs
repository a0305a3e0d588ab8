//! Rust function builder.

use modegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// The `&self` receiver.
    pub fn self_ref() -> Self {
        Self::new("&self", "")
    }

    /// The `&mut self` receiver.
    pub fn self_mut() -> Self {
        Self::new("&mut self", "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_public: bool,
    generics: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Option<Vec<CodeFragment>>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_public: true,
            generics: None,
            params: Vec::new(),
            return_type: None,
            body: Some(Vec::new()),
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

    /// Set generic parameters, e.g., `H: ModeHooks + ?Sized`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Render only the signature, terminated by `;` (trait method declarations).
    pub fn declaration(mut self) -> Self {
        self.body = None;
        self
    }

    /// Add a line to the function body.
    pub fn body_line(self, line: impl Into<String>) -> Self {
        self.body_node(CodeFragment::Line(line.into()))
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(self, content: impl Into<String>) -> Self {
        let lines: Vec<CodeFragment> = content.into().lines().map(CodeFragment::line).collect();
        self.body_node(lines)
    }

    /// Add a renderable node (e.g., a [`Match`](super::Match)) to the body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .extend(node.to_fragments());
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let generics = self
            .generics
            .as_ref()
            .map_or_else(String::new, |g| format!("<{}>", g));
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}fn {}{}({}) -> {}",
                vis, self.name, generics, params, ret
            ),
            None => format!("{}fn {}{}({})", vis, self.name, generics, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .iter()
            .flat_map(|doc| doc.lines().map(CodeFragment::doc))
            .collect();

        match &self.body {
            None => fragments.push(CodeFragment::Line(format!("{};", self.signature()))),
            Some(body) if body.is_empty() => {
                fragments.push(CodeFragment::Line(format!("{} {{}}", self.signature())))
            }
            Some(body) => fragments.push(CodeFragment::braced(
                format!("{} {{", self.signature()),
                body.clone(),
            )),
        }
        fragments
    }
}

/// A single arm of a [`Match`] expression.
#[derive(Debug, Clone)]
pub struct Arm {
    pattern: String,
    body: Vec<CodeFragment>,
}

impl Arm {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            body: Vec::new(),
        }
    }

    /// Add a line to the arm body.
    ///
    /// An arm with a single line renders as `pattern => line,`; more lines
    /// render as a block.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }
}

impl Renderable for Arm {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.body.as_slice() {
            [] => vec![CodeFragment::Line(format!("{} => {{}}", self.pattern))],
            [CodeFragment::Line(expr)] => {
                vec![CodeFragment::Line(format!("{} => {},", self.pattern, expr))]
            }
            body => vec![CodeFragment::braced(
                format!("{} => {{", self.pattern),
                body.to_vec(),
            )],
        }
    }
}

/// Builder for Rust `match` expressions.
#[derive(Debug, Clone)]
pub struct Match {
    scrutinee: String,
    prefix: String,
    suffix: String,
    arms: Vec<Arm>,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee: scrutinee.into(),
            prefix: String::new(),
            suffix: String::new(),
            arms: Vec::new(),
        }
    }

    /// Bind the match result, e.g., `let mode = match value { ... };`.
    pub fn bind(mut self, binding: impl Into<String>) -> Self {
        self.prefix = format!("let {} = ", binding.into());
        self.suffix = ";".to_string();
        self
    }

    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = Arm>) -> Self {
        self.arms.extend(arms);
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!("{}match {} {{", self.prefix, self.scrutinee),
            body: self.arms.iter().flat_map(|arm| arm.to_fragments()).collect(),
            close: Some(format!("}}{}", self.suffix)),
        }]
    }
}
