//! Minimal HTML building blocks.
//!
//! [`Html`] is always well-formed and escaped: text enters through
//! [`Html::text`], structure through [`Element`]. Attribute order is the
//! insertion order, so identical inputs produce identical bytes.

use std::fmt;

/// An HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Escaped text node.
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self(escape(value))
    }

    /// Concatenate fragments in order.
    #[must_use]
    pub fn concat(parts: impl IntoIterator<Item = Self>) -> Self {
        Self(parts.into_iter().map(|part| part.0).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Markup produced by this crate's own builders.
    pub(crate) const fn trusted(markup: String) -> Self {
        Self(markup)
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Join class names, skipping empty ones.
#[must_use]
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builder for a single element.
#[derive(Debug, Clone)]
#[must_use]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Html>,
    void: bool,
}

/// Start an element with children.
pub const fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
        void: false,
    }
}

/// Start a self-closing element (`<path/>`, `<img/>`).
pub const fn void_el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
        void: true,
    }
}

impl Element {
    /// Set the `class` attribute. Empty class lists are omitted.
    pub fn class(self, class: &str) -> Self {
        let class = cn(&[class]);
        if class.is_empty() {
            return self;
        }
        self.attr("class", &class)
    }

    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    pub fn child(mut self, child: Html) -> Self {
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Html>) -> Self {
        self.children
            .extend(children.into_iter().filter(|child| !child.is_empty()));
        self
    }

    pub fn text(self, value: &str) -> Self {
        self.child(Html::text(value))
    }

    #[must_use]
    pub fn build(self) -> Html {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        if self.void {
            out.push_str("/>");
            return Html::trusted(out);
        }
        out.push('>');
        for child in &self.children {
            out.push_str(child.as_str());
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Html::trusted(out)
    }
}
