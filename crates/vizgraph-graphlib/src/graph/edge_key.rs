//! Edge identity.
//!
//! An edge is named by its endpoints `v -> w` plus an optional `name`; the name only takes part
//! in identity for multigraphs.

use std::fmt;

/// Borrowed form of [`EdgeKey`] for lookups that should not allocate.
///
/// Field order and types must hash exactly like `EdgeKey`.
#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
    pub(in crate::graph) name: Option<&'a str>,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        self.v == key.v && self.w == key.w && self.name == key.name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: Option<String>,
}

impl EdgeKey {
    pub fn new(
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.v, self.w)?;
        if let Some(name) = &self.name {
            write!(f, "[{name}]")?;
        }
        Ok(())
    }
}
