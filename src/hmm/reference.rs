//!
//! Reference to a state or an observation symbol, by name or by index
//!
///
/// A state or observation given either as its name in the catalog
/// or as its 0-based index.
///
/// Resolved into a canonical index by `Model::resolve_state` and
/// `Model::resolve_observation`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ref<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Ref<'a> {
    fn from(name: &'a str) -> Ref<'a> {
        Ref::Name(name)
    }
}

impl<'a> From<&'a String> for Ref<'a> {
    fn from(name: &'a String) -> Ref<'a> {
        Ref::Name(name.as_str())
    }
}

impl<'a, 'b> From<&'b &'a str> for Ref<'a> {
    fn from(name: &'b &'a str) -> Ref<'a> {
        Ref::Name(name)
    }
}

impl<'a> From<usize> for Ref<'a> {
    fn from(index: usize) -> Ref<'a> {
        Ref::Index(index)
    }
}

impl<'a> From<&usize> for Ref<'a> {
    fn from(index: &usize) -> Ref<'a> {
        Ref::Index(*index)
    }
}

impl<'a> std::fmt::Display for Ref<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ref::Name(name) => write!(f, "{}", name),
            Ref::Index(index) => write!(f, "#{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_conversions() {
        let s = String::from("S1");
        assert_eq!(Ref::from("a"), Ref::Name("a"));
        assert_eq!(Ref::from(&s), Ref::Name("S1"));
        assert_eq!(Ref::from(&"b"), Ref::Name("b"));
        assert_eq!(Ref::from(3), Ref::Index(3));
        assert_eq!(Ref::from(&4usize), Ref::Index(4));
        assert_eq!(Ref::Name("a").to_string(), "a");
        assert_eq!(Ref::Index(2).to_string(), "#2");
    }
}
