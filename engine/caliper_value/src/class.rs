//! Nominal constructors.

use std::fmt;

use crate::heap::Heap;

/// A constructor with nominal identity.
///
/// Two `ClassValue` handles describe the same class only when they share an
/// allocation; the name is display metadata, not identity. A class may name
/// a parent, forming the chain that [`derives_from`](ClassValue::derives_from)
/// walks when a value is matched nominally.
#[derive(Clone)]
pub struct ClassValue(Heap<ClassDef>);

struct ClassDef {
    name: Option<String>,
    parent: Option<ClassValue>,
}

impl ClassValue {
    /// Define a new named class with no parent.
    pub fn new(name: impl Into<String>) -> Self {
        ClassValue(Heap::new(ClassDef {
            name: Some(name.into()),
            parent: None,
        }))
    }

    /// Define a class with no inspectable name.
    pub fn anonymous() -> Self {
        ClassValue(Heap::new(ClassDef {
            name: None,
            parent: None,
        }))
    }

    /// Define a named class extending `self`.
    pub fn subclass(&self, name: impl Into<String>) -> Self {
        ClassValue(Heap::new(ClassDef {
            name: Some(name.into()),
            parent: Some(self.clone()),
        }))
    }

    /// The class name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The direct parent class, if any.
    pub fn parent(&self) -> Option<&ClassValue> {
        self.0.parent.as_ref()
    }

    /// Whether this is the same class definition as `other`.
    pub fn same_class(&self, other: &ClassValue) -> bool {
        Heap::ptr_eq(&self.0, &other.0)
    }

    /// Whether this class is `other` or has `other` somewhere up its
    /// parent chain.
    pub fn derives_from(&self, other: &ClassValue) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.same_class(other) {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "ClassValue({name})"),
            None => f.write_str("ClassValue(<anonymous>)"),
        }
    }
}
