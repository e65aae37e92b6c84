// Author: Dustin Pilgrim
// License: MIT

/// Half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `source` this span covers.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    List(Vec<Value>),
    Indexed(Box<Value>, Box<Value>), // [key] = value
    Enum(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Value,
    pub local: bool,
    /// From the first byte of the key (or `local`) to one past the value.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub properties: Vec<Property>, // source order, duplicates allowed
}

impl Document {
    /// First non-local property named `key`.
    pub fn find(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| !p.local && p.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| !p.local && p.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.key.as_str()).collect()
    }
}

impl Value {
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Float(_) => "float",
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Indexed(_, _) => "indexed entry",
            Value::Enum(_) => "enum literal",
        }
    }
}
