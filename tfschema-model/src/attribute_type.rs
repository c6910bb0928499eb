use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The declared type of a schema attribute.
///
/// On the wire this is an untagged union: a bare string for primitives,
/// `[kind, element]` for collections, `["object", {members}]` (optionally with
/// a third element listing optional member names) for objects, and
/// `["tuple", [elements]]` for tuples. The enum makes each shape explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Primitive(PrimitiveType),
    Collection {
        kind: CollectionKind,
        element: Box<AttributeType>,
    },
    Object {
        members: BTreeMap<String, AttributeType>,
        /// Member names declared optional via the `["object", {..}, [..]]` form.
        optional: Vec<String>,
    },
    Tuple(Vec<AttributeType>),
}

/// Scalar type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    String,
    Number,
    Bool,
    Dynamic,
}

/// Homogeneous collection kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

impl PrimitiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Dynamic => "dynamic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "bool" => Some(Self::Bool),
            "dynamic" => Some(Self::Dynamic),
            _ => None,
        }
    }
}

impl CollectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Self::List),
            "set" => Some(Self::Set),
            "map" => Some(Self::Map),
            _ => None,
        }
    }

    /// Lists and sets can be walked into by member name when their element is an object.
    pub fn is_sequence(self) -> bool {
        matches!(self, Self::List | Self::Set)
    }
}

impl AttributeType {
    /// The fallback type used when nothing more precise is known.
    pub const DYNAMIC: AttributeType = AttributeType::Primitive(PrimitiveType::Dynamic);

    /// Shorthand for a collection type.
    pub fn collection(kind: CollectionKind, element: AttributeType) -> Self {
        Self::Collection {
            kind,
            element: Box::new(element),
        }
    }

    pub fn list(element: AttributeType) -> Self {
        Self::collection(CollectionKind::List, element)
    }

    pub fn set(element: AttributeType) -> Self {
        Self::collection(CollectionKind::Set, element)
    }

    pub fn map(element: AttributeType) -> Self {
        Self::collection(CollectionKind::Map, element)
    }

    /// Shorthand for an object type with no optional members.
    pub fn object<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, AttributeType)>,
        K: Into<String>,
    {
        Self::Object {
            members: members.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            optional: Vec::new(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Dynamic))
    }

    /// Element type of a list, set or map.
    pub fn element(&self) -> Option<&AttributeType> {
        match self {
            Self::Collection { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Member types of an object.
    pub fn object_members(&self) -> Option<&BTreeMap<String, AttributeType>> {
        match self {
            Self::Object { members, .. } => Some(members),
            _ => None,
        }
    }

    /// Member types reachable by name from a list or set of objects.
    ///
    /// Maps, bare objects, tuples and primitives are not indexable this way.
    pub fn indexable_members(&self) -> Option<&BTreeMap<String, AttributeType>> {
        match self {
            Self::Collection { kind, element } if kind.is_sequence() => element.object_members(),
            _ => None,
        }
    }
}

impl Default for AttributeType {
    fn default() -> Self {
        Self::DYNAMIC
    }
}

impl From<PrimitiveType> for AttributeType {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the type-expression form, e.g. `list(object({name=string}))`.
impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Collection { kind, element } => write!(f, "{kind}({element})"),
            Self::Object { members, optional } => {
                f.write_str("object({")?;
                for (i, (name, ty)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if optional.iter().any(|o| o == name) {
                        write!(f, "{name}=optional({ty})")?;
                    } else {
                        write!(f, "{name}={ty}")?;
                    }
                }
                f.write_str("})")
            }
            Self::Tuple(elements) => {
                f.write_str("tuple([")?;
                for (i, ty) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str("])")
            }
        }
    }
}

impl Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Primitive(p) => serializer.serialize_str(p.as_str()),
            Self::Collection { kind, element } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(kind.as_str())?;
                seq.serialize_element(element)?;
                seq.end()
            }
            Self::Object { members, optional } => {
                let len = if optional.is_empty() { 2 } else { 3 };
                let mut seq = serializer.serialize_seq(Some(len))?;
                seq.serialize_element("object")?;
                seq.serialize_element(members)?;
                if !optional.is_empty() {
                    seq.serialize_element(optional)?;
                }
                seq.end()
            }
            Self::Tuple(elements) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("tuple")?;
                seq.serialize_element(elements)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AttributeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttributeTypeVisitor)
    }
}

struct AttributeTypeVisitor;

impl<'de> Visitor<'de> for AttributeTypeVisitor {
    type Value = AttributeType;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a primitive type name or a [kind, element] type descriptor")
    }

    fn visit_str<E>(self, name: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        PrimitiveType::from_name(name)
            .map(AttributeType::Primitive)
            .ok_or_else(|| {
                de::Error::unknown_variant(name, &["string", "number", "bool", "dynamic"])
            })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let kind: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let ty = match kind.as_str() {
            "object" => {
                let members: BTreeMap<String, AttributeType> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let optional: Vec<String> = seq.next_element()?.unwrap_or_default();
                AttributeType::Object { members, optional }
            }
            "tuple" => {
                let elements: Vec<AttributeType> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                AttributeType::Tuple(elements)
            }
            other => {
                let kind = CollectionKind::from_name(other).ok_or_else(|| {
                    de::Error::unknown_variant(other, &["list", "set", "map", "object", "tuple"])
                })?;
                let element: AttributeType = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                AttributeType::collection(kind, element)
            }
        };

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format!(
                "too many elements in `{kind}` type descriptor"
            )));
        }
        Ok(ty)
    }
}
