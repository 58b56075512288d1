//! Core data types for the documentation search index.
//!
//! The on-disk shape is the compact rustdoc encoding: one JSON object
//! keyed by crate name, each value holding parallel item sequences and
//! a 1-based type path table. Field names below are descriptive; the
//! serde renames keep the single-letter wire keys.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Top-level mapping from crate name to its entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    crates: BTreeMap<String, CrateEntry>,
}

impl SearchIndex {
    /// Look up one crate entry
    pub fn get(&self, name: &str) -> Option<&CrateEntry> {
        self.crates.get(name)
    }

    /// Number of crates in the index
    pub fn len(&self) -> usize {
        self.crates.len()
    }

    /// True when the index holds no crates
    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    /// Crate names in sorted order
    pub fn crate_names(&self) -> impl Iterator<Item = &str> {
        self.crates.keys().map(String::as_str)
    }

    /// Iterate over `(name, entry)` pairs in sorted order
    pub fn iter(&self) -> btree_map::Iter<'_, String, CrateEntry> {
        self.crates.iter()
    }

    /// Total number of documented items across all crates
    pub fn item_count(&self) -> usize {
        self.crates.values().map(CrateEntry::len).sum()
    }
}

impl FromIterator<(String, CrateEntry)> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = (String, CrateEntry)>>(iter: I) -> Self {
        Self {
            crates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = (&'a String, &'a CrateEntry);
    type IntoIter = btree_map::Iter<'a, String, CrateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.crates.iter()
    }
}

/// Per-crate documentation metadata
///
/// `kinds`, `names`, `paths`, `descriptions` and `parents` are parallel:
/// position `k` in each describes the same item. `functions` follows the
/// same indexing when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateEntry {
    /// Crate-level summary
    pub doc: String,

    /// Item kind tags
    #[serde(rename = "t")]
    pub kinds: Vec<ItemKind>,

    /// Item names
    #[serde(rename = "n")]
    pub names: Vec<String>,

    /// Path qualifiers; empty means "same as the previous item"
    #[serde(rename = "q")]
    pub paths: Vec<String>,

    /// Short descriptions (HTML fragments)
    #[serde(rename = "d")]
    pub descriptions: Vec<String>,

    /// Parent indices: 0 for none, otherwise 1-based into `type_paths`
    #[serde(rename = "i")]
    pub parents: Vec<u32>,

    /// Function signatures
    #[serde(rename = "f", default)]
    pub functions: Vec<FunctionEntry>,

    /// Type path table referenced by parents and signatures
    #[serde(rename = "p", default)]
    pub type_paths: Vec<TypePath>,
}

impl CrateEntry {
    /// Number of documented items (length of the parallel sequences)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the crate documents no items
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a 1-based type path reference
    pub fn type_path(&self, id: u32) -> Option<&TypePath> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.type_paths.get(idx)
    }
}

/// `[kind, name]` entry of the type path table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePath(pub ItemKind, pub String);

impl TypePath {
    pub fn kind(&self) -> ItemKind {
        self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }
}

/// Item kind tag, numbered as rustdoc numbers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemKind {
    Module = 0,
    ExternCrate = 1,
    Import = 2,
    Struct = 3,
    Enum = 4,
    Function = 5,
    Typedef = 6,
    Static = 7,
    Trait = 8,
    Impl = 9,
    TyMethod = 10,
    Method = 11,
    StructField = 12,
    Variant = 13,
    Macro = 14,
    Primitive = 15,
    AssocType = 16,
    Constant = 17,
    AssocConst = 18,
    Union = 19,
    ForeignType = 20,
    Keyword = 21,
    OpaqueTy = 22,
    ProcAttribute = 23,
    ProcDerive = 24,
    TraitAlias = 25,
}

impl ItemKind {
    /// All kinds in tag order
    pub const ALL: [ItemKind; 26] = [
        ItemKind::Module,
        ItemKind::ExternCrate,
        ItemKind::Import,
        ItemKind::Struct,
        ItemKind::Enum,
        ItemKind::Function,
        ItemKind::Typedef,
        ItemKind::Static,
        ItemKind::Trait,
        ItemKind::Impl,
        ItemKind::TyMethod,
        ItemKind::Method,
        ItemKind::StructField,
        ItemKind::Variant,
        ItemKind::Macro,
        ItemKind::Primitive,
        ItemKind::AssocType,
        ItemKind::Constant,
        ItemKind::AssocConst,
        ItemKind::Union,
        ItemKind::ForeignType,
        ItemKind::Keyword,
        ItemKind::OpaqueTy,
        ItemKind::ProcAttribute,
        ItemKind::ProcDerive,
        ItemKind::TraitAlias,
    ];

    /// Short name used in documentation URLs (`struct`, `fn`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Module => "mod",
            ItemKind::ExternCrate => "externcrate",
            ItemKind::Import => "import",
            ItemKind::Struct => "struct",
            ItemKind::Enum => "enum",
            ItemKind::Function => "fn",
            ItemKind::Typedef => "type",
            ItemKind::Static => "static",
            ItemKind::Trait => "trait",
            ItemKind::Impl => "impl",
            ItemKind::TyMethod => "tymethod",
            ItemKind::Method => "method",
            ItemKind::StructField => "structfield",
            ItemKind::Variant => "variant",
            ItemKind::Macro => "macro",
            ItemKind::Primitive => "primitive",
            ItemKind::AssocType => "associatedtype",
            ItemKind::Constant => "constant",
            ItemKind::AssocConst => "associatedconstant",
            ItemKind::Union => "union",
            ItemKind::ForeignType => "foreigntype",
            ItemKind::Keyword => "keyword",
            ItemKind::OpaqueTy => "opaque",
            ItemKind::ProcAttribute => "attr",
            ItemKind::ProcDerive => "derive",
            ItemKind::TraitAlias => "traitalias",
        }
    }

    /// True for kinds that carry a function signature
    pub fn is_fn_like(self) -> bool {
        matches!(
            self,
            ItemKind::Function | ItemKind::Method | ItemKind::TyMethod
        )
    }
}

impl TryFrom<u8> for ItemKind {
    type Error = String;

    fn try_from(tag: u8) -> std::result::Result<Self, Self::Error> {
        ItemKind::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or_else(|| format!("unknown item kind tag {tag}"))
    }
}

impl From<ItemKind> for u8 {
    fn from(kind: ItemKind) -> Self {
        kind as u8
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ItemKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| format!("unknown item kind '{s}'"))
    }
}

/// One entry of the `f` sequence: `0` or a signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFunction", into = "RawFunction")]
pub struct FunctionEntry(pub Option<FunctionSignature>);

impl FunctionEntry {
    pub fn signature(&self) -> Option<&FunctionSignature> {
        self.0.as_ref()
    }
}

/// Function inputs and optional output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub inputs: TypeList,
    pub output: Option<TypeList>,
}

impl FunctionSignature {
    /// All type references mentioned by the signature, outermost only
    pub fn all_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.inputs
            .types()
            .iter()
            .chain(self.output.iter().flat_map(|output| output.types().iter()))
    }
}

/// A list of types; a lone type may appear without the surrounding array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeList {
    // Order matters: `[1, [2]]` is a list only if every element is a type.
    Many(Vec<TypeRef>),
    One(TypeRef),
}

impl TypeList {
    /// The contained types
    pub fn types(&self) -> &[TypeRef] {
        match self {
            TypeList::Many(types) => types,
            TypeList::One(ty) => std::slice::from_ref(ty),
        }
    }

    /// Number of types in the list
    pub fn len(&self) -> usize {
        self.types().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types().is_empty()
    }
}

/// A type reference: a path table id, optionally with generic arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    Id(u32),
    Generic(u32, Vec<TypeRef>),
}

impl TypeRef {
    /// The 1-based path table id
    pub fn id(&self) -> u32 {
        match self {
            TypeRef::Id(id) | TypeRef::Generic(id, _) => *id,
        }
    }

    /// Generic arguments, empty for plain types
    pub fn generics(&self) -> &[TypeRef] {
        match self {
            TypeRef::Id(_) => &[],
            TypeRef::Generic(_, generics) => generics,
        }
    }
}

/// Wire form of a `FunctionEntry`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFunction {
    Absent(u8),
    Present(Vec<TypeList>),
}

impl TryFrom<RawFunction> for FunctionEntry {
    type Error = String;

    fn try_from(raw: RawFunction) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawFunction::Absent(0) => Ok(FunctionEntry(None)),
            RawFunction::Absent(other) => Err(format!("unexpected function marker {other}")),
            RawFunction::Present(lists) => {
                let mut lists = lists.into_iter();
                let inputs = lists
                    .next()
                    .ok_or_else(|| "function signature without inputs".to_string())?;
                let output = lists.next();
                if lists.next().is_some() {
                    return Err("function signature with more than two type lists".to_string());
                }
                Ok(FunctionEntry(Some(FunctionSignature { inputs, output })))
            }
        }
    }
}

impl From<FunctionEntry> for RawFunction {
    fn from(entry: FunctionEntry) -> Self {
        match entry.0 {
            None => RawFunction::Absent(0),
            Some(sig) => {
                let mut lists = vec![sig.inputs];
                lists.extend(sig.output);
                RawFunction::Present(lists)
            }
        }
    }
}
