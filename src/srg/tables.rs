//! Renaming tables and their entries.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Class rename: old qualified (dotted) name to new simple name.
///
/// A class in the default package is keyed by its bare name (`CL: Foo Bar`
/// gives `Foo`, not `.Foo`), the same form the range records use for
/// unpackaged classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRename {
    pub old_name: SmolStr,
    pub new_name: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRename {
    pub owner: SmolStr,
    pub old_name: SmolStr,
    pub new_name: SmolStr,
}

/// Method rename. `signature` is the old descriptor, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRename {
    pub owner: SmolStr,
    pub old_name: SmolStr,
    pub signature: SmolStr,
    pub new_name: SmolStr,
}

/// New names of a method's parameters, by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNames {
    pub owner: SmolStr,
    pub method: SmolStr,
    pub signature: SmolStr,
    pub names: Vec<SmolStr>,
}

impl ParameterNames {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(SmolStr::as_str)
    }
}

/// Key of a field: owner class and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    pub owner: SmolStr,
    pub name: SmolStr,
}

impl MemberKey {
    pub fn new(owner: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

/// Key of a method: owner class, name and descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub owner: SmolStr,
    pub name: SmolStr,
    pub signature: SmolStr,
}

impl MethodKey {
    pub fn new(
        owner: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        signature: impl Into<SmolStr>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            signature: signature.into(),
        }
    }
}

/// The four lookup tables of a mapping file, in file order.
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RenamingTables {
    pub(super) classes: IndexMap<SmolStr, ClassRename>,
    pub(super) fields: IndexMap<MemberKey, FieldRename>,
    pub(super) methods: IndexMap<MethodKey, MethodRename>,
    pub(super) parameters: IndexMap<MethodKey, ParameterNames>,
    pub(super) skipped_lines: usize,
    pub(super) unrecognized_lines: usize,
}

impl RenamingTables {
    pub fn class(&self, old_name: &str) -> Option<&ClassRename> {
        self.classes.get(old_name)
    }

    pub fn field(&self, owner: &str, name: &str) -> Option<&FieldRename> {
        self.fields.get(&MemberKey::new(owner, name))
    }

    pub fn method(&self, owner: &str, name: &str, signature: &str) -> Option<&MethodRename> {
        self.methods.get(&MethodKey::new(owner, name, signature))
    }

    pub fn parameter_names(
        &self,
        owner: &str,
        method: &str,
        signature: &str,
    ) -> Option<&ParameterNames> {
        self.parameters
            .get(&MethodKey::new(owner, method, signature))
    }

    /// New name of the `index`-th parameter of a method.
    pub fn parameter_name(
        &self,
        owner: &str,
        method: &str,
        signature: &str,
        index: usize,
    ) -> Option<&str> {
        self.parameter_names(owner, method, signature)?.get(index)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassRename> {
        self.classes.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldRename> {
        self.fields.values()
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodRename> {
        self.methods.values()
    }

    pub fn parameter_lists(&self) -> impl Iterator<Item = &ParameterNames> {
        self.parameters.values()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn parameter_list_count(&self) -> usize {
        self.parameters.len()
    }

    /// Lines with fewer tokens than their record needs.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Lines with a record kind other than `CL:`, `FD:`, `MD:` or `PA:`.
    pub fn unrecognized_lines(&self) -> usize {
        self.unrecognized_lines
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.fields.is_empty()
            && self.methods.is_empty()
            && self.parameters.is_empty()
    }
}
