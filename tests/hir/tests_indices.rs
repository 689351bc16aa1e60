//! Declaration indices: parameters, locals and injected regions.

use rstest::rstest;
use srgmap::hir::{
    DeclarationId, ExtractOptions, JavaType, MethodType, ParameterScope, PrimitiveType,
    RangeRecord, Referent, ResolutionTable, SymbolKind, codes, extract_file,
};
use srgmap::syntax::SyntaxNode;

use crate::helpers::java_fixture::{JavaFixture, Ty};
use crate::helpers::record_assertions::{indexed, of_kind};

fn int() -> JavaType {
    JavaType::Primitive(PrimitiveType::Int)
}

fn records(root: &SyntaxNode, table: &ResolutionTable) -> Vec<RangeRecord> {
    let extraction = extract_file("Foo.java", root, table, &ExtractOptions::default());
    extraction.result.unwrap();
    extraction.records
}

/// `class Foo { void m(<params>) {` with every parameter typed `int`.
fn open_method(f: &mut JavaFixture, name: &str, parameters: &[&str]) -> Vec<DeclarationId> {
    let typed: Vec<_> = parameters.iter().map(|p| (Ty::Int, *p)).collect();
    let ty = MethodType::new(
        parameters.iter().map(|_| int()).collect(),
        JavaType::Primitive(PrimitiveType::Void),
    );
    f.open_method(Some(Ty::Void), name, &typed, Some(ty))
}

#[test]
fn test_parameter_indices_are_positions() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    let ids = open_method(&mut f, "m", &["a", "b", "c"]);
    for &i in &[2usize, 0, 1, 2, 0] {
        let name = ["a", "b", "c"][i];
        f.use_ref(name, Referent::parameter(ids[i], name, ParameterScope::Method));
    }
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let params = indexed(&records(&root, &table), SymbolKind::Parameter);
    assert_eq!(params.len(), 8);
    for (name, index) in params {
        let expected = ["a", "b", "c"].iter().position(|n| *n == name);
        assert_eq!(index, expected.map(|p| p as u32), "parameter {name}");
    }
}

#[test]
fn test_locals_are_numbered_in_declaration_order() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    let ids = open_method(&mut f, "m", &["p"]);
    let first = f.local(Ty::Int, "first");
    f.open_block();
    let second = f.local(Ty::Int, "second");
    f.close_block();
    let third = f.local(Ty::Int, "third");
    f.use_ref("third", Referent::local(third, "third"));
    f.use_ref("first", Referent::local(first, "first"));
    f.use_ref("second", Referent::local(second, "second"));
    f.use_ref("p", Referent::parameter(ids[0], "p", ParameterScope::Method));
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let locals = indexed(&records(&root, &table), SymbolKind::LocalVariable);
    let expected: Vec<_> = [
        ("first", 0),
        ("second", 1),
        ("third", 2),
        ("third", 2),
        ("first", 0),
        ("second", 1),
    ]
    .iter()
    .map(|(n, i)| (n.to_string(), Some(*i)))
    .collect();
    assert_eq!(locals, expected);
}

#[test]
fn test_each_method_restarts_local_indices() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    open_method(&mut f, "one", &[]);
    f.local(Ty::Int, "a");
    f.local(Ty::Int, "b");
    f.close_method();
    open_method(&mut f, "two", &[]);
    f.local(Ty::Int, "c");
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let locals = indexed(&records(&root, &table), SymbolKind::LocalVariable);
    assert_eq!(
        locals,
        vec![
            ("a".to_string(), Some(0)),
            ("b".to_string(), Some(1)),
            ("c".to_string(), Some(0)),
        ]
    );
}

/// Builds `m() { int a; [// X start int i0..iN // X end] int b; a; b; }`.
fn with_injection(injected: usize) -> (SyntaxNode, ResolutionTable) {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    open_method(&mut f, "m", &[]);
    let a = f.local(Ty::Int, "a");
    if injected > 0 {
        f.comment("// CraftBukkit start");
        for i in 0..injected {
            f.local(Ty::Int, &format!("i{i}"));
        }
        f.comment("// CraftBukkit end");
    }
    let b = f.local(Ty::Int, "b");
    f.use_ref("a", Referent::local(a, "a"));
    f.use_ref("b", Referent::local(b, "b"));
    f.close_method();
    f.close_class();
    f.finish()
}

fn normal_locals(records: &[RangeRecord]) -> Vec<(String, Option<u32>)> {
    indexed(records, SymbolKind::LocalVariable)
        .into_iter()
        .filter(|(name, _)| !name.starts_with('i'))
        .collect()
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
fn test_injected_code_does_not_shift_normal_indices(#[case] injected: usize) {
    let (plain_root, plain_table) = with_injection(0);
    let (root, table) = with_injection(injected);

    let plain = records(&plain_root, &plain_table);
    let patched = records(&root, &table);
    assert_eq!(normal_locals(&patched), normal_locals(&plain));

    let injected_indices: Vec<_> = indexed(&patched, SymbolKind::LocalVariable)
        .into_iter()
        .filter(|(name, _)| name.starts_with('i'))
        .filter_map(|(_, index)| index)
        .collect();
    assert_eq!(injected_indices.len(), injected);
    assert!(injected_indices.iter().all(|&i| i >= 100));
    assert!(injected_indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_declaration_and_reference_identities_match() {
    let mut f = JavaFixture::new();
    f.package("a");
    f.open_class("Foo");
    f.field(Ty::Int, "count");
    let ids = open_method(&mut f, "m", &["p"]);
    let v = f.local(Ty::Int, "v");
    f.use_ref("count", Referent::field("a.Foo", "count"));
    f.use_ref("p", Referent::parameter(ids[0], "p", ParameterScope::Method));
    f.use_ref("v", Referent::local(v, "v"));
    f.use_ref(
        "m",
        Referent::method(
            "a.Foo",
            "m",
            MethodType::new(vec![int()], JavaType::Primitive(PrimitiveType::Void)),
        ),
    );
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let records = records(&root, &table);
    for kind in [
        SymbolKind::Field,
        SymbolKind::Method,
        SymbolKind::Parameter,
        SymbolKind::LocalVariable,
    ] {
        let of = of_kind(&records, kind);
        assert_eq!(of.len(), 2, "{kind:?}: declaration and one reference");
        assert_eq!(of[0].identity, of[1].identity, "{kind:?}");
        assert!(of[0].start < of[1].start);
    }
}

#[test]
fn test_local_from_other_scope_has_missing_index() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    open_method(&mut f, "one", &[]);
    let elsewhere = f.local(Ty::Int, "shared");
    f.close_method();
    open_method(&mut f, "two", &[]);
    f.use_ref("shared", Referent::local(elsewhere, "shared"));
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract_file("Foo.java", &root, &table, &ExtractOptions::default());
    assert!(extraction.is_success());
    let last = extraction.records.last().unwrap().to_string();
    assert!(last.ends_with("\ttwo\t()V\tshared\t-1"), "{last}");
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.diagnostics[0].code, codes::MISSING_LOCAL_INDEX);
}

#[test]
fn test_foreach_variable_is_a_local() {
    use srgmap::syntax::SyntaxKind::*;

    let mut f = JavaFixture::new();
    f.open_class("Foo");
    open_method(&mut f, "m", &[]);
    let before = f.local(Ty::Int, "before");

    let b = f.builder();
    b.start_node(FOREACH_STATEMENT);
    b.token(FOR_KW, "for");
    b.token(L_PAREN, "(");
    b.start_node(PARAMETER);
    b.start_node(TYPE);
    b.token(INT_KW, "int");
    b.finish_node();
    b.ws();
    let item = DeclarationId::new(b.ident("item"));
    b.finish_node();
    b.token(COLON, ":");
    b.token(R_PAREN, ")");
    f.open_block();
    f.use_ref("item", Referent::parameter(item, "item", ParameterScope::Foreach));
    f.use_ref("before", Referent::local(before, "before"));
    f.close_block();
    f.builder().finish_node();

    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let locals = indexed(&records(&root, &table), SymbolKind::LocalVariable);
    assert_eq!(
        locals,
        vec![
            ("before".to_string(), Some(0)),
            ("item".to_string(), Some(1)),
            ("item".to_string(), Some(1)),
            ("before".to_string(), Some(0)),
        ]
    );
}
