//! Structural extraction of whole files.

use srgmap::OffsetEncoding;
use srgmap::hir::{
    ExtractError, ExtractOptions, FileExtraction, JavaType, MethodType, PrimitiveType, Referent,
    SymbolKind, codes, extract_file,
};
use srgmap::syntax::SyntaxNode;

use crate::helpers::java_fixture::{JavaFixture, Ty};
use crate::helpers::record_assertions::{assert_ranges_cover_names, lines, of_kind, text_at};

fn int() -> JavaType {
    JavaType::Primitive(PrimitiveType::Int)
}

fn void() -> JavaType {
    JavaType::Primitive(PrimitiveType::Void)
}

fn extract(root: &SyntaxNode, fixture_table: &srgmap::hir::ResolutionTable) -> FileExtraction {
    extract_file("a/b/Foo.java", root, fixture_table, &ExtractOptions::default())
}

/// ```java
/// package a.b;
/// import java.util.List;
/// class Foo {
///   List items;
///   int count;
///   void run(int x, List y) { int t; x; y; t; items; }
/// }
/// ```
fn sample() -> (SyntaxNode, srgmap::hir::ResolutionTable) {
    let list = Ty::Class("List", "java.util.List");
    let mut f = JavaFixture::new();
    f.package("a.b").import("java.util.List");
    f.open_class("Foo");
    f.field(list, "items");
    f.field(Ty::Int, "count");
    let params = f.open_method(
        Some(Ty::Void),
        "run",
        &[(Ty::Int, "x"), (list, "y")],
        Some(MethodType::new(
            vec![int(), JavaType::class("java.util.List")],
            void(),
        )),
    );
    let t = f.local(Ty::Int, "t");
    f.use_ref(
        "x",
        Referent::parameter(params[0], "x", srgmap::hir::ParameterScope::Method),
    );
    f.use_ref(
        "y",
        Referent::parameter(params[1], "y", srgmap::hir::ParameterScope::Method),
    );
    f.use_ref("t", Referent::local(t, "t"));
    f.use_ref("items", Referent::field("a.b.Foo", "items"));
    f.close_method();
    f.close_class();
    f.finish()
}

#[test]
fn test_file_records_in_traversal_order() {
    let (root, table) = sample();
    let extraction = extract(&root, &table);
    extraction.result.clone().unwrap();
    assert!(extraction.diagnostics.is_empty());

    let fields: Vec<_> = lines(&extraction.records)
        .iter()
        .map(|l| l.split('\t').skip(4).collect::<Vec<_>>().join(" "))
        .collect();
    assert_eq!(
        fields,
        vec![
            "package a.b",
            "class java.util.List",
            "class a.b.Foo",
            "class java.util.List",
            "field a.b.Foo items",
            "field a.b.Foo count",
            "method a.b.Foo run (ILjava/util/List;)V",
            "param a.b.Foo run (ILjava/util/List;)V x 0",
            "class java.util.List",
            "param a.b.Foo run (ILjava/util/List;)V y 1",
            "localvar a.b.Foo run (ILjava/util/List;)V t 0",
            "param a.b.Foo run (ILjava/util/List;)V x 0",
            "param a.b.Foo run (ILjava/util/List;)V y 1",
            "localvar a.b.Foo run (ILjava/util/List;)V t 0",
            "field a.b.Foo items",
        ]
    );
}

#[test]
fn test_ranges_cover_identifiers() {
    let (root, table) = sample();
    let source = root.text().to_string();
    let extraction = extract(&root, &table);

    assert_ranges_cover_names(&source, &extraction.records);

    let import = &extraction.records[1];
    assert_eq!(text_at(&source, import), "java.util.List");
    assert!(extraction.records.iter().all(|r| r.file == "a/b/Foo.java"));
}

#[test]
fn test_nested_classes_are_qualified_with_outer_name() {
    let mut f = JavaFixture::new();
    f.package("a");
    f.open_class("Outer");
    f.open_class("Inner");
    f.field(Ty::Int, "f");
    f.close_class();
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    extraction.result.clone().unwrap();
    let classes: Vec<_> = of_kind(&extraction.records, SymbolKind::Class)
        .iter()
        .map(|r| r.identity.name().to_string())
        .collect();
    assert_eq!(classes, vec!["a.Outer", "a.Outer.Inner"]);
    assert!(lines(&extraction.records).last().unwrap().ends_with("field\ta.Outer.Inner\tf"));
}

#[test]
fn test_default_package_class_has_no_prefix() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    assert_eq!(lines(&extraction.records), vec!["@\ta/b/Foo.java\t6\t9\tclass\tFoo"]);
}

#[test]
fn test_class_header_references() {
    let mut f = JavaFixture::new();
    f.package("a");
    f.open_class_extends("Foo", ("Bar", "b.Bar"));
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    let classes: Vec<_> = of_kind(&extraction.records, SymbolKind::Class)
        .iter()
        .map(|r| r.identity.name().to_string())
        .collect();
    assert_eq!(classes, vec!["a.Foo", "b.Bar"]);
}

#[test]
fn test_initializer_blocks_use_brace_sentinel() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    f.open_initializer(true);
    let v = f.local(Ty::Int, "v");
    f.use_ref("v", Referent::local(v, "v"));
    f.close_initializer();
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    extraction.result.clone().unwrap();
    let locals: Vec<_> = lines(&extraction.records)
        .into_iter()
        .filter(|l| l.contains("\tlocalvar\t"))
        .collect();
    assert_eq!(locals.len(), 2);
    for line in locals {
        assert!(line.ends_with("\tlocalvar\tFoo\t{}\t\tv\t0"), "{line}");
    }
}

#[test]
fn test_field_initializer_is_outside_method() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    let holder = Ty::Class("Holder", "a.Holder");
    f.field_with_initializer(holder, "h", "DEFAULT", Referent::field("a.Holder", "DEFAULT"));
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    extraction.result.clone().unwrap();
    let fields: Vec<_> = of_kind(&extraction.records, SymbolKind::Field)
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(fields.len(), 2);
    assert!(fields[0].ends_with("field\tFoo\th"));
    assert!(fields[1].ends_with("field\ta.Holder\tDEFAULT"));
}

#[test]
fn test_enum_constants_are_fields() {
    let mut f = JavaFixture::new();
    f.package("a");
    f.open_enum("Color");
    f.enum_constant("RED");
    f.enum_constant("GREEN");
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    extraction.result.clone().unwrap();
    let names: Vec<_> = of_kind(&extraction.records, SymbolKind::Field)
        .iter()
        .map(|r| r.identity.name().to_string())
        .collect();
    assert_eq!(names, vec!["RED", "GREEN"]);
}

#[test]
fn test_constructor_signature_returns_void() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    f.open_method(
        None,
        "Foo",
        &[(Ty::Int, "size")],
        Some(MethodType::constructor(vec![int()])),
    );
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    let methods = of_kind(&extraction.records, SymbolKind::Method);
    assert_eq!(methods.len(), 1);
    assert!(methods[0].to_string().ends_with("method\tFoo\tFoo\t(I)V"));
}

#[test]
fn test_unresolved_method_type_fails_file() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    f.open_method(Some(Ty::Void), "run", &[], None);
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    assert!(matches!(
        extraction.result,
        Err(ExtractError::UnresolvedMethodType { ref method, .. }) if method == "run"
    ));
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.diagnostics[0].code, codes::UNRESOLVED_METHOD_TYPE);
}

#[test]
fn test_unresolved_reference_discards_every_record() {
    let mut f = JavaFixture::new();
    f.package("a");
    f.open_class("Foo");
    f.field(Ty::Int, "count");
    f.open_method(
        Some(Ty::Void),
        "run",
        &[],
        Some(MethodType::new(vec![], void())),
    );
    f.unresolved("nowhere");
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    assert!(!extraction.is_success());
    assert!(extraction.records.is_empty());
    match extraction.result {
        Err(ExtractError::UnresolvedReference {
            ref class,
            ref method,
            ref signature,
            ref name,
            ..
        }) => {
            assert_eq!(class, "a.Foo");
            assert_eq!(method, "run");
            assert_eq!(signature, "()V");
            assert_eq!(name, "nowhere");
        }
        ref other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_error_node_fails_before_output() {
    let mut f = JavaFixture::new();
    f.open_class("Foo");
    f.error("#");
    f.close_class();
    let (root, table) = f.finish();

    let extraction = extract(&root, &table);
    assert!(matches!(
        extraction.result,
        Err(ExtractError::MalformedSyntax { .. })
    ));
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.diagnostics[0].code, codes::MALFORMED_SYNTAX);
}

#[test]
fn test_error_token_fails_the_file() {
    use srgmap::syntax::SyntaxKind::ERROR;

    let mut f = JavaFixture::new();
    f.open_class("Foo");
    f.open_method(Some(Ty::Void), "m", &[], Some(MethodType::new(vec![], void())));
    f.local(Ty::Int, "x");
    f.builder().token(ERROR, "#");
    f.close_method();
    f.close_class();
    let (root, table) = f.finish();
    let hash = root.text().to_string().find('#').unwrap() as u32;

    let extraction = extract(&root, &table);
    assert!(matches!(
        extraction.result,
        Err(ExtractError::MalformedSyntax { offset, .. }) if offset == hash
    ));
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.diagnostics[0].code, codes::MALFORMED_SYNTAX);
}

#[test]
fn test_options_disable_package_and_imports() {
    let (root, table) = sample();
    let options = ExtractOptions {
        emit_package_statements: false,
        emit_imports: false,
        ..ExtractOptions::default()
    };

    let extraction = extract_file("Foo.java", &root, &table, &options);
    assert!(of_kind(&extraction.records, SymbolKind::Package).is_empty());
    assert_eq!(
        extraction.records[0].identity.name(),
        "a.b.Foo",
        "first record is the class declaration"
    );
}

#[test]
fn test_offset_encodings() {
    // a supplementary character is 1 char, 2 UTF-16 units, 4 bytes
    let mut f = JavaFixture::new();
    f.comment("// \u{1F600}");
    f.open_class("Foo");
    f.close_class();
    let (root, table) = f.finish();

    let start_of = |encoding| {
        let options = ExtractOptions::default().with_offset_encoding(encoding);
        extract_file("Foo.java", &root, &table, &options).records[0].start
    };
    let chars = start_of(OffsetEncoding::Char);
    assert_eq!(start_of(OffsetEncoding::Utf16), chars + 1);
    assert_eq!(start_of(OffsetEncoding::Utf8), chars + 3);
}
