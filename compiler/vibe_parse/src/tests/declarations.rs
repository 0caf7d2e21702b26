use pretty_assertions::assert_eq;
use vibe_diagnostic::ErrorCode;

use super::{codes, sexp};

#[test]
fn test_parameter_kinds() {
    assert_eq!(
        sexp("def f(x, y: Integer, @z) end"),
        "(program (method f parameters: (parameters params: [(simple_parameter x) \
         (typed_parameter y type: (type_annotation types: [(type_name Integer)])) \
         (ivar_parameter @z)])))"
    );
}

#[test]
fn test_typed_parameter_with_spaced_colon() {
    assert_eq!(
        sexp("def f(x :Integer, @z :String) end"),
        "(program (method f parameters: (parameters params: [(typed_parameter x type: \
         (type_annotation types: [(type_name Integer)])) (ivar_parameter @z type: \
         (type_annotation types: [(type_name String)]))])))"
    );
}

#[test]
fn test_parameter_defaults_and_trailing_comma() {
    assert_eq!(
        sexp("def f(a = 1, b: Integer = 2,) end"),
        "(program (method f parameters: (parameters params: [(simple_parameter a default: (integer 1)) \
         (typed_parameter b type: (type_annotation types: [(type_name Integer)]) \
         default: (integer 2))])))"
    );
}

#[test]
fn test_type_annotations() {
    assert_eq!(
        sexp("def g(a: integer?, b: Integer | nil) -> String? end"),
        "(program (method g parameters: (parameters params: [(typed_parameter a type: \
         (type_annotation types: [(type_name integer?)])) (typed_parameter b type: \
         (type_annotation types: [(type_name Integer) (type_name nil)]))]) return_type: \
         (type_annotation types: [(type_name String?)])))"
    );
}

#[test]
fn test_private_singleton_method() {
    assert_eq!(
        sexp("private def self.build(@name: String?) -> Point\n  Point.new()\nend"),
        "(program (method private self.build parameters: (parameters params: [(ivar_parameter @name \
         type: (type_annotation types: [(type_name String?)]))]) return_type: (type_annotation \
         types: [(type_name Point)]) body: [(call new receiver: (constant Point))]))"
    );
}

#[test]
fn test_method_without_parameter_list() {
    assert_eq!(sexp("def ready?\n  true\nend"), "(program (method ready? body: [(true)]))");
}

#[test]
fn test_export() {
    assert_eq!(
        sexp("export def run() end"),
        "(program (export_method method: (method run parameters: (parameters))))"
    );
    assert_eq!(codes("export x"), vec![ErrorCode::E1001]);
}

#[test]
fn test_class_members() {
    assert_eq!(
        sexp("class Point\n  property x, y\n  getter id\n  @@count = 0\n  def self.origin() end\nend"),
        "(program (class Point members: [(property_declaration x y) (getter_declaration id) \
         (class_variable_assignment @@count value: (integer 0)) \
         (method self.origin parameters: (parameters))]))"
    );
}

#[test]
fn test_empty_class() {
    let output = crate::parse("class Empty\nend");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1008);
    assert_eq!(output.tree.to_sexp(), "(program (class Empty))");
}

#[test]
fn test_invalid_class_member_recovers() {
    let output = crate::parse("class A\n  42\n  def ok() end\nend");
    assert_eq!(output.errors.iter().map(|e| e.code).collect::<Vec<_>>(), vec![ErrorCode::E1010]);
    assert_eq!(
        output.tree.to_sexp(),
        "(program (class A members: [(error) (method ok parameters: (parameters))]))"
    );
}

#[test]
fn test_missing_type() {
    assert_eq!(codes("def f(x: 1) end").first(), Some(&ErrorCode::E1005));
}

#[test]
fn test_malformed_parameter_list() {
    assert_eq!(codes("def f(1) end").first(), Some(&ErrorCode::E1006));
}

#[test]
fn test_single_line_class() {
    assert_eq!(sexp("class Foo property x end"), "(program (class Foo members: [(property_declaration x)]))");
    assert_eq!(codes("class Foo end"), vec![ErrorCode::E1008]);
}
