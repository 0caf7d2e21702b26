use pretty_assertions::assert_eq;

use super::sexp;

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        sexp("1 + 2 * 3"),
        "(program (binary + left: (integer 1) right: (binary * left: (integer 2) right: (integer 3))))"
    );
}

#[test]
fn test_precedence_ladder() {
    assert_eq!(
        sexp("a || b && c == d < e .. f + g * h"),
        "(program (binary || left: (identifier a) right: (binary && left: (identifier b) \
         right: (binary == left: (identifier c) right: (binary < left: (identifier d) \
         right: (binary .. left: (identifier e) right: (binary + left: (identifier f) \
         right: (binary * left: (identifier g) right: (identifier h)))))))))"
    );
}

#[test]
fn test_left_associative() {
    assert_eq!(
        sexp("1 - 2 - 3"),
        "(program (binary - left: (binary - left: (integer 1) right: (integer 2)) right: (integer 3)))"
    );
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        sexp("a = b = c"),
        "(program (assignment target: (identifier a) value: (assignment target: (identifier b) \
         value: (identifier c))))"
    );
    assert_eq!(
        sexp("a = b += 1"),
        "(program (assignment target: (identifier a) value: (compound_assignment += \
         target: (identifier b) value: (integer 1))))"
    );
}

#[test]
fn test_word_operators_share_levels() {
    assert_eq!(
        sexp("x and y or z"),
        "(program (binary || left: (binary && left: (identifier x) right: (identifier y)) \
         right: (identifier z)))"
    );
}

#[test]
fn test_unary_binds_looser_than_postfix() {
    assert_eq!(
        sexp("-a.b(c)"),
        "(program (unary - operand: (call b receiver: (identifier a) arguments: [(identifier c)])))"
    );
    assert_eq!(
        sexp("!done == false"),
        "(program (binary == left: (unary ! operand: (identifier done)) right: (false)))"
    );
}

#[test]
fn test_call_with_keyword_arguments_and_block() {
    assert_eq!(
        sexp("items.each_with(limit: 3, \"x\",) do |item, i|\n  puts(item)\nend"),
        "(program (call each_with receiver: (identifier items) arguments: \
         [(keyword_argument key: (identifier limit) value: (integer 3)) (string \"x\")] \
         block: (block |item i| body: [(call puts arguments: [(identifier item)])])))"
    );
}

#[test]
fn test_member_access_and_subscript() {
    assert_eq!(
        sexp("list.each do |x| x end"),
        "(program (member_access each receiver: (identifier list) block: \
         (block |x| body: [(identifier x)])))"
    );
    assert_eq!(
        sexp("rows[0].name"),
        "(program (member_access name receiver: (subscript receiver: (identifier rows) \
         index: (integer 0))))"
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        sexp("[1, 2.5, :ok, nil, self, @a, @@b, {name: \"v\", \"k\": true},]"),
        "(program (array elements: [(integer 1) (float 2.5) (symbol :ok) (nil) (self) \
         (instance_variable @a) (class_variable @@b) (hash entries: \
         [(hash_entry key: (identifier name) value: (string \"v\")) \
         (hash_entry key: (string \"k\") value: (true))])]))"
    );
}

#[test]
fn test_string_value_is_cooked() {
    assert_eq!(sexp(r#""a\tb\"c""#), r#"(program (string "a\tb\"c"))"#);
}

#[test]
fn test_parenthesized() {
    assert_eq!(
        sexp("(1 + 2) * 3"),
        "(program (binary * left: (parenthesized expression: (binary + left: (integer 1) \
         right: (integer 2))) right: (integer 3)))"
    );
}

#[test]
fn test_keyword_argument_with_spaced_colon() {
    assert_eq!(
        sexp("f(key :value, n :nil)"),
        "(program (call f arguments: [(keyword_argument key: (identifier key) value: (identifier value)) \
         (keyword_argument key: (identifier n) value: (nil))]))"
    );
    assert_eq!(
        sexp("f(:ok, x)"),
        "(program (call f arguments: [(symbol :ok) (identifier x)]))"
    );
}

#[test]
fn test_hash_entry_with_spaced_colon() {
    assert_eq!(
        sexp("{a :b, \"k\" :Point}"),
        "(program (hash entries: [(hash_entry key: (identifier a) value: (identifier b)) \
         (hash_entry key: (string \"k\") value: (constant Point))]))"
    );
}

#[test]
fn test_directive_shaped_comment_inside_expression() {
    assert_eq!(
        sexp("f(\n  1, # uses: cache\n  2\n)"),
        "(program (call f arguments: [(integer 1) (integer 2)]))"
    );
    assert_eq!(
        sexp("h = {\n  # vibe: 1.0\n  a: 1\n}"),
        "(program (assignment target: (identifier h) value: (hash entries: \
         [(hash_entry key: (identifier a) value: (integer 1))])))"
    );
    assert_eq!(
        sexp("x = 1 +\n  # uses: a\n  2"),
        "(program (assignment target: (identifier x) value: (binary + left: (integer 1) \
         right: (integer 2))))"
    );
}
