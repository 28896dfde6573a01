use quill::{
    interpret,
    interpreter::object::{core::Object, environment::Environment},
};

fn run(input: &str) -> Object {
    let env = Environment::global();
    interpret(input, &env)
        .unwrap_or_else(|errors| panic!("parse errors for {input:?}: {errors:?}"))
}

fn assert_integer(input: &str, expected: i64) {
    match run(input) {
        Object::Integer(value) => assert_eq!(value, expected, "input: {input}"),
        other => panic!("expected integer {expected} for {input:?}, got {other:?}"),
    }
}

fn assert_boolean(input: &str, expected: bool) {
    match run(input) {
        Object::Boolean(value) => assert_eq!(value, expected, "input: {input}"),
        other => panic!("expected boolean {expected} for {input:?}, got {other:?}"),
    }
}

fn assert_string(input: &str, expected: &str) {
    match run(input) {
        Object::Str(value) => assert_eq!(*value, expected, "input: {input}"),
        other => panic!("expected string {expected:?} for {input:?}, got {other:?}"),
    }
}

fn assert_null(input: &str) {
    match run(input) {
        Object::Null => {},
        other => panic!("expected null for {input:?}, got {other:?}"),
    }
}

fn assert_error(input: &str, expected: &str) {
    match run(input) {
        Object::Error(error) => assert_eq!(error.to_string(), expected, "input: {input}"),
        other => panic!("expected error {expected:?} for {input:?}, got {other:?}"),
    }
}

#[test]
fn integer_expressions() {
    let tests = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("0x10 + 0b1 + 0o7", 24),
    ];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn integer_arithmetic_wraps() {
    assert_integer("9223372036854775807 + 1", i64::MIN);
    assert_integer("-9223372036854775807 - 2", i64::MAX);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
    assert_integer("7 / -2", -3);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("1 / 0", "division by zero");
}

#[test]
fn boolean_expressions() {
    let tests = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("true == false", false),
        ("true != true", false),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
        ("(1 < 2) == (2 > 1)", true),
    ];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn equality_across_types_is_false_not_an_error() {
    assert_boolean("5 == \"5\"", false);
    assert_boolean("5 != \"5\"", true);
    assert_boolean("true == 1", false);
    assert_boolean("true != 1", true);
}

#[test]
fn aggregate_equality_is_by_identity() {
    assert_boolean("let a = [1, 2]; a == a", true);
    assert_boolean("[1, 2] == [1, 2]", false);
    assert_boolean("let h = {\"a\": 1}; h == h", true);
    assert_boolean("let f = fn() { 1 }; f == f", true);
}

#[test]
fn bang_operator() {
    let tests = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!0", true),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!!0", false),
        ("!\"\"", false),
        ("!{}[\"missing\"]", true),
    ];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn string_expressions() {
    let tests = [
        (r#""hello world""#, "hello world"),
        (r#""hello \"world\"""#, "hello \"world\""),
        (r#""hello\nworld""#, "hello\nworld"),
        (r#""hello\tworld""#, "hello\tworld"),
        (r#""hello" + " " + "world""#, "hello world"),
    ];

    for (input, expected) in tests {
        assert_string(input, expected);
    }
}

#[test]
fn string_comparisons_are_bytewise() {
    assert_boolean(r#""a" == "a""#, true);
    assert_boolean(r#""a" == "b""#, false);
    assert_boolean(r#""a" != "b""#, true);
}

#[test]
fn string_indexing() {
    assert_string(r#""hello"[1]"#, "e");
    assert_string(r#""hello"[0]"#, "h");
    assert_null(r#""hello"[5]"#);
    assert_null(r#""hello"[-1]"#);
}

#[test]
fn array_literals() {
    match run("[1, 2 * 2, 3 + 3]") {
        Object::Array(elements) => {
            assert_eq!(elements.len(), 3);
            assert_eq!(elements[0], Object::Integer(1));
            assert_eq!(elements[1], Object::Integer(4));
            assert_eq!(elements[2], Object::Integer(6));
        },
        other => panic!("expected array, got {other:?}"),
    }
}

#[test]
fn array_indexing() {
    let tests = [
        ("[1][0]", 1),
        ("[1, 2][1]", 2),
        ("let myArray = [1, 2, 3]; myArray[2];", 3),
        ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6),
        ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2),
    ];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }

    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn if_expressions() {
    let tests = [
        ("if (true) { 5 }", Some(5)),
        ("if (false) { 5 }", None),
        ("if (false) { 5 } else { 10 }", Some(10)),
        ("if (1) { 1 } else { 0 }", Some(1)),
        ("if (0) { 1 } else { 0 }", Some(0)),
        ("if (1 < 2) { 1 } else { 2 }", Some(1)),
        ("if (1 > 2) { 1 } else { 2 }", Some(2)),
        ("if ({}[\"missing\"]) { 1 } else { 2 }", Some(2)),
    ];

    for (input, expected) in tests {
        match expected {
            Some(value) => assert_integer(input, value),
            None => assert_null(input),
        }
    }
}

#[test]
fn blocks_do_not_open_a_scope() {
    assert_integer("if (true) { let x = 10 } x", 10);
    assert_integer("let x = 1; if (true) { x = 2 } x", 2);
}

#[test]
fn let_statements() {
    let tests = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ("let a = 1; let a = a + 1; a", 2),
    ];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn let_yields_null() {
    assert_null("let a = 5;");
}

#[test]
fn assignment_statements() {
    let tests = [
        ("let a = 5; a = 10; a", 10),
        ("let a = 5 * 5; a = a + a; a", 50),
        ("let a = 5; let b = 0; b = a; b", 5),
        ("let a = 5; let b = a; let c = 0; c = a + b + 5; c;", 15),
    ];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_integer("let a = 1; a = 2", 2);
}

#[test]
fn return_statements() {
    let tests = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        (
            "if (10 > 1) {
               if (10 > 1) {
                 return 10
               }
               return 1
             }",
            10,
        ),
    ];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn bare_return_yields_null() {
    assert_null("let f = fn() { return; 9; }; f()");
}

#[test]
fn function_object_inspects_as_source() {
    match run("fn(x) { x + 2; };") {
        Object::Function(function) => {
            assert_eq!(function.parameters, ["x"]);
        },
        other => panic!("expected function, got {other:?}"),
    }

    assert_eq!(run("fn(x) { x + 2; };").inspect(), "fn(x) {\n(x + 2);\n}");
}

#[test]
fn function_application() {
    let tests = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { return x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { return x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { return x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn extra_arguments_are_ignored() {
    assert_integer("fn(x) { x }(1, 2, 3)", 1);
}

#[test]
fn missing_arguments_are_an_error() {
    assert_error(
        "fn(x, y, z) { x }(1)",
        "function call is missing parameters: y, z",
    );
}

#[test]
fn return_unwraps_only_at_the_call_boundary() {
    assert_integer("let f = fn() { return 5; 9; }; f() + 1", 6);
    assert_integer(
        "let outer = fn() { let inner = fn() { return 1; }; inner(); 2 }; outer()",
        2,
    );
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_integer(
        "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(2);",
        4,
    );
}

#[test]
fn closures_can_mutate_captured_bindings() {
    assert_integer(
        "let counter = fn(x) { let inner = fn() { x = x + 1; x }; inner };
         let c = counter(0);
         c(); c(); c();",
        3,
    );
}

#[test]
fn assignments_through_the_outer_scope_are_visible_to_closures() {
    assert_integer(
        "let x = 1;
         let get = fn() { x };
         x = 41;
         get() + 1",
        42,
    );
}

#[test]
fn parameters_shadow_outer_bindings() {
    assert_integer("let x = 5; let f = fn(x) { x }; f(10)", 10);
    assert_integer("let x = 5; let f = fn(x) { x = x + 1; x }; f(10); x", 5);
}

#[test]
fn recursive_functions_see_their_own_binding() {
    assert_integer(
        "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10)",
        55,
    );
}

#[test]
fn hash_literals_and_indexing() {
    assert_integer(r#"{"a": 1, "b": 2}["b"]"#, 2);
    assert_boolean(r#"{1: true}[1]"#, true);
    assert_integer(r#"{true: 3}[true]"#, 3);
    assert_integer(r#"let key = "a"; {"a": 5}[key]"#, 5);
    assert_null(r#"{"a": 1}["b"]"#);
    assert_null(r#"{}["a"]"#);
}

#[test]
fn later_hash_keys_overwrite_earlier_ones() {
    assert_integer(r#"{"a": 1, "a": 2}["a"]"#, 2);
}

#[test]
fn hash_keys_do_not_collide_across_types() {
    assert_string(r#"{1: "int", true: "bool", "1": "str"}[true]"#, "bool");
    assert_string(r#"{1: "int", true: "bool", "1": "str"}[1]"#, "int");
    assert_string(r#"{1: "int", true: "bool", "1": "str"}["1"]"#, "str");
}

#[test]
fn equal_values_hash_to_the_same_key() {
    assert_integer(r#"let h = {1 + 1: 7}; h[2]"#, 7);
    assert_integer(r#"let h = {"a" + "b": 7}; h["ab"]"#, 7);
}

#[test]
fn dot_access_reads_string_keys() {
    assert_string(r#"{"name": "quill"}.name"#, "quill");
    assert_integer(r#"let h = {"outer": {"inner": 1}}; h.outer.inner"#, 1);
    assert_null(r#"{"name": "quill"}.missing"#);
}

#[test]
fn dot_and_index_agree_on_hashes() {
    assert_boolean(r#"let h = {"k": 9}; h.k == h["k"]"#, true);
}

#[test]
fn error_messages() {
    let tests = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true;", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (true + false) { true; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) {
               if (10 > 1) {
                 true + false
                 return 10
               }
               return 1
             }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier foobar is undefined"),
        ("foo = 1", "assign to an undefined identifier foo"),
        (r#""hello" - "world""#, "unknown operator: STRING - STRING"),
        (r#""a" < "b""#, "unknown operator: STRING < STRING"),
        ("5 < \"a\"", "type mismatch: INTEGER < STRING"),
        ("[1] + [2]", "unknown operator: ARRAY + ARRAY"),
        ("5[0]", "index operator not supported: INTEGER"),
        ("true[0]", "index operator not supported: BOOLEAN"),
        ("5.field", "dot operator not supported: INTEGER"),
        ("[1, 2].field", "dot operator not supported: ARRAY"),
        ("5(1)", "not a function: INTEGER"),
        ("let x = 5; x();", "not a function: INTEGER"),
        (r#"{[1, 2]: "x"}"#, "unusable as hash key: ARRAY"),
        (r#"{fn() { 1 }: "x"}"#, "unusable as hash key: FUNCTION"),
        (r#"{"a": 1}[[1]]"#, "unable to use hash key: ARRAY"),
    ];

    for (input, expected) in tests {
        assert_error(input, expected);
    }
}

#[test]
fn errors_short_circuit_later_evaluation() {
    // The undefined identifiers after the failing sub-expression are never
    // reached, otherwise their message would win.
    assert_error("[1, 2 + true, broken()]", "type mismatch: INTEGER + BOOLEAN");
    assert_error("(5 + true) + broken", "type mismatch: INTEGER + BOOLEAN");
    assert_error("len(5 + true, broken)", "type mismatch: INTEGER + BOOLEAN");
    assert_error(r#"{1 + true: broken}"#, "type mismatch: INTEGER + BOOLEAN");
    assert_error("let a = 5 + true; a", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn error_values_render_with_a_prefix() {
    assert_eq!(run("5 + true").inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn builtin_len() {
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("four")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments, got=2, want=1");
    assert_error("len()", "wrong number of arguments, got=0, want=1");
}

#[test]
fn builtin_first_and_last() {
    assert_integer("first([1, 2, 3])", 1);
    assert_integer("last([1, 2, 3])", 3);
    assert_null("first([])");
    assert_null("last([])");
    assert_string(r#"first("abc")"#, "a");
    assert_string(r#"last("abc")"#, "c");
    assert_string(r#"first("")"#, "");
    assert_string(r#"last("")"#, "");
    assert_error("first(1)", "argument to `first` not supported, got INTEGER");
    assert_error("last(true)", "argument to `last` not supported, got BOOLEAN");
}

#[test]
fn builtin_tail() {
    assert_eq!(run("tail([1, 2, 3])").inspect(), "[2, 3]");
    assert_null("tail([])");
    assert_string(r#"tail("abc")"#, "bc");
    assert_string(r#"tail("")"#, "");
    assert_error("tail(1)", "argument to `tail` not supported, got INTEGER");
}

#[test]
fn tail_shortens_by_one() {
    assert_integer(r#"len(tail("abcd"))"#, 3);
    assert_integer("len(tail([1, 2, 3]))", 2);
    assert_integer(r#"len(tail("a"))"#, 0);
}

#[test]
fn builtin_push_returns_a_new_array() {
    assert_eq!(run("push([1, 2], 3)").inspect(), "[1, 2, 3]");
    assert_eq!(run("push([], 1)").inspect(), "[1]");
    assert_error("push(1, 1)", "argument to `push` not supported, got INTEGER");
    assert_error("push([1])", "wrong number of arguments, got=1, want=2");
}

#[test]
fn push_never_mutates_its_argument() {
    assert_eq!(run("let a = [1, 2]; push(a, 3); a").inspect(), "[1, 2]");
}

#[test]
fn builtin_puts_yields_null() {
    assert_null(r#"puts("hello", 1, true)"#);
    assert_null("puts()");
}

#[test]
fn builtins_resolve_as_identifiers() {
    assert_integer(r#"let length = len; length("abc")"#, 3);
    assert_eq!(run("len").inspect(), "builtin function");
}

#[test]
fn bindings_shadow_builtins() {
    assert_integer(r#"let len = fn(x) { 99 }; len("abc")"#, 99);
}

#[test]
fn cast_string() {
    assert_string("string(5)", "5");
    assert_string("string(-5)", "-5");
    assert_string("string(true)", "true");
    assert_string(r#"string("x")"#, "x");
    assert_string(r#"string({}["missing"])"#, "null");
    assert_string("string([1, 2])", "[1, 2]");
}

#[test]
fn cast_int() {
    assert_integer("int(42)", 42);
    assert_integer("int(true)", 1);
    assert_integer("int(false)", 0);
    assert_integer(r#"int("42")"#, 42);
    assert_integer(r#"int("-42")"#, -42);
    assert_integer(r#"int("0x10")"#, 16);
    assert_integer(r#"int("0b101")"#, 5);
    assert_integer(r#"int("0o17")"#, 15);
    assert_error(r#"int("abc")"#, "cannot parse \"abc\" to int: invalid syntax");
    assert_error(r#"int("")"#, "cannot parse \"\" to int: invalid syntax");
    assert_error("int([1])", "cannot cast ARRAY to INTEGER: incompatible types");
    assert_error("int(1, 2)", "wrong number of arguments, got=2, want=1");
}

#[test]
fn cast_bool() {
    assert_boolean("bool(true)", true);
    assert_boolean("bool(false)", false);
    assert_boolean("bool(0)", false);
    assert_boolean("bool(1)", true);
    assert_boolean("bool(-1)", true);
    assert_boolean(r#"bool("")"#, true);
    assert_boolean(r#"bool("x")"#, true);
    assert_boolean("bool([])", true);
    assert_boolean("bool({}[\"missing\"])", false);
}

#[test]
fn int_of_string_round_trips() {
    for n in [-9999, -5, -1, 0, 1, 7, 42, 9999, i64::MAX, i64::MIN] {
        let input = format!("int(string({n}))");
        match run(&input) {
            Object::Integer(value) => assert_eq!(value, n, "input: {input}"),
            other => panic!("expected integer for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn bool_coercion_is_idempotent() {
    for value in ["0", "1", "true", "false", "\"\"", "[1]", "{}[\"x\"]"] {
        let once = run(&format!("bool({value})"));
        let twice = run(&format!("bool(bool({value}))"));
        assert_eq!(once, twice, "value: {value}");
    }
}

#[test]
fn empty_program_evaluates_to_null() {
    assert_null("");
}
