
use std::fs;

use pretty_assertions::assert_eq;

use super::{run_source, Interpreter, ScriptErrorKind};

fn fixture_test(test_name: &str) {
    let tests_dir = format!("{}/src/interpreter/tests", env!("CARGO_MANIFEST_DIR"));
    let program_path = format!("{}/test_programs/{}.scope", tests_dir, test_name);
    let fixture_folder = format!("{}/fixtures/{}", tests_dir, test_name);

    let output_path_expected = format!("{}/{}.output.expected", fixture_folder, test_name);
    let err_path_expected = format!("{}/{}.error.expected", fixture_folder, test_name);

    let source = fs::read_to_string(&program_path).unwrap();
    let mut interpreter = Interpreter::new(&source);
    interpreter.save_output();

    let err_actual = match interpreter.run() {
        Ok(()) => String::new(),
        Err(err) => err.render(&source),
    };
    let output_actual = interpreter.take_saved_output().unwrap();

    let expected_actual_pairs = [
        (&err_path_expected, err_actual),
        (&output_path_expected, output_actual),
    ];

    if std::env::var("OVERWRITE_FIXTURES").is_ok() {
        fs::create_dir_all(&fixture_folder).unwrap();

        for (expected_path, actual) in expected_actual_pairs.iter() {
            fs::write(expected_path, actual).unwrap();
        }
    }

    for (expected_path, actual) in expected_actual_pairs.iter() {
        let expected = fs::read_to_string(expected_path).unwrap_or_default();

        assert_eq!(&expected, actual);
    }
}

fn output(source: &str) -> Vec<String> {
    run_source(source).unwrap()
}

fn error_kind(source: &str) -> ScriptErrorKind {
    run_source(source).unwrap_err().kind
}

#[test]
fn integer_literals_print_back() {
    for n in ["0", "1", "-1", "42", "-9000", "9223372036854775807", "-9223372036854775808"] {
        let source = format!("x = {} print x", n);

        assert_eq!(output(&source), vec![n.to_string()]);
    }
}

#[test]
fn leading_zeros_are_normalized() {
    assert_eq!(output("x = 007 print x"), vec!["7"]);
}

#[test]
fn unwritten_variable_is_null() {
    assert_eq!(output("print nothing"), vec!["null"]);
}

#[test]
fn shadowing_restores_outer_value() {
    assert_eq!(output("x = 1 scope { x = 2 print x } print x"), vec!["2", "1"]);
}

#[test]
fn inner_scope_binding_is_dropped() {
    assert_eq!(output("scope { y = 5 } print y"), vec!["null"]);
}

#[test]
fn outer_variable_visible_in_inner_scope() {
    assert_eq!(output("x = 3 scope { scope { print x } }"), vec!["3"]);
}

#[test]
fn copy_is_by_value() {
    assert_eq!(output("x = 1 y = x x = 2 print y"), vec!["1"]);
}

#[test]
fn copy_from_unset_is_noop() {
    assert_eq!(output("y = z print y"), vec!["null"]);
    assert_eq!(output("y = 4 y = z print y"), vec!["4"]);
}

#[test]
fn overflowing_literal_is_a_variable_name() {
    let big = "9223372036854775808";
    let source = format!("x = {big} print x");

    assert_eq!(output(&source), vec!["null"]);
}

#[test]
fn plus_sign_is_a_variable_name() {
    assert_eq!(output("+1 = 8 x = +1 print x"), vec!["8"]);
}

#[test]
fn integer_looking_identifier() {
    assert_eq!(output("5 = 6 print 5"), vec!["6"]);
}

#[test]
fn empty_script() {
    assert_eq!(output(""), Vec::<String>::new());
    assert_eq!(output("  \n\t"), Vec::<String>::new());
}

#[test]
fn missing_closing_brace() {
    assert_eq!(error_kind("scope { x = 1"), ScriptErrorKind::UnterminatedScope);
    assert_eq!(error_kind("scope { scope { } "), ScriptErrorKind::UnterminatedScope);
}

#[test]
fn extra_closing_brace() {
    assert_eq!(error_kind("x = 1 }"), ScriptErrorKind::UnmatchedClosingBrace);
    assert_eq!(error_kind("scope { } }"), ScriptErrorKind::UnmatchedClosingBrace);
}

#[test]
fn scope_requires_brace() {
    assert_eq!(error_kind("scope x"), ScriptErrorKind::ExpectedOpeningBrace);
    assert_eq!(error_kind("scope }"), ScriptErrorKind::ExpectedOpeningBrace);
}

#[test]
fn assignment_requires_equal() {
    assert_eq!(error_kind("x 1"), ScriptErrorKind::UnrecognizedOperand);
    assert_eq!(error_kind("x == 1"), ScriptErrorKind::UnrecognizedOperand);
}

#[test]
fn end_of_input_mid_statement() {
    for source in ["print", "scope", "x", "x ="] {
        assert_eq!(error_kind(source), ScriptErrorKind::UnexpectedEndOfInput);
    }
}

#[test]
fn end_of_input_reported_before_unterminated_scope() {
    assert_eq!(error_kind("scope { print"), ScriptErrorKind::UnexpectedEndOfInput);
}

#[test]
fn error_stops_execution() {
    let mut interpreter = Interpreter::new("x = 1 print x y 2 print x");
    interpreter.save_output();

    let err = interpreter.run().unwrap_err();

    assert_eq!(err.kind, ScriptErrorKind::UnrecognizedOperand);
    assert_eq!(interpreter.take_saved_output().unwrap(), "1\n");
}
