use std::time::{Duration, Instant};

use calcpad::{
    LineResult, Notation, evaluate_document, evaluate_document_with, export_document,
    format_display,
};
use pretty_assertions::assert_eq;

/// Shorthand for the expected result of a line: `Some(raw)` for a numeric
/// result, `None` for a blank one.
fn raws(document: &str) -> Vec<Option<String>> {
    evaluate_document(document).iter()
                               .map(|result| {
                                   assert!(!result.is_error(),
                                           "unexpected error in document:\n{document}");
                                   result.raw().map(str::to_string)
                               })
                               .collect()
}

fn display(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

#[test]
fn chaining_applies_to_previous_result() {
    assert_eq!(raws("1 + 2\n* 3"), vec![display("3"), display("9")]);
    assert_eq!(raws("-5\n* 2\n- 3\n/ 13"),
               vec![display("-5"), display("-10"), display("-13"), display("-1")]);
}

#[test]
fn chaining_without_previous_answer_is_an_error() {
    assert_eq!(evaluate_document("* 3"), vec![LineResult::Error]);
}

#[test]
fn chaining_uses_scientific_raw_string() {
    assert_eq!(raws("1e21\n* 2"), vec![display("1e+21"), display("2e+21")]);
}

#[test]
fn percentages() {
    assert_eq!(raws("200 * 50%"), vec![display("100")]);
    assert_eq!(raws("100\n* 80%"), vec![display("100"), display("80")]);
    assert_eq!(raws("12.5% * 8"), vec![display("1")]);
}

#[test]
fn non_ascii_variables() {
    let results = raws("房租 = 3500\n水电 = 200\n房租 + 水电");
    assert_eq!(results[2], display("3700"));

    assert_eq!(raws("价格 = 80\n* 50%\n价格"),
               vec![display("80"), display("40"), display("80")]);
}

#[test]
fn prose_is_blank() {
    assert_eq!(evaluate_document("abc"), vec![LineResult::Blank]);
    assert_eq!(raws("groceries for the week\n12 * 3"), vec![None, display("36")]);
}

#[test]
fn known_variable_alone_on_a_line_is_evaluated() {
    assert_eq!(raws("rent = 1200\nrent"), vec![display("1200"), display("1200")]);
}

#[test]
fn comments_separators_and_empty_lines() {
    assert_eq!(raws("# title\n-----\n\n===\n7"),
               vec![None, None, None, None, display("7")]);
}

#[test]
fn ans_is_most_recent_result() {
    assert_eq!(raws("10\nans * 2\nans + 1"),
               vec![display("10"), display("20"), display("21")]);
}

#[test]
fn ans_before_any_result_is_an_error() {
    assert_eq!(evaluate_document("1 / 0\nans"), vec![LineResult::Error, LineResult::Error]);
}

#[test]
fn errors_do_not_clear_previous_answer() {
    let results = evaluate_document("10\n1 / 0\nans + 1\n+ 1");

    assert_eq!(results[0].raw(), Some("10"));
    assert_eq!(results[1], LineResult::Error);
    assert_eq!(results[2].raw(), Some("11"));
    assert_eq!(results[3].raw(), Some("12"));
}

#[test]
fn skipped_lines_keep_previous_answer() {
    assert_eq!(raws("10\nsome notes\n# c\n---\n* 2\nans"),
               vec![display("10"), None, None, None, display("20"), display("20")]);
    assert_eq!(raws("7\n-\n***\n+ 1"), vec![display("7"), None, None, display("8")]);
}

#[test]
fn skipped_lines_leave_scope_untouched() {
    let results = evaluate_document("total = 5\ntotal\nnotes about total\ntotal * 2");

    assert_eq!(results[1].raw(), Some("5"));
    assert_eq!(results[2], LineResult::Blank);
    assert_eq!(results[3].raw(), Some("10"));
}

#[test]
fn booleans_are_blank_and_keep_previous_answer() {
    assert_eq!(raws("4\n3 > 2\n* 2"), vec![display("4"), None, display("8")]);
}

#[test]
fn one_result_per_line() {
    let document = "1\n\n# c\nfoo\n2 +\n";
    let results = evaluate_document(document);

    assert_eq!(results.len(), document.split('\n').count());
    assert_eq!(results[5], LineResult::Blank);
    assert_eq!(results[4], LineResult::Error);
}

#[test]
fn each_pass_starts_fresh() {
    assert_eq!(raws("x = 1"), vec![display("1")]);
    assert_eq!(evaluate_document("x"), vec![LineResult::Blank]);
    assert_eq!(evaluate_document("x + 1"), vec![LineResult::Error]);
}

#[test]
fn lines_are_trimmed() {
    assert_eq!(raws("   2 * 4   \n\t+ 1"), vec![display("8"), display("9")]);
}

#[test]
fn approximation() {
    let results = evaluate_document("1/4\n1e400\nInfinity");

    assert_eq!(results[0].approx(), Some(0.25));
    assert_eq!(results[1].raw(), Some("1e+400"));
    assert_eq!(results[1].approx(), Some(0.0));
    assert_eq!(results[2].approx(), Some(f64::INFINITY));
}

#[test]
fn custom_precision() {
    let results = evaluate_document_with("pi\n2/3", &Notation::with_precision(3));

    assert_eq!(results[0].raw(), Some("3.14"));
    assert_eq!(results[1].raw(), Some("0.667"));
}

#[test]
fn display_formatting() {
    assert_eq!(format_display("1234567.00"), "1,234,567");
    assert_eq!(format_display("1234.5"), "1,234.5");
    assert_eq!(format_display("-1234567"), "-1,234,567");
    assert_eq!(format_display("1.23456789012e+20"), "1.23456789012e+20");
    assert_eq!(format_display("0.5"), "0.5");
}

#[test]
fn export_annotates_result_lines() {
    let document = "# rent\n房租 = 3500  \n水电 = 200\n房租 + 水电\n\nnotes\n1/0";
    let results = evaluate_document(document);

    assert_eq!(export_document(document, &results),
               "# rent\n房租 = 3500 = 3,500\n水电 = 200 = 200\n房租 + 水电 = 3,700\n\nnotes\n1/0");
}

#[test]
fn distant_exponents_evaluate_promptly() {
    let document = "1e99999999 + 1\nceil(1e99999999)\n1 + 1e-99999999\nfloor(-1e-99999999)\n\
                    round(1e-99999999, 3)\n1e99999999 % 7\n1e-99999999 % 7";
    let start = Instant::now();
    let results = evaluate_document(document);
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_secs(2), "document took {elapsed:?}");
    assert_eq!(results[0].raw(), Some("1e+99999999"));
    assert_eq!(results[1].raw(), Some("1e+99999999"));
    assert_eq!(results[2].raw(), Some("1"));
    assert_eq!(results[3].raw(), Some("-1"));
    assert_eq!(results[4].raw(), Some("0"));
    assert_eq!(results[5], LineResult::Error);
    assert_eq!(results[6].raw(), Some("1e-99999999"));
}
