use crate::sheet::{format::format_display, result::LineResult};

/// Renders a document with its results as plain text.
///
/// Every line with a numeric result becomes `"{line} = {formatted}"`, the line
/// right-trimmed first. Every other line is copied unchanged, so the output
/// has exactly as many lines as the input.
///
/// # Example
/// ```
/// use calcpad::sheet::{driver::evaluate_document, export::export_document};
///
/// let document = "# budget\nrent = 1200  \n* 12";
/// let results = evaluate_document(document);
///
/// assert_eq!(export_document(document, &results),
///            "# budget\nrent = 1200 = 1,200\n* 12 = 14,400");
/// ```
#[must_use]
pub fn export_document(document: &str, results: &[LineResult]) -> String {
    document.split('\n')
            .enumerate()
            .map(|(index, line)| match results.get(index) {
                Some(LineResult::Display { raw, .. }) => {
                    format!("{} = {}", line.trim_end(), format_display(raw))
                },
                _ => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
}
