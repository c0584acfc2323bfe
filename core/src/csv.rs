use crate::matrix::Matrix;
use std::fmt::Display;

/// Render a matrix as comma separated text.
///
/// The header is `Term,<title>...` and each following line is
/// `<term>,<value>...`. Lines are joined with `\n` without a trailing newline.
/// Nothing is quoted, so titles or terms containing commas will shift columns.
pub fn to_csv<T, S, U>(matrix: &Matrix<T>, document_titles: &[S], terms: &[U]) -> String
where
    T: Display,
    S: AsRef<str>,
    U: AsRef<str>,
{
    let mut lines = Vec::with_capacity(matrix.num_rows() + 1);
    lines.push(
        std::iter::once("Term")
            .chain(document_titles.iter().map(|t| t.as_ref()))
            .collect::<Vec<_>>()
            .join(","),
    );
    for (term, row) in terms.iter().zip(matrix.rows()) {
        let mut fields = Vec::with_capacity(row.len() + 1);
        fields.push(term.as_ref().to_string());
        fields.extend(row.iter().map(|v| v.to_string()));
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

/// Two-column `Term,Frequency` listing.
pub fn frequencies_csv<U: AsRef<str>>(terms: &[U], frequencies: &[u64]) -> String {
    let mut lines = vec!["Term,Frequency".to_string()];
    lines.extend(terms.iter().zip(frequencies).map(|(t, f)| format!("{},{}", t.as_ref(), f)));
    lines.join("\n")
}
