use tracing::debug;

/// Returns `true` if `c` ends an expression in a batch.
const fn is_separator(c: char) -> bool {
    matches!(c, ',' | ';')
}

/// Groups whitespace-separated input fragments into independent expressions.
///
/// Every fragment is split on whitespace and the pieces are joined with
/// single spaces, so `"5&3, 6|2"` and `["5&3,", "6|2"]` are the same batch. A
/// piece ending in `,` or `;` closes the current expression (the delimiter
/// itself is dropped); whatever remains after the last piece is always
/// emitted. Expressions that are blank after trimming are skipped.
///
/// ## Example
/// ```
/// use bitexpr::interpreter::batch::split_batch;
///
/// assert_eq!(split_batch(["5&3,", "6|2"]), ["5&3", "6|2"]);
/// assert_eq!(split_batch(["5", "&", "3;", "~0"]), ["5 & 3", "~0"]);
/// assert_eq!(split_batch(["5&3, 6|2"]), ["5&3", "6|2"]);
/// ```
pub fn split_batch<I, S>(fragments: I) -> Vec<String>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    let mut expressions = Vec::new();
    let mut buffer = String::new();

    let mut flush = |buffer: &mut String| {
        let expression = buffer.trim();
        if !expression.is_empty() {
            expressions.push(expression.to_string());
        }
        buffer.clear();
    };

    for fragment in fragments {
        for piece in fragment.as_ref().split_whitespace() {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            match piece.strip_suffix(is_separator) {
                Some(head) => {
                    buffer.push_str(head);
                    flush(&mut buffer);
                },
                None => buffer.push_str(piece),
            }
        }
    }
    flush(&mut buffer);

    debug!(count = expressions.len(), "split batch");
    expressions
}
