use std::io::{self, Write};

const SEPARATOR: &str = "  ";

/// Lays `names` out in `columns` columns, filled column-major.
///
/// The names are split into `columns` consecutive chunks; the first
/// `len % columns` chunks carry one extra item. Rows are then read across
/// the chunks, each column padded to its own widest entry. Columns that
/// run out early leave a blank cell. Trailing whitespace is trimmed from
/// every row.
pub fn columnize<S: AsRef<str>>(names: &[S], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let (per_column, dangling) = (names.len() / columns, names.len() % columns);

    let mut chunks: Vec<&[S]> = Vec::with_capacity(columns);
    let mut rest = names;
    for i in 0..columns {
        let take = per_column + usize::from(dangling > i);
        let (chunk, tail) = rest.split_at(take);
        chunks.push(chunk);
        rest = tail;
    }
    chunks.retain(|chunk| !chunk.is_empty());

    let widths: Vec<usize> = chunks
        .iter()
        .map(|chunk| chunk.iter().map(|s| display_width(s.as_ref())).max().unwrap_or(0))
        .collect();
    let rows = chunks.first().map_or(0, |chunk| chunk.len());

    (0..rows)
        .map(|row| {
            let cells: Vec<String> = chunks
                .iter()
                .zip(&widths)
                .map(|(chunk, &width)| {
                    let name = chunk.get(row).map_or("", |s| s.as_ref());
                    let pad = width.saturating_sub(display_width(name));
                    format!("{}{}", name, " ".repeat(pad))
                })
                .collect();
            cells.join(SEPARATOR).trim_end().to_string()
        })
        .collect()
}

pub fn write_columns<S: AsRef<str>>(
    out: &mut dyn Write,
    names: &[S],
    columns: usize,
) -> io::Result<()> {
    for row in columnize(names, columns) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{}", i)).collect()
    }

    #[test]
    fn test_empty_input_prints_nothing() {
        let empty: Vec<String> = Vec::new();
        assert!(columnize(&empty, 5).is_empty());
    }

    #[test]
    fn test_column_major_fill_with_dangling() {
        // 7 names over 3 columns: chunks of 3, 2, 2
        let rows = columnize(&names(7), 3);
        assert_eq!(rows, vec!["f0  f3  f5", "f1  f4  f6", "f2"]);
    }

    #[test]
    fn test_fewer_names_than_columns() {
        let rows = columnize(&["a", "bb"], 5);
        assert_eq!(rows, vec!["a  bb"]);
    }

    #[test]
    fn test_columns_padded_independently() {
        let rows = columnize(&["a", "long_name", "b", "c"], 2);
        assert_eq!(rows, vec!["a          b", "long_name  c"]);
    }

    #[test]
    fn test_short_trailing_columns_leave_blank_cells() {
        // 5 names over 3 columns: chunks of 2, 2, 1
        let rows = columnize(&["aa", "bb", "cc", "dd", "ee"], 3);
        assert_eq!(rows, vec!["aa  cc  ee", "bb  dd"]);

        let rows = columnize(&["a", "b", "c", "dddd", "e", "f", "g"], 2);
        assert_eq!(rows, vec!["a     e", "b     f", "c     g", "dddd"]);
    }

    #[test]
    fn test_row_count_and_every_name_once() {
        for n in 0..40 {
            for c in 1..8 {
                let input = names(n);
                let rows = columnize(&input, c);
                assert_eq!(rows.len(), n.div_ceil(c), "n={} c={}", n, c);

                let mut seen: Vec<String> = rows
                    .iter()
                    .flat_map(|row| row.split_whitespace().map(String::from))
                    .collect();
                seen.sort();
                let mut expected = input.clone();
                expected.sort();
                assert_eq!(seen, expected, "n={} c={}", n, c);
            }
        }
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        assert_eq!(columnize(&["a", "b"], 0), vec!["a", "b"]);
    }

    #[test]
    fn test_write_columns() {
        let mut out = Vec::new();
        write_columns(&mut out, &["x", "y"], 5).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x  y\n");
    }
}
