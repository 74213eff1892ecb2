use crate::errors::{LabelingError, Result};


/// Vertex count, row-major matrix and optional source as typed at the console
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub rows: Vec<Vec<i64>>,
    pub source: Option<usize>,
}

/// Parse whitespace-separated integers in prompt order:
/// vertex count n, then n * n matrix entries, then the source vertex when `needs_source`.
/// Trailing tokens are ignored.
pub fn parse_problem(text: &str, needs_source: bool) -> Result<Problem> {
    let mut tokens = text.split_whitespace();

    let n: usize = next_number(&mut tokens, "vertex count")?;
    if n == 0 {
        return Err(LabelingError::EmptyGraph);
    }

    // n is untrusted until the entries are actually there, so no preallocation
    let mut rows = Vec::new();
    for i in 0..n {
        let mut row = Vec::new();
        for j in 0..n {
            row.push(next_number(&mut tokens, &format!("matrix entry ({i}, {j})"))?);
        }
        rows.push(row);
    }

    let source = if needs_source {
        Some(next_number(&mut tokens, "source vertex")?)
    } else {
        None
    };

    Ok(Problem { rows, source })
}

fn next_number<'a, T, I>(tokens: &mut I, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| LabelingError::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| LabelingError::Parse(format!("{what}: expected an integer, found {token:?}")))
}
