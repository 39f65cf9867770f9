use std::fs;
use std::path::Path;

use sm_matrix::Matrix;

use crate::error::{CliError, Result};

/// Read matrices A and B from a whitespace-separated token stream.
///
/// The first `n * n` tokens fill A in row-major order, the next `n * n`
/// fill B. Tokens may carry a fractional part, which is truncated
/// toward zero. Tokens beyond the required `2 * n * n` are ignored.
pub fn read_matrices(path: &Path, n: usize) -> Result<(Matrix, Matrix)> {
    let text = fs::read_to_string(path)?;
    parse_matrices(&text, n)
}

/// Token parsing, split out from the file read so tests can feed
/// strings directly.
pub fn parse_matrices(text: &str, n: usize) -> Result<(Matrix, Matrix)> {
    let needed = 2 * n * n;
    let mut values = Vec::with_capacity(needed);
    for token in text.split_whitespace() {
        if values.len() == needed {
            break;
        }
        let v: f64 = token
            .parse()
            .map_err(|_| CliError::BadToken(token.to_string()))?;
        values.push(v.trunc() as i64);
    }
    if values.len() < needed {
        return Err(CliError::NotEnoughTokens {
            expected: needed,
            got: values.len(),
        });
    }
    let b = Matrix::new(values.split_off(n * n), n)?;
    let a = Matrix::new(values, n)?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_two_by_two() {
        let (a, b) = parse_matrices("1 2 3 4 5 6 7 8", 2).unwrap();
        assert_eq!(a.data(), &[1, 2, 3, 4]);
        assert_eq!(b.data(), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_one_token_per_line() {
        let (a, b) = parse_matrices("1\n2\n3\n4\n", 1).unwrap();
        assert_eq!(a.data(), &[1]);
        assert_eq!(b.data(), &[2]);
    }

    #[test]
    fn test_truncates_decimals() {
        let (a, b) = parse_matrices("1.9 -2.7", 1).unwrap();
        assert_eq!(a.data(), &[1]);
        assert_eq!(b.data(), &[-2]);
    }

    #[test]
    fn test_surplus_tokens_ignored() {
        let (a, b) = parse_matrices("1 2 3 4 99 98", 1).unwrap();
        assert_eq!(a.data(), &[1]);
        assert_eq!(b.data(), &[2]);
    }

    #[test]
    fn test_not_enough_tokens() {
        assert!(matches!(
            parse_matrices("1 2 3", 2),
            Err(CliError::NotEnoughTokens {
                expected: 8,
                got: 3
            })
        ));
    }

    #[test]
    fn test_bad_token() {
        assert!(matches!(
            parse_matrices("1 x", 1),
            Err(CliError::BadToken(t)) if t == "x"
        ));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2\n3 4\n5 6\n7 8").unwrap();
        let (a, b) = read_matrices(file.path(), 2).unwrap();
        assert_eq!(a.data(), &[1, 2, 3, 4]);
        assert_eq!(b.data(), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_matrices(Path::new("/nonexistent/input.txt"), 2),
            Err(CliError::Io(_))
        ));
    }
}
