use std::io::{self, Write};

use sm_matrix::Matrix;

/// Print the main diagonal of `m`, one entry per line, in index order.
pub fn write_diagonal<W: Write>(out: &mut W, m: &Matrix) -> io::Result<()> {
    for v in m.diagonal() {
        writeln!(out, "{}", v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_output() {
        let m = Matrix::new(vec![19, 22, 43, 50], 2).unwrap();
        let mut out = Vec::new();
        write_diagonal(&mut out, &m).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "19\n50\n");
    }
}
