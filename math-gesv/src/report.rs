//! Text output in the format of the LAPACKE examples.

use std::io::{self, Write};

/// Print an `m x n` column-major matrix with leading dimension `ldm`.
pub fn print_matrix_colmajor<W: Write>(
    out: &mut W,
    desc: &str,
    m: usize,
    n: usize,
    mat: &[f64],
    ldm: usize,
) -> io::Result<()> {
    writeln!(out, "\n {desc}")?;
    for i in 0..m {
        for j in 0..n {
            write!(out, " {:6.2}", mat[i + j * ldm])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print an integer vector on one line.
pub fn print_vector<W: Write>(out: &mut W, desc: &str, vec: &[i32]) -> io::Result<()> {
    writeln!(out, "\n {desc}")?;
    for v in vec {
        write!(out, " {v:6}")?;
    }
    writeln!(out)
}

/// The message printed when the backend reports `U(index, index) == 0`.
pub fn print_singular<W: Write>(out: &mut W, index: usize) -> io::Result<()> {
    writeln!(out, "The diagonal element of the triangular factor of A,")?;
    writeln!(out, "U({index},{index}) is zero, so that A is singular;")?;
    writeln!(out, "the solution could not be computed.")
}

/// The notice printed when a buffer cannot be allocated.
pub fn print_allocation_failure<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "error of memory allocation")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_matrix_colmajor() {
        let mat = [1.0, -2.5, 0.25, 3.0];
        let text = render(|out| print_matrix_colmajor(out, "Solution", 2, 2, &mat, 2));
        assert_eq!(text, "\n Solution\n   1.00   0.25\n  -2.50   3.00\n");
    }

    #[test]
    fn test_print_vector() {
        let text = render(|out| print_vector(out, "Pivot indices", &[2, 2, 3]));
        assert_eq!(text, "\n Pivot indices\n      2      2      3\n");
    }

    #[test]
    fn test_print_singular() {
        let text = render(|out| print_singular(out, 4));
        assert_eq!(
            text,
            "The diagonal element of the triangular factor of A,\n\
             U(4,4) is zero, so that A is singular;\n\
             the solution could not be computed.\n"
        );
    }
}
