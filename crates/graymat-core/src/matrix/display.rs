//! `Display` formatting for [`Matrix`].

use core::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "matrix([], 0x0)");
        }

        writeln!(f, "matrix([")?;
        for r in 0..self.height {
            write!(f, "  [")?;
            for c in 0..self.width {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r + c * self.height])?;
            }
            if r < self.height - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}
