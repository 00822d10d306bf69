use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

/// Name of the externally defined function under test.
pub const FUNCTION_NAME: &str = "myfunc";

/// C++ translation unit that prints `myfunc(s, t)`.
///
/// Arguments are kept as `f64` until rendering, so only well formed double literals
/// ever reach the generated text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverSource {
    s: f64,
    t: f64,
}

impl DriverSource {
    pub fn new(s: f64, t: f64) -> Self {
        Self { s, t }
    }

    fn needs_limits(&self) -> bool {
        !self.s.is_finite() || !self.t.is_finite()
    }

    /// Write translation unit into a file, truncate file if it already exists.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl Display for DriverSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "#include <iostream>")?;
        if self.needs_limits() {
            writeln!(f, "#include <limits>")?;
        }
        writeln!(f, "extern \"C\" {{")?;
        writeln!(f, "  double {FUNCTION_NAME}(double, double);")?;
        writeln!(f, "}}")?;
        writeln!(f, "int main() {{")?;
        writeln!(
            f,
            "  std::cout << {FUNCTION_NAME}({}, {}) << std::endl;",
            DoubleLiteral(self.s),
            DoubleLiteral(self.t)
        )?;
        writeln!(f, "  return 0;")?;
        writeln!(f, "}}")
    }
}

/// Render `f64` as a C++ expression of type `double`.
pub struct DoubleLiteral(pub f64);

impl Display for DoubleLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("std::numeric_limits<double>::quiet_NaN()");
        }
        if v.is_infinite() {
            return if v.is_sign_negative() {
                f.write_str("(-std::numeric_limits<double>::infinity())")
            } else {
                f.write_str("std::numeric_limits<double>::infinity()")
            };
        }

        // debug representation is the shortest round-trip form and always carries
        // a '.' or an exponent, so C++ parses it as a double
        if v.is_sign_negative() {
            write!(f, "({v:?})")
        } else {
            write!(f, "{v:?}")
        }
    }
}
