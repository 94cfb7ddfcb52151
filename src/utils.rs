use std::fmt::Write;
use std::time::Instant;

///
/// Render a matrix with fixed-width and fixed-precision columns,
/// one line per row.
///
pub fn pretty_matrix<R: AsRef<[f64]>>(rows: &[R], width: usize, precision: usize) -> String {
    let mut s = String::new();
    for row in rows {
        for x in row.as_ref() {
            // writing into a String never fails
            let _ = write!(s, "{:>width$.precision$}", x, width = width, precision = precision);
        }
        s.push('\n');
    }
    s
}

///
/// measure time in milli-seconds (ms) of closure.
///
pub fn timer<F, T>(f: F) -> (T, u128)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let ret = f();
    let duration = start.elapsed();
    (ret, duration.as_millis())
}

///
/// get dhmm/resources directory
///
pub fn resource_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

//
// tests
//
