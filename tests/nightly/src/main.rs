// === Rust Nightly Test ===
// On nightly the redundant parentheses below are reported as a compiler warning.

use va_iter::narg;
use va_iter::par_each_idx;

struct Position(i32, i32, i32);

fn main() {
    let position = Position(1, 2, 3);
    let mut total = 0;
    macro_rules! add_scaled {
        ($base:ident, $factor:expr, $idx:tt) => { total += $base.$idx * $factor; };
    }
    par_each_idx!(add_scaled, (position), 10, 20, 30);
    assert_eq!(total, 140);
    assert_eq!(narg!(x, y, z), 3);
}
