#![cfg_attr(not(test), no_std)]

use va_iter::*;

pub const FIELDS: usize = narg!(name, last_name, birthdate);
pub const HAS_FIELDS: u8 = not_empty!(name, last_name, birthdate);

const _: () = assert!(FIELDS == 3);
const _: () = assert!(HAS_FIELDS == 1);
const _: () = assert!(is_empty!() == 1);
const _: () = assert!(not!(narg!()) == 1);
const _: () = assert!(not!(FIELDS) == 0);

/// Sum of the fields of a triple, generated without any allocation.
pub fn weighted_sum(values: (u32, u32, u32)) -> u32 {
    let mut sum = 0;
    macro_rules! add {
        ($weight:expr, $idx:tt) => { sum += values.$idx * $weight; };
    }
    each_idx!(add, 1, 10, 100);
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_without_std() {
        assert_eq!(weighted_sum((1, 2, 3)), 321);
        let mut chars = ['-'; 3];
        macro_rules! cache_char_at_idx {
            ($c:expr, $idx:tt) => { chars[$idx] = $c; };
        }
        each_idx!(cache_char_at_idx, 'a', 'b', 'c');
        assert_eq!(chars, ['a', 'b', 'c']);
    }
}
