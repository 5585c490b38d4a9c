use va_iter::each_idx;
use va_iter::narg;
use va_iter::par_each_idx;

struct User<'a>(&'a str, &'a str, &'a str);

macro_rules! accessor {
    ($name:ident, $idx:tt) => {
        pub fn $name(&self) -> &str {
            self.$idx
        }
    };
}

impl User<'_> {
    each_idx!(accessor, name, last_name, birthdate);
}

const FIELD_COUNT: usize = narg!(name, last_name, birthdate);

/// Names of the fields in which two users differ.
fn differences(user: &User, other: &User) -> Vec<&'static str> {
    let mut diff = Vec::with_capacity(FIELD_COUNT);
    macro_rules! compare {
        ($left:ident, $right:ident, $field:ident, $idx:tt) => {
            if $left.$field() != $right.$field() {
                diff.push(stringify!($field));
            }
        };
    }
    par_each_idx!(compare, (user, other), name, last_name, birthdate);
    diff
}

fn main() {
    let user = User("Ada", "Lovelace", "1815-12-10");
    let other = User("Ada", "Byron", "1815-12-10");
    println!("{} {} ({}) has {FIELD_COUNT} fields.", user.name(), user.last_name(), user.birthdate());
    println!("Differences: {:?}", differences(&user, &other));
}
