//! Fixtures shared by the scenario tests in `tests/`.

/// Records every value it is given, in call order.
#[derive(Debug, Default)]
pub struct Accumulator {
    pub values: Vec<i32>,
    pub sum: i64,
}

impl Accumulator {
    pub fn accumulate(&mut self, next: i32) {
        self.values.push(next);
        self.sum += i64::from(next);
    }

    pub fn calls(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStruct(pub u16, pub u16, pub u16);

#[derive(Debug)]
pub struct Outer {
    pub inner: TestStruct,
}
