use crate::utils::error::Result;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::io::Write;

/// 費氏數列：回傳 `b`，再把 `(a, b)` 換成 `(b, a + b)`
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    // 下一步會溢位時為 None
    values: Option<(u64, u64)>,
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self {
            values: Some((0, 1)),
        }
    }
}

impl FibonacciSequence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for FibonacciSequence {
    type Item = u64;

    // 先回傳目前的值，下一個值溢位時才結束
    fn next(&mut self) -> Option<u64> {
        let (a, b) = self.values?;
        self.values = a.checked_add(b).map(|next| (b, next));
        Some(b)
    }
}

pub const RANDOM_UPPER_BOUND: u32 = 200;
const RANDOM_START_COUNT: u32 = 10;

/// 有限長度的隨機數列
///
/// 計數從 10 開始，每次先遞減再判斷，所以只會產生 9 個值。
#[derive(Debug, Clone)]
pub struct RandomGenerator<R: Rng = ThreadRng> {
    count: u32,
    rng: R,
}

impl RandomGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RandomGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            count: RANDOM_START_COUNT,
            rng,
        }
    }
}

impl<R: Rng> Iterator for RandomGenerator<R> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            return None;
        }
        Some(self.rng.random_range(0..RANDOM_UPPER_BOUND))
    }
}

pub fn fibonacci_demo(out: &mut dyn Write) -> Result<()> {
    for value in FibonacciSequence::new().take(10) {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

pub fn random_demo(out: &mut dyn Write, seed: Option<u64>) -> Result<()> {
    match seed {
        Some(seed) => write_random(out, RandomGenerator::seeded(seed)),
        None => write_random(out, RandomGenerator::new()),
    }
}

fn write_random<R: Rng>(out: &mut dyn Write, generator: RandomGenerator<R>) -> Result<()> {
    for value in generator {
        writeln!(out, "Random: {}", value)?;
    }
    Ok(())
}
