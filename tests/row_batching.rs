use anyhow::Result;
use quantum_tree::core::batch::{build_row, CHUNK_SIZE};
use quantum_tree::core::simulator::QuantumSimulator;

/// Honours the length contract; call `k` decorates every position with type `k % 4`.
struct Counting {
    calls: Vec<usize>,
}

impl Counting {
    fn new() -> Self { Self { calls: Vec::new() } }
}

impl QuantumSimulator for Counting {
    fn name(&self) -> &'static str { "counting" }

    fn run(&mut self, positions: usize) -> Result<String> {
        let kind = self.calls.len() % 4;
        self.calls.push(positions);
        let block = format!("1{}{}", (kind >> 1) & 1, kind & 1);
        Ok(block.repeat(positions))
    }
}

/// Returns twice as many bits as asked for.
struct Oversized;

impl QuantumSimulator for Oversized {
    fn name(&self) -> &'static str { "oversized" }

    fn run(&mut self, positions: usize) -> Result<String> {
        Ok("111".repeat(positions * 2))
    }
}

/// Returns one bit too few.
struct Undersized;

impl QuantumSimulator for Undersized {
    fn name(&self) -> &'static str { "undersized" }

    fn run(&mut self, positions: usize) -> Result<String> {
        Ok("1".repeat(positions * 3 - 1))
    }
}

#[test]
fn row_length_matches_width() {
    for width in 0..=23 {
        let mut sim = Counting::new();
        let row = build_row(width, &mut sim).unwrap();
        assert_eq!(row.presence.len(), width);
        assert_eq!(row.kinds.len(), width);
        assert_eq!(sim.calls.iter().sum::<usize>(), width);
        assert!(sim.calls.iter().all(|&n| (1..=CHUNK_SIZE).contains(&n)));
    }
}

#[test]
fn width_seven_is_five_then_two() {
    let mut sim = Counting::new();
    let row = build_row(7, &mut sim).unwrap();
    assert_eq!(sim.calls, vec![5, 2]);
    assert_eq!(row.presence, vec![1; 7]);
    // chunk order is preserved
    assert_eq!(row.kinds, vec![0, 0, 0, 0, 0, 1, 1]);
}

#[test]
fn chunks_concatenate_in_column_order() {
    let mut sim = Counting::new();
    let row = build_row(17, &mut sim).unwrap();
    assert_eq!(sim.calls, vec![5, 5, 5, 2]);
    let expected: Vec<u8> = [0u8, 1, 2, 3]
        .iter()
        .zip([5usize, 5, 5, 2])
        .flat_map(|(&k, n)| std::iter::repeat(k).take(n))
        .collect();
    assert_eq!(row.kinds, expected);
}

#[test]
fn oversized_results_do_not_widen_the_row() {
    let row = build_row(6, &mut Oversized).unwrap();
    assert_eq!(row.len(), 6);
}

#[test]
fn undersized_results_abort_the_row() {
    let err = build_row(3, &mut Undersized).unwrap_err();
    assert!(format!("{err:#}").contains("Short binary result"), "{err:#}");
}
