#[cfg(feature = "qsharp")]
mod q {
    use std::path::Path;

    use quantum_tree::core::batch::build_row;
    use quantum_tree::core::simulator::QuantumSimulator;
    use quantum_tree::core::titan::qsharp_bridge::QSharpSimulator;

    fn demo_source() -> String {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("tree.qs");
        std::fs::read_to_string(path).expect("demos/tree.qs")
    }

    #[test]
    fn demo_source_returns_three_bits_per_position() {
        // evaluated once, then run for every size
        let mut sim = QSharpSimulator::new(&demo_source()).unwrap();
        for positions in 1..=5 {
            let bits = sim.run(positions).unwrap();
            assert_eq!(bits.len(), 3 * positions);
            assert!(bits.chars().all(|c| c == '0' || c == '1'), "{bits}");
        }
    }

    #[test]
    fn demo_source_fills_a_row() {
        let mut sim = QSharpSimulator::new(&demo_source()).unwrap();
        let row = build_row(7, &mut sim).unwrap();
        assert_eq!(row.len(), 7);
    }

    #[test]
    fn broken_source_fails_to_load() {
        assert!(QSharpSimulator::new("namespace Broken { operation }").is_err());
    }
}
