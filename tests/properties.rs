use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigsys::{
    Operation, OperationEngine, SampledSequence, Signal, SignalKind, SignalParams, TimeGrid,
    Waveform, apply, generate,
};

const SEED: u64 = 0x5157_5e75;

fn random_grid(rng: &mut StdRng) -> TimeGrid {
    let start = rng.gen_range(-2.0..2.0);
    let stop = start + rng.gen_range(0.1..3.0);
    let count = rng.gen_range(2..800);
    TimeGrid::linspace(start, stop, count).unwrap()
}

fn random_sequence(rng: &mut StdRng, len: usize) -> SampledSequence {
    (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

#[test]
fn test_generated_length_matches_grid() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..50 {
        let grid = random_grid(&mut rng);
        for kind in SignalKind::ALL {
            assert_eq!(generate(kind, &grid, SignalParams::default()).len(), grid.len());
        }
    }
}

#[test]
fn test_ramp_equals_grid() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..20 {
        let grid = random_grid(&mut rng);
        let ramp = generate(SignalKind::Ramp, &grid, SignalParams::default());
        assert_eq!(ramp.as_slice(), grid.instants());
    }
}

#[test]
fn test_square_is_three_valued() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..20 {
        let grid = random_grid(&mut rng);
        let square = generate(SignalKind::Square, &grid, SignalParams::default());
        assert!(square.iter().all(|x| x == -1.0 || x == 0.0 || x == 1.0));
    }
}

#[test]
fn test_square_is_zero_exactly_where_sine_is_zero() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut grids: Vec<TimeGrid> = (0..20).map(|_| random_grid(&mut rng)).collect();
    // Grids that hit sin(0) exactly
    grids.push(TimeGrid::default());
    grids.push(TimeGrid::linspace(-1.0, 1.0, 21).unwrap());

    for grid in &grids {
        let square = generate(SignalKind::Square, grid, SignalParams::default());
        for (x, t) in square.iter().zip(grid.iter()) {
            let sine = (2.0 * std::f64::consts::PI * 5.0 * t).sin();
            assert_eq!(x == 0.0, sine == 0.0, "t = {}", t);
            if sine != 0.0 {
                assert_eq!(x, sine.signum());
            }
        }
    }
}

#[test]
fn test_impulse_has_one_unit_sample() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..20 {
        let grid = random_grid(&mut rng);
        let impulse = generate(SignalKind::Impulse, &grid, SignalParams::default());
        assert_eq!(impulse.iter().filter(|&x| x != 0.0).count(), 1);
        assert_eq!(impulse[grid.len() / 2], 1.0);
    }
}

#[test]
fn test_unit_gain_is_identity() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let grid = random_grid(&mut rng);
    let x = random_sequence(&mut rng, grid.len());
    let out = apply(Operation::AmplitudeScaling { gain: 1.0 }, &grid, &x, None, None).unwrap();
    assert_eq!(out.result(), &x);
}

#[test]
fn test_gain_scales_every_sample() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10 {
        let grid = random_grid(&mut rng);
        let x = random_sequence(&mut rng, grid.len());
        let gain = rng.gen_range(-5.0..5.0);
        let out = apply(Operation::AmplitudeScaling { gain }, &grid, &x, None, None).unwrap();
        for (y, x) in out.result().iter().zip(x.iter()) {
            assert_eq!(y, gain * x);
        }
    }
}

#[test]
fn test_reversal_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10 {
        let grid = random_grid(&mut rng);
        let x = random_sequence(&mut rng, grid.len());
        let once = apply(Operation::TimeReversal, &grid, &x, None, None)
            .unwrap()
            .into_result();
        let twice = apply(Operation::TimeReversal, &grid, &once, None, None)
            .unwrap()
            .into_result();
        assert_eq!(twice, x);
    }
}

#[test]
fn test_binary_operations_commute() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10 {
        let grid = random_grid(&mut rng);
        let a = random_sequence(&mut rng, grid.len());
        let b = random_sequence(&mut rng, grid.len());
        for op in [Operation::SignalAddition, Operation::SignalMultiplication] {
            let ab = apply(op, &grid, &a, Some(&b), None).unwrap();
            let ba = apply(op, &grid, &b, Some(&a), None).unwrap();
            assert_eq!(ab.result(), ba.result());
        }
    }
}

#[test]
fn test_identity_warps_with_interpolation() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10 {
        let grid = random_grid(&mut rng);
        let x = random_sequence(&mut rng, grid.len());
        for op in [
            Operation::TimeScaling { factor: 1.0 },
            Operation::TimeShifting { shift: 0.0 },
        ] {
            let out = apply(op, &grid, &x, None, None).unwrap();
            for (y, x) in out.result().iter().zip(x.iter()) {
                assert!((y - x).abs() < 1e-9, "{} changed {} to {}", op, x, y);
            }
        }
    }
}

#[test]
fn test_identity_warps_on_closed_form_are_exact() {
    let grid = TimeGrid::default();
    let sine = Signal::reference(SignalKind::Sine);
    let samples = sine.sample(&grid);
    for op in [
        Operation::TimeScaling { factor: 1.0 },
        Operation::TimeShifting { shift: 0.0 },
    ] {
        let out = apply(op, &grid, &samples, None, Some(&sine)).unwrap();
        assert_eq!(out.result(), &samples);
    }
}

#[test]
fn test_shift_past_the_grid_zero_fills() {
    let grid = TimeGrid::default();
    for kind in [SignalKind::Square, SignalKind::Ramp, SignalKind::Step] {
        let x = generate(kind, &grid, SignalParams::default());
        let out = apply(Operation::TimeShifting { shift: 2.0 }, &grid, &x, None, None).unwrap();
        assert!(out.result().iter().all(|y| y == 0.0));
    }
}

#[test]
fn test_nearest_mode_only_returns_existing_samples() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let engine = OperationEngine::new().with_interpolation(sigsys::InterpolationMode::Nearest);
    for _ in 0..10 {
        let grid = random_grid(&mut rng);
        let x = random_sequence(&mut rng, grid.len());
        let factor = rng.gen_range(0.1..2.0);
        let out = engine
            .apply(Operation::TimeScaling { factor }, &grid, &x, None, None)
            .unwrap();
        assert!(
            out.result()
                .iter()
                .all(|y| y == 0.0 || x.as_slice().contains(&y))
        );
    }
}
