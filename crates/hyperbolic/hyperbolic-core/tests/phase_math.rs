use approx::assert_abs_diff_eq;
use hyperbolic_core::{periodic_scalar, Config, PencilPhase, VertexScalars};

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

#[test]
fn line_scalars_are_bounded_and_periodic() {
    let cfg = Config::default();
    let phases = PencilPhase::new(&cfg);
    for frame in 0..2_000u64 {
        for i in 0..cfg.line_count {
            let b = phases.line(frame, i);
            assert!(b > -1.0 && b <= 1.0, "frame={frame} line={i} b={b}");
            assert_eq!(b, phases.line(frame + 750, i), "frame={frame} line={i}");
        }
    }
}

#[test]
fn frame_zero_spreads_lines_evenly() {
    let cfg = Config::default();
    let phases = PencilPhase::new(&cfg);
    let at_zero = sorted(phases.lines(0).collect());
    assert_eq!(at_zero.len(), 10);
    for (k, b) in at_zero.iter().enumerate() {
        assert_abs_diff_eq!(*b, -0.8 + 0.2 * k as f64, epsilon = 1e-12);
    }
    assert_eq!(at_zero.last().copied(), Some(1.0));

    // Half a period later line 0 sits on the point at infinity and the set of
    // values is the same, shifted by half a cycle.
    assert_eq!(phases.line(375, 0), 0.0);
    assert_eq!(phases.line(375, 5), 1.0);
    let at_half = sorted(phases.lines(375).collect());
    for (a, b) in at_zero.iter().zip(&at_half) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn lines_advance_by_one_step_per_frame() {
    let cfg = Config::default();
    let phases = PencilPhase::new(&cfg);
    // Away from the wrap each frame moves a scalar by 1 / half_period.
    assert_abs_diff_eq!(phases.line(11, 2) - phases.line(10, 2), 1.0 / 375.0, epsilon = 1e-12);
}

#[test]
fn vertex_scalars_use_corner_phases() {
    let cfg = Config::default();
    let s = VertexScalars::at(&cfg, 0.0, -10.0, 2.0);
    assert_eq!(s.a, periodic_scalar(0.0, 865.0, 750.0));
    assert_eq!(s.b, periodic_scalar(0.0, 422.0, 750.0));
    assert_abs_diff_eq!(s.a, (115.0 - 375.0) / 375.0, epsilon = 1e-12);
    assert!(!s.is_degenerate());

    // 260 + 865 = 1125 = 375 mod 750: the A scalar is exactly zero.
    let crossing = VertexScalars::at(&cfg, 260.0, -10.0, 2.0);
    assert_eq!(crossing.a, 0.0);
    assert!(crossing.is_degenerate());
}
