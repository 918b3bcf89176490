//! Property checks of the evaluator over randomly drawn turbines.

use power_curve::curve::{
    CurveError, Interpolation, TurbineCurveParameters, cubic_ramp, evaluate, linear_ramp,
    power_curve, sample,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a parameter set that satisfies `0 <= cut_in < rated_speed < cut_out`.
fn random_turbine(rng: &mut StdRng, interpolation: Interpolation) -> TurbineCurveParameters {
    let cut_in = rng.random_range(0.0..6.0);
    let rated_speed = cut_in + rng.random_range(1.0..12.0);
    let cut_out = rated_speed + rng.random_range(1.0..20.0);
    let rated_power = rng.random_range(0.5..20.0);
    TurbineCurveParameters::new(cut_in, cut_out, rated_speed, rated_power, interpolation)
}

#[test]
fn zero_outside_operating_window() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        for mode in Interpolation::ALL {
            let p = random_turbine(&mut rng, mode);
            let below = rng.random_range(-10.0..p.cut_in);
            let above = p.cut_out + rng.random_range(0.0..20.0);
            assert_eq!(evaluate(below, &p), Ok(0.0));
            assert_eq!(evaluate(above, &p), Ok(0.0));
        }
    }
}

#[test]
fn rated_power_between_rated_speed_and_cut_out() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        for mode in Interpolation::ALL {
            let p = random_turbine(&mut rng, mode);
            let u = rng.random_range(p.rated_speed..p.cut_out);
            assert_eq!(evaluate(u, &p), Ok(p.rated_power));
            assert_eq!(evaluate(p.rated_speed, &p), Ok(p.rated_power));
        }
    }
}

#[test]
fn linear_ramp_is_monotonic_for_random_turbines() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let p = random_turbine(&mut rng, Interpolation::Linear);
        let a = rng.random_range(p.cut_in..p.rated_speed);
        let b = rng.random_range(p.cut_in..p.rated_speed);
        let (u1, u2) = if a <= b { (a, b) } else { (b, a) };
        let (p1, p2) = (evaluate(u1, &p).unwrap(), evaluate(u2, &p).unwrap());
        assert!(p1 <= p2, "u1={u1} -> {p1}, u2={u2} -> {p2}");
    }
}

#[test]
fn cubic_ramp_meets_rated_power_at_rated_speed() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..200 {
        let p = random_turbine(&mut rng, Interpolation::Cubic);
        assert_eq!(cubic_ramp(p.rated_speed, &p), Ok(p.rated_power));
        let just_below = evaluate(p.rated_speed * (1.0 - 1e-12), &p).unwrap();
        assert!((just_below - p.rated_power).abs() < 1e-6 * p.rated_power.max(1.0));
    }
}

#[test]
fn dispatcher_agrees_with_single_mode_laws_on_ramp() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..200 {
        let p = random_turbine(&mut rng, Interpolation::Linear);
        let u = rng.random_range(p.cut_in..p.rated_speed);
        assert_eq!(evaluate(u, &p), linear_ramp(u, &p));

        let c = p.with_interpolation(Interpolation::Cubic);
        assert_eq!(evaluate(u, &c), cubic_ramp(u, &c));
    }
}

#[test]
fn sampled_curve_stays_within_rated_range() {
    let mut rng = StdRng::seed_from_u64(59);
    for _ in 0..50 {
        for mode in Interpolation::ALL {
            let p = random_turbine(&mut rng, mode);
            let points = sample(&p, 0.0, p.cut_out + 5.0, 0.1).unwrap();
            assert!(
                points
                    .iter()
                    .all(|pt| (0.0..=p.rated_power).contains(&pt.power_mw))
            );
        }
    }
}

#[test]
fn reference_scenarios() {
    let linear = |u| power_curve(u, "Linear", 3.0, 25.0, 11.0, 15.0);
    let cubic = |u| power_curve(u, "Cubic", 3.0, 25.0, 11.0, 15.0);

    assert_eq!(linear(11.0), Ok(15.0));
    assert_eq!(linear(7.0), Ok(7.5));
    assert!((cubic(7.0).unwrap() - 15.0 * (7.0_f64 / 11.0).powi(3)).abs() < 1e-12);
    assert_eq!(linear(2.0), Ok(0.0));
    assert_eq!(cubic(2.0), Ok(0.0));
    assert_eq!(linear(30.0), Ok(0.0));
    assert_eq!(cubic(30.0), Ok(0.0));
}

#[test]
fn quadratic_selector_is_rejected() {
    assert!(matches!(
        power_curve(7.0, "Quadratic", 3.0, 25.0, 11.0, 15.0),
        Err(CurveError::InvalidInterpolationMode { .. })
    ));
}
