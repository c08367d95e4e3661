// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Measurement property and scenario tests

use approx::assert_relative_eq;
use rand::Rng;
use segtorus::{compute, measure, Calculator, MeasurementError, Measurements, TorusParameters};
use std::f64::consts::PI;

/// Random physically sensible parameters
fn random_parameters(rng: &mut impl Rng) -> TorusParameters {
    let ring_diameter = rng.gen_range(50.0..2000.0);
    let torus_diameter = ring_diameter * rng.gen_range(0.05..0.95);
    let num_segments = rng.gen_range(3..48);
    let material_thickness = rng.gen_range(0.5..40.0);
    let kerf = rng.gen_range(0.0..5.0);

    TorusParameters::new(ring_diameter, torus_diameter, num_segments, material_thickness)
        .with_kerf(kerf)
}

#[test]
fn test_default_ring_scenario() {
    let m = compute(400.0, 150.0, 8, 18.0, None).unwrap();

    println!("Default ring:");
    println!("  Center radius: {}", m.ring_center_radius);
    println!("  Layers: {}", m.layer_count());

    assert_eq!(m.ring_center_radius, 125.0);

    let first = &m.layers[0];
    assert_eq!(first.segment.r0, 50.0);
    assert_eq!(first.segment.phi, PI / 4.0);
    assert_relative_eq!(first.segment.r1, 200.0 / (PI / 8.0).cos(), epsilon = 1e-9);
    assert!((first.segment.r1 - 216.2).abs() < 0.5);
}

#[test]
fn test_zero_thickness_scenario() {
    let m = compute(400.0, 150.0, 8, 0.0, None).unwrap();
    assert_eq!(
        m,
        Measurements {
            ring_center_radius: 0.0,
            layers: vec![],
        }
    );
}

#[test]
fn test_two_layer_scenario() {
    let m = compute(200.0, 100.0, 4, 25.0, None).unwrap();

    assert_eq!(m.layer_count(), 2);
    assert_eq!(m.layers[0].height, 25.0);
    assert_eq!(m.layers[1].height, 25.0);
    assert_eq!(m.ring_center_radius, 50.0);
}

#[test]
fn test_heights_sum_to_torus_radius() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let params = random_parameters(&mut rng);
        let m = measure(&params).unwrap();
        assert_relative_eq!(
            m.total_height(),
            params.torus_radius(),
            epsilon = 1e-9 * params.torus_radius().max(1.0)
        );
    }
}

#[test]
fn test_layer_count_is_ceiling() {
    let cases = [
        (400.0, 150.0, 18.0, 5),
        (200.0, 100.0, 25.0, 2),
        (200.0, 100.0, 30.0, 2),
        (200.0, 100.0, 50.0, 1),
        (200.0, 100.0, 100.0, 1),
        (300.0, 120.0, 7.0, 9),
    ];

    for (ring, torus, thickness, expected) in cases {
        let m = compute(ring, torus, 8, thickness, None).unwrap();
        let torus_radius: f64 = torus / 2.0;
        assert_eq!(m.layer_count(), expected);
        assert_eq!(m.layer_count(), (torus_radius / thickness).ceil() as usize);
    }
}

#[test]
fn test_random_layer_count_is_ceiling() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let params = random_parameters(&mut rng);
        let m = measure(&params).unwrap();
        let expected = (params.torus_radius() / params.material_thickness).ceil() as usize;
        assert_eq!(
            m.layer_count(),
            expected,
            "layer count for torus radius {} and thickness {}",
            params.torus_radius(),
            params.material_thickness
        );
    }
}

#[test]
fn test_radii_ordered_for_open_ring() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let params = random_parameters(&mut rng);
        if params.ring_center_radius() <= params.torus_radius() {
            continue;
        }
        let m = measure(&params).unwrap();
        for layer in &m.layers {
            assert!(layer.segment.r0 > 0.0);
            assert!(layer.segment.r1 > layer.segment.r0);
            assert!(layer.width.is_finite());
            assert!(layer.length.is_finite());
        }
    }
}

#[test]
fn test_center_radius_is_exact() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let params = random_parameters(&mut rng);
        let m = measure(&params).unwrap();
        assert_eq!(
            m.ring_center_radius,
            params.ring_diameter / 2.0 - params.torus_diameter / 2.0
        );
    }
}

#[test]
fn test_compute_is_idempotent() {
    let params = TorusParameters::default();
    let a = measure(&params).unwrap();
    let b = measure(&params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_pole_layer_is_finite() {
    // Offsets landing within rounding distance of the pole
    for thickness in [0.1, 0.3, 1.0 / 3.0, 7.5] {
        let m = compute(10.0, 3.0, 6, thickness, None).unwrap();
        for layer in &m.layers {
            assert!(layer.segment.r0.is_finite());
            assert!(layer.segment.r1.is_finite());
            assert!(layer.height > 0.0);
        }
    }
}

#[test]
fn test_invalid_arguments_fail_fast() {
    let invalid = [
        TorusParameters::new(400.0, 150.0, 0, 18.0),
        TorusParameters::new(0.0, 150.0, 8, 18.0),
        TorusParameters::new(400.0, 0.0, 8, 18.0),
        TorusParameters::new(-400.0, 150.0, 8, 18.0),
        TorusParameters::new(400.0, 150.0, 8, -1.0),
    ];

    for params in invalid {
        assert!(matches!(
            measure(&params),
            Err(MeasurementError::InvalidArgument { .. })
        ));
    }

    assert!(matches!(
        measure(&TorusParameters::new(150.0, 150.0, 8, 18.0)),
        Err(MeasurementError::DegenerateTorus { .. })
    ));
}

#[test]
fn test_calculator_tracks_input_changes() {
    let mut calculator = Calculator::new();
    let mut params = TorusParameters::default();

    let first = calculator.measure(&params).unwrap();
    params.num_segments = 12;
    let second = calculator.measure(&params).unwrap();

    assert_eq!(first.layer_count(), second.layer_count());
    assert_ne!(first.layers[0].segment.phi, second.layers[0].segment.phi);
    assert_eq!(*second, measure(&params).unwrap());
    assert_eq!(calculator.cache_stats().hits, 0);
}
