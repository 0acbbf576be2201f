use super::*;
use nalgebra::{point, vector, Point3, Vector3};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn unit_x() -> Segment {
    Segment::new(point![0.0, 0.0, 0.0], point![1.0, 0.0, 0.0])
}

#[test]
fn distance_unit_segment_interior_and_clamped() {
    let s = unit_x();
    assert_eq!(s.dist_to_point(point![0.5, 1.0, 0.0]), 1.0);
    // Before `first` and beyond `second` clamp to the endpoints.
    assert_eq!(s.dist_to_point(point![-1.0, 0.0, 0.0]), 1.0);
    assert_eq!(s.dist_to_point(point![2.0, 0.0, 0.0]), 1.0);
    assert_eq!(s.dist_to_point(point![2.0, 1.0, 0.0]), 2.0_f64.sqrt());
}

#[test]
fn distance_is_orientation_independent() {
    let s = Segment::new(point![1.0, -2.0, 0.5], point![3.0, 4.0, -1.0]);
    let r = Segment::new(s.second, s.first);
    for p in [point![0.0, 0.0, 0.0], point![2.0, 1.0, 7.0], point![5.0, 5.0, 5.0]] {
        assert!((s.dist_to_point(p) - r.dist_to_point(p)).abs() < 1e-12);
    }
}

#[test]
fn projection_exactly_on_endpoint_resolves_to_endpoint() {
    let s = unit_x();
    // Projection parameter 0 and 1: closest point is the endpoint itself.
    assert_eq!(s.closest_point(point![0.0, 3.0, 0.0]), s.first);
    assert_eq!(s.closest_point(point![1.0, 0.0, -3.0]), s.second);
    assert!(!s.is_in_between(point![0.0, 3.0, 0.0]));
    assert!(!s.is_in_between(point![1.0, 0.0, -3.0]));
}

#[test]
fn in_between_is_open_interval_on_projection() {
    let s = unit_x();
    assert!(s.is_in_between(point![0.5, 0.0, 0.0]));
    assert!(s.is_in_between(point![1e-6, 10.0, -10.0]));
    assert!(s.is_in_between(point![0.999, 0.0, 4.0]));
    assert!(!s.is_in_between(point![-0.1, 0.0, 0.0]));
    assert!(!s.is_in_between(point![1.1, 0.0, 0.0]));
    assert!(!s.is_in_between(s.first));
    assert!(!s.is_in_between(s.second));
}

#[test]
fn degenerate_segment_queries() {
    let p0 = point![1.0, 2.0, 3.0];
    let s = Segment::new(p0, p0);
    assert!(s.is_degenerate());
    assert_eq!(s.length(), 0.0);
    assert_eq!(s.dir(), Vector3::zeros());
    assert_eq!(s.dist_to_point(point![1.0, 2.0, 5.0]), 2.0);
    assert!(!s.is_in_between(point![1.0, 2.0, 5.0]));
}

#[test]
fn dir_points_first_to_second() {
    let s = Segment::new(point![1.0, 1.0, 1.0], point![1.0, 1.0, -3.0]);
    assert_eq!(s.dir(), vector![0.0, 0.0, -1.0]);
    assert!(!s.is_degenerate());
    assert_eq!(s.length(), 4.0);
}

#[test]
fn tiny_segment_is_not_degenerate() {
    // Squared components underflow to zero here.
    let s = Segment::new(point![0.0, 0.0, 0.0], point![1e-200, 0.0, 0.0]);
    assert!(!s.is_degenerate());
    assert_eq!(s.dir(), vector![1.0, 0.0, 0.0]);
    assert_eq!(s.length(), 1e-200);
    let planes = s.to_planes().unwrap();
    assert_eq!(planes[0].n.into_inner(), vector![0.0, 1.0, 0.0]);
    assert_eq!(planes[1].n.into_inner(), vector![0.0, 0.0, 1.0]);

    let s = Segment::new(point![0.0, 0.0, 0.0], point![0.0, -3e-170, 4e-170]);
    assert!(!s.is_degenerate());
    assert!((s.dir() - vector![0.0, -0.6, 0.8]).norm() < 1e-12);
    assert!((s.length() / 5e-170 - 1.0).abs() < 1e-12);
}

#[test]
fn to_planes_fails_on_degenerate_segment() {
    let s = Segment::new(point![0.0, 0.0, 0.0], point![0.0, 0.0, 0.0]);
    let err = s.to_planes().unwrap_err();
    assert!(matches!(err, GeomError::DegenerateGeometry { .. }));
    assert!(err.to_string().contains("segment direction"));
}

#[test]
fn to_planes_axis_aligned_candidate_order() {
    let o = point![0.0, 0.0, 0.0];
    let x = Segment::new(o, point![2.0, 0.0, 0.0]).to_planes().unwrap();
    assert_eq!(x[0].n.into_inner(), vector![0.0, 1.0, 0.0]); // n0
    assert_eq!(x[1].n.into_inner(), vector![0.0, 0.0, 1.0]); // n1

    let y = Segment::new(o, point![0.0, 2.0, 0.0]).to_planes().unwrap();
    assert_eq!(y[0].n.into_inner(), vector![-1.0, 0.0, 0.0]); // n0
    assert_eq!(y[1].n.into_inner(), vector![0.0, 0.0, 1.0]); // n2

    let z = Segment::new(o, point![0.0, 0.0, 2.0]).to_planes().unwrap();
    assert_eq!(z[0].n.into_inner(), vector![-1.0, 0.0, 0.0]); // n1
    assert_eq!(z[1].n.into_inner(), vector![0.0, -1.0, 0.0]); // n2
}

#[test]
fn to_planes_contain_whole_line() {
    let s = Segment::new(point![1.0, -2.0, 0.5], point![3.0, 4.0, -1.0]);
    let planes = s.to_planes().unwrap();
    for plane in &planes {
        assert_eq!(plane.p, s.first);
        assert!(plane.contains(s.first));
        assert!(plane.contains(s.second));
        assert!(plane.contains(s.first + (s.second - s.first) * 7.5));
        assert!(plane.n.dot(&s.dir()).abs() < 1e-12);
    }
    // The two normals are not parallel, so the planes meet in a line.
    assert!(planes[0].n.cross(&planes[1].n.into_inner()).norm() > 1e-6);
}

#[test]
fn plane_rejects_zero_normal() {
    let err = Plane::new(point![0.0, 0.0, 0.0], Vector3::zeros()).unwrap_err();
    assert_eq!(err, GeomError::DegenerateGeometry { what: "plane normal" });
}

#[test]
fn plane_offset_and_signed_distance() {
    let pl = Plane::new(point![0.0, 0.0, 2.0], vector![0.0, 0.0, 5.0]).unwrap();
    assert!((pl.n.norm() - 1.0).abs() < 1e-12);
    assert!((pl.offset() - 2.0).abs() < 1e-12);
    assert!((pl.signed_distance(point![3.0, -1.0, 5.0]) - 3.0).abs() < 1e-12);
    assert!(!pl.contains(point![0.0, 0.0, 2.1]));
    assert!(pl.contains_eps(point![0.0, 0.0, 2.1], 0.2));
}

#[test]
fn display_is_tab_separated_endpoints() {
    let s = Segment::new(point![0.0, 0.5, -1.0], point![1.0, 2.0, 3.0]);
    assert_eq!(s.to_string(), "0 0.5 -1\t1 2 3\n");
}

#[test]
fn randomized_seeded_distance_matches_dense_sampling() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let mut draw = || point![
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0)
        ];
        let s = Segment::new(draw(), draw());
        let p = draw();
        // Brute force over a fine parameter grid bounds the exact distance from above.
        let sampled = (0..=2000)
            .map(|k| {
                let t = k as f64 / 2000.0;
                (p - (s.first + (s.second - s.first) * t)).norm()
            })
            .fold(f64::INFINITY, f64::min);
        let d = s.dist_to_point(p);
        assert!(d <= sampled + 1e-12);
        assert!(sampled - d < 1e-2);
    }
}

fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        Just(-1.0),
        Just(0.5),
        -50.0..=50.0,
    ]
}

fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| point![x, y, z])
}

fn arb_segment() -> impl Strategy<Value = Segment> {
    (arb_point(), arb_point())
        .prop_filter("non-degenerate", |(a, b)| a != b)
        .prop_map(|(a, b)| Segment::new(a, b))
}

proptest! {
    #[test]
    fn prop_distance_non_negative_and_zero_at_endpoints(s in arb_segment(), p in arb_point()) {
        prop_assert!(s.dist_to_point(p) >= 0.0);
        prop_assert_eq!(s.dist_to_point(s.first), 0.0);
        prop_assert_eq!(s.dist_to_point(s.second), 0.0);
    }

    #[test]
    fn prop_closest_point_realizes_distance(s in arb_segment(), p in arb_point()) {
        let c = s.closest_point(p);
        prop_assert!(((p - c).norm() - s.dist_to_point(p)).abs() < 1e-9);
        // Never closer than either endpoint allows.
        prop_assert!(s.dist_to_point(p) <= (p - s.first).norm() + 1e-9);
        prop_assert!(s.dist_to_point(p) <= (p - s.second).norm() + 1e-9);
    }

    #[test]
    fn prop_two_orthogonal_planes_through_first(s in arb_segment()) {
        let planes = s.to_planes().unwrap();
        let d = s.dir();
        for plane in &planes {
            prop_assert_eq!(plane.p, s.first);
            prop_assert!(plane.n.dot(&d).abs() < 1e-9);
        }
    }
}
