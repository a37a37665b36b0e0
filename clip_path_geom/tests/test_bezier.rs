use clip_path_geom::{
    assert_fuzzy_eq,
    bezier::{BezierIntersect, BezierIntersectOptions, CubicBezier},
    core::{
        math::{vec2, Vector2},
        traits::FuzzyEq,
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn arch() -> CubicBezier {
    CubicBezier::new(
        vec2(0.0, 0.0),
        vec2(0.0, 10.0),
        vec2(10.0, 10.0),
        vec2(10.0, 0.0),
    )
}

fn valley() -> CubicBezier {
    CubicBezier::new(
        vec2(0.0, 10.0),
        vec2(0.0, 0.0),
        vec2(10.0, 0.0),
        vec2(10.0, 10.0),
    )
}

fn random_curve(rng: &mut StdRng) -> CubicBezier {
    let mut point = || vec2(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
    CubicBezier::new(point(), point(), point(), point())
}

fn hit_near(hits: &[BezierIntersect], point: Vector2, eps: f64) -> bool {
    hits.iter().any(|h| h.point.fuzzy_eq_eps(point, eps))
}

mod test_evaluate {
    use super::*;

    #[test]
    fn end_points_exact() {
        let c = arch();
        assert_eq!(c.evaluate(0.0), c.p0);
        assert_eq!(c.evaluate(1.0), c.p3);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let c = random_curve(&mut rng);
            assert_eq!(c.evaluate(0.0), c.p0);
            assert_eq!(c.evaluate(1.0), c.p3);
        }
    }

    #[test]
    fn arch_midpoint() {
        assert_fuzzy_eq!(arch().evaluate(0.5), vec2(5.0, 7.5));
        assert_fuzzy_eq!(valley().evaluate(0.5), vec2(5.0, 2.5));
    }

    #[test]
    fn derivative_and_tangent() {
        let c = arch();
        assert_fuzzy_eq!(c.derivative(0.0), vec2(0.0, 30.0));
        assert_fuzzy_eq!(c.derivative(0.5), vec2(15.0, 0.0));
        assert_fuzzy_eq!(c.tangent(0.0), vec2(0.0, 1.0));
        assert_fuzzy_eq!(c.tangent(0.5), vec2(1.0, 0.0));
        assert_fuzzy_eq!(c.tangent(1.0), vec2(0.0, -1.0));
    }

    #[test]
    fn tangent_of_degenerate_curve() {
        let p = vec2(3.0, 3.0);
        let c = CubicBezier::new(p, p, p, p);
        assert_fuzzy_eq!(c.tangent(0.5), Vector2::zero());
    }

    #[test]
    fn line_is_uniform() {
        let c = CubicBezier::line(vec2(0.0, 0.0), vec2(9.0, 3.0));
        assert_fuzzy_eq!(c.p1, vec2(3.0, 1.0));
        assert_fuzzy_eq!(c.p2, vec2(6.0, 2.0));
        assert_fuzzy_eq!(c.evaluate(0.25), vec2(2.25, 0.75));
        assert_fuzzy_eq!(c.chord_param_to_curve_param(0.3), 0.3, 1e-8);
        assert!(c.is_flat(1e-6));
        assert!(!arch().is_flat(0.1));
    }

    #[test]
    fn reverse() {
        let c = arch();
        let r = c.reverse();
        assert_eq!(r.points(), [c.p3, c.p2, c.p1, c.p0]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_fuzzy_eq!(r.evaluate(t), c.evaluate(1.0 - t));
        }
        assert_eq!(r.reverse(), c);
    }
}

mod test_split {
    use super::*;

    #[test]
    fn split_continuity() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let c = random_curve(&mut rng);
            let t = rng.gen_range(0.05..0.95);
            let [left, right] = c.split(t);
            assert_eq!(left.p0, c.p0);
            assert_eq!(right.p3, c.p3);
            assert_eq!(left.p3, right.p0);
            assert_fuzzy_eq!(left.p3, c.evaluate(t), 1e-7);

            for i in 0..=8 {
                let u = i as f64 / 8.0;
                assert_fuzzy_eq!(left.evaluate(u), c.evaluate(u * t), 1e-7);
                assert_fuzzy_eq!(right.evaluate(u), c.evaluate(t + u * (1.0 - t)), 1e-7);
            }
        }
    }

    #[test]
    fn sub_curve_interval() {
        let c = arch();
        let sub = c.sub_curve(0.25, 0.75);
        assert_fuzzy_eq!(sub.evaluate(0.0), c.evaluate(0.25));
        assert_fuzzy_eq!(sub.evaluate(0.5), c.evaluate(0.5));
        assert_fuzzy_eq!(sub.evaluate(1.0), c.evaluate(0.75));

        let head = c.sub_curve(0.0, 0.4);
        assert_eq!(head.p0, c.p0);
        assert_fuzzy_eq!(head.p3, c.evaluate(0.4));

        let tail = c.sub_curve(0.6, 1.0);
        assert_fuzzy_eq!(tail.p0, c.evaluate(0.6));
        assert_eq!(tail.p3, c.p3);

        assert_eq!(c.sub_curve(0.0, 1.0), c);
    }
}

mod test_bounding_box {
    use super::*;

    #[test]
    fn arch_extents() {
        let bbox = arch().bounding_box();
        assert_fuzzy_eq!(bbox.min, vec2(0.0, 0.0));
        assert_fuzzy_eq!(bbox.max, vec2(10.0, 7.5));
    }

    #[test]
    fn contains_all_samples() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..50 {
            let c = random_curve(&mut rng);
            let bbox = c.bounding_box().expand(1e-6);
            for i in 0..=100 {
                let p = c.evaluate(i as f64 / 100.0);
                assert!(bbox.contains(p), "{:?} not in {:?} for {:?}", p, bbox, c);
            }
            // control polygon hull always contains the tight box
            let hull = clip_path_geom::core::math::Rect::from_points(c.points()).expand(1e-6);
            assert!(hull.contains(bbox.min));
            assert!(hull.contains(bbox.max));
        }
    }
}

mod test_intersects {
    use super::*;

    #[test]
    fn crossing_lines() {
        let horizontal = CubicBezier::line(vec2(0.0, 5.0), vec2(10.0, 5.0));
        let vertical = CubicBezier::line(vec2(5.0, 0.0), vec2(5.0, 10.0));
        let hits = horizontal.intersects(&vertical);
        assert_eq!(hits.len(), 1);
        assert_fuzzy_eq!(hits[0].point, vec2(5.0, 5.0), 1e-6);
        assert_fuzzy_eq!(hits[0].t1, 0.5, 1e-6);
        assert_fuzzy_eq!(hits[0].t2, 0.5, 1e-6);
    }

    #[test]
    fn arch_and_valley() {
        // curves meet where t * (1 - t) = 1/6, both crossings at y = 5
        let x_offset = 10.0 * (4.0 * (1.0 - 1.0 / 3f64.sqrt()) / 6.0 - 1.0 / 6.0);
        let expected = [vec2(x_offset, 5.0), vec2(10.0 - x_offset, 5.0)];

        let a = arch();
        let b = valley();
        let hits = a.intersects(&b);
        assert!(!hits.is_empty());
        for e in expected {
            assert!(hit_near(&hits, e, 0.25), "missing {:?} in {:?}", e, hits);
        }
        for h in hits.iter() {
            assert!(expected.iter().any(|e| e.fuzzy_eq_eps(h.point, 0.25)));
            assert_fuzzy_eq!(a.evaluate(h.t1), h.point, 0.25);
            assert_fuzzy_eq!(b.evaluate(h.t2), h.point, 0.25);
        }
    }

    #[test]
    fn finer_threshold_is_closer() {
        let options = BezierIntersectOptions {
            threshold: 0.001,
            max_depth: 20,
        };
        let x_offset = 10.0 * (4.0 * (1.0 - 1.0 / 3f64.sqrt()) / 6.0 - 1.0 / 6.0);
        let hits = arch().intersects_with_options(&valley(), &options);
        assert!(hit_near(&hits, vec2(x_offset, 5.0), 0.01));
        assert!(hit_near(&hits, vec2(10.0 - x_offset, 5.0), 0.01));
    }

    #[test]
    fn symmetric_points() {
        let mut rng = StdRng::seed_from_u64(99);
        let options = BezierIntersectOptions::new();
        let eps = options.threshold + 1e-6;
        for _ in 0..20 {
            let a = random_curve(&mut rng);
            let b = random_curve(&mut rng);
            let ab = a.intersects_with_options(&b, &options);
            let ba = b.intersects_with_options(&a, &options);
            for h in ab.iter() {
                assert!(hit_near(&ba, h.point, eps), "{:?} missing from {:?}", h, ba);
            }
            for h in ba.iter() {
                assert!(hit_near(&ab, h.point, eps), "{:?} missing from {:?}", h, ab);
            }
        }
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = CubicBezier::line(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let b = CubicBezier::line(vec2(0.0, 1.0), vec2(10.0, 1.0));
        assert!(a.intersects(&b).is_empty());

        // collinear overlap has no single crossing point either
        let c = CubicBezier::line(vec2(5.0, 0.0), vec2(15.0, 0.0));
        assert!(a.intersects(&c).is_empty());
    }

    #[test]
    fn disjoint_curves() {
        let a = arch();
        let far = CubicBezier::new(
            vec2(100.0, 100.0),
            vec2(100.0, 110.0),
            vec2(110.0, 110.0),
            vec2(110.0, 100.0),
        );
        assert!(a.intersects(&far).is_empty());
    }

    #[test]
    fn f32_lines() {
        let horizontal = CubicBezier::<f32>::line(vec2(0.0, 5.0), vec2(10.0, 5.0));
        let vertical = CubicBezier::<f32>::line(vec2(5.0, 0.0), vec2(5.0, 10.0));
        let hits = horizontal.intersects(&vertical);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].point.fuzzy_eq_eps(vec2(5.0, 5.0), 1e-3));
    }
}
