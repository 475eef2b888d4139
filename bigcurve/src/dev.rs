//! Development-related functionality.

/// Implement group law tests for a curve and a point on it.
///
/// Takes two expressions: one evaluating to a [`Curve`](crate::Curve) and one
/// evaluating to a non-identity [`Point`](crate::Point) on that curve. Each
/// expression is evaluated once per generated test.
#[macro_export]
macro_rules! test_group_law {
    ($curve:expr, $generator:expr) => {
        fn multiple(curve: &$crate::Curve, point: &$crate::Point, k: u64) -> $crate::Point {
            curve.mul(point, &$crate::BigInt::from(k)).unwrap()
        }

        #[test]
        fn generator_is_valid() {
            let curve = $curve;
            let generator = $generator;

            assert!(curve.validate(&generator));
            assert!(!generator.is_identity());
        }

        #[test]
        fn identity_addition() {
            let curve = $curve;
            let generator = $generator;
            let identity = $crate::Point::IDENTITY;

            assert_eq!(curve.add(&generator, &identity).unwrap(), generator);
            assert_eq!(curve.add(&identity, &generator).unwrap(), generator);
            assert_eq!(curve.add(&identity, &identity).unwrap(), identity);
        }

        #[test]
        fn inverse_law() {
            let curve = $curve;
            let generator = $generator;

            for k in [1, 2, 7] {
                let p = multiple(&curve, &generator, k);
                assert_eq!(
                    curve.add(&p, &curve.negate(&p)).unwrap(),
                    $crate::Point::IDENTITY
                );
            }
        }

        #[test]
        fn add_vs_double() {
            let curve = $curve;
            let generator = $generator;

            let doubled = curve.double(&generator).unwrap();
            assert_eq!(curve.add(&generator, &generator).unwrap(), doubled);
            assert_eq!(multiple(&curve, &generator, 2), doubled);
        }

        #[test]
        fn commutativity() {
            let curve = $curve;
            let generator = $generator;
            let p = multiple(&curve, &generator, 3);
            let q = multiple(&curve, &generator, 11);

            assert_eq!(curve.add(&p, &q).unwrap(), curve.add(&q, &p).unwrap());
            assert_eq!(
                curve.add(&generator, &p).unwrap(),
                curve.add(&p, &generator).unwrap()
            );
        }

        #[test]
        fn associativity() {
            let curve = $curve;
            let generator = $generator;
            let p = generator.clone();
            let q = multiple(&curve, &generator, 2);
            let r = multiple(&curve, &generator, 5);

            let lhs = curve.add(&curve.add(&p, &q).unwrap(), &r).unwrap();
            let rhs = curve.add(&p, &curve.add(&q, &r).unwrap()).unwrap();
            assert_eq!(lhs, rhs);
        }

        #[test]
        fn scalar_mul_matches_repeated_addition() {
            let curve = $curve;
            let generator = $generator;

            for k in [0u64, 1, 2, 3, 10] {
                let mut expected = $crate::Point::IDENTITY;
                for _ in 0..k {
                    expected = curve.add(&expected, &generator).unwrap();
                }
                assert_eq!(multiple(&curve, &generator, k), expected);
            }
        }

        #[test]
        fn scalar_mul_distributes() {
            let curve = $curve;
            let generator = $generator;

            let lhs = multiple(&curve, &generator, 3 + 7);
            let rhs = curve
                .add(
                    &multiple(&curve, &generator, 3),
                    &multiple(&curve, &generator, 7),
                )
                .unwrap();
            assert_eq!(lhs, rhs);
        }

        #[test]
        fn add_and_sub() {
            let curve = $curve;
            let generator = $generator;

            let doubled = curve.double(&generator).unwrap();
            assert_eq!(curve.sub(&doubled, &generator).unwrap(), generator);
        }

        #[test]
        fn closure() {
            let curve = $curve;
            let generator = $generator;

            let mut p = generator.clone();
            for k in 2..20 {
                p = curve.add(&p, &generator).unwrap();
                assert!(curve.validate(&p));
                assert!(curve.validate(&multiple(&curve, &generator, k)));
            }
        }

        #[test]
        fn negative_scalar_is_rejected() {
            let curve = $curve;
            let generator = $generator;

            assert_eq!(
                curve.mul(&generator, &$crate::BigInt::from(-5)),
                Err($crate::Error::InvalidScalar)
            );
        }
    };
}
