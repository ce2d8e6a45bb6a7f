//! Tests for the pattern-type decision tree and complexity score

#[cfg(test)]
mod tests {
    use kolam::analysis::classification::{
        PatternType, calculate_complexity, classify, detect_pattern_type,
    };
    use kolam::analysis::statistics::SpacingStats;
    use kolam::analysis::symmetry::{SymmetryKind, SymmetryResult};
    use kolam::geometry::point::{Point, Segment};
    use std::f64::consts::TAU;

    fn symmetry(kind: SymmetryKind, score: f64) -> SymmetryResult {
        SymmetryResult {
            kind,
            score,
            ..SymmetryResult::none(None)
        }
    }

    fn spacing(uniform: bool) -> SpacingStats {
        SpacingStats {
            uniform,
            ..SpacingStats::empty()
        }
    }

    // Tests fewer than ten points are always simple
    // Verified by using <= 10 in the first rule
    #[test]
    fn test_small_sets_are_simple() {
        let strong = symmetry(SymmetryKind::Rotational, 1.0);
        assert_eq!(classify(9, &strong, &spacing(true)), PatternType::Simple);
        assert_eq!(classify(0, &strong, &spacing(true)), PatternType::Simple);
        assert_eq!(detect_pattern_type(&[]), PatternType::Simple);
        assert_eq!(
            detect_pattern_type(&vec![Point::new(1.0, 1.0); 9]),
            PatternType::Simple
        );
    }

    // Tests the decision tree order past the size check
    // Verified by checking uniform spacing before symmetry
    #[test]
    fn test_decision_order() {
        let even = spacing(true);
        let uneven = spacing(false);

        assert_eq!(
            classify(10, &symmetry(SymmetryKind::Rotational, 0.9), &even),
            PatternType::Mandala
        );
        assert_eq!(
            classify(10, &symmetry(SymmetryKind::Reflection, 0.9), &even),
            PatternType::Symmetric
        );
        assert_eq!(
            classify(10, &symmetry(SymmetryKind::None, 0.0), &even),
            PatternType::Geometric
        );
        assert_eq!(
            classify(10, &symmetry(SymmetryKind::None, 0.0), &uneven),
            PatternType::Freeform
        );
    }

    // Tests a score at exactly the threshold is not significant
    // Verified by using >= against the threshold
    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(
            classify(12, &symmetry(SymmetryKind::Rotational, 0.7), &spacing(false)),
            PatternType::Freeform
        );
    }

    // Tests a twelve-dot ring is detected as a mandala
    // Verified by skipping the rotational branch
    #[test]
    fn test_ring_is_mandala() {
        let ring: Vec<Point> = (0..12)
            .map(|i| {
                let angle = f64::from(i) / 12.0 * TAU;
                Point::new(
                    100.0f64.mul_add(angle.cos(), 250.0),
                    100.0f64.mul_add(angle.sin(), 250.0),
                )
            })
            .collect();

        assert_eq!(detect_pattern_type(&ring), PatternType::Mandala);
    }

    // Tests complexity bounds and weighting
    // Verified by swapping the dot and segment weights
    #[test]
    fn test_complexity() {
        assert!(calculate_complexity(&[], &[]).abs() < 1e-9);

        let points = vec![Point::new(0.0, 0.0); 50];
        let segments =
            vec![Segment::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)); 100];
        assert!((calculate_complexity(&points, &segments) - 100.0).abs() < 1e-9);

        let half = vec![Point::new(0.0, 0.0); 25];
        assert!((calculate_complexity(&half, &[]) - 30.0).abs() < 1e-9);

        let many = vec![Point::new(0.0, 0.0); 500];
        assert!((calculate_complexity(&many, &[]) - 60.0).abs() < 1e-9);
    }

    // Tests labels match the serialized form
    // Verified by serializing with the variant name
    #[test]
    fn test_labels() {
        assert_eq!(PatternType::Geometric.to_string(), "geometric");
        let json = serde_json::to_value(PatternType::Freeform).expect("label serializes");
        assert_eq!(json, "freeform");
    }
}
