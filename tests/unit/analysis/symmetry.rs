//! Tests for rotational and reflective symmetry scoring

#[cfg(test)]
mod tests {
    use kolam::analysis::symmetry::{SymmetryAnalyzer, SymmetryKind, analyze_symmetry};
    use kolam::geometry::point::Point;
    use std::f64::consts::TAU;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn circle(count: usize, radius: f64) -> Vec<Point> {
        (0..count)
            .map(|i| {
                let angle = i as f64 / count as f64 * TAU;
                Point::new(
                    radius.mul_add(angle.cos(), 250.0),
                    radius.mul_add(angle.sin(), 250.0),
                )
            })
            .collect()
    }

    // Tests a square mirrors onto itself across both axes
    // Verified by negating both coordinates in the horizontal mirror
    #[test]
    fn test_square_reflection_both_axes() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];

        let result = analyze_symmetry(&square);
        assert!(close(result.horizontal, 1.0));
        assert!(close(result.vertical, 1.0));
        assert!(close(result.reflection, 1.0));
        assert!(result.is_significant());
    }

    // Tests a square whose side equals the match tolerance still mirrors exactly
    // Verified by mirroring about the origin instead of the centroid
    #[test]
    fn test_tolerance_sized_square_reflection() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];

        let result = analyze_symmetry(&square);
        assert!(close(result.horizontal, 1.0));
        assert!(close(result.vertical, 1.0));
        let center = result.center.expect("square has a center");
        assert!(close(center.x, 5.0) && close(center.y, 5.0));
    }

    // Tests an evenly spaced circle is fully rotationally symmetric
    // Verified by rotating with the wrong sign on the sine term
    #[test]
    fn test_circle_is_rotational() {
        let result = analyze_symmetry(&circle(8, 100.0));

        assert_eq!(result.kind, SymmetryKind::Rotational);
        assert!(close(result.rotational, 1.0));
        assert!(close(result.score, 1.0));
        let center = result.center.expect("circle has a center");
        assert!((center.x - 250.0).abs() < 1e-6 && (center.y - 250.0).abs() < 1e-6);
    }

    // Tests rotation is preferred over reflection when both pass
    // Verified by swapping the order of the gating checks
    #[test]
    fn test_rotation_wins_over_reflection() {
        let result = analyze_symmetry(&circle(12, 80.0));
        assert_eq!(result.kind, SymmetryKind::Rotational);
        assert!(result.reflection > 0.7);
    }

    // Tests two points on a horizontal line classify as reflection
    // Verified by requiring rotational symmetry first
    #[test]
    fn test_pair_is_reflection() {
        let result = analyze_symmetry(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);

        assert_eq!(result.kind, SymmetryKind::Reflection);
        assert!(close(result.score, 1.0));
        assert!(close(result.rotational, 0.0));
    }

    // Tests an irregular triangle has no symmetry and a zero gated score
    // Verified by reporting the raw best score regardless of threshold
    #[test]
    fn test_asymmetric_triangle() {
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(0.0, 60.0),
        ];

        let result = analyze_symmetry(&triangle);
        assert_eq!(result.kind, SymmetryKind::None);
        assert!(close(result.score, 0.0));
        assert!(!result.is_significant());
    }

    // Tests points on a mirror axis match themselves
    // Verified by excluding the point itself from the match search
    #[test]
    fn test_points_on_axis_match_themselves() {
        let line: Vec<Point> = [0.0, 10.0, 30.0, 70.0, 150.0]
            .into_iter()
            .map(|x| Point::new(x, 0.0))
            .collect();

        let result = analyze_symmetry(&line);
        assert!(close(result.vertical, 1.0));
    }

    // Tests degenerate inputs report no symmetry
    // Verified by removing the single-point guard
    #[test]
    fn test_degenerate_inputs() {
        let empty = analyze_symmetry(&[]);
        assert_eq!(empty.kind, SymmetryKind::None);
        assert!(empty.center.is_none());

        let single = analyze_symmetry(&[Point::new(4.0, 5.0)]);
        assert_eq!(single.kind, SymmetryKind::None);
        assert!(close(single.score, 0.0));
        assert!(single.center.is_some());
    }

    // Tests a tighter tolerance rejects near matches
    // Verified by ignoring the configured tolerance
    #[test]
    fn test_custom_tolerance() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 6.0),
        ];
        let loose = SymmetryAnalyzer::default().analyze(&points);
        let strict = SymmetryAnalyzer {
            tolerance: 1.0,
            ..SymmetryAnalyzer::default()
        }
        .analyze(&points);

        assert!(close(loose.horizontal, 1.0));
        assert!(close(strict.horizontal, 0.0));
    }

    // Tests the serialized form names the type field "type"
    // Verified by removing the serde rename
    #[test]
    fn test_serialized_type_field() {
        let json = serde_json::to_value(analyze_symmetry(&circle(8, 50.0)))
            .expect("symmetry result serializes");
        assert_eq!(json["type"], "rotational");
    }
}
