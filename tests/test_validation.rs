#[cfg(test)]
mod test_validation {
    use cptnet::{CptEntry, NetworkBuilder, NetworkModel, NetworkSpec, ParentRef, State, ValidationError};

    fn both_rows(parent: &str) -> Vec<(&str, State)> {
        vec![(parent, State::Zero), (parent, State::One)]
    }

    #[test]
    fn test_mis_summed_distribution() {
        let err = NetworkBuilder::new()
            .prior("A", &[0.3, 0.3])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DistributionSumMismatch { ref variable, .. } if variable == "A"
        ));
        assert_eq!(err.variable(), Some("A"));
    }

    #[test]
    fn test_probability_out_of_range() {
        let err = NetworkBuilder::new()
            .prior("A", &[1.2, -0.2])
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::ProbabilityOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_undefined_parent() {
        let err = NetworkBuilder::new()
            .prior("A", &[0.5, 0.5])
            .conditional("B", &both_rows("Ghost"), &[0.5, 0.5])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UndefinedParent {
                variable: "B".to_string(),
                parent: "Ghost".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Parent variable Ghost of B not defined");
    }

    #[test]
    fn test_mutual_parents_are_circular() {
        let err = NetworkBuilder::new()
            .conditional("A", &both_rows("B"), &[0.5, 0.5])
            .conditional("B", &both_rows("A"), &[0.5, 0.5])
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::CircularDependency { .. }));
        assert_eq!(err.to_string(), "Circular dependency between A and B");

        // one row each is enough
        let err = NetworkBuilder::new()
            .conditional("A", &[("B", State::One)], &[1.0])
            .conditional("B", &[("A", State::One)], &[1.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::CircularDependency { .. }));
    }

    #[test]
    fn test_sum_checked_before_parents() {
        let err = NetworkBuilder::new()
            .conditional("B", &both_rows("Ghost"), &[0.5, 0.6])
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::DistributionSumMismatch { .. }));
    }

    #[test]
    fn test_compact_two_variables() {
        let model = NetworkBuilder::new()
            .prior("A", &[0.3, 0.7])
            .conditional("B", &[("A", State::One)], &[1.0])
            .build()
            .unwrap();
        assert_eq!(model.compact_representation(), "P(A)P(B|A)");
    }

    #[test]
    fn test_compact_follows_insertion_order() {
        let mut spec = NetworkSpec::new();
        spec.insert(
            "Wet".to_string(),
            CptEntry::new(
                vec![ParentRef::new("Rain", State::One), ParentRef::new("Sun", State::One)],
                vec![0.5, 0.5],
            ),
        );
        spec.insert("Rain".to_string(), CptEntry::prior(vec![0.4, 0.6]));
        spec.insert("Sun".to_string(), CptEntry::prior(vec![1.0]));
        let model = NetworkModel::new(spec).unwrap();
        assert_eq!(model.compact_representation(), "P(Wet|RainSun)P(Rain)P(Sun)");
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn test_diamond_is_accepted() {
        let model = NetworkBuilder::new()
            .prior("Cloudy", &[0.5, 0.5])
            .conditional("Rain", &both_rows("Cloudy"), &[0.5, 0.5])
            .conditional("Sprinkler", &both_rows("Cloudy"), &[0.5, 0.5])
            .conditional(
                "Wet",
                &[("Rain", State::One), ("Sprinkler", State::One)],
                &[0.5, 0.5],
            )
            .build();
        assert!(model.is_ok());
    }
}
