//quantum_tests.rs

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use qlinalg::config::EngineConfig;
    use qlinalg::prelude::*;
    use qlinalg::quantum::*;

    fn float(text: &str) -> FloatScalar {
        text.parse().unwrap()
    }

    #[test]
    fn test_hadamard_of_order_one_is_the_gate() {
        let h = hadamard_matrix(1).unwrap();
        assert_eq!(h, hadamard_gate());
        assert!(h.is_unitary());
    }

    #[test]
    fn test_hadamard_matches_tensor_powers() {
        let h1 = hadamard_matrix(1).unwrap();
        let h2 = hadamard_matrix(2).unwrap();
        let h3 = hadamard_matrix(3).unwrap();

        assert_eq!(h2, h1.tensor_product(&h1).unwrap());
        assert_eq!(h3, h2.kronecker_product(&h1));
        assert!(h3.is_unitary());
    }

    #[test]
    fn test_hadamard_is_self_inverse() {
        let h = hadamard_matrix(4).unwrap();
        let product = h.multiply(&h).unwrap();
        assert!(product.near_equals(&FloatMatrix::identity(16), 1e-12));
    }

    #[test]
    fn test_hadamard_spreads_zero_state_uniformly() {
        let h = hadamard_matrix(3).unwrap();
        let state = h.multiply_vector(&zero_state(3).unwrap()).unwrap();

        let amplitude = 1.0 / 8f64.sqrt();
        assert!(state.iter().all(|a| a.near_equals(&FloatScalar::from_real(amplitude), 1e-12)));
    }

    #[test]
    fn test_hadamard_rejects_invalid_orders() {
        assert_eq!(hadamard_matrix(0), Err(AlgebraError::InvalidOrder(0)));
        let err = hadamard_matrix(64).unwrap_err();
        assert_eq!(err.to_string(), "Invalid transform order 64");
    }

    #[test]
    fn test_standard_gates_are_unitary() {
        assert!(hadamard_gate().is_unitary());
        assert!(cnot_gate().is_unitary());
        assert!(sqrt_not_gate().is_unitary());
    }

    #[test]
    fn test_sqrt_not_squared_is_not_up_to_phase() {
        let gate = sqrt_not_gate();
        let squared = gate.multiply(&gate).unwrap();
        let flip = FloatMatrix::from_values([[0.0, -1.0], [1.0, 0.0]]);
        assert!(squared.near_equals(&flip, 1e-12));
    }

    #[test]
    fn test_cnot_flips_target_when_control_set() {
        let state = FloatVector::from_values([0.0, 0.0, 1.0, 0.0]);
        let flipped = cnot_gate().multiply_vector(&state).unwrap();
        assert_eq!(flipped, FloatVector::from_values([0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_binary_vectors_in_order() {
        let m = fill_with_binary_vectors_in_order(3).unwrap();
        let expected = FloatMatrix::from_values([
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
        ]);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_zero_state() {
        let state = zero_state(2).unwrap();
        assert_eq!(state, FloatVector::from_values([1.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_state_widths_beyond_usize_are_rejected() {
        assert_eq!(zero_state(64 + 64), Err(AlgebraError::InvalidOrder(128)));
        assert_eq!(
            fill_with_binary_vectors_in_order(usize::BITS as usize),
            Err(AlgebraError::InvalidOrder(usize::BITS as usize))
        );
    }

    #[test]
    fn test_bra_from_ket() {
        let ket = FloatVector::from_text(["3", "1-2i"]);
        assert_eq!(bra_from_ket(&ket), FloatVector::from_text(["3", "1+2i"]));

        let ket = FloatVector::from_text(["3+i", "-2i"]);
        assert_eq!(bra_from_ket(&ket), FloatVector::from_text(["3-i", "2i"]));
    }

    #[test]
    fn test_transition_amplitude() {
        let factor = 2f64.sqrt() / 2.0;
        let start = FloatVector::from_text(["1", "i"]).multiply(FloatScalar::from_real(factor));
        let end = FloatVector::from_text(["i", "-1"]).multiply(FloatScalar::from_real(factor));
        assert_eq!(transition_amplitude(&start, &end).unwrap(), float("-i"));

        let start = FloatVector::from_text(["1", "-i"]);
        let end = FloatVector::from_text(["i", "1"]);
        assert_eq!(transition_amplitude(&start, &end).unwrap(), float("-i"));
    }

    #[test]
    fn test_transition_amplitude_requires_nonzero_states() {
        let zero = FloatVector::zeros(2);
        let state = FloatVector::from_values([1.0, 0.0]);
        assert_eq!(transition_amplitude(&zero, &state), Err(AlgebraError::DivideByZero));
    }

    #[test]
    fn test_observation_probability() {
        let state = FloatVector::from_text(["i", "1-i", "2", "-1-i"]);
        let p = observation_probability(&state, 3).unwrap();
        assert!((p - 0.2222).abs() < 1e-4);

        let state = FloatVector::filled(16, float("1+i"));
        let p = observation_probability(&state, 0).unwrap();
        assert!((p - 0.0625).abs() < 1e-4);

        let ket = FloatVector::from_text(["3-4i", "7+2i"]);
        assert_eq!(observation_probability(&ket, 0).unwrap(), 25.0 / 78.0);
        assert_eq!(observation_probability(&ket, 1).unwrap(), 53.0 / 78.0);
    }

    #[test]
    fn test_averager_matrix_computes_mean() {
        let v = FloatVector::from_values([5.0, 4.0, 6.0, 9.0]);
        let averaged = averager_matrix(4).multiply_vector(&v).unwrap();
        assert_eq!(averaged, FloatVector::filled(4, FloatScalar::from_real(6.0)));
    }

    #[test]
    fn test_inverse_about_mean() {
        let v = FloatVector::from_values([53.0, 38.0, 17.0, 23.0, 79.0]);
        let inverted = inverse_about_mean(&v);
        assert_eq!(inverted, FloatVector::from_values([31.0, 46.0, 67.0, 61.0, 5.0]));
    }

    #[test]
    fn test_inverse_about_mean_matches_averager_form() {
        let v = FloatVector::from_text(["1+i", "0.5", "-2i", "3"]);
        let averaged = averager_matrix(4).multiply_vector(&v).unwrap();
        let reflected = v
            .inverse()
            .add(&averaged.multiply(FloatScalar::from_real(2.0)))
            .unwrap();

        assert!(inverse_about_mean(&v).near_equals(&reflected, 1e-12));
    }

    #[test]
    fn test_phase_inversion() {
        let v = FloatVector::from_values([1.0, 2.0, 3.0]);
        let inverted = phase_inversion(&v, &[1]).unwrap();
        assert_eq!(inverted, FloatVector::from_values([1.0, -2.0, 3.0]));
        assert_eq!(
            phase_inversion(&v, &[3]),
            Err(AlgebraError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_grover_search_amplifies_marked_state() {
        let state = hadamard_matrix(3)
            .unwrap()
            .multiply_vector(&zero_state(3).unwrap())
            .unwrap();
        let iterations = optimal_iterations(state.len(), 1);
        assert_eq!(iterations, 2);

        let amplified = grover_iterations(&state, &[5], iterations).unwrap();
        let probabilities = measurement_probabilities(&amplified);

        assert!(probabilities[5] > 0.9);
        assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_grover_zero_iterations_is_identity() {
        let state = FloatVector::from_values([0.5, 0.5, 0.5, 0.5]);
        assert_eq!(grover_iterations(&state, &[0], 0).unwrap(), state);
    }

    #[test]
    fn test_measure_with_seeded_generator() {
        let state = FloatVector::from_values([FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0usize; 4];
        for _ in 0..1000 {
            counts[measure_with(&state, &mut rng).unwrap()] += 1;
        }

        assert_eq!(counts[1] + counts[2], 0);
        assert!(counts[0] > 400 && counts[3] > 400);
    }

    #[test]
    fn test_measure_is_reproducible_for_a_seed() {
        let state = hadamard_matrix(2)
            .unwrap()
            .multiply_vector(&zero_state(2).unwrap())
            .unwrap();
        let config = EngineConfig::with_seed(7);

        let mut first = config.build_rng();
        let mut second = config.build_rng();
        let a: Vec<usize> = (0..20).map(|_| measure_with(&state, &mut first).unwrap()).collect();
        let b: Vec<usize> = (0..20).map(|_| measure_with(&state, &mut second).unwrap()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_measure_basis_state() {
        let state = FloatVector::from_values([0.0, 1.0]);
        for _ in 0..10 {
            assert_eq!(measure(&state).unwrap(), 1);
        }
    }

    #[test]
    fn test_measure_empty_state() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            measure_with(&FloatVector::default(), &mut rng),
            Err(AlgebraError::EmptyState)
        );
    }

    #[test]
    fn test_powers_of_modulo() {
        let powers = powers_of_modulo(7, 15, 6).unwrap();
        assert_eq!(powers, IntVector::from_values([1, 7, 4, 13, 1, 7]));

        let powers = powers_of_modulo(-2, 5, 4).unwrap();
        assert_eq!(powers, IntVector::from_values([1, 3, 4, 2]));

        assert!(powers_of_modulo(2, 15, 0).unwrap().is_empty());
        assert_eq!(powers_of_modulo(2, -3, 4), Err(AlgebraError::InvalidModulus(-3)));
    }
}
