use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::feasibility::FeasibilityChecker;
use crate::generator::{ConfigError, ProblemConfig, ProblemGenerator};
use crate::operation::Operation;

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_division_divisor_wider_than_dividend() {
    let checker = FeasibilityChecker::new();
    assert!(!checker.is_division_feasible(1, 3, &mut rng()));
    assert!(!checker.is_division_feasible(2, 3, &mut rng()));
}

#[test]
fn test_division_single_digits() {
    // 4 ÷ 2 exists
    assert!(FeasibilityChecker::new().is_division_feasible(1, 1, &mut rng()));
}

#[test]
fn test_division_equal_digit_counts() {
    let checker = FeasibilityChecker::new();
    for digits in 1..=8 {
        assert!(
            checker.is_division_feasible(digits, digits, &mut rng()),
            "{} digits",
            digits
        );
    }
}

#[test]
fn test_division_large_divisor_range_uses_sampling() {
    // 10 million candidate divisors, far beyond the exhaustive limit
    let checker = FeasibilityChecker::new();
    assert!(checker.is_division_feasible(8, 7, &mut rng()));
    assert!(!checker.is_division_feasible(7, 8, &mut rng()));
}

#[test]
fn test_division_sampled_range_detects_feasible() {
    // a tiny exhaustive limit forces the sampling path
    let checker = FeasibilityChecker::with_limits(10, 500);
    assert!(checker.division_feasible_in((100_000, 999_999), (10_000, 99_999), &mut rng()));
}

#[test]
fn test_division_excludes_divisor_one() {
    let checker = FeasibilityChecker::new();
    // only b = 1 would give 2 = 1 × 2
    assert!(!checker.division_feasible_in((2, 3), (1, 1), &mut rng()));
    assert!(checker.division_feasible_in((4, 4), (1, 2), &mut rng()));
}

#[test]
fn test_division_requires_quotient_of_two() {
    // 9 ÷ 9 = 1 does not count
    let checker = FeasibilityChecker::new();
    assert!(!checker.division_feasible_in((5, 9), (5, 9), &mut rng()));
}

#[test]
fn test_subtraction_feasibility() {
    let checker = FeasibilityChecker::new();
    assert!(!checker.is_subtraction_feasible(1, 3));
    assert!(checker.is_subtraction_feasible(1, 1));
    assert!(checker.is_subtraction_feasible(3, 2));
    assert!(checker.is_subtraction_feasible(2, 2));
}

#[test]
fn test_check_feasible_by_operation() {
    let checker = FeasibilityChecker::new();
    let mut rng = rng();
    assert!(checker.check_feasible(Operation::Add, 1, 8, &mut rng));
    assert!(checker.check_feasible(Operation::Mul, 1, 8, &mut rng));
    assert!(!checker.check_feasible(Operation::Sub, 1, 3, &mut rng));
    assert!(!checker.check_feasible(Operation::Div, 1, 3, &mut rng));
    assert!(checker.check_feasible(Operation::Div, 3, 1, &mut rng));
}

#[test]
fn test_check_config_accepts_fixed_divisor() {
    let config = ProblemConfig::new(Operation::Div, 3, 1, 10).with_fixed_b(5);
    assert!(FeasibilityChecker::new().check_config(&config, &mut rng()).is_ok());
}

#[test]
fn test_check_config_rejects_invalid_before_feasibility() {
    let config = ProblemConfig::new(Operation::Sub, 1, 3, 10);
    let result = FeasibilityChecker::new().check_config(&config, &mut rng());
    assert!(matches!(result, Err(ConfigError::InvalidConfiguration(_))));
}

#[test]
fn test_check_config_rejects_infeasible_fixed_operands() {
    let checker = FeasibilityChecker::new();
    let config = ProblemConfig::new(Operation::Sub, 1, 1, 10).with_fixed_b(9);
    let result = checker.check_config(&config, &mut rng());
    assert!(matches!(
        result,
        Err(ConfigError::InfeasibleConfiguration {
            operation: Operation::Sub,
            ..
        })
    ));

    let config = ProblemConfig::new(Operation::Sub, 1, 1, 10).with_fixed_a(1);
    assert!(checker.check_config(&config, &mut rng()).is_err());

    let config = ProblemConfig::new(Operation::Sub, 2, 1, 10).with_fixed_b(9);
    assert!(checker.check_config(&config, &mut rng()).is_ok());
}

#[test]
fn test_subtraction_zero_subtrahend_is_feasible() {
    let checker = FeasibilityChecker::new();
    assert!(checker.subtraction_feasible_in((1, 1), (0, 0)));
    assert!(!checker.subtraction_feasible_in((1, 1), (1, 1)));
    assert!(!checker.subtraction_feasible_in((0, 0), (0, 0)));

    let config = ProblemConfig::new(Operation::Sub, 1, 1, 1)
        .with_fixed_a(1)
        .with_fixed_b(0);
    assert!(checker.check_config(&config, &mut rng()).is_ok());
    let problem = ProblemGenerator::new().generate_one(&config, &mut rng());
    assert_eq!((problem.operand_a, problem.operand_b, problem.result), (1, 0, 1));
}

#[test]
fn test_check_config_division_without_digit_counts() {
    let config = ProblemConfig {
        a_digits: None,
        b_digits: None,
        a_fixed: None,
        b_fixed: None,
        operation: Operation::Div,
        count: 5,
    };
    assert!(FeasibilityChecker::new().check_config(&config, &mut rng()).is_ok());
}
