use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::drills::{DRILLS, Drill, FALLBACK_DRILL, explanation};
use crate::feasibility::FeasibilityChecker;
use crate::generator::ProblemGenerator;
use crate::operation::Operation;

#[test]
fn test_every_drill_is_feasible() {
    let checker = FeasibilityChecker::new();
    let mut rng = StdRng::seed_from_u64(5);
    for drill in &DRILLS {
        let config = drill.config();
        assert!(
            checker.check_config(&config, &mut rng).is_ok(),
            "drill {} rejected",
            drill.id
        );
        assert_eq!(config.count, 10);
    }
}

#[test]
fn test_drill_ids_are_unique() {
    for (i, drill) in DRILLS.iter().enumerate() {
        assert!(DRILLS.iter().skip(i + 1).all(|other| other.id != drill.id));
    }
}

#[test]
fn test_lookup_known_and_unknown() {
    let drill = Drill::lookup("mult11");
    assert_eq!(drill.operation, Operation::Mul);
    assert_eq!(drill.b_fixed, Some(11));

    let fallback = Drill::lookup("juggling");
    assert_eq!(fallback, &FALLBACK_DRILL);
    assert_eq!(fallback.a_digits, Some(2));
    assert_eq!(fallback.b_digits, Some(1));
    assert_eq!(fallback.operation, Operation::Add);
}

#[test]
fn test_explanations() {
    assert!(explanation("div5").contains("double the number"));
    assert_eq!(explanation("nope"), "No explanation found for this drill.");
}

#[test]
fn test_div5_drill_problems() {
    let config = Drill::lookup("div5").config();
    let generator = ProblemGenerator::new();
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..50 {
        let problem = generator.generate_one(&config, &mut rng);
        assert_eq!(problem.operand_b, 5);
        assert_eq!(problem.operand_a, 5 * problem.result);
        assert!((2..=20).contains(&problem.result));
    }
}
