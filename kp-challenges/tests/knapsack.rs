use kp_challenges::knapsack::*;
use kp_challenges::KnapsackError;
use rand::{rngs::SmallRng, SeedableRng};

fn sample_challenge() -> Challenge {
    Challenge::new(3, 5, vec![2, 3, 4], vec![3, 4, 5]).unwrap()
}

#[test]
fn test_new_rejects_length_mismatch() {
    assert!(matches!(
        Challenge::new(3, 5, vec![2, 3], vec![3, 4, 5]),
        Err(KnapsackError::InvalidInstance(_))
    ));
    assert!(matches!(
        Challenge::new(2, 5, vec![2, 3], vec![3, 4, 5]),
        Err(KnapsackError::InvalidInstance(_))
    ));
}

#[test]
fn test_validate_catches_mutated_instance() {
    let mut challenge = sample_challenge();
    challenge.values.pop();
    assert!(matches!(
        challenge.validate(),
        Err(KnapsackError::InvalidInstance(_))
    ));
}

#[test]
fn test_empty_instance_is_valid() {
    let challenge = Challenge::new(0, 10, vec![], vec![]).unwrap();
    assert_eq!(challenge.num_items, 0);
}

#[test]
fn test_parse_instance() {
    let challenge = parse_instance("3 5\n2 3 4\n3 4 5\n").unwrap();
    assert_eq!(challenge, sample_challenge());
}

#[test]
fn test_parse_instance_skips_blank_lines() {
    let challenge = parse_instance("\n3   5\n\n 2 3 4 \n3 4 5").unwrap();
    assert_eq!(challenge, sample_challenge());
}

#[test]
fn test_parse_empty_instance() {
    let challenge = parse_instance("0 7\n").unwrap();
    assert_eq!(challenge.num_items, 0);
    assert_eq!(challenge.max_weight, 7);
    assert!(challenge.weights.is_empty());
}

#[test]
fn test_parse_rejects_negative_numbers() {
    assert!(matches!(
        parse_instance("-1 5\n\n"),
        Err(KnapsackError::InvalidInstance(_))
    ));
    assert!(matches!(
        parse_instance("2 -5\n1 1\n1 1\n"),
        Err(KnapsackError::InvalidInstance(_))
    ));
    assert!(matches!(
        parse_instance("2 5\n1 -1\n1 1\n"),
        Err(KnapsackError::InvalidInstance(_))
    ));
    assert!(matches!(
        parse_instance("2 5\n1 1\n-3 1\n"),
        Err(KnapsackError::InvalidInstance(_))
    ));
}

#[test]
fn test_parse_rejects_count_mismatch() {
    assert!(matches!(
        parse_instance("3 5\n2 3\n3 4 5\n"),
        Err(KnapsackError::InvalidInstance(_))
    ));
    assert!(matches!(
        parse_instance("2 5\n2 3\n"),
        Err(KnapsackError::InvalidInstance(_))
    ));
}

#[test]
fn test_parse_reports_line_of_bad_token() {
    assert_eq!(
        parse_instance("2 5\n2 x\n3 4\n"),
        Err(KnapsackError::Parse {
            line: 2,
            message: "'x' is not an integer".to_string(),
        })
    );
    assert!(matches!(
        parse_instance(""),
        Err(KnapsackError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_instance("1 5 7\n1\n1\n"),
        Err(KnapsackError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_instance("1 5\n1\n1\n1\n"),
        Err(KnapsackError::Parse { line: 4, .. })
    ));
}

#[test]
fn test_to_text_is_parseable() {
    let challenge = sample_challenge();
    assert_eq!(challenge.to_text(), "3 5\n2 3 4\n3 4 5\n");
    assert_eq!(parse_instance(&challenge.to_text()).unwrap(), challenge);
}

#[test]
fn test_from_json() {
    let challenge =
        Challenge::from_json(r#"{"num_items":3,"max_weight":5,"weights":[2,3,4],"values":[3,4,5]}"#)
            .unwrap();
    assert_eq!(challenge, sample_challenge());

    assert!(matches!(
        Challenge::from_json(r#"{"num_items":1,"max_weight":5,"weights":[-2],"values":[3]}"#),
        Err(KnapsackError::InvalidInstance(_))
    ));
    assert!(matches!(
        Challenge::from_json(r#"{"num_items":2,"max_weight":5,"weights":[2],"values":[3]}"#),
        Err(KnapsackError::InvalidInstance(_))
    ));
}

#[test]
fn test_generate_instance_is_deterministic() {
    let settings = GeneratorSettings::default();
    let a = Challenge::generate_instance(&mut SmallRng::seed_from_u64(42), &settings).unwrap();
    let b = Challenge::generate_instance(&mut SmallRng::seed_from_u64(42), &settings).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_instance_respects_ranges() {
    let settings = GeneratorSettings {
        num_items: 50,
        min_item_weight: 5,
        max_item_weight: 40,
        min_item_value: 1,
        max_item_value: 30,
        min_capacity_percent: 30,
        max_capacity_percent: 70,
    };
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let challenge = Challenge::generate_instance(&mut rng, &settings).unwrap();
        assert_eq!(challenge.num_items, 50);
        assert!(challenge.weights.iter().all(|w| (5..=40).contains(w)));
        assert!(challenge.values.iter().all(|v| (1..=30).contains(v)));

        let total_weight = challenge.weights.iter().map(|&w| w as u64).sum::<u64>();
        let capacity = challenge.max_weight as u64;
        assert!(capacity >= total_weight * 30 / 100);
        assert!(capacity <= total_weight * 70 / 100);
    }
}

#[test]
fn test_generate_instance_rejects_bad_settings() {
    let mut rng = SmallRng::seed_from_u64(0);
    let bad = [
        GeneratorSettings {
            num_items: 0,
            ..Default::default()
        },
        GeneratorSettings {
            min_item_weight: 0,
            ..Default::default()
        },
        GeneratorSettings {
            min_item_weight: 10,
            max_item_weight: 5,
            ..Default::default()
        },
        GeneratorSettings {
            min_item_value: 10,
            max_item_value: 5,
            ..Default::default()
        },
        GeneratorSettings {
            min_capacity_percent: 80,
            max_capacity_percent: 20,
            ..Default::default()
        },
    ];
    for settings in &bad {
        assert!(matches!(
            Challenge::generate_instance(&mut rng, settings),
            Err(KnapsackError::InvalidSettings(_))
        ));
    }
}

#[test]
fn test_verify_solution() {
    let challenge = sample_challenge();
    let solution = Solution {
        items: vec![0, 1],
        total_value: 7,
    };
    assert_eq!(challenge.verify_solution(&solution), Ok(7));
    assert_eq!(challenge.verify_solution(&Solution::new()), Ok(0));
}

#[test]
fn test_verify_solution_rejects_invalid() {
    let challenge = sample_challenge();
    let invalid = [
        Solution {
            items: vec![0, 0],
            total_value: 6,
        },
        Solution {
            items: vec![3],
            total_value: 0,
        },
        Solution {
            items: vec![1, 2],
            total_value: 9,
        },
        Solution {
            items: vec![0, 1],
            total_value: 8,
        },
    ];
    for solution in &invalid {
        assert!(matches!(
            challenge.verify_solution(solution),
            Err(KnapsackError::InvalidSolution(_))
        ));
    }
}

#[test]
fn test_calculate_totals() {
    let challenge = sample_challenge();
    assert_eq!(challenge.calculate_total_weight(&[0, 2]), Ok(6));
    assert_eq!(challenge.calculate_total_value(&[0, 2]), Ok(8));
    assert_eq!(challenge.calculate_total_value(&[]), Ok(0));
    assert_eq!(
        challenge.calculate_total_weight(&[1, 3]),
        Err(KnapsackError::InvalidSolution(
            "Item (3) is out of bounds".to_string()
        ))
    );
    assert!(challenge.calculate_total_value(&[usize::MAX]).is_err());
}

#[test]
fn test_solution_try_from_map() {
    let value = serde_json::json!({"items": [0, 2], "total_value": 8});
    let solution = Solution::try_from(value.as_object().unwrap().clone()).unwrap();
    assert_eq!(solution.items, vec![0, 2]);
    assert_eq!(solution.total_value, 8);
}
